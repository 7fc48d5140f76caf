use serde::{Deserialize, Serialize};

/// One of the five fixed download categories a media anchor can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Transcript,
    Audio30Min,
    AudioFull,
    Video30Min,
    VideoFull,
}

impl MediaKind {
    /// Classification order; the first pattern contained in a label wins.
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Transcript,
        MediaKind::Audio30Min,
        MediaKind::AudioFull,
        MediaKind::Video30Min,
        MediaKind::VideoFull,
    ];

    /// Case-sensitive label fragment identifying this kind.
    pub fn label_pattern(self) -> &'static str {
        match self {
            MediaKind::Transcript => "Transcript",
            MediaKind::Audio30Min => "Audio: 30-minute",
            MediaKind::AudioFull => "Audio: Full Length",
            MediaKind::Video30Min => "Video: 30-minute",
            MediaKind::VideoFull => "Video: Full Length",
        }
    }

    /// JSON key used for this kind in `media_links`.
    pub fn key(self) -> &'static str {
        match self {
            MediaKind::Transcript => "transcript",
            MediaKind::Audio30Min => "audio_30min",
            MediaKind::AudioFull => "audio_full",
            MediaKind::Video30Min => "video_30min",
            MediaKind::VideoFull => "video_full",
        }
    }

    /// Map a visible anchor label to a kind. Labels matching nothing are `None`.
    pub fn classify(label: &str) -> Option<MediaKind> {
        Self::ALL
            .into_iter()
            .find(|kind| label.contains(kind.label_pattern()))
    }
}

/// Download links of a talk. Every key is always present; absent links are `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLinks {
    pub transcript: String,
    pub audio_30min: String,
    pub audio_full: String,
    pub video_30min: String,
    pub video_full: String,
}

impl MediaLinks {
    pub fn get(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Transcript => &self.transcript,
            MediaKind::Audio30Min => &self.audio_30min,
            MediaKind::AudioFull => &self.audio_full,
            MediaKind::Video30Min => &self.video_30min,
            MediaKind::VideoFull => &self.video_full,
        }
    }

    /// Store `url` under `kind`, replacing whatever was there.
    pub fn set(&mut self, kind: MediaKind, url: impl Into<String>) {
        let slot = match kind {
            MediaKind::Transcript => &mut self.transcript,
            MediaKind::Audio30Min => &mut self.audio_30min,
            MediaKind::AudioFull => &mut self.audio_full,
            MediaKind::Video30Min => &mut self.video_30min,
            MediaKind::VideoFull => &mut self.video_full,
        };
        *slot = url.into();
    }

    /// Fold `(label, href)` pairs in document order.
    ///
    /// Unclassified labels are dropped. When two anchors share a kind the later
    /// one wins.
    pub fn from_anchors<I, L, H>(anchors: I) -> Self
    where
        I: IntoIterator<Item = (L, H)>,
        L: AsRef<str>,
        H: Into<String>,
    {
        anchors
            .into_iter()
            .fold(Self::default(), |mut links, (label, href)| {
                if let Some(kind) = MediaKind::classify(label.as_ref()) {
                    links.set(kind, href);
                }
                links
            })
    }

    pub fn is_empty(&self) -> bool {
        MediaKind::ALL.iter().all(|kind| self.get(*kind).is_empty())
    }
}

/// One presentation extracted from the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Talk {
    pub title: String,
    pub presenter_name: String,
    pub presenter_role: String,
    pub institution: String,
    pub presenter_image: String,
    pub key_questions: Vec<String>,
    pub media_links: MediaLinks,
}

impl Talk {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Identifier used for the feed entry: the full-length audio URL, or the title.
    pub fn feed_guid(&self) -> &str {
        if self.media_links.audio_full.is_empty() {
            &self.title
        } else {
            &self.media_links.audio_full
        }
    }
}

/// All talks of one extraction run plus the feed-wide logo.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TalkSet {
    pub logo_url: String,
    pub talks: Vec<Talk>,
}

impl TalkSet {
    pub fn new(logo_url: impl Into<String>, talks: Vec<Talk>) -> Self {
        Self {
            logo_url: logo_url.into(),
            talks,
        }
    }

    pub fn len(&self) -> usize {
        self.talks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talks.is_empty()
    }
}
