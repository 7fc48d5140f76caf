use chrono::{DateTime, Utc};

use crate::{FeedMeta, MetaError, Talk, TalkSet};

pub const ENCLOSURE_MIME_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enclosure {
    pub url: String,
    /// Always 0; the file size is not known at render time.
    pub length: u64,
    pub mime_type: &'static str,
}

/// One feed entry synthesized from a talk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub enclosure: Option<Enclosure>,
    pub guid: String,
    /// Not sourced from the talk: every episode carries the render time.
    pub published_at: DateTime<Utc>,
}

impl Episode {
    pub fn from_talk(talk: &Talk, now: DateTime<Utc>) -> Self {
        let audio = &talk.media_links.audio_full;
        Self {
            title: talk.title.clone(),
            description: compose_description(talk),
            image: non_empty(&talk.presenter_image),
            enclosure: non_empty(audio).map(|url| Enclosure {
                url,
                length: 0,
                mime_type: ENCLOSURE_MIME_TYPE,
            }),
            guid: talk.feed_guid().to_string(),
            published_at: now,
        }
    }
}

/// Channel plus episodes, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub description: String,
    pub link: String,
    pub language: String,
    pub published_at: DateTime<Utc>,
    pub last_build_date: DateTime<Utc>,
    /// Feed artwork. `None` when the talk set has no logo; some podcast
    /// directories refuse feeds without artwork.
    pub image_url: Option<String>,
    pub episodes: Vec<Episode>,
}

/// Render `talk_set` using the current time for every timestamp.
pub fn render(talk_set: &TalkSet, meta: &FeedMeta) -> Result<FeedDocument, MetaError> {
    render_at(talk_set, meta, Utc::now())
}

/// Render with an explicit clock. Metadata is validated before any talk is touched.
pub fn render_at(
    talk_set: &TalkSet,
    meta: &FeedMeta,
    now: DateTime<Utc>,
) -> Result<FeedDocument, MetaError> {
    meta.validate()?;

    let episodes = talk_set
        .talks
        .iter()
        .map(|talk| Episode::from_talk(talk, now))
        .collect();

    Ok(FeedDocument {
        title: meta.title.clone(),
        description: meta.description.clone(),
        link: meta.link.trim().to_string(),
        language: meta.language.clone(),
        published_at: meta.published_at.unwrap_or(now),
        last_build_date: now,
        image_url: non_empty(&talk_set.logo_url),
        episodes,
    })
}

/// Plain-text episode description.
///
/// The presenter line is always present; role and institution lines only when
/// set; the key questions section only when there is at least one question.
pub fn compose_description(talk: &Talk) -> String {
    let mut text = format!("Presenter: {}\n", talk.presenter_name);
    if !talk.presenter_role.is_empty() {
        text.push_str(&format!("Role: {}\n", talk.presenter_role));
    }
    if !talk.institution.is_empty() {
        text.push_str(&format!("Institution: {}\n", talk.institution));
    }
    if !talk.key_questions.is_empty() {
        text.push_str("\nKey Questions:\n");
        let bullets: Vec<String> = talk
            .key_questions
            .iter()
            .map(|q| format!("- {q}"))
            .collect();
        text.push_str(&bullets.join("\n"));
    }
    text
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
