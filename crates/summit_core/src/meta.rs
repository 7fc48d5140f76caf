use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Fixed, per-run channel metadata. Nothing here is derived from the talks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedMeta {
    pub title: String,
    pub description: String,
    pub link: String,
    pub language: String,
    /// Channel publication date; the render time is used when absent.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetaError {
    #[error("feed metadata field `{0}` is missing or empty")]
    Missing(&'static str),
    #[error("feed link is not an absolute url: {0}")]
    InvalidLink(String),
}

impl FeedMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            language: language.into(),
            published_at: None,
        }
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn validate(&self) -> Result<(), MetaError> {
        let required = [
            ("title", &self.title),
            ("description", &self.description),
            ("link", &self.link),
            ("language", &self.language),
        ];
        if let Some((field, _)) = required
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(MetaError::Missing(field));
        }
        Url::parse(self.link.trim())
            .map(|_| ())
            .map_err(|err| MetaError::InvalidLink(format!("{}: {err}", self.link)))
    }
}
