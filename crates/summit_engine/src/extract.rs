use scraper::{Html, Selector};
use summit_core::TalkSet;
use summit_logging::{summit_debug, summit_info, summit_warn};
use url::Url;

use crate::decode::{decode_page, DecodeError};
use crate::schema::RowSchema;

pub const DEFAULT_SITE_ORIGIN: &str = "https://migraineworldsummit.com";

const SITE_ICON: &str = "link[rel='icon'][sizes='192x192']";
const SKELETON_TAGS: [&str; 3] = ["html", "head", "body"];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("input does not contain any markup")]
    NotMarkup,
    #[error("page could not be decoded: {0}")]
    Decode(#[from] DecodeError),
    #[error("invalid selector {0}")]
    Selector(String),
}

#[derive(Debug, Clone)]
pub struct ExtractSettings {
    /// Canonical origin prepended to a relative site icon.
    pub site_origin: String,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
        }
    }
}

pub trait TalkExtractor: Send + Sync {
    fn extract(&self, html: &str) -> Result<TalkSet, ParseError>;
}

/// Extractor for the summit's rendered talk listing.
///
/// Rows are mapped independently and in document order; a row whose title
/// cannot be found is left out without affecting the others. Missing
/// sub-elements become empty strings or empty lists.
#[derive(Debug)]
pub struct SummitPageExtractor {
    settings: ExtractSettings,
    schema: RowSchema,
    site_icon: Selector,
    any_element: Selector,
}

impl SummitPageExtractor {
    pub fn new(settings: ExtractSettings) -> Result<Self, ParseError> {
        Ok(Self {
            settings,
            schema: RowSchema::new()?,
            site_icon: Selector::parse(SITE_ICON)
                .map_err(|err| ParseError::Selector(format!("{SITE_ICON}: {err:?}")))?,
            any_element: Selector::parse("*")
                .map_err(|err| ParseError::Selector(format!("*: {err:?}")))?,
        })
    }

    fn logo_url(&self, doc: &Html) -> String {
        let href = doc
            .select(&self.site_icon)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty());
        match href {
            Some(href) => {
                let url = absolutize(href, &self.settings.site_origin);
                summit_info!("Found site icon: {}", url);
                url
            }
            None => {
                summit_warn!("No site icon found; feed artwork will be empty");
                String::new()
            }
        }
    }

    /// Anything beyond the html/head/body skeleton the parser always builds.
    fn has_markup(&self, doc: &Html, raw: &str) -> bool {
        raw.trim_start().starts_with('<')
            || doc
                .select(&self.any_element)
                .any(|el| !SKELETON_TAGS.iter().any(|tag| *tag == el.value().name()))
    }
}

impl TalkExtractor for SummitPageExtractor {
    fn extract(&self, html: &str) -> Result<TalkSet, ParseError> {
        if html.trim().is_empty() {
            summit_warn!("Empty page; no talks extracted");
            return Ok(TalkSet::default());
        }

        let doc = Html::parse_document(html);
        if !self.has_markup(&doc, html) {
            return Err(ParseError::NotMarkup);
        }
        if !doc.errors.is_empty() {
            summit_debug!("Parser recovered from {} markup errors", doc.errors.len());
        }

        let logo_url = self.logo_url(&doc);
        let rows: Vec<_> = doc.select(self.schema.row_selector()).collect();
        summit_info!("Found {} talk rows", rows.len());

        let talks: Vec<_> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| self.schema.map_row(row, index))
            .inspect(|talk| {
                summit_debug!("Found talk: {} by {}", talk.title, talk.presenter_name)
            })
            .collect();
        summit_info!("Extracted {} talks", talks.len());

        Ok(TalkSet::new(logo_url, talks))
    }
}

/// Extract with default settings.
pub fn extract(html: &str) -> Result<TalkSet, ParseError> {
    SummitPageExtractor::new(ExtractSettings::default())?.extract(html)
}

/// Decode raw page bytes, then extract with default settings.
pub fn extract_bytes(bytes: &[u8]) -> Result<TalkSet, ParseError> {
    let html = decode_page(bytes)?;
    extract(&html)
}

fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with("http") {
        return href.to_string();
    }
    match Url::parse(origin).and_then(|base| base.join(href)) {
        Ok(url) => url.into(),
        Err(err) => {
            summit_warn!("Could not resolve icon {} against {}: {}", href, origin, err);
            format!("{}{}", origin.trim_end_matches('/'), href)
        }
    }
}
