//! Mapping from the listing table's markup to [`Talk`] fields.
//!
//! All knowledge of class names, cell positions and attribute names of the
//! summit listing lives here. If the site changes its table, this is the only
//! file that should need editing.

use scraper::{ElementRef, Selector};
use summit_core::{select_largest_candidate, MediaLinks, Talk};
use summit_logging::{summit_debug, summit_trace};

use crate::extract::ParseError;
use crate::questions::parse_key_questions;
use crate::text::{element_text, first_text};

/// The presenter cell is unlabelled; it follows the title and date cells.
pub const PRESENTER_CELL_INDEX: usize = 2;

const ROW: &str = "tr.row-talk";
const TITLE_HEADING: &str = "h4.title-talk";
const ANCHOR: &str = "a";
const CELL: &str = "td";
const PRESENTER_NAME: &str = "h6";
const PRESENTER_ROLE: &str = "p";
const INSTITUTION: &str = "span";
const PROFILE_CELL: &str = "td.column-profile";
const IMAGE: &str = "img";
const QUESTIONS_TOGGLE: &str = "button.key-questions-toggle";
const QUESTIONS_ATTR: &str = "data-bs-content";
const MEDIA_DROPDOWN: &str =
    "td.column-action div.download-button-dropdown-container div.download-button-dropdown";

#[derive(Debug)]
pub struct RowSchema {
    row: Selector,
    title_heading: Selector,
    anchor: Selector,
    cell: Selector,
    presenter_name: Selector,
    presenter_role: Selector,
    institution: Selector,
    profile_cell: Selector,
    image: Selector,
    questions_toggle: Selector,
    media_dropdown: Selector,
}

impl RowSchema {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            row: selector(ROW)?,
            title_heading: selector(TITLE_HEADING)?,
            anchor: selector(ANCHOR)?,
            cell: selector(CELL)?,
            presenter_name: selector(PRESENTER_NAME)?,
            presenter_role: selector(PRESENTER_ROLE)?,
            institution: selector(INSTITUTION)?,
            profile_cell: selector(PROFILE_CELL)?,
            image: selector(IMAGE)?,
            questions_toggle: selector(QUESTIONS_TOGGLE)?,
            media_dropdown: selector(MEDIA_DROPDOWN)?,
        })
    }

    /// Selector matching one talk row.
    pub fn row_selector(&self) -> &Selector {
        &self.row
    }

    /// Map one talk row. `None` when the row has no usable title.
    pub fn map_row(&self, row: ElementRef<'_>, index: usize) -> Option<Talk> {
        let Some(title) = self.title(row) else {
            summit_debug!("row {}: no title, skipping", index);
            return None;
        };

        let mut talk = Talk::new(title);
        if let Some(cell) = row.select(&self.cell).nth(PRESENTER_CELL_INDEX) {
            talk.presenter_name = first_text(cell, &self.presenter_name, "presenter name");
            talk.presenter_role = first_text(cell, &self.presenter_role, "presenter role");
            talk.institution = first_text(cell, &self.institution, "institution");
        } else {
            summit_trace!("row {}: no presenter cell", index);
        }
        talk.presenter_image = self.presenter_image(row);
        talk.key_questions = self.key_questions(row);
        talk.media_links = self.media_links(row);
        Some(talk)
    }

    fn title(&self, row: ElementRef<'_>) -> Option<String> {
        let heading = row.select(&self.title_heading).next()?;
        let link = heading.select(&self.anchor).next()?;
        let title = element_text(link);
        (!title.is_empty()).then_some(title)
    }

    fn presenter_image(&self, row: ElementRef<'_>) -> String {
        let image = row
            .select(&self.profile_cell)
            .next()
            .and_then(|cell| cell.select(&self.image).next());
        match image {
            Some(img) => select_image_url(img.value().attr("srcset"), img.value().attr("src")),
            None => {
                summit_trace!("no profile image; defaulting to empty");
                String::new()
            }
        }
    }

    fn key_questions(&self, row: ElementRef<'_>) -> Vec<String> {
        row.select(&self.questions_toggle)
            .next()
            .and_then(|toggle| toggle.value().attr(QUESTIONS_ATTR))
            .map(parse_key_questions)
            .unwrap_or_default()
    }

    fn media_links(&self, row: ElementRef<'_>) -> MediaLinks {
        let Some(dropdown) = row.select(&self.media_dropdown).next() else {
            summit_trace!("no download dropdown; media links stay empty");
            return MediaLinks::default();
        };
        MediaLinks::from_anchors(dropdown.select(&self.anchor).map(|anchor| {
            let href = anchor.value().attr("href").unwrap_or_default().trim();
            (element_text(anchor), href.to_string())
        }))
    }
}

/// Largest `srcset` candidate, then `src`, then `""`.
pub fn select_image_url(srcset: Option<&str>, src: Option<&str>) -> String {
    srcset
        .and_then(select_largest_candidate)
        .or(src)
        .map(|url| url.trim().to_string())
        .unwrap_or_default()
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|err| ParseError::Selector(format!("{css}: {err:?}")))
}
