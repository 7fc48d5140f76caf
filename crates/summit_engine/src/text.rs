use scraper::{ElementRef, Selector};
use summit_logging::summit_trace;

/// Visible text of an element: entities decoded by the parser, whitespace
/// runs collapsed to a single space, ends trimmed.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Text of the first `selector` match under `scope`, or `""` when there is none.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &Selector, field: &str) -> String {
    match scope.select(selector).next() {
        Some(element) => element_text(element),
        None => {
            summit_trace!("no {} element; defaulting to empty", field);
            String::new()
        }
    }
}

pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
