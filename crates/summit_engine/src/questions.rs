use scraper::{Html, Selector};

use crate::text::element_text;

/// Parse the key-questions fragment carried in the toggle button's attribute.
///
/// This is a second parse, independent of the page document: the fragment
/// only exists as attribute text until it is parsed here. Items come back in
/// document order.
pub fn parse_key_questions(fragment: &str) -> Vec<String> {
    let Some(item) = Selector::parse("li").ok() else {
        return Vec::new();
    };
    let doc = Html::parse_fragment(fragment);
    doc.select(&item).map(element_text).collect()
}

#[cfg(test)]
mod tests {
    use super::parse_key_questions;

    #[test]
    fn items_in_document_order() {
        let fragment = "<ul><li>What triggers attacks?</li><li> Is it <em>genetic</em>? </li></ul>";
        assert_eq!(
            parse_key_questions(fragment),
            vec!["What triggers attacks?", "Is it genetic?"]
        );
    }

    #[test]
    fn fragment_without_list_is_empty() {
        assert!(parse_key_questions("<p>No questions yet</p>").is_empty());
        assert!(parse_key_questions("").is_empty());
    }
}
