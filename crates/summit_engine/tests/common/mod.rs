#![allow(dead_code)]

use std::sync::Once;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(summit_logging::initialize_for_tests);
}

/// Wrap talk rows in a listing page, optionally with a 192px site icon.
pub fn listing_page(icon_href: Option<&str>, rows: &[String]) -> String {
    let icon = icon_href
        .map(|href| format!(r#"<link rel="icon" href="{href}" sizes="192x192">"#))
        .unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html><head><title>2025 Summit</title>
<link rel="icon" href="/icon-32.png" sizes="32x32">
{icon}
</head><body>
<table class="talks"><tbody>
{rows}
</tbody></table>
</body></html>"#,
        rows = rows.join("\n")
    )
}

#[derive(Default)]
pub struct RowFixture<'a> {
    pub title: Option<&'a str>,
    pub presenter_cell: Option<&'a str>,
    pub profile_img: Option<&'a str>,
    pub questions_attr: Option<&'a str>,
    pub anchors: &'a [(&'a str, &'a str)],
}

impl RowFixture<'_> {
    pub fn html(&self) -> String {
        let title = self
            .title
            .map(|t| format!(r#"<h4 class="title-talk"><a href="/talk">{t}</a></h4>"#))
            .unwrap_or_default();
        let questions = self
            .questions_attr
            .map(|q| format!(r#"<button class="key-questions-toggle" data-bs-content="{q}">Key Questions</button>"#))
            .unwrap_or_default();
        let anchors: String = self
            .anchors
            .iter()
            .map(|(label, href)| format!(r#"<a class="dropdown-item" href="{href}">{label}</a>"#))
            .collect();
        let trailing = match self.presenter_cell {
            Some(cell) => format!(
                r#"<td class="column-presenter">{cell}</td>
<td class="column-profile">{img}</td>
<td class="column-action"><div class="download-button-dropdown-container"><button>Download</button><div class="download-button-dropdown">{anchors}</div></div></td>"#,
                img = self.profile_img.unwrap_or_default(),
            ),
            None => String::new(),
        };
        format!(
            r#"<tr class="row-talk"><td class="column-title">{title}{questions}</td><td class="column-date">Day 1</td>{trailing}</tr>"#
        )
    }
}
