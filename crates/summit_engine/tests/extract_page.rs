mod common;

use common::{init_logging, listing_page, RowFixture};
use pretty_assertions::assert_eq;
use summit_core::{MediaLinks, Talk};
use summit_engine::{
    extract, extract_bytes, ExtractSettings, ParseError, SummitPageExtractor, TalkExtractor,
};

#[test]
fn single_row_scenario() {
    init_logging();
    let row = RowFixture {
        title: Some("Chronic Migraine 101"),
        presenter_cell: Some("<h6>Dr. Jane Doe</h6>"),
        anchors: &[("Audio: Full Length", "https://x/a.mp3")],
        ..Default::default()
    };
    let set = extract(&listing_page(None, &[row.html()])).unwrap();

    let mut expected = Talk::new("Chronic Migraine 101");
    expected.presenter_name = "Dr. Jane Doe".into();
    expected.media_links.audio_full = "https://x/a.mp3".into();
    assert_eq!(set.talks, vec![expected]);
    assert_eq!(set.logo_url, "");
}

#[test]
fn full_row_populates_every_field() {
    init_logging();
    let row = RowFixture {
        title: Some("  The   Gut-Brain &amp; Migraine  "),
        presenter_cell: Some(
            "<h6> Dr. A. Smith </h6><p>Neurologist</p><span>Mayo&nbsp;Clinic</span>",
        ),
        profile_img: Some(
            r#"<img src="small.jpg" srcset="a.jpg 100w, b.jpg 400w, c.jpg 250w">"#,
        ),
        questions_attr: Some(
            "&lt;ul&gt;&lt;li&gt;What is it?&lt;/li&gt;&lt;li&gt;Diet &amp;amp; sleep?&lt;/li&gt;&lt;/ul&gt;",
        ),
        anchors: &[
            ("Transcript", "https://x/t.pdf"),
            ("Audio: 30-minute Highlights", "https://x/a30.mp3"),
            ("Audio: Full Length Episode", "https://x/a.mp3"),
            ("Video: 30-minute Highlights", "https://x/v30.mp4"),
            ("Video: Full Length Episode", "https://x/v.mp4"),
        ],
    };
    let set = extract(&listing_page(None, &[row.html()])).unwrap();
    let talk = &set.talks[0];

    assert_eq!(talk.title, "The Gut-Brain & Migraine");
    assert_eq!(talk.presenter_name, "Dr. A. Smith");
    assert_eq!(talk.presenter_role, "Neurologist");
    assert_eq!(talk.institution, "Mayo Clinic");
    assert_eq!(talk.presenter_image, "b.jpg");
    assert_eq!(talk.key_questions, vec!["What is it?", "Diet & sleep?"]);
    assert_eq!(
        talk.media_links,
        MediaLinks {
            transcript: "https://x/t.pdf".into(),
            audio_30min: "https://x/a30.mp3".into(),
            audio_full: "https://x/a.mp3".into(),
            video_30min: "https://x/v30.mp4".into(),
            video_full: "https://x/v.mp4".into(),
        }
    );
}

#[test]
fn rows_without_title_are_dropped_and_order_is_kept() {
    init_logging();
    let rows = vec![
        RowFixture {
            title: Some("First"),
            presenter_cell: Some("<h6>A</h6>"),
            ..Default::default()
        }
        .html(),
        RowFixture {
            presenter_cell: Some("<h6>Nobody</h6>"),
            ..Default::default()
        }
        .html(),
        RowFixture {
            title: Some("   "),
            presenter_cell: Some("<h6>Blank</h6>"),
            ..Default::default()
        }
        .html(),
        RowFixture {
            title: Some("Last"),
            presenter_cell: Some("<h6>B</h6>"),
            ..Default::default()
        }
        .html(),
    ];
    let html = listing_page(None, &rows);
    let set = extract(&html).unwrap();

    let titles: Vec<&str> = set.talks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Last"]);
    assert!(set.talks.len() <= html.matches(r#"class="row-talk""#).count());
}

#[test]
fn row_without_presenter_cell_keeps_empty_presenter() {
    init_logging();
    let row = RowFixture {
        title: Some("Short Row"),
        ..Default::default()
    };
    let set = extract(&listing_page(None, &[row.html()])).unwrap();

    assert_eq!(set.talks, vec![Talk::new("Short Row")]);
}

#[test]
fn defaults_are_complete_when_sub_elements_are_missing() {
    init_logging();
    let row = RowFixture {
        title: Some("Bare"),
        presenter_cell: Some(""),
        profile_img: Some("<img>"),
        ..Default::default()
    };
    let set = extract(&listing_page(None, &[row.html()])).unwrap();
    let talk = &set.talks[0];

    assert_eq!(talk.presenter_name, "");
    assert_eq!(talk.presenter_role, "");
    assert_eq!(talk.institution, "");
    assert_eq!(talk.presenter_image, "");
    assert!(talk.key_questions.is_empty());
    assert!(talk.media_links.is_empty());
}

#[test]
fn unknown_labels_are_ignored_and_duplicates_keep_the_last() {
    init_logging();
    let row = RowFixture {
        title: Some("Links"),
        presenter_cell: Some("<h6>X</h6>"),
        anchors: &[
            ("Transcript", "https://x/first.pdf"),
            ("Something else", "https://x/other"),
            ("Transcript", "https://x/second.pdf"),
        ],
        ..Default::default()
    };
    let set = extract(&listing_page(None, &[row.html()])).unwrap();
    let links = &set.talks[0].media_links;

    assert_eq!(links.transcript, "https://x/second.pdf");
    assert_eq!(links.audio_full, "");
    assert_eq!(links.video_full, "");
}

#[test]
fn single_srcset_candidate_and_plain_src() {
    init_logging();
    let rows = vec![
        RowFixture {
            title: Some("One Candidate"),
            presenter_cell: Some("<h6>X</h6>"),
            profile_img: Some(r#"<img src="plain.jpg" srcset="only.jpg 300w">"#),
            ..Default::default()
        }
        .html(),
        RowFixture {
            title: Some("Plain Src"),
            presenter_cell: Some("<h6>Y</h6>"),
            profile_img: Some(r#"<img src="plain.jpg">"#),
            ..Default::default()
        }
        .html(),
    ];
    let set = extract(&listing_page(None, &rows)).unwrap();

    assert_eq!(set.talks[0].presenter_image, "only.jpg");
    assert_eq!(set.talks[1].presenter_image, "plain.jpg");
}

#[test]
fn key_questions_accept_raw_markup_in_attribute() {
    init_logging();
    let row = r#"<tr class="row-talk"><td><h4 class="title-talk"><a>Raw</a></h4><button class="key-questions-toggle" data-bs-content='<ol><li>One</li><li>Two</li></ol>'>Q</button></td></tr>"#
        .to_string();
    let set = extract(&listing_page(None, &[row])).unwrap();

    assert_eq!(set.talks[0].key_questions, vec!["One", "Two"]);
}

#[test]
fn site_icon_is_resolved_against_origin() {
    init_logging();
    let row = RowFixture {
        title: Some("T"),
        ..Default::default()
    }
    .html();

    let set = extract(&listing_page(Some("/wp-content/icon-192.png"), &[row.clone()])).unwrap();
    assert_eq!(
        set.logo_url,
        "https://migraineworldsummit.com/wp-content/icon-192.png"
    );

    let extractor = SummitPageExtractor::new(ExtractSettings {
        site_origin: "https://summit.example".into(),
    })
    .unwrap();
    let set = extractor
        .extract(&listing_page(Some("icon.png"), &[row.clone()]))
        .unwrap();
    assert_eq!(set.logo_url, "https://summit.example/icon.png");

    let set = extract(&listing_page(Some("https://cdn.example/icon.png"), &[row])).unwrap();
    assert_eq!(set.logo_url, "https://cdn.example/icon.png");
}

#[test]
fn missing_icon_does_not_fail_extraction() {
    init_logging();
    let row = RowFixture {
        title: Some("T"),
        ..Default::default()
    }
    .html();
    let set = extract(&listing_page(None, &[row])).unwrap();

    assert_eq!(set.logo_url, "");
    assert_eq!(set.talks.len(), 1);
}

#[test]
fn empty_input_yields_empty_set() {
    init_logging();
    let set = extract("  \n ").unwrap();
    assert!(set.is_empty());
    assert_eq!(set.logo_url, "");
}

#[test]
fn page_without_rows_yields_empty_set() {
    init_logging();
    let set = extract("<html><body><p>Please log in</p></body></html>").unwrap();
    assert!(set.is_empty());
}

#[test]
fn plain_text_is_a_parse_error() {
    init_logging();
    assert_eq!(
        extract("this is not a web page").unwrap_err(),
        ParseError::NotMarkup
    );
}

#[test]
fn bytes_are_decoded_before_extraction() {
    init_logging();
    let row = RowFixture {
        title: Some("Caf\u{e9} Talk"),
        ..Default::default()
    }
    .html();
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(listing_page(None, &[row]).as_bytes());

    let set = extract_bytes(&bytes).unwrap();
    assert_eq!(set.talks[0].title, "Caf\u{e9} Talk");
}

#[test]
fn page_declaring_utf16_is_read_as_utf8() {
    init_logging();
    let bytes = br#"<html><head><meta charset="utf-16"></head><body><table><tr class="row-talk"><td><h4 class="title-talk"><a>Chronic Migraine 101</a></h4></td></tr></table></body></html>"#;

    let set = extract_bytes(bytes).unwrap();
    assert_eq!(set.talks, vec![Talk::new("Chronic Migraine 101")]);
}

#[test]
fn undecodable_bytes_are_a_parse_error() {
    init_logging();
    let bytes = b"<meta charset=\"utf-8\"><table>\xff\xff</table>";
    assert!(matches!(extract_bytes(bytes), Err(ParseError::Decode(_))));
}
