use std::borrow::Cow;

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use summit_core::{render_at, Episode, FeedDocument, FeedMeta, MetaError, TalkSet};
use summit_logging::{summit_info, summit_warn};
use thiserror::Error;

const RSS_DOCS: &str = "http://www.rssboard.org/rss-specification";
const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
const ATOM_NS: &str = "http://www.w3.org/2005/Atom";
const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("invalid feed metadata: {0}")]
    Meta(#[from] MetaError),
    #[error("xml write failed: {0}")]
    Xml(String),
}

pub trait FeedWriter: Send + Sync {
    fn write_feed(&self, doc: &FeedDocument) -> Result<String, RenderError>;
}

/// RSS 2.0 with the iTunes podcast namespace.
#[derive(Debug, Clone)]
pub struct RssFeedWriter {
    generator: String,
}

impl Default for RssFeedWriter {
    fn default() -> Self {
        Self {
            generator: format!("summit_feed {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FeedWriter for RssFeedWriter {
    fn write_feed(&self, doc: &FeedDocument) -> Result<String, RenderError> {
        let mut out = XmlOut::new();
        out.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:atom", ATOM_NS));
        rss.push_attribute(("xmlns:content", CONTENT_NS));
        rss.push_attribute(("xmlns:itunes", ITUNES_NS));
        out.event(Event::Start(rss))?;
        out.start("channel")?;

        out.text_element("title", &doc.title)?;
        out.text_element("link", &doc.link)?;
        out.text_element("description", &doc.description)?;
        out.text_element("docs", RSS_DOCS)?;
        out.text_element("generator", &self.generator)?;
        match &doc.image_url {
            Some(image) => {
                out.start("image")?;
                out.text_element("url", image)?;
                out.text_element("title", &doc.title)?;
                out.text_element("link", &doc.link)?;
                out.end("image")?;
                out.empty("itunes:image", &[("href", image.as_str())])?;
            }
            None => summit_warn!("Feed has no artwork; some podcast clients reject such feeds"),
        }
        out.text_element("language", &doc.language)?;
        out.text_element("lastBuildDate", &doc.last_build_date.to_rfc2822())?;
        out.text_element("pubDate", &doc.published_at.to_rfc2822())?;

        for episode in &doc.episodes {
            write_episode(&mut out, episode)?;
        }

        out.end("channel")?;
        out.end("rss")?;
        out.finish()
    }
}

fn write_episode(out: &mut XmlOut, episode: &Episode) -> Result<(), RenderError> {
    out.start("item")?;
    out.text_element("title", &episode.title)?;
    out.text_element("description", &episode.description)?;

    let mut guid = BytesStart::new("guid");
    guid.push_attribute(("isPermaLink", "false"));
    out.event(Event::Start(guid))?;
    out.text(&episode.guid)?;
    out.end("guid")?;

    if let Some(enclosure) = &episode.enclosure {
        let length = enclosure.length.to_string();
        out.empty(
            "enclosure",
            &[
                ("url", enclosure.url.as_str()),
                ("length", length.as_str()),
                ("type", enclosure.mime_type),
            ],
        )?;
    }
    if let Some(image) = &episode.image {
        out.empty("itunes:image", &[("href", image.as_str())])?;
    }
    out.text_element("pubDate", &episode.published_at.to_rfc2822())?;
    out.end("item")
}

struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Vec::new(), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|err| RenderError::Xml(err.to_string()))
    }

    fn start(&mut self, name: &str) -> Result<(), RenderError> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<(), RenderError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), RenderError> {
        let mut element = BytesStart::new(name);
        for (key, value) in attributes {
            element.push_attribute((*key, xml_chars(value).as_ref()));
        }
        self.event(Event::Empty(element))
    }

    fn text(&mut self, text: &str) -> Result<(), RenderError> {
        self.event(Event::Text(BytesText::new(&xml_chars(text))))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), RenderError> {
        self.start(name)?;
        self.text(text)?;
        self.end(name)
    }

    fn finish(self) -> Result<String, RenderError> {
        String::from_utf8(self.writer.into_inner()).map_err(|err| RenderError::Xml(err.to_string()))
    }
}

/// Drop characters XML 1.0 does not allow; escaping cannot represent them.
fn xml_chars(text: &str) -> Cow<'_, str> {
    fn allowed(c: char) -> bool {
        matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}')
    }
    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|c| allowed(*c)).collect())
    }
}

/// Render `talk_set` to RSS using the current time.
pub fn render_feed(talk_set: &TalkSet, meta: &FeedMeta) -> Result<String, RenderError> {
    render_feed_at(talk_set, meta, Utc::now())
}

/// Render `talk_set` to RSS with an explicit clock.
pub fn render_feed_at(
    talk_set: &TalkSet,
    meta: &FeedMeta,
    now: DateTime<Utc>,
) -> Result<String, RenderError> {
    let doc = render_at(talk_set, meta, now)?;
    let xml = RssFeedWriter::default().write_feed(&doc)?;
    summit_info!("Rendered feed with {} episodes", doc.episodes.len());
    Ok(xml)
}
