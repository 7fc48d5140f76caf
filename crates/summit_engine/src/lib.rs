//! Summit engine: listing-page extraction, persistence and feed serialization.
mod decode;
mod extract;
mod feed;
mod persist;
mod questions;
mod schema;
mod store;
mod text;

pub use decode::{decode_page, DecodeError};
pub use extract::{
    extract, extract_bytes, ExtractSettings, ParseError, SummitPageExtractor, TalkExtractor,
    DEFAULT_SITE_ORIGIN,
};
pub use feed::{render_feed, render_feed_at, FeedWriter, RenderError, RssFeedWriter};
pub use persist::{ensure_output_dir, write_atomically, AtomicFileWriter, PersistError};
pub use questions::parse_key_questions;
pub use schema::{select_image_url, RowSchema, PRESENTER_CELL_INDEX};
pub use store::{load_talk_set, save_talk_set, StoreError};
