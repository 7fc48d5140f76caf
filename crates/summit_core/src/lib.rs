//! Summit core: talk records and the pure talk-set to feed transform.
mod episode;
mod meta;
mod srcset;
mod talk;

pub use episode::{
    compose_description, render, render_at, Enclosure, Episode, FeedDocument,
    ENCLOSURE_MIME_TYPE,
};
pub use meta::{FeedMeta, MetaError};
pub use srcset::{parse_candidates, select_largest_candidate, SrcsetCandidate};
pub use talk::{MediaKind, MediaLinks, Talk, TalkSet};
