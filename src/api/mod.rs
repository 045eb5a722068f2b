mod client;
mod raw;

pub use client::{ApiClient, EPISODES_RESOURCE};
pub use raw::{EpisodeSummary, RawDuration, RawEpisode, RawFile};
