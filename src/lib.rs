pub mod api;
pub mod config;
pub mod episode;
pub mod error;
pub mod http;
pub mod page;
pub mod player;
pub mod progress;

// Re-export main types for convenience
pub use api::{ApiClient, EpisodeSummary, RawDuration, RawEpisode, RawFile};
pub use config::SiteConfig;
pub use episode::{Episode, duration_to_time_string, format_published_at};
pub use error::{ApiError, EpisodeError, GenerateError, LoadError};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use page::{
    EpisodePage, EpisodeProps, Fallback, GeneratedPage, PathParams, StaticPaths, enumerate_paths,
    generate_page, load_episode, write_page,
};
pub use player::{NoopPlayer, Playback, Player, PlayerState, SharedPlayer};
pub use progress::{NoopReporter, PageEvent, ProgressReporter, SharedProgressReporter};
