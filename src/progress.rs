use std::path::PathBuf;
use std::sync::Arc;

/// Events emitted during page generation for progress reporting
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// The recent episodes listing is being fetched
    FetchingRecentEpisodes { url: String },

    /// Path enumeration finished
    PathsEnumerated {
        /// Slugs derived from the recent episodes listing
        candidates: Vec<String>,
        /// Number of paths actually scheduled for pre-rendering
        prerendered: usize,
    },

    /// One episode record is being fetched
    FetchingEpisode { slug: String, url: String },

    /// The episode record was fetched and shaped into the display model
    EpisodeLoaded { slug: String, title: String },

    /// The page markup was rendered
    PageRendered {
        slug: String,
        /// Size of the rendered document in bytes
        bytes: usize,
    },

    /// The rendered page was written to disk
    PageWritten { slug: String, path: PathBuf },
}

/// Trait for reporting progress events during page generation.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: PageEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: PageEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}
