use std::sync::{Arc, Mutex, MutexGuard};

use crate::episode::Episode;

/// Shared player capability the episode page triggers playback through.
///
/// The player's lifetime and state belong to the application hosting
/// the page; the page only ever asks it to play an episode.
pub trait Player: Send + Sync {
    /// Start playing the given episode
    fn play(&self, episode: Episode);
}

/// A shared reference to a player
pub type SharedPlayer = Arc<dyn Player>;

/// A player that ignores every request.
/// Useful for rendering pages where nothing can be played.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPlayer;

impl Player for NoopPlayer {
    fn play(&self, _episode: Episode) {
        // Intentionally empty
    }
}

impl NoopPlayer {
    /// Create a new NoopPlayer wrapped in an Arc
    pub fn shared() -> SharedPlayer {
        Arc::new(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Stopped,
    Playing,
}

#[derive(Debug)]
struct Current {
    episode: Option<Episode>,
    playback: Playback,
}

/// In-memory player tracking the current episode and playback status
#[derive(Debug)]
pub struct PlayerState {
    current: Mutex<Current>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Current {
                episode: None,
                playback: Playback::Stopped,
            }),
        }
    }

    /// Create a new PlayerState wrapped in an Arc
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Episode currently loaded, if any
    pub fn current_episode(&self) -> Option<Episode> {
        self.lock().episode.clone()
    }

    pub fn playback(&self) -> Playback {
        self.lock().playback
    }

    /// Unload the current episode
    pub fn stop(&self) {
        let mut current = self.lock();
        current.episode = None;
        current.playback = Playback::Stopped;
    }

    fn lock(&self) -> MutexGuard<'_, Current> {
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for PlayerState {
    fn play(&self, episode: Episode) {
        let mut current = self.lock();
        current.episode = Some(episode);
        current.playback = Playback::Playing;
    }
}
