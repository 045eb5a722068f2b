use serde::Serialize;

use crate::api::RawEpisode;
use crate::error::EpisodeError;

use super::format::{duration_to_time_string, format_published_at, parse_duration};

/// Render-ready episode, reshaped from one API record
///
/// Built only through [`Episode::from_raw`], so `duration_as_string`
/// always reflects `duration`. Serializes with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    id: String,
    title: String,
    members: String,
    published_at: String,
    thumbnail: String,
    description: String,
    url: String,
    duration: u64,
    duration_as_string: String,
}

impl Episode {
    /// Shape a raw API record into the display model
    pub fn from_raw(raw: RawEpisode) -> Result<Self, EpisodeError> {
        let file = raw
            .file
            .ok_or_else(|| EpisodeError::MissingFile { id: raw.id.clone() })?;

        let published_at = format_published_at(&raw.published_at)?;
        let duration = parse_duration(&raw.id, file.duration.as_ref())?;

        Ok(Self {
            id: raw.id,
            title: raw.title,
            members: raw.members,
            published_at,
            thumbnail: raw.thumbnail,
            description: raw.description,
            url: file.url,
            duration,
            duration_as_string: duration_to_time_string(duration),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn members(&self) -> &str {
        &self.members
    }

    /// Publish date already formatted for display
    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Raw HTML description, trusted as served by the API
    pub fn description(&self) -> &str {
        &self.description
    }

    /// URL of the playable media
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Duration in seconds
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Duration as `HH:mm:ss`
    pub fn duration_as_string(&self) -> &str {
        &self.duration_as_string
    }
}
