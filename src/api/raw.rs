// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One episode record as returned by `GET /episodes/{slug}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEpisode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: String,
    pub published_at: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<RawFile>,
}

/// The playable media attached to an episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFile {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<RawDuration>,
}

/// Duration as sent by the API; json-server fixtures carry it as a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDuration {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RawDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDuration::Number(n) => write!(f, "{n}"),
            RawDuration::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// Entry of the recent episodes listing; only the identifier is consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub id: String,
}
