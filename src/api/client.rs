// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiError;
use crate::http::HttpClient;

use super::raw::{EpisodeSummary, RawEpisode};

/// Collection path of the episodes resource
pub const EPISODES_RESOURCE: &str = "episodes";

/// Episodes API client bound to a fixed base URL
#[derive(Clone)]
pub struct ApiClient<C> {
    http: C,
    base_url: Url,
}

impl<C: HttpClient> ApiClient<C> {
    /// Bind an HTTP client to the API base URL
    ///
    /// A trailing slash is added to the base path so resources resolve
    /// below it instead of replacing its last segment.
    pub fn new(http: C, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of `GET /episodes?_limit=N&_sort=published_at&_order=desc`
    pub fn recent_episodes_url(&self, limit: usize) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(EPISODES_RESOURCE)?;
        url.query_pairs_mut()
            .append_pair("_limit", &limit.to_string())
            .append_pair("_sort", "published_at")
            .append_pair("_order", "desc");
        Ok(url)
    }

    /// URL of `GET /episodes/{slug}`, with the slug encoded as one path segment
    pub fn episode_url(&self, slug: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(EPISODES_RESOURCE)?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(slug);
        Ok(url)
    }

    /// Fetch the most recently published episodes, newest first
    pub async fn recent_episodes(&self, limit: usize) -> Result<Vec<EpisodeSummary>, ApiError> {
        let url = self.recent_episodes_url(limit)?;
        self.get(url).await
    }

    /// Fetch one episode record by slug
    pub async fn episode(&self, slug: &str) -> Result<RawEpisode, ApiError> {
        let url = self.episode_url(slug)?;
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        let response = self
            .http
            .get_json(url.as_str())
            .await
            .map_err(|e| ApiError::RequestFailed {
                url: url.to_string(),
                source: e,
            })?;

        if !response.is_success() {
            return Err(ApiError::HttpStatus {
                url: url.to_string(),
                status: response.status,
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| ApiError::DecodeFailed {
            url: url.to_string(),
            source: e,
        })
    }
}
