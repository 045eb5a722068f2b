// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Serialize;

use crate::api::ApiClient;
use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::progress::{PageEvent, SharedProgressReporter};

/// Route parameters of one episode page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathParams {
    pub slug: String,
}

/// What happens when a slug was not pre-rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Render on the first request, then serve the cached result
    Blocking,
}

/// Slugs to pre-render ahead of request time, and the policy for the rest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    pub paths: Vec<PathParams>,
    pub fallback: Fallback,
}

/// Enumerate the episode pages to pre-render
///
/// Queries the most recently published episodes and derives one
/// candidate per episode, but schedules none of them: every page is
/// rendered on demand with [`Fallback::Blocking`]. The discarded
/// candidates are reported so they remain visible.
pub async fn enumerate_paths<C: HttpClient>(
    api: &ApiClient<C>,
    config: &SiteConfig,
    reporter: &SharedProgressReporter,
) -> Result<StaticPaths, ApiError> {
    reporter.report(PageEvent::FetchingRecentEpisodes {
        url: api.recent_episodes_url(config.recent_limit)?.to_string(),
    });

    let recent = api.recent_episodes(config.recent_limit).await?;

    let candidates: Vec<PathParams> = recent
        .into_iter()
        .map(|episode| PathParams { slug: episode.id })
        .collect();

    // TODO: pre-render `candidates` once the product decides whether the
    // latest episodes should be built ahead of time.
    let paths: Vec<PathParams> = Vec::new();

    reporter.report(PageEvent::PathsEnumerated {
        candidates: candidates.into_iter().map(|p| p.slug).collect(),
        prerendered: paths.len(),
    });

    Ok(StaticPaths {
        paths,
        fallback: Fallback::Blocking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use bytes::Bytes;
    use url::Url;

    use crate::http::HttpResponse;
    use crate::progress::ProgressReporter;

    #[derive(Clone)]
    struct MockHttpClient {
        body: String,
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get_json(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: 200,
                body: Bytes::from(self.body.clone()),
            })
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        events: Mutex<Vec<PageEvent>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, event: PageEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn api(body: &str) -> ApiClient<MockHttpClient> {
        ApiClient::new(
            MockHttpClient {
                body: body.to_string(),
            },
            Url::parse("http://localhost:3333/").unwrap(),
        )
    }

    #[tokio::test]
    async fn paths_are_empty_with_blocking_fallback() {
        let api = api(r#"[{"id": "ep-2"}, {"id": "ep-1"}]"#);
        let reporter: SharedProgressReporter = Arc::new(RecordingReporter::default());

        let paths = enumerate_paths(&api, &SiteConfig::default(), &reporter)
            .await
            .unwrap();

        assert!(paths.paths.is_empty());
        assert_eq!(paths.fallback, Fallback::Blocking);
    }

    #[tokio::test]
    async fn paths_are_empty_even_without_episodes() {
        let api = api("[]");
        let reporter = crate::progress::NoopReporter::shared();

        let paths = enumerate_paths(&api, &SiteConfig::default(), &reporter)
            .await
            .unwrap();

        assert_eq!(
            paths,
            StaticPaths {
                paths: vec![],
                fallback: Fallback::Blocking
            }
        );
    }

    #[tokio::test]
    async fn discarded_candidates_are_reported() {
        let api = api(r#"[{"id": "ep-2"}, {"id": "ep-1"}]"#);
        let recorder = Arc::new(RecordingReporter::default());
        let reporter: SharedProgressReporter = recorder.clone();

        enumerate_paths(&api, &SiteConfig::default(), &reporter)
            .await
            .unwrap();

        let events = recorder.events.lock().unwrap();
        assert!(matches!(
            &events[0],
            PageEvent::FetchingRecentEpisodes { url } if url.ends_with("_limit=12&_sort=published_at&_order=desc")
        ));
        assert!(matches!(
            &events[1],
            PageEvent::PathsEnumerated { candidates, prerendered: 0 } if candidates == &["ep-2", "ep-1"]
        ));
    }

    #[tokio::test]
    async fn listing_errors_propagate() {
        let api = api("{}");
        let reporter = crate::progress::NoopReporter::shared();

        let err = enumerate_paths(&api, &SiteConfig::default(), &reporter)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::DecodeFailed { .. }));
    }

    #[test]
    fn fallback_serializes_lowercase() {
        let json = serde_json::to_string(&Fallback::Blocking).unwrap();
        assert_eq!(json, r#""blocking""#);
    }
}
