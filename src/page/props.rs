// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::api::ApiClient;
use crate::config::SiteConfig;
use crate::episode::Episode;
use crate::error::LoadError;
use crate::http::HttpClient;
use crate::progress::{PageEvent, SharedProgressReporter};

/// Everything the episode page needs to render, plus its freshness window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeProps {
    pub episode: Episode,
    /// Interval after which the page should be regenerated
    #[serde(serialize_with = "serialize_secs")]
    pub revalidate: Duration,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_secs())
}

/// Check that a slug can be used as a single URL path segment
pub fn validate_slug(slug: &str) -> Result<&str, LoadError> {
    let is_valid = !slug.is_empty()
        && slug.trim() == slug
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '?', '#', '\\']);

    if is_valid {
        Ok(slug)
    } else {
        Err(LoadError::InvalidSlug(slug.to_string()))
    }
}

/// Fetch one episode by slug and shape it into page props
pub async fn load_episode<C: HttpClient>(
    api: &ApiClient<C>,
    slug: &str,
    config: &SiteConfig,
    reporter: &SharedProgressReporter,
) -> Result<EpisodeProps, LoadError> {
    let slug = validate_slug(slug)?;

    reporter.report(PageEvent::FetchingEpisode {
        slug: slug.to_string(),
        url: api.episode_url(slug)?.to_string(),
    });

    let raw = api.episode(slug).await?;
    let episode = Episode::from_raw(raw)?;

    reporter.report(PageEvent::EpisodeLoaded {
        slug: slug.to_string(),
        title: episode.title().to_string(),
    });

    Ok(EpisodeProps {
        episode,
        revalidate: config.revalidate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use bytes::Bytes;
    use url::Url;

    use crate::error::{ApiError, EpisodeError};
    use crate::http::HttpResponse;
    use crate::progress::NoopReporter;

    #[derive(Clone)]
    struct MockHttpClient {
        status: u16,
        body: String,
    }

    #[async_trait]
    impl HttpClient for MockHttpClient {
        async fn get_json(&self, _url: &str) -> Result<HttpResponse, reqwest::Error> {
            Ok(HttpResponse {
                status: self.status,
                body: Bytes::from(self.body.clone()),
            })
        }
    }

    const SAMPLE_EPISODE: &str = r#"{
        "id": "1",
        "title": "Ep 1",
        "members": "A, B",
        "published_at": "2021-01-01T00:00:00.000Z",
        "thumbnail": "http://x/img.png",
        "description": "<p>hi</p>",
        "file": {"url": "http://x/a.mp3", "duration": "125"}
    }"#;

    fn api(status: u16, body: &str) -> ApiClient<MockHttpClient> {
        ApiClient::new(
            MockHttpClient {
                status,
                body: body.to_string(),
            },
            Url::parse("http://localhost:3333/").unwrap(),
        )
    }

    #[tokio::test]
    async fn load_episode_shapes_props() {
        let props = load_episode(
            &api(200, SAMPLE_EPISODE),
            "1",
            &SiteConfig::default(),
            &NoopReporter::shared(),
        )
        .await
        .unwrap();

        assert_eq!(props.revalidate, Duration::from_secs(86_400));
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            serde_json::json!({
                "episode": {
                    "id": "1",
                    "title": "Ep 1",
                    "members": "A, B",
                    "publishedAt": "1 Jan 21",
                    "thumbnail": "http://x/img.png",
                    "description": "<p>hi</p>",
                    "url": "http://x/a.mp3",
                    "duration": 125,
                    "durationAsString": "00:02:05"
                },
                "revalidate": 86400
            })
        );
    }

    #[tokio::test]
    async fn load_episode_uses_configured_revalidation() {
        let config = SiteConfig {
            revalidate: Duration::from_secs(60),
            ..Default::default()
        };

        let props = load_episode(&api(200, SAMPLE_EPISODE), "1", &config, &NoopReporter::shared())
            .await
            .unwrap();

        assert_eq!(props.revalidate.as_secs(), 60);
    }

    #[tokio::test]
    async fn invalid_slug_is_rejected_before_fetching() {
        let err = load_episode(
            &api(200, SAMPLE_EPISODE),
            "../admin",
            &SiteConfig::default(),
            &NoopReporter::shared(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, LoadError::InvalidSlug(slug) if slug == "../admin"));
    }

    #[tokio::test]
    async fn api_errors_propagate() {
        let err = load_episode(
            &api(500, "{}"),
            "1",
            &SiteConfig::default(),
            &NoopReporter::shared(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            LoadError::Api(ApiError::HttpStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn non_numeric_duration_fails_generation() {
        let body = SAMPLE_EPISODE.replace(r#""duration": "125""#, r#""duration": "n/a""#);

        let err = load_episode(
            &api(200, &body),
            "1",
            &SiteConfig::default(),
            &NoopReporter::shared(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            LoadError::Episode(EpisodeError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn validate_slug_accepts_path_segments() {
        assert!(validate_slug("a-importancia-da-contribuicao-em-open-source").is_ok());
        assert!(validate_slug("42").is_ok());
    }

    #[test]
    fn validate_slug_rejects_malformed_values() {
        for slug in ["", " ep", "a/b", "a?b", "a#b", ".", ".."] {
            assert!(validate_slug(slug).is_err(), "{slug:?} should be rejected");
        }
    }
}
