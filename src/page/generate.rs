// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::api::ApiClient;
use crate::config::SiteConfig;
use crate::error::GenerateError;
use crate::http::HttpClient;
use crate::player::SharedPlayer;
use crate::progress::{PageEvent, SharedProgressReporter};

use super::props::load_episode;
use super::view::EpisodePage;

/// A rendered episode page together with its regeneration policy
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    pub slug: String,
    /// Document title
    pub title: String,
    /// Complete HTML document
    pub html: String,
    pub generated_at: DateTime<Utc>,
    /// How long the page stays fresh after `generated_at`
    pub revalidate: Duration,
}

impl GeneratedPage {
    /// Moment the page becomes stale, `None` if it never does
    pub fn revalidate_at(&self) -> Option<DateTime<Utc>> {
        TimeDelta::from_std(self.revalidate)
            .ok()
            .and_then(|delta| self.generated_at.checked_add_signed(delta))
    }

    /// Whether the page can still be served at `now` without regenerating
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.revalidate_at().is_none_or(|stale_at| now < stale_at)
    }
}

/// Generate the detail page of one episode
///
/// Loads and shapes the episode, then renders it with the play control
/// bound to `player`. Any failure aborts the generation; there is no
/// fallback content.
pub async fn generate_page<C: HttpClient>(
    api: &ApiClient<C>,
    slug: &str,
    config: &SiteConfig,
    player: SharedPlayer,
    reporter: &SharedProgressReporter,
) -> Result<(GeneratedPage, EpisodePage), GenerateError> {
    let props = load_episode(api, slug, config, reporter).await?;

    let page = EpisodePage::new(props.episode, player).with_site_name(&config.site_name);
    let html = page.render();

    reporter.report(PageEvent::PageRendered {
        slug: slug.to_string(),
        bytes: html.len(),
    });

    let generated = GeneratedPage {
        slug: slug.to_string(),
        title: page.document_title(),
        html,
        generated_at: Utc::now(),
        revalidate: props.revalidate,
    };

    Ok((generated, page))
}

/// File name a page is stored under, derived from its slug
pub fn page_filename(slug: &str) -> String {
    format!("{}.html", sanitize_filename::sanitize(slug))
}

/// Write a generated page into `output_dir`, returning the file path
pub async fn write_page(
    page: &GeneratedPage,
    output_dir: &Path,
    reporter: &SharedProgressReporter,
) -> Result<PathBuf, GenerateError> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| GenerateError::WriteFailed {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

    let path = output_dir.join(page_filename(&page.slug));
    tokio::fs::write(&path, page.html.as_bytes())
        .await
        .map_err(|e| GenerateError::WriteFailed {
            path: path.clone(),
            source: e,
        })?;

    reporter.report(PageEvent::PageWritten {
        slug: page.slug.clone(),
        path: path.clone(),
    });

    Ok(path)
}
