use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use podcastr::config::DEFAULT_API_BASE_URL;
use podcastr::{
    ApiClient, EpisodePage, NoopPlayer, NoopReporter, PageEvent, PlayerState, ProgressReporter, ReqwestClient,
    SharedProgressReporter, SiteConfig, enumerate_paths, generate_page, load_episode, write_page,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static PLAY: Emoji<'_, '_> = Emoji("▶️  ", "[>] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Render podcast episode pages from the episodes API
#[derive(Parser, Debug)]
#[command(name = "podcastr")]
#[command(about = "Render podcast episode pages from the episodes API")]
#[command(version)]
struct Args {
    /// Base URL of the episodes API
    #[arg(long, global = true, default_value = DEFAULT_API_BASE_URL)]
    api: Url,

    /// Quiet mode - suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the episode pages scheduled for pre-rendering
    Paths,

    /// Generate the detail page of one episode
    Render {
        /// Episode slug
        slug: String,

        /// Write `<slug>.html` into this directory instead of printing it
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print the page props as JSON instead of HTML
        #[arg(long, conflicts_with = "output_dir")]
        json: bool,
    },

    /// Load an episode and hand it to the player
    Play {
        /// Episode slug
        slug: String,
    },
}

/// Progress reporter using an indicatif spinner for terminal output
struct SpinnerReporter {
    bar: ProgressBar,
}

impl SpinnerReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { bar }
    }
}

impl Drop for SpinnerReporter {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl ProgressReporter for SpinnerReporter {
    fn report(&self, event: PageEvent) {
        match event {
            PageEvent::FetchingRecentEpisodes { url } | PageEvent::FetchingEpisode { url, .. } => {
                self.bar.set_message(format!("{SEARCH}Fetching {}", url.cyan()));
            }

            PageEvent::PathsEnumerated {
                candidates,
                prerendered,
            } => {
                self.bar.finish_and_clear();
                eprintln!(
                    "{HEADPHONES}{} recent episodes, {} scheduled for pre-rendering",
                    candidates.len().to_string().cyan(),
                    prerendered.to_string().yellow()
                );
            }

            PageEvent::EpisodeLoaded { title, .. } => {
                self.bar.finish_and_clear();
                eprintln!("{HEADPHONES}{}", title.bold().green());
            }

            PageEvent::PageRendered { slug, bytes } => {
                eprintln!(
                    "{SUCCESS}Rendered {} ({} bytes)",
                    slug.green(),
                    bytes.to_string().cyan()
                );
            }

            PageEvent::PageWritten { path, .. } => {
                eprintln!("{FOLDER}Output: {}", path.display().to_string().cyan());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.quiet {
        eprintln!(
            "\n{}{} {}\n",
            MICROPHONE,
            "podcastr".bold().magenta(),
            "- Episode Pages".dimmed()
        );
    }

    let config = SiteConfig::with_api_base_url(args.api.clone());
    let api = ApiClient::new(ReqwestClient::new(), config.api_base_url.clone());

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(SpinnerReporter::new())
    };

    match args.command {
        Command::Paths => {
            let paths = enumerate_paths(&api, &config, &reporter)
                .await
                .context("Failed to enumerate episode paths")?;
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }

        Command::Render {
            slug,
            output_dir,
            json,
        } => {
            if json {
                let props = load_episode(&api, &slug, &config, &reporter)
                    .await
                    .with_context(|| format!("Failed to load episode '{slug}'"))?;
                println!("{}", serde_json::to_string_pretty(&props)?);
                return Ok(());
            }

            let (generated, _page) =
                generate_page(&api, &slug, &config, NoopPlayer::shared(), &reporter)
                    .await
                    .with_context(|| format!("Failed to generate page for '{slug}'"))?;

            match output_dir {
                Some(dir) => {
                    write_page(&generated, &dir, &reporter)
                        .await
                        .context("Failed to write page")?;
                }
                None => print!("{}", generated.html),
            }
        }

        Command::Play { slug } => {
            let player = PlayerState::shared();
            let props = load_episode(&api, &slug, &config, &reporter)
                .await
                .with_context(|| format!("Failed to load episode '{slug}'"))?;

            let page = EpisodePage::new(props.episode, player.clone());
            page.play();

            if let Some(episode) = player.current_episode() {
                println!(
                    "{PLAY}{} {} [{}]\n   {}",
                    "Now playing:".bold().green(),
                    episode.title().bold(),
                    episode.duration_as_string().cyan(),
                    episode.url().dimmed()
                );
            }
        }
    }

    Ok(())
}
