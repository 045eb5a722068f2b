use std::fmt;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::config::DEFAULT_SITE_NAME;
use crate::episode::Episode;
use crate::player::SharedPlayer;

/// Thumbnail box size, matching the page's stylesheet
const THUMBNAIL_WIDTH: u32 = 700;
const THUMBNAIL_HEIGHT: u32 = 160;

/// Episode detail page: renders one episode and forwards play requests
/// to the shared player.
pub struct EpisodePage {
    episode: Episode,
    player: SharedPlayer,
    site_name: String,
}

impl fmt::Debug for EpisodePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EpisodePage")
            .field("episode", &self.episode)
            .field("site_name", &self.site_name)
            .finish_non_exhaustive()
    }
}

impl EpisodePage {
    pub fn new(episode: Episode, player: SharedPlayer) -> Self {
        Self {
            episode,
            player,
            site_name: DEFAULT_SITE_NAME.to_string(),
        }
    }

    /// Use a different site name in the document title
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = site_name.into();
        self
    }

    pub fn episode(&self) -> &Episode {
        &self.episode
    }

    /// Document title, `"{title} | {site name}"`
    pub fn document_title(&self) -> String {
        format!("{} | {}", self.episode.title(), self.site_name)
    }

    /// The play action: hand the whole episode to the shared player
    pub fn play(&self) {
        self.player.play(self.episode.clone());
    }

    /// Render the page as a complete HTML document
    ///
    /// The description is inserted as-is: it is HTML authored upstream
    /// and trusted as such. Every other value is escaped.
    pub fn render(&self) -> String {
        let episode = &self.episode;

        format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>{document_title}</title>
</head>
<body>
<div class="episode">
  <div class="thumbnailContainer">
    <a href="/">
      <button type="button"><img src="/arrow-left.svg" alt="Voltar"></button>
    </a>
    <img src="{thumbnail}" width="{width}" height="{height}" style="object-fit: cover" alt="">
    <button type="button" data-action="play" data-episode-id="{id}" data-episode-url="{url}">
      <img src="/play.svg" alt="Tocar episódio">
    </button>
  </div>
  <header>
    <h1>{title}</h1>
    <span>{members}</span>
    <span>{published_at}</span>
    <span>{duration}</span>
  </header>
  <div class="description">{description}</div>
</div>
</body>
</html>
"#,
            document_title = encode_text(&self.document_title()),
            thumbnail = encode_double_quoted_attribute(episode.thumbnail()),
            width = THUMBNAIL_WIDTH,
            height = THUMBNAIL_HEIGHT,
            id = encode_double_quoted_attribute(episode.id()),
            url = encode_double_quoted_attribute(episode.url()),
            title = encode_text(episode.title()),
            members = encode_text(episode.members()),
            published_at = encode_text(episode.published_at()),
            duration = encode_text(episode.duration_as_string()),
            description = episode.description(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crate::api::{RawDuration, RawEpisode, RawFile};
    use crate::player::{NoopPlayer, Playback, PlayerState};

    fn make_episode(title: &str, description: &str) -> Episode {
        Episode::from_raw(RawEpisode {
            id: "1".to_string(),
            title: title.to_string(),
            members: "A, B".to_string(),
            published_at: "2021-01-01T00:00:00.000Z".to_string(),
            thumbnail: "http://x/img.png".to_string(),
            description: description.to_string(),
            file: Some(RawFile {
                url: "http://x/a.mp3".to_string(),
                duration: Some(RawDuration::Text("125".to_string())),
            }),
        })
        .unwrap()
    }

    #[test]
    fn title_carries_site_name() {
        let page = EpisodePage::new(make_episode("Ep 1", ""), NoopPlayer::shared());
        assert_eq!(page.document_title(), "Ep 1 | Podcastr");
        assert!(page.render().contains("<title>Ep 1 | Podcastr</title>"));

        let page = page.with_site_name("Other");
        assert_eq!(page.document_title(), "Ep 1 | Other");
    }

    #[test]
    fn render_lists_header_fields() {
        let html = EpisodePage::new(make_episode("Ep 1", ""), NoopPlayer::shared()).render();

        assert!(html.contains("<h1>Ep 1</h1>"));
        assert!(html.contains("<span>A, B</span>"));
        assert!(html.contains("<span>1 Jan 21</span>"));
        assert!(html.contains("<span>00:02:05</span>"));
        assert!(html.contains(r#"<img src="http://x/img.png" width="700" height="160""#));
        assert!(html.contains(r#"<a href="/">"#));
        assert!(html.contains(r#"data-action="play""#));
    }

    #[test]
    fn description_is_inserted_verbatim() {
        let html = EpisodePage::new(
            make_episode("Ep 1", "<p>hi <strong>there</strong></p>"),
            NoopPlayer::shared(),
        )
        .render();

        assert!(html.contains(r#"<div class="description"><p>hi <strong>there</strong></p></div>"#));
    }

    #[test]
    fn other_fields_are_escaped() {
        let html = EpisodePage::new(make_episode("<b>Ep</b> & co", ""), NoopPlayer::shared()).render();

        assert!(html.contains("<h1>&lt;b&gt;Ep&lt;/b&gt; &amp; co</h1>"));
        assert!(!html.contains("<b>Ep</b>"));
    }

    #[test]
    fn play_hands_episode_to_player() {
        let player = PlayerState::shared();
        let episode = make_episode("Ep 1", "<p>hi</p>");
        let page = EpisodePage::new(episode.clone(), player.clone());

        page.play();

        assert_eq!(player.playback(), Playback::Playing);
        assert_eq!(player.current_episode(), Some(episode));
    }

    #[test]
    fn page_holds_no_play_state() {
        let player = Arc::new(PlayerState::new());
        let page = EpisodePage::new(make_episode("Ep 1", ""), player.clone());

        page.play();
        player.stop();
        page.play();

        assert_eq!(player.playback(), Playback::Playing);
    }
}
