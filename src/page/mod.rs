mod generate;
mod paths;
mod props;
mod view;

pub use generate::{GeneratedPage, generate_page, page_filename, write_page};
pub use paths::{Fallback, PathParams, StaticPaths, enumerate_paths};
pub use props::{EpisodeProps, load_episode, validate_slug};
pub use view::EpisodePage;
