//! Application state: data types, modal overlays and the central [`AppState`].

pub mod app_state;
pub mod modal;
pub mod news_view;
pub mod types;

pub use app_state::{AppState, HOME_NEWS_COUNT, InputMode, TOAST_DURATION};
pub use modal::Modal;
pub use news_view::NewsView;
pub use types::{NewsItem, Page};
