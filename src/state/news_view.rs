//! Terminal-side render target of the news listing.

use crate::logic::RenderTarget;
use crate::state::types::NewsItem;

/// What the news page currently displays, as pushed by the listing controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsView {
    /// Cards of the current page.
    pub cards: Vec<NewsItem>,
    /// Whether the "no results" placeholder replaces the cards.
    pub no_results: bool,
    /// Whether the "load more" hint is shown.
    pub load_more_visible: bool,
    /// Article the listing asked to open; taken by the event layer.
    pub pending_detail: Option<NewsItem>,
}

impl NewsView {
    /// Take the pending detail request, if any.
    pub const fn take_detail(&mut self) -> Option<NewsItem> {
        self.pending_detail.take()
    }
}

impl RenderTarget for NewsView {
    fn show_items(&mut self, items: &[NewsItem]) {
        self.cards = items.to_vec();
        self.no_results = false;
    }

    fn show_no_results(&mut self) {
        self.cards.clear();
        self.no_results = true;
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }

    fn open_detail(&mut self, item: &NewsItem) {
        self.pending_detail = Some(item.clone());
    }
}
