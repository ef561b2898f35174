//! News listing pipeline: category filter, text search and pagination.
//!
//! [`NewsListController`] owns the [`ListingState`] for one portal session and
//! pushes every change to a [`RenderTarget`]. UI events reach it only through
//! named [`ListingCommand`]s.

use crate::state::types::{ALL_CATEGORIES, NewsItem};

/// Items per page when no setting overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Output sink for the listing. Implementations never feed state back.
pub trait RenderTarget {
    /// Replace the displayed list with `items` (the current page).
    fn show_items(&mut self, items: &[NewsItem]);
    /// Replace the displayed list with the "no results" placeholder.
    fn show_no_results(&mut self);
    /// Show or hide the "load more" affordance.
    fn set_load_more_visible(&mut self, visible: bool);
    /// Open the full-content view for `item`.
    fn open_detail(&mut self, item: &NewsItem);
}

/// Commands the UI may issue against the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingCommand {
    /// Restrict to one category, or `"all"`.
    SetCategory(String),
    /// Case-insensitive search; the caller trims the query.
    Search(String),
    /// Advance to the next page.
    NextPage,
    /// Open the detail view for an item id.
    ShowDetail(u64),
}

/// Mutable listing state for one page view.
#[derive(Clone, Debug)]
pub struct ListingState {
    /// Loaded items in file order; never mutated after construction.
    all_items: Vec<NewsItem>,
    /// Active category filter.
    active_filter: String,
    /// Active search text.
    active_query: String,
    /// Items passing the active predicate, in original order.
    visible_items: Vec<NewsItem>,
    /// 1-based page index.
    page: usize,
    /// Items per page, at least 1.
    page_size: usize,
}

impl ListingState {
    /// What: Build the initial state over a loaded item list.
    ///
    /// Inputs:
    /// - `all_items`: Items from the repository (possibly empty)
    /// - `page_size`: Items per page; `0` is clamped to `1`
    ///
    /// Output:
    /// - State with filter `"all"`, empty query, every item visible, page 1.
    #[must_use]
    pub fn new(all_items: Vec<NewsItem>, page_size: usize) -> Self {
        let visible_items = all_items.clone();
        Self {
            all_items,
            active_filter: ALL_CATEGORIES.to_string(),
            active_query: String::new(),
            visible_items,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Every loaded item.
    #[must_use]
    pub fn all_items(&self) -> &[NewsItem] {
        &self.all_items
    }

    /// Items passing the active filter or search.
    #[must_use]
    pub fn visible_items(&self) -> &[NewsItem] {
        &self.visible_items
    }

    /// Active category filter.
    #[must_use]
    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Active search query.
    #[must_use]
    pub fn active_query(&self) -> &str {
        &self.active_query
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for the visible items; `0` when nothing is visible.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.visible_items.len().div_ceil(self.page_size)
    }

    /// Whether items exist beyond the current page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.visible_items.len()
    }

    /// What: Slice of visible items for the current page.
    ///
    /// Output:
    /// - Items `[(page-1)*size, page*size)` clipped to the visible length;
    ///   empty when the page is out of range.
    #[must_use]
    pub fn page_items(&self) -> &[NewsItem] {
        let len = self.visible_items.len();
        let start = (self.page - 1).saturating_mul(self.page_size).min(len);
        let end = self.page.saturating_mul(self.page_size).min(len);
        &self.visible_items[start..end]
    }
}

/// Returns true when `item` has `needle` (already lowercase) in its title, excerpt or content.
fn matches_query(item: &NewsItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.excerpt.to_lowercase().contains(needle)
        || item.content.to_lowercase().contains(needle)
}

/// Controller owning the listing state and its render target.
#[derive(Debug)]
pub struct NewsListController<R: RenderTarget> {
    /// Listing state.
    state: ListingState,
    /// Where every change is rendered.
    target: R,
}

impl<R: RenderTarget> NewsListController<R> {
    /// What: Create a controller and render the initial page.
    ///
    /// Inputs:
    /// - `all_items`: Loaded items; an empty list after a failed load
    /// - `page_size`: Items per page
    /// - `target`: Render sink
    ///
    /// Output:
    /// - Controller whose target already shows page 1 (or "no results").
    pub fn new(all_items: Vec<NewsItem>, page_size: usize, target: R) -> Self {
        let mut controller = Self {
            state: ListingState::new(all_items, page_size),
            target,
        };
        controller.render();
        controller
    }

    /// Listing state, read-only.
    #[must_use]
    pub const fn state(&self) -> &ListingState {
        &self.state
    }

    /// Render target, read-only.
    #[must_use]
    pub const fn target(&self) -> &R {
        &self.target
    }

    /// Render target, mutable (for view-only state such as scroll offsets).
    pub const fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    /// What: Apply a category filter.
    ///
    /// Inputs:
    /// - `category`: Category tag, or `"all"` for every item
    ///
    /// Details:
    /// - Exact, case-sensitive comparison; an unknown category yields an empty list.
    /// - Clears the active query, resets to page 1 and renders.
    pub fn set_category_filter(&mut self, category: &str) {
        let s = &mut self.state;
        s.active_filter = category.to_string();
        s.active_query.clear();
        s.visible_items = if category == ALL_CATEGORIES {
            s.all_items.clone()
        } else {
            s.all_items
                .iter()
                .filter(|n| n.category == category)
                .cloned()
                .collect()
        };
        s.page = 1;
        tracing::debug!(
            category,
            visible = s.visible_items.len(),
            "news category filter applied"
        );
        self.render();
    }

    /// What: Search title, excerpt and content case-insensitively.
    ///
    /// Inputs:
    /// - `query`: Search text, already trimmed by the caller
    ///
    /// Details:
    /// - Runs over every loaded item and replaces any category filter (last
    ///   write wins); an empty query shows everything.
    /// - Resets to page 1 and renders.
    pub fn search(&mut self, query: &str) {
        let s = &mut self.state;
        s.active_query = query.to_string();
        s.active_filter = ALL_CATEGORIES.to_string();
        s.visible_items = if query.is_empty() {
            s.all_items.clone()
        } else {
            let needle = query.to_lowercase();
            s.all_items
                .iter()
                .filter(|n| matches_query(n, &needle))
                .cloned()
                .collect()
        };
        s.page = 1;
        tracing::debug!(query, visible = s.visible_items.len(), "news search applied");
        self.render();
    }

    /// What: Advance to the next page.
    ///
    /// Output:
    /// - `true` when the page advanced; `false` on the last page (no render).
    pub fn next_page(&mut self) -> bool {
        if !self.state.has_more() {
            return false;
        }
        self.state.page += 1;
        self.render();
        true
    }

    /// Items of the current page.
    #[must_use]
    pub fn page_items(&self) -> &[NewsItem] {
        self.state.page_items()
    }

    /// What: Open the detail view for an item.
    ///
    /// Inputs:
    /// - `id`: Item id, looked up among all loaded items
    ///
    /// Output:
    /// - `false` when no item has that id.
    pub fn show_detail(&mut self, id: u64) -> bool {
        match self.state.all_items.iter().find(|n| n.id == id) {
            Some(item) => {
                self.target.open_detail(item);
                true
            }
            None => false,
        }
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for item in &self.state.all_items {
            if !out.contains(&item.category) {
                out.push(item.category.clone());
            }
        }
        out
    }

    /// First `n` loaded items, for the home page teaser.
    #[must_use]
    pub fn latest(&self, n: usize) -> &[NewsItem] {
        let all = &self.state.all_items;
        &all[..n.min(all.len())]
    }

    /// Execute a named command.
    pub fn dispatch(&mut self, command: ListingCommand) {
        match command {
            ListingCommand::SetCategory(category) => self.set_category_filter(&category),
            ListingCommand::Search(query) => self.search(&query),
            ListingCommand::NextPage => {
                let _ = self.next_page();
            }
            ListingCommand::ShowDetail(id) => {
                if !self.show_detail(id) {
                    tracing::debug!(id, "news detail requested for unknown id");
                }
            }
        }
    }

    /// Push the current page, or the placeholder, to the target.
    fn render(&mut self) {
        if self.state.visible_items.is_empty() {
            self.target.show_no_results();
        } else {
            self.target.show_items(self.state.page_items());
        }
        self.target.set_load_more_visible(self.state.has_more());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Render target that records what the controller pushed.
    #[derive(Default)]
    struct Recorder {
        shown: Vec<u64>,
        no_results: bool,
        load_more: bool,
        renders: usize,
        opened: Option<u64>,
    }

    impl RenderTarget for Recorder {
        fn show_items(&mut self, items: &[NewsItem]) {
            self.shown = items.iter().map(|n| n.id).collect();
            self.no_results = false;
            self.renders += 1;
        }
        fn show_no_results(&mut self) {
            self.shown.clear();
            self.no_results = true;
            self.renders += 1;
        }
        fn set_load_more_visible(&mut self, visible: bool) {
            self.load_more = visible;
        }
        fn open_detail(&mut self, item: &NewsItem) {
            self.opened = Some(item.id);
        }
    }

    fn item(id: u64, category: &str, title: &str) -> NewsItem {
        NewsItem {
            id,
            title: title.to_string(),
            excerpt: format!("ringkasan {id}"),
            content: format!("isi berita {id}"),
            category: category.to_string(),
            author: "Admin".to_string(),
            date: "2024-01-15".to_string(),
            image: String::new(),
        }
    }

    fn numbered(n: u64) -> Vec<NewsItem> {
        (0..n).map(|i| item(i, "umum", &format!("Berita {i}"))).collect()
    }

    #[test]
    /// What: Filtering by a category keeps matching items in original order.
    ///
    /// - Input: categories ["a", "b", "a"], filter "a"
    /// - Output: two items, ids 0 and 2
    fn category_filter_keeps_order() {
        let items = vec![item(0, "a", "x"), item(1, "b", "y"), item(2, "a", "z")];
        let mut c = NewsListController::new(items, DEFAULT_PAGE_SIZE, Recorder::default());
        c.set_category_filter("a");
        let ids: Vec<u64> = c.state().visible_items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(c.target().shown, vec![0, 2]);
    }

    #[test]
    /// What: The wildcard and case-sensitive matching rules.
    fn category_all_and_case_sensitivity() {
        let items = vec![item(0, "Umum", "x"), item(1, "umum", "y")];
        let mut c = NewsListController::new(items.clone(), DEFAULT_PAGE_SIZE, Recorder::default());
        c.set_category_filter("umum");
        assert_eq!(c.state().visible_items().len(), 1);
        c.set_category_filter("all");
        assert_eq!(c.state().visible_items(), items.as_slice());
        c.set_category_filter("tidak-ada");
        assert!(c.state().visible_items().is_empty());
        assert!(c.target().no_results);
        assert!(!c.target().load_more);
    }

    #[test]
    /// What: Filtering twice with the same argument is idempotent and resets the page.
    fn category_filter_idempotent_and_resets_page() {
        let mut c = NewsListController::new(numbered(13), DEFAULT_PAGE_SIZE, Recorder::default());
        assert!(c.next_page());
        c.set_category_filter("umum");
        let first = c.state().visible_items().to_vec();
        assert_eq!(c.state().page(), 1);
        assert!(c.next_page());
        c.set_category_filter("umum");
        assert_eq!(c.state().visible_items(), first.as_slice());
        assert_eq!(c.state().page(), 1);
    }

    #[test]
    /// What: Search is case-insensitive across title, excerpt and content.
    ///
    /// - Input: six items, four titled with "Desa"; query "desa"
    /// - Output: four results
    fn search_case_insensitive_title() {
        let items = vec![
            item(0, "a", "Rapat Desa"),
            item(1, "a", "Panen raya"),
            item(2, "b", "Jalan DESA baru"),
            item(3, "b", "Posyandu"),
            item(4, "c", "Kas desa"),
            item(5, "c", "Festival Desa"),
        ];
        let mut c = NewsListController::new(items, DEFAULT_PAGE_SIZE, Recorder::default());
        c.search("desa");
        let ids: Vec<u64> = c.state().visible_items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 2, 4, 5]);
    }

    #[test]
    /// What: Search matches the excerpt and content fields, and partitions all items.
    fn search_matches_excerpt_and_content() {
        let mut items = numbered(4);
        items[1].excerpt = "Gotong royong warga".to_string();
        items[3].content = "Kegiatan GOTONG royong".to_string();
        let mut c = NewsListController::new(items.clone(), DEFAULT_PAGE_SIZE, Recorder::default());
        c.search("gotong");
        let hits = c.state().visible_items().to_vec();
        assert_eq!(hits.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 3]);
        for n in &items {
            let hit = hits.contains(n);
            assert_eq!(hit, matches_query(n, "gotong"));
        }
    }

    #[test]
    /// What: Empty search equals the "all" filter and clears any category filter.
    fn empty_search_clears_filter() {
        let items = vec![item(0, "a", "x"), item(1, "b", "y")];
        let mut c = NewsListController::new(items, DEFAULT_PAGE_SIZE, Recorder::default());
        c.set_category_filter("a");
        c.search("");
        let after_search = c.state().visible_items().to_vec();
        assert_eq!(c.state().active_filter(), "all");
        c.set_category_filter("all");
        assert_eq!(c.state().visible_items(), after_search.as_slice());
    }

    #[test]
    /// What: Search ignores an active category filter (last write wins).
    fn search_does_not_compose_with_filter() {
        let items = vec![item(0, "a", "Desa"), item(1, "b", "Desa")];
        let mut c = NewsListController::new(items, DEFAULT_PAGE_SIZE, Recorder::default());
        c.set_category_filter("a");
        c.search("desa");
        assert_eq!(c.state().visible_items().len(), 2);
    }

    #[test]
    /// What: Pagination over 13 items with page size 6.
    ///
    /// - Output: page 1 holds ids 0..6, page 3 holds id 12; load more hidden only on page 3
    fn pagination_thirteen_items() {
        let mut c = NewsListController::new(numbered(13), 6, Recorder::default());
        assert_eq!(c.target().shown, (0..6u64).collect::<Vec<_>>());
        assert!(c.target().load_more);
        assert!(c.next_page());
        assert_eq!(c.target().shown, (6..12u64).collect::<Vec<_>>());
        assert!(c.target().load_more);
        assert!(c.next_page());
        assert_eq!(c.state().page(), 3);
        assert_eq!(c.page_items().iter().map(|n| n.id).collect::<Vec<_>>(), vec![12]);
        assert!(!c.target().load_more);
        let renders = c.target().renders;
        assert!(!c.next_page());
        assert_eq!(c.state().page(), 3);
        assert_eq!(c.target().renders, renders);
        assert_eq!(c.state().page_count(), 3);
    }

    #[test]
    /// What: Empty data set degrades to the placeholder without errors.
    fn empty_items_render_no_results() {
        let mut c = NewsListController::new(Vec::new(), DEFAULT_PAGE_SIZE, Recorder::default());
        assert!(c.target().no_results);
        c.set_category_filter("a");
        c.search("desa");
        c.dispatch(ListingCommand::NextPage);
        assert!(c.state().visible_items().is_empty());
        assert!(c.page_items().is_empty());
        assert_eq!(c.state().page(), 1);
        assert!(c.categories().is_empty());
    }

    #[test]
    /// What: Detail lookup covers all items, even ones filtered out.
    fn show_detail_uses_all_items() {
        let items = vec![item(10, "a", "x"), item(11, "b", "y")];
        let mut c = NewsListController::new(items, DEFAULT_PAGE_SIZE, Recorder::default());
        c.set_category_filter("a");
        c.dispatch(ListingCommand::ShowDetail(11));
        assert_eq!(c.target().opened, Some(11));
        assert!(!c.show_detail(99));
    }

    #[test]
    fn categories_first_seen_and_latest() {
        let items = vec![item(0, "b", "x"), item(1, "a", "y"), item(2, "b", "z")];
        let c = NewsListController::new(items, 0, Recorder::default());
        assert_eq!(c.categories(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(c.latest(2).len(), 2);
        assert_eq!(c.latest(10).len(), 3);
        assert_eq!(c.state().page_size(), 1);
    }
}
