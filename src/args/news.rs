//! Command-line news listing.

use std::fmt::Write as _;

use portal_desa::logic::{ListingCommand, NewsListController, RenderTarget};
use portal_desa::sources::{DataSource, JsonNewsRepository, NewsRepository, load_news_or_empty};
use portal_desa::state::NewsItem;
use portal_desa::util::format_date;

/// Placeholder heading printed when nothing matches.
const NO_RESULTS: &str = "Tidak ada berita ditemukan";
/// Hint printed under the placeholder.
const NO_RESULTS_HINT: &str = "Coba ubah filter atau kata kunci pencarian";

/// Plain-text render target collecting what the listing pushes.
#[derive(Default)]
struct TextTarget {
    /// Last page shown.
    items: Vec<NewsItem>,
    /// Placeholder requested.
    no_results: bool,
    /// Load-more hint requested.
    more: bool,
}

impl RenderTarget for TextTarget {
    fn show_items(&mut self, items: &[NewsItem]) {
        self.items = items.to_vec();
        self.no_results = false;
    }

    fn show_no_results(&mut self) {
        self.items.clear();
        self.no_results = true;
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.more = visible;
    }

    fn open_detail(&mut self, _item: &NewsItem) {}
}

/// What: Render one listing page as text.
///
/// Inputs:
/// - `items`: All loaded news
/// - `category`, `search`: Optional filter and query, applied in that order
/// - `page`: Page to show (1-based; 0 reads as 1)
/// - `page_size`: Cards per page
///
/// Details:
/// - A search replaces the category filter, as in the TUI.
/// - A page past the last one prints the "no results" placeholder.
pub fn render_listing(
    items: Vec<NewsItem>,
    category: Option<&str>,
    search: Option<&str>,
    page: usize,
    page_size: usize,
) -> String {
    let mut ctl = NewsListController::new(items, page_size, TextTarget::default());
    if let Some(c) = category {
        ctl.dispatch(ListingCommand::SetCategory(c.to_string()));
    }
    if let Some(q) = search {
        ctl.dispatch(ListingCommand::Search(q.trim().to_string()));
    }
    let mut in_range = true;
    for _ in 1..page {
        if !ctl.next_page() {
            in_range = false;
            break;
        }
    }

    let state = ctl.state();
    let view = ctl.target();
    let mut out = String::new();
    if view.no_results || !in_range {
        let _ = writeln!(out, "{NO_RESULTS}");
        let _ = writeln!(out, "{NO_RESULTS_HINT}");
        return out;
    }
    let _ = writeln!(
        out,
        "Berita: {} ditemukan (halaman {}/{})",
        state.visible_items().len(),
        state.page(),
        state.page_count()
    );
    for item in &view.items {
        let _ = writeln!(
            out,
            "\n[{}] {}  ({}, {})",
            item.id,
            item.title,
            item.category,
            format_date(&item.date)
        );
        if !item.excerpt.is_empty() {
            let _ = writeln!(out, "    {}", item.excerpt);
        }
    }
    if view.more {
        let _ = writeln!(out, "\nMuat lebih banyak: --page {}", state.page() + 1);
    }
    out
}

/// What: Load news from `repo` and render the requested page.
///
/// Details:
/// - A failing repository renders as an empty listing.
pub async fn listing_from<R: NewsRepository + Sync>(
    repo: &R,
    category: Option<&str>,
    search: Option<&str>,
    page: usize,
    page_size: usize,
) -> String {
    let items = load_news_or_empty(repo).await;
    render_listing(items, category, search, page, page_size)
}

/// What: Handle the `news` subcommand: load news and print one page.
///
/// Output:
/// - Process exit code (always 0; an unavailable feed prints the placeholder).
pub async fn handle_news(
    source: DataSource,
    category: Option<&str>,
    search: Option<&str>,
    page: usize,
    page_size: usize,
) -> i32 {
    tracing::info!(source = %source, ?category, ?search, page, "news listing requested from CLI");
    let repo = JsonNewsRepository::new(source);
    print!("{}", listing_from(&repo, category, search, page, page_size).await);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_desa::sources::StaticNewsRepository;

    fn item(id: u64, title: &str, category: &str) -> NewsItem {
        NewsItem {
            id,
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            category: category.into(),
            author: String::new(),
            date: "2024-03-17".into(),
            image: String::new(),
        }
    }

    #[test]
    /// What: Page 2 shows the remainder and no further hint.
    fn prints_requested_page() {
        let items = (1..=8u64).map(|i| item(i, &format!("Kabar {i}"), "umum")).collect();
        let out = render_listing(items, None, None, 2, 6);
        assert!(out.contains("halaman 2/2"));
        assert!(out.contains("[7] Kabar 7"));
        assert!(!out.contains("[6] Kabar 6"));
        assert!(!out.contains("Muat lebih banyak"));
    }

    #[test]
    fn first_page_offers_more_and_dates_are_formatted() {
        let items = (1..=8u64).map(|i| item(i, &format!("Kabar {i}"), "umum")).collect();
        let out = render_listing(items, None, None, 1, 6);
        assert!(out.contains("--page 2"));
        assert!(out.contains("17 Maret 2024"));
    }

    #[test]
    fn empty_result_prints_placeholder() {
        let out = render_listing(vec![item(1, "Rapat", "kegiatan")], Some("olahraga"), None, 1, 6);
        assert!(out.starts_with(NO_RESULTS));
        assert!(out.contains(NO_RESULTS_HINT));
    }

    #[tokio::test]
    /// What: A page past the last prints the placeholder instead of the last page.
    async fn page_out_of_range_prints_placeholder() {
        let repo = StaticNewsRepository((1..=8u64).map(|i| item(i, &format!("Kabar {i}"), "umum")).collect());
        let out = listing_from(&repo, None, None, 9, 6).await;
        assert!(out.starts_with(NO_RESULTS));
        assert!(!out.contains("halaman"));
        let out = listing_from(&repo, None, None, 2, 6).await;
        assert!(out.contains("halaman 2/2"));
    }

    #[tokio::test]
    async fn empty_repository_prints_placeholder() {
        let out = listing_from(&StaticNewsRepository::default(), None, None, 1, 6).await;
        assert!(out.starts_with(NO_RESULTS));
        assert!(out.contains(NO_RESULTS_HINT));
    }

    #[test]
    /// What: Search after category clears the category (last write wins).
    fn search_overrides_category() {
        let items = vec![item(1, "Rapat Desa", "kegiatan"), item(2, "Rapat RT", "umum")];
        let out = render_listing(items, Some("kegiatan"), Some(" rapat "), 1, 6);
        assert!(out.contains("2 ditemukan"));
    }
}
