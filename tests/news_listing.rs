//! Integration tests for the news listing controller through the public API.

use portal_desa::logic::{ListingCommand, NewsListController, RenderTarget};
use portal_desa::sources::{DataSource, JsonNewsRepository, NewsRepository, load_news_or_empty};
use portal_desa::state::NewsItem;

/// Render target recording every call in order.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
    shown: Vec<u64>,
    more: bool,
    opened: Option<u64>,
}

impl RenderTarget for Recorder {
    fn show_items(&mut self, items: &[NewsItem]) {
        self.shown = items.iter().map(|n| n.id).collect();
        self.calls.push(format!("items:{}", items.len()));
    }

    fn show_no_results(&mut self) {
        self.shown.clear();
        self.calls.push("no_results".into());
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.more = visible;
        self.calls.push(format!("more:{visible}"));
    }

    fn open_detail(&mut self, item: &NewsItem) {
        self.opened = Some(item.id);
    }
}

fn item(id: u64, category: &str, title: &str) -> NewsItem {
    NewsItem {
        id,
        title: title.into(),
        excerpt: format!("Ringkasan {id}"),
        content: format!("Isi berita nomor {id}"),
        category: category.into(),
        author: "Admin Desa".into(),
        date: "2024-10-05".into(),
        image: String::new(),
    }
}

fn sample() -> Vec<NewsItem> {
    vec![
        item(1, "kegiatan", "Gotong Royong Bersih Desa"),
        item(2, "pengumuman", "Jadwal Pembagian BLT"),
        item(3, "kesehatan", "Posyandu Balita"),
        item(4, "kegiatan", "Lomba Tujuh Belasan"),
        item(5, "pembangunan", "Perbaikan Jalan Dusun"),
        item(6, "kesehatan", "Vaksinasi Lansia"),
        item(7, "kegiatan", "Pelatihan UMKM"),
        item(8, "pengumuman", "Musyawarah Desa"),
    ]
}

#[test]
/// What: A full browse session: filter, page, search, detail, reset.
fn browse_session() {
    let mut ctl = NewsListController::new(sample(), 6, Recorder::default());
    assert_eq!(ctl.target().shown, vec![1, 2, 3, 4, 5, 6]);
    assert!(ctl.target().more);

    ctl.dispatch(ListingCommand::NextPage);
    assert_eq!(ctl.target().shown, vec![7, 8]);
    assert!(!ctl.target().more);

    ctl.dispatch(ListingCommand::SetCategory("kegiatan".into()));
    assert_eq!(ctl.target().shown, vec![1, 4, 7]);
    assert_eq!(ctl.state().page(), 1);

    ctl.dispatch(ListingCommand::Search("POSYANDU".into()));
    assert_eq!(ctl.target().shown, vec![3]);
    assert_eq!(ctl.state().active_filter(), "all");

    ctl.dispatch(ListingCommand::ShowDetail(8));
    assert_eq!(ctl.target().opened, Some(8));

    ctl.dispatch(ListingCommand::Search(String::new()));
    assert_eq!(ctl.state().visible_items().len(), 8);
}

#[test]
/// What: Each render ends with the load-more visibility update.
fn render_call_order() {
    let mut ctl = NewsListController::new(sample(), 6, Recorder::default());
    ctl.dispatch(ListingCommand::SetCategory("olahraga".into()));
    assert_eq!(
        ctl.target().calls,
        vec!["items:6", "more:true", "no_results", "more:false"]
    );
}

#[test]
fn unknown_detail_id_is_ignored() {
    let mut ctl = NewsListController::new(sample(), 6, Recorder::default());
    ctl.dispatch(ListingCommand::ShowDetail(99));
    assert!(ctl.target().opened.is_none());
}

#[tokio::test]
/// What: Loading from a directory feeds the controller; a broken file yields an empty listing.
async fn repository_feeds_controller() {
    let dir = tempfile::tempdir().expect("tempdir");
    let body = serde_json::json!({ "news": sample() });
    std::fs::write(dir.path().join("news.json"), body.to_string()).expect("write");
    let repo = JsonNewsRepository::new(DataSource::Dir(dir.path().to_path_buf()));
    let items = repo.load().await.expect("load");
    assert_eq!(items.len(), 8);
    let ctl = NewsListController::new(items, 6, Recorder::default());
    assert_eq!(ctl.categories(), vec!["kegiatan", "pengumuman", "kesehatan", "pembangunan"]);

    std::fs::write(dir.path().join("news.json"), "{ not json").expect("write");
    let items = load_news_or_empty(&repo).await;
    let ctl = NewsListController::new(items, 6, Recorder::default());
    assert_eq!(ctl.target().calls, vec!["no_results", "more:false"]);
}
