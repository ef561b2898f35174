//! Central `AppState` container shared by the event and UI layers.

use std::time::{Duration, Instant};

use crate::logic::{
    DEFAULT_PAGE_SIZE, ListingCommand, NewsListController, SUBMIT_SUCCESS, ServiceForm,
    ServiceRequest,
};
use crate::sources::PortalData;
use crate::state::modal::Modal;
use crate::state::news_view::NewsView;
use crate::state::types::{
    ALL_CATEGORIES, ChartsDocument, NewsItem, Page, Profile, ServiceInfo, SiteConfig,
};
use crate::theme::ThemeMode;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// News cards teased on the home page.
pub const HOME_NEWS_COUNT: usize = 3;

/// Where typed characters go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate and trigger actions.
    #[default]
    Normal,
    /// Keys edit the news search box.
    Search,
    /// Keys edit the service request form.
    Form,
}

/// Global application state mutated by the event layer and read by the UI.
#[derive(Debug)]
pub struct AppState {
    /// Page shown below the navigation bar.
    pub page: Page,
    /// Active color mode.
    pub mode: ThemeMode,
    /// Current input routing.
    pub input_mode: InputMode,
    /// `true` until the startup load finishes.
    pub loading: bool,
    /// Site identity, hero, info cards and contact.
    pub site: SiteConfig,
    /// Village profile, when available.
    pub profile: Option<Profile>,
    /// Service cards on the services page.
    pub services: Vec<ServiceInfo>,
    /// Statistics.
    pub charts: ChartsDocument,
    /// News listing and its terminal render target.
    pub news: NewsListController<NewsView>,
    /// Text in the news search box.
    pub search_input: String,
    /// Index into [`AppState::category_options`] of the active filter button.
    pub category_index: usize,
    /// Highlighted card on the current news page.
    pub selected_card: usize,
    /// Service request form.
    pub form: ServiceForm,
    /// Active overlay.
    pub modal: Modal,
    /// Vertical scroll of long pages (profile, statistics).
    pub page_scroll: u16,
    /// Transient message in the footer area.
    pub toast_message: Option<String>,
    /// When the toast disappears.
    pub toast_expires_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ThemeMode::default(), DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    /// What: Create the state shown while data is loading.
    ///
    /// Inputs:
    /// - `mode`: Persisted theme mode
    /// - `page_size`: News cards per page
    #[must_use]
    pub fn new(mode: ThemeMode, page_size: usize) -> Self {
        Self {
            page: Page::Home,
            mode,
            input_mode: InputMode::Normal,
            loading: true,
            site: SiteConfig::default(),
            profile: None,
            services: Vec::new(),
            charts: ChartsDocument::default(),
            news: NewsListController::new(Vec::new(), page_size, NewsView::default()),
            search_input: String::new(),
            category_index: 0,
            selected_card: 0,
            form: ServiceForm::default(),
            modal: Modal::None,
            page_scroll: 0,
            toast_message: None,
            toast_expires_at: None,
        }
    }

    /// What: Install loaded portal data and leave the loading screen.
    ///
    /// Details:
    /// - The listing is rebuilt with the current page size; filter and search reset.
    pub fn apply_data(&mut self, data: PortalData) {
        let page_size = self.news.state().page_size();
        self.site = data.site;
        self.profile = data.profile;
        self.services = data.services.services;
        self.form = ServiceForm::new(data.services.service_types);
        self.charts = data.charts;
        self.news = NewsListController::new(data.news, page_size, NewsView::default());
        self.search_input.clear();
        self.category_index = 0;
        self.selected_card = 0;
        self.loading = false;
    }

    /// Filter buttons: `"all"` followed by the categories present in the data.
    #[must_use]
    pub fn category_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.news.categories())
            .collect()
    }

    /// First news items for the home page teaser.
    #[must_use]
    pub fn latest_news(&self) -> &[NewsItem] {
        self.news.latest(HOME_NEWS_COUNT)
    }

    /// What: Move the category filter by `delta` buttons and apply it.
    ///
    /// Details:
    /// - Wraps around; clears the search box since the filter replaces any query.
    pub fn cycle_category(&mut self, delta: isize) {
        let options = self.category_options();
        let len = options.len();
        let step = delta.unsigned_abs() % len;
        self.category_index = if delta >= 0 {
            (self.category_index + step) % len
        } else {
            (self.category_index + len - step) % len
        };
        self.search_input.clear();
        self.selected_card = 0;
        let category = options[self.category_index].clone();
        self.news.dispatch(ListingCommand::SetCategory(category));
    }

    /// What: Run the search box text against the listing.
    ///
    /// Details:
    /// - The query is trimmed; the filter buttons fall back to "all".
    pub fn apply_search(&mut self) {
        let query = self.search_input.trim().to_string();
        self.category_index = 0;
        self.selected_card = 0;
        self.news.dispatch(ListingCommand::Search(query));
    }

    /// Show the next news page when one exists.
    pub fn load_more(&mut self) {
        if self.news.state().has_more() {
            self.news.dispatch(ListingCommand::NextPage);
            self.selected_card = 0;
        }
    }

    /// Move the card highlight by `delta`, clamped to the displayed cards.
    pub fn move_card(&mut self, delta: isize) {
        let count = self.news.target().cards.len();
        if count == 0 {
            self.selected_card = 0;
            return;
        }
        let step = delta.unsigned_abs();
        self.selected_card = if delta >= 0 {
            self.selected_card.saturating_add(step).min(count - 1)
        } else {
            self.selected_card.saturating_sub(step)
        };
    }

    /// What: Open the detail modal for an article id.
    ///
    /// Output:
    /// - `true` when the listing knew the id and the modal opened.
    pub fn open_detail(&mut self, id: u64) -> bool {
        self.news.dispatch(ListingCommand::ShowDetail(id));
        match self.news.target_mut().take_detail() {
            Some(item) => {
                self.modal = Modal::NewsDetail { item, scroll: 0 };
                true
            }
            None => false,
        }
    }

    /// Open the detail modal for the highlighted card.
    pub fn open_selected_detail(&mut self) -> bool {
        let id = self
            .news
            .target()
            .cards
            .get(self.selected_card)
            .map(|n| n.id);
        id.is_some_and(|id| self.open_detail(id))
    }

    /// Switch to `page`, leaving any text input.
    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(from = ?self.page, to = ?page, "page changed");
        }
        self.page = page;
        self.page_scroll = 0;
        self.input_mode = InputMode::Normal;
    }

    /// Flip light/dark mode and return the new mode.
    pub const fn toggle_theme(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    /// What: Validate and submit the service form.
    ///
    /// Output:
    /// - The request on success; a confirmation toast is shown and the form resets.
    pub fn submit_form(&mut self) -> Option<ServiceRequest> {
        let request = self.form.submit()?;
        self.input_mode = InputMode::Normal;
        self.show_toast(SUBMIT_SUCCESS);
        Some(request)
    }

    /// Show a toast for [`TOAST_DURATION`].
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + TOAST_DURATION);
    }

    /// What: Clear the toast once it has expired.
    ///
    /// Output:
    /// - `true` when a toast was removed and a redraw is needed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        match self.toast_expires_at {
            Some(at) if now >= at => {
                self.toast_message = None;
                self.toast_expires_at = None;
                true
            }
            _ => false,
        }
    }
}
