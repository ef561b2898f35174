//! Modal dialog state for the UI.

use crate::state::types::NewsItem;

/// Overlay drawn above the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Full article view.
    NewsDetail {
        /// Article shown.
        item: NewsItem,
        /// Vertical scroll offset in lines.
        scroll: u16,
    },
}

impl Modal {
    /// Whether an overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_detail_counts_as_open() {
        assert!(!Modal::None.is_open());
        let item: NewsItem =
            serde_json::from_str(r#"{"id": 1, "title": "Rapat", "category": "umum"}"#)
                .expect("news item");
        assert!(Modal::NewsDetail { item, scroll: 0 }.is_open());
    }
}
