//! Core value types used by portal state, mirroring the static JSON data files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wildcard category accepted by the news filter; never a real category.
pub const ALL_CATEGORIES: &str = "all";

/// Single news entry as published in `news.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique identifier used by the detail view.
    pub id: u64,
    /// Headline.
    pub title: String,
    /// Short teaser shown on cards.
    #[serde(default)]
    pub excerpt: String,
    /// Full article body; never truncated in the detail view.
    #[serde(default)]
    pub content: String,
    /// Category tag (open set, compared case-sensitively).
    pub category: String,
    /// Author display name.
    #[serde(default)]
    pub author: String,
    /// Publication date, `YYYY-MM-DD` in the data file.
    #[serde(default)]
    pub date: String,
    /// Image URL reference.
    #[serde(default)]
    pub image: String,
}

/// Top-level shape of `news.json`.
///
/// A missing or `null` `news` key yields an empty list rather than an error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewsDocument {
    /// All published news in file order; `None` when absent or `null`.
    #[serde(default)]
    pub news: Option<Vec<NewsItem>>,
}

/// Site title block from `config.json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Village name used in the header.
    #[serde(default)]
    pub title: String,
}

/// Hero banner texts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Hero {
    /// Greeting headline.
    #[serde(default)]
    pub title: String,
    /// Tag line under the headline.
    #[serde(default)]
    pub subtitle: String,
}

/// Headline number on the home page (population, households, ...).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InfoCard {
    /// Icon class from the web portal; shown as a glyph hint only.
    #[serde(default)]
    pub icon: String,
    /// Pre-formatted number text (e.g. "2,500").
    #[serde(default)]
    pub number: String,
    /// Caption.
    #[serde(default)]
    pub label: String,
}

/// Office opening hours as three free-text lines.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkingHours {
    /// Monday to Friday.
    #[serde(default)]
    pub weekdays: String,
    /// Saturday.
    #[serde(default)]
    pub saturday: String,
    /// Sunday.
    #[serde(default)]
    pub sunday: String,
}

/// Social media link shown in the footer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name (facebook, instagram, ...).
    #[serde(default)]
    pub platform: String,
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Target URL.
    #[serde(default)]
    pub url: String,
}

/// Contact block rendered in the footer of every page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Office address.
    #[serde(default)]
    pub address: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Opening hours.
    #[serde(default)]
    pub working_hours: WorkingHours,
    /// Social links.
    #[serde(default)]
    pub social_media: Vec<SocialLink>,
}

/// Contents of `config.json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteInfo,
    /// Home page banner.
    #[serde(default)]
    pub hero: Hero,
    /// Headline numbers.
    #[serde(default)]
    pub info_cards: Vec<InfoCard>,
    /// Footer contact data.
    #[serde(default)]
    pub contact: Option<Contact>,
}

/// Titled profile section whose body is a list of paragraphs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParagraphSection {
    /// Section heading.
    #[serde(default)]
    pub title: String,
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Paragraphs or list entries.
    #[serde(default)]
    pub content: Vec<String>,
}

/// Titled profile section with a single text body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TextSection {
    /// Section heading.
    #[serde(default)]
    pub title: String,
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
}

/// Legend entry of the village map.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapLegendItem {
    /// Legend caption.
    #[serde(default)]
    pub label: String,
    /// CSS color (`#RRGGBB`).
    #[serde(default)]
    pub color: String,
}

/// Map section of the profile page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MapSection {
    /// Section heading.
    #[serde(default)]
    pub title: String,
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Map image URL.
    #[serde(default)]
    pub image: String,
    /// Legend entries.
    #[serde(default)]
    pub legend: Vec<MapLegendItem>,
}

/// Office holder listed in the leadership section.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    /// Office title.
    #[serde(default)]
    pub title: String,
    /// Holder name.
    #[serde(default)]
    pub name: String,
    /// Term of office.
    #[serde(default)]
    pub period: String,
}

/// Leadership section of the profile page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LeadershipSection {
    /// Section heading.
    #[serde(default)]
    pub title: String,
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Office holders.
    #[serde(default)]
    pub positions: Vec<Position>,
}

/// Village profile; every section is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    /// History paragraphs.
    pub history: Option<ParagraphSection>,
    /// Vision statement.
    pub vision: Option<TextSection>,
    /// Mission bullet list.
    pub mission: Option<ParagraphSection>,
    /// Map and legend.
    pub map: Option<MapSection>,
    /// Leadership roster.
    pub leadership: Option<LeadershipSection>,
}

/// Top-level shape of `profile.json`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProfileDocument {
    /// Profile body.
    pub profile: Option<Profile>,
}

/// Public service offered at the village office.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Service name.
    #[serde(default)]
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
}

/// Selectable option of the request form's service type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceType {
    /// Submitted value.
    #[serde(default)]
    pub value: String,
    /// Display label.
    #[serde(default)]
    pub label: String,
}

/// Contents of `services.json`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesDocument {
    /// Service cards.
    #[serde(default)]
    pub services: Vec<ServiceInfo>,
    /// Form options.
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
}

/// Kind of chart to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Ring chart of shares.
    Doughnut,
    /// Vertical bars.
    Bar,
    /// Pie chart of shares.
    Pie,
    /// Series over time.
    Line,
}

impl ChartKind {
    /// Whether the chart shows parts of a whole rather than magnitudes.
    #[must_use]
    pub const fn is_share(self) -> bool {
        matches!(self, Self::Doughnut | Self::Pie)
    }
}

/// Colors may be a single CSS color or one per data point.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Same color for every point.
    Single(String),
    /// One color per point, cycled when shorter than the data.
    PerPoint(Vec<String>),
}

impl ColorSpec {
    /// Color for the point at `index`.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(c) => Some(c.as_str()),
            Self::PerPoint(v) if v.is_empty() => None,
            Self::PerPoint(v) => v.get(index % v.len()).map(String::as_str),
        }
    }
}

/// One data series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Series label.
    #[serde(default)]
    pub label: String,
    /// Values aligned with the chart labels.
    #[serde(default)]
    pub data: Vec<f64>,
    /// Fill colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    /// Border colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<ColorSpec>,
    /// Border width in pixels on the web portal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u16>,
}

/// Labels and series of a chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Category labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Series.
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// Typed chart configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Heading.
    #[serde(default)]
    pub title: String,
    /// Chart kind.
    #[serde(rename = "type")]
    pub kind: ChartKind,
    /// Labels and series.
    #[serde(default)]
    pub data: ChartData,
}

/// Headline figure on the statistics page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatSummary {
    /// Icon class.
    #[serde(default)]
    pub icon: String,
    /// Caption.
    #[serde(default)]
    pub title: String,
    /// Pre-formatted value.
    #[serde(default)]
    pub value: String,
    /// Short explanation.
    #[serde(default)]
    pub description: String,
}

/// Contents of `charts.json`; map keys keep a stable order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChartsDocument {
    /// Charts by key (demography, education, ...).
    #[serde(default)]
    pub charts: BTreeMap<String, ChartSpec>,
    /// Headline figures.
    #[serde(default)]
    pub summary: Vec<StatSummary>,
}

/// Portal pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    #[default]
    Home,
    /// Village profile.
    Profile,
    /// Statistics and charts.
    Statistics,
    /// Service request form.
    Services,
    /// News listing.
    News,
}

impl Page {
    /// Navigation order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Profile,
        Self::Statistics,
        Self::Services,
        Self::News,
    ];

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Beranda",
            Self::Profile => "Profil Desa",
            Self::Statistics => "Infografis",
            Self::Services => "Layanan",
            Self::News => "Berita",
        }
    }

    /// Page after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Page before this one, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Deserialize a news entry with only the required fields.
    ///
    /// - Input: JSON object with id, title and category
    /// - Output: Optional text fields default to empty strings
    fn news_item_optional_fields_default_to_empty() {
        let item: NewsItem =
            serde_json::from_str(r#"{"id": 7, "title": "Rapat", "category": "kegiatan"}"#)
                .expect("valid news item");
        assert_eq!(item.id, 7);
        assert!(item.excerpt.is_empty());
        assert!(item.content.is_empty());
        assert!(item.date.is_empty());
    }

    #[test]
    /// What: Chart colors accept both the single and the per-point form.
    fn color_spec_single_and_per_point() {
        let ds: Dataset = serde_json::from_str(
            r##"{"data": [1, 2, 3], "backgroundColor": ["#111111", "#222222"], "borderColor": "#333333"}"##,
        )
        .expect("valid dataset");
        let bg = ds.background_color.expect("background present");
        assert_eq!(bg.at(0), Some("#111111"));
        assert_eq!(bg.at(2), Some("#111111"));
        assert_eq!(ds.border_color.and_then(|c| c.at(5).map(str::to_string)), Some("#333333".to_string()));
    }

    #[test]
    fn page_navigation_wraps() {
        assert_eq!(Page::News.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::News);
        assert_eq!(Page::Profile.next(), Page::Statistics);
    }
}
