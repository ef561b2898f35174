//! Built-in content shown when `config.json` or `charts.json` is unavailable.

use crate::state::types::{ChartsDocument, SiteConfig};

/// Fallback `config.json`.
const DEFAULT_SITE_CONFIG: &str = r##"{
  "site": { "title": "Desa Sejahtera" },
  "hero": {
    "title": "Selamat Datang di Desa Sejahtera",
    "subtitle": "Desa yang maju, mandiri, dan sejahtera"
  },
  "infoCards": [
    { "icon": "fas fa-users", "number": "2,500", "label": "Jumlah Penduduk" },
    { "icon": "fas fa-home", "number": "650", "label": "Kepala Keluarga" },
    { "icon": "fas fa-map", "number": "15.5", "label": "Luas Wilayah (km²)" },
    { "icon": "fas fa-seedling", "number": "8", "label": "Dusun" }
  ],
  "contact": {
    "address": "Jl. Desa Sejahtera No. 123",
    "phone": "(021) 1234-5678",
    "email": "info@desasejahtera.id",
    "workingHours": {
      "weekdays": "Senin - Jumat: 08:00 - 16:00",
      "saturday": "Sabtu: 08:00 - 12:00",
      "sunday": "Minggu: Tutup"
    },
    "socialMedia": [
      { "platform": "facebook", "icon": "fab fa-facebook", "url": "#" },
      { "platform": "instagram", "icon": "fab fa-instagram", "url": "#" },
      { "platform": "twitter", "icon": "fab fa-twitter", "url": "#" },
      { "platform": "youtube", "icon": "fab fa-youtube", "url": "#" }
    ]
  }
}"##;

/// Fallback `charts.json`.
const DEFAULT_CHARTS: &str = r##"{
  "charts": {
    "demography": {
      "title": "Demografi Penduduk",
      "type": "doughnut",
      "data": {
        "labels": ["Laki-laki", "Perempuan"],
        "datasets": [
          { "data": [1300, 1200], "backgroundColor": ["#2E7D32", "#4CAF50"], "borderWidth": 2 }
        ]
      }
    },
    "education": {
      "title": "Tingkat Pendidikan",
      "type": "bar",
      "data": {
        "labels": ["SD", "SMP", "SMA", "Diploma", "S1", "S2/S3"],
        "datasets": [
          {
            "label": "Jumlah Penduduk",
            "data": [800, 600, 450, 150, 200, 50],
            "backgroundColor": "#1976D2",
            "borderColor": "#0D47A1",
            "borderWidth": 1
          }
        ]
      }
    },
    "occupation": {
      "title": "Mata Pencaharian",
      "type": "pie",
      "data": {
        "labels": ["Petani", "Pedagang", "PNS", "Swasta", "Buruh", "Lainnya"],
        "datasets": [
          {
            "data": [900, 400, 200, 300, 350, 350],
            "backgroundColor": ["#4CAF50", "#FF9800", "#2196F3", "#9C27B0", "#F44336", "#607D8B"]
          }
        ]
      }
    },
    "economy": {
      "title": "Perkembangan Ekonomi",
      "type": "line",
      "data": {
        "labels": ["2019", "2020", "2021", "2022", "2023", "2024"],
        "datasets": [
          {
            "label": "Pendapatan Desa (Juta Rupiah)",
            "data": [2800, 2650, 2900, 3200, 3500, 3800],
            "borderColor": "#4CAF50",
            "backgroundColor": "rgba(76, 175, 80, 0.1)"
          }
        ]
      }
    }
  },
  "summary": [
    { "icon": "fas fa-users", "title": "Total Penduduk", "value": "2,500", "description": "Jiwa" },
    { "icon": "fas fa-graduation-cap", "title": "Tingkat Pendidikan", "value": "65%", "description": "Lulusan SMA ke atas" },
    { "icon": "fas fa-briefcase", "title": "Mata Pencaharian", "value": "36%", "description": "Sektor Pertanian" },
    { "icon": "fas fa-chart-line", "title": "Pertumbuhan Ekonomi", "value": "15%", "description": "Peningkatan tahun ini" }
  ]
}"##;

/// Built-in site configuration.
#[must_use]
pub fn default_site_config() -> SiteConfig {
    serde_json::from_str(DEFAULT_SITE_CONFIG).unwrap_or_default()
}

/// Built-in statistics.
#[must_use]
pub fn default_charts() -> ChartsDocument {
    serde_json::from_str(DEFAULT_CHARTS).unwrap_or_default()
}

/// Summary figures used when `charts.json` has charts but no `summary`.
#[must_use]
pub fn default_summary() -> Vec<crate::state::types::StatSummary> {
    default_charts().summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::ChartKind;

    #[test]
    /// What: Built-in documents parse fully rather than silently defaulting.
    fn builtin_documents_parse() {
        let cfg: SiteConfig = serde_json::from_str(DEFAULT_SITE_CONFIG).expect("site config json");
        assert_eq!(cfg.site.title, "Desa Sejahtera");
        assert_eq!(cfg.info_cards.len(), 4);
        assert_eq!(
            cfg.contact.expect("contact").working_hours.sunday,
            "Minggu: Tutup"
        );

        let charts: ChartsDocument = serde_json::from_str(DEFAULT_CHARTS).expect("charts json");
        assert_eq!(charts.charts.len(), 4);
        assert_eq!(charts.charts["occupation"].kind, ChartKind::Pie);
        assert_eq!(charts.summary.len(), 4);
        assert_eq!(default_summary()[0].title, "Total Penduduk");
    }
}
