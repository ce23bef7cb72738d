use serde::Deserialize;
use thiserror::Error;

use crate::enums::viewport_class::ViewportClass;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub studio: StudioConfig,
    pub catalog: CatalogConfig,
    pub layout: LayoutConfig,
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StudioConfig {
    pub name: String,
    pub tagline: String,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "FLIPSTUDIO".to_string(),
            tagline: "We Design Bespoke Solutions For Architecture And Interior Designs"
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Искусственная задержка при смене категории
    pub filter_delay_ms: u32,
    /// Сколько "похожих" услуг показывать
    pub related_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            filter_delay_ms: 400,
            related_limit: 3,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Сколько карточек в сетке проектов
    pub target_card_count: usize,
    pub row_unit_px: u32,
    pub mobile_below_px: f64,
    pub tablet_below_px: f64,
    /// После какой прокрутки шапка детальной страницы становится непрозрачной
    pub detail_scroll_threshold_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            target_card_count: 12,
            row_unit_px: 10,
            mobile_below_px: ViewportClass::MOBILE_BELOW,
            tablet_below_px: ViewportClass::TABLET_BELOW,
            detail_scroll_threshold_px: 100.0,
        }
    }
}

impl LayoutConfig {
    pub fn viewport_class(&self, width: f64) -> ViewportClass {
        ViewportClass::classify(width, self.mobile_below_px, self.tablet_below_px)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    pub hero_interval_ms: u32,
    pub slider_interval_ms: u32,
    pub detail_interval_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            hero_interval_ms: 5000,
            slider_interval_ms: 4000,
            detail_interval_ms: 4000,
            swipe_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub subject: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "hello@flipstudio.design".to_string(),
            subject: "New project enquiry".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[studio]
name = "FLIPSTUDIO"
tagline = "We Design Bespoke Solutions For Architecture And Interior Designs"

[catalog]
filter_delay_ms = 400
related_limit = 3

[layout]
target_card_count = 12
row_unit_px = 10
mobile_below_px = 481.0
tablet_below_px = 1025.0
detail_scroll_threshold_px = 100.0

[carousel]
hero_interval_ms = 5000
slider_interval_ms = 4000
detail_interval_ms = 4000
swipe_threshold_px = 50.0

[contact]
email = "hello@flipstudio.design"
subject = "New project enquiry"
"#;

impl SiteConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load site configuration
///
/// Search order:
/// 1. The override document (bundled `site.toml`), if given and valid
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> SiteConfig {
    if let Some(contents) = override_toml {
        match SiteConfig::from_toml_str(contents) {
            Ok(config) => {
                log::info!("Loaded site config override");
                return config;
            }
            Err(e) => log::warn!("Ignoring site config override: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    SiteConfig::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = SiteConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [catalog]
            filter_delay_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.filter_delay_ms, 250);
        assert_eq!(config.catalog.related_limit, 3);
        assert_eq!(config.layout.target_card_count, 12);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[catalog]\nfilter_delay_ms = \"soon\""));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(load_config(None), SiteConfig::default());
    }

    #[test]
    fn test_viewport_class_uses_breakpoints() {
        let mut layout = LayoutConfig::default();
        assert_eq!(layout.viewport_class(400.0), ViewportClass::Mobile);
        layout.mobile_below_px = 360.0;
        assert_eq!(layout.viewport_class(400.0), ViewportClass::Tablet);
    }
}
