//! Site navigation loaded from TOML.
//!
//! ```toml
//! start = "/docs"
//!
//! [[menus]]
//! title = "Products"
//!
//! [[menus.links]]
//! text = "Docs"
//! to = "/docs"
//!
//! [[menus.links]]
//! text = "Blog"
//! to = "https://blog.example.com"
//! external = true
//! ```

use flyout_widgets::dropdown_menu::DropdownMenu;
use flyout_widgets::link::LinkDescriptor;
use flyout_widgets::nav_bar::NavBar;
use flyout_widgets::route::Location;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors that can occur while loading a [`SiteNav`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The contents are not a valid site navigation document.
    #[error("invalid navigation config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One dropdown menu: a title and its ordered links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    pub title: String,
    #[serde(default)]
    pub links: Vec<LinkDescriptor>,
}

/// The whole navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteNav {
    /// Route shown at startup; internal links matching it render active.
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default)]
    pub menus: Vec<MenuConfig>,
}

fn default_start() -> String {
    "/".to_string()
}

impl Default for SiteNav {
    fn default() -> Self {
        Self {
            start: default_start(),
            menus: Vec::new(),
        }
    }
}

impl SiteNav {
    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let nav = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), menus = nav.menus.len(), "loaded site navigation");
        Ok(nav)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build a nav bar with one menu per entry, located at `start`.
    pub fn nav_bar(&self) -> NavBar {
        let menus = self
            .menus
            .iter()
            .map(|menu| {
                DropdownMenu::new(menu.title.clone(), menu.links.clone())
                    .with_location(Location::new(self.start.clone()))
            })
            .collect();
        NavBar::new(menus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flyout_widgets::link::LinkKind;

    const PRODUCTS: &str = r#"
        start = "/docs"

        [[menus]]
        title = "Products"

        [[menus.links]]
        text = "Docs"
        to = "/docs"

        [[menus.links]]
        text = "Blog"
        to = "https://blog.example.com"
        external = true

        [[menus]]
        title = "Empty"
    "#;

    #[test]
    fn parses_menus_in_order() {
        let nav = SiteNav::from_toml_str(PRODUCTS).unwrap();
        assert_eq!(nav.start, "/docs");
        assert_eq!(nav.menus.len(), 2);
        assert_eq!(
            nav.menus[0].links,
            vec![
                LinkDescriptor::internal("Docs", "/docs"),
                LinkDescriptor::external("Blog", "https://blog.example.com"),
            ]
        );
        assert!(nav.menus[1].links.is_empty());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let nav = SiteNav::from_toml_str("").unwrap();
        assert_eq!(nav, SiteNav::default());
        assert_eq!(nav.start, "/");
    }

    #[test]
    fn nav_bar_carries_titles_links_and_location() {
        let bar = SiteNav::from_toml_str(PRODUCTS).unwrap().nav_bar();
        let titles: Vec<_> = bar.menus().iter().map(|m| m.title()).collect();
        assert_eq!(titles, vec!["Products", "Empty"]);

        let entries = bar.menus()[0].entries();
        assert_eq!(entries[1].kind, LinkKind::External);
        assert!(entries[0].active);
        assert!(!bar.menus()[0].is_expanded());
    }

    #[test]
    fn wrong_types_are_parse_errors() {
        let err = SiteNav::from_toml_str("menus = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid navigation config"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SiteNav::load("/nonexistent/flyout/nav.toml").unwrap_err();
        match err {
            ConfigError::Io { ref path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/flyout/nav.toml"))
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
