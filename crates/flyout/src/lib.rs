//! **flyout** -- dropdown site navigation for [`ratatui`] terminal UIs.
//!
//! This umbrella crate re-exports the runtime from [`flyout_core`] at its
//! root, the widgets under [`widgets`], and adds [`config`] for loading a
//! navigation bar from TOML.
//!
//! ```ignore
//! use flyout::config::SiteNav;
//!
//! let nav = SiteNav::load("nav.toml")?;
//! let bar = nav.nav_bar();
//! ```
//!
//! See `demos/site_nav.rs` for a complete program.

pub mod config;

pub use flyout_core::*;
pub mod widgets {
    pub use flyout_widgets::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
