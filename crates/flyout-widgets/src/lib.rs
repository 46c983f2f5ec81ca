//! Navigation widgets for **flyout**.
//!
//! Every widget implements [`flyout_core::Component`], so it can be embedded
//! in any [`flyout_core::Model`] and placed with [`ratatui`] layouts.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`dropdown_menu`] | Title trigger revealing a list of links on hover, click or focus |
//! | [`nav_bar`] | Row of dropdown menus sharing keyboard focus |
//! | [`link`] | Link descriptors and the internal / external link renderers |
//! | [`route`] | Current location, used to mark internal links active |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for cycling focus across components |
//! | [`key`] | Key bindings the menus react to |

pub mod dropdown_menu;
pub mod focus;
pub mod key;
pub mod link;
pub mod nav_bar;
pub mod route;

pub use dropdown_menu::DropdownMenu;
pub use link::{LinkDescriptor, LinkKind};
pub use nav_bar::NavBar;
pub use route::Location;
