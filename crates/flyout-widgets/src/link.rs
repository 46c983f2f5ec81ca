//! Link descriptors and the two link renderers a menu delegates to.
//!
//! A [`LinkDescriptor`] is either internal (same-site navigation, drawn with
//! [`NavLink`]) or external (leaves the site, drawn with [`ExternalLink`]).
//! The choice is a two-armed [`LinkKind`], decided once per descriptor.

use flyout_core::Command;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use serde::{Deserialize, Serialize};
use std::io;
use unicode_width::UnicodeWidthStr;

/// Marker drawn after external link text.
pub const EXTERNAL_MARKER: &str = " ↗";

const FOCUS_MARKER: &str = "▸ ";
const NO_MARKER: &str = "  ";

/// One entry of a dropdown menu.
///
/// Deserializes from `{ text, to, external? }`; `external` defaults to
/// `false`. `to` is passed through as-is, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    /// Text shown for the link.
    pub text: String,
    /// Route path for internal links, URL for external ones.
    pub to: String,
    /// Whether following the link leaves the site.
    #[serde(default)]
    pub external: bool,
}

impl LinkDescriptor {
    /// A same-site link.
    pub fn internal(text: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            to: to.into(),
            external: false,
        }
    }

    /// A link that leaves the site.
    pub fn external(text: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            to: to.into(),
            external: true,
        }
    }

    /// Which renderer this descriptor goes through.
    pub fn kind(&self) -> LinkKind {
        if self.external {
            LinkKind::External
        } else {
            LinkKind::Internal
        }
    }

    /// Columns needed to draw this link with its focus gutter and, for
    /// external links, the trailing marker.
    pub fn display_width(&self) -> usize {
        let marker = match self.kind() {
            LinkKind::External => EXTERNAL_MARKER.width(),
            LinkKind::Internal => 0,
        };
        FOCUS_MARKER.width() + self.text.width() + marker
    }
}

/// The renderer a link is delegated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-site navigation through [`NavLink`].
    Internal,
    /// Outward-bound link through [`ExternalLink`].
    External,
}

/// Styles shared by both link renderers.
#[derive(Debug, Clone)]
pub struct LinkStyle {
    /// Unfocused, inactive link text.
    pub normal: Style,
    /// Link holding keyboard focus.
    pub focused: Style,
    /// Internal link matching the current route.
    pub active: Style,
    /// Trailing marker on external links.
    pub marker: Style,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            active: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            marker: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Same-site link row. Highlighted when `active`.
pub struct NavLink<'a> {
    text: &'a str,
    focused: bool,
    active: bool,
    style: &'a LinkStyle,
}

impl<'a> NavLink<'a> {
    pub fn new(text: &'a str, style: &'a LinkStyle) -> Self {
        Self {
            text,
            focused: false,
            active: false,
            style,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for NavLink<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = self.style.normal;
        if self.active {
            style = style.patch(self.style.active);
        }
        if self.focused {
            style = style.patch(self.style.focused);
        }
        let gutter = if self.focused { FOCUS_MARKER } else { NO_MARKER };
        Line::from(vec![Span::styled(gutter, style), Span::styled(self.text, style)])
            .render(area, buf);
    }
}

/// Outward-bound link row, suffixed with [`EXTERNAL_MARKER`].
pub struct ExternalLink<'a> {
    text: &'a str,
    focused: bool,
    style: &'a LinkStyle,
}

impl<'a> ExternalLink<'a> {
    pub fn new(text: &'a str, style: &'a LinkStyle) -> Self {
        Self {
            text,
            focused: false,
            style,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ExternalLink<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            self.style.normal.patch(self.style.focused)
        } else {
            self.style.normal
        };
        let gutter = if self.focused { FOCUS_MARKER } else { NO_MARKER };
        Line::from(vec![
            Span::styled(gutter, style),
            Span::styled(self.text, style),
            Span::styled(EXTERNAL_MARKER, self.style.marker),
        ])
        .render(area, buf);
    }
}

/// Open `url` in the system browser without blocking the event loop.
///
/// The outcome is mapped to a message so the host can report failures.
pub fn open_in_browser<Msg: Send + 'static>(
    url: impl Into<String>,
    map: impl FnOnce(io::Result<()>) -> Msg + Send + 'static,
) -> Command<Msg> {
    let url = url.into();
    Command::perform(
        async move {
            tracing::debug!(%url, "opening external link");
            match tokio::task::spawn_blocking(move || open::that(&url)).await {
                Ok(result) => result,
                Err(err) => Err(io::Error::other(err)),
            }
        },
        map,
    )
}
