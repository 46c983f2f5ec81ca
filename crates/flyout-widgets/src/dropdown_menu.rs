//! Flyout navigation menu: a title trigger that reveals a list of links.
//!
//! The menu has exactly two states, collapsed (initial) and expanded:
//!
//! | Event | Result |
//! |-------|--------|
//! | pointer enters the menu's bounding box | expanded |
//! | pointer leaves the bounding box | collapsed |
//! | trigger gains focus | expanded |
//! | trigger activated (Enter, Space, click) | flipped |
//! | last link loses focus | collapsed |
//!
//! While collapsed the list is not drawn and no link is a tab stop. Each
//! entry is drawn by [`NavLink`] or [`ExternalLink`] depending on its
//! [`LinkKind`]; following one emits [`Message::Navigate`] or
//! [`Message::OpenExternal`] for the host to act on.
//!
//! Raw terminal input goes in through [`Message::Mouse`] and
//! [`Message::KeyPress`]; the menu turns it into the semantic messages above.
//! Those can also be sent directly.

use crate::key::MenuKeys;
use crate::link::{ExternalLink, LinkDescriptor, LinkKind, LinkStyle, NavLink};
use crate::route::Location;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use flyout_core::command::Command;
use flyout_core::component::Component;
use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;
use std::cell::Cell;

/// Trigger label while the list is hidden.
pub const SHOW_CONTENT_LABEL: &str = "Show Dropdown's Content";
/// Trigger label while the list is shown.
pub const HIDE_CONTENT_LABEL: &str = "Hide Dropdown's Content";

const INDICATOR_COLLAPSED: &str = "▼";
const INDICATOR_EXPANDED: &str = "▲";

/// A position in the menu's tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Trigger,
    Link(usize),
}

/// Direction of keyboard travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// How urgently assistive technology should read an announcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Live {
    /// Read when the user is idle.
    Polite,
    /// Interrupt whatever is being read.
    Assertive,
}

/// Text for assistive technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub live: Live,
}

/// Whether the link list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListVisibility {
    Shown,
    Hidden,
}

impl ListVisibility {
    /// Class name for hosts that mirror the state into markup or themes.
    pub fn as_class(self) -> &'static str {
        match self {
            ListVisibility::Shown => "shown",
            ListVisibility::Hidden => "hidden",
        }
    }
}

/// Messages for the dropdown menu.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw mouse input, classified against the last rendered layout.
    Mouse(MouseEvent),
    /// Raw key input. Ignored unless the menu holds focus.
    KeyPress(KeyEvent),
    /// Pointer entered the menu's bounding box.
    PointerEnter,
    /// Pointer left the menu's bounding box.
    PointerLeave,
    /// A tab stop received focus.
    Focus(FocusTarget),
    /// A tab stop lost focus.
    Blur(FocusTarget),
    /// The trigger was activated.
    Activate,
    /// Close the list. Wired as the last link's blur handler.
    Collapse,
    /// Follow the link at this index.
    Follow(usize),
    /// Focus arrives from outside the menu.
    FocusEnter(Direction),
    /// The host's current route changed.
    RouteChanged(String),
    /// Emitted: navigate to a same-site route.
    Navigate(String),
    /// Emitted: open an outward-bound URL.
    OpenExternal(String),
    /// Emitted after every state change with the trigger's new label.
    Announce(Announcement),
    /// Emitted: focus moved past the first or last tab stop.
    FocusExit(Direction),
}

/// One entry as the menu will render it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkView<'a> {
    pub index: usize,
    pub text: &'a str,
    pub to: &'a str,
    pub kind: LinkKind,
    /// Reachable with Tab. Equal to the menu's expanded state.
    pub focusable: bool,
    /// Internal link matching the current route. Never set for external links.
    pub active: bool,
    /// Message dispatched when this entry loses focus.
    pub on_blur: Option<Message>,
}

/// Visual style for the dropdown menu.
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub trigger: Style,
    pub trigger_focused: Style,
    pub indicator: Style,
    pub border: Style,
    pub link: LinkStyle,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            trigger: Style::default().add_modifier(Modifier::BOLD),
            trigger_focused: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            indicator: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            link: LinkStyle::default(),
        }
    }
}

struct MenuLayout {
    trigger: Rect,
    list: Option<Rect>,
    rows: Option<Rect>,
}

/// A dropdown navigation menu.
///
/// ```ignore
/// use flyout_widgets::dropdown_menu::DropdownMenu;
/// use flyout_widgets::link::LinkDescriptor;
///
/// let menu = DropdownMenu::new(
///     "Products",
///     vec![
///         LinkDescriptor::internal("Docs", "/docs"),
///         LinkDescriptor::external("Blog", "https://blog.example.com"),
///     ],
/// );
/// assert!(!menu.is_expanded());
/// ```
pub struct DropdownMenu {
    title: String,
    links: Vec<LinkDescriptor>,
    expanded: bool,
    focus: Option<FocusTarget>,
    hovered: bool,
    location: Location,
    keys: MenuKeys,
    style: MenuStyle,
    // Set during view, read when classifying mouse input.
    area: Cell<Rect>,
    screen: Cell<Rect>,
}

impl DropdownMenu {
    /// Create a collapsed menu. `links` may be empty.
    pub fn new(title: impl Into<String>, links: Vec<LinkDescriptor>) -> Self {
        Self {
            title: title.into(),
            links,
            expanded: false,
            focus: None,
            hovered: false,
            location: Location::default(),
            keys: MenuKeys::default(),
            style: MenuStyle::default(),
            area: Cell::new(Rect::default()),
            screen: Cell::new(Rect::default()),
        }
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_keys(mut self, keys: MenuKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn links(&self) -> &[LinkDescriptor] {
        &self.links
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn list_visibility(&self) -> ListVisibility {
        if self.expanded {
            ListVisibility::Shown
        } else {
            ListVisibility::Hidden
        }
    }

    /// The trigger's accessible label, describing what activating it does.
    pub fn trigger_a11y(&self) -> Announcement {
        let text = if self.expanded {
            HIDE_CONTENT_LABEL
        } else {
            SHOW_CONTENT_LABEL
        };
        Announcement {
            text: text.to_string(),
            live: Live::Assertive,
        }
    }

    /// Direction glyph; flipped when expanded. Cosmetic only.
    pub fn indicator(&self) -> &'static str {
        if self.expanded {
            INDICATOR_EXPANDED
        } else {
            INDICATOR_COLLAPSED
        }
    }

    /// Every entry in order, as it renders right now.
    pub fn entries(&self) -> Vec<LinkView<'_>> {
        let last = self.links.len().checked_sub(1);
        self.links
            .iter()
            .enumerate()
            .map(|(index, link)| {
                let kind = link.kind();
                LinkView {
                    index,
                    text: &link.text,
                    to: &link.to,
                    kind,
                    focusable: self.expanded,
                    active: kind == LinkKind::Internal && self.location.is_active(&link.to),
                    on_blur: (Some(index) == last).then_some(Message::Collapse),
                }
            })
            .collect()
    }

    /// The trigger followed by every focusable link.
    pub fn tab_stops(&self) -> Vec<FocusTarget> {
        let mut stops = vec![FocusTarget::Trigger];
        if self.expanded {
            stops.extend((0..self.links.len()).map(FocusTarget::Link));
        }
        stops
    }

    fn is_tab_stop(&self, target: FocusTarget) -> bool {
        match target {
            FocusTarget::Trigger => true,
            FocusTarget::Link(i) => self.expanded && i < self.links.len(),
        }
    }

    fn set_expanded(&mut self, expanded: bool, cause: &'static str) -> Command<Message> {
        if self.expanded == expanded {
            return Command::none();
        }
        self.expanded = expanded;
        tracing::debug!(title = %self.title, expanded, cause, "dropdown menu state changed");

        // A hidden link cannot show focus; hand it back to the trigger.
        if !expanded && matches!(self.focus, Some(FocusTarget::Link(_))) {
            self.focus = Some(FocusTarget::Trigger);
        }
        Command::message(Message::Announce(self.trigger_a11y()))
    }

    fn blur_handler(&self, target: FocusTarget) -> Option<Message> {
        match target {
            FocusTarget::Trigger => None,
            FocusTarget::Link(i) => self.entries().into_iter().nth(i)?.on_blur,
        }
    }

    fn move_focus(&mut self, direction: Direction) -> Command<Message> {
        let Some(current) = self.focus else {
            return Command::none();
        };
        // Resolved before blurring, the way a browser picks the next element
        // before any blur handler runs.
        let stops = self.tab_stops();
        let next = match stops.iter().position(|stop| *stop == current) {
            Some(pos) => match direction {
                Direction::Forward => stops.get(pos + 1).copied(),
                Direction::Backward => pos.checked_sub(1).map(|p| stops[p]),
            },
            None => Some(FocusTarget::Trigger),
        };
        tracing::trace!(title = %self.title, ?current, ?next, "moving focus");

        match next {
            // Focus stays inside the menu, so no blur handler runs.
            Some(target) => {
                self.focus = None;
                self.update(Message::Focus(target))
            }
            None => {
                let blurred = self.update(Message::Blur(current));
                Command::batch([blurred, Command::message(Message::FocusExit(direction))])
            }
        }
    }

    fn follow(&self, index: usize) -> Command<Message> {
        match self.links.get(index) {
            Some(link) => {
                tracing::debug!(title = %self.title, to = %link.to, "following link");
                match link.kind() {
                    LinkKind::Internal => Command::message(Message::Navigate(link.to.clone())),
                    LinkKind::External => Command::message(Message::OpenExternal(link.to.clone())),
                }
            }
            None => Command::none(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let Some(focus) = self.focus else {
            return Command::none();
        };
        // Shift+Tab also satisfies `next`, so `prev` goes first.
        if self.keys.prev.matches(&key) {
            return self.move_focus(Direction::Backward);
        }
        if self.keys.next.matches(&key) {
            return self.move_focus(Direction::Forward);
        }
        match focus {
            FocusTarget::Trigger if self.keys.activate.matches(&key) => {
                self.update(Message::Activate)
            }
            FocusTarget::Link(i) if self.keys.follow.matches(&key) => self.follow(i),
            _ => Command::none(),
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) -> Command<Message> {
        let pos = Position::new(event.column, event.row);
        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.track_pointer(pos),
            MouseEventKind::Down(MouseButton::Left) => {
                // A press is also a pointer position; enter fires before the click.
                let entered = self.track_pointer(pos);
                let layout = self.layout();
                let clicked = if layout.trigger.contains(pos) {
                    self.update(Message::Activate)
                } else {
                    match layout.rows {
                        Some(rows) if rows.contains(pos) => {
                            self.follow(usize::from(pos.y - rows.y))
                        }
                        _ => Command::none(),
                    }
                };
                Command::batch([entered, clicked])
            }
            _ => Command::none(),
        }
    }

    fn track_pointer(&mut self, pos: Position) -> Command<Message> {
        let inside = self.bounds().contains(pos);
        match (inside, self.hovered) {
            (true, false) => self.update(Message::PointerEnter),
            (false, true) => self.update(Message::PointerLeave),
            _ => Command::none(),
        }
    }

    /// Trigger row plus, when shown, the list overlay.
    fn bounds(&self) -> Rect {
        let layout = self.layout();
        match layout.list {
            Some(list) => layout.trigger.union(list),
            None => layout.trigger,
        }
    }

    fn layout(&self) -> MenuLayout {
        let area = self.area.get();
        let trigger = Rect {
            height: area.height.min(1),
            ..area
        };
        if !self.expanded || trigger.is_empty() {
            return MenuLayout {
                trigger,
                list: None,
                rows: None,
            };
        }

        let content = self
            .links
            .iter()
            .map(LinkDescriptor::display_width)
            .max()
            .unwrap_or(0);
        let width = u16::try_from(content)
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .max(area.width);
        let height = u16::try_from(self.links.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        let list = Rect::new(area.x, trigger.bottom(), width, height).intersection(self.screen.get());
        if list.is_empty() {
            return MenuLayout {
                trigger,
                list: None,
                rows: None,
            };
        }
        let rows = list.inner(Margin::new(1, 1));
        MenuLayout {
            trigger,
            list: Some(list),
            rows: (!rows.is_empty()).then_some(rows),
        }
    }
}

impl Component for DropdownMenu {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Mouse(event) => self.handle_mouse(event),
            Message::KeyPress(key) => self.handle_key(key),
            Message::PointerEnter => {
                self.hovered = true;
                self.set_expanded(true, "pointer-enter")
            }
            Message::PointerLeave => {
                self.hovered = false;
                self.set_expanded(false, "pointer-leave")
            }
            Message::Focus(target) if self.is_tab_stop(target) => {
                self.focus = Some(target);
                match target {
                    FocusTarget::Trigger => self.set_expanded(true, "trigger-focus"),
                    FocusTarget::Link(_) => Command::none(),
                }
            }
            // Links of a collapsed list are not tab stops.
            Message::Focus(_) => self.update(Message::Focus(FocusTarget::Trigger)),
            Message::Blur(target) => {
                if self.focus == Some(target) {
                    self.focus = None;
                }
                match self.blur_handler(target) {
                    Some(handler) => self.update(handler),
                    None => Command::none(),
                }
            }
            Message::Activate => {
                let expanded = !self.expanded;
                self.set_expanded(expanded, "activate")
            }
            Message::Collapse => self.set_expanded(false, "last-link-blur"),
            Message::Follow(index) => self.follow(index),
            Message::FocusEnter(direction) => {
                let target = match direction {
                    Direction::Forward => FocusTarget::Trigger,
                    Direction::Backward => self
                        .tab_stops()
                        .last()
                        .copied()
                        .unwrap_or(FocusTarget::Trigger),
                };
                self.update(Message::Focus(target))
            }
            Message::RouteChanged(path) => {
                self.location = Location::new(path);
                Command::none()
            }
            Message::Navigate(_)
            | Message::OpenExternal(_)
            | Message::Announce(_)
            | Message::FocusExit(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        self.screen.set(frame.area());
        let layout = self.layout();

        let title_style = if self.focus == Some(FocusTarget::Trigger) {
            self.style.trigger_focused
        } else {
            self.style.trigger
        };
        let trigger = Line::from(vec![
            Span::styled(self.title.as_str(), title_style),
            Span::raw(" "),
            Span::styled(self.indicator(), self.style.indicator),
        ]);
        frame.render_widget(trigger, layout.trigger);

        let Some(list) = layout.list else {
            return;
        };
        frame.render_widget(Clear, list);
        frame.render_widget(Block::bordered().border_style(self.style.border), list);

        let Some(rows) = layout.rows else {
            return;
        };
        for entry in self.entries().into_iter().take(usize::from(rows.height)) {
            let row = Rect {
                y: rows.y + entry.index as u16,
                height: 1,
                ..rows
            };
            let focused = self.focus == Some(FocusTarget::Link(entry.index));
            match entry.kind {
                LinkKind::External => frame.render_widget(
                    ExternalLink::new(entry.text, &self.style.link).focused(focused),
                    row,
                ),
                LinkKind::Internal => frame.render_widget(
                    NavLink::new(entry.text, &self.style.link)
                        .focused(focused)
                        .active(entry.active),
                    row,
                ),
            }
        }
    }

    fn focused(&self) -> bool {
        self.focus.is_some()
    }
}
