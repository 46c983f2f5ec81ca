//! A horizontal row of dropdown menus sharing one keyboard focus.

use crate::dropdown_menu::{self, Announcement, Direction, DropdownMenu};
use crate::focus::FocusRing;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use flyout_core::command::Command;
use flyout_core::component::Component;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

const MENU_SPACING: u16 = 2;

/// Messages for the nav bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A message for the menu at this index.
    Menu(usize, dropdown_menu::Message),
    /// Raw mouse input, offered to every menu.
    Mouse(MouseEvent),
    /// Raw key input, routed to the focused menu.
    KeyPress(KeyEvent),
    /// The host's current route changed.
    RouteChanged(String),
    /// Emitted: a menu asked to navigate to a same-site route.
    Navigate(String),
    /// Emitted: a menu asked to open an outward-bound URL.
    OpenExternal(String),
    /// Emitted: a menu changed state.
    Announce(Announcement),
    /// Emitted: keyboard focus left a bar with a single menu.
    FocusExit(Direction),
}

/// Site navigation bar built from several [`DropdownMenu`]s.
///
/// Tab enters the bar at the first menu; leaving a menu's last tab stop moves
/// focus to the next menu's trigger, wrapping around at either end. A bar with
/// one menu has nothing to wrap to, so focus leaves it instead.
pub struct NavBar {
    menus: Vec<DropdownMenu>,
    focus: FocusRing,
}

impl NavBar {
    pub fn new(menus: Vec<DropdownMenu>) -> Self {
        let focus = FocusRing::new(menus.len());
        Self { menus, focus }
    }

    pub fn menus(&self) -> &[DropdownMenu] {
        &self.menus
    }

    /// Index of the menu holding keyboard focus.
    pub fn focused_menu(&self) -> Option<usize> {
        self.focus.focused()
    }

    fn update_menu(&mut self, index: usize, msg: dropdown_menu::Message) -> Command<Message> {
        match self.menus.get_mut(index) {
            Some(menu) => menu.update(msg).map(move |m| Message::Menu(index, m)),
            None => Command::none(),
        }
    }

    fn enter_menu(&mut self, direction: Direction) -> Command<Message> {
        let next = match direction {
            Direction::Forward => self.focus.focus_next(),
            Direction::Backward => self.focus.focus_prev(),
        };
        match next {
            Some(index) => {
                tracing::trace!(index, ?direction, "focus entering menu");
                self.update_menu(index, dropdown_menu::Message::FocusEnter(direction))
            }
            None => Command::none(),
        }
    }

    fn broadcast(&mut self, msg: dropdown_menu::Message) -> Command<Message> {
        let cmds: Vec<_> = (0..self.menus.len())
            .map(|index| self.update_menu(index, msg.clone()))
            .collect();
        Command::batch(cmds)
    }

    fn columns(&self, area: Rect) -> Vec<Rect> {
        let constraints = self.menus.iter().map(|menu| {
            // Title, space, indicator.
            let width = menu.title().width() + 2;
            Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX))
        });
        // Trailing filler keeps the last menu from absorbing the free space.
        Layout::horizontal(constraints.chain([Constraint::Fill(1)]))
            .spacing(MENU_SPACING)
            .split(area)
            .to_vec()
    }
}

impl Component for NavBar {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Menu(index, dropdown_menu::Message::FocusExit(direction)) => {
                if self.menus.len() == 1 {
                    self.focus.blur();
                    return Command::message(Message::FocusExit(direction));
                }
                // The ring still points at `index`; step from there.
                self.focus.focus(index);
                self.enter_menu(direction)
            }
            Message::Menu(_, dropdown_menu::Message::Navigate(to)) => {
                Command::message(Message::Navigate(to))
            }
            Message::Menu(_, dropdown_menu::Message::OpenExternal(url)) => {
                Command::message(Message::OpenExternal(url))
            }
            Message::Menu(_, dropdown_menu::Message::Announce(announcement)) => {
                Command::message(Message::Announce(announcement))
            }
            Message::Menu(index, msg) => self.update_menu(index, msg),
            Message::Mouse(event) => self.broadcast(dropdown_menu::Message::Mouse(event)),
            Message::KeyPress(key) => match self.focus.focused() {
                Some(index) => self.update_menu(index, dropdown_menu::Message::KeyPress(key)),
                None if key.code == KeyCode::BackTab
                    || (key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT)) =>
                {
                    self.enter_menu(Direction::Backward)
                }
                None if key.code == KeyCode::Tab => self.enter_menu(Direction::Forward),
                None => Command::none(),
            },
            Message::RouteChanged(path) => {
                self.broadcast(dropdown_menu::Message::RouteChanged(path))
            }
            Message::Navigate(_)
            | Message::OpenExternal(_)
            | Message::Announce(_)
            | Message::FocusExit(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let columns = self.columns(area);
        let trigger_row = |column: Rect| Rect {
            height: area.height.min(1),
            ..column
        };

        // Expanded lists overlap neighbours, so they are drawn last.
        let (open, closed): (Vec<_>, Vec<_>) = self
            .menus
            .iter()
            .zip(columns)
            .partition(|(menu, _)| menu.is_expanded());
        for (menu, column) in closed.into_iter().chain(open) {
            menu.view(frame, trigger_row(column));
        }
    }

    fn focused(&self) -> bool {
        self.menus.iter().any(|menu| menu.focused())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dropdown_menu::FocusTarget;
    use crate::link::LinkDescriptor;
    use crossterm::event::{KeyEventKind, KeyEventState, MouseEventKind};
    use flyout_core::testing::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn bar() -> NavBar {
        NavBar::new(vec![
            DropdownMenu::new(
                "Products",
                vec![
                    LinkDescriptor::internal("Docs", "/docs"),
                    LinkDescriptor::external("Blog", "https://blog.example.com"),
                ],
            ),
            DropdownMenu::new("Company", vec![LinkDescriptor::internal("About", "/about")]),
        ])
    }

    fn tab() -> Message {
        Message::KeyPress(KeyEvent {
            code: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    // Feed returned messages back in, the way the runtime would.
    fn run(bar: &mut NavBar, msg: Message) -> Vec<Message> {
        let mut emitted = vec![];
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            for out in bar.update(msg).into_messages() {
                match out {
                    Message::Menu(..) => queue.push(out),
                    other => emitted.push(other),
                }
            }
        }
        emitted
    }

    fn render(bar: &NavBar, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| bar.view(frame, Rect::new(0, 0, width, 1)))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_every_trigger_in_order() {
        let bar = bar();
        let row = render(&bar, 40, 4);
        let first = row.lines().next().unwrap();
        assert!(first.starts_with("Products ▼  Company ▼"));
    }

    #[test]
    fn first_tab_enters_first_menu() {
        let mut bar = bar();
        run(&mut bar, tab());
        assert_eq!(bar.focused_menu(), Some(0));
        assert_eq!(bar.menus()[0].focus(), Some(FocusTarget::Trigger));
        assert!(bar.menus()[0].is_expanded());
        assert!(bar.focused());
    }

    #[test]
    fn tabbing_past_a_menu_moves_to_the_next() {
        let mut bar = bar();
        run(&mut bar, tab()); // Products trigger
        run(&mut bar, tab()); // Docs
        run(&mut bar, tab()); // Blog
        run(&mut bar, tab()); // Company trigger

        assert_eq!(bar.focused_menu(), Some(1));
        assert!(!bar.menus()[0].is_expanded());
        assert_eq!(bar.menus()[0].focus(), None);
        assert_eq!(bar.menus()[1].focus(), Some(FocusTarget::Trigger));
        assert!(bar.menus()[1].is_expanded());
    }

    #[test]
    fn focus_wraps_to_first_menu() {
        let mut bar = bar();
        for _ in 0..6 {
            run(&mut bar, tab());
        }
        // Products(3 stops) + Company(2 stops) = 5, sixth lands back on Products.
        assert_eq!(bar.focused_menu(), Some(0));
        assert_eq!(bar.menus()[0].focus(), Some(FocusTarget::Trigger));
    }

    #[test]
    fn navigation_requests_bubble_up() {
        let mut bar = bar();
        run(&mut bar, tab());
        run(&mut bar, tab());
        let emitted = run(
            &mut bar,
            Message::KeyPress(KeyEvent {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            }),
        );
        assert_eq!(emitted, vec![Message::Navigate("/docs".into())]);
    }

    #[test]
    fn state_changes_are_announced() {
        let mut bar = bar();
        let emitted = run(&mut bar, Message::Menu(1, dropdown_menu::Message::Activate));
        assert!(matches!(emitted.as_slice(), [Message::Announce(_)]));
    }

    #[test]
    fn hover_opens_only_the_menu_under_the_pointer() {
        let mut bar = bar();
        render(&bar, 40, 6);
        // "Products ▼" is columns 0..10, "Company ▼" starts at 12.
        run(
            &mut bar,
            Message::Mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 13,
                row: 0,
                modifiers: KeyModifiers::NONE,
            }),
        );
        assert!(!bar.menus()[0].is_expanded());
        assert!(bar.menus()[1].is_expanded());
    }

    #[test]
    fn route_change_reaches_every_menu() {
        let mut bar = bar();
        run(&mut bar, Message::RouteChanged("/about".into()));
        assert_eq!(bar.menus()[0].location().path(), "/about");
        assert!(bar.menus()[1].entries()[0].active);
    }

    #[test]
    fn single_menu_lets_focus_leave() {
        let mut bar = NavBar::new(vec![DropdownMenu::new(
            "Company",
            vec![LinkDescriptor::internal("About", "/about")],
        )]);
        run(&mut bar, tab()); // trigger
        run(&mut bar, tab()); // About
        let emitted = run(&mut bar, tab());

        assert!(emitted.contains(&Message::FocusExit(Direction::Forward)));
        let announced = emitted
            .iter()
            .filter(|m| matches!(m, Message::Announce(_)))
            .count();
        assert_eq!(announced, 1);
        assert_eq!(bar.focused_menu(), None);
        assert!(!bar.menus()[0].is_expanded());
        assert!(!bar.focused());

        run(&mut bar, tab());
        assert_eq!(bar.focused_menu(), Some(0));
        assert_eq!(bar.menus()[0].focus(), Some(FocusTarget::Trigger));
    }

    #[test]
    fn empty_bar_ignores_tab() {
        let mut bar = NavBar::new(vec![]);
        assert!(run(&mut bar, tab()).is_empty());
        assert_eq!(bar.focused_menu(), None);
    }
}
