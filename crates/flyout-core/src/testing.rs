use crate::command::{Command, CommandInner};
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless harness that drives a [`Model`] without a terminal.
///
/// Immediate messages ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages). Futures and terminal
/// commands are dropped; quitting is recorded in
/// [`quit_requested`](TestProgram::quit_requested).
///
/// ```rust,ignore
/// let mut prog = TestProgram::<Header>::new(flags);
/// prog.send(Msg::Products(dropdown_menu::Message::PointerEnter));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 6).contains("Docs"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Run one update with `msg`. Follow-up messages are queued, not applied.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Apply queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Messages queued by the last updates and not yet drained.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Render into a [`Buffer`] of the given size.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| self.model.view(frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render and return the visible symbols, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect(cmd);
                }
            }
            // Async and terminal work has nowhere to run here.
            CommandInner::None | CommandInner::Future(_) | CommandInner::Terminal(_) => {}
        }
    }
}

/// Flatten a buffer's symbols into rows joined by `\n`.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    // Smallest possible menu-like model: a title that opens and closes.
    struct Disclosure {
        open: bool,
        announcements: Vec<&'static str>,
    }

    #[derive(Debug)]
    enum Msg {
        Toggle,
        Announce(&'static str),
        Close,
    }

    impl Model for Disclosure {
        type Message = Msg;
        type Flags = bool;

        fn init(open: bool) -> (Self, Command<Msg>) {
            let model = Disclosure {
                open,
                announcements: vec![],
            };
            (model, Command::none())
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Toggle => {
                    self.open = !self.open;
                    Command::message(Msg::Announce(if self.open { "open" } else { "closed" }))
                }
                Msg::Announce(text) => {
                    self.announcements.push(text);
                    Command::none()
                }
                Msg::Close => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            let arrow = if self.open { "▲" } else { "▼" };
            frame.render_widget(Paragraph::new(format!("Menu {arrow}")), frame.area());
        }
    }

    #[test]
    fn init_uses_flags() {
        assert!(!TestProgram::<Disclosure>::new(false).model().open);
        assert!(TestProgram::<Disclosure>::new(true).model().open);
    }

    #[test]
    fn follow_up_messages_wait_for_drain() {
        let mut prog = TestProgram::<Disclosure>::new(false);
        prog.send(Msg::Toggle);
        assert!(prog.model().open);
        assert_eq!(prog.pending().len(), 1);
        assert!(prog.model().announcements.is_empty());

        prog.drain_messages();
        assert!(prog.pending().is_empty());
        assert_eq!(prog.model().announcements, vec!["open"]);
    }

    #[test]
    fn render_reflects_state() {
        let mut prog = TestProgram::<Disclosure>::new(false);
        assert_eq!(prog.render_string(8, 1), "Menu ▼  ");
        prog.send(Msg::Toggle);
        assert_eq!(prog.render_string(8, 1), "Menu ▲  ");
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<Disclosure>::new(false);
        assert!(!prog.quit_requested());
        prog.send(Msg::Close);
        assert!(prog.quit_requested());
    }
}
