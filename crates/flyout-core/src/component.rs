use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable piece of UI that renders into the [`Rect`] its parent hands it.
///
/// A component owns its own state and message type. The parent wraps the
/// component's messages in one of its own variants and lifts returned
/// commands with [`Command::map`]:
///
/// ```rust,ignore
/// use flyout_core::{Command, Component, Model};
/// use flyout_widgets::dropdown_menu::{self, DropdownMenu};
///
/// struct Header { products: DropdownMenu }
///
/// enum Msg { Products(dropdown_menu::Message) }
///
/// impl Model for Header {
///     // ...
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Products(m) => self.products.update(m).map(Msg::Products),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         self.products.view(frame, frame.area());
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side
    /// effects. The parent maps the command into its own message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations may draw overlays that extend
    /// past `area` (a dropdown list below its trigger), but must stay inside
    /// the frame.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently holds keyboard focus.
    fn focused(&self) -> bool {
        false
    }
}
