use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait.
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state from `Flags` and may
///    return a [`Command`] (for example to enable mouse capture).
/// 2. [`view`](Model::view) draws the state into a ratatui [`Frame`].
/// 3. Input arrives as messages through [`Subscription`]s.
/// 4. [`update`](Model::update) applies each message and may return more
///    commands.
///
/// Steps 2 to 4 repeat until a command asks the program to quit.
pub trait Model: Sized + Send + 'static {
    /// Every event that can change the application state.
    type Message: Send + 'static;

    /// Startup data passed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Apply a message and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`, apart
    /// from interior layout caches.
    fn view(&self, frame: &mut Frame);

    /// Declare the active subscriptions. Called after every update; the
    /// runtime starts new ones and cancels the ones no longer returned.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
