//! Runtime for the **flyout** navigation widgets.
//!
//! `flyout-core` is a small [Elm Architecture] runtime on top of
//! [`ratatui`] and [`crossterm`]. Widgets are plain state machines: they
//! receive messages in `update`, draw themselves in `view`, and express side
//! effects (navigating, opening a browser) as [`Command`]s that the runtime
//! or the host carries out.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Side effect returned from `update` |
//! | [`Subscription`] | Long-lived event source, e.g. [`terminal_events`] |
//! | [`Program`] | Wires a [`Model`] to the terminal and drives the loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit tests |
//!
//! Logging goes through [`tracing`]; see [`logging`] for where it ends up.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod terminal;
pub mod testing;

pub use command::{Command, TerminalCommand};
pub use component::Component;
pub use event::TerminalEvent;
pub use logging::{init_logging, LogConfig};
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};
pub use subscription::{Subscription, SubscriptionId};
pub use terminal::terminal_events;

/// Run a model with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run a model with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
