//! Terminal input as a subscription.

use crate::event::TerminalEvent;
use crate::subscription::{forward, Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Marker type that identifies the terminal-events subscription.
pub struct TerminalEvents;

/// Subscribe to keyboard, mouse, resize, focus and paste events.
///
/// `map` returns `Some(msg)` to forward an event or `None` to drop it. Only
/// one terminal subscription is ever active: every call shares the same
/// [`SubscriptionId`], so re-declaring it on each update keeps the running
/// stream alive instead of restarting it.
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
///         TerminalEvent::Key(k) => Some(Msg::Key(k)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // The EventStream is created inside the task. Building it eagerly would
    // touch crossterm's global reader on every update cycle and starve the
    // stream that is already running.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| {
            let handle = tokio::spawn(async move {
                let stream = EventStream::new()
                    .filter_map(move |result| {
                        let map = map.clone();
                        async move {
                            match result {
                                Ok(event) => map(TerminalEvent::from(event)),
                                Err(err) => {
                                    tracing::warn!(%err, "terminal event stream error");
                                    None
                                }
                            }
                        }
                    })
                    .boxed();
                forward(stream, tx).await;
            });
            handle.abort_handle()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declaration_shares_one_id() {
        let a = terminal_events(|_| Some(1u8));
        let b = terminal_events(|_| None::<u8>);
        assert_eq!(a.id(), b.id());
        assert_eq!(a.id(), &SubscriptionId::of::<TerminalEvents>());
    }
}
