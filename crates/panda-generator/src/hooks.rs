//! Hook bus.
//!
//! Generators announce finished artifacts through [`HookBus::call_hook`].
//! The call returns nothing, so a generator can neither wait on listeners nor
//! observe their failures. [`ChannelHookBus`] queues events on an unbounded
//! channel and a [`HookDispatcher`] task delivers them to listeners.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{trace, warn};

/// Event fired after a CSS artifact is generated.
pub const GENERATOR_CSS_HOOK: &str = "generator:css";

/// A hook notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEvent {
    pub name: String,
    pub artifact: String,
    pub content: String,
}

impl HookEvent {
    pub fn new(name: &str, artifact: &str, content: &str) -> Self {
        Self {
            name: name.to_string(),
            artifact: artifact.to_string(),
            content: content.to_string(),
        }
    }
}

/// Fire-and-forget notification sink.
pub trait HookBus {
    fn call_hook(&self, event: &str, artifact: &str, content: &str);
}

/// Hook bus backed by an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelHookBus {
    tx: mpsc::UnboundedSender<HookEvent>,
}

impl ChannelHookBus {
    /// Create a bus and the receiver to hand to [`HookDispatcher::run`].
    pub fn new() -> (Self, mpsc::UnboundedReceiver<HookEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl HookBus for ChannelHookBus {
    fn call_hook(&self, event: &str, artifact: &str, content: &str) {
        if self.tx.send(HookEvent::new(event, artifact, content)).is_err() {
            trace!(event, artifact, "hook dropped, no dispatcher");
        }
    }
}

/// Listener failure, reported by the dispatcher and never by the publisher.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Hook listener error: {message}")]
pub struct HookError {
    pub message: String,
}

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

type Listener = Box<dyn Fn(&HookEvent) -> Result<(), HookError> + Send + Sync>;

/// Delivers queued events to the listeners registered for their name.
#[derive(Default)]
pub struct HookDispatcher {
    listeners: HashMap<String, Vec<Listener>>,
}

impl HookDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `event`. Listeners run in registration order.
    pub fn on<F>(&mut self, event: &str, listener: F) -> &mut Self
    where
        F: Fn(&HookEvent) -> Result<(), HookError> + Send + Sync + 'static,
    {
        self.listeners
            .entry(event.to_string())
            .or_default()
            .push(Box::new(listener));
        self
    }

    /// Deliver events until every sender is dropped. Returns how many events
    /// were received.
    pub async fn run(self, mut rx: mpsc::UnboundedReceiver<HookEvent>) -> usize {
        let mut received = 0;
        while let Some(event) = rx.recv().await {
            received += 1;
            self.dispatch(&event);
        }
        received
    }

    fn dispatch(&self, event: &HookEvent) {
        let Some(listeners) = self.listeners.get(&event.name) else {
            return;
        };
        for listener in listeners {
            if let Err(e) = listener(event) {
                warn!(hook = %event.name, artifact = %event.artifact, "{e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_call_hook_queues_event() {
        let (bus, mut rx) = ChannelHookBus::new();
        bus.call_hook(GENERATOR_CSS_HOOK, "global.css", "");

        assert_eq!(
            rx.try_recv().unwrap(),
            HookEvent::new("generator:css", "global.css", "")
        );
    }

    #[test]
    fn test_call_hook_without_receiver() {
        let (bus, rx) = ChannelHookBus::new();
        drop(rx);
        // Must not panic or block.
        bus.call_hook(GENERATOR_CSS_HOOK, "global.css", "");
    }

    #[tokio::test]
    async fn test_dispatch_to_matching_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = HookDispatcher::new();
        let sink = Arc::clone(&seen);
        dispatcher.on(GENERATOR_CSS_HOOK, move |event| {
            sink.lock().unwrap().push(event.artifact.clone());
            Ok(())
        });

        let (bus, rx) = ChannelHookBus::new();
        bus.call_hook(GENERATOR_CSS_HOOK, "global.css", "");
        bus.call_hook("generator:done", "", "");
        bus.call_hook(GENERATOR_CSS_HOOK, "tokens.css", "");
        drop(bus);

        let received = dispatcher.run(rx).await;
        assert_eq!(received, 3);
        assert_eq!(*seen.lock().unwrap(), vec!["global.css", "tokens.css"]);
    }

    #[tokio::test]
    async fn test_failing_listener_does_not_stop_others() {
        let calls = Arc::new(Mutex::new(0));
        let mut dispatcher = HookDispatcher::new();
        let counter = Arc::clone(&calls);
        dispatcher
            .on(GENERATOR_CSS_HOOK, |_| Err(HookError::new("disk full")))
            .on(GENERATOR_CSS_HOOK, move |_| {
                *counter.lock().unwrap() += 1;
                Ok(())
            });

        let (bus, rx) = ChannelHookBus::new();
        bus.call_hook(GENERATOR_CSS_HOOK, "global.css", "");
        bus.call_hook(GENERATOR_CSS_HOOK, "global.css", "");
        drop(bus);

        assert_eq!(dispatcher.run(rx).await, 2);
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_hook_error_message() {
        assert_eq!(
            HookError::new("boom").to_string(),
            "Hook listener error: boom"
        );
    }
}
