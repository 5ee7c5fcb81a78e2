use std::sync::{Arc, Mutex};
use tracing::{
    field::{Field, Visit},
    subscriber::DefaultGuard,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer, Registry,
};

/// Messages of the `warn!` events emitted on the current thread while a
/// capture is active.
#[derive(Debug, Clone, Default)]
pub struct WarnLog {
    messages: Arc<Mutex<Vec<String>>>,
}

impl WarnLog {
    /// Start capturing. Events are recorded until the guard is dropped.
    ///
    /// Test bodies run on a current-thread runtime, so every event raised by
    /// the code under test reaches the thread's default subscriber.
    pub fn capture() -> (WarnLog, DefaultGuard) {
        let log = WarnLog::default();
        let guard = tracing::subscriber::set_default(Registry::default().with(log.clone()));
        (log, guard)
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for WarnLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }

        let mut message = Message::default();
        event.record(&mut message);
        self.messages.lock().unwrap().push(message.0);
    }
}

#[derive(Default)]
struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}
