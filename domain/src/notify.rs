use tracing::{info, warn};

/// Surface for user-facing success and error notifications
pub trait Notifier {
    fn success(&self, text: &str);
    fn error(&self, text: &str);
}

/// Notifier that only writes to the log, used until a UI surface is attached
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, text: &str) {
        info!("{}", text);
    }

    fn error(&self, text: &str) {
        warn!("{}", text);
    }
}
