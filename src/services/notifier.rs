/// Receiver of user-facing notifications and operation log lines
///
/// The catalog decides *what* to say; implementations decide how it's shown
/// (dialogs, system notifications, a log file).
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_success(&self, title: &str, message: &str);

    fn notify_error(&self, title: &str, message: &str);

    fn log_info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn log_error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Notifier that only writes to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, title: &str, message: &str) {
        tracing::info!(title, "{}", message);
    }

    fn notify_error(&self, title: &str, message: &str) {
        tracing::error!(title, "{}", message);
    }
}
