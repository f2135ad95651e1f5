use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter over `tracing`, tagging each event with the component
/// that emitted it.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("resolver")
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "foodlens", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "foodlens", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "foodlens", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "foodlens", component = self.component, "{}", message);
    }
}
