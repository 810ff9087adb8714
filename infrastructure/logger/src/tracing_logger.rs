use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_api", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_api", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_api", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_api", "{}", message);
    }
}
