use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Drops every message. Used by tests and embedders that bring their own logging.
#[derive(Debug, Clone, Default)]
pub struct LoggerSilent {}

impl LoggerSilent {
    pub fn new() -> Self {
        Self {}
    }
}

impl Logger for LoggerSilent {
    fn info(&self, _message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn warn(&self, _message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn with_namespace(&self, _namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(self.clone())
    }
}
