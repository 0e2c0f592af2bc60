use crate::library::logger::interface::Logger;
use chrono::Utc;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn line(&self, level: &str, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.namespace {
            Some(namespace) => format!("[{}] {} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        writeln!(std::io::stdout(), "{}", self.line("INFO", message))?;
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        writeln!(std::io::stderr(), "{}", self.line("WARN", message))?;
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Offset;

    #[test]
    fn test_namespaces_nest() {
        let logger = LoggerConsole::new(Utc.fix());
        let line = logger.line("INFO", "hello");
        assert!(line.ends_with("INFO hello"));

        let nested = LoggerConsole {
            namespace: Some("gesture:aggregator".to_string()),
            timezone: Utc.fix(),
        };
        assert!(nested.line("WARN", "skip").ends_with("WARN gesture:aggregator: skip"));
        assert!(nested.with_namespace("frame").info("ok").is_ok());
    }
}
