use crate::error::ConfigurationError;
use chrono::Offset;
use std::collections::HashSet;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub struct Config {
    pub target_width: u32,
    pub target_height: u32,
    pub labels: Vec<String>,
    pub unknown_label: String,
    /// Stride for webcam and browser captures.
    pub live_stride: usize,
    /// Stride for uploaded videos, which can run to hundreds of frames.
    pub bulk_stride: usize,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_width: 224,
            target_height: 224,
            labels: sign_alphabet(),
            unknown_label: "unknown".to_string(),
            live_stride: 1,
            bulk_stride: 5,
            logger_timezone: chrono::Utc.fix(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.target_width == 0 || self.target_height == 0 {
            return Err(ConfigurationError::InvalidTargetSize {
                width: self.target_width,
                height: self.target_height,
            });
        }

        if self.labels.is_empty() {
            return Err(ConfigurationError::EmptyLabels);
        }

        let mut seen = HashSet::new();
        for (index, label) in self.labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ConfigurationError::BlankLabel(index));
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigurationError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        self.live_stride()?;
        self.bulk_stride()?;

        Ok(())
    }

    pub fn live_stride(&self) -> Result<NonZeroUsize, ConfigurationError> {
        NonZeroUsize::new(self.live_stride)
            .ok_or(ConfigurationError::InvalidStride { name: "live_stride" })
    }

    pub fn bulk_stride(&self) -> Result<NonZeroUsize, ConfigurationError> {
        NonZeroUsize::new(self.bulk_stride)
            .ok_or(ConfigurationError::InvalidStride { name: "bulk_stride" })
    }
}

fn sign_alphabet() -> Vec<String> {
    ('A'..='Z').map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.labels.len(), 26);
        assert_eq!(config.labels[0], "A");
        assert_eq!(config.labels[25], "Z");
    }

    #[test]
    fn test_rejects_bad_config() {
        let mut config = Config::default();
        config.target_width = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidTargetSize {
                width: 0,
                height: 224
            })
        );

        let mut config = Config::default();
        config.labels = vec![];
        assert_eq!(config.validate(), Err(ConfigurationError::EmptyLabels));

        let mut config = Config::default();
        config.labels = vec!["A".to_string(), " ".to_string()];
        assert_eq!(config.validate(), Err(ConfigurationError::BlankLabel(1)));

        let mut config = Config::default();
        config.labels = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::DuplicateLabel { .. })
        ));

        let mut config = Config::default();
        config.bulk_stride = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::InvalidStride {
                name: "bulk_stride"
            })
        );
    }
}
