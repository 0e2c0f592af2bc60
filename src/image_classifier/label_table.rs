use crate::config::Config;
use crate::error::FrameError;
use crate::gesture::result::FrameResult;

/// Maps classifier output positions to label strings.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: Vec<String>,
    unknown: String,
}

impl LabelTable {
    pub fn new(labels: Vec<String>, unknown: impl Into<String>) -> Self {
        Self {
            labels,
            unknown: unknown.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.labels.clone(), config.unknown_label.clone())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Out-of-range positions map to the unknown placeholder.
    pub fn label_for(&self, index: usize) -> &str {
        self.labels
            .get(index)
            .map(String::as_str)
            .unwrap_or(self.unknown.as_str())
    }

    /// Arg-max over `probabilities`. The first position wins when values tie.
    pub fn resolve(&self, probabilities: &[f32]) -> Result<FrameResult, FrameError> {
        let mut best: Option<(usize, f32)> = None;

        for (index, &value) in probabilities.iter().enumerate() {
            if !value.is_finite() {
                return Err(FrameError::NonFiniteOutput { index });
            }
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((index, value));
            }
        }

        let (index, value) = best.ok_or(FrameError::EmptyOutput)?;

        Ok(FrameResult {
            label: self.label_for(index).to_string(),
            confidence: value.clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LabelTable {
        LabelTable::new(vec!["A".into(), "B".into(), "C".into()], "unknown")
    }

    #[test]
    fn test_resolve_picks_arg_max() {
        let result = table().resolve(&[0.1, 0.7, 0.2]).unwrap();
        assert_eq!(result.label, "B");
        assert_eq!(result.confidence, 0.7);
    }

    #[test]
    fn test_resolve_ties_go_to_first_position() {
        let result = table().resolve(&[0.4, 0.4, 0.2]).unwrap();
        assert_eq!(result.label, "A");
    }

    #[test]
    fn test_index_beyond_table_is_unknown() {
        let result = table().resolve(&[0.0, 0.1, 0.1, 0.8]).unwrap();
        assert_eq!(result.label, "unknown");
        assert_eq!(table().label_for(99), "unknown");
    }

    #[test]
    fn test_confidence_is_clamped() {
        let result = table().resolve(&[3.5, 0.0, 0.0]).unwrap();
        assert_eq!(result.confidence, 1.0);

        let result = table().resolve(&[-2.0, -3.0, -4.0]).unwrap();
        assert_eq!(result.label, "A");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_bad_outputs() {
        assert!(matches!(table().resolve(&[]), Err(FrameError::EmptyOutput)));
        assert!(matches!(
            table().resolve(&[0.1, f32::NAN, 0.2]),
            Err(FrameError::NonFiniteOutput { index: 1 })
        ));
    }
}
