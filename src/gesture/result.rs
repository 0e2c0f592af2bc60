/// The label picked for one frame and the classifier's score for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub label: String,
    pub confidence: f32,
}

/// Outcome of a frame sequence.
///
/// `agreement_ratio` is the share of `per_frame_labels` equal to
/// `final_label`; it is a vote frequency, not an averaged probability.
/// `per_frame_labels` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub final_label: String,
    pub agreement_ratio: f32,
    pub per_frame_labels: Vec<String>,
    /// Frames picked by the stride.
    pub frames_sampled: usize,
    /// Sampled frames that failed to decode or classify.
    pub frames_skipped: usize,
}

impl AggregateResult {
    pub fn votes_for(&self, label: &str) -> usize {
        self.per_frame_labels.iter().filter(|l| *l == label).count()
    }
}
