use crate::config::Config;
use crate::error::{ClassifierError, ConfigurationError, DecodeError, FrameError};
use crate::frame::normalize::normalize;
use crate::frame::raw_frame::RawFrame;
use crate::frame::tensor::NormalizedTensor;
use crate::gesture::result::{AggregateResult, FrameResult};
use crate::gesture::vote::majority_vote;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::label_table::LabelTable;
use crate::library::logger::interface::Logger;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Turns frame sequences into one gesture label.
///
/// Holds the per-deployment settings (target size, label table, strides) and
/// takes the classifier per call, so a single loaded model can be shared by
/// every request through `SharedClassifier`.
#[derive(Clone)]
pub struct SequenceAggregator {
    target_width: u32,
    target_height: u32,
    labels: LabelTable,
    live_stride: NonZeroUsize,
    bulk_stride: NonZeroUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl SequenceAggregator {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;

        Ok(Self {
            target_width: config.target_width,
            target_height: config.target_height,
            labels: LabelTable::from_config(config),
            live_stride: config.live_stride()?,
            bulk_stride: config.bulk_stride()?,
            logger: logger.with_namespace("gesture"),
        })
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Runs a blank frame through `classifier` and checks that it scores
    /// exactly one value per label. Meant to be called once at startup.
    pub fn check_classifier<C>(&self, classifier: &mut C) -> Result<(), ConfigurationError>
    where
        C: ImageClassifier + ?Sized,
    {
        let probe = NormalizedTensor::zeros(self.target_width, self.target_height);
        let output = classifier
            .classify(&probe)
            .map_err(|e| ConfigurationError::Probe(e.to_string()))?;

        if output.len() != self.labels.len() {
            return Err(ConfigurationError::OutputShapeMismatch {
                expected: self.labels.len(),
                actual: output.len(),
            });
        }

        let _ = self.logger.info(&format!(
            "Classifier accepts {}x{} input and scores {} labels",
            self.target_width,
            self.target_height,
            output.len()
        ));

        Ok(())
    }

    pub fn normalize(&self, raw: &RawFrame) -> Result<NormalizedTensor, DecodeError> {
        normalize(raw, self.target_width, self.target_height)
    }

    pub fn classify_one<C>(
        &self,
        raw: &RawFrame,
        classifier: &mut C,
    ) -> Result<FrameResult, FrameError>
    where
        C: ImageClassifier + ?Sized,
    {
        classify_one(
            raw,
            classifier,
            &self.labels,
            self.target_width,
            self.target_height,
        )
    }

    /// Same as the free `aggregate`, with skipped frames logged at warn and the
    /// outcome at info.
    pub fn aggregate<C>(
        &self,
        frames: &[RawFrame],
        classifier: &mut C,
        stride: NonZeroUsize,
    ) -> Result<AggregateResult, ClassifierError>
    where
        C: ImageClassifier + ?Sized,
    {
        let result = aggregate_frames(
            frames,
            classifier,
            &self.labels,
            (self.target_width, self.target_height),
            stride,
            |index, raw, e| {
                let _ = self.logger.warn(&format!(
                    "Skipping frame {} ({}): {}",
                    index,
                    raw.kind(),
                    e
                ));
            },
        );

        match &result {
            Ok(aggregate) => {
                let _ = self.logger.info(&format!(
                    "{} frames, {} sampled, {} skipped -> {} ({:.2})",
                    frames.len(),
                    aggregate.frames_sampled,
                    aggregate.frames_skipped,
                    aggregate.final_label,
                    aggregate.agreement_ratio
                ));
            }
            Err(e) => {
                let _ = self.logger.warn(&format!("{} frames: {}", frames.len(), e));
            }
        }

        result
    }

    /// Webcam and browser captures: short sequences, every frame counts.
    pub fn aggregate_live<C>(
        &self,
        frames: &[RawFrame],
        classifier: &mut C,
    ) -> Result<AggregateResult, ClassifierError>
    where
        C: ImageClassifier + ?Sized,
    {
        self.aggregate(frames, classifier, self.live_stride)
    }

    /// Uploaded videos: sub-sampled to bound latency.
    pub fn aggregate_bulk<C>(
        &self,
        frames: &[RawFrame],
        classifier: &mut C,
    ) -> Result<AggregateResult, ClassifierError>
    where
        C: ImageClassifier + ?Sized,
    {
        self.aggregate(frames, classifier, self.bulk_stride)
    }
}

/// Single-frame path: normalize, classify, map the arg-max to a label.
pub fn classify_one<C>(
    raw: &RawFrame,
    classifier: &mut C,
    labels: &LabelTable,
    target_width: u32,
    target_height: u32,
) -> Result<FrameResult, FrameError>
where
    C: ImageClassifier + ?Sized,
{
    let tensor = normalize(raw, target_width, target_height)?;
    let probabilities = classifier
        .classify(&tensor)
        .map_err(|e| FrameError::Classify(e.to_string()))?;
    labels.resolve(&probabilities)
}

/// Classifies every `stride`-th frame starting at index 0 and returns the
/// majority label. Frames that fail to decode or classify are skipped; the
/// call fails only when no sampled frame produced a label.
pub fn aggregate<C>(
    frames: &[RawFrame],
    classifier: &mut C,
    labels: &LabelTable,
    target_width: u32,
    target_height: u32,
    stride: NonZeroUsize,
) -> Result<AggregateResult, ClassifierError>
where
    C: ImageClassifier + ?Sized,
{
    aggregate_frames(
        frames,
        classifier,
        labels,
        (target_width, target_height),
        stride,
        |_, _, _| {},
    )
}

fn aggregate_frames<C, S>(
    frames: &[RawFrame],
    classifier: &mut C,
    labels: &LabelTable,
    (target_width, target_height): (u32, u32),
    stride: NonZeroUsize,
    mut on_skip: S,
) -> Result<AggregateResult, ClassifierError>
where
    C: ImageClassifier + ?Sized,
    S: FnMut(usize, &RawFrame, &FrameError),
{
    let mut collected = Vec::new();
    let mut sampled = 0;

    for (index, raw) in frames.iter().enumerate().step_by(stride.get()) {
        sampled += 1;
        match classify_one(raw, classifier, labels, target_width, target_height) {
            Ok(result) => collected.push(result.label),
            Err(e) => on_skip(index, raw, &e),
        }
    }

    reduce(collected, sampled)
}

/// Majority vote over the collected labels of `sampled` frames.
pub fn reduce(labels: Vec<String>, sampled: usize) -> Result<AggregateResult, ClassifierError> {
    let skipped = sampled.saturating_sub(labels.len());

    let vote = majority_vote(&labels).ok_or(ClassifierError::NoValidFrames { sampled, skipped })?;

    Ok(AggregateResult {
        final_label: vote.label,
        agreement_ratio: vote.count as f32 / labels.len() as f32,
        per_frame_labels: labels,
        frames_sampled: sampled,
        frames_skipped: skipped,
    })
}
