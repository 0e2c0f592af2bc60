use crate::frame::tensor::NormalizedTensor;
use crate::image_classifier::interface::{ClassifierResult, ImageClassifier};
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Returns a random probability distribution over `label_count` labels.
pub struct FakeImageClassifier {
    label_count: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FakeImageClassifier {
    pub fn new(label_count: usize, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            label_count,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for FakeImageClassifier {
    fn classify(&mut self, tensor: &NormalizedTensor) -> ClassifierResult {
        let _ = self
            .logger
            .info(&format!("Classifying tensor {:?}", tensor.shape()));

        let mut rng = rand::rng();
        let score_dist = Uniform::new(0.0f32, 1.0)?;

        let scores: Vec<f32> = (0..self.label_count)
            .map(|_| score_dist.sample(&mut rng))
            .collect();
        let total: f32 = scores.iter().sum();

        if total <= 0.0 {
            return Ok(vec![0.0; self.label_count]);
        }

        Ok(scores.into_iter().map(|s| s / total).collect())
    }
}
