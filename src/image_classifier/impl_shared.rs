use crate::frame::tensor::NormalizedTensor;
use crate::image_classifier::interface::{ClassifierResult, ImageClassifier};
use std::sync::{Arc, Mutex};

/// One classifier shared between request handlers. Every invocation holds the
/// lock, so the wrapped model never runs twice at once.
///
/// If the wrapped classifier panics, the lock is poisoned and every later
/// call on any clone fails with an error. The model has to be reloaded.
pub struct SharedClassifier<C> {
    inner: Arc<Mutex<C>>,
}

impl<C> Clone for SharedClassifier<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: ImageClassifier> SharedClassifier<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(classifier)),
        }
    }
}

impl<C: ImageClassifier> ImageClassifier for SharedClassifier<C> {
    fn classify(&mut self, tensor: &NormalizedTensor) -> ClassifierResult {
        let mut classifier = self
            .inner
            .lock()
            .map_err(|_| "shared classifier lock poisoned")?;
        classifier.classify(tensor)
    }
}
