use crate::frame::tensor::NormalizedTensor;

/// One probability per entry of the label table, in label-table order.
pub type ClassifierResult = Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;

/// A loaded model. Takes `&mut self` because model runtimes are not
/// reentrant; share one across requests through `SharedClassifier`.
pub trait ImageClassifier {
    fn classify(&mut self, tensor: &NormalizedTensor) -> ClassifierResult;
}

impl<F> ImageClassifier for F
where
    F: FnMut(&NormalizedTensor) -> ClassifierResult,
{
    fn classify(&mut self, tensor: &NormalizedTensor) -> ClassifierResult {
        self(tensor)
    }
}
