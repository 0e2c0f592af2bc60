use thiserror::Error;

/// A single frame could not be turned into a tensor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64 payload: {0}")]
    Base64(String),
    #[error("frame is not a decodable image: {0}")]
    Image(String),
    #[error("frame is empty")]
    Empty,
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height}x{channels}")]
    BufferSize {
        width: u32,
        height: u32,
        channels: u8,
        expected: usize,
        actual: usize,
    },
    #[error("unsupported channel count {0}")]
    UnsupportedChannels(u8),
    #[error("invalid target size {width}x{height}")]
    InvalidTarget { width: u32, height: u32 },
}

/// Why one frame produced no label.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("classifier failed: {0}")]
    Classify(String),
    #[error("classifier returned an empty output")]
    EmptyOutput,
    #[error("classifier returned a non-finite value at index {index}")]
    NonFiniteOutput { index: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("no valid frames processed ({sampled} sampled, {skipped} skipped)")]
    NoValidFrames { sampled: usize, skipped: usize },
}

/// Startup-time mismatch between config, label table and classifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("label table is empty")]
    EmptyLabels,
    #[error("label at index {0} is blank")]
    BlankLabel(usize),
    #[error("label {label:?} appears more than once")]
    DuplicateLabel { label: String },
    #[error("target size must be positive, got {width}x{height}")]
    InvalidTargetSize { width: u32, height: u32 },
    #[error("{name} must be at least 1")]
    InvalidStride { name: &'static str },
    #[error("classifier outputs {actual} values but the label table has {expected} labels")]
    OutputShapeMismatch { expected: usize, actual: usize },
    #[error("classifier failed during startup probe: {0}")]
    Probe(String),
}
