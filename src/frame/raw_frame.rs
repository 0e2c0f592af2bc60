/// Byte order of the colour channels in a decoded pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    Rgb,
    /// What camera and video capture APIs hand back.
    #[default]
    Bgr,
}

/// An already-decoded frame, row-major and interleaved.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub order: ChannelOrder,
}

impl PixelBuffer {
    pub fn bgr(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        Self {
            data,
            width,
            height,
            channels,
            order: ChannelOrder::Bgr,
        }
    }

    pub fn rgb(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        Self {
            data,
            width,
            height,
            channels,
            order: ChannelOrder::Rgb,
        }
    }
}

/// One frame as it arrives from the transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum RawFrame {
    /// Plain base64 or a `data:image/...;base64,` URL from a browser canvas.
    Base64(String),
    /// An encoded image file (PNG, JPEG).
    Encoded(Vec<u8>),
    Pixels(PixelBuffer),
}

impl RawFrame {
    pub fn kind(&self) -> &'static str {
        match self {
            RawFrame::Base64(_) => "base64",
            RawFrame::Encoded(_) => "encoded",
            RawFrame::Pixels(_) => "pixels",
        }
    }
}

impl From<PixelBuffer> for RawFrame {
    fn from(buffer: PixelBuffer) -> Self {
        RawFrame::Pixels(buffer)
    }
}
