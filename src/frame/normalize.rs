use crate::error::DecodeError;
use crate::frame::raw_frame::{ChannelOrder, PixelBuffer, RawFrame};
use crate::frame::tensor::NormalizedTensor;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

/// Decodes `raw`, stretches it to `target_width`x`target_height` with bilinear
/// filtering and scales it into an RGB tensor of shape `(1, h, w, 3)`.
///
/// The aspect ratio is not preserved: there is no crop and no letterbox.
pub fn normalize(
    raw: &RawFrame,
    target_width: u32,
    target_height: u32,
) -> Result<NormalizedTensor, DecodeError> {
    if target_width == 0 || target_height == 0 {
        return Err(DecodeError::InvalidTarget {
            width: target_width,
            height: target_height,
        });
    }

    let rgb = decode_rgb(raw)?;

    let resized = if rgb.dimensions() == (target_width, target_height) {
        rgb
    } else {
        imageops::resize(&rgb, target_width, target_height, FilterType::Triangle)
    };

    Ok(NormalizedTensor::from_rgb(&resized))
}

const PADDING_OPTIONAL: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Browser canvases emit padded standard base64; other clients wrap lines or
/// use the URL-safe alphabet without padding.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, PADDING_OPTIONAL);
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, PADDING_OPTIONAL);

fn decode_rgb(raw: &RawFrame) -> Result<RgbImage, DecodeError> {
    match raw {
        RawFrame::Base64(text) => {
            let bytes = decode_base64(text)?;
            decode_encoded(&bytes)
        }
        RawFrame::Encoded(bytes) => decode_encoded(bytes),
        RawFrame::Pixels(buffer) => pixels_to_rgb(buffer),
    }
}

fn decode_base64(text: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = text.trim();

    let payload = match trimmed.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| DecodeError::Base64("data URL is not base64 encoded".to_string()))?,
        None => trimmed,
    };

    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return Err(DecodeError::Empty);
    }

    STANDARD_LENIENT.decode(&compact).or_else(|e| {
        URL_SAFE_LENIENT
            .decode(&compact)
            .map_err(|_| DecodeError::Base64(e.to_string()))
    })
}

fn decode_encoded(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let image = image::load_from_memory(bytes).map_err(|e| DecodeError::Image(e.to_string()))?;

    if image.width() == 0 || image.height() == 0 {
        return Err(DecodeError::Empty);
    }

    // Decoders already yield RGB(A) or luma; to_rgb8 folds all of them into 3 channels.
    Ok(image.to_rgb8())
}

fn pixels_to_rgb(buffer: &PixelBuffer) -> Result<RgbImage, DecodeError> {
    let PixelBuffer {
        data,
        width,
        height,
        channels,
        order,
    } = buffer;
    let (width, height, channels) = (*width, *height, *channels);

    if !matches!(channels, 1..=4) {
        return Err(DecodeError::UnsupportedChannels(channels));
    }

    if width == 0 || height == 0 || data.is_empty() {
        return Err(DecodeError::Empty);
    }

    let expected = width as usize * height as usize * channels as usize;
    let size_error = || DecodeError::BufferSize {
        width,
        height,
        channels,
        expected,
        actual: data.len(),
    };

    if data.len() != expected {
        return Err(size_error());
    }

    let image = match channels {
        1 => GrayImage::from_raw(width, height, data.clone()).map(DynamicImage::ImageLuma8),
        2 => GrayAlphaImage::from_raw(width, height, data.clone()).map(DynamicImage::ImageLumaA8),
        3 => RgbImage::from_raw(width, height, to_rgb_order(data, 3, *order))
            .map(DynamicImage::ImageRgb8),
        _ => RgbaImage::from_raw(width, height, to_rgb_order(data, 4, *order))
            .map(DynamicImage::ImageRgba8),
    }
    .ok_or_else(size_error)?;

    Ok(image.to_rgb8())
}

/// Swaps the first and third channel of every pixel when the source is BGR(A).
fn to_rgb_order(data: &[u8], channels: usize, order: ChannelOrder) -> Vec<u8> {
    let mut out = data.to_vec();
    if order == ChannelOrder::Bgr {
        for pixel in out.chunks_exact_mut(channels) {
            pixel.swap(0, 2);
        }
    }
    out
}
