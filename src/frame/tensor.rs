use image::RgbImage;
use ndarray::{Array4, ArrayView4};

/// Classifier input: shape `(1, height, width, 3)`, RGB, values in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTensor {
    data: Array4<f32>,
}

impl NormalizedTensor {
    pub fn from_rgb(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let data = Array4::from_shape_fn(
            (1, height as usize, width as usize, 3),
            |(_, y, x, c)| {
                let pixel = image.get_pixel(x as u32, y as u32);
                pixel[c] as f32 / 255.0
            },
        );

        Self { data }
    }

    /// All-black tensor, used to probe a classifier's output shape.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            data: Array4::zeros((1, height as usize, width as usize, 3)),
        }
    }

    pub fn shape(&self) -> [usize; 4] {
        let (n, h, w, c) = self.data.dim();
        [n, h, w, c]
    }

    pub fn width(&self) -> usize {
        self.data.dim().2
    }

    pub fn height(&self) -> usize {
        self.data.dim().1
    }

    pub fn pixel(&self, y: usize, x: usize) -> [f32; 3] {
        [
            self.data[[0, y, x, 0]],
            self.data[[0, y, x, 1]],
            self.data[[0, y, x, 2]],
        ]
    }

    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.data.view()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    pub fn into_array(self) -> Array4<f32> {
        self.data
    }
}
