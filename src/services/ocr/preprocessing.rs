use image::{DynamicImage, GenericImageView, ImageBuffer, Luma};

use crate::models::config::PreprocessingConfig;

/// Image preprocessing service: turns a scorecard photo into the binarized
/// single-channel image the recognizer expects.
pub struct PreprocessingService {
    config: PreprocessingConfig,
}

impl PreprocessingService {
    /// Create a new preprocessing service with custom configuration
    pub fn new(config: PreprocessingConfig) -> Self {
        Self { config }
    }

    /// Full preprocessing pipeline: grayscale → blur → scale → threshold
    pub fn preprocess(&self, image: &DynamicImage) -> DynamicImage {
        let gray = self.to_grayscale(image);

        let gray = if self.config.apply_blur && self.config.blur_radius > 0 {
            gray.blur(self.config.blur_radius as f32)
        } else {
            gray
        };

        let scaled = self.scale(&gray, self.config.scale_factor);

        self.threshold(&scaled)
    }

    /// Convert image to grayscale
    pub fn to_grayscale(&self, image: &DynamicImage) -> DynamicImage {
        DynamicImage::ImageLuma8(image.to_luma8())
    }

    /// Scale image by factor
    pub fn scale(&self, image: &DynamicImage, factor: f64) -> DynamicImage {
        let (width, height) = image.dimensions();
        let new_width = (width as f64 * factor) as u32;
        let new_height = (height as f64 * factor) as u32;

        image.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
    }

    /// Apply binary thresholding (Otsu's method): ink becomes 0, paper 255.
    /// The threshold is selected per image, never a fixed constant.
    pub fn threshold(&self, image: &DynamicImage) -> DynamicImage {
        use imageproc::contrast::otsu_level;

        let gray_img = image.to_luma8();
        let threshold_value = otsu_level(&gray_img);

        let binary = ImageBuffer::from_fn(gray_img.width(), gray_img.height(), |x, y| {
            let pixel = gray_img.get_pixel(x, y);
            if pixel[0] > threshold_value {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });

        DynamicImage::ImageLuma8(binary)
    }
}

impl Default for PreprocessingService {
    fn default() -> Self {
        Self {
            config: PreprocessingConfig::default(),
        }
    }
}
