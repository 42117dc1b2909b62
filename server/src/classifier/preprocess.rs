use image::{DynamicImage, ImageReader, imageops::FilterType};
use std::path::Path;
use tract_onnx::prelude::tract_ndarray::Array4;

use crate::error::PipelineError;

/// Network input edge length. Every upload is resized (not cropped) to
/// this square regardless of its original aspect ratio.
pub const INPUT_SIZE: u32 = 224;

// VGG-style "caffe" preprocessing: BGR channel order with the ImageNet
// channel means subtracted, no further scaling.
const BGR_MEAN: [f32; 3] = [103.939, 116.779, 123.68];

/// Decodes the stored upload. The format is sniffed from the bytes, not
/// trusted from the client extension; invalid bytes surface as a
/// `Decode` error for the handler to report.
pub fn decode_image(path: &Path) -> Result<DynamicImage, PipelineError> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.decode()?)
}

/// Resizes to 224x224, forces 3-channel RGB, applies the network's
/// preprocessing, and adds the leading batch dimension. The result is
/// always shaped (1, 224, 224, 3).
pub fn to_input_tensor(image: &DynamicImage) -> Array4<f32> {
    let resized = image
        .resize_exact(INPUT_SIZE, INPUT_SIZE, FilterType::Triangle)
        .to_rgb8();
    let side = INPUT_SIZE as usize;
    Array4::from_shape_fn((1, side, side, 3), |(_, y, x, c)| {
        let pixel = resized.get_pixel(x as u32, y as u32);
        // tensor channels are BGR, the decoded pixel is RGB
        f32::from(pixel[2 - c]) - BGR_MEAN[c]
    })
}
