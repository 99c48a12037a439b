use crate::constants::{
    DEFAULT_ICON_SIZE, DEFAULT_OPTIMIZATION_LEVEL, LIBDEFLATER_LEVEL, MAX_FILE_SIZE,
    MAX_ICON_SIZE, MAX_IMAGE_DIMENSION, MAX_OPTIMIZATION_LEVEL, ZOPFLI_ITERATIONS,
};
use crate::error::{IconError, Result};
use crate::utils::create_progress_spinner;
use crate::verbose;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use oxipng::{Deflaters, Options, StripChunks};
use std::fs;
use std::num::NonZeroU8;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Edge length of the square output icon in pixels.
    pub size: u32,
    /// oxipng preset, 0 disables the optimization pass.
    pub level: u8,
    pub zopfli: bool,
}

impl ConversionOptions {
    pub fn new(size: Option<u32>, level: Option<u8>, zopfli: bool) -> Result<Self> {
        let size = size.unwrap_or(DEFAULT_ICON_SIZE);
        if !(1..=MAX_ICON_SIZE).contains(&size) {
            return Err(IconError::InvalidSize(size, MAX_ICON_SIZE));
        }

        let level = level.unwrap_or(DEFAULT_OPTIMIZATION_LEVEL);
        if level > MAX_OPTIMIZATION_LEVEL {
            return Err(IconError::InvalidOptimizationLevel(
                level,
                MAX_OPTIMIZATION_LEVEL,
            ));
        }

        Ok(Self {
            size,
            level,
            zopfli,
        })
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
            level: DEFAULT_OPTIMIZATION_LEVEL,
            zopfli: false,
        }
    }
}

/// Outcome of converting a single icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionStats {
    pub original_size: u64,
    pub source_dimensions: (u32, u32),
    pub saved_size: u64,
}

/// Converts one icon: load -> RGB -> resize -> optimized PNG on disk.
///
/// # Arguments
/// * `input_path` - Source image, any decodable PNG
/// * `output_path` - Destination file, overwritten if present
/// * `options` - Target size and optimization settings
///
/// # Returns
/// * `Ok(ConversionStats)` - Source size and dimensions plus the written size
/// * `Err(IconError)` - If decoding, encoding, or writing fails
pub fn convert_icon(
    input_path: &Path,
    output_path: &Path,
    options: &ConversionOptions,
) -> Result<ConversionStats> {
    let (img, original_size) = load_icon(input_path)?;
    let source_dimensions = img.dimensions();
    verbose!(
        "{:?}: {}x{} {:?}, {} bytes",
        input_path,
        source_dimensions.0,
        source_dimensions.1,
        img.color(),
        original_size
    );

    let rgb = convert_to_rgb(&img);
    drop(img);
    let resized = resize_icon(&rgb, options.size);
    let saved_size = save_icon(&resized, output_path, options)?;

    Ok(ConversionStats {
        original_size,
        source_dimensions,
        saved_size,
    })
}

/// Loads an image file and returns it along with its size on disk.
///
/// # Returns
/// * `Ok((image, file_size))` - The decoded image and its file size in bytes
/// * `Err(IconError::Decode)` - If the file exists but is not a decodable image
pub fn load_icon(input_path: &Path) -> Result<(DynamicImage, u64)> {
    if !input_path.is_file() {
        return Err(IconError::FileNotFound(input_path.to_path_buf()));
    }

    let file_size = fs::metadata(input_path)?.len();
    if file_size > MAX_FILE_SIZE {
        return Err(IconError::FileTooLarge(file_size, MAX_FILE_SIZE));
    }

    let decode_error = |source| IconError::Decode {
        path: input_path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(input_path)?
        .with_guessed_format()?
        .decode()
        .map_err(decode_error)?;

    let (width, height) = img.dimensions();
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(IconError::InvalidDimensions(
            width,
            height,
            MAX_IMAGE_DIMENSION,
        ));
    }

    Ok((img, file_size))
}

/// Force 8-bit RGB. Alpha is dropped, not composited onto a background.
pub fn convert_to_rgb(img: &DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageRgb8(_) => img.clone(),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

/// Resize to exactly `size`x`size`. The aspect ratio is not preserved.
pub fn resize_icon(img: &DynamicImage, size: u32) -> DynamicImage {
    if img.dimensions() == (size, size) {
        return img.clone();
    }
    img.resize_exact(size, size, FilterType::Lanczos3)
}

pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
    img.write_with_encoder(encoder)?;
    Ok(buf)
}

/// Losslessly recompress PNG data with oxipng.
///
/// Color type and bit depth reductions are disabled so the result is still
/// 8-bit RGB when the input is.
pub fn optimize_png(data: &[u8], options: &ConversionOptions) -> Result<Vec<u8>> {
    if options.level == 0 {
        return Ok(data.to_vec());
    }

    let mut oxipng_options = Options::from_preset(options.level);
    oxipng_options.strip = StripChunks::Safe;
    oxipng_options.bit_depth_reduction = false;
    oxipng_options.color_type_reduction = false;
    oxipng_options.palette_reduction = false;
    oxipng_options.grayscale_reduction = false;

    oxipng_options.deflate = match NonZeroU8::new(ZOPFLI_ITERATIONS) {
        Some(iterations) if options.zopfli => Deflaters::Zopfli { iterations },
        _ => Deflaters::Libdeflater {
            compression: LIBDEFLATER_LEVEL,
        },
    };

    oxipng::optimize_from_memory(data, &oxipng_options)
        .map_err(|e| IconError::PngOptimization(e.to_string()))
}

/// Encode, optimize, and write `img` to `output_path`.
///
/// Returns the byte size of the written file as reported by the filesystem.
pub fn save_icon(img: &DynamicImage, output_path: &Path, options: &ConversionOptions) -> Result<u64> {
    let encoded = encode_png(img)?;

    let pb = create_progress_spinner("Optimizing PNG...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let optimized = optimize_png(&encoded, options);
    pb.finish_and_clear();
    let optimized = optimized?;

    verbose!(
        "encoded {} bytes, optimized to {} bytes",
        encoded.len(),
        optimized.len()
    );

    fs::write(output_path, &optimized)?;
    Ok(fs::metadata(output_path)?.len())
}
