pub const ICON_COUNT: u32 = 8;
pub const ICON_FILE_PREFIX: &str = "icon-";
pub const ICON_FILE_EXTENSION: &str = "png";

pub const DEFAULT_INPUT_DIR: &str = "assets";
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Where the output directory lives on the device's SD card.
pub const DEFAULT_DEPLOY_PATH: &str = "/M5Stack-Tab-5-Adventure/icons/";

pub const DEFAULT_ICON_SIZE: u32 = 200;
pub const MAX_ICON_SIZE: u32 = 1024;

pub const DEFAULT_OPTIMIZATION_LEVEL: u8 = 6;
pub const MAX_OPTIMIZATION_LEVEL: u8 = 6;

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_LEVEL: u8 = 12;

/// Source files above this size are rejected before decoding (64MB)
pub const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;
pub const MAX_IMAGE_DIMENSION: u32 = 16384;

pub const PROGRESS_SPINNER_TEMPLATE: &str = "  {spinner:.green} {msg}";
