pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod logger;
pub mod processing;
pub mod utils;

pub use batch::{
    run, BatchReport, ConvertedIcon, ErrorPolicy, FailedIcon, IconBatchConverter, MissingIcon,
};
pub use error::{IconError, Result};
pub use processing::{
    convert_icon, convert_to_rgb, encode_png, load_icon, optimize_png, resize_icon, save_icon,
    ConversionOptions, ConversionStats,
};
pub use utils::{ensure_output_dir, icon_file_name, icon_paths};
