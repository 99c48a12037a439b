use crate::batch::ErrorPolicy;
use crate::constants::{
    DEFAULT_DEPLOY_PATH, DEFAULT_ICON_SIZE, DEFAULT_INPUT_DIR, DEFAULT_OPTIMIZATION_LEVEL,
    DEFAULT_OUTPUT_DIR,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "icon-squeeze",
    about = "Convert dashboard icons into optimized 200x200 RGB PNGs",
    long_about = "icon-squeeze reads icon-1.png through icon-8.png from an input directory, \
                  converts each to RGB, resizes it to a square icon with a Lanczos filter, \
                  and writes a losslessly optimized PNG to the output directory. \
                  Missing icons are reported and skipped.",
    version,
    after_help = "EXAMPLES:\n  \
    icon-squeeze\n  \
    icon-squeeze -i ./art -o ./sd/icons --zopfli\n  \
    icon-squeeze --keep-going --no-deploy-hint"
)]
pub struct Args {
    #[arg(
        short = 'i',
        long,
        default_value = DEFAULT_INPUT_DIR,
        help = "Directory containing icon-1.png .. icon-8.png"
    )]
    pub input: PathBuf,

    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory to write converted icons to (created if missing)"
    )]
    pub output: PathBuf,

    #[arg(
        short = 's',
        long,
        default_value_t = DEFAULT_ICON_SIZE,
        help = "Edge length of the square output icons in pixels"
    )]
    pub size: u32,

    #[arg(
        short = 'l',
        long,
        default_value_t = DEFAULT_OPTIMIZATION_LEVEL,
        help = "PNG optimization level (0-6)",
        long_help = "oxipng optimization preset from 0 (no optimization pass) \
                     to 6 (try every filter strategy)."
    )]
    pub level: u8,

    #[arg(long, help = "Use Zopfli compression (much slower, slightly smaller files)")]
    pub zopfli: bool,

    #[arg(
        short = 'k',
        long,
        help = "Keep converting after a file fails instead of stopping",
        long_help = "By default the run stops at the first icon that cannot be converted. \
                     With --keep-going every icon is attempted and failures are summarized; \
                     the exit status is still non-zero if any icon failed."
    )]
    pub keep_going: bool,

    #[arg(
        long,
        default_value = DEFAULT_DEPLOY_PATH,
        help = "Device path shown in the closing hint"
    )]
    pub deploy_path: String,

    #[arg(long, help = "Omit the closing deploy hint")]
    pub no_deploy_hint: bool,

    #[arg(short = 'q', long, help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print decode and optimization details")]
    pub verbose: bool,
}

impl Args {
    pub fn error_policy(&self) -> ErrorPolicy {
        if self.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        }
    }

    pub fn deploy_hint(&self) -> Option<String> {
        (!self.no_deploy_hint).then(|| self.deploy_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let args = Args::parse_from(["icon-squeeze"]);
        assert_eq!(args.input, PathBuf::from("assets"));
        assert_eq!(args.output, PathBuf::from("icons"));
        assert_eq!(args.size, 200);
        assert_eq!(args.level, 6);
        assert!(!args.zopfli);
        assert_eq!(args.error_policy(), ErrorPolicy::Abort);
        assert_eq!(
            args.deploy_hint().as_deref(),
            Some("/M5Stack-Tab-5-Adventure/icons/")
        );
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "icon-squeeze",
            "-i",
            "art",
            "-o",
            "out",
            "--size",
            "64",
            "-l",
            "2",
            "--zopfli",
            "-k",
            "--no-deploy-hint",
        ]);
        assert_eq!(args.input, PathBuf::from("art"));
        assert_eq!(args.output, PathBuf::from("out"));
        assert_eq!(args.size, 64);
        assert_eq!(args.level, 2);
        assert!(args.zopfli);
        assert_eq!(args.error_policy(), ErrorPolicy::Continue);
        assert_eq!(args.deploy_hint(), None);
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        assert!(Args::try_parse_from(["icon-squeeze", "--size", "big"]).is_err());
    }
}
