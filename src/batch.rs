use crate::constants::{DEFAULT_DEPLOY_PATH, ICON_COUNT};
use crate::error::{IconError, Result};
use crate::processing::{convert_icon, ConversionOptions};
use crate::utils::{ensure_output_dir, format_file_size, icon_file_name, icon_paths};
use crate::{error, info, verbose, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// What to do when a present icon fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop the batch at the first failure and return its error.
    #[default]
    Abort,
    /// Report the failure, record it, and move on to the next icon.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedIcon {
    pub index: u32,
    pub input: PathBuf,
    pub output: PathBuf,
    pub original_size: u64,
    pub source_dimensions: (u32, u32),
    pub saved_size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingIcon {
    pub index: u32,
    pub input: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedIcon {
    pub index: u32,
    pub input: PathBuf,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub converted: Vec<ConvertedIcon>,
    pub missing: Vec<MissingIcon>,
    pub failed: Vec<FailedIcon>,
}

impl BatchReport {
    pub fn total_saved_bytes(&self) -> u64 {
        self.converted.iter().map(|icon| icon.saved_size).sum()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of icons that were present and attempted.
    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Turn recorded failures into an error, for callers that need an exit status.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(IconError::BatchFailed {
                failed: self.failed.len(),
                attempted: self.attempted(),
            })
        }
    }
}

/// Converts `icon-1.png` through `icon-8.png` from one directory into another.
#[derive(Debug, Clone)]
pub struct IconBatchConverter {
    input_dir: PathBuf,
    output_dir: PathBuf,
    options: ConversionOptions,
    policy: ErrorPolicy,
    deploy_hint: Option<String>,
}

impl IconBatchConverter {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            options: ConversionOptions::default(),
            policy: ErrorPolicy::default(),
            deploy_hint: Some(DEFAULT_DEPLOY_PATH.to_string()),
        }
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Path printed after the run telling the user where to copy the output.
    pub fn with_deploy_hint(mut self, hint: Option<String>) -> Self {
        self.deploy_hint = hint;
        self
    }

    /// Runs the batch in ascending index order.
    ///
    /// Missing inputs are warned about and skipped. A failing icon either
    /// stops the batch or is recorded, depending on the error policy.
    pub fn run(&self) -> Result<BatchReport> {
        let start_time = Instant::now();
        verbose!(
            "input: {:?}, output: {:?}, size: {}, level: {}, zopfli: {}, policy: {:?}",
            self.input_dir,
            self.output_dir,
            self.options.size,
            self.options.level,
            self.options.zopfli,
            self.policy
        );

        ensure_output_dir(&self.output_dir)?;

        let mut report = BatchReport::default();
        for index in 1..=ICON_COUNT {
            self.process_index(index, &mut report)?;
        }

        self.print_summary(&report);
        verbose!("batch finished in {:?}", start_time.elapsed());

        Ok(report)
    }

    fn process_index(&self, index: u32, report: &mut BatchReport) -> Result<()> {
        let (input, output) = icon_paths(&self.input_dir, &self.output_dir, index);

        if !input.is_file() {
            warn!("Warning: {} not found, skipping...", input.display());
            report.missing.push(MissingIcon { index, input });
            return Ok(());
        }

        info!("Processing {}...", icon_file_name(index));

        match convert_icon(&input, &output, &self.options) {
            Ok(stats) => {
                info!("  Saved {} ({} bytes)", output.display(), stats.saved_size);
                report.converted.push(ConvertedIcon {
                    index,
                    input,
                    output,
                    original_size: stats.original_size,
                    source_dimensions: stats.source_dimensions,
                    saved_size: stats.saved_size,
                });
                Ok(())
            }
            Err(e) => match self.policy {
                // The caller reports the returned error.
                ErrorPolicy::Abort => Err(e),
                ErrorPolicy::Continue => {
                    error!("Failed to process {}: {}", input.display(), e);
                    report.failed.push(FailedIcon {
                        index,
                        input,
                        error: e.to_string(),
                    });
                    Ok(())
                }
            },
        }
    }

    fn print_summary(&self, report: &BatchReport) {
        info!("\n📊 Summary:");
        info!("  ✅ Converted: {}", report.converted.len());
        info!("  ⚠️  Missing: {}", report.missing.len());
        if !report.failed.is_empty() {
            info!("  ❌ Failed: {}", report.failed.len());
        }
        info!(
            "  📦 Total written: {}",
            format_file_size(report.total_saved_bytes())
        );

        match &self.deploy_hint {
            Some(hint) => {
                info!(
                    "\nDone! Copy the {} folder to your SD card as:",
                    self.output_folder_name()
                );
                info!("  {}", hint);
            }
            None => info!("\nDone!"),
        }
    }

    fn output_folder_name(&self) -> String {
        self.output_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_dir.display().to_string())
    }
}

/// Convert all icons with default options and the abort-on-first-error policy.
pub fn run(input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
    IconBatchConverter::new(input_dir, output_dir).run()
}
