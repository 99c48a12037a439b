use anyhow::Context;
use clap::Parser;
use icon_squeeze::cli::Args;
use icon_squeeze::logger::{set_verbosity, Verbosity};
use icon_squeeze::{ConversionOptions, ErrorPolicy, IconBatchConverter};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    set_verbosity(Verbosity::from_flags(args.quiet, args.verbose));

    let options = ConversionOptions::new(Some(args.size), Some(args.level), args.zopfli)?;
    let policy = args.error_policy();

    let converter = IconBatchConverter::new(&args.input, &args.output)
        .with_options(options)
        .with_error_policy(policy)
        .with_deploy_hint(args.deploy_hint());

    let report = converter
        .run()
        .with_context(|| format!("icon conversion from {:?} stopped", args.input))?;

    if policy == ErrorPolicy::Continue {
        report.into_result()?;
    }

    Ok(())
}
