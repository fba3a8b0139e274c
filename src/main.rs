use anyhow::Result;
use clap::Parser;
use doc_icon::{config, icon};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "doc-icon",
    about = "Render the document badge icon into multi-resolution ICO files"
)]
struct Args {
    /// ICO files to write. Parent directories must already exist.
    #[clap(value_name = "OUTPUT")]
    outputs: Vec<PathBuf>,

    /// JSON file listing additional outputs: { "outputs": [...] }
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write the full-size rendering as a PNG
    #[clap(long, value_name = "FILE")]
    preview: Option<PathBuf>,

    /// Print debug diagnostics
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let targets = config::resolve_targets(args.outputs, args.config.as_deref())?;
    for target in &targets {
        icon::create_icon(target)?;
    }

    if let Some(preview) = &args.preview {
        icon::write_preview(preview)?;
    }

    Ok(())
}
