//! Snapshot compare command

use clap::{Args, ValueEnum};
use serde_json::Value;
use snapdiff_core::report::render_text;
use snapdiff_core::{compare, IgnoreSet, Variant};
use snapdiff_store::{decode_gzip_json, parse_json, save_result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Record variant: item-attributes, item-prices, link-groups or groups
    #[arg(long)]
    pub variant: String,

    /// Comma-separated dotted paths to leave out of the comparison
    #[arg(long, default_value = "")]
    pub ignore: String,

    /// Inputs are plain JSON rather than gzip
    #[arg(long)]
    pub plain: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Also write the result to a timestamped file in this directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    pub file1: PathBuf,
    pub file2: PathBuf,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let variant: Variant = args.variant.parse()?;
    let first = load_snapshot(&args.file1, args.plain)?;
    let second = load_snapshot(&args.file2, args.plain)?;
    let ignore = IgnoreSet::parse(&args.ignore);

    let result = compare(&first, &second, &ignore, variant)?;

    if let Some(dir) = &args.out {
        let path = save_result(dir, variant, &result)?;
        eprintln!("Result saved to {}", path.display());
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render_text(&result)),
    }

    Ok(())
}

fn load_snapshot(path: &Path, plain: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let name = path.display().to_string();
    let document = if plain {
        parse_json(&name, &bytes)?
    } else {
        decode_gzip_json(&name, &bytes)?
    };
    Ok(document)
}
