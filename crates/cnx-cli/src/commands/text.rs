//! Text command dumping the decoded page text of one file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use cnx_core::{PageDecoder, PdfTextDecoder, RawDocument};

/// Arguments for the text command.
#[derive(Args)]
pub struct TextArgs {
    /// Input PDF file
    input: PathBuf,

    /// Output file, defaults to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: TextArgs) -> anyhow::Result<()> {
    let data = fs::read(&args.input)?;

    // Unlike extraction, decode failures surface here: the command
    // exists to show what the decoder sees
    let decoder = PdfTextDecoder::new();
    let pages = decoder
        .decode(&data)
        .map_err(|e| anyhow::anyhow!("Failed to decode {}: {}", args.input.display(), e))?;

    let name = args
        .input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string();
    let text = RawDocument::new(name, pages).text();

    match args.output {
        Some(path) => {
            fs::write(&path, &text)?;
            println!("{} Text written to {}", style("✓").green(), path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}
