//! Extract command turning credit note files into flat records.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};

use cnx_core::{process_corpus, read_document, BatchResult, PdfTextDecoder, RawDocument, COLUMNS};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Output file, `-` for stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV table
    Csv,
    /// JSON record array
    Json,
}

pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    // With `-o -` the records own stdout, so status moves to stderr
    let to_stdout = args.output.as_deref() == Some(Path::new("-"));

    // Expand glob patterns in argument order
    let files = collect_files(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No matching input files found");
    }

    status_line(
        to_stdout,
        format!(
            "{} Found {} files to process",
            style("ℹ").blue(),
            files.len()
        ),
    );

    // Set up progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Decode every file before processing so rebate documents apply
    // to the whole batch regardless of position
    let decoder = PdfTextDecoder::new();
    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        documents.push(read_file(&decoder, path)?);
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    let result = process_corpus(&documents);
    if result.records.is_empty() {
        anyhow::bail!("No records extracted from {} files", result.stats.files);
    }

    let content = match args.format {
        OutputFormat::Csv => render_csv(&result)?,
        OutputFormat::Json => render_json(&result)?,
    };

    // Write output
    if to_stdout {
        print!("{}", content);
    } else {
        let output = args
            .output
            .unwrap_or_else(|| default_output(args.format));
        fs::write(&output, content)?;
        println!(
            "{} Records written to {}",
            style("✓").green(),
            output.display()
        );
    }

    // Print summary
    status_line(to_stdout, String::new());
    status_line(
        to_stdout,
        format!(
            "{} Processed {} of {} files in {:?}",
            style("✓").green(),
            result.stats.processed,
            result.stats.files,
            start.elapsed()
        ),
    );
    status_line(
        to_stdout,
        format!(
            "   {} rebate files, {} records",
            style(result.stats.rebate_files).cyan(),
            style(result.stats.records).green()
        ),
    );

    Ok(())
}

/// Print a status line, on stderr when the records stream owns stdout.
fn status_line(to_stderr: bool, message: String) {
    if to_stderr {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}

/// Expand glob patterns, keeping PDF and plain text inputs in
/// argument order.
fn collect_files(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let matched: Vec<PathBuf> = glob(pattern)?
            .filter_map(|r| r.ok())
            .filter(|p| {
                let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
                matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
            })
            .collect();
        files.extend(matched);
    }
    Ok(files)
}

/// Read one input into a raw document. PDF decode failures become an
/// empty document so one unreadable file cannot sink the batch.
fn read_file(decoder: &PdfTextDecoder, path: &Path) -> anyhow::Result<RawDocument> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("input")
        .to_string();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if ext == "txt" {
        let text = fs::read_to_string(path)?;
        return Ok(RawDocument::new(name, vec![text]));
    }

    let data = fs::read(path)?;
    Ok(read_document(decoder, &name, &data))
}

fn render_csv(result: &BatchResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;
    for record in &result.records {
        wtr.write_record(record.cells())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn render_json(result: &BatchResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&result.records)?)
}

/// Timestamped default output name in the working directory.
fn default_output(format: OutputFormat) -> PathBuf {
    let ext = match format {
        OutputFormat::Csv => "csv",
        OutputFormat::Json => "json",
    };
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("extracted_data_{}.{}", stamp, ext))
}
