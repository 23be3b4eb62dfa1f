//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use essayfmt_ast::PaperMode;
use essayfmt_core::{assemble, loader};
use essayfmt_ooxml::DocxWriter;

use crate::sample::sample_record;

#[derive(Parser)]
#[command(name = "essayfmt")]
#[command(author, version, about = "Format essays as APA-styled Word documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON essay record to a DOCX file
    Render {
        /// Input JSON file
        input: PathBuf,

        /// Output DOCX file (default: input with .docx extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Format as a professional paper (running head, no course block)
        #[arg(long)]
        professional: bool,
    },

    /// Render the built-in sample essay to a DOCX file
    Sample {
        /// Output DOCX file
        #[arg(short, long, default_value = "sample_essay.docx")]
        output: PathBuf,

        /// Format as a professional paper (running head, no course block)
        #[arg(long)]
        professional: bool,
    },
}

/// Main CLI entry point
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            professional,
        } => render_command(&input, output.as_deref(), professional),
        Commands::Sample {
            output,
            professional,
        } => sample_command(&output, professional),
    }
}

/// Render a JSON essay record to a DOCX file
pub fn render_command(input: &Path, output: Option<&Path>, professional: bool) -> Result<()> {
    println!("essayfmt v{}", essayfmt_core::VERSION);
    println!("Rendering: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    // Determine output path (default: input with .docx extension)
    let output_path = match output {
        Some(p) => p.to_path_buf(),
        None => input.with_extension("docx"),
    };

    let mut record = loader::record_from_file(input)
        .with_context(|| format!("Failed to load record: {}", input.display()))?;
    if professional {
        record.mode = PaperMode::Professional;
    }

    println!("  Assembling document...");
    let tree = assemble(&record);
    println!("    {} blocks assembled", tree.len());

    println!("  Writing: {}", output_path.display());
    DocxWriter::write_file(&tree, &output_path)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    println!("Done.");
    Ok(())
}

/// Render the built-in sample essay to a DOCX file
pub fn sample_command(output: &Path, professional: bool) -> Result<()> {
    println!("essayfmt v{}", essayfmt_core::VERSION);

    let mode = if professional {
        PaperMode::Professional
    } else {
        PaperMode::Student
    };
    let record = sample_record(mode);

    println!("  Assembling sample essay...");
    let tree = assemble(&record);

    println!("  Writing: {}", output.display());
    DocxWriter::write_file(&tree, output)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    println!("Done.");
    Ok(())
}
