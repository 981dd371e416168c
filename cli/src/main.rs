//! unboard CLI - whiteboard package to HTML slideshow converter

mod package;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unboard::{convert_dir, load_package, ConvertOptions};

use crate::package::prepare;

#[derive(Parser)]
#[command(name = "unboard")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert whiteboard (ENBX) packages to HTML slideshows", long_about = None)]
struct Cli {
    /// Input .enbx file or extracted package directory
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output directory (defaults to <input>_html)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Override the artifact title
    #[arg(long)]
    title: Option<String>,

    /// Disable parallel slide parsing
    #[arg(long)]
    sequential: bool,

    /// Print document metadata after converting
    #[arg(long)]
    info: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a package to an HTML slideshow
    Convert {
        /// Input .enbx file or extracted package directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Override the artifact title
        #[arg(long)]
        title: Option<String>,

        /// Disable parallel slide parsing
        #[arg(long)]
        sequential: bool,

        /// Print document metadata after converting
        #[arg(long)]
        info: bool,
    },

    /// Show package metadata without converting
    Info {
        /// Input extracted package directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            title,
            sequential,
            info,
        }) => cmd_convert(&input, output.as_deref(), title, sequential, info),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            println!("unboard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    cli.title,
                    cli.sequential,
                    cli.info,
                )
            } else {
                println!("{}", "Usage: unboard <INPUT> [OUTPUT]".yellow());
                println!("       unboard --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    sequential: bool,
    info: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Preparing package...");
    let prepared = prepare(input, output)?;
    pb.inc(1);

    let mut options = ConvertOptions::new().with_title(title.unwrap_or(prepared.title));
    if sequential {
        options = options.sequential();
    }

    pb.set_message("Converting...");
    let summary = convert_dir(&prepared.source, &prepared.output, &options)?;
    pb.inc(1);
    pb.finish_with_message("Done!");

    for warning in &summary.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }

    println!(
        "\n{} {} slides -> {}",
        "Converted".green().bold(),
        summary.slides_rendered,
        summary.output_file.display()
    );

    if info {
        print_metadata(&prepared.source)?;
    }

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    print_metadata(input)
}

fn print_metadata(source: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let package = load_package(source)?;
    let meta = &package.metadata;

    println!("\n{}", "Document".green().bold());
    println!("  {:<10} {}", "Name:".dimmed(), meta.name);
    println!("  {:<10} {}", "Creator:".dimmed(), meta.creator);
    println!("  {:<10} {}", "Created:".dimmed(), meta.created);
    println!("  {:<10} {}", "Modified:".dimmed(), meta.modified);
    println!(
        "  {:<10} {} in order, {} files",
        "Slides:".dimmed(),
        package.board.slide_count(),
        package.slides.len()
    );
    println!("  {:<10} {}", "Resources:".dimmed(), package.registry.len());
    Ok(())
}
