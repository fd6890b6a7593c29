use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

use yasim_scad::commands::{self, render::RenderArgs};
use yasim_scad::utils::{self, diagnostic::ParseFailure};
use yasim_scad::{OutputFormat, UnitFormat};

#[derive(Parser)]
#[command(name = "yasim2scad")]
#[command(about = "Convert YASim FDM geometry into an OpenSCAD model", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the aircraft geometry as OpenSCAD source
    Render {
        /// YASim XML file (optionally .zst compressed)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Output .scad file (stdout if omitted)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Length unit of the generated model
        #[arg(short, long, default_value = "mm")]
        units: UnitFormat,

        /// Also draw the right half of symmetric surfaces
        #[arg(long)]
        mirror: bool,

        /// Segments used for curved shapes ($fn)
        #[arg(long, default_value_t = 24)]
        segments: u32,
    },

    /// Summarize the primitives found in a YASim file
    Info {
        /// YASim XML file (optionally .zst compressed)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize color handling (respects NO_COLOR)
    utils::color::init_color();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let result = match cli.command {
        Commands::Render {
            file,
            output,
            units,
            mirror,
            segments,
        } => commands::render::execute(RenderArgs {
            file: &file,
            output: output.as_deref(),
            units,
            mirror,
            segments,
        }),

        Commands::Info { file, format } => commands::info::execute(&file, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);
    if let Some(snippet) = err
        .downcast_ref::<ParseFailure>()
        .and_then(|failure| failure.snippet.as_deref())
    {
        eprintln!("{}", snippet.blue());
    }
}
