// this_file: crates/ttimg-cli/src/main.rs

//! text-to-img: render a line of text into a cropped image file.

use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use ttimg_cli::cli::Args;
use ttimg_cli::commands::{fonts, render};
use ttimg_cli::{exit_status, EXIT_FAILURE};
use ttimg_fontdb::FontCatalog;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let catalog = FontCatalog::system();
    log::debug!("Font catalog holds {} names", catalog.len());

    if args.list_fonts {
        return match fonts::list(&catalog, &mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::from(EXIT_FAILURE)
            },
        };
    }

    let Some(text) = args.text.as_deref() else {
        Args::command()
            .error(ErrorKind::MissingRequiredArgument, "the text to render is required")
            .exit();
    };

    match render::run(text, &args, &catalog) {
        Ok(target) => {
            println!("Generated file {}", target.full_file_name());
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_status(&e))
        },
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
