use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use elmer_sif_language_server::check::{check_files, render};
use elmer_sif_language_server::config::{CheckArgs, Config};
use elmer_sif_language_server::dictionary::load_dictionary;
use elmer_sif_language_server::Validator;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("sif-check: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every file was free of findings
fn run() -> Result<bool> {
    let args = CheckArgs::parse();
    let files = args.files;
    let format = args.format;

    let config = Config::from_common(args.common)?;
    config.init_logging();

    let dictionary = load_dictionary(&config)?;
    let validator = Validator::new(Arc::new(dictionary));

    let reports = check_files(&files, &validator)?;
    print!("{}", render(&reports, format)?);

    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    log::info!("{} file(s) checked, {} finding(s)", reports.len(), total);

    Ok(total == 0)
}
