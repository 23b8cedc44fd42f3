// Copyright (c) Facebook Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use shamir::{
    config::{Import, ShareFile},
    report::OutputFormat,
};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(
    name = "recover",
    about = "Recovers the secret constant term from threshold shares of an integer polynomial"
)]
struct RecoverOpt {
    /// Sets the level of verbosity (repeat for more)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// Threshold k to use instead of keys.k in every share file
    #[structopt(long)]
    threshold: Option<usize>,

    /// Output format: text or json
    #[structopt(long, default_value = "text")]
    format: OutputFormat,

    /// JSON share files, processed in order
    #[structopt(required = true)]
    files: Vec<String>,
}

fn main() -> Result<()> {
    let options = RecoverOpt::from_args();

    let log_level = match options.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    for file in &options.files {
        let shares = ShareFile::import(file)
            .with_context(|| format!("Failed to load the share file {}", file))?;
        let report = shares
            .recover_secret(file, options.threshold)
            .with_context(|| format!("Failed to recover the secret from {}", file))?;
        info!(
            "Recovered the secret of {} from {} shares",
            file, report.used
        );
        println!("{}", report.render(options.format)?);
    }
    Ok(())
}
