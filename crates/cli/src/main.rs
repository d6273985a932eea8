// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker judge command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{debug, error};
use std::io;

use pokerjudge_eval::{Hand, HandStats, classify};

mod input;

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short)]
    verbose: bool,
    /// The hand cards, for example `H1 H10 H11 H12 H13`, reads hands from
    /// stdin one per line if not given.
    cards: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.cards.is_empty() {
        let stdin = io::stdin();
        input::run(stdin.lock(), io::stdout().lock())
    } else {
        let hand = Hand::parse(&cli.cards)?;
        debug!("{hand}: {:?}", HandStats::new(&hand));
        println!("{}", classify(&hand));
        Ok(())
    }
}
