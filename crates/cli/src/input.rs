// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Classifies hands read line by line.
use anyhow::Result;
use log::debug;
use std::io::{BufRead, Write};

use pokerjudge_eval::{Hand, HandStats, classify};

/// Reads one hand per line and writes its category or the parse error.
///
/// Blank lines are skipped, invalid hands don't stop processing.
pub fn run<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse::<Hand>() {
            Ok(hand) => {
                debug!("{hand}: {:?}", HandStats::new(&hand));
                writeln!(writer, "{hand}: {}", classify(&hand))?;
            }
            Err(e) => {
                debug!("{line}: {e:?}");
                writeln!(writer, "{line}: {e}")?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
