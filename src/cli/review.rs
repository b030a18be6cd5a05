use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::record::RecordSet;
use crate::session::{Outcome, Session, SessionCommand};

/// Run the review loop over `input`, writing everything the reviewer sees to `out`.
pub fn run<R: BufRead, W: Write>(
    records: RecordSet,
    settings: Settings,
    input: R,
    mut out: W,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "Reviewing {} record(s). Type `help` for commands.",
        records.len()
    )?;
    let mut session = Session::new(records, settings);

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(c) => c,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        match session.apply(command)? {
            Outcome::Continue(text) if text.is_empty() => {}
            Outcome::Continue(text) => writeln!(out, "{}", text.trim_end())?,
            Outcome::Quit => break,
        }
    }

    if session.modal().is_open() {
        tracing::debug!("Leaving review with the detail view open");
    }
    // Dropping the session tears down any open modal and its page guards.
    Ok(())
}

pub fn review(records: RecordSet, settings: Settings) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    run(records, settings, stdin.lock(), std::io::stdout())
}
