use anyhow::{Context, Result, bail};
use ifstat_fake::{DeviceTable, Engine};
use std::io::BufRead;
use tracing::info;

use crate::cli::ApplyOpts;
use crate::show::{load, render};

pub fn run(opts: ApplyOpts) -> Result<()> {
    let mut table = load(&opts.snapshot)?;
    let engine = Engine::new(opts.engine_config());

    let rejected = if opts.commands.is_empty() {
        let mut lines = Vec::new();
        for line in std::io::stdin().lock().split(b'\n') {
            lines.push(line.context("reading commands from stdin")?);
        }
        submit_all(&engine, &mut table, lines.iter().map(Vec::as_slice))
    } else {
        submit_all(&engine, &mut table, opts.commands.iter().map(String::as_bytes))
    };

    print!("{}", render(&table, opts.snapshot.iface.as_deref())?);

    if rejected > 0 {
        bail!("{rejected} command(s) rejected");
    }
    Ok(())
}

/// Submit each line independently; returns how many were rejected.
fn submit_all<'a>(
    engine: &Engine,
    table: &mut DeviceTable,
    lines: impl IntoIterator<Item = &'a [u8]>,
) -> usize {
    let mut rejected = 0;
    for line in lines {
        match engine.submit(table, line) {
            Ok(applied) => info!("[apply] {applied}"),
            Err(_) => rejected += 1,
        }
    }
    rejected
}
