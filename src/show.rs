use anyhow::{Context, Result, anyhow};
use ifstat_fake::{DeviceTable, netdev};
use tracing::info;

use crate::cli::{ShowOpts, SnapshotOpts};

pub fn run(opts: ShowOpts) -> Result<()> {
    let table = load(&opts.snapshot)?;
    print!("{}", render(&table, opts.snapshot.iface.as_deref())?);
    Ok(())
}

pub fn load(opts: &SnapshotOpts) -> Result<DeviceTable> {
    let text = std::fs::read_to_string(&opts.stats)
        .with_context(|| format!("reading {}", opts.stats.display()))?;
    let table = netdev::parse(&text)
        .with_context(|| format!("parsing {}", opts.stats.display()))?;
    info!(path = %opts.stats.display(), devices = table.len(), "loaded counters");
    Ok(table)
}

pub fn render(table: &DeviceTable, iface: Option<&str>) -> Result<String> {
    match iface {
        Some(name) => {
            let device = table
                .get(name)
                .ok_or_else(|| anyhow!("no interface {name} in counter table"))?;
            Ok(netdev::render([device]))
        }
        None => Ok(netdev::render(table.iter())),
    }
}
