//! Reading and writing counter tables in the `/proc/net/dev` layout.

use std::fmt::Write;

use thiserror::Error;

use crate::registry::{Device, DeviceTable};
use crate::stats::{CounterSet, Slot};

const HEADER: &str = "Inter-|   Receive                                                |  Transmit\n \
face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed\n";

// Column widths used by the kernel when printing each row.
const WIDTHS: [usize; 16] = [7, 7, 4, 4, 4, 5, 10, 9, 8, 7, 4, 4, 4, 5, 7, 10];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("line {0}: missing ':' after interface name")]
    MissingColon(usize),
    #[error("line {0}: empty interface name")]
    EmptyName(usize),
    #[error("line {0}: expected 16 counters, found {1}")]
    ColumnCount(usize, usize),
    #[error("line {0}: invalid counter value: {1}")]
    BadInt(usize, String),
}

fn is_header(line: &str) -> bool {
    line.contains('|')
}

/// Parse a `/proc/net/dev` style table. Header lines (those containing `|`)
/// and blank lines are skipped.
pub fn parse(text: &str) -> Result<DeviceTable, SnapshotError> {
    let mut table = DeviceTable::new();

    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        if line.trim().is_empty() || is_header(line) {
            continue;
        }

        let (name, values) = line.split_once(':').ok_or(SnapshotError::MissingColon(lineno))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(SnapshotError::EmptyName(lineno));
        }

        let values = values
            .split_whitespace()
            .map(|v| {
                v.parse::<u64>()
                    .map_err(|_| SnapshotError::BadInt(lineno, v.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() != WIDTHS.len() {
            return Err(SnapshotError::ColumnCount(lineno, values.len()));
        }

        let mut stats = CounterSet::default();
        for (slot, value) in Slot::RX.into_iter().chain(Slot::TX).zip(values) {
            *stats.slot_mut(slot) = value;
        }
        table.insert(Device::with_stats(name, stats));
    }

    Ok(table)
}

/// Render devices in the kernel's `/proc/net/dev` layout.
pub fn render<'a>(devices: impl IntoIterator<Item = &'a Device>) -> String {
    let mut out = String::from(HEADER);
    for device in devices {
        let _ = write!(out, "{:>6}:", device.name);
        for (slot, width) in Slot::RX.into_iter().chain(Slot::TX).zip(WIDTHS) {
            let _ = write!(out, " {:>width$}", device.stats.get(slot));
        }
        out.push('\n');
    }
    out
}
