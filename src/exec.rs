use std::fmt;

use crate::proto::command::{Command, Operation};
use crate::stats::Slot;

/// What a command did to its counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub device: String,
    pub slot: Slot,
    pub operation: Operation,
    pub before: u64,
    pub after: u64,
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} -> {} ({})",
            self.device,
            self.slot.name(),
            self.before,
            self.after,
            self.operation
        )
    }
}

/// Apply a validated command. Arithmetic wraps modulo 2^64.
pub fn execute(cmd: Command<'_>) -> Applied {
    let Command {
        device,
        slot,
        operation,
        ..
    } = cmd;

    let counter = device.stats.slot_mut(slot);
    let before = *counter;
    let after = match operation {
        Operation::Set(n) => n,
        Operation::Add(n) => before.wrapping_add(n),
        Operation::Sub(n) => before.wrapping_sub(n),
    };
    *counter = after;

    Applied {
        device: device.name.clone(),
        slot,
        operation,
        before,
        after,
    }
}
