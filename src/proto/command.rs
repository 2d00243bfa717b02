use std::{fmt, str::FromStr};

use crate::error::CommandError;
use crate::registry::Device;
use crate::stats::Slot;

/// A fully validated command. Only the builder in [`super::parser`] can
/// produce one, so holding a `Command` means every attribute was accepted.
#[derive(Debug)]
pub struct Command<'a> {
    pub(crate) device: &'a mut Device,
    pub(crate) direction: Direction,
    pub(crate) field: Field,
    pub(crate) slot: Slot,
    pub(crate) operation: Operation,
}

impl Command<'_> {
    pub fn device_name(&self) -> &str {
        &self.device.name
    }
    pub fn direction(&self) -> Direction {
        self.direction
    }
    pub fn field(&self) -> Field {
        self.field
    }
    pub fn slot(&self) -> Slot {
        self.slot
    }
    pub fn operation(&self) -> Operation {
        self.operation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Rx,
    Tx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Bytes,
    Packets,
    Errors,
    Dropped,
    Fifo,
    Frame,
    Compressed,
    Multicast,
    Collisions,
    Carrier,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Bytes,
        Field::Packets,
        Field::Errors,
        Field::Dropped,
        Field::Fifo,
        Field::Frame,
        Field::Compressed,
        Field::Multicast,
        Field::Collisions,
        Field::Carrier,
    ];
}

/// Arithmetic applied to the resolved counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Set(u64),
    Add(u64),
    Sub(u64),
}

impl Operation {
    pub fn amount(self) -> u64 {
        match self {
            Operation::Set(n) | Operation::Add(n) | Operation::Sub(n) => n,
        }
    }

    /// Resolve an operation token such as `=100`, `+5` or `-3`.
    pub fn resolve(token: &[u8], parsing: AmountParsing) -> Result<Self, CommandError> {
        let (&op, digits) = token
            .split_first()
            .ok_or(CommandError::InvalidOperation)?;
        let make: fn(u64) -> Operation = match op {
            b'=' => Operation::Set,
            b'+' => Operation::Add,
            b'-' => Operation::Sub,
            _ => return Err(CommandError::InvalidOperation),
        };
        parsing
            .parse(digits)
            .map(make)
            .ok_or(CommandError::InvalidOperation)
    }
}

/// How the digits after the operation character are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmountParsing {
    /// Take leading digits and ignore the rest; no digits means 0.
    /// Overlong amounts wrap.
    #[default]
    Lenient,
    /// Require one or more digits that fit in a `u64` and nothing else.
    Strict,
}

impl AmountParsing {
    pub fn parse(self, digits: &[u8]) -> Option<u64> {
        match self {
            AmountParsing::Lenient => Some(
                digits
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .fold(0u64, |acc, b| {
                        acc.wrapping_mul(10).wrapping_add(u64::from(b - b'0'))
                    }),
            ),
            AmountParsing::Strict => {
                if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
                    return None;
                }
                std::str::from_utf8(digits).ok()?.parse().ok()
            }
        }
    }
}

/* ---------- enum string helpers & FromStr impls ---------- */

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Rx => "rx",
            Direction::Tx => "tx",
        }
    }
}

impl Field {
    /// Wire name, as printed in the `/proc/net/dev` header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Bytes => "bytes",
            Field::Packets => "packets",
            Field::Errors => "errs",
            Field::Dropped => "drop",
            Field::Fifo => "fifo",
            Field::Frame => "frame",
            Field::Compressed => "compressed",
            Field::Multicast => "multicast",
            Field::Collisions => "colls",
            Field::Carrier => "carrier",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Set(n) => write!(f, "={n}"),
            Operation::Add(n) => write!(f, "+{n}"),
            Operation::Sub(n) => write!(f, "-{n}"),
        }
    }
}

// Matching is exact: no case folding, no prefixes.

impl FromStr for Direction {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rx" => Ok(Direction::Rx),
            "tx" => Ok(Direction::Tx),
            _ => Err(()),
        }
    }
}

impl FromStr for Field {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}
