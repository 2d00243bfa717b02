//! Command builder.
//!
//! Each attribute is accepted by its own state type, and `accept` consumes the
//! state to return the next one. A [`Command`] only exists once all four
//! attributes have been accepted in order, so a half-built command can never
//! reach the executor.

use super::command::{AmountParsing, Command, Direction, Field, Operation};
use super::tokenizer::Tokens;
use crate::error::CommandError;
use crate::registry::{Device, DeviceRegistry};
use crate::stats::Slot;

/// Start state: the device name comes first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpectDevice;

#[derive(Debug)]
pub struct ExpectDirection<'a> {
    device: &'a mut Device,
}

#[derive(Debug)]
pub struct ExpectField<'a> {
    device: &'a mut Device,
    direction: Direction,
}

#[derive(Debug)]
pub struct ExpectOperation<'a> {
    device: &'a mut Device,
    direction: Direction,
    field: Field,
    slot: Slot,
}

impl ExpectDevice {
    pub fn accept<'a, R>(
        self,
        registry: &'a mut R,
        token: &[u8],
    ) -> Result<ExpectDirection<'a>, CommandError>
    where
        R: DeviceRegistry + ?Sized,
    {
        let name = std::str::from_utf8(token).map_err(|_| CommandError::NoSuchDevice)?;
        let device = registry.lookup(name).ok_or(CommandError::NoSuchDevice)?;
        Ok(ExpectDirection { device })
    }
}

impl<'a> ExpectDirection<'a> {
    pub fn accept(self, token: &[u8]) -> Result<ExpectField<'a>, CommandError> {
        let direction: Direction = std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(CommandError::InvalidDirection)?;
        Ok(ExpectField {
            device: self.device,
            direction,
        })
    }
}

impl<'a> ExpectField<'a> {
    /// The field must exist for the direction already accepted.
    pub fn accept(self, token: &[u8]) -> Result<ExpectOperation<'a>, CommandError> {
        let field: Field = std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(CommandError::InvalidField)?;
        let slot = Slot::resolve(field, self.direction).ok_or(CommandError::InvalidField)?;
        Ok(ExpectOperation {
            device: self.device,
            direction: self.direction,
            field,
            slot,
        })
    }
}

impl<'a> ExpectOperation<'a> {
    pub fn accept(self, token: &[u8], parsing: AmountParsing) -> Result<Command<'a>, CommandError> {
        let operation = Operation::resolve(token, parsing)?;
        Ok(Command {
            device: self.device,
            direction: self.direction,
            field: self.field,
            slot: self.slot,
            operation,
        })
    }
}

fn next_token<'t>(tokens: &mut Tokens<'t>) -> Result<&'t [u8], CommandError> {
    tokens.next().ok_or(CommandError::NotEnoughArguments)
}

/// Parse one command line against `registry`.
///
/// Errors surface in token order: a bad token is reported even when the line
/// also has too few or too many tokens after it.
pub fn parse_command<'a, R>(
    registry: &'a mut R,
    line: &[u8],
    parsing: AmountParsing,
) -> Result<Command<'a>, CommandError>
where
    R: DeviceRegistry + ?Sized,
{
    let mut tokens = Tokens::new(line);

    let cmd = ExpectDevice
        .accept(registry, next_token(&mut tokens)?)?
        .accept(next_token(&mut tokens)?)?
        .accept(next_token(&mut tokens)?)?
        .accept(next_token(&mut tokens)?, parsing)?;

    if tokens.next().is_some() {
        return Err(CommandError::TooManyArguments);
    }
    Ok(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DeviceTable;

    fn table() -> DeviceTable {
        [Device::new("eth0"), Device::new("lo")].into_iter().collect()
    }

    fn parse(line: &str) -> Result<(String, Direction, Field, Slot, Operation), CommandError> {
        let mut table = table();
        let cmd = parse_command(&mut table, line.as_bytes(), AmountParsing::Lenient)?;
        Ok((
            cmd.device_name().to_string(),
            cmd.direction(),
            cmd.field(),
            cmd.slot(),
            cmd.operation(),
        ))
    }

    #[test]
    fn parse_full_command() {
        let (dev, dir, field, slot, op) = parse("eth0 rx bytes =100\n").unwrap();
        assert_eq!(dev, "eth0");
        assert_eq!(dir, Direction::Rx);
        assert_eq!(field, Field::Bytes);
        assert_eq!(slot, Slot::RxBytes);
        assert_eq!(op, Operation::Set(100));
    }

    #[test]
    fn parse_single_direction_fields() {
        assert_eq!(parse("lo rx frame =1").unwrap().3, Slot::RxFrameErrors);
        assert_eq!(parse("lo rx multicast +1").unwrap().3, Slot::Multicast);
        assert_eq!(parse("lo tx colls -1").unwrap().3, Slot::Collisions);
        assert_eq!(parse("lo tx carrier =1").unwrap().3, Slot::TxCarrierErrors);
    }

    #[test]
    fn test_error_cases() {
        // Argument count
        assert_eq!(parse("").unwrap_err(), CommandError::NotEnoughArguments);
        assert_eq!(parse("eth0 rx bytes").unwrap_err(), CommandError::NotEnoughArguments);
        assert_eq!(
            parse("eth0 rx bytes =1 more").unwrap_err(),
            CommandError::TooManyArguments
        );

        // Per attribute
        assert_eq!(parse("eth9 rx bytes =1").unwrap_err(), CommandError::NoSuchDevice);
        assert_eq!(parse("eth0 bogus bytes =1").unwrap_err(), CommandError::InvalidDirection);
        assert_eq!(parse("eth0 tx frame =1").unwrap_err(), CommandError::InvalidField);
        assert_eq!(parse("eth0 rx carrier =1").unwrap_err(), CommandError::InvalidField);
        assert_eq!(parse("eth0 rx bogus =1").unwrap_err(), CommandError::InvalidField);
        assert_eq!(parse("eth0 rx bytes /1").unwrap_err(), CommandError::InvalidOperation);
    }

    #[test]
    fn first_bad_token_wins() {
        assert_eq!(
            parse("eth0 bogus bytes =1 extra").unwrap_err(),
            CommandError::InvalidDirection
        );
        assert_eq!(parse("nope rx").unwrap_err(), CommandError::NoSuchDevice);
        assert_eq!(parse("eth0 RX").unwrap_err(), CommandError::InvalidDirection);
    }

    #[test]
    fn non_utf8_device_is_unknown() {
        let mut table = table();
        let err = parse_command(&mut table, b"\xffeth0 rx bytes =1", AmountParsing::Lenient)
            .unwrap_err();
        assert_eq!(err, CommandError::NoSuchDevice);
    }

    #[test]
    fn strict_parsing_is_threaded_through() {
        let mut table = table();
        let err = parse_command(&mut table, b"eth0 rx bytes +12abc", AmountParsing::Strict)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidOperation);
        assert_eq!(parse("eth0 rx bytes +12abc").unwrap().4, Operation::Add(12));
    }
}
