use tracing::debug;

use crate::error::{CommandError, report};
use crate::exec::{Applied, execute};
use crate::proto::command::AmountParsing;
use crate::proto::parser::parse_command;
use crate::proto::tokenizer::truncate_command;
use crate::registry::DeviceRegistry;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub amount_parsing: AmountParsing,
}

/// Parses and applies counter commands against a caller-supplied registry.
///
/// The engine keeps no state between commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Run one command line.
    ///
    /// `registry` stays exclusively borrowed from device lookup until the
    /// counter is written; callers sharing it across threads must hold their
    /// lock for the whole call. On error nothing was modified.
    pub fn submit<R>(&self, registry: &mut R, line: &[u8]) -> Result<Applied, CommandError>
    where
        R: DeviceRegistry + ?Sized,
    {
        let line = truncate_command(line);
        match parse_command(registry, line, self.config.amount_parsing) {
            Ok(cmd) => {
                let applied = execute(cmd);
                debug!(%applied, "counter updated");
                Ok(applied)
            }
            Err(err) => {
                report(err);
                Err(err)
            }
        }
    }
}
