//! Inject synthetic values into network interface traffic counters.
//!
//! A command is one short line:
//!
//! ```text
//! <iface> <rx|tx> <field> <=|+|-><amount>
//! ```
//!
//! e.g. `eth0 rx bytes =100` or `eth0 tx colls +3`. [`Engine::submit`]
//! tokenizes the line, validates each attribute in order against a
//! [`DeviceRegistry`], and only then applies the operation to the one counter
//! it addresses.
//!
//! ```
//! use ifstat_fake::{Device, DeviceTable, Engine};
//!
//! let mut devices: DeviceTable = [Device::new("eth0")].into_iter().collect();
//! let engine = Engine::default();
//!
//! engine.submit(&mut devices, b"eth0 rx bytes =100\n").unwrap();
//! assert_eq!(devices.get("eth0").unwrap().stats.rx_bytes, 100);
//! ```

pub mod engine;
pub mod error;
pub mod exec;
pub mod netdev;
pub mod proto;
pub mod registry;
pub mod stats;

pub use engine::{Engine, EngineConfig};
pub use error::CommandError;
pub use exec::Applied;
pub use proto::command::{AmountParsing, Direction, Field, Operation};
pub use registry::{Device, DeviceRegistry, DeviceTable};
pub use stats::{CounterSet, Slot};
