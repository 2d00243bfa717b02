use crate::proto::command::{Direction, Field};

/// Traffic counters of one interface, laid out like the kernel's
/// `net_device_stats` subset shown in `/proc/net/dev`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterSet {
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub rx_errors: u64,
    pub rx_dropped: u64,
    pub rx_fifo_errors: u64,
    pub rx_frame_errors: u64,
    pub rx_compressed: u64,
    pub multicast: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    pub tx_errors: u64,
    pub tx_dropped: u64,
    pub tx_fifo_errors: u64,
    pub collisions: u64,
    pub tx_carrier_errors: u64,
    pub tx_compressed: u64,
}

/// One counter location inside a [`CounterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    RxBytes,
    RxPackets,
    RxErrors,
    RxDropped,
    RxFifoErrors,
    RxFrameErrors,
    RxCompressed,
    Multicast,
    TxBytes,
    TxPackets,
    TxErrors,
    TxDropped,
    TxFifoErrors,
    Collisions,
    TxCarrierErrors,
    TxCompressed,
}

impl Slot {
    /// Receive columns in `/proc/net/dev` order.
    pub const RX: [Slot; 8] = [
        Slot::RxBytes,
        Slot::RxPackets,
        Slot::RxErrors,
        Slot::RxDropped,
        Slot::RxFifoErrors,
        Slot::RxFrameErrors,
        Slot::RxCompressed,
        Slot::Multicast,
    ];

    /// Transmit columns in `/proc/net/dev` order.
    pub const TX: [Slot; 8] = [
        Slot::TxBytes,
        Slot::TxPackets,
        Slot::TxErrors,
        Slot::TxDropped,
        Slot::TxFifoErrors,
        Slot::Collisions,
        Slot::TxCarrierErrors,
        Slot::TxCompressed,
    ];

    /// The counter a `(field, direction)` pair addresses, or `None` when the
    /// field does not exist in that direction.
    ///
    /// This table is the only place field/direction legality is decided, so a
    /// pair the resolver accepts always has a slot.
    pub const fn resolve(field: Field, direction: Direction) -> Option<Slot> {
        use Direction::{Rx, Tx};
        Some(match (field, direction) {
            (Field::Bytes, Rx) => Slot::RxBytes,
            (Field::Bytes, Tx) => Slot::TxBytes,
            (Field::Packets, Rx) => Slot::RxPackets,
            (Field::Packets, Tx) => Slot::TxPackets,
            (Field::Errors, Rx) => Slot::RxErrors,
            (Field::Errors, Tx) => Slot::TxErrors,
            (Field::Dropped, Rx) => Slot::RxDropped,
            (Field::Dropped, Tx) => Slot::TxDropped,
            (Field::Fifo, Rx) => Slot::RxFifoErrors,
            (Field::Fifo, Tx) => Slot::TxFifoErrors,
            (Field::Compressed, Rx) => Slot::RxCompressed,
            (Field::Compressed, Tx) => Slot::TxCompressed,
            (Field::Frame, Rx) => Slot::RxFrameErrors,
            (Field::Multicast, Rx) => Slot::Multicast,
            (Field::Collisions, Tx) => Slot::Collisions,
            (Field::Carrier, Tx) => Slot::TxCarrierErrors,
            (Field::Frame | Field::Multicast, Tx) | (Field::Collisions | Field::Carrier, Rx) => {
                return None;
            }
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slot::RxBytes => "rx_bytes",
            Slot::RxPackets => "rx_packets",
            Slot::RxErrors => "rx_errors",
            Slot::RxDropped => "rx_dropped",
            Slot::RxFifoErrors => "rx_fifo_errors",
            Slot::RxFrameErrors => "rx_frame_errors",
            Slot::RxCompressed => "rx_compressed",
            Slot::Multicast => "multicast",
            Slot::TxBytes => "tx_bytes",
            Slot::TxPackets => "tx_packets",
            Slot::TxErrors => "tx_errors",
            Slot::TxDropped => "tx_dropped",
            Slot::TxFifoErrors => "tx_fifo_errors",
            Slot::Collisions => "collisions",
            Slot::TxCarrierErrors => "tx_carrier_errors",
            Slot::TxCompressed => "tx_compressed",
        }
    }
}

impl CounterSet {
    pub fn get(&self, slot: Slot) -> u64 {
        match slot {
            Slot::RxBytes => self.rx_bytes,
            Slot::RxPackets => self.rx_packets,
            Slot::RxErrors => self.rx_errors,
            Slot::RxDropped => self.rx_dropped,
            Slot::RxFifoErrors => self.rx_fifo_errors,
            Slot::RxFrameErrors => self.rx_frame_errors,
            Slot::RxCompressed => self.rx_compressed,
            Slot::Multicast => self.multicast,
            Slot::TxBytes => self.tx_bytes,
            Slot::TxPackets => self.tx_packets,
            Slot::TxErrors => self.tx_errors,
            Slot::TxDropped => self.tx_dropped,
            Slot::TxFifoErrors => self.tx_fifo_errors,
            Slot::Collisions => self.collisions,
            Slot::TxCarrierErrors => self.tx_carrier_errors,
            Slot::TxCompressed => self.tx_compressed,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut u64 {
        match slot {
            Slot::RxBytes => &mut self.rx_bytes,
            Slot::RxPackets => &mut self.rx_packets,
            Slot::RxErrors => &mut self.rx_errors,
            Slot::RxDropped => &mut self.rx_dropped,
            Slot::RxFifoErrors => &mut self.rx_fifo_errors,
            Slot::RxFrameErrors => &mut self.rx_frame_errors,
            Slot::RxCompressed => &mut self.rx_compressed,
            Slot::Multicast => &mut self.multicast,
            Slot::TxBytes => &mut self.tx_bytes,
            Slot::TxPackets => &mut self.tx_packets,
            Slot::TxErrors => &mut self.tx_errors,
            Slot::TxDropped => &mut self.tx_dropped,
            Slot::TxFifoErrors => &mut self.tx_fifo_errors,
            Slot::Collisions => &mut self.collisions,
            Slot::TxCarrierErrors => &mut self.tx_carrier_errors,
            Slot::TxCompressed => &mut self.tx_compressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_direction_fields() {
        assert_eq!(Slot::resolve(Field::Frame, Direction::Rx), Some(Slot::RxFrameErrors));
        assert_eq!(Slot::resolve(Field::Multicast, Direction::Rx), Some(Slot::Multicast));
        assert_eq!(Slot::resolve(Field::Collisions, Direction::Tx), Some(Slot::Collisions));
        assert_eq!(Slot::resolve(Field::Carrier, Direction::Tx), Some(Slot::TxCarrierErrors));
        assert_eq!(Slot::resolve(Field::Frame, Direction::Tx), None);
        assert_eq!(Slot::resolve(Field::Multicast, Direction::Tx), None);
        assert_eq!(Slot::resolve(Field::Collisions, Direction::Rx), None);
        assert_eq!(Slot::resolve(Field::Carrier, Direction::Rx), None);
    }

    #[test]
    fn every_slot_is_reachable_once() {
        let mut seen = Vec::new();
        for field in Field::ALL {
            for dir in [Direction::Rx, Direction::Tx] {
                if let Some(slot) = Slot::resolve(field, dir) {
                    assert!(!seen.contains(&slot), "{slot:?} mapped twice");
                    seen.push(slot);
                }
            }
        }
        assert_eq!(seen.len(), 16);
        for slot in Slot::RX.into_iter().chain(Slot::TX) {
            assert!(seen.contains(&slot));
        }
    }

    #[test]
    fn slots_are_independent() {
        let mut stats = CounterSet::default();
        for (i, slot) in Slot::RX.into_iter().chain(Slot::TX).enumerate() {
            *stats.slot_mut(slot) = i as u64 + 1;
        }
        for (i, slot) in Slot::RX.into_iter().chain(Slot::TX).enumerate() {
            assert_eq!(stats.get(slot), i as u64 + 1, "{}", slot.name());
        }
    }
}
