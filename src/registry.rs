use crate::stats::CounterSet;

/// A network interface and the counters it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub name: String,
    pub stats: CounterSet,
}

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: CounterSet::default(),
        }
    }

    pub fn with_stats(name: impl Into<String>, stats: CounterSet) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// Source of devices addressed by name.
///
/// Lookup takes `&mut self` so the returned device stays exclusively borrowed
/// from resolution until its counter has been written.
pub trait DeviceRegistry {
    fn lookup(&mut self, name: &str) -> Option<&mut Device>;
}

/// In-memory registry that keeps devices in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeviceTable {
    devices: Vec<Device>,
}

impl DeviceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a device, replacing any existing one with the same name.
    pub fn insert(&mut self, device: Device) {
        match self.devices.iter().position(|d| d.name == device.name) {
            Some(idx) => self.devices[idx] = device,
            None => self.devices.push(device),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Device> {
        self.devices.iter()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

impl DeviceRegistry for DeviceTable {
    fn lookup(&mut self, name: &str) -> Option<&mut Device> {
        self.devices.iter_mut().find(|d| d.name == name)
    }
}

impl FromIterator<Device> for DeviceTable {
    fn from_iter<I: IntoIterator<Item = Device>>(iter: I) -> Self {
        let mut table = DeviceTable::new();
        for device in iter {
            table.insert(device);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_by_name() {
        let mut table: DeviceTable = [Device::new("lo"), Device::new("eth0")].into_iter().collect();
        let mut stats = CounterSet::default();
        stats.rx_bytes = 9;
        table.insert(Device::with_stats("lo", stats));

        assert_eq!(table.len(), 2);
        let names: Vec<_> = table.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["lo", "eth0"]);
        assert_eq!(table.get("lo").map(|d| d.stats.rx_bytes), Some(9));
    }

    #[test]
    fn lookup_is_exact() {
        let mut table: DeviceTable = [Device::new("eth0")].into_iter().collect();
        assert!(table.lookup("eth0").is_some());
        assert!(table.lookup("eth").is_none());
        assert!(table.lookup("ETH0").is_none());
    }
}
