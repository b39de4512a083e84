use std::collections::BTreeMap;

use tracing::debug;

/// Address to generated label name (`L0`, `L1`, ...), allocated in
/// first-encounter order. Names are never reused within a run.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    names: BTreeMap<u32, String>,
    next: u32,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name for `addr`, allocating a fresh one the first time it is seen.
    pub fn new_label(&mut self, addr: u32) -> &str {
        let next = &mut self.next;
        self.names.entry(addr).or_insert_with(|| {
            let name = format!("L{next}");
            debug!("new label {name} at {addr:#010x}");
            *next += 1;
            name
        })
        .as_str()
    }

    pub fn get(&self, addr: u32) -> Option<&str> {
        self.names.get(&addr).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Labels in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names.iter().map(|(&addr, name)| (addr, name.as_str()))
    }

    pub fn clear(&mut self) {
        self.names.clear();
        self.next = 0;
    }
}
