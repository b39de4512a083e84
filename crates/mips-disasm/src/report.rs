use serde::{Deserialize, Serialize};

use mips_rs::{LabelTable, Line, Listing};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelKV {
    pub addr: u32,
    pub name: String,
}

/// JSON form of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub base: u32,
    pub instructions: usize,
    pub labels: Vec<LabelKV>,
    pub lines: &'a [Line],
}

impl<'a> Report<'a> {
    pub fn new(base: u32, labels: &LabelTable, listing: &'a Listing) -> Self {
        Self {
            base,
            instructions: listing.lines.len(),
            labels: labels_kv(labels),
            lines: &listing.lines,
        }
    }
}

/// Label table in ascending address order.
pub fn labels_kv(labels: &LabelTable) -> Vec<LabelKV> {
    labels.iter().map(|(addr, name)| LabelKV { addr, name: name.to_string() }).collect()
}
