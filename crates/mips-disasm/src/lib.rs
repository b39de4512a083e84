pub mod report;

pub use report::{labels_kv, LabelKV, Report};
