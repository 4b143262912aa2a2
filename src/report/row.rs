use crate::experiment::Metric;
use serde::{Deserialize, Serialize};

/// One measurement: a (policy, dataset, memory size) cell with its three
/// counters. Serializes to the CSV column set
/// `algorithmName,referenceStringName,memorySize,pageFaults,interrupts,diskWrites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementRow {
    pub algorithm_name: String,
    pub reference_string_name: String,
    pub memory_size: u32,
    pub page_faults: u64,
    pub interrupts: u64,
    pub disk_writes: u64,
}

impl MeasurementRow {
    /// Select one counter column.
    pub fn metric(&self, metric: Metric) -> u64 {
        match metric {
            Metric::PageFaults => self.page_faults,
            Metric::Interrupts => self.interrupts,
            Metric::DiskWrites => self.disk_writes,
        }
    }
}
