//! Chart rendering: one file per (algorithm, dataset) pair and one per
//! (dataset, metric) pair, 21 JPEG files in total.

pub mod chart;

use crate::experiment::{Algorithm, Dataset, Metric};
use crate::report::table::MeasurementTable;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// `FIFO2.jpg`: algorithm name plus 1-based dataset block position.
pub fn algorithm_chart_name(algorithm: Algorithm, dataset: Dataset) -> String {
    format!("{}{}.jpg", algorithm.name(), dataset.index() + 1)
}

/// `Random data1.jpg`: dataset label plus 1-based metric position.
pub fn dataset_chart_name(dataset: Dataset, metric: Metric) -> String {
    format!("{}{}.jpg", dataset.label(), metric.index() + 1)
}

/// Render the full chart set into `out_dir` (created if absent) and return
/// the written paths. Charts are independent: a failure aborts the rest of
/// the run but leaves already-written files in place.
pub fn render_all(tables: &[MeasurementTable], out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let mut written = Vec::new();

    for table in tables {
        for dataset in Dataset::ALL {
            let path = out_dir.join(algorithm_chart_name(table.algorithm, dataset));
            chart::algorithm_chart(table, dataset, &path)
                .with_context(|| format!("render {}", path.display()))?;
            written.push(path);
        }
    }

    for dataset in Dataset::ALL {
        for metric in Metric::ALL {
            let path = out_dir.join(dataset_chart_name(dataset, metric));
            chart::dataset_chart(tables, dataset, metric, &path)
                .with_context(|| format!("render {}", path.display()))?;
            written.push(path);
        }
    }

    Ok(written)
}
