use crate::experiment::{Algorithm, Dataset, MEMORY_SIZES, Metric, TABLE_ROWS};
use crate::report::row::MeasurementRow;
use crate::sim;
use crate::trace::Reference;
use anyhow::bail;

/// One algorithm's measurements in the fixed block layout: three dataset
/// blocks of five rows, ascending memory size within a block. Construction
/// enforces the row count; row order is preserved exactly as given and
/// never re-sorted, since it defines the x-axis of every chart.
#[derive(Debug, Clone)]
pub struct MeasurementTable {
    pub algorithm: Algorithm,
    rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    pub fn from_rows(algorithm: Algorithm, rows: Vec<MeasurementRow>) -> anyhow::Result<Self> {
        if rows.len() != TABLE_ROWS {
            bail!(
                "{} table has {} rows, expected {}",
                algorithm.name(),
                rows.len(),
                TABLE_ROWS
            );
        }
        for (i, row) in rows.iter().enumerate() {
            let expected = MEMORY_SIZES[i % MEMORY_SIZES.len()];
            if row.memory_size != expected {
                eprintln!(
                    "WARN: {} row {}: memory size {} where {} is usual",
                    algorithm.name(),
                    i + 1,
                    row.memory_size,
                    expected
                );
            }
        }
        Ok(Self { algorithm, rows })
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    /// The dataset's 5-row block.
    pub fn block(&self, dataset: Dataset) -> &[MeasurementRow] {
        let start = dataset.index() * MEMORY_SIZES.len();
        &self.rows[start..start + MEMORY_SIZES.len()]
    }

    /// One plottable series: (memory size, counter) pairs in block row order.
    pub fn series(&self, dataset: Dataset, metric: Metric) -> Vec<(u32, u64)> {
        self.block(dataset)
            .iter()
            .map(|row| (row.memory_size, row.metric(metric)))
            .collect()
    }
}

/// Measure one policy over the whole grid: every dataset block in order,
/// every memory size within it. `traces` must hold the three reference
/// strings in dataset order.
pub fn build_table(
    algorithm: Algorithm,
    traces: &[(Dataset, Vec<Reference>)],
    arb_interval: usize,
) -> anyhow::Result<MeasurementTable> {
    let mut rows = Vec::with_capacity(TABLE_ROWS);
    for (dataset, trace) in traces {
        for &frames in MEMORY_SIZES.iter() {
            let m = sim::run(algorithm, trace, frames as usize, arb_interval);
            rows.push(MeasurementRow {
                algorithm_name: algorithm.name().to_string(),
                reference_string_name: dataset.label().to_string(),
                memory_size: frames,
                page_faults: m.page_faults,
                interrupts: m.interrupts,
                disk_writes: m.disk_writes,
            });
        }
    }
    MeasurementTable::from_rows(algorithm, rows)
}

/// Well-formed 15-row fixture for table and chart tests.
#[cfg(test)]
pub(crate) fn sample_rows(algorithm: Algorithm) -> Vec<MeasurementRow> {
    let mut rows = Vec::new();
    for dataset in Dataset::ALL {
        for (i, &size) in MEMORY_SIZES.iter().enumerate() {
            let base = (dataset.index() as u64 + 1) * 100;
            rows.push(MeasurementRow {
                algorithm_name: algorithm.name().to_string(),
                reference_string_name: dataset.label().to_string(),
                memory_size: size,
                page_faults: base - 10 * i as u64,
                interrupts: base / 2,
                disk_writes: base / 4 + i as u64,
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_any_row_count_but_fifteen() {
        let mut rows = sample_rows(Algorithm::Fifo);
        rows.pop();
        let err = MeasurementTable::from_rows(Algorithm::Fifo, rows)
            .unwrap_err()
            .to_string();
        assert!(err.contains("14") && err.contains("15"), "unexpected error: {err}");

        assert!(MeasurementTable::from_rows(Algorithm::Fifo, Vec::new()).is_err());
    }

    #[test]
    fn blocks_slice_by_dataset() {
        let table = MeasurementTable::from_rows(Algorithm::Arb, sample_rows(Algorithm::Arb)).unwrap();
        for dataset in Dataset::ALL {
            let block = table.block(dataset);
            assert_eq!(block.len(), 5);
            assert!(block.iter().all(|r| r.reference_string_name == dataset.label()));
            assert_eq!(block[0].memory_size, 20);
            assert_eq!(block[4].memory_size, 100);
        }
    }

    #[test]
    fn series_keeps_block_row_order() {
        // Block 2 carries page faults [50,40,30,25,20] over sizes 20..100;
        // the extracted series must reproduce both, untouched.
        let mut rows = sample_rows(Algorithm::Fifo);
        let faults = [50u64, 40, 30, 25, 20];
        for (i, row) in rows[5..10].iter_mut().enumerate() {
            row.page_faults = faults[i];
        }
        let table = MeasurementTable::from_rows(Algorithm::Fifo, rows).unwrap();

        assert_eq!(
            table.series(Dataset::Locality, Metric::PageFaults),
            vec![(20, 50), (40, 40), (60, 30), (80, 25), (100, 20)]
        );
    }

    #[test]
    fn build_table_fills_the_grid_in_order() {
        let traces: Vec<(Dataset, Vec<Reference>)> = Dataset::ALL
            .into_iter()
            .map(|d| {
                let pages = [1u32, 2, 3, 1, 4, 2, 5];
                (d, pages.iter().map(|&page| Reference { page, dirty: false }).collect())
            })
            .collect();

        let table = build_table(Algorithm::Fifo, &traces, 1000).unwrap();
        assert_eq!(table.rows().len(), TABLE_ROWS);
        assert_eq!(table.rows()[0].algorithm_name, "FIFO");
        assert_eq!(table.rows()[0].reference_string_name, "Random data");
        assert_eq!(table.rows()[5].reference_string_name, "Locality data");
        assert_eq!(table.rows()[10].reference_string_name, "Exponential random data");
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.memory_size, MEMORY_SIZES[i % 5]);
        }
        // Five distinct pages fit in any of the measured sizes: every run
        // faults once per page and never writes back.
        assert!(table.rows().iter().all(|r| r.page_faults == 5 && r.disk_writes == 0));
    }
}
