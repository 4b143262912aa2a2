//! The fixed comparison grid: four replacement policies, three reference
//! string flavors, three measured outcomes, five memory sizes.
//!
//! Chart titles, CSV file names and the block layout of a measurement table
//! all derive from the lookups here, so the display strings are part of the
//! output contract and must not drift.

/// Memory sizes (frame counts) every policy is measured at, in table order.
pub const MEMORY_SIZES: [u32; 5] = [20, 40, 60, 80, 100];

/// Rows in one measurement table: one block per dataset, one row per size.
pub const TABLE_ROWS: usize = Dataset::ALL.len() * MEMORY_SIZES.len();

/// A page-replacement policy under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Fifo,
    Arb,
    Esc,
    LruLfu,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fifo,
        Algorithm::Arb,
        Algorithm::Esc,
        Algorithm::LruLfu,
    ];

    /// Display name, also the stem of the per-algorithm CSV file.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Arb => "ARB",
            Algorithm::Esc => "ESC",
            Algorithm::LruLfu => "LRU-LFU",
        }
    }

    pub fn table_file_name(self) -> String {
        format!("{}.csv", self.name())
    }

    /// Position in [`Algorithm::ALL`]; selects the series style in charts.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A reference-string flavor; one table block (and one trace file) each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Random,
    Locality,
    Exponential,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Random, Dataset::Locality, Dataset::Exponential];

    /// Human-readable label used in chart titles and output file names.
    pub fn label(self) -> &'static str {
        match self {
            Dataset::Random => "Random data",
            Dataset::Locality => "Locality data",
            Dataset::Exponential => "Exponential random data",
        }
    }

    pub fn trace_file_name(self) -> &'static str {
        match self {
            Dataset::Random => "random_reference_string.txt",
            Dataset::Locality => "locality_reference_string.txt",
            Dataset::Exponential => "exponential_reference_string.txt",
        }
    }

    /// Block position in a measurement table (0-based).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A measured outcome, one CSV column and one chart family each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PageFaults,
    Interrupts,
    DiskWrites,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::PageFaults, Metric::Interrupts, Metric::DiskWrites];

    pub fn label(self) -> &'static str {
        match self {
            Metric::PageFaults => "Page faults",
            Metric::Interrupts => "Interrupts",
            Metric::DiskWrites => "Disk writes",
        }
    }

    /// Column position among the measured outcomes (0-based).
    pub fn index(self) -> usize {
        self as usize
    }
}
