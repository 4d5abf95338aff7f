//! Static registry of known component documents.
//!
//! Order is display order and defines the index accepted by `show`. Entry 0
//! is the overview document by convention.

use serde::Serialize;

/// One pre-extracted component document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    /// File name, relative to the workspace
    pub filename: &'static str,

    /// One-line summary shown by `list`
    pub description: &'static str,
}

impl ComponentEntry {
    const fn new(filename: &'static str, description: &'static str) -> Self {
        Self {
            filename,
            description,
        }
    }
}

/// The catalog, in canonical order.
pub const COMPONENT_FILES: &[ComponentEntry] = &[
    ComponentEntry::new("00_COMPONENT_OVERVIEW.txt", "Overview and reading guide"),
    ComponentEntry::new("21_universal_header.txt", "Global definitions and constants"),
    ComponentEntry::new(
        "01_page_management.txt",
        "16KB page structure - fundamental storage unit",
    ),
    ComponentEntry::new(
        "02_file_tablespace_management.txt",
        "File and tablespace organization",
    ),
    ComponentEntry::new("03_buffer_pool.txt", "In-memory page caching"),
    ComponentEntry::new("05_record_data_formats.txt", "Record formats and data types"),
    ComponentEntry::new("04_btree_index.txt", "B+ tree implementation"),
    ComponentEntry::new("06_mini_transactions.txt", "Atomic operations (MTR)"),
    ComponentEntry::new("07_logging_recovery.txt", "Write-ahead logging and recovery"),
    ComponentEntry::new("08_transaction_system.txt", "ACID and MVCC implementation"),
    ComponentEntry::new("09_locking_system.txt", "Concurrency control"),
    ComponentEntry::new("10_row_operations.txt", "Insert, update, delete, select"),
    ComponentEntry::new("11_data_dictionary.txt", "Schema and metadata management"),
    ComponentEntry::new("12_query_processing.txt", "SQL-like query execution"),
    ComponentEntry::new("13_insert_buffer.txt", "Change buffering optimization"),
    ComponentEntry::new("14_adaptive_hash_index.txt", "Hash index optimization"),
    ComponentEntry::new("15_synchronization.txt", "Thread coordination primitives"),
    ComponentEntry::new("16_os_abstraction.txt", "Operating system abstraction"),
    ComponentEntry::new("17_memory_management.txt", "Custom memory allocators"),
    ComponentEntry::new("18_utilities.txt", "Common utility functions"),
    ComponentEntry::new("19_server_layer.txt", "Background threads and services"),
    ComponentEntry::new("20_api_layer.txt", "Public API for applications"),
];

/// All registered components.
pub fn components() -> &'static [ComponentEntry] {
    COMPONENT_FILES
}

/// Look up a component by position. Negative and past-the-end indices yield `None`.
pub fn component(index: i64) -> Option<&'static ComponentEntry> {
    usize::try_from(index)
        .ok()
        .and_then(|i| COMPONENT_FILES.get(i))
}
