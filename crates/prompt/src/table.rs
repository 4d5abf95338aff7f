//! Static topic → prompt table.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Returned for any topic missing from the table.
pub const FALLBACK_PROMPT: &str =
    "Analyze this code and explain its key concepts, algorithms, and implementation details.";

const PAGE_MANAGEMENT: &str = "Analyze this InnoDB page management code and explain:
1. The exact structure of a 16KB page (header, records, free space, directory, trailer)
2. How records are organized within a page
3. The page cursor mechanism for navigation
4. Different page types and their purposes
5. Key algorithms for space management within pages";

const BUFFER_POOL: &str = "Analyze this buffer pool implementation and explain:
1. How the buffer pool manages pages in memory
2. The LRU algorithm implementation and optimizations
3. The flush list and dirty page management
4. Page hash table for lookups
5. Read-ahead mechanisms
6. Performance considerations and tuning";

const BTREE: &str = "Analyze this B+ tree implementation and explain:
1. The B+ tree structure and node types
2. Search, insert, and delete algorithms
3. Page split and merge operations
4. Pessimistic vs optimistic operations
5. Cursor types and their use cases
6. Performance characteristics";

const TRANSACTION: &str = "Analyze this transaction system and explain:
1. How MVCC is implemented
2. Transaction lifecycle and states
3. Read view creation and visibility rules
4. Undo log structure and usage
5. Isolation level implementation
6. Commit and rollback processes";

const LOCKING: &str = "Analyze this locking system and explain:
1. Lock types and granularities
2. Lock compatibility matrix
3. Next-key locking algorithm
4. Deadlock detection mechanism
5. Lock wait handling
6. Performance implications";

const LOGGING: &str = "Analyze this logging system and explain:
1. Redo log structure and format
2. LSN (Log Sequence Number) mechanism
3. Checkpoint algorithm
4. Recovery process phases
5. Log buffer management
6. Durability guarantees";

pub(crate) static ANALYSIS_PROMPTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("page_management", PAGE_MANAGEMENT),
        ("buffer_pool", BUFFER_POOL),
        ("btree", BTREE),
        ("transaction", TRANSACTION),
        ("locking", LOCKING),
        ("logging", LOGGING),
    ])
});

/// Registered topic keys, sorted.
pub fn topics() -> Vec<&'static str> {
    let mut keys: Vec<_> = ANALYSIS_PROMPTS.keys().copied().collect();
    keys.sort_unstable();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topics() {
        assert_eq!(
            topics(),
            vec![
                "btree",
                "buffer_pool",
                "locking",
                "logging",
                "page_management",
                "transaction"
            ]
        );
    }

    #[test]
    fn test_prompts_are_numbered_lists() {
        for (topic, text) in ANALYSIS_PROMPTS.iter() {
            let mut lines = text.lines();
            let intro = lines.next().unwrap_or_default();
            assert!(intro.starts_with("Analyze this"), "{topic}: {intro}");
            assert!(intro.ends_with("explain:"), "{topic}: {intro}");

            for (n, line) in lines.enumerate() {
                assert!(line.starts_with(&format!("{}. ", n + 1)), "{topic}: {line}");
            }
        }
    }

    #[test]
    fn test_prompt_point_counts() {
        assert_eq!(ANALYSIS_PROMPTS["page_management"].lines().count(), 6);
        assert_eq!(ANALYSIS_PROMPTS["btree"].lines().count(), 7);
    }
}
