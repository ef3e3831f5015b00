//! The result buffer: a prefetch window over one statement's rows.

use crate::row::Row;
use crate::transport::FetchReply;

/// Outcome of asking the cache for the next row.
#[derive(Debug, PartialEq)]
pub enum CachePoll {
    /// A cached row, served without transport interaction.
    Hit(Row),
    /// The cached batch is spent; one transport fetch is required.
    Miss,
    /// End-of-data was observed earlier; nothing further will be served.
    Exhausted,
}

/// Buffered rows from the most recent fetch round-trip plus a read cursor.
///
/// Invariant: `next_row <= row_cached <= rows.len()`. Once end-of-data is
/// observed the cache is frozen until the next execute resets it.
#[derive(Debug, Default)]
pub struct RowCache {
    rows: Vec<Row>,
    row_cached: usize,
    next_row: usize,
    end_of_data: bool,
}

impl RowCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the server reported end-of-data for the current statement.
    pub fn end_of_data(&self) -> bool {
        self.end_of_data
    }

    /// Discard buffered rows and clear the end-of-data flag.
    ///
    /// Runs on every execute so exhaustion state from a prior statement
    /// never leaks into the new one.
    pub fn reset(&mut self) {
        self.rows.clear();
        self.row_cached = 0;
        self.next_row = 0;
        self.end_of_data = false;
    }

    /// Next row from the cached batch, if one is available.
    pub fn poll(&mut self) -> CachePoll {
        if self.end_of_data {
            return CachePoll::Exhausted;
        }
        if self.next_row < self.row_cached {
            // each cached row is served at most once
            let row = std::mem::take(&mut self.rows[self.next_row]);
            self.next_row += 1;
            return CachePoll::Hit(row);
        }
        CachePoll::Miss
    }

    /// Adopt a fetch reply, returning the first row of the new batch.
    ///
    /// Returns `None` when the reply reports end-of-data; the cache is then
    /// frozen until [`reset`](Self::reset). A reply claiming no rows without
    /// reporting end-of-data is also treated as end-of-data.
    pub fn install(&mut self, reply: FetchReply) -> Option<Row> {
        if reply.end_of_data {
            self.rows.clear();
            self.row_cached = 0;
            self.next_row = 0;
            self.end_of_data = true;
            return None;
        }
        self.rows = reply.rows;
        // never trust the reported count beyond the rows that arrived
        self.row_cached = reply.rows_fetched.min(self.rows.len());
        if self.row_cached == 0 {
            self.end_of_data = true;
            return None;
        }
        self.next_row = 1;
        Some(std::mem::take(&mut self.rows[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SqlValue;

    fn row(n: i64) -> Row {
        Row::new(vec![SqlValue::Int(n)])
    }

    fn batch(values: &[i64]) -> FetchReply {
        FetchReply {
            rows: values.iter().map(|v| row(*v)).collect(),
            rows_fetched: values.len(),
            end_of_data: false,
        }
    }

    fn end() -> FetchReply {
        FetchReply {
            rows: Vec::new(),
            rows_fetched: 0,
            end_of_data: true,
        }
    }

    #[test]
    fn empty_cache_misses() {
        let mut cache = RowCache::new();
        assert_eq!(cache.poll(), CachePoll::Miss);
    }

    #[test]
    fn batch_is_served_in_order_then_misses() {
        let mut cache = RowCache::new();
        assert_eq!(cache.install(batch(&[1, 2, 3])), Some(row(1)));
        assert_eq!(cache.poll(), CachePoll::Hit(row(2)));
        assert_eq!(cache.poll(), CachePoll::Hit(row(3)));
        assert_eq!(cache.poll(), CachePoll::Miss);
    }

    #[test]
    fn end_of_data_freezes_the_cache() {
        let mut cache = RowCache::new();
        assert_eq!(cache.install(batch(&[1])), Some(row(1)));
        assert_eq!(cache.install(end()), None);
        assert!(cache.end_of_data());
        assert_eq!(cache.poll(), CachePoll::Exhausted);
        assert_eq!(cache.poll(), CachePoll::Exhausted);
    }

    #[test]
    fn reset_clears_exhaustion() {
        let mut cache = RowCache::new();
        cache.install(end());
        assert!(cache.end_of_data());
        cache.reset();
        assert!(!cache.end_of_data());
        assert_eq!(cache.poll(), CachePoll::Miss);
    }

    #[test]
    fn reported_count_is_clamped_to_delivered_rows() {
        let mut cache = RowCache::new();
        let reply = FetchReply {
            rows: vec![row(1), row(2)],
            rows_fetched: 5,
            end_of_data: false,
        };
        assert_eq!(cache.install(reply), Some(row(1)));
        assert_eq!(cache.poll(), CachePoll::Hit(row(2)));
        assert_eq!(cache.poll(), CachePoll::Miss);
    }

    #[test]
    fn short_count_limits_served_rows() {
        let mut cache = RowCache::new();
        let reply = FetchReply {
            rows: vec![row(1), row(2), row(3)],
            rows_fetched: 2,
            end_of_data: false,
        };
        assert_eq!(cache.install(reply), Some(row(1)));
        assert_eq!(cache.poll(), CachePoll::Hit(row(2)));
        assert_eq!(cache.poll(), CachePoll::Miss);
    }

    #[test]
    fn empty_non_final_reply_is_treated_as_end_of_data() {
        let mut cache = RowCache::new();
        let reply = FetchReply {
            rows: Vec::new(),
            rows_fetched: 0,
            end_of_data: false,
        };
        assert_eq!(cache.install(reply), None);
        assert_eq!(cache.poll(), CachePoll::Exhausted);
    }
}
