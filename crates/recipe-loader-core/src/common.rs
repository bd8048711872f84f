use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of a single load run.
///
/// Returned by [`Loader::load`](crate::Loader::load) once the batch has
/// committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Records found in the source document.
    pub records: usize,
    /// `NaN` literals rewritten to `null` before decoding.
    pub nan_replaced: usize,
    /// Rows written by the committed transaction.
    pub inserted: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records read, {} NaN values nulled, {} rows inserted",
            self.records, self.nan_replaced, self.inserted
        )
    }
}
