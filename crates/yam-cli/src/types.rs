use std::path::PathBuf;

/// Outcome of one import run, feeding the terminal summary.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub source: String,
    pub strategy: String,
    pub rows_read: usize,
    pub rows_mapped: usize,
}

impl ImportResult {
    /// Rows that contributed nothing to the output.
    pub fn rows_dropped(&self) -> usize {
        self.rows_read.saturating_sub(self.rows_mapped)
    }
}
