use crate::sheet::error::StoreError;
use crate::sheet::store::SheetStore;

/// A sheet held in memory, used for dry runs and tests.
///
/// [`MemorySheet::failing_after`] makes every append past the given count
/// fail, which simulates a store that goes away mid-cycle.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    rows: Vec<Vec<String>>,
    fail_after: Option<usize>,
    appends: usize,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn failing_after(mut self, successful_appends: usize) -> Self {
        self.fail_after = Some(successful_appends);
        self
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of `append_row` calls, failed ones included.
    pub fn append_calls(&self) -> usize {
        self.appends
    }
}

impl SheetStore for MemorySheet {
    fn is_empty(&mut self) -> Result<bool, StoreError> {
        Ok(self.rows.is_empty())
    }

    fn append_row(&mut self, cells: &[String]) -> Result<(), StoreError> {
        self.appends += 1;
        if self.fail_after.is_some_and(|limit| self.appends > limit) {
            return Err(StoreError::Rejected(format!(
                "append #{} refused",
                self.appends
            )));
        }
        self.rows.push(cells.to_vec());
        Ok(())
    }
}
