use crate::sheet::error::StoreError;
use crate::types::row::SHEET_HEADER;
use log::info;

/// The two operations the collector needs from a tabular store.
pub trait SheetStore {
    /// Whether the store holds no rows at all, header included.
    fn is_empty(&mut self) -> Result<bool, StoreError>;

    /// Appends one row of cells after the last existing row.
    fn append_row(&mut self, cells: &[String]) -> Result<(), StoreError>;
}

/// Writes [`SHEET_HEADER`] if the store is empty. Returns whether it did.
pub fn ensure_header<S: SheetStore + ?Sized>(store: &mut S) -> Result<bool, StoreError> {
    if !store.is_empty()? {
        return Ok(false);
    }
    let header: Vec<String> = SHEET_HEADER.iter().map(|cell| cell.to_string()).collect();
    store.append_row(&header)?;
    info!("Wrote sheet header");
    Ok(true)
}
