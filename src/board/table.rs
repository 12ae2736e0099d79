use crate::board::{
    error::DeviceError,
    helpers::{cell_index, cell_span},
};

/// Fixed-size array of 8-byte cells with per-cell dirty tracking.
///
/// Writes through [`CellTable::write`] mark the cell dirty; bulk loads and
/// fills do not.
pub struct CellTable<const N: usize>
where
    bitmaps::BitsImpl<N>: bitmaps::Bits,
{
    cells: [u64; N],
    dirty: bitmaps::Bitmap<N>,
}

impl<const N: usize> CellTable<N>
where
    bitmaps::BitsImpl<N>: bitmaps::Bits,
{
    /// Creates a zeroed table with no dirty cells.
    pub fn new() -> Self {
        Self::from_cells([0; N])
    }

    /// Creates a table holding `cells`, with no dirty cells.
    pub fn from_cells(cells: [u64; N]) -> Self {
        Self {
            cells,
            dirty: bitmaps::Bitmap::new(),
        }
    }

    /// Number of cells in the table.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if the table has no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Reads the cell at `offset`, or `InvalidArgument` if out of range.
    pub fn read(&self, offset: u32) -> Result<u64, DeviceError> {
        let index = cell_index::<N>(offset)?;
        Ok(self.cells[index])
    }

    /// Writes the cell at `offset` and marks it dirty.
    pub fn write(&mut self, offset: u32, value: u64) -> Result<(), DeviceError> {
        let index = cell_index::<N>(offset)?;
        self.cells[index] = value;
        self.dirty.set(index, true);
        Ok(())
    }

    /// Copies `values` into consecutive cells starting at `offset` without
    /// marking them dirty.
    pub fn load(&mut self, offset: u32, values: &[u64]) -> Result<(), DeviceError> {
        let (start, end) = cell_span::<N>(offset, values.len())?;
        self.cells[start..end].copy_from_slice(values);
        Ok(())
    }

    /// Sets every cell to `value` and clears all dirty state.
    pub fn fill(&mut self, value: u64) {
        self.cells.fill(value);
        self.clear_dirty();
    }

    /// Returns true if the cell at `offset` was written since the last clear.
    pub fn is_dirty(&self, offset: u32) -> Result<bool, DeviceError> {
        let index = cell_index::<N>(offset)?;
        Ok(self.dirty.get(index))
    }

    /// Returns true if any cell was written since the last clear.
    pub fn any_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Calls `f` with the offset and value of each dirty cell, in offset order.
    pub fn iter_dirty<F>(&self, mut f: F) -> Result<(), DeviceError>
    where
        F: FnMut(u32, u64) -> Result<(), DeviceError>,
    {
        let mut idx = self.dirty.first_index();
        while let Some(index) = idx {
            f(index as u32, self.cells[index])?;
            idx = self.dirty.next_index(index);
        }
        Ok(())
    }

    /// Forgets every dirty cell without touching values.
    pub fn clear_dirty(&mut self) {
        self.dirty = bitmaps::Bitmap::new();
    }
}

impl<const N: usize> Default for CellTable<N>
where
    bitmaps::BitsImpl<N>: bitmaps::Bits,
{
    fn default() -> Self {
        Self::new()
    }
}
