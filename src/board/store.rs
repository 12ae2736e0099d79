use core::fmt::Write;

use crate::board::{Device, DeviceError, table::CellTable};

/// Number of cells in the store.
pub const STORE_CELLS: usize = 10;

/// Highest store version that initializes successfully.
pub const MAX_STORE_VERSION: i32 = 3;

/// Capacity of a composed store name, in bytes.
pub const STORE_NAME_LEN: usize = 32;

/// Read/write memory store.
///
/// The name is `"<label>.<version>"`. Cells are zeroed by a successful
/// [`Device::initialize`]; every in-range write lands and marks the cell
/// dirty until the next initialize or [`Store::clear_dirty`].
pub struct Store {
    name: heapless::String<STORE_NAME_LEN>,
    version: i32,
    table: CellTable<STORE_CELLS>,
}

impl Store {
    /// Creates a store without touching its cells.
    ///
    /// Returns `InvalidArgument` if the composed name exceeds
    /// [`STORE_NAME_LEN`] bytes.
    pub fn new(label: &str, version: i32) -> Result<Self, DeviceError> {
        let mut name = heapless::String::<STORE_NAME_LEN>::new();
        write!(name, "{}.{}", label, version).map_err(|_| DeviceError::InvalidArgument)?;

        Ok(Self {
            name,
            version,
            table: CellTable::new(),
        })
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Returns true if the cell at `offset` was written since initialization.
    pub fn is_dirty(&self, offset: u32) -> Result<bool, DeviceError> {
        self.table.is_dirty(offset)
    }

    pub fn any_dirty(&self) -> bool {
        self.table.any_dirty()
    }

    /// Calls `f` with the offset and value of each written cell, in offset order.
    pub fn iter_dirty<F>(&self, f: F) -> Result<(), DeviceError>
    where
        F: FnMut(u32, u64) -> Result<(), DeviceError>,
    {
        self.table.iter_dirty(f)
    }

    pub fn clear_dirty(&mut self) {
        self.table.clear_dirty();
    }
}

impl Device for Store {
    fn initialize(&mut self) -> Result<(), DeviceError> {
        log::info!("Initializing {}...", self.name);

        if self.version > MAX_STORE_VERSION {
            return Err(DeviceError::Unavailable);
        }

        self.table.fill(0);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.table.len()
    }

    fn read(&self, offset: u32) -> Result<u64, DeviceError> {
        self.table.read(offset)
    }

    fn write(&mut self, offset: u32, value: u64) -> Result<(), DeviceError> {
        self.table.write(offset, value)
    }
}
