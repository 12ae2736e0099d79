use crate::board::{Device, DeviceError, table::CellTable};

/// Number of cells in the ROM image.
pub const ROM_CELLS: usize = 5;

/// Read-only configuration ROM.
///
/// The image is loaded at construction with each cell holding its own
/// offset. Every in-range write fails with `PermissionDenied`.
pub struct RomConfig {
    name: &'static str,
    table: CellTable<ROM_CELLS>,
}

impl RomConfig {
    pub fn new(name: &'static str) -> Self {
        let image: [u64; ROM_CELLS] = core::array::from_fn(|i| i as u64);

        Self {
            name,
            table: CellTable::from_cells(image),
        }
    }
}

impl Device for RomConfig {
    fn initialize(&mut self) -> Result<(), DeviceError> {
        log::info!("Initializing device {}...", self.name);
        Ok(())
    }

    fn name(&self) -> &str {
        self.name
    }

    fn size(&self) -> usize {
        self.table.len()
    }

    fn read(&self, offset: u32) -> Result<u64, DeviceError> {
        self.table.read(offset)
    }

    fn write(&mut self, offset: u32, _value: u64) -> Result<(), DeviceError> {
        // Range errors take precedence over the permission check.
        self.table.read(offset)?;
        log::debug!("{}: write to read-only cell {} rejected", self.name, offset);
        Err(DeviceError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_holds_offset_values() {
        let rom = RomConfig::new("Acme ROM");
        assert_eq!(rom.size(), ROM_CELLS);
        for offset in 0..ROM_CELLS as u32 {
            assert_eq!(rom.read(offset), Ok(offset as u64));
        }
    }

    #[test]
    fn initialize_never_fails() {
        let mut rom = RomConfig::new("Acme ROM");
        assert_eq!(rom.initialize(), Ok(()));
        assert_eq!(rom.initialize(), Ok(()));
        assert_eq!(rom.read(3), Ok(3));
    }

    #[test]
    fn name_is_fixed_at_construction() {
        let rom = RomConfig::new("Boot ROM");
        assert_eq!(rom.name(), "Boot ROM");
    }

    #[test]
    fn in_range_write_is_denied_and_leaves_image_intact() {
        let mut rom = RomConfig::new("Acme ROM");

        for offset in 0..ROM_CELLS as u32 {
            assert_eq!(rom.write(offset, 123), Err(DeviceError::PermissionDenied));
        }
        for offset in 0..ROM_CELLS as u32 {
            assert_eq!(rom.read(offset), Ok(offset as u64));
        }
    }

    #[test]
    fn out_of_range_access_is_invalid() {
        let mut rom = RomConfig::new("Acme ROM");
        let past_end = ROM_CELLS as u32;

        assert_eq!(rom.read(past_end), Err(DeviceError::InvalidArgument));
        assert_eq!(rom.write(past_end + 1, 123), Err(DeviceError::InvalidArgument));
    }
}
