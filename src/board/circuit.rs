use heapless::Vec;

use crate::board::{
    Device, DeviceError,
    builder::BoardConfig,
    devices::BoardDevice,
    helpers::device_index,
    rom::RomConfig,
    store::Store,
};

/// Number of devices attached to every board.
pub const BOARD_DEVICES: usize = 2;

/// Id of the ROM on an initialized board.
pub const ROM_ID: u32 = 0;
/// Id of the store on an initialized board.
pub const STORE_ID: u32 = 1;

/// A board with a ROM and a read/write store.
///
/// Devices are attached by [`Board::initialize`]; until then every
/// `device_*` call fails with [`DeviceError::NoSuchDevice`].
pub struct Board {
    config: BoardConfig,
    devices: Vec<BoardDevice, BOARD_DEVICES>,
}

impl Board {
    /// Creates a board with default device labels.
    pub fn new(version: i32) -> Self {
        Self::with_config(BoardConfig::new(version))
    }

    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            config,
            devices: Vec::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Version the store is built with.
    pub fn version(&self) -> i32 {
        self.config.store_version
    }

    /// Attaches the board's devices and initializes them in id order.
    ///
    /// Stops at the first device that fails and returns its error. Devices
    /// stay attached after a failure. Calling this again rebuilds every
    /// device from scratch.
    pub fn initialize(&mut self) -> Result<(), DeviceError> {
        log::info!("Initializing board...");

        self.devices.clear();
        self.attach(RomConfig::new(self.config.rom_label).into())?;
        self.attach(Store::new(self.config.store_label, self.config.store_version)?.into())?;

        for device in self.devices.iter_mut() {
            if let Err(err) = device.initialize() {
                log::warn!("{} initialization failed: {}", device.name(), err);
                return Err(err);
            }
        }

        Ok(())
    }

    fn attach(&mut self, device: BoardDevice) -> Result<(), DeviceError> {
        self.devices
            .push(device)
            .map_err(|_| DeviceError::Unavailable)
    }

    /// Number of attached devices.
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Returns the device with the given id.
    pub fn device(&self, id: u32) -> Result<&BoardDevice, DeviceError> {
        let index = self.index(id)?;
        Ok(&self.devices[index])
    }

    pub fn device_mut(&mut self, id: u32) -> Result<&mut BoardDevice, DeviceError> {
        let index = self.index(id)?;
        Ok(&mut self.devices[index])
    }

    pub fn device_name(&self, id: u32) -> Result<&str, DeviceError> {
        Ok(self.device(id)?.name())
    }

    pub fn device_size(&self, id: u32) -> Result<usize, DeviceError> {
        Ok(self.device(id)?.size())
    }

    /// Reads cell `offset` of device `id`.
    pub fn device_get(&self, id: u32, offset: u32) -> Result<u64, DeviceError> {
        self.device(id)?.read(offset)
    }

    /// Writes `value` to cell `offset` of device `id`.
    pub fn device_put(&mut self, id: u32, offset: u32, value: u64) -> Result<(), DeviceError> {
        self.device_mut(id)?.write(offset, value)
    }

    fn index(&self, id: u32) -> Result<usize, DeviceError> {
        device_index(id, self.devices.len()).inspect_err(|_| {
            log::debug!("device id {} rejected, board has {}", id, self.devices.len());
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{
        rom::ROM_CELLS,
        store::STORE_CELLS,
        test_support::{BAD_VERSION, GOOD_VERSION, assert_no_such_device, ready_board},
    };

    #[test]
    fn good_init() {
        let mut board = Board::new(GOOD_VERSION);
        assert_eq!(board.initialize(), Ok(()));
        assert_eq!(board.device_count(), BOARD_DEVICES);
    }

    #[test]
    fn bad_init() {
        let mut board = Board::new(BAD_VERSION);
        let err = board.initialize().unwrap_err();

        assert_eq!(err, DeviceError::Unavailable);
        assert_eq!(err.errno(), 6);

        // The failing store stays attached and identifiable.
        assert_eq!(board.device_count(), BOARD_DEVICES);
        assert_eq!(board.device_name(STORE_ID), Ok("Beta Memory.12"));
    }

    #[test]
    fn version_boundary() {
        assert_eq!(Board::new(3).initialize(), Ok(()));
        assert_eq!(Board::new(4).initialize(), Err(DeviceError::Unavailable));
    }

    #[test]
    fn happy_paths() {
        let mut board = ready_board();

        assert_eq!(board.device_get(ROM_ID, 3), Ok(3));

        let size = board.device_size(STORE_ID).unwrap();
        assert_eq!(size, STORE_CELLS);
        for offset in 0..size as u32 {
            assert_eq!(board.device_get(STORE_ID, offset), Ok(0));
        }

        board.device_put(STORE_ID, 7, 0x1234_5678).unwrap();
        assert_eq!(board.device_get(STORE_ID, 7), Ok(0x1234_5678));
    }

    #[test]
    fn device_names() {
        let board = ready_board();
        assert_eq!(board.device_name(ROM_ID), Ok("Acme ROM"));
        assert_eq!(board.device_name(STORE_ID), Ok("Beta Memory.3"));
    }

    #[test]
    fn put_readonly() {
        let mut board = ready_board();

        assert_eq!(
            board.device_put(ROM_ID, 1, 123),
            Err(DeviceError::PermissionDenied)
        );

        let size = board.device_size(ROM_ID).unwrap() as u32;
        assert_eq!(
            board.device_put(ROM_ID, size + 1, 123),
            Err(DeviceError::InvalidArgument)
        );

        // ROM contents never change
        for offset in 0..ROM_CELLS as u32 {
            assert_eq!(board.device_get(ROM_ID, offset), Ok(offset as u64));
        }
    }

    #[test]
    fn invalid_device_ids() {
        let mut board = ready_board();

        assert_no_such_device(board.device_name(11));
        assert_no_such_device(board.device_size(12));
        assert_no_such_device(board.device_get(13, 1));
        assert_no_such_device(board.device_put(14, 1, 456));
    }

    #[test]
    fn id_equal_to_count_is_rejected() {
        let mut board = ready_board();
        let id = board.device_count() as u32;

        assert_no_such_device(board.device_name(id));
        assert_no_such_device(board.device_size(id));
        assert_no_such_device(board.device_get(id, 0));
        assert_no_such_device(board.device_put(id, 0, 1));
    }

    #[test]
    fn uninitialized_board_has_no_devices() {
        let mut board = Board::new(GOOD_VERSION);

        assert_eq!(board.device_count(), 0);
        assert_no_such_device(board.device_name(ROM_ID));
        assert_no_such_device(board.device_put(STORE_ID, 0, 1));
    }

    #[test]
    fn read_mem_errors() {
        let board = ready_board();
        let size = board.device_size(STORE_ID).unwrap() as u32;

        assert_no_such_device(board.device_get(6, size + 8));
        assert_eq!(
            board.device_get(STORE_ID, size + 8),
            Err(DeviceError::InvalidArgument)
        );
    }

    #[test]
    fn write_mem_errors() {
        let mut board = ready_board();
        let size = board.device_size(STORE_ID).unwrap() as u32;

        assert_no_such_device(board.device_put(6, size + 8, 0xCAFE));
        assert_eq!(
            board.device_put(STORE_ID, size + 8, 0xCAFE),
            Err(DeviceError::InvalidArgument)
        );
    }

    #[test]
    fn reinitialize_resets_store() {
        let mut board = ready_board();
        board.device_put(STORE_ID, 4, 99).unwrap();

        assert_eq!(board.initialize(), Ok(()));

        assert_eq!(board.device_count(), BOARD_DEVICES);
        assert_eq!(board.device_get(STORE_ID, 4), Ok(0));
    }

    #[test]
    fn typed_access_reports_written_cells() {
        let mut board = ready_board();
        board.device_put(STORE_ID, 2, 20).unwrap();
        board.device_put(STORE_ID, 9, 90).unwrap();

        let store = board.device(STORE_ID).unwrap().as_store().unwrap();
        assert_eq!(store.is_dirty(2), Ok(true));
        assert_eq!(store.is_dirty(3), Ok(false));

        let mut total = 0;
        store
            .iter_dirty(|_, value| {
                total += value;
                Ok(())
            })
            .unwrap();
        assert_eq!(total, 110);

        board
            .device_mut(STORE_ID)
            .unwrap()
            .as_store_mut()
            .unwrap()
            .clear_dirty();
        assert!(!board.device(STORE_ID).unwrap().as_store().unwrap().any_dirty());

        assert!(board.device(ROM_ID).unwrap().as_store().is_none());
    }

    #[test]
    fn oversized_store_label_fails_initialize() {
        let mut board = Board::with_config(BoardConfig {
            store_label: "A store label far too long for the name buffer",
            ..BoardConfig::new(GOOD_VERSION)
        });

        assert_eq!(board.initialize(), Err(DeviceError::InvalidArgument));
    }
}
