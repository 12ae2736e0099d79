pub mod builder;
pub mod circuit;
pub mod device;
pub mod devices;
pub mod error;
pub mod helpers;
mod macros;
pub mod rom;
pub mod store;
pub mod table;

#[cfg(test)]
mod test_support;

pub use builder::{BoardBuilder, BoardConfig};
pub use circuit::{BOARD_DEVICES, Board, ROM_ID, STORE_ID};
pub use device::Device;
pub use devices::BoardDevice;
pub use error::DeviceError;
pub use rom::RomConfig;
pub use store::Store;
pub use table::CellTable;

pub mod prelude {
    pub use super::{
        Board, BoardBuilder, BoardConfig, BoardDevice, CellTable, Device, DeviceError, ROM_ID,
        RomConfig, STORE_ID, Store,
    };
}
