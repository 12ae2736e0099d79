use crate::board::{macros::board_devices, rom::RomConfig, store::Store};

board_devices! {
    /// A device attached to a [`Board`](crate::board::Board).
    pub enum BoardDevice {
        RomConfig(RomConfig),
        Store(Store),
    }
}
