//! A `no_std`, no-alloc simulated circuit board with fake memory-mapped devices.
//!
//! A [`Board`](board::Board) owns a fixed set of devices and dispatches
//! bounds-checked reads and writes to them by id. Every device exposes the
//! same [`Device`](board::Device) interface over offset-addressed 8-byte
//! cells.
//!
//! # Devices
//!
//! | Id | Device      | Cells | Access                                   |
//! |----|-------------|-------|------------------------------------------|
//! | 0  | `RomConfig` | 5     | read-only, cell `i` holds `i`            |
//! | 1  | `Store`     | 10    | read/write, zeroed by `initialize`       |
//!
//! The store is built with a version; versions above 3 make board
//! initialization fail with [`DeviceError::Unavailable`](board::DeviceError).
//!
//! # Errors
//!
//! ```text
//! NoSuchDevice      id >= device count            ENODEV
//! InvalidArgument   offset >= device size         EINVAL
//! PermissionDenied  in-range write to the ROM     EPERM
//! Unavailable       store version out of range    ENXIO
//! ```
//!
//! # Example
//!
//! ```rust
//! use fake_board::prelude::*;
//!
//! let mut board = BoardBuilder::new().store_version(3).build();
//! board.initialize().unwrap();
//!
//! assert_eq!(board.device_get(ROM_ID, 3), Ok(3));
//! assert_eq!(board.device_put(ROM_ID, 1, 123), Err(DeviceError::PermissionDenied));
//!
//! board.device_put(STORE_ID, 7, 0x1234_5678).unwrap();
//! assert_eq!(board.device_get(STORE_ID, 7), Ok(0x1234_5678));
//! ```

#![deny(unsafe_code)]
#![no_std]

pub mod board;

pub mod prelude {
    pub use crate::board::prelude::*;
}
