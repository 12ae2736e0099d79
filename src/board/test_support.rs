//! Test support utilities - only compiled in test builds.

use crate::board::{Board, DeviceError};

/// Store version accepted by `initialize`.
pub const GOOD_VERSION: i32 = 3;
/// Store version rejected by `initialize`.
pub const BAD_VERSION: i32 = 12;

/// Helper to create a board that initialized successfully
pub fn ready_board() -> Board {
    let mut board = Board::new(GOOD_VERSION);
    board.initialize().unwrap();
    board
}

/// Asserts that the result is a NoSuchDevice error.
pub fn assert_no_such_device<T: core::fmt::Debug>(result: Result<T, DeviceError>) {
    assert_eq!(result.unwrap_err(), DeviceError::NoSuchDevice);
}
