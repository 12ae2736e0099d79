//! Board example: the device scenarios end to end
//!
//! This example demonstrates:
//! - Building and initializing a board
//! - Rejected initialization for an out-of-range store version
//! - Reading the ROM and zeroed store, writing the store
//! - Error kinds and their POSIX codes

use fake_board::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

const GOOD_VERSION: i32 = 3;
const BAD_VERSION: i32 = 12;

struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging() {
    static LOGGER: StdoutLogger = StdoutLogger;
    // A second call (e.g. from the test below) keeps the first logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

fn report(label: &str, device: &str, op: &str, err: DeviceError) {
    println!("{label} {device} {op} failed: {err} (errno {})", err.errno());
}

pub fn main() {
    init_logging();

    good_init();
    bad_init();
    happy_paths();
    put_readonly();
    mem_errors();
}

fn good_init() {
    let mut board = Board::new(GOOD_VERSION);
    assert_eq!(board.initialize(), Ok(()));
    println!("good_init PASSED\n");
}

fn bad_init() {
    let mut board = BoardBuilder::new().store_version(BAD_VERSION).build();
    let err = board.initialize().unwrap_err();
    assert_eq!(err, DeviceError::Unavailable);
    println!("bad_init initialization failed: {err}");
    println!("bad_init PASSED\n");
}

fn happy_paths() {
    let mut board = Board::new(GOOD_VERSION);
    board.initialize().unwrap();

    assert_eq!(board.device_get(ROM_ID, 3), Ok(3));

    let size = board.device_size(STORE_ID).unwrap();
    for offset in 0..size as u32 {
        assert_eq!(board.device_get(STORE_ID, offset), Ok(0));
    }

    let value = 0x1234_5678;
    board.device_put(STORE_ID, 7, value).unwrap();
    assert_eq!(board.device_get(STORE_ID, 7), Ok(value));

    if let Some(store) = board.device(STORE_ID).unwrap().as_store() {
        store
            .iter_dirty(|offset, value| {
                println!("happy_paths {} cell {offset} = {value:#x}", store.name());
                Ok(())
            })
            .unwrap();
    }

    println!("happy_paths PASSED\n");
}

fn put_readonly() {
    let mut board = Board::new(GOOD_VERSION);
    board.initialize().unwrap();
    let rom_name = String::from(board.device_name(ROM_ID).unwrap());
    let size = board.device_size(ROM_ID).unwrap() as u32;

    let mut board_errors = [None; 3];
    board_errors[0] = board.device_put(ROM_ID, 1, 123).err();
    board_errors[1] = board.device_put(ROM_ID, size + 1, 123).err();
    board_errors[2] = board.device_put(14, 1, 456).err();

    assert_eq!(
        board_errors,
        [
            Some(DeviceError::PermissionDenied),
            Some(DeviceError::InvalidArgument),
            Some(DeviceError::NoSuchDevice),
        ]
    );

    for err in board_errors.into_iter().flatten() {
        report("put_readonly", &rom_name, "put", err);
    }
    println!("put_readonly PASSED\n");
}

fn mem_errors() {
    let mut board = Board::new(GOOD_VERSION);
    board.initialize().unwrap();
    let size = board.device_size(STORE_ID).unwrap() as u32;
    let store_name = String::from(board.device_name(STORE_ID).unwrap());

    let err = board.device_get(6, size + 8).unwrap_err();
    assert_eq!(err, DeviceError::NoSuchDevice);
    report("mem_errors", &store_name, "get", err);

    let err = board.device_get(STORE_ID, size + 8).unwrap_err();
    assert_eq!(err, DeviceError::InvalidArgument);
    report("mem_errors", &store_name, "get", err);

    let err = board.device_put(STORE_ID, size + 8, 0xCAFE).unwrap_err();
    assert_eq!(err, DeviceError::InvalidArgument);
    report("mem_errors", &store_name, "put", err);

    println!("mem_errors PASSED\n");
}
