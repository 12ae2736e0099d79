//! Index validation shared by devices and the board.
//!
//! Device offsets and board ids arrive as `u32` from callers and are checked
//! against a fixed count before they ever index into storage.

use crate::board::DeviceError;

/// Validates a cell offset against a table of `N` cells.
///
/// Returns the offset as a `usize` index, or [`DeviceError::InvalidArgument`]
/// if `offset >= N`.
///
/// # Example
/// ```
/// use fake_board::board::helpers::cell_index;
///
/// assert_eq!(cell_index::<5>(4), Ok(4));
/// assert!(cell_index::<5>(5).is_err());
/// ```
pub fn cell_index<const N: usize>(offset: u32) -> Result<usize, DeviceError> {
    checked_index(offset, N).ok_or(DeviceError::InvalidArgument)
}

/// Calculates the cell range covered by `len` cells starting at `offset`.
///
/// Returns `(start, end)` where end is exclusive.
///
/// # Errors
/// * [`DeviceError::InvalidArgument`] - if `len` is 0 or the range exceeds `N`
pub fn cell_span<const N: usize>(offset: u32, len: usize) -> Result<(usize, usize), DeviceError> {
    if len == 0 {
        return Err(DeviceError::InvalidArgument);
    }

    // Compared in u64 so a narrow usize cannot truncate the offset.
    let end = u64::from(offset)
        .checked_add(len as u64)
        .ok_or(DeviceError::InvalidArgument)?;

    if end > N as u64 {
        return Err(DeviceError::InvalidArgument);
    }

    // end <= N, so both bounds fit in usize.
    Ok((offset as usize, end as usize))
}

/// Validates a device id against the number of attached devices.
///
/// Returns [`DeviceError::NoSuchDevice`] if `id >= count`.
pub fn device_index(id: u32, count: usize) -> Result<usize, DeviceError> {
    checked_index(id, count).ok_or(DeviceError::NoSuchDevice)
}

/// Returns `value` as an index if it is below `bound`.
///
/// The comparison happens in `u64`, which holds every `u32` and `usize`, so
/// the value is never truncated on targets where `usize` is narrower than
/// `u32`.
fn checked_index(value: u32, bound: usize) -> Option<usize> {
    if u64::from(value) >= bound as u64 {
        return None;
    }
    // value < bound, so it fits in usize.
    Some(value as usize)
}

#[test]
fn cell_index_edge_cases() {
    assert_eq!(cell_index::<5>(0), Ok(0));

    // Last cell
    assert_eq!(cell_index::<5>(4), Ok(4));

    // One past the end
    assert_eq!(cell_index::<5>(5), Err(DeviceError::InvalidArgument));

    assert_eq!(cell_index::<5>(u32::MAX), Err(DeviceError::InvalidArgument));
}

#[test]
fn cell_span_edge_cases() {
    // Zero length
    assert_eq!(cell_span::<10>(0, 0), Err(DeviceError::InvalidArgument));

    // Whole table
    assert_eq!(cell_span::<10>(0, 10), Ok((0, 10)));

    // Last cell only
    assert_eq!(cell_span::<10>(9, 1), Ok((9, 10)));

    // Runs past the end
    assert_eq!(cell_span::<10>(9, 2), Err(DeviceError::InvalidArgument));

    // Overflowing length
    assert_eq!(
        cell_span::<10>(u32::MAX, usize::MAX),
        Err(DeviceError::InvalidArgument)
    );
}

#[test]
fn device_index_rejects_id_equal_to_count() {
    assert_eq!(device_index(0, 2), Ok(0));
    assert_eq!(device_index(1, 2), Ok(1));
    assert_eq!(device_index(2, 2), Err(DeviceError::NoSuchDevice));
    assert_eq!(device_index(0, 0), Err(DeviceError::NoSuchDevice));
}

#[test]
fn checked_index_compares_before_narrowing() {
    // 65536 truncates to 0 in a 16-bit usize; it must still be rejected.
    assert_eq!(checked_index(65_536, 2), None);
    assert_eq!(checked_index(65_536 + 3, 5), None);
    assert_eq!(checked_index(u32::MAX, usize::from(u16::MAX)), None);

    assert_eq!(checked_index(1, 2), Some(1));
    assert_eq!(checked_index(0, 0), None);
}

#[test]
fn wide_ids_and_offsets_are_rejected() {
    assert_eq!(device_index(65_536, 2), Err(DeviceError::NoSuchDevice));
    assert_eq!(device_index(u32::MAX, 2), Err(DeviceError::NoSuchDevice));
    assert_eq!(cell_index::<5>(65_536 + 3), Err(DeviceError::InvalidArgument));
    assert_eq!(cell_span::<10>(65_536, 1), Err(DeviceError::InvalidArgument));
}
