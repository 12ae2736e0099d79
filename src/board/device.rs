use crate::board::DeviceError;

/// Uniform interface every board device exposes.
///
/// A device owns a fixed number of offset-addressed 8-byte cells. Construction
/// never touches the backing storage beyond what the device needs to exist;
/// precondition checks are deferred to [`Device::initialize`].
pub trait Device {
    /// Performs one-time setup.
    fn initialize(&mut self) -> Result<(), DeviceError>;

    /// Display label, fixed at construction.
    fn name(&self) -> &str;

    /// Number of addressable cells.
    fn size(&self) -> usize;

    /// Reads the cell at `offset`.
    ///
    /// Returns `InvalidArgument` if `offset >= size()`.
    fn read(&self, offset: u32) -> Result<u64, DeviceError>;

    /// Writes `value` to the cell at `offset`.
    fn write(&mut self, offset: u32, value: u64) -> Result<(), DeviceError>;
}
