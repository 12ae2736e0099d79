/// Errors returned by board and device operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// Device id is not attached to the board.
    NoSuchDevice,
    /// Offset exceeds the device's cell count, or a bulk range is empty.
    InvalidArgument,
    /// Write attempted on a read-only device.
    PermissionDenied,
    /// Device-specific initialization precondition failed.
    Unavailable,
}

/// `EPERM`
pub const EPERM: i32 = 1;
/// `ENXIO`
pub const ENXIO: i32 = 6;
/// `ENODEV`
pub const ENODEV: i32 = 19;
/// `EINVAL`
pub const EINVAL: i32 = 22;

impl DeviceError {
    /// POSIX error number for this error.
    pub const fn errno(self) -> i32 {
        match self {
            DeviceError::NoSuchDevice => ENODEV,
            DeviceError::InvalidArgument => EINVAL,
            DeviceError::PermissionDenied => EPERM,
            DeviceError::Unavailable => ENXIO,
        }
    }

    /// Maps a POSIX error number back to a device error.
    ///
    /// Returns `None` for codes no device operation produces.
    pub const fn from_errno(code: i32) -> Option<Self> {
        match code {
            ENODEV => Some(DeviceError::NoSuchDevice),
            EINVAL => Some(DeviceError::InvalidArgument),
            EPERM => Some(DeviceError::PermissionDenied),
            ENXIO => Some(DeviceError::Unavailable),
            _ => None,
        }
    }
}

impl core::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceError::NoSuchDevice => write!(f, "no such device"),
            DeviceError::InvalidArgument => write!(f, "invalid argument"),
            DeviceError::PermissionDenied => write!(f, "operation not permitted"),
            DeviceError::Unavailable => write!(f, "device not configured"),
        }
    }
}

impl core::error::Error for DeviceError {}
