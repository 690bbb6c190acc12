use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    InvalidArgument { reason: &'static str },
    /// The instance provider had no control block to hand out.
    NoInstance,
    Full { capacity: usize },
    Empty,
}

impl RingError {
    #[inline]
    pub fn code(&self) -> RingBufResultCode {
        match self {
            Self::InvalidArgument { .. } => RingBufResultCode::InvalArg,
            Self::NoInstance | Self::Full { .. } | Self::Empty => RingBufResultCode::NoData,
        }
    }
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "Invalid argument: {}", reason),
            Self::NoInstance => write!(f, "Instance provider returned no memory"),
            Self::Full { capacity } => {
                write!(f, "Ring buffer is full: all {} slots are in use", capacity)
            }
            Self::Empty => write!(f, "Ring buffer is empty"),
        }
    }
}

impl std::error::Error for RingError {}

/// Flat status codes for callers that branch on a number rather than on
/// [`RingError`]. `NoData` covers a full buffer on push, an empty buffer on
/// pop and an exhausted instance provider on create.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufResultCode {
    Ok = 0,
    InvalArg = 1,
    NoData = 2,
}

impl RingBufResultCode {
    #[inline]
    pub fn from_result<T>(result: &Result<T, RingError>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(e) => e.code(),
        }
    }
}
