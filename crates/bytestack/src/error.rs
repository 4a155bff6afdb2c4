use core::fmt;

/// Reasons a [`ByteStack`](crate::ByteStack) operation can fail.
///
/// A failed operation never transfers part of the data and never changes
/// the stack state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StackError {
    /// The memory region handed to `init` is empty.
    NullRegion,
    /// `push` was given no bytes.
    NullData,
    /// `pop`/`peek` was given an empty target buffer.
    NullTarget,
    /// Capacity is zero or larger than the region, or a read is larger than
    /// its target buffer.
    InvalidSize,
    /// A mode code that is neither FIFO nor ring.
    InvalidMode,
    /// FIFO push larger than the free space, or any push larger than the
    /// whole capacity.
    InsufficientSpace,
    /// `pop`/`peek` of zero bytes or of more bytes than are stored.
    InsufficientData,
    /// Not produced by the stack itself. Seeing it means a logic error.
    Unknown,
}

impl StackError {
    /// Numeric code kept for callers that exchange errors as integers
    /// (e.g. over a serial link). All the null reference errors share `-2`.
    pub const fn code(self) -> i8 {
        match self {
            StackError::Unknown => -1,
            StackError::NullRegion | StackError::NullData | StackError::NullTarget => -2,
            StackError::InvalidSize => -3,
            StackError::InvalidMode => -4,
            StackError::InsufficientSpace => -5,
            StackError::InsufficientData => -6,
        }
    }
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            StackError::NullRegion => "no memory region to manage",
            StackError::NullData => "no data to push",
            StackError::NullTarget => "no target buffer to read into",
            StackError::InvalidSize => "size is zero or does not fit the buffer",
            StackError::InvalidMode => "unknown operation mode",
            StackError::InsufficientSpace => "not enough free space for the pushed bytes",
            StackError::InsufficientData => "not enough stored bytes for the requested read",
            StackError::Unknown => "unknown error",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for StackError {}
