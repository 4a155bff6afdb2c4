use crate::StackError;

/// How a [`ByteStack`](crate::ByteStack) behaves when a push does not fit
/// in the free space.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Reject the push. Nothing already stored is ever lost.
    Fifo = 1,
    /// Overwrite the oldest unread bytes to make room.
    Ring = 2,
}

impl Mode {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Mode {
    type Error = StackError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Mode::Fifo),
            2 => Ok(Mode::Ring),
            _ => Err(StackError::InvalidMode),
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Mode::Fifo => f.write_str("FIFO queue"),
            Mode::Ring => f.write_str("ring buffer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Mode;
    use crate::StackError;

    #[test]
    fn test_code_round_trip() {
        for mode in [Mode::Fifo, Mode::Ring] {
            assert_eq!(Mode::try_from(mode.code()), Ok(mode));
        }
    }

    #[test]
    fn test_invalid_codes() {
        assert_eq!(Mode::try_from(0), Err(StackError::InvalidMode));
        assert_eq!(Mode::try_from(3), Err(StackError::InvalidMode));
        assert_eq!(Mode::try_from(u8::MAX), Err(StackError::InvalidMode));
    }
}
