use core::fmt;

use heapless::Vec;

/// Max number of bytes pushed or popped by a single command.
pub const IO_DATA_MAX: usize = 16;

/// Max number of hex characters accepted for a single push.
pub const MAX_HEX_CHARS: usize = IO_DATA_MAX * 2;

pub type Bytes = Vec<u8, IO_DATA_MAX>;

#[derive(Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooLong { chars: usize },
    InvalidChar(char),
    InvalidCount,
    CountTooBig { count: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "no data entered, please try again"),
            InputError::TooLong { chars } => write!(
                f,
                "too many input data ({} chars), please input a maximum of {} chars",
                chars, MAX_HEX_CHARS
            ),
            InputError::InvalidChar(c) => write!(f, "wrong character {} detected, please try again", c),
            InputError::InvalidCount => write!(f, "please enter a number of bytes greater than zero"),
            InputError::CountTooBig { count } => write!(
                f,
                "{} bytes requested, a maximum of {} bytes can be popped in one go",
                count, IO_DATA_MAX
            ),
        }
    }
}

/// Parses hex text into bytes, two characters per byte. An odd trailing
/// character becomes a byte of its own (`"ABC"` is `[0xAB, 0x0C]`).
pub fn parse_hex(input: &str) -> Result<Bytes, InputError> {
    let input = input.trim();
    let chars = input.chars().count();
    if chars == 0 {
        return Err(InputError::Empty);
    }
    if chars > MAX_HEX_CHARS {
        return Err(InputError::TooLong { chars });
    }

    let mut nibbles = [0u8; MAX_HEX_CHARS];
    for (slot, c) in nibbles.iter_mut().zip(input.chars()) {
        *slot = c
            .to_digit(16)
            .ok_or(InputError::InvalidChar(c.to_ascii_uppercase()))? as u8;
    }

    let mut bytes = Bytes::new();
    for pair in nibbles[..chars].chunks(2) {
        let byte = pair.iter().fold(0u8, |acc, n| (acc << 4) | n);
        bytes.push(byte).map_err(|_| InputError::TooLong { chars })?;
    }

    Ok(bytes)
}

/// Parses the decimal number of bytes to pop.
pub fn parse_count(input: &str) -> Result<usize, InputError> {
    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(InputError::InvalidCount),
        Ok(count) if count > IO_DATA_MAX => Err(InputError::CountTooBig { count }),
        Ok(count) => Ok(count),
    }
}

/// Renders bytes as `AB|0C|`.
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}|", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_pairs() {
        assert_eq!(parse_hex("DEADBEEF").unwrap().as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_parse_hex_lowercase_and_whitespace() {
        assert_eq!(parse_hex("  0a1b\n").unwrap().as_slice(), &[0x0A, 0x1B]);
    }

    #[test]
    fn test_parse_hex_odd_trailing_char() {
        assert_eq!(parse_hex("ABC").unwrap().as_slice(), &[0xAB, 0x0C]);
        assert_eq!(parse_hex("f").unwrap().as_slice(), &[0x0F]);
    }

    #[test]
    fn test_parse_hex_max_length() {
        let input = "01".repeat(IO_DATA_MAX);
        let bytes = parse_hex(&input).unwrap();
        assert_eq!(bytes.len(), IO_DATA_MAX);
        assert!(bytes.iter().all(|&b| b == 1));
    }

    #[test]
    fn test_parse_hex_too_long() {
        let input = "0".repeat(MAX_HEX_CHARS + 1);
        assert_eq!(parse_hex(&input).unwrap_err(), InputError::TooLong { chars: MAX_HEX_CHARS + 1 });
    }

    #[test]
    fn test_parse_hex_invalid_char() {
        assert_eq!(parse_hex("12g4").unwrap_err(), InputError::InvalidChar('G'));
        assert_eq!(parse_hex("12 34").unwrap_err(), InputError::InvalidChar(' '));
    }

    #[test]
    fn test_parse_hex_empty() {
        assert_eq!(parse_hex("").unwrap_err(), InputError::Empty);
        assert_eq!(parse_hex("   ").unwrap_err(), InputError::Empty);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("4"), Ok(4));
        assert_eq!(parse_count(" 16 "), Ok(IO_DATA_MAX));
        assert_eq!(parse_count("0"), Err(InputError::InvalidCount));
        assert_eq!(parse_count("-1"), Err(InputError::InvalidCount));
        assert_eq!(parse_count("four"), Err(InputError::InvalidCount));
        assert_eq!(parse_count("17"), Err(InputError::CountTooBig { count: 17 }));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0x01, 0xAB, 0xFF]), "01|AB|FF|");
        assert_eq!(format_bytes(&[]), "");
    }
}
