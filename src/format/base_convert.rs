//! Base conversion for the `(hex)` and `(bin)` commands

use crate::error::{ConversionError, Radix};

/// Read `word` as a signed 64-bit integer in `radix` and format it in base 10
///
/// A leading `+` or `-` is accepted; `0x` / `0b` prefixes are not.
pub fn convert_base(word: &str, radix: Radix) -> Result<String, ConversionError> {
    i64::from_str_radix(word, radix.value())
        .map(|value| value.to_string())
        .map_err(|_| ConversionError {
            radix,
            word: word.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_hex() {
        assert_eq!(convert_base("ff", Radix::Hex).unwrap(), "255");
        assert_eq!(convert_base("1E", Radix::Hex).unwrap(), "30");
        assert_eq!(convert_base("-a", Radix::Hex).unwrap(), "-10");
    }

    #[test]
    fn test_convert_bin() {
        assert_eq!(convert_base("101", Radix::Bin).unwrap(), "5");
        assert_eq!(convert_base("0", Radix::Bin).unwrap(), "0");
        assert_eq!(convert_base("+10", Radix::Bin).unwrap(), "2");
    }

    #[test]
    fn test_convert_limits() {
        assert_eq!(
            convert_base("7fffffffffffffff", Radix::Hex).unwrap(),
            i64::MAX.to_string()
        );
        assert!(convert_base("8000000000000000", Radix::Hex).is_err());
    }

    #[test]
    fn test_convert_invalid() {
        let err = convert_base("zz", Radix::Hex).unwrap_err();
        assert_eq!(err.word, "zz");
        assert_eq!(err.radix, Radix::Hex);

        assert!(convert_base("102", Radix::Bin).is_err());
        assert!(convert_base("0xff", Radix::Hex).is_err());
        assert!(convert_base("ff,", Radix::Hex).is_err());
        assert!(convert_base("", Radix::Bin).is_err());
    }
}
