//! Stable error codes embedded in user-facing error messages.
//!
//! Every operational error message starts with a bracketed code like
//! `[PARDIFF_CSV_001]` so scripts and bug reports can identify a failure
//! class without parsing prose. Codes are never reused or renumbered.

pub const CSV_IO: &str = "PARDIFF_CSV_001";
pub const CSV_MALFORMED: &str = "PARDIFF_CSV_002";
pub const CSV_EMPTY_INPUT: &str = "PARDIFF_CSV_003";

pub const EXTRACT_INVALID_NUMBER: &str = "PARDIFF_EXTRACT_001";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_codes_are_unique() {
        let codes = [CSV_IO, CSV_MALFORMED, CSV_EMPTY_INPUT, EXTRACT_INVALID_NUMBER];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b, "error codes must be unique");
            }
        }
    }

    #[test]
    fn codes_share_the_crate_prefix() {
        let codes = [CSV_IO, CSV_MALFORMED, CSV_EMPTY_INPUT, EXTRACT_INVALID_NUMBER];
        for code in codes {
            assert!(code.starts_with("PARDIFF_"), "unexpected prefix: {code}");
        }
    }
}
