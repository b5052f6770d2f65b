//! Hex color repair.
//!
//! The upstream sheet stores colors as bare hex digits and at least one row
//! lost its leading zeros along the way (`4C12` instead of `004C12`).

/// Left-pad a 4 or 5 digit hex value with `0` up to 6 digits.
///
/// Any other length is returned unchanged. The digits themselves are not
/// checked.
pub fn normalize_hex(input: &str) -> String {
    match input.len() {
        4 | 5 => format!("{:0>6}", input),
        _ => input.to_string(),
    }
}

/// Normalized color with the leading `#` used in every artifact.
pub fn css_hex(input: &str) -> String {
    format!("#{}", normalize_hex(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_short_values() {
        assert_eq!(normalize_hex("4C12"), "004C12");
        assert_eq!(normalize_hex("FABCD"), "0FABCD");
    }

    #[test]
    fn test_full_length_passes_through() {
        assert_eq!(normalize_hex("1E9DBF"), "1E9DBF");
    }

    #[test]
    fn test_output_is_six_digits_for_valid_lengths() {
        for input in ["ABCD", "ABCDE", "ABCDEF"] {
            assert_eq!(normalize_hex(input).len(), 6, "input {}", input);
        }
    }

    #[test]
    fn test_out_of_range_lengths_are_untouched() {
        // Only 4-6 digit values come from the sheet
        assert_eq!(normalize_hex("ABC"), "ABC");
        assert_eq!(normalize_hex(""), "");
    }

    #[test]
    fn test_css_hex_prefix() {
        assert_eq!(css_hex("4C12"), "#004C12");
    }
}
