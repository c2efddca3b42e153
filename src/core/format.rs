//! Display formatting for operands and results

/// Formats a computed result back into operand form
///
/// Whole numbers render without a fractional part; everything else uses the
/// shortest round-trip representation, so a result can be fed back into the
/// state machine as the next left-hand operand.
#[must_use]
pub fn format_number(value: f64) -> String {
    // Negative zero renders as plain zero
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Formats an operand string for display
///
/// The integer part is grouped with thousands separators; a fractional part,
/// when present, is re-appended verbatim (unrounded, ungrouped). An empty or
/// unparseable integer part renders as the empty string, so a bare leading
/// `.` or an empty operand still displays sensibly.
#[must_use]
pub fn format_operand(operand: &str) -> String {
    match operand.split_once('.') {
        Some((int_part, frac)) => format!("{}.{}", group_integer(int_part), frac),
        None => group_integer(operand),
    }
}

/// Groups the integer part of an operand with thousands separators
///
/// The sign comes from the parsed value, so `-0.5` keeps its minus sign on
/// the zero integer part.
fn group_integer(int_part: &str) -> String {
    let Ok(value) = int_part.parse::<f64>() else {
        return String::new();
    };
    let grouped = group_digits(&format!("{:.0}", value.abs().trunc()));
    if value.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Inserts `,` separators every three digits
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-5.0), "-5");
    }

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_small_fraction() {
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_format_number_keeps_float_noise() {
        // 0.1 + 0.2 is displayed exactly as computed, not rounded
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    // ===== format_operand tests =====

    #[test]
    fn test_format_operand_plain() {
        assert_eq!(format_operand("7"), "7");
    }

    #[test]
    fn test_format_operand_groups_thousands() {
        assert_eq!(format_operand("1234"), "1,234");
        assert_eq!(format_operand("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_operand_fraction_verbatim() {
        assert_eq!(format_operand("1234.5600"), "1,234.5600");
    }

    #[test]
    fn test_format_operand_trailing_point() {
        assert_eq!(format_operand("12."), "12.");
    }

    #[test]
    fn test_format_operand_leading_point() {
        assert_eq!(format_operand(".5"), ".5");
    }

    #[test]
    fn test_format_operand_bare_point() {
        assert_eq!(format_operand("."), ".");
    }

    #[test]
    fn test_format_operand_empty() {
        assert_eq!(format_operand(""), "");
    }

    #[test]
    fn test_format_operand_negative() {
        assert_eq!(format_operand("-1234"), "-1,234");
        assert_eq!(format_operand("-2.5"), "-2.5");
    }

    #[test]
    fn test_format_operand_zero_fraction() {
        assert_eq!(format_operand("0.5"), "0.5");
    }

    #[test]
    fn test_format_operand_negative_zero_integer_part() {
        assert_eq!(format_operand("-0.5"), "-0.5");
    }

    // ===== group_digits tests =====

    #[test]
    fn test_group_digits_boundaries() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1000000"), "1,000,000");
    }
}
