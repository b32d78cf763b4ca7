// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Validation for Kubernetes resource quantity strings.

use crate::error::{QuartermasterError, Result};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

/// Parse a quantity string: an optional sign, a decimal number, and an
/// optional binary-SI suffix (`Ki`..`Ei`), decimal-SI suffix (`n`, `u`, `m`,
/// `k`, `M`, `G`, `T`, `P`, `E`) or decimal exponent (`e3`, `E-2`).
///
/// The string is validated against the grammar only; the API server remains
/// the authority on semantic range.
pub fn parse(value: &str) -> Result<Quantity> {
    if is_valid(value) {
        Ok(Quantity(value.to_string()))
    } else {
        Err(QuartermasterError::InvalidQuantity(value.to_string()))
    }
}

fn is_valid(value: &str) -> bool {
    let mut chars = value.chars().peekable();

    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    // Decimal number: digits with at most one dot, at least one digit
    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits += 1;
            chars.next();
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            chars.next();
        } else {
            break;
        }
    }
    if digits == 0 {
        return false;
    }

    let suffix: String = chars.collect();
    match suffix.as_str() {
        "" => true,
        "Ki" | "Mi" | "Gi" | "Ti" | "Pi" | "Ei" => true,
        "n" | "u" | "m" | "k" | "M" | "G" | "T" | "P" | "E" => true,
        other => is_decimal_exponent(other),
    }
}

/// `e` or `E` followed by an optionally signed integer
fn is_decimal_exponent(suffix: &str) -> bool {
    let mut chars = suffix.chars().peekable();

    if !matches!(chars.next(), Some('e') | Some('E')) {
        return false;
    }
    if matches!(chars.peek(), Some('+') | Some('-')) {
        chars.next();
    }

    let mut digits = 0;
    for c in chars {
        if !c.is_ascii_digit() {
            return false;
        }
        digits += 1;
    }
    digits > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        for value in ["1", "10", "0", "+4", "-5"] {
            assert!(is_valid(value), "{} should parse", value);
        }
    }

    #[test]
    fn test_fractions() {
        for value in ["0.5", ".5", "5.", "1.25"] {
            assert!(is_valid(value), "{} should parse", value);
        }
    }

    #[test]
    fn test_binary_si_suffixes() {
        for value in ["128Ki", "500Mi", "1Gi", "2Ti", "3Pi", "4Ei"] {
            assert!(is_valid(value), "{} should parse", value);
        }
    }

    #[test]
    fn test_decimal_si_suffixes() {
        for value in ["100n", "250u", "100m", "4k", "2M", "1G", "1T", "1P", "2E"] {
            assert!(is_valid(value), "{} should parse", value);
        }
    }

    #[test]
    fn test_decimal_exponents() {
        for value in ["1e3", "1E3", "12e-3", "2E+2"] {
            assert!(is_valid(value), "{} should parse", value);
        }
    }

    #[test]
    fn test_invalid_quantities() {
        for value in [
            "", ".", "abc", "1.2.3", "1e", "Ki", "10KB", "1 Gi", "--1", "10Mi3", "e3",
        ] {
            assert!(!is_valid(value), "{} should be rejected", value);
        }
    }

    #[test]
    fn test_parse_returns_quantity() {
        assert_eq!(parse("500Mi").unwrap(), Quantity("500Mi".to_string()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("lots").unwrap_err();
        assert!(matches!(err, QuartermasterError::InvalidQuantity(v) if v == "lots"));
    }
}
