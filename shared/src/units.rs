//! # Token Amount Formatting
//!
//! Balances come back from the contract in base units (18 decimals for HCT).
//! [`format_units`] renders them the way wallets do: the integer part, a dot,
//! and the fractional digits with trailing zeros removed but at least one kept.

/// Decimals used by the Healthcare Token.
pub const ETHER_DECIMALS: u32 = 18;

/// Render `value` base units with `decimals` fractional digits.
///
/// ```rust
/// use hct_shared::units::format_units;
///
/// assert_eq!(format_units(1_500_000_000_000_000_000, 18), "1.5");
/// assert_eq!(format_units(0, 18), "0.0");
/// assert_eq!(format_units(12345, 2), "123.45");
/// ```
pub fn format_units(value: u128, decimals: u32) -> String {
    let digits = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return format!("{}.0", digits);
    }

    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{}.{}", integer, fraction)
}

/// [`format_units`] with 18 decimals.
pub fn format_ether(value: u128) -> String {
    format_units(value, ETHER_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ether() {
        assert_eq!(format_ether(0), "0.0");
        assert_eq!(format_ether(1_000_000_000_000_000_000), "1.0");
        assert_eq!(format_ether(100_000_000_000_000_000_000), "100.0");
        assert_eq!(format_ether(250_000_000_000_000_000), "0.25");
        assert_eq!(format_ether(1), "0.000000000000000001");
    }

    #[test]
    fn test_format_units_small_decimals() {
        assert_eq!(format_units(5, 0), "5.0");
        assert_eq!(format_units(5, 1), "0.5");
        assert_eq!(format_units(100, 2), "1.0");
    }

    #[test]
    fn test_format_units_max() {
        let rendered = format_ether(u128::MAX);
        assert!(rendered.starts_with("340282366920938463463."));
    }
}
