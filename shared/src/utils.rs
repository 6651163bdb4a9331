//! # Display Helpers
//!
//! Address shortening for the navbar and appointment rows.
//!
//! ```rust
//! use hct_shared::utils::format_address;
//!
//! let address = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
//! assert_eq!(format_address(address, 6, 4), "0x7099...79c8");
//! ```

/// Show the first `prefix_len` and last `suffix_len` characters of an address.
///
/// Addresses too short to shorten are returned unchanged.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// `0x` plus four hex digits, then the last four.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
