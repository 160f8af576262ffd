//! Order number generation.

use chrono::{DateTime, Utc};
use rand::RngExt;

/// Uppercase alphanumerics used for the random suffix.
const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates human-readable order numbers like `AYN-20260214-X7K2P9`.
#[derive(Debug, Clone)]
pub struct OrderNumberGenerator;

impl OrderNumberGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates an order number stamped with the given date.
    pub fn generate(&self, now: DateTime<Utc>) -> String {
        let mut rng = rand::rng();
        let suffix: String = (0..6)
            .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect();
        format!("AYN-{}-{}", now.format("%Y%m%d"), suffix)
    }
}

impl Default for OrderNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::OrderNumberGenerator;

    #[test]
    fn number_has_prefix_date_and_six_char_suffix() {
        let date = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        let number = OrderNumberGenerator::new().generate(date);

        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "AYN");
        assert_eq!(parts[1], "20260214");
        assert_eq!(parts[2].len(), 6);
        assert!(
            parts[2]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }
}
