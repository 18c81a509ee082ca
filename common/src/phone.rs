//! Turns whatever the user typed into a phone cell into the digits-only,
//! international form the messaging application expects.

use crate::config::MessagingConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNormalizer {
    country_code: String,
    min_digits: usize,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::from_config(&MessagingConfig::default())
    }
}

impl PhoneNormalizer {
    pub fn new(country_code: impl Into<String>, min_digits: usize) -> Self {
        Self {
            country_code: country_code.into(),
            min_digits,
        }
    }

    pub fn from_config(config: &MessagingConfig) -> Self {
        Self::new(config.country_code.clone(), config.min_phone_digits)
    }

    /// Normalizes `raw`:
    /// - every non-digit is dropped (`+`, spaces, dashes, parentheses, ...);
    /// - a leading `0` (local prefix) becomes the country code;
    /// - fewer than `min_digits` digits is an error carrying the cleaned value.
    pub fn normalize(&self, raw: &str) -> Result<String> {
        if raw.is_empty() {
            return Err(Error::InvalidPhone {
                value: String::new(),
            });
        }

        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let phone = if let Some(rest) = digits.strip_prefix('0') {
            format!("{}{}", self.country_code, rest)
        } else {
            digits
        };

        if phone.len() < self.min_digits {
            return Err(Error::InvalidPhone { value: phone });
        }
        Ok(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_prefix_becomes_country_code() {
        let normalizer = PhoneNormalizer::default();
        assert_eq!(normalizer.normalize("0551234567").unwrap(), "213551234567");
    }

    #[test]
    fn separators_are_stripped() {
        let normalizer = PhoneNormalizer::default();
        assert_eq!(
            normalizer.normalize("+213 (551) 23-45-67").unwrap(),
            "213551234567"
        );
        assert_eq!(
            normalizer.normalize("055 123 45 67").unwrap(),
            "213551234567"
        );
    }

    #[test]
    fn only_the_first_zero_is_replaced() {
        let normalizer = PhoneNormalizer::default();
        assert_eq!(
            normalizer.normalize("0033612345678").unwrap(),
            "213033612345678"
        );
    }

    #[test]
    fn too_short_numbers_are_rejected_with_the_cleaned_value() {
        let normalizer = PhoneNormalizer::default();
        assert_eq!(
            normalizer.normalize("1-2-3"),
            Err(Error::InvalidPhone {
                value: "123".to_string()
            })
        );
    }

    #[test]
    fn empty_and_digitless_input_is_rejected() {
        let normalizer = PhoneNormalizer::default();
        assert!(matches!(
            normalizer.normalize(""),
            Err(Error::InvalidPhone { .. })
        ));
        assert_eq!(
            normalizer.normalize("n/a"),
            Err(Error::InvalidPhone {
                value: String::new()
            })
        );
    }

    #[test]
    fn minimum_length_counts_the_country_code() {
        let normalizer = PhoneNormalizer::new("213", 8);
        // "0" + 4 digits -> "2131234", 7 digits
        assert!(normalizer.normalize("01234").is_err());
        assert_eq!(normalizer.normalize("012345").unwrap(), "21312345");
    }

    #[test]
    fn other_regions_are_configurable() {
        let normalizer = PhoneNormalizer::new("44", 10);
        assert_eq!(normalizer.normalize("07700900123").unwrap(), "447700900123");
    }
}
