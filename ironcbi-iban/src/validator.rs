//! IBAN validation: structure match plus check-digit verification.

use crate::compiler::structure_to_regex;
use crate::error::{InvalidIbanError, StructureError};
use crate::structures::IBAN_STRUCTURES;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_VALIDATOR: LazyLock<IbanValidator> = LazyLock::new(IbanValidator::new);

/// Validates an IBAN against the bundled SWIFT registry table.
///
/// Convenience wrapper over a lazily-built shared [`IbanValidator`].
///
/// # Errors
/// Returns [`InvalidIbanError`] describing the first failed check.
pub fn validate_iban(iban: &str) -> Result<(), InvalidIbanError> {
    DEFAULT_VALIDATOR.validate(iban)
}

/// Country-keyed table of compiled IBAN structure matchers.
///
/// Built once (at startup or first use) and read-only afterward; safe to
/// share across threads.
#[derive(Debug)]
pub struct IbanValidator {
    patterns: HashMap<String, Regex>,
}

impl IbanValidator {
    /// Builds a validator from the bundled SWIFT registry table.
    ///
    /// The bundled table is static data pinned by unit tests, so compilation
    /// cannot fail against a healthy build.
    #[must_use]
    pub fn new() -> Self {
        Self::with_structures(IBAN_STRUCTURES.iter().copied())
            .expect("bundled IBAN structure table is valid")
    }

    /// Builds a validator from caller-supplied structure strings.
    ///
    /// # Errors
    /// Returns a [`StructureError`] if any structure string is malformed.
    pub fn with_structures<'a>(
        structures: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, StructureError> {
        let mut patterns = HashMap::new();
        for structure in structures {
            let regex = structure_to_regex(structure)?;
            patterns.insert(structure[..2].to_string(), regex);
        }
        debug!(countries = patterns.len(), "compiled IBAN structure table");
        Ok(Self { patterns })
    }

    /// Returns true if a structure is known for the given country code.
    #[must_use]
    pub fn supports(&self, country: &str) -> bool {
        self.patterns.contains_key(country)
    }

    /// Validates structure and check digits, stopping at the first failure.
    ///
    /// Checks run in order: country known, structural match, MOD 97-10
    /// check digits.
    ///
    /// # Errors
    /// Returns the [`InvalidIbanError`] for the first failed check.
    pub fn validate(&self, iban: &str) -> Result<(), InvalidIbanError> {
        let country = iban.get(..2).unwrap_or_default();
        let Some(pattern) = self.patterns.get(country) else {
            return Err(InvalidIbanError::UnknownCountry {
                country: iban.chars().take(2).collect(),
            });
        };
        if !pattern.is_match(iban) {
            return Err(InvalidIbanError::StructureMismatch {
                country: country.to_string(),
            });
        }
        if !check_digits_valid(iban) {
            return Err(InvalidIbanError::ChecksumMismatch);
        }
        Ok(())
    }
}

impl Default for IbanValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// ISO 7064 MOD 97-10 check.
///
/// The four check-position characters rotate to the end, every character maps
/// to its base-36 value, and the resulting decimal numeral must be congruent
/// to 1 modulo 97. The numeral is folded with a streaming accumulator (one
/// multiply per digit, two per letter) instead of building a bignum.
fn check_digits_valid(iban: &str) -> bool {
    // The structural match has already pinned the input to ASCII
    // alphanumerics of at least country + check-digit length.
    let rotated = iban.bytes().skip(4).chain(iban.bytes().take(4));
    let mut acc: u32 = 0;
    for byte in rotated {
        match char::from(byte).to_digit(36) {
            Some(v) if v < 10 => acc = (acc * 10 + v) % 97,
            Some(v) => acc = (acc * 100 + v) % 97,
            None => return false,
        }
    }
    acc == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ibans_across_countries() {
        let validator = IbanValidator::new();
        for iban in [
            "IT86U0760111500000010117463",
            "DE89370400440532013000",
            "GB82WEST12345698765432",
            "FR1420041010050500013M02606",
            "NL91ABNA0417164300",
            "ES9121000418450200051332",
            "BE68539007547034",
        ] {
            assert!(validator.validate(iban).is_ok(), "rejected {iban}");
        }
    }

    #[test]
    fn test_tampered_check_digits_fail_checksum() {
        let validator = IbanValidator::new();
        assert_eq!(
            validator.validate("IT00U0760111500000010117463"),
            Err(InvalidIbanError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_unknown_country() {
        let validator = IbanValidator::new();
        assert_eq!(
            validator.validate("ZZ86U0760111500000010117463"),
            Err(InvalidIbanError::UnknownCountry {
                country: "ZZ".to_string()
            })
        );
        assert!(matches!(
            validator.validate(""),
            Err(InvalidIbanError::UnknownCountry { .. })
        ));
    }

    #[test]
    fn test_truncated_iban_fails_structure() {
        let validator = IbanValidator::new();
        let full = "IT86U0760111500000010117463";
        assert_eq!(
            validator.validate(&full[..full.len() / 2]),
            Err(InvalidIbanError::StructureMismatch {
                country: "IT".to_string()
            })
        );
    }

    #[test]
    fn test_checksum_rotation_is_pinned() {
        let validator = IbanValidator::new();
        // Both candidates are structurally valid for Italy and would pass a
        // checksum computed without rotation (IT20...) or with a two-character
        // rotation (IT25...). Only the four-character rotation rejects both.
        assert_eq!(
            validator.validate("IT20U0760111500000010117463"),
            Err(InvalidIbanError::ChecksumMismatch)
        );
        assert_eq!(
            validator.validate("IT25U0760111500000010117463"),
            Err(InvalidIbanError::ChecksumMismatch)
        );
    }

    #[test]
    fn test_validation_order_stops_at_first_failure() {
        let validator = IbanValidator::new();
        // Unknown country wins over everything else.
        assert!(matches!(
            validator.validate("ZZ"),
            Err(InvalidIbanError::UnknownCountry { .. })
        ));
        // A known country with a broken structure never reaches the checksum.
        assert!(matches!(
            validator.validate("IT86!0760111500000010117463"),
            Err(InvalidIbanError::StructureMismatch { .. })
        ));
    }

    #[test]
    fn test_caller_supplied_table() {
        let validator = IbanValidator::with_structures(["IT2!n1!a5!n5!n12!c"]).unwrap();
        assert!(validator.supports("IT"));
        assert!(!validator.supports("DE"));
        assert!(validator.validate("IT86U0760111500000010117463").is_ok());
        assert!(matches!(
            validator.validate("DE89370400440532013000"),
            Err(InvalidIbanError::UnknownCountry { .. })
        ));
    }

    #[test]
    fn test_validate_iban_convenience() {
        assert!(validate_iban("IT86U0760111500000010117463").is_ok());
        assert_eq!(
            validate_iban("IT86U0760111500000010117464"),
            Err(InvalidIbanError::ChecksumMismatch)
        );
    }
}
