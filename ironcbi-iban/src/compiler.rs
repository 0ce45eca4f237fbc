//! Compiles SWIFT IBAN structure strings into anchored regular expressions.

use crate::error::StructureError;
use regex::Regex;
use std::fmt::Write as _;

/// Compiles one structure string into an anchored whole-IBAN matcher.
///
/// Segments are scanned left to right: `n` becomes `\d`, `a` becomes `[A-Z]`,
/// `c` becomes `[\dA-Za-z]`, quantified `{L}` for fixed lengths and `{0,L}`
/// for maximum lengths, after the literal country prefix.
///
/// # Errors
/// Returns a [`StructureError`] for a missing country prefix, a malformed
/// segment, or an unknown segment type letter. The structure strings are
/// static configuration, so any error here means corrupted data, not bad
/// user input.
pub fn structure_to_regex(structure: &str) -> Result<Regex, StructureError> {
    let prefix = structure
        .get(..2)
        .filter(|p| p.bytes().all(|b| b.is_ascii_uppercase()))
        .ok_or_else(|| StructureError::MissingCountryPrefix {
            structure: structure.to_string(),
        })?;

    let mut pattern = String::with_capacity(structure.len() * 2);
    pattern.push('^');
    pattern.push_str(prefix);

    let rest = &structure[2..];
    let bytes = rest.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        let start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        let length: usize = rest[start..idx].parse().map_err(|_| {
            StructureError::MalformedSegment {
                structure: structure.to_string(),
                offset: 2 + start,
            }
        })?;
        let fixed = bytes.get(idx) == Some(&b'!');
        if fixed {
            idx += 1;
        }
        let class = match bytes.get(idx) {
            Some(b'n') => r"\d",
            Some(b'a') => "[A-Z]",
            Some(b'c') => r"[\dA-Za-z]",
            Some(&other) => {
                return Err(StructureError::UnknownSegmentType {
                    structure: structure.to_string(),
                    kind: char::from(other),
                });
            }
            None => {
                return Err(StructureError::MalformedSegment {
                    structure: structure.to_string(),
                    offset: 2 + start,
                });
            }
        };
        idx += 1;

        pattern.push_str(class);
        if fixed {
            let _ = write!(pattern, "{{{length}}}");
        } else {
            let _ = write!(pattern, "{{0,{length}}}");
        }
    }

    pattern.push('$');
    Ok(Regex::new(&pattern)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::IBAN_STRUCTURES;

    #[test]
    fn test_italian_structure_matches_real_iban() {
        let re = structure_to_regex("IT2!n1!a5!n5!n12!c").unwrap();
        assert!(re.is_match("IT86U0760111500000010117463"));
        assert!(!re.is_match("IT86U07601115000000101174")); // too short
        assert!(!re.is_match("IT8600760111500000010117463")); // letter slot holds a digit
        assert!(!re.is_match("XT86U0760111500000010117463")); // wrong country
    }

    #[test]
    fn test_fixed_lengths_are_exact() {
        let re = structure_to_regex("DE2!n8!n10!n").unwrap();
        assert!(re.is_match("DE89370400440532013000"));
        assert!(!re.is_match("DE8937040044053201300")); // one digit short
        assert!(!re.is_match("DE893704004405320130000")); // one digit long
    }

    #[test]
    fn test_maximum_length_segments_accept_shorter() {
        let re = structure_to_regex("XX2!n5c").unwrap();
        assert!(re.is_match("XX12abc"));
        assert!(re.is_match("XX12abcde"));
        assert!(re.is_match("XX12"));
        assert!(!re.is_match("XX12abcdef"));
    }

    #[test]
    fn test_unknown_segment_type_is_fatal() {
        let err = structure_to_regex("XX2!n4!x").unwrap_err();
        assert!(matches!(
            err,
            StructureError::UnknownSegmentType { kind: 'x', .. }
        ));
    }

    #[test]
    fn test_missing_country_prefix_is_fatal() {
        assert!(matches!(
            structure_to_regex("x").unwrap_err(),
            StructureError::MissingCountryPrefix { .. }
        ));
        assert!(matches!(
            structure_to_regex("it2!n").unwrap_err(),
            StructureError::MissingCountryPrefix { .. }
        ));
    }

    #[test]
    fn test_dangling_segment_is_malformed() {
        assert!(matches!(
            structure_to_regex("XX2!").unwrap_err(),
            StructureError::MalformedSegment { .. }
        ));
        assert!(matches!(
            structure_to_regex("XX2!nn").unwrap_err(),
            StructureError::MalformedSegment { .. }
        ));
    }

    #[test]
    fn test_every_bundled_structure_compiles() {
        for structure in IBAN_STRUCTURES {
            structure_to_regex(structure).unwrap_or_else(|e| {
                panic!("structure {structure} failed to compile: {e}");
            });
        }
    }
}
