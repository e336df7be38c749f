//! Plate number normalization and validation.
//!
//! Every plate that enters the system -- from the recognition pipeline or
//! from the registry UI -- is stored in one canonical form: trimmed,
//! uppercase. Lookups compare normalized values only.

use crate::error::CoreError;

/// Normalize a raw plate string to its canonical stored form.
///
/// Trims surrounding whitespace and uppercases the remainder. Does not
/// validate; use [`validate_plate`] for that.
pub fn normalize_plate(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validate and normalize a plate supplied by a caller.
///
/// Returns the canonical form, or `CoreError::Validation` when the plate is
/// missing or empty after trimming. The error message is part of the
/// ingestion wire contract.
pub fn validate_plate(raw: Option<&str>) -> Result<String, CoreError> {
    let normalized = raw.map(normalize_plate).unwrap_or_default();
    if normalized.is_empty() {
        return Err(CoreError::Validation("plate_number is required".into()));
    }
    Ok(normalized)
}

/// Validate an optional confidence score reported by the recognition
/// pipeline. Scores are fractions in `[0, 1]`.
pub fn validate_confidence(score: Option<f64>) -> Result<Option<f64>, CoreError> {
    match score {
        Some(s) if !(0.0..=1.0).contains(&s) => Err(CoreError::Validation(
            "confidence_score must be between 0 and 1".into(),
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn normalize_uppercases_and_trims() {
        assert_eq!(normalize_plate("  mh12ab1234  "), "MH12AB1234");
        assert_eq!(normalize_plate("abc123"), "ABC123");
        assert_eq!(normalize_plate("ABC123"), "ABC123");
    }

    #[test]
    fn validate_accepts_mixed_case() {
        assert_eq!(validate_plate(Some("ka01x9999")).unwrap(), "KA01X9999");
    }

    #[test]
    fn validate_rejects_missing_plate() {
        assert_matches!(validate_plate(None), Err(CoreError::Validation(msg)) => {
            assert_eq!(msg, "plate_number is required");
        });
    }

    #[test]
    fn validate_rejects_empty_and_whitespace_plates() {
        assert_matches!(validate_plate(Some("")), Err(CoreError::Validation(_)));
        assert_matches!(validate_plate(Some("   ")), Err(CoreError::Validation(_)));
    }

    #[test]
    fn confidence_bounds_are_inclusive() {
        assert_eq!(validate_confidence(Some(0.0)).unwrap(), Some(0.0));
        assert_eq!(validate_confidence(Some(1.0)).unwrap(), Some(1.0));
        assert_eq!(validate_confidence(None).unwrap(), None);
    }

    #[test]
    fn confidence_out_of_range_is_rejected() {
        assert_matches!(validate_confidence(Some(1.5)), Err(CoreError::Validation(_)));
        assert_matches!(
            validate_confidence(Some(-0.1)),
            Err(CoreError::Validation(_))
        );
    }
}
