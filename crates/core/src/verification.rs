//! Verification status of a detected vehicle and the audit message format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a detected vehicle was classified by the recognition pipeline.
///
/// Stored as text in the `detections` table; defaults to `Unknown` when the
/// pipeline does not report a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerificationStatus {
    Resident,
    Visitor,
    #[default]
    Unknown,
}

impl VerificationStatus {
    /// The exact label stored in the database and rendered in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationStatus::Resident => "Resident",
            VerificationStatus::Visitor => "Visitor",
            VerificationStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the human-readable audit trail message for a detection.
///
/// The format is part of the audit contract consumed by the access-log
/// screen: `Vehicle {plate} detected - Status: {status}`.
pub fn access_status_message(plate: &str, status: VerificationStatus) -> String {
    format!("Vehicle {plate} detected - Status: {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_serde() {
        for status in [
            VerificationStatus::Resident,
            VerificationStatus::Visitor,
            VerificationStatus::Unknown,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
            let back: VerificationStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn unknown_is_the_default() {
        assert_eq!(VerificationStatus::default(), VerificationStatus::Unknown);
    }

    #[test]
    fn unrecognized_label_is_rejected() {
        let result: Result<VerificationStatus, _> = serde_json::from_str("\"Banned\"");
        assert!(result.is_err());
    }

    #[test]
    fn status_message_format() {
        assert_eq!(
            access_status_message("MH12AB1234", VerificationStatus::Resident),
            "Vehicle MH12AB1234 detected - Status: Resident"
        );
        assert_eq!(
            access_status_message("KA01X9999", VerificationStatus::Unknown),
            "Vehicle KA01X9999 detected - Status: Unknown"
        );
    }
}
