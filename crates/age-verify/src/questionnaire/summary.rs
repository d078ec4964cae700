use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{GuardianConsent, RejectionReason, VerificationResult};

const RULE: &str = "========================================";

/// Serializable snapshot of a result for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationView {
    pub verification_passed: bool,
    pub status_label: &'static str,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub claimed_age: i64,
    pub guardian_consent: GuardianConsent,
    pub consent_label: &'static str,
    pub purpose: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<RejectionReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<&'static str>,
}

impl VerificationResult {
    /// Fixed-layout text block describing the outcome and the captured answers.
    pub fn summary(&self) -> String {
        let purpose = if self.purpose().is_empty() {
            "n/a"
        } else {
            self.purpose()
        };

        let mut lines = vec![
            String::new(),
            RULE.to_string(),
            format!("Verification status: {}", self.decision().status_label()),
            "Captured information:".to_string(),
            format!("  - Name: {}", self.full_name()),
            format!("  - Date of birth: {}", self.date_of_birth().format("%Y-%m-%d")),
            format!("  - Claimed age: {}", self.claimed_age()),
            format!("  - Guardian consent: {}", self.guardian_consent().label()),
            format!("  - Purpose: {purpose}"),
        ];
        if let Some(reason) = self.failure_reason() {
            lines.push(format!("  - Failure reason: {reason}"));
        }
        lines.push(RULE.to_string());
        lines.join("\n")
    }

    pub fn to_view(&self) -> VerificationView {
        let decision = self.decision();
        VerificationView {
            verification_passed: decision.is_approved(),
            status_label: decision.status_label(),
            full_name: self.full_name().to_string(),
            date_of_birth: self.date_of_birth(),
            claimed_age: self.claimed_age(),
            guardian_consent: self.guardian_consent(),
            consent_label: self.guardian_consent().label(),
            purpose: self.purpose().to_string(),
            rejection: decision.reason(),
            failure_reason: self.failure_reason(),
        }
    }
}
