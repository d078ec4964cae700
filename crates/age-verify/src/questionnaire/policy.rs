use chrono::NaiveDate;
use tracing::info;

use super::age::calculate_age;
use super::domain::{
    QuestionnaireAnswers, RejectionReason, VerificationDecision, VerificationResult,
};
use super::error::QuestionnaireError;

/// Youngest claimed age that may be approved at all.
pub const MINIMUM_AGE: i64 = 13;
/// Claimed ages below this need guardian consent.
pub const AGE_OF_MAJORITY: i64 = 18;
/// Largest year gap between birth and today accepted by the birth-date prompt.
pub const MAX_PLAUSIBLE_AGE: i64 = 120;
/// Inclusive bounds for the confirmed-age prompt.
pub const MIN_CLAIMED_AGE: i64 = 0;
pub const MAX_CLAIMED_AGE: i64 = 150;

/// Apply the decision table to validated answers. First matching rule wins.
pub fn decide(answers: &QuestionnaireAnswers, today: NaiveDate) -> VerificationDecision {
    let calculated = calculate_age(answers.date_of_birth, today);

    if answers.claimed_age != calculated {
        return VerificationDecision::Rejected(RejectionReason::AgeMismatch);
    }

    if answers.claimed_age < MINIMUM_AGE {
        return VerificationDecision::Rejected(RejectionReason::UnderMinimumAge);
    }

    if answers.claimed_age < AGE_OF_MAJORITY && !answers.guardian_consent.is_granted() {
        return VerificationDecision::Rejected(RejectionReason::MissingGuardianConsent);
    }

    VerificationDecision::Approved
}

/// Decide and package the answers into the final result.
pub fn verify(
    answers: QuestionnaireAnswers,
    today: NaiveDate,
) -> Result<VerificationResult, QuestionnaireError> {
    let decision = decide(&answers, today);
    info!(
        status = decision.status_label(),
        reason = ?decision.reason(),
        "verification decided"
    );
    VerificationResult::new(answers, decision)
}
