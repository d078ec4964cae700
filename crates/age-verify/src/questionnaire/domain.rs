use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::QuestionnaireError;
use super::policy::AGE_OF_MAJORITY;

/// Guardian consent as captured during the questionnaire.
///
/// `NotApplicable` means the question was never asked, which is distinct from
/// a minor declining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardianConsent {
    Granted,
    Declined,
    NotApplicable,
}

impl GuardianConsent {
    pub fn from_answer(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Declined
        }
    }

    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Granted => "yes",
            Self::Declined => "no",
            Self::NotApplicable => "n/a",
        }
    }
}

/// Validated answers handed to the decision engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswers {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub claimed_age: i64,
    pub guardian_consent: GuardianConsent,
    pub purpose: String,
}

/// Specific reasons a verification is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    AgeMismatch,
    UnderMinimumAge,
    MissingGuardianConsent,
}

impl RejectionReason {
    pub fn message(self) -> &'static str {
        match self {
            RejectionReason::AgeMismatch => "Claimed age does not match date of birth.",
            RejectionReason::UnderMinimumAge => "Users under 13 are not permitted.",
            RejectionReason::MissingGuardianConsent => "Guardian consent required for minors.",
        }
    }
}

/// Outcome of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationDecision {
    Approved,
    Rejected(RejectionReason),
}

impl VerificationDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, VerificationDecision::Approved)
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            VerificationDecision::Approved => "APPROVED",
            VerificationDecision::Rejected(_) => "REJECTED",
        }
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            VerificationDecision::Approved => None,
            VerificationDecision::Rejected(reason) => Some(*reason),
        }
    }
}

/// Immutable record of the captured answers and the decision reached for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    answers: QuestionnaireAnswers,
    decision: VerificationDecision,
}

impl VerificationResult {
    pub fn new(
        answers: QuestionnaireAnswers,
        decision: VerificationDecision,
    ) -> Result<Self, QuestionnaireError> {
        let adult = answers.claimed_age >= AGE_OF_MAJORITY;
        let not_asked = answers.guardian_consent == GuardianConsent::NotApplicable;
        if adult != not_asked {
            return Err(QuestionnaireError::InconsistentConsent {
                claimed_age: answers.claimed_age,
                consent: answers.guardian_consent,
            });
        }

        Ok(Self { answers, decision })
    }

    pub fn answers(&self) -> &QuestionnaireAnswers {
        &self.answers
    }

    pub fn full_name(&self) -> &str {
        &self.answers.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.answers.date_of_birth
    }

    pub fn claimed_age(&self) -> i64 {
        self.answers.claimed_age
    }

    pub fn guardian_consent(&self) -> GuardianConsent {
        self.answers.guardian_consent
    }

    pub fn purpose(&self) -> &str {
        &self.answers.purpose
    }

    pub fn decision(&self) -> VerificationDecision {
        self.decision
    }

    pub fn verification_passed(&self) -> bool {
        self.decision.is_approved()
    }

    pub fn failure_reason(&self) -> Option<&'static str> {
        self.decision.reason().map(RejectionReason::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(claimed_age: i64, guardian_consent: GuardianConsent) -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            full_name: "Alice".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
            claimed_age,
            guardian_consent,
            purpose: String::new(),
        }
    }

    #[test]
    fn adults_must_not_carry_consent_answer() {
        let err = VerificationResult::new(
            answers(30, GuardianConsent::Granted),
            VerificationDecision::Approved,
        )
        .expect_err("consent recorded for an adult");
        assert!(matches!(
            err,
            QuestionnaireError::InconsistentConsent {
                claimed_age: 30,
                consent: GuardianConsent::Granted,
            }
        ));
        assert_eq!(
            err.to_string(),
            "guardian consent Granted is inconsistent with claimed age 30"
        );
    }

    #[test]
    fn minors_must_carry_consent_answer() {
        let result = VerificationResult::new(
            answers(15, GuardianConsent::NotApplicable),
            VerificationDecision::Approved,
        );
        assert!(result.is_err());
    }

    #[test]
    fn failure_reason_tracks_decision() {
        let approved = VerificationResult::new(
            answers(18, GuardianConsent::NotApplicable),
            VerificationDecision::Approved,
        )
        .expect("consistent result");
        assert!(approved.verification_passed());
        assert_eq!(approved.failure_reason(), None);

        let rejected = VerificationResult::new(
            answers(15, GuardianConsent::Declined),
            VerificationDecision::Rejected(RejectionReason::MissingGuardianConsent),
        )
        .expect("consistent result");
        assert!(!rejected.verification_passed());
        assert_eq!(
            rejected.failure_reason(),
            Some("Guardian consent required for minors.")
        );
    }

    #[test]
    fn consent_labels() {
        assert_eq!(GuardianConsent::from_answer(true).label(), "yes");
        assert_eq!(GuardianConsent::from_answer(false).label(), "no");
        assert_eq!(GuardianConsent::NotApplicable.label(), "n/a");
    }
}
