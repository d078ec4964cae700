//! Console age-verification questionnaire: validated prompts, the age
//! calculator, the approval decision table, and the summary renderer.

pub mod age;
pub mod domain;
mod error;
pub mod policy;
pub mod prompt;
mod session;
mod summary;

#[cfg(test)]
mod tests;

pub use age::{age_today, calculate_age};
pub use domain::{
    GuardianConsent, QuestionnaireAnswers, RejectionReason, VerificationDecision,
    VerificationResult,
};
pub use error::QuestionnaireError;
pub use policy::{decide, verify};
pub use prompt::Prompter;
pub use session::run_questionnaire;
pub use summary::VerificationView;
