use super::domain::GuardianConsent;

/// Fatal conditions that stop the questionnaire. Validation failures are
/// handled inside the prompts and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("input stream closed before the questionnaire finished")]
    InputClosed,
    #[error("unable to read or write the console: {0}")]
    Io(#[from] std::io::Error),
    #[error("guardian consent {consent:?} is inconsistent with claimed age {claimed_age}")]
    InconsistentConsent {
        claimed_age: i64,
        consent: GuardianConsent,
    },
}
