use std::io::{BufRead, Write};

use tracing::info;

use super::age::calculate_age;
use super::domain::{GuardianConsent, QuestionnaireAnswers, VerificationResult};
use super::error::QuestionnaireError;
use super::policy::{verify, AGE_OF_MAJORITY, MAX_CLAIMED_AGE, MIN_CLAIMED_AGE};
use super::prompt::{Prompter, BIRTH_DATE_PROMPT};

/// Walk the user through every question in order and return the decided result.
pub fn run_questionnaire<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<VerificationResult, QuestionnaireError> {
    prompter.say("=== Age Verification Questionnaire ===")?;
    prompter.say("Please answer the following questions honestly.")?;
    prompter.say("----------------------------------------")?;

    let answers = collect_answers(prompter)?;
    info!(
        claimed_age = answers.claimed_age,
        consent = answers.guardian_consent.label(),
        "questionnaire answers collected"
    );

    verify(answers, prompter.today())
}

fn collect_answers<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<QuestionnaireAnswers, QuestionnaireError> {
    let full_name = prompter.prompt_non_empty("Full name: ")?;
    let date_of_birth = prompter.prompt_birth_date(BIRTH_DATE_PROMPT)?;
    let calculated = calculate_age(date_of_birth, prompter.today());
    let claimed_age = prompter.prompt_integer(
        &format!("Confirm your age ({calculated} calculated): "),
        Some(MIN_CLAIMED_AGE),
        Some(MAX_CLAIMED_AGE),
    )?;

    let guardian_consent = if claimed_age < AGE_OF_MAJORITY {
        GuardianConsent::from_answer(
            prompter.prompt_yes_no("Do you have verifiable parental/guardian consent?")?,
        )
    } else {
        GuardianConsent::NotApplicable
    };

    let purpose = prompter.prompt_text("What is your reason for requesting access? ")?;

    Ok(QuestionnaireAnswers {
        full_name,
        date_of_birth,
        claimed_age,
        guardian_consent,
        purpose,
    })
}
