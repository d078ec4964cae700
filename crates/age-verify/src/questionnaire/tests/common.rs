use std::io::Cursor;

use chrono::NaiveDate;

use crate::questionnaire::{
    calculate_age, verify, GuardianConsent, Prompter, QuestionnaireAnswers, VerificationResult,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Fixed reference date so outcomes do not drift with the calendar.
pub(super) fn reference_day() -> NaiveDate {
    date(2026, 10, 19)
}

/// Birth date that makes the subject exactly `age` years old on `reference_day`.
pub(super) fn born_years_ago(age: i32) -> NaiveDate {
    date(2026 - age, 3, 2)
}

pub(super) fn answers(
    date_of_birth: NaiveDate,
    claimed_age: i64,
    guardian_consent: GuardianConsent,
) -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        full_name: "Alice".to_string(),
        date_of_birth,
        claimed_age,
        guardian_consent,
        purpose: "Join the community forum".to_string(),
    }
}

/// Answers where the claimed age is consistent with the birth date.
pub(super) fn honest_answers(age: i32, consent: Option<bool>) -> QuestionnaireAnswers {
    let dob = born_years_ago(age);
    let claimed = calculate_age(dob, reference_day());
    let consent = match consent {
        Some(granted) => GuardianConsent::from_answer(granted),
        None => GuardianConsent::NotApplicable,
    };
    answers(dob, claimed, consent)
}

pub(super) fn verified(answers: QuestionnaireAnswers) -> VerificationResult {
    verify(answers, reference_day()).expect("consistent answers")
}

pub(super) fn scripted_prompter(script: &[&str]) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    let mut input = script.join("\n");
    input.push('\n');
    Prompter::new(Cursor::new(input.into_bytes()), Vec::new(), reference_day())
}
