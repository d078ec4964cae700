use std::io::{self, BufRead, Write};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use super::error::QuestionnaireError;
use super::policy::MAX_PLAUSIBLE_AGE;

pub const BIRTH_DATE_PROMPT: &str = "Enter your date of birth (YYYY-MM-DD): ";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Line-oriented console prompts that keep asking until the answer is valid.
///
/// `today` is the reference date for birth-date plausibility checks.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    today: NaiveDate,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self {
            input,
            output,
            today,
            line: String::new(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of output without reading anything back.
    pub fn say(&mut self, message: &str) -> Result<(), QuestionnaireError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Read one trimmed answer to `prompt`, which may be empty.
    pub fn prompt_text(&mut self, prompt: &str) -> Result<String, QuestionnaireError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            match self.input.read_line(&mut self.line) {
                Ok(0) => {
                    warn!("input closed while waiting for an answer");
                    return Err(QuestionnaireError::InputClosed);
                }
                Ok(_) => return Ok(self.line.trim().to_string()),
                // read_line has already consumed the offending line.
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    debug!("rejected answer that is not valid UTF-8");
                    self.say("Input must be valid text. Please try again.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub fn prompt_non_empty(&mut self, prompt: &str) -> Result<String, QuestionnaireError> {
        loop {
            let value = self.prompt_text(prompt)?;
            if !value.is_empty() {
                return Ok(value);
            }
            debug!("rejected empty answer");
            self.say("Input cannot be empty. Please try again.")?;
        }
    }

    pub fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool, QuestionnaireError> {
        let prompt = format!("{prompt} [y/n]: ");
        loop {
            let answer = self.prompt_text(&prompt)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    debug!("rejected yes/no answer");
                    self.say("Please respond with 'y', 'yes', 'n', or 'no'.")?;
                }
            }
        }
    }

    pub fn prompt_integer(
        &mut self,
        prompt: &str,
        minimum: Option<i64>,
        maximum: Option<i64>,
    ) -> Result<i64, QuestionnaireError> {
        loop {
            let raw = self.prompt_text(prompt)?;
            let value = match raw.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    debug!("rejected non-numeric answer");
                    self.say("Please enter a whole number.")?;
                    continue;
                }
            };

            if let Some(min) = minimum.filter(|min| value < *min) {
                debug!(value, min, "rejected integer below range");
                self.say(&format!("Value must be at least {min}."))?;
                continue;
            }
            if let Some(max) = maximum.filter(|max| value > *max) {
                debug!(value, max, "rejected integer above range");
                self.say(&format!("Value must be at most {max}."))?;
                continue;
            }
            return Ok(value);
        }
    }

    pub fn prompt_birth_date(&mut self, prompt: &str) -> Result<NaiveDate, QuestionnaireError> {
        loop {
            let raw = self.prompt_text(prompt)?;
            let dob = match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
                Ok(dob) => dob,
                Err(_) => {
                    debug!("rejected unparsable birth date");
                    self.say("Invalid date format. Please use YYYY-MM-DD.")?;
                    continue;
                }
            };

            if dob > self.today {
                debug!("rejected future birth date");
                self.say("Date of birth cannot be in the future.")?;
                continue;
            }
            if i64::from(self.today.year()) - i64::from(dob.year()) > MAX_PLAUSIBLE_AGE {
                debug!("rejected implausible birth date");
                self.say("Entered age seems unrealistic. Please double-check.")?;
                continue;
            }
            return Ok(dob);
        }
    }
}
