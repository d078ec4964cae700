use crate::session::{run_interactive, SessionArgs};
use age_verify::config::AppConfig;
use age_verify::error::AppError;
use age_verify::telemetry;
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "age-verify",
    about = "Run the interactive age verification questionnaire",
    version
)]
struct Cli {
    /// Reference date for age calculations (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Print the verification result as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, "configuration loaded");

    run_interactive(SessionArgs {
        today: cli.today,
        json: cli.json,
    })
    .await
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_starts_questionnaire_with_defaults() {
        let cli = Cli::try_parse_from(["age-verify"]).expect("parses");
        assert!(cli.today.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn accepts_reference_date_and_json_flag() {
        let cli = Cli::try_parse_from(["age-verify", "--today", "2030-01-15", "--json"])
            .expect("parses");
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2030, 1, 15));
        assert!(cli.json);
    }

    #[test]
    fn rejects_malformed_reference_date() {
        assert!(Cli::try_parse_from(["age-verify", "--today", "15/01/2030"]).is_err());
        let err = parse_date("2030-02-30").expect_err("invalid day");
        assert!(err.contains("2030-02-30"));
    }
}
