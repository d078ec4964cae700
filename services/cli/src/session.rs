use std::io::{self, Write};

use age_verify::error::AppError;
use age_verify::questionnaire::{age, run_questionnaire, Prompter, VerificationResult};
use chrono::NaiveDate;
use tracing::info;

#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionArgs {
    pub(crate) today: Option<NaiveDate>,
    pub(crate) json: bool,
}

/// Run the questionnaire on the console, racing it against Ctrl-C.
pub(crate) async fn run_interactive(args: SessionArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(age::today);
    // Registered before the first prompt is written.
    let mut interrupt = interrupt_listener()?;

    // stdout stays unlocked so the interrupt notice can still be written.
    let questionnaire = tokio::task::spawn_blocking(move || {
        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout(), today);
        run_questionnaire(&mut prompter)
    });

    let result = tokio::select! {
        joined = questionnaire => joined.map_err(io::Error::from)??,
        _ = interrupt.recv() => {
            info!("interrupt received");
            return Err(AppError::Interrupted);
        }
    };

    let rendered = render(&result, args.json)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(unix)]
fn interrupt_listener() -> io::Result<tokio::signal::unix::Signal> {
    use tokio::signal::unix::{signal, SignalKind};
    signal(SignalKind::interrupt())
}

#[cfg(windows)]
fn interrupt_listener() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}

pub(crate) fn render(result: &VerificationResult, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(&result.to_view())?)
    } else {
        Ok(result.summary())
    }
}
