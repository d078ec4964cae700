use age_verify::error::AppError;
use age_verify_cli::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        match &err {
            AppError::Interrupted => println!("\nQuestionnaire interrupted by user."),
            AppError::Questionnaire(source) => println!("Questionnaire failed: {source}"),
            _ => eprintln!("application error: {err}"),
        }
        std::process::exit(1);
    }
}
