mod cli;
mod session;

use age_verify::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
