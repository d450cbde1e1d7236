mod cli;
mod commands;
mod infra;
mod render;

use rural_triage::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
