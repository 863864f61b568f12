mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use credit_profile::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
