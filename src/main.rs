use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Errors are logged where they happen.
    match enzyme_sim::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
