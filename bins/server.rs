use tracing::error;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(e) = server::run().await {
        // Startup failures (missing credentials, bad bind address) land here
        // before a single request has been served.
        error!(error = %format!("{e:#}"), "server exited with error");
        eprintln!("error: {e:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}
