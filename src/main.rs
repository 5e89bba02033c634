use dotenv::dotenv;
use jirat::commands::Cli;
use jirat::libs::logging;
use jirat::msg_error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv();
    logging::init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
