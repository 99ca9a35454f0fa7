use std::process::ExitCode;

use env_logger::Env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match scriptgen_cli::run().await {
        Ok(path) => {
            println!("Script saved to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(hint) = scriptgen_cli::hint(&err) {
                eprintln!("\n{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
