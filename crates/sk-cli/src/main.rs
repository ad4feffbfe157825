//! sk - session keeper CLI
//!
//! Signs in to the API, keeps the credential pair on disk and runs
//! authorized requests with it.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! sk login --email a@b.com --password secret
//!
//! # Check the stored session
//! sk whoami --pretty
//!
//! # Update the profile
//! sk update --first-name Jane --skill rust --skill sql
//! ```

use sk_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let pretty = cli.pretty();

    match sk_cli::run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
