mod app;
mod cli;
mod client;
mod credentials;
mod errors;
mod logging;
mod model;
mod probe;
mod report;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    if let Err(err) = app::run(cli).await {
        eprintln!("fatal: {:#}", err);
        std::process::exit(1);
    }
}
