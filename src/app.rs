use crate::{
    client::AdminClient,
    credentials::{self, Credentials, DEFAULT_ACCESS_TOKEN, DEFAULT_STORE_ID},
    logging,
    probe::Prober,
    report,
};
use anyhow::Result;
use std::time::Duration;

pub async fn run(cli: crate::cli::Cli) -> Result<()> {
    let level = logging::level_from_cli(&cli);
    logging::init(level)?;

    let credentials = Credentials::new(
        cli.store
            .clone()
            .unwrap_or_else(|| DEFAULT_STORE_ID.to_string()),
        cli.token
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN.to_string()),
    );
    report::print_banner(&credentials);

    let candidates = match &cli.domain {
        Some(domain) => vec![credentials::qualify(domain)],
        None => credentials.candidate_domains(),
    };
    tracing::info!("probing {} candidate domain(s)", candidates.len());

    let client = AdminClient::new(
        &credentials.access_token,
        &cli.api_version,
        Duration::from_secs(cli.timeout),
    );
    let prober = Prober::new(client, Duration::from_secs(cli.delay));

    // Not finding a domain is a normal completion, not an error.
    match prober.run(&candidates).await {
        Some(discovery) => report::print_discovery(&discovery),
        None => report::print_not_found(&candidates),
    }

    Ok(())
}
