use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "shopprobe", version, about = "Shopify Admin API connectivity tester")]
pub struct Cli {
    /// Probe exactly this shop instead of the guess list
    /// (.myshopify.com is appended when missing)
    pub domain: Option<String>,

    /// Admin API access token (sent as X-Shopify-Access-Token)
    #[arg(long = "token")]
    pub token: Option<String>,

    /// Account identifier seeding the domain guess list
    #[arg(long = "store")]
    pub store: Option<String>,

    /// Admin API version segment of the request path
    #[arg(long = "api-version", default_value = "2024-10")]
    pub api_version: String,

    /// Per-request timeout in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    pub timeout: u64,

    /// Delay between candidate attempts in seconds
    #[arg(long = "delay", default_value_t = 1)]
    pub delay: u64,

    /// Verbose human output
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug logs (implies verbose)
    #[arg(short = 'd', long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_admin_api_contract() {
        let cli = Cli::parse_from(["shopprobe"]);
        assert_eq!(cli.api_version, "2024-10");
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.delay, 1);
        assert!(cli.domain.is_none());
    }

    #[test]
    fn manual_domain_is_positional() {
        let cli = Cli::parse_from(["shopprobe", "acme", "--token", "shpat_x"]);
        assert_eq!(cli.domain.as_deref(), Some("acme"));
        assert_eq!(cli.token.as_deref(), Some("shpat_x"));
    }
}
