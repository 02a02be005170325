/// Credentials pulled from the project's .env file. They do not follow the
/// standard Admin API format, which is exactly what this tool diagnoses.
pub const DEFAULT_STORE_ID: &str = "IRcZcymc9wen6420145akTB5xMpVxcTCR1";
pub const DEFAULT_ACCESS_TOKEN: &str = "J5KWGwX5dDebRJ.egZpKYasL.UMUSCRs";

/// Prefixes of real Admin API access tokens (private app, custom app,
/// public app, and session tokens respectively).
const TOKEN_PREFIXES: [&str; 4] = ["shpat_", "shpca_", "shppa_", "shpss_"];

/// Generic shop naming patterns tried after the store-id guess.
const GENERIC_GUESSES: [&str; 3] = ["test-shop", "demo-shop", "my-shop"];

const SHOP_SUFFIX: &str = ".myshopify.com";

#[derive(Debug, Clone)]
pub struct Credentials {
    pub store_id: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(store_id: String, access_token: String) -> Self {
        Self {
            store_id,
            access_token,
        }
    }

    /// True when the token carries none of the known Admin API prefixes.
    /// Drives a single warning print and nothing else.
    pub fn looks_nonstandard(&self) -> bool {
        !TOKEN_PREFIXES
            .iter()
            .any(|prefix| self.access_token.starts_with(prefix))
    }

    /// Ordered guess list: the lower-cased store id first, then generic
    /// placeholders. Each candidate appears at most once.
    pub fn candidate_domains(&self) -> Vec<String> {
        let mut candidates = Vec::new();
        let mut push = |name: &str| {
            let domain = qualify(name);
            if !candidates.contains(&domain) {
                candidates.push(domain);
            }
        };

        push(&self.store_id.to_lowercase());
        for guess in GENERIC_GUESSES {
            push(guess);
        }
        candidates
    }
}

/// Append `.myshopify.com` unless the name is already fully qualified.
pub fn qualify(name: &str) -> String {
    if name.contains(SHOP_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, SHOP_SUFFIX)
    }
}
