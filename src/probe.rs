use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{info, warn};

use crate::client::{AdminClient, ProbeResponse};
use crate::model::ShopInfo;
use crate::report;

const SHOP_ENDPOINT: &str = "/shop.json";
const PRODUCTS_ENDPOINT: &str = "/products.json?limit=3";
const COUNT_ENDPOINT: &str = "/products/count.json";

/// Aggregated result for the first candidate whose shop.json probe
/// succeeded. Follow-up responses stay in the aggregate even when they
/// failed; `None` means the follow-up died at the transport level.
#[derive(Debug)]
pub struct Discovery {
    pub domain: String,
    pub shop: ShopInfo,
    pub shop_body: serde_json::Value,
    pub products: Option<ProbeResponse>,
    pub count: Option<ProbeResponse>,
}

/// Walks an ordered candidate list, strictly sequentially, and stops at the
/// first host that answers shop.json with 2xx + JSON. Probing is
/// deliberately not concurrent: the list is tiny and hammering an external
/// API in parallel buys nothing.
pub struct Prober {
    client: AdminClient,
    delay: Duration,
    scheme: &'static str,
}

impl Prober {
    pub fn new(client: AdminClient, delay: Duration) -> Self {
        Self {
            client,
            delay,
            scheme: "https",
        }
    }

    pub async fn run(&self, candidates: &[String]) -> Option<Discovery> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("Failed to create progress style"),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));

        for (index, domain) in candidates.iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            spinner.set_message(format!("probing {}", domain));
            report::candidate_header(domain);

            if let Some(discovery) = self.probe_candidate(domain).await {
                spinner.finish_and_clear();
                info!("working domain found: {}", discovery.domain);
                return Some(discovery);
            }
        }

        spinner.finish_and_clear();
        None
    }

    /// One shop.json attempt for one candidate. Every failure mode, from
    /// connection refused to a 200 with an HTML body, resolves to `None`
    /// so the loop moves on to the next candidate.
    async fn probe_candidate(&self, domain: &str) -> Option<Discovery> {
        let base_url = format!("{}://{}", self.scheme, domain);

        let shop_response = match self.client.get(&base_url, SHOP_ENDPOINT).await {
            Ok(response) => response,
            Err(err) => {
                warn!("{}: {}", domain, err);
                report::candidate_error(domain, &err);
                return None;
            }
        };

        let shop_body = match &shop_response {
            ProbeResponse::Ok { body, .. } => body.clone(),
            ProbeResponse::Failed { status, body } => {
                report::candidate_failed(domain, *status, body);
                return None;
            }
        };

        let shop = ShopInfo::from_body(&shop_body).unwrap_or_default();

        // Discovery stands once shop.json succeeded; follow-up failures are
        // reported inside the aggregate, never retried.
        let products = self.follow_up(&base_url, PRODUCTS_ENDPOINT).await;
        let count = self.follow_up(&base_url, COUNT_ENDPOINT).await;

        Some(Discovery {
            domain: domain.to_string(),
            shop,
            shop_body,
            products,
            count,
        })
    }

    async fn follow_up(&self, base_url: &str, endpoint: &str) -> Option<ProbeResponse> {
        match self.client.get(base_url, endpoint).await {
            Ok(response) => Some(response),
            Err(err) => {
                warn!("follow-up {} failed: {}", endpoint, err);
                None
            }
        }
    }
}
