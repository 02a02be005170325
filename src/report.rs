use colored::*;

use crate::client::ProbeResponse;
use crate::credentials::Credentials;
use crate::errors::ProbeError;
use crate::model::{ProductCount, ProductPage};
use crate::probe::Discovery;

const BODY_SNIPPET_LEN: usize = 200;

pub fn print_banner(credentials: &Credentials) {
    println!("{}", "Shopify API Connectivity Test".green().bold());
    println!("{}", "═".repeat(40).green());
    println!("{}: {}", "Store ID".cyan().bold(), credentials.store_id);
    println!("{}: {}", "Access Token".cyan().bold(), credentials.access_token);

    if credentials.looks_nonstandard() {
        eprintln!(
            "\n{}",
            "WARNING: the token does not match the standard Admin API format"
                .yellow()
                .bold()
        );
        eprintln!(
            "{}",
            "Standard setups use a shop domain (your-shop.myshopify.com) and an"
                .yellow()
        );
        eprintln!(
            "{}",
            "access token sent via the X-Shopify-Access-Token header.".yellow()
        );
    }
}

pub fn candidate_header(domain: &str) {
    println!("\n{} {}", "Testing domain:".cyan().bold(), domain);
    println!("{}", "─".repeat(50).dimmed());
}

pub fn candidate_failed(domain: &str, status: u16, body: &str) {
    println!(
        "{} {} {}",
        "shop.json failed for".red(),
        domain,
        format!("(HTTP {})", status).red()
    );
    let snippet = snippet(body);
    if !snippet.is_empty() {
        println!("  {}", snippet.dimmed());
    }
}

pub fn candidate_error(domain: &str, err: &ProbeError) {
    println!("{} {}: {}", "Connection failed for".red(), domain, err);
}

pub fn print_discovery(discovery: &Discovery) {
    println!("\n{}", "═".repeat(40).green().bold());
    println!("{}", "Working domain found".green().bold());
    println!("{}", "═".repeat(40).green().bold());
    println!("\n{}: {}", "Domain".cyan().bold(), discovery.domain);

    let shop = &discovery.shop;
    println!("\n{}", "Shop:".yellow().bold());
    println!("  Name:   {}", field(shop.name.as_deref()));
    println!("  Domain: {}", field(shop.domain.as_deref()));
    println!("  Plan:   {}", field(shop.plan_name.as_deref()));
    println!("  Email:  {}", field(shop.email.as_deref()));

    print_products(discovery.products.as_ref());
    print_count(discovery.count.as_ref());
}

fn print_products(response: Option<&ProbeResponse>) {
    println!("\n{}", "Products:".yellow().bold());
    match response {
        Some(ProbeResponse::Ok { body, .. }) => {
            match serde_json::from_value::<ProductPage>(body.clone()) {
                Ok(page) if !page.products.is_empty() => {
                    for (index, product) in page.products.iter().enumerate() {
                        println!(
                            "  {}. {} - ${}",
                            index + 1,
                            product.title,
                            product.first_price().unwrap_or("N/A")
                        );
                    }
                }
                Ok(_) => println!("  {}", "no products returned".dimmed()),
                Err(_) => println!("  {}", "unrecognized products payload".red()),
            }
        }
        Some(ProbeResponse::Failed { status, body }) => {
            println!(
                "  {} {}",
                format!("fetch failed (HTTP {})", status).red(),
                snippet(body).dimmed()
            );
        }
        None => println!("  {}", "fetch errored at the transport level".red()),
    }
}

fn print_count(response: Option<&ProbeResponse>) {
    match response {
        Some(ProbeResponse::Ok { body, .. }) => {
            if let Ok(count) = serde_json::from_value::<ProductCount>(body.clone()) {
                println!(
                    "\n{} {}",
                    "Total products in store:".yellow().bold(),
                    count.count.to_string().green().bold()
                );
            }
        }
        Some(ProbeResponse::Failed { status, .. }) => {
            println!("\n{}", format!("Product count failed (HTTP {})", status).red());
        }
        None => println!("\n{}", "Product count errored".red()),
    }
}

pub fn print_not_found(candidates: &[String]) {
    println!("\n{}", "No working shop domain found".red().bold());
    println!("Tried {} candidate domain(s):", candidates.len());
    for candidate in candidates {
        println!("  • {}", candidate.dimmed());
    }

    println!("\n{}", "Next steps:".yellow().bold());
    println!("  1. Re-run against your actual shop: shopprobe <your-shop-name>");
    println!("  2. Verify the access token and its permissions");
    println!("  3. Check the app configuration in the Shopify admin");
}

fn field(value: Option<&str>) -> String {
    value.unwrap_or("n/a").to_string()
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() > BODY_SNIPPET_LEN {
        let cut: String = trimmed.chars().take(BODY_SNIPPET_LEN).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
