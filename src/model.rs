use serde::Deserialize;
use serde_json::Value;

/// The slice of `shop.json` this tool reports. Fields are surfaced exactly
/// as the API returned them; anything missing prints as "n/a".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ShopInfo {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub plan_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ShopEnvelope {
    shop: ShopInfo,
}

impl ShopInfo {
    /// Extract the `shop` object from a parsed `shop.json` body.
    pub fn from_body(body: &Value) -> Option<Self> {
        serde_json::from_value::<ShopEnvelope>(body.clone())
            .ok()
            .map(|envelope| envelope.shop)
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub variants: Vec<Variant>,
}

#[derive(Debug, Deserialize)]
pub struct Variant {
    pub price: Option<String>,
}

impl Product {
    pub fn first_price(&self) -> Option<&str> {
        self.variants.first().and_then(|v| v.price.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct ProductCount {
    #[serde(default)]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn shop_info_from_body() {
        let body = json!({
            "shop": {
                "name": "Acme",
                "domain": "acme.myshopify.com",
                "plan_name": "basic",
                "email": "owner@acme.example",
                "currency": "USD"
            }
        });
        let shop = ShopInfo::from_body(&body).unwrap();
        assert_eq!(shop.name.as_deref(), Some("Acme"));
        assert_eq!(shop.domain.as_deref(), Some("acme.myshopify.com"));
        assert_eq!(shop.plan_name.as_deref(), Some("basic"));
        assert_eq!(shop.email.as_deref(), Some("owner@acme.example"));
    }

    #[test]
    fn shop_info_missing_envelope() {
        assert!(ShopInfo::from_body(&json!({"errors": "unauthorized"})).is_none());
    }

    #[test]
    fn product_without_variants_has_no_price() {
        let page: ProductPage = serde_json::from_value(json!({
            "products": [
                {"title": "Widget", "variants": [{"price": "9.99"}]},
                {"title": "Bare"}
            ]
        }))
        .unwrap();
        assert_eq!(page.products[0].first_price(), Some("9.99"));
        assert_eq!(page.products[1].first_price(), None);
    }
}
