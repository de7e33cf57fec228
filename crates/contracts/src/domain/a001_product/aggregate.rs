use crate::domain::a004_color::aggregate::ColorId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique product identifier.
///
/// Assigned by the backend when step 1 of the creation wizard submits;
/// every later wizard call is scoped by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A catalog product as returned by the backend.
///
/// Child collections are optional in list responses, hence the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub sku: String,
    #[serde(default)]
    pub category: String,
    pub base_price: f64,
    pub published: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// An image record persisted on the backend. The `url` is the secure URL
/// returned by the CDN upload; the id exists only once saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub url: String,
}

/// An embedded video reference (YouTube URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVideo {
    pub url: String,
}

/// A marketing feature line attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFeature {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A question/answer pair shown on the product page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFaq {
    pub question: String,
    pub answer: String,
}

/// SEO metadata. One record per product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metatag {
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

// ============================================================================
// Variant-level records
// ============================================================================

/// A pricing rule for one variant (color + size combination).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<ColorId>,
    pub size: String,
    pub price: f64,
}

/// A stock quantity record for one variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuantity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<ColorId>,
    pub size: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_camel_case() {
        let json = r#"{
            "id": "8c0f3a34-9a62-4a08-bb7a-0d2f2f6b7a11",
            "title": "T",
            "sku": "S1",
            "basePrice": 10.0,
            "published": false
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "T");
        assert_eq!(product.base_price, 10.0);
        assert!(!product.published);
        assert!(product.images.is_empty());
    }

    #[test]
    fn pricing_rule_serializes_color_ref() {
        let rule = PricingRule {
            color_id: None,
            size: "M".to_string(),
            price: 19.5,
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"size\":\"M\""));
        assert!(!json.contains("colorId"));
    }
}
