//! Step payload schemas for the ten-step product creation wizard.
//!
//! Each step validates its own payload locally before any network call is
//! attempted; an invalid payload blocks submission and surfaces per-field
//! messages. The `StepPayload` union is what the wizard orchestrator
//! accumulates per step.

use crate::domain::a001_product::aggregate::{ProductFaq, ProductFeature};
use crate::domain::a004_color::aggregate::ColorId;
use crate::domain::common::{finish_validation, FieldError, ValidationResult};
use serde::{Deserialize, Serialize};

/// Number of steps in the product creation wizard.
pub const STEP_COUNT: u8 = 10;

// ============================================================================
// Step 1 - basic info
// ============================================================================

/// Creates the product and assigns its identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub sku: String,
    #[serde(default)]
    pub category: String,
    pub base_price: f64,
    pub published: bool,
}

impl BasicInfoPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError::new("title", "Title is required"));
        }
        if self.sku.trim().is_empty() {
            errors.push(FieldError::new("sku", "SKU is required"));
        }
        if self.base_price <= 0.0 {
            errors.push(FieldError::new(
                "basePrice",
                "Base price must be greater than zero",
            ));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 2 - sizes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizesPayload {
    pub sizes: Vec<String>,
}

impl SizesPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.sizes.is_empty() {
            errors.push(FieldError::new("sizes", "Add at least one size"));
        } else if self.sizes.iter().any(|s| s.trim().is_empty()) {
            errors.push(FieldError::new("sizes", "Size labels must not be blank"));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 3 - colors
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsPayload {
    pub color_ids: Vec<ColorId>,
}

impl ColorsPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.color_ids.is_empty() {
            errors.push(FieldError::new("colorIds", "Select at least one color"));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 4 - pricing & quantities (one row per variant, two backend calls)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<ColorId>,
    pub size: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingQuantitiesPayload {
    pub rows: Vec<VariantRow>,
}

impl PricingQuantitiesPayload {
    /// An empty row list is valid: a product without a variant grid has
    /// nothing to price, and the step skips the call entirely.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            if row.size.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("rows[{}].size", i),
                    "Size is required",
                ));
            }
            if row.price <= 0.0 {
                errors.push(FieldError::new(
                    format!("rows[{}].price", i),
                    "Price must be greater than zero",
                ));
            }
        }
        finish_validation(errors)
    }

    /// Quantities are submitted only when at least one is non-zero; the
    /// per-step gate in the wizard applies this together with a dirty flag.
    pub fn any_quantity_set(&self) -> bool {
        self.rows.iter().any(|r| r.quantity > 0)
    }
}

// ============================================================================
// Step 5 - images
// ============================================================================

/// Carries only the URLs uploaded in this wizard session. URLs already
/// persisted on the backend are never resubmitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesPayload {
    pub urls: Vec<String>,
}

impl ImagesPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.urls.is_empty() {
            errors.push(FieldError::new("urls", "Upload at least one image"));
        } else if self.urls.iter().any(|u| !u.starts_with("http")) {
            errors.push(FieldError::new("urls", "Image URLs must be absolute"));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 6 - videos
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideosPayload {
    pub urls: Vec<String>,
}

impl VideosPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.urls.is_empty() {
            errors.push(FieldError::new("urls", "Add at least one video URL"));
        } else if self.urls.iter().any(|u| u.trim().is_empty()) {
            errors.push(FieldError::new("urls", "Video URLs must not be blank"));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 7 - features
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesPayload {
    pub features: Vec<ProductFeature>,
}

impl FeaturesPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.features.is_empty() {
            errors.push(FieldError::new("features", "Add at least one feature"));
        }
        for (i, feature) in self.features.iter().enumerate() {
            if feature.title.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("features[{}].title", i),
                    "Feature title is required",
                ));
            }
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 8 - metatags
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetatagsPayload {
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl MetatagsPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.meta_title.trim().is_empty() {
            errors.push(FieldError::new("metaTitle", "Meta title is required"));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 9 - FAQs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqsPayload {
    pub faqs: Vec<ProductFaq>,
}

impl FaqsPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if self.faqs.is_empty() {
            errors.push(FieldError::new("faqs", "Add at least one FAQ"));
        }
        for (i, faq) in self.faqs.iter().enumerate() {
            if faq.question.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("faqs[{}].question", i),
                    "Question is required",
                ));
            }
            if faq.answer.trim().is_empty() {
                errors.push(FieldError::new(
                    format!("faqs[{}].answer", i),
                    "Answer is required",
                ));
            }
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Step 10 - review & finish (no network call)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub confirmed: bool,
}

impl ReviewPayload {
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        if !self.confirmed {
            errors.push(FieldError::new(
                "confirmed",
                "Confirm the product data before finishing",
            ));
        }
        finish_validation(errors)
    }
}

// ============================================================================
// Tagged union accumulated by the orchestrator
// ============================================================================

/// Validated output of one wizard step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StepPayload {
    BasicInfo(BasicInfoPayload),
    Sizes(SizesPayload),
    Colors(ColorsPayload),
    PricingQuantities(PricingQuantitiesPayload),
    Images(ImagesPayload),
    Videos(VideosPayload),
    Features(FeaturesPayload),
    Metatags(MetatagsPayload),
    Faqs(FaqsPayload),
    Review(ReviewPayload),
}

impl StepPayload {
    /// The wizard step this payload belongs to.
    pub fn step(&self) -> u8 {
        match self {
            StepPayload::BasicInfo(_) => 1,
            StepPayload::Sizes(_) => 2,
            StepPayload::Colors(_) => 3,
            StepPayload::PricingQuantities(_) => 4,
            StepPayload::Images(_) => 5,
            StepPayload::Videos(_) => 6,
            StepPayload::Features(_) => 7,
            StepPayload::Metatags(_) => 8,
            StepPayload::Faqs(_) => 9,
            StepPayload::Review(_) => 10,
        }
    }

    pub fn validate(&self) -> ValidationResult {
        match self {
            StepPayload::BasicInfo(p) => p.validate(),
            StepPayload::Sizes(p) => p.validate(),
            StepPayload::Colors(p) => p.validate(),
            StepPayload::PricingQuantities(p) => p.validate(),
            StepPayload::Images(p) => p.validate(),
            StepPayload::Videos(p) => p.validate(),
            StepPayload::Features(p) => p.validate(),
            StepPayload::Metatags(p) => p.validate(),
            StepPayload::Faqs(p) => p.validate(),
            StepPayload::Review(p) => p.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn field_names(result: ValidationResult) -> Vec<String> {
        result
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect::<Vec<_>>()
    }

    #[test]
    fn basic_info_requires_title_sku_and_price() {
        let empty = BasicInfoPayload::default();
        let fields = field_names(empty.validate());
        assert!(fields.contains(&"title".to_string()));
        assert!(fields.contains(&"sku".to_string()));
        assert!(fields.contains(&"basePrice".to_string()));
    }

    #[test]
    fn basic_info_minimal_valid_payload() {
        let payload = BasicInfoPayload {
            title: "T".to_string(),
            sku: "S1".to_string(),
            base_price: 10.0,
            published: false,
            ..Default::default()
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn basic_info_wire_format_is_camel_case() {
        let payload = BasicInfoPayload {
            title: "T".to_string(),
            sku: "S1".to_string(),
            base_price: 10.0,
            published: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"basePrice\":10.0"));
        assert!(json.contains("\"published\":false"));
    }

    #[test]
    fn sizes_rejects_empty_and_blank() {
        assert!(SizesPayload::default().validate().is_err());
        let blank = SizesPayload {
            sizes: vec!["M".to_string(), " ".to_string()],
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn colors_requires_selection() {
        assert!(ColorsPayload::default().validate().is_err());
        let one = ColorsPayload {
            color_ids: vec![ColorId::new(Uuid::new_v4())],
        };
        assert!(one.validate().is_ok());
    }

    #[test]
    fn pricing_accepts_an_empty_variant_grid() {
        assert!(PricingQuantitiesPayload::default().validate().is_ok());
    }

    #[test]
    fn pricing_rejects_zero_price_row() {
        let payload = PricingQuantitiesPayload {
            rows: vec![VariantRow {
                color_id: None,
                size: "M".to_string(),
                price: 0.0,
                quantity: 3,
            }],
        };
        let fields = field_names(payload.validate());
        assert_eq!(fields, vec!["rows[0].price".to_string()]);
    }

    #[test]
    fn pricing_tracks_quantity_presence() {
        let mut payload = PricingQuantitiesPayload {
            rows: vec![VariantRow {
                color_id: None,
                size: "M".to_string(),
                price: 12.0,
                quantity: 0,
            }],
        };
        assert!(!payload.any_quantity_set());
        payload.rows[0].quantity = 5;
        assert!(payload.any_quantity_set());
    }

    #[test]
    fn images_requires_absolute_urls() {
        assert!(ImagesPayload::default().validate().is_err());
        let relative = ImagesPayload {
            urls: vec!["/uploads/a.png".to_string()],
        };
        assert!(relative.validate().is_err());
        let ok = ImagesPayload {
            urls: vec!["https://cdn.example.com/a.png".to_string()],
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn videos_rejects_missing_urls() {
        assert!(VideosPayload::default().validate().is_err());
    }

    #[test]
    fn features_requires_titles() {
        assert!(FeaturesPayload::default().validate().is_err());
        let untitled = FeaturesPayload {
            features: vec![ProductFeature {
                title: String::new(),
                description: "d".to_string(),
            }],
        };
        assert!(untitled.validate().is_err());
    }

    #[test]
    fn metatags_requires_meta_title() {
        assert!(MetatagsPayload::default().validate().is_err());
        let ok = MetatagsPayload {
            meta_title: "Shoes".to_string(),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn faqs_requires_complete_pairs() {
        assert!(FaqsPayload::default().validate().is_err());
        let half = FaqsPayload {
            faqs: vec![ProductFaq {
                question: "Q?".to_string(),
                answer: String::new(),
            }],
        };
        assert!(half.validate().is_err());
    }

    #[test]
    fn feature_and_faq_payloads_compare_by_value() {
        let features = FeaturesPayload {
            features: vec![ProductFeature {
                title: "Waterproof".to_string(),
                description: String::new(),
            }],
        };
        assert_eq!(features.clone(), features);

        let faqs = FaqsPayload {
            faqs: vec![ProductFaq {
                question: "Q?".to_string(),
                answer: "A.".to_string(),
            }],
        };
        assert_eq!(faqs.clone(), faqs);
    }

    #[test]
    fn review_requires_confirmation() {
        assert!(ReviewPayload::default().validate().is_err());
        assert!(ReviewPayload { confirmed: true }.validate().is_ok());
    }

    #[test]
    fn step_payload_reports_its_step() {
        assert_eq!(StepPayload::BasicInfo(BasicInfoPayload::default()).step(), 1);
        assert_eq!(StepPayload::Review(ReviewPayload::default()).step(), 10);
    }
}
