//! Fetch wrappers for the product resource and its child collections.
//!
//! One function per backend operation; no retries, no caching, a single
//! request per invocation.

use contracts::domain::a001_product::aggregate::{
    Metatag, PricingRule, Product, ProductFaq, ProductFeature, ProductId, ProductQuantity,
};
use contracts::domain::a001_product::wizard::{
    BasicInfoPayload, ColorsPayload, ImagesPayload, SizesPayload,
};
use gloo_net::http::Request;
use uuid::Uuid;

use crate::shared::api_utils::{api_url, read_json, read_ok};

/// Path of a child collection under one product. Every wizard call after
/// step 1 is scoped by the product id this builds in.
fn product_child_path(id: ProductId, child: &str) -> String {
    format!("/api/products/{}/{}", id, child)
}

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn fetch_product(id: ProductId) -> Result<Product, String> {
    let response = Request::get(&api_url(&format!("/api/products/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

/// Step 1: creates the product and assigns the identity every later wizard
/// call is scoped by.
pub async fn create_product(payload: &BasicInfoPayload) -> Result<Product, String> {
    let response = Request::post(&api_url("/api/products"))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

pub async fn delete_product(id: ProductId) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/products/{}", id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn bulk_add_sizes(id: ProductId, payload: &SizesPayload) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "sizes")))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn bulk_add_colors(id: ProductId, payload: &ColorsPayload) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "colors")))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn bulk_add_pricing(id: ProductId, rules: &[PricingRule]) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "pricing")))
        .json(&rules)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn bulk_add_quantities(
    id: ProductId,
    quantities: &[ProductQuantity],
) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "quantities")))
        .json(&quantities)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

#[allow(dead_code)]
pub async fn fetch_quantities(id: ProductId) -> Result<Vec<ProductQuantity>, String> {
    let response = Request::get(&api_url(&product_child_path(id, "quantities")))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_json(response).await
}

#[allow(dead_code)]
pub async fn update_quantity(quantity_id: Uuid, quantity: u32) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/quantities/{}", quantity_id)))
        .json(&serde_json::json!({ "quantity": quantity }))
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

#[allow(dead_code)]
pub async fn delete_quantity(quantity_id: Uuid) -> Result<(), String> {
    let response = Request::delete(&api_url(&format!("/api/quantities/{}", quantity_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

/// Step 5: persists the newly uploaded CDN URLs as image records.
pub async fn bulk_add_images(id: ProductId, payload: &ImagesPayload) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "images")))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn bulk_add_features(id: ProductId, features: &[ProductFeature]) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "features")))
        .json(&features)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn bulk_add_faqs(id: ProductId, faqs: &[ProductFaq]) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "faqs")))
        .json(&faqs)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

pub async fn save_metatags(id: ProductId, metatag: &Metatag) -> Result<(), String> {
    let response = Request::post(&api_url(&product_child_path(id, "metatags")))
        .json(metatag)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ok(response).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::ui::wizard::state::WizardState;

    #[test]
    fn bulk_size_path_is_scoped_to_the_id_recorded_by_step_one() {
        let mut state = WizardState::new();
        let id = ProductId::new(Uuid::new_v4());
        state.set_product_id(id);

        let scoped = state.product_id().map(|id| product_child_path(id, "sizes"));
        assert_eq!(scoped.as_deref(), Some(format!("/api/products/{}/sizes", id).as_str()));
    }
}
