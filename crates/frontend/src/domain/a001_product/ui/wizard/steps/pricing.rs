//! Step 4: per-variant pricing and stock. Two backend calls in sequence;
//! the saga records which already stuck so a resubmission after a partial
//! failure does not double-write.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::a001_product::aggregate::{PricingRule, ProductQuantity};
use contracts::domain::a001_product::wizard::{PricingQuantitiesPayload, StepPayload, VariantRow};
use contracts::domain::a004_color::aggregate::ColorId;
use contracts::domain::common::FieldError;

use super::{StepActions, StepError, ValidationSummary};
use crate::domain::a001_product::api;
use crate::domain::a001_product::ui::wizard::saga::StepSaga;
use crate::domain::a001_product::ui::wizard::state::WizardState;
use crate::domain::a004_color::api as color_api;
use crate::domain::a005_size::api as size_api;
use crate::shared::components::loading::LoadingIndicator;
use crate::shared::components::ui::TextField;

#[derive(Clone)]
struct RowVm {
    color_id: Option<ColorId>,
    color_name: String,
    size: String,
    price: RwSignal<String>,
    quantity: RwSignal<String>,
}

/// One row per color × size combination attached in steps 2 and 3.
/// A product without colors still gets one row per size.
fn build_rows(
    colors: &[(ColorId, String)],
    sizes: &[String],
    previous: Option<&PricingQuantitiesPayload>,
) -> Vec<RowVm> {
    let color_axis: Vec<(Option<ColorId>, String)> = if colors.is_empty() {
        vec![(None, String::new())]
    } else {
        colors
            .iter()
            .map(|(id, name)| (Some(*id), name.clone()))
            .collect()
    };

    let mut rows = Vec::new();
    for (color_id, color_name) in &color_axis {
        for size in sizes {
            let saved = previous.and_then(|p| {
                p.rows
                    .iter()
                    .find(|r| r.color_id == *color_id && r.size == *size)
            });
            rows.push(RowVm {
                color_id: *color_id,
                color_name: color_name.clone(),
                size: size.clone(),
                price: RwSignal::new(
                    saved.map(|r| r.price.to_string()).unwrap_or_default(),
                ),
                quantity: RwSignal::new(
                    saved
                        .filter(|r| r.quantity > 0)
                        .map(|r| r.quantity.to_string())
                        .unwrap_or_default(),
                ),
            });
        }
    }
    rows
}

#[component]
pub fn StepPricing(state: RwSignal<WizardState>) -> impl IntoView {
    let rows = RwSignal::new(Vec::<RowVm>::new());
    let loading = RwSignal::new(true);
    let quantities_touched = RwSignal::new(false);
    let saga = RwSignal::new(StepSaga::new());

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    // Build the variant grid from what steps 2 and 3 attached, overlaying
    // values kept from a previous visit to this step.
    spawn_local(async move {
        let Some(product_id) = state.read_untracked().product_id() else {
            loading.set(false);
            error.set(Some("Create the product in step 1 first".to_string()));
            return;
        };
        let colors = match color_api::fetch_colors_by_product(product_id).await {
            Ok(list) => list.into_iter().map(|c| (c.id, c.name)).collect(),
            Err(e) => {
                log::warn!("failed to load product colors: {}", e);
                Vec::new()
            }
        };
        let sizes = match size_api::fetch_sizes_by_product(product_id).await {
            Ok(list) => list.into_iter().map(|s| s.label).collect(),
            Err(e) => {
                log::warn!("failed to load product sizes: {}", e);
                Vec::new()
            }
        };
        let previous = match state.read_untracked().payload(4) {
            Some(StepPayload::PricingQuantities(p)) => Some(p.clone()),
            _ => None,
        };
        if previous.is_some() {
            quantities_touched.set(true);
        }
        rows.set(build_rows(&colors, &sizes, previous.as_ref()));
        loading.set(false);
    });

    let submit = move || {
        let variant_rows: Vec<VariantRow> = rows
            .get_untracked()
            .iter()
            .map(|r| VariantRow {
                color_id: r.color_id,
                size: r.size.clone(),
                price: r.price.get_untracked().trim().parse().unwrap_or(0.0),
                quantity: r.quantity.get_untracked().trim().parse().unwrap_or(0),
            })
            .collect();

        // No variant grid (sizes step was skipped): nothing to price,
        // move on without a call like the other optional steps.
        if variant_rows.is_empty() {
            state.update(|s| {
                s.skip_step(4);
                s.advance();
            });
            return;
        }

        let payload = PricingQuantitiesPayload { rows: variant_rows };
        match payload.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }
        let Some(product_id) = state.read_untracked().product_id() else {
            error.set(Some("Create the product in step 1 first".to_string()));
            return;
        };
        error.set(None);

        // Quantities go out only when the user touched them and at least
        // one is non-zero; pricing always goes out.
        let quantities_needed = quantities_touched.get_untracked() && payload.any_quantity_set();
        submitting.set(true);

        spawn_local(async move {
            let mut progress = saga.get_untracked();

            if !progress.is_done("pricing") {
                let rules: Vec<PricingRule> = payload
                    .rows
                    .iter()
                    .map(|r| PricingRule {
                        color_id: r.color_id,
                        size: r.size.clone(),
                        price: r.price,
                    })
                    .collect();
                match api::bulk_add_pricing(product_id, &rules).await {
                    Ok(()) => {
                        progress.mark_done("pricing");
                        saga.set(progress.clone());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        submitting.set(false);
                        return;
                    }
                }
            }

            if quantities_needed && !progress.is_done("quantities") {
                let quantities: Vec<ProductQuantity> = payload
                    .rows
                    .iter()
                    .map(|r| ProductQuantity {
                        id: None,
                        color_id: r.color_id,
                        size: r.size.clone(),
                        quantity: r.quantity,
                    })
                    .collect();
                match api::bulk_add_quantities(product_id, &quantities).await {
                    Ok(()) => {
                        progress.mark_done("quantities");
                        saga.set(progress.clone());
                    }
                    Err(e) => {
                        let message = match progress.partial_note() {
                            Some(note) => format!("{} ({})", e, note),
                            None => e,
                        };
                        error.set(Some(message));
                        submitting.set(false);
                        return;
                    }
                }
            }

            state.update(|s| {
                s.complete_step(4, StepPayload::PricingQuantities(payload));
                s.advance();
            });
            submitting.set(false);
        });
    };

    view! {
        <div class="wizard-step">
            <h3 class="wizard-step__title">"Pricing & stock"</h3>
            <StepError error />
            <ValidationSummary errors=field_errors />

            {move || {
                if loading.get() {
                    return view! { <LoadingIndicator label="Loading variants..." /> }.into_any();
                }
                let list = rows.get();
                if list.is_empty() {
                    return view! {
                        <p class="wizard-step__hint">
                            "Attach at least one size in step 2 to price variants."
                        </p>
                    }
                    .into_any();
                }
                view! {
                    <table class="table table--compact">
                        <thead>
                            <tr>
                                <th>"Color"</th>
                                <th>"Size"</th>
                                <th>"Price"</th>
                                <th>"Quantity"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {list
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td>
                                                {if row.color_name.is_empty() {
                                                    "-".to_string()
                                                } else {
                                                    row.color_name.clone()
                                                }}
                                            </td>
                                            <td>{row.size.clone()}</td>
                                            <td>
                                                <TextField
                                                    value=row.price
                                                    input_type="number"
                                                    placeholder="0.00"
                                                />
                                            </td>
                                            <td>
                                                <TextField
                                                    value=row.quantity
                                                    input_type="number"
                                                    placeholder="0"
                                                    on_input=Callback::new(move |_| {
                                                        quantities_touched.set(true)
                                                    })
                                                />
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}

            <StepActions
                on_back=Callback::new(move |_| state.update(|s| s.retreat()))
                submitting
                on_submit=Callback::new(move |_| submit())
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn rows_cover_the_color_size_grid() {
        let navy = ColorId::new(Uuid::new_v4());
        let sand = ColorId::new(Uuid::new_v4());
        let rows = build_rows(
            &[(navy, "Navy".to_string()), (sand, "Sand".to_string())],
            &["S".to_string(), "M".to_string()],
            None,
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].color_id, Some(navy));
        assert_eq!(rows[0].size, "S");
        assert_eq!(rows[3].color_id, Some(sand));
        assert_eq!(rows[3].size, "M");
    }

    #[test]
    fn colorless_product_gets_one_row_per_size() {
        let rows = build_rows(&[], &["M".to_string()], None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].color_id, None);
    }

    #[test]
    fn previous_values_are_overlaid_by_variant() {
        let previous = PricingQuantitiesPayload {
            rows: vec![VariantRow {
                color_id: None,
                size: "M".to_string(),
                price: 19.5,
                quantity: 7,
            }],
        };
        let rows = build_rows(
            &[],
            &["S".to_string(), "M".to_string()],
            Some(&previous),
        );
        assert_eq!(rows[0].price.get_untracked(), "");
        assert_eq!(rows[1].price.get_untracked(), "19.5");
        assert_eq!(rows[1].quantity.get_untracked(), "7");
    }
}
