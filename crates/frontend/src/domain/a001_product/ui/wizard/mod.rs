//! Ten-step product creation wizard.
//!
//! The page owns one `WizardState` signal and renders the step component
//! for the current step. Each step validates locally, performs its own
//! backend call (or skips it, per its gate), then marks itself completed
//! and advances. The step list doubles as navigation: backwards and to
//! completed steps only.

pub mod saga;
pub mod state;
pub mod steps;

use leptos::prelude::*;

use contracts::domain::a001_product::wizard::STEP_COUNT;
use state::WizardState;
use steps::basic_info::StepBasicInfo;
use steps::colors::StepColors;
use steps::faqs::StepFaqs;
use steps::features::StepFeatures;
use steps::images::StepImages;
use steps::metatags::StepMetatags;
use steps::pricing::StepPricing;
use steps::review::StepReview;
use steps::sizes::StepSizes;
use steps::videos::StepVideos;

pub fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Basic info",
        2 => "Sizes",
        3 => "Colors",
        4 => "Pricing & stock",
        5 => "Images",
        6 => "Videos",
        7 => "Features",
        8 => "Metatags",
        9 => "FAQs",
        _ => "Review",
    }
}

#[component]
pub fn ProductWizard() -> impl IntoView {
    let state = RwSignal::new(WizardState::new());

    view! {
        <div class="page page--wizard">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"New product"</h1>
                    {move || {
                        state
                            .read()
                            .product_id()
                            .map(|id| {
                                view! { <span class="header__subtitle">{format!("#{}", id)}</span> }
                            })
                    }}
                </div>
            </div>

            <div class="wizard">
                <ol class="wizard__steps">
                    {(1..=STEP_COUNT)
                        .map(|step| {
                            view! {
                                <li
                                    class="wizard__step"
                                    class:wizard__step--active=move || {
                                        state.read().current_step() == step
                                    }
                                    class:wizard__step--done=move || state.read().is_completed(step)
                                    on:click=move |_| state.update(|s| s.jump_to(step))
                                >
                                    <span class="wizard__step-number">{step}</span>
                                    <span class="wizard__step-title">{step_title(step)}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>

                <div class="wizard__body">
                    {move || match state.read().current_step() {
                        1 => view! { <StepBasicInfo state /> }.into_any(),
                        2 => view! { <StepSizes state /> }.into_any(),
                        3 => view! { <StepColors state /> }.into_any(),
                        4 => view! { <StepPricing state /> }.into_any(),
                        5 => view! { <StepImages state /> }.into_any(),
                        6 => view! { <StepVideos state /> }.into_any(),
                        7 => view! { <StepFeatures state /> }.into_any(),
                        8 => view! { <StepMetatags state /> }.into_any(),
                        9 => view! { <StepFaqs state /> }.into_any(),
                        _ => view! { <StepReview state /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_step_has_a_title() {
        for step in 1..=STEP_COUNT {
            assert!(!step_title(step).is_empty());
        }
        assert_eq!(step_title(1), "Basic info");
        assert_eq!(step_title(10), "Review");
    }
}
