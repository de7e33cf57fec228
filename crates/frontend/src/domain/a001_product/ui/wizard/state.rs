//! Accumulated state of the product creation wizard.
//!
//! A forward-biased state machine over ten ordered steps with per-step
//! payload storage. The wizard page holds one instance in an `RwSignal`
//! and passes it down to the step components; there is no global
//! singleton. This type never touches the network.

use contracts::domain::a001_product::aggregate::ProductId;
use contracts::domain::a001_product::wizard::{StepPayload, STEP_COUNT};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct WizardState {
    current_step: u8,
    payloads: HashMap<u8, StepPayload>,
    completed: HashSet<u8>,
    product_id: Option<ProductId>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: 1,
            payloads: HashMap::new(),
            completed: HashSet::new(),
            product_id: None,
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    /// Identity assigned by the backend when step 1 submits. Steps 2-10
    /// must not issue any backend call before this is set.
    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn set_product_id(&mut self, id: ProductId) {
        self.product_id = Some(id);
    }

    pub fn payload(&self, step: u8) -> Option<&StepPayload> {
        self.payloads.get(&step)
    }

    pub fn is_completed(&self, step: u8) -> bool {
        self.completed.contains(&step)
    }

    /// Store a step's validated output and mark the step completed.
    /// Re-completing a step overwrites only that step's entry.
    pub fn complete_step(&mut self, step: u8, payload: StepPayload) {
        self.payloads.insert(step, payload);
        self.completed.insert(step);
    }

    /// Mark a step completed without storing a payload. Used by the
    /// zero-call paths of the optional steps so a skipped step still
    /// shows as done and stays reachable through `jump_to`.
    pub fn skip_step(&mut self, step: u8) {
        self.completed.insert(step);
    }

    pub fn advance(&mut self) {
        if self.current_step < STEP_COUNT {
            self.current_step += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Jump only backwards or to an already-completed step; skipping ahead
    /// into unvalidated steps is a no-op.
    pub fn jump_to(&mut self, step: u8) {
        if step < 1 || step > STEP_COUNT {
            return;
        }
        if self.completed.contains(&step) || step <= self.current_step {
            self.current_step = step;
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::wizard::{BasicInfoPayload, SizesPayload};
    use uuid::Uuid;

    fn basic(title: &str) -> StepPayload {
        StepPayload::BasicInfo(BasicInfoPayload {
            title: title.to_string(),
            sku: "S1".to_string(),
            base_price: 10.0,
            published: false,
            ..Default::default()
        })
    }

    #[test]
    fn starts_at_step_one_without_identity() {
        let state = WizardState::new();
        assert_eq!(state.current_step(), 1);
        assert!(state.product_id().is_none());
        assert!(!state.is_completed(1));
    }

    #[test]
    fn advance_and_retreat_are_bounded() {
        let mut state = WizardState::new();
        state.retreat();
        assert_eq!(state.current_step(), 1);
        for _ in 0..20 {
            state.advance();
        }
        assert_eq!(state.current_step(), STEP_COUNT);
    }

    #[test]
    fn jump_backwards_is_always_allowed() {
        let mut state = WizardState::new();
        state.advance();
        state.advance();
        state.jump_to(1);
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn jump_ahead_requires_completion() {
        let mut state = WizardState::new();
        state.jump_to(5);
        assert_eq!(state.current_step(), 1);

        state.complete_step(5, basic("T"));
        state.jump_to(5);
        assert_eq!(state.current_step(), 5);
    }

    #[test]
    fn jump_out_of_range_is_a_no_op() {
        let mut state = WizardState::new();
        state.jump_to(0);
        state.jump_to(11);
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn completing_twice_overwrites_only_that_step() {
        let mut state = WizardState::new();
        state.complete_step(1, basic("first"));
        state.complete_step(
            2,
            StepPayload::Sizes(SizesPayload {
                sizes: vec!["M".to_string()],
            }),
        );
        state.complete_step(1, basic("second"));

        match state.payload(1) {
            Some(StepPayload::BasicInfo(p)) => assert_eq!(p.title, "second"),
            other => panic!("unexpected payload: {:?}", other),
        }
        match state.payload(2) {
            Some(StepPayload::Sizes(p)) => assert_eq!(p.sizes, vec!["M".to_string()]),
            other => panic!("unexpected payload: {:?}", other),
        }
        assert!(state.is_completed(1));
        assert!(state.is_completed(2));
    }

    #[test]
    fn skipped_step_is_done_and_jumpable_but_has_no_payload() {
        let mut state = WizardState::new();
        state.skip_step(2);
        state.advance();
        state.advance();
        state.jump_to(1);
        assert!(state.is_completed(2));
        assert!(state.payload(2).is_none());

        state.jump_to(2);
        assert_eq!(state.current_step(), 2);
    }

    #[test]
    fn product_identity_is_recorded_once_set() {
        let mut state = WizardState::new();
        let id = ProductId::new(Uuid::new_v4());
        state.set_product_id(id);
        assert_eq!(state.product_id(), Some(id));
    }
}
