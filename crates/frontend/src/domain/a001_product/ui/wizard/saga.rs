//! Partial-success bookkeeping for steps that issue more than one backend
//! call in sequence (pricing then quantities, upload then image save).
//!
//! A failed second call leaves the first write persisted; instead of
//! silently re-issuing it on resubmission, the step records which calls
//! are done, skips them next time, and tells the user what already stuck.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct StepSaga {
    done: BTreeSet<&'static str>,
}

impl StepSaga {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_done(&mut self, call: &'static str) {
        self.done.insert(call);
    }

    pub fn is_done(&self, call: &'static str) -> bool {
        self.done.contains(call)
    }

    pub fn reset(&mut self) {
        self.done.clear();
    }

    /// Note appended to a failure message, e.g. "already saved: pricing".
    pub fn partial_note(&self) -> Option<String> {
        if self.done.is_empty() {
            None
        } else {
            let done: Vec<&str> = self.done.iter().copied().collect();
            Some(format!("already saved: {}", done.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_saga_has_nothing_done() {
        let saga = StepSaga::new();
        assert!(!saga.is_done("pricing"));
        assert_eq!(saga.partial_note(), None);
    }

    #[test]
    fn resubmission_skips_completed_call() {
        let mut saga = StepSaga::new();
        saga.mark_done("pricing");
        assert!(saga.is_done("pricing"));
        assert!(!saga.is_done("quantities"));
        assert_eq!(
            saga.partial_note().as_deref(),
            Some("already saved: pricing")
        );
    }

    #[test]
    fn reset_clears_recorded_calls() {
        let mut saga = StepSaga::new();
        saga.mark_done("pricing");
        saga.mark_done("quantities");
        saga.reset();
        assert!(!saga.is_done("pricing"));
        assert_eq!(saga.partial_note(), None);
    }
}
