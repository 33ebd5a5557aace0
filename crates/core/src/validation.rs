//! Field-level validation.
//!
//! Validators push one [`FieldViolation`] per broken constraint; the collected
//! set renders into a single message (sorted, comma-joined) so the wire format
//! is deterministic regardless of check order.

use crate::error::{DomainError, DomainResult};

/// A single broken field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Accumulates violations for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    items: Vec<FieldViolation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless `ok` holds.
    ///
    /// A field is reported at most once.
    pub fn check(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if ok || self.items.iter().any(|v| v.field == field) {
            return;
        }
        self.items.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[FieldViolation] {
        &self.items
    }

    /// Render as `a,b,c` (messages sorted).
    pub fn render(&self) -> String {
        let mut messages: Vec<&str> = self.items.iter().map(|v| v.message).collect();
        messages.sort_unstable();
        messages.join(",")
    }

    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.render()))
        }
    }
}
