//! Shared form-draft contract.
//!
//! Every console form keeps its inputs in one draft value inside an
//! `RwSignal`. Submitting validates the draft into a request body; a blank
//! required field stops the submit before any request is made. Once the
//! backend accepts the request the draft is cleared, and a failed request
//! leaves it as the operator typed it.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub trait FormDraft: Clone + Default {
    type Payload;

    /// Build the request body, or the alert text naming what is missing.
    ///
    /// # Errors
    ///
    /// Returns the message to show when a required field is blank or invalid.
    fn validate(&self) -> Result<Self::Payload, &'static str>;

    /// Draft to show after the backend accepted the submit.
    #[must_use]
    fn cleared(&self) -> Self {
        Self::default()
    }
}

/// Next draft once the backend answered.
pub fn settle<D: FormDraft>(draft: &D, accepted: bool) -> D {
    if accepted { draft.cleared() } else { draft.clone() }
}

/// Trimmed `value`, or `None` when it is blank.
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
