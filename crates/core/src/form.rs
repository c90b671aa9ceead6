//! Form controller: field values, field errors and the submit intent.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::FormData;
use crate::validation::FieldErrors;

/// Which toolbar button started a submission. Affects navigation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitIntent {
    Save,
    SaveAndClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No data seeded yet.
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    data: FormData,
    errors: FieldErrors,
    intent: Option<SubmitIntent>,
}

impl Default for FormController {
    fn default() -> Self {
        Self {
            state: FormState::Idle,
            data: FormData::new(),
            errors: FieldErrors::new(),
            intent: None,
        }
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    /// Seed every bound field. Previous errors are dropped.
    pub fn set_data(&mut self, data: FormData) {
        self.data = data;
        self.errors = FieldErrors::new();
        if self.state == FormState::Idle {
            self.state = FormState::Editing;
        }
    }

    /// Change one field. Clears that field's error.
    pub fn set_field(&mut self, field: &str, value: Value) {
        self.data.insert(field.to_string(), value);
        self.errors.remove(field);
        if self.state == FormState::Idle {
            self.state = FormState::Editing;
        }
    }

    /// Annotate fields with errors. Values are left untouched.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    pub fn save(&mut self) -> Option<FormData> {
        self.begin_submit(SubmitIntent::Save)
    }

    pub fn save_and_close(&mut self) -> Option<FormData> {
        self.begin_submit(SubmitIntent::SaveAndClose)
    }

    /// Start a submission with `intent` and hand back a snapshot of the raw
    /// data for validation. `None` before any data was seeded or while a
    /// submission is already running.
    pub fn begin_submit(&mut self, intent: SubmitIntent) -> Option<FormData> {
        if matches!(self.state, FormState::Idle | FormState::Submitting) {
            return None;
        }
        self.intent = Some(intent);
        self.state = FormState::Submitting;
        Some(self.data.clone())
    }

    /// Intent of the most recent submission.
    pub fn intent(&self) -> Option<SubmitIntent> {
        self.intent
    }

    pub fn is_save_and_close(&self) -> bool {
        self.intent == Some(SubmitIntent::SaveAndClose)
    }

    pub fn finish_submit(&mut self) {
        if self.state == FormState::Submitting {
            self.state = FormState::Editing;
        }
    }
}
