//! Form validation engine.
//!
//! Schemas are declared with the `validator` derive on typed drafts. Raw
//! form data is first cast field by field (trimming, presence, numeric
//! parsing), then the derived rules run on the typed draft. Every field is
//! checked; each failing field contributes exactly one message.

pub mod locale;
pub mod rules;
pub mod schema;

pub use rules::{FieldErrors, FieldKind, FieldSpec};
pub use schema::{validate_form, CastValues, Schema};
