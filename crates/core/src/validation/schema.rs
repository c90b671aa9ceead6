//! Cast-then-validate pipeline shared by every schema.

use serde_json::Value;
use validator::Validate;

use super::locale;
use super::rules::{FieldErrors, FieldKind, FieldSpec};
use crate::types::{DbId, FormData};

/// A typed draft that can be produced from raw form data.
///
/// Implementors declare their fields in [`Schema::FIELDS`] (in display
/// order) and build themselves from the cast values. Format and length rules
/// live on the struct as `#[validate(...)]` attributes.
pub trait Schema: Validate + Sized {
    const FIELDS: &'static [FieldSpec];

    fn from_cast(values: &CastValues) -> Self;
}

/// Normalized field values produced by the cast phase.
///
/// Fields that failed to cast are absent; getters fall back to defaults so a
/// draft can still be built and the remaining fields validated.
#[derive(Debug, Clone, Default)]
pub struct CastValues(FormData);

impl CastValues {
    pub fn text(&self, path: &str) -> String {
        self.0
            .get(path)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_default()
    }

    pub fn integer(&self, path: &str) -> DbId {
        self.0.get(path).and_then(Value::as_i64).unwrap_or_default()
    }
}

/// Why a raw value could not be cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Required,
    NotANumber,
    NotText,
}

impl Rejection {
    fn message(self) -> &'static str {
        match self {
            Self::Required => locale::REQUIRED,
            Self::NotANumber => locale::NUMBER,
            Self::NotText => locale::TEXT,
        }
    }
}

/// Validate raw form data against a schema.
///
/// All fields are checked. On failure the returned set holds exactly one
/// message per failing field: presence and type problems first, then the
/// first failing derived rule.
pub fn validate_form<S: Schema>(data: &FormData) -> Result<S, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut cast = FormData::new();

    for spec in S::FIELDS {
        match cast_field(spec, data.get(spec.path)) {
            Ok(value) => {
                cast.insert(spec.path.to_string(), value);
            }
            Err(rejection) => errors.insert(spec.path, rejection.message()),
        }
    }

    let draft = S::from_cast(&CastValues(cast));

    if let Err(report) = draft.validate() {
        for (key, failures) in report.field_errors() {
            let key: &str = &key;
            let Some(spec) = S::FIELDS.iter().find(|spec| spec.matches_key(key)) else {
                continue;
            };
            if errors.contains(spec.path) {
                continue;
            }
            if let Some(first) = failures.first() {
                errors.insert(spec.path, locale::message_for(first));
            }
        }
    }

    if errors.is_empty() {
        Ok(draft)
    } else {
        Err(errors)
    }
}

fn cast_field(spec: &FieldSpec, raw: Option<&Value>) -> Result<Value, Rejection> {
    let cast = match spec.kind {
        FieldKind::Text => cast_text(raw)?,
        FieldKind::Integer => cast_integer(raw)?,
    };

    match cast {
        Some(value) => Ok(value),
        None if spec.required => Err(Rejection::Required),
        None => Ok(Value::Null),
    }
}

fn cast_text(raw: Option<&Value>) -> Result<Option<Value>, Rejection> {
    let text = match raw {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => return Err(Rejection::NotText),
    };

    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Value::String(text)))
    }
}

fn cast_integer(raw: Option<&Value>) -> Result<Option<Value>, Rejection> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|n| Some(Value::from(n)))
            .ok_or(Rejection::NotANumber),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<DbId>()
                .map(|n| Some(Value::from(n)))
                .map_err(|_| Rejection::NotANumber)
        }
        Some(_) => Err(Rejection::NotANumber),
    }
}
