//! Portuguese messages for validation failures.

use serde_json::Value;
use validator::ValidationError;

pub const REQUIRED: &str = "O campo é obrigatório";
pub const INVALID: &str = "Campo não é válido";
pub const EMAIL: &str = "O campo precisa conter um email válido";
pub const NUMBER: &str = "O campo precisa ser um número";
pub const TEXT: &str = "O campo precisa ser um texto";

pub fn min_length(min: u64) -> String {
    format!("O campo precisa ter pelo menos {min} caracteres")
}

/// Translate a rule failure reported by the `validator` derive.
///
/// An explicit `message` on the rule wins over the locale table.
pub fn message_for(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "length" => match error.params.get("min").and_then(Value::as_u64) {
            Some(min) => min_length(min),
            None => INVALID.to_string(),
        },
        "email" => EMAIL.to_string(),
        "required" => REQUIRED.to_string(),
        _ => INVALID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;

    #[test]
    fn length_below_min_uses_min_message() {
        let mut error = ValidationError::new("length");
        error.add_param(Cow::from("min"), &3u64);
        error.add_param(Cow::from("value"), &"ab");
        assert_eq!(message_for(&error), "O campo precisa ter pelo menos 3 caracteres");
    }

    #[test]
    fn explicit_message_wins() {
        let error = ValidationError::new("length").with_message(Cow::from("custom"));
        assert_eq!(message_for(&error), "custom");
    }

    #[test]
    fn unknown_code_falls_back_to_generic() {
        let error = ValidationError::new("range");
        assert_eq!(message_for(&error), INVALID);
    }
}
