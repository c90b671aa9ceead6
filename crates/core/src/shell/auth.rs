//! Authentication session and the login form schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::FormData;
use crate::validation::{validate_form, CastValues, FieldErrors, FieldKind, FieldSpec, Schema};

/// Validated login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginDraft {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 5))]
    pub password: String,
}

impl Schema for LoginDraft {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("email", "email", FieldKind::Text),
        FieldSpec::required("password", "password", FieldKind::Text),
    ];

    fn from_cast(values: &CastValues) -> Self {
        Self {
            email: values.text("email"),
            password: values.text("password"),
        }
    }
}

/// Holds the access token of the signed-in user, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    access_token: Option<String>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Validate the login form and, when valid, sign in with the token the
    /// caller obtained for those credentials.
    pub fn login(
        &mut self,
        form: &FormData,
        issue_token: impl FnOnce(&LoginDraft) -> Option<String>,
    ) -> Result<bool, FieldErrors> {
        let draft = validate_form::<LoginDraft>(form)?;
        match issue_token(&draft) {
            Some(token) => {
                tracing::info!(email = %draft.email, "Signed in");
                self.access_token = Some(token);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn logout(&mut self) {
        if self.access_token.take().is_some() {
            tracing::info!("Signed out");
        }
    }
}
