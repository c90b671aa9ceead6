//! Record kinds and their drafts.
//!
//! A record is its draft plus the id assigned by the backing store. Drafts
//! carry the validation rules; records are what travels on the wire.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::types::{DbId, FormData};
use crate::validation::{CastValues, FieldKind, FieldSpec, Schema};

/// A record kind with its own schema, service and screens.
pub trait Entity:
    Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Schema + Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync;

    /// Route and wire segment, e.g. `cidades`.
    const RESOURCE: &'static str;
    /// Name used in logs and not-found errors.
    const NAME: &'static str;
    /// Field whose value titles the detail screen and is used for filtering.
    const TITLE_FIELD: &'static str;
    /// Title of the detail screen while creating a record.
    const NEW_TITLE: &'static str;

    fn id(&self) -> DbId;

    fn title(&self) -> &str;

    fn from_draft(id: DbId, draft: Self::Draft) -> Self;

    fn into_draft(self) -> Self::Draft;

    /// Field values seeded into the form when creating a record.
    fn blank_form() -> FormData;

    fn to_form(&self) -> FormData {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => FormData::new(),
        }
    }

    /// Case-insensitive substring match on the title field.
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim();
        filter.is_empty() || self.title().to_lowercase().contains(&filter.to_lowercase())
    }
}

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: DbId,
    pub nome: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CityDraft {
    #[validate(length(min = 3))]
    pub nome: String,
}

impl Schema for CityDraft {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("nome", "nome", FieldKind::Text)];

    fn from_cast(values: &CastValues) -> Self {
        Self {
            nome: values.text("nome"),
        }
    }
}

impl Entity for City {
    type Draft = CityDraft;

    const RESOURCE: &'static str = "cidades";
    const NAME: &'static str = "City";
    const TITLE_FIELD: &'static str = "nome";
    const NEW_TITLE: &'static str = "Nova Cidade";

    fn id(&self) -> DbId {
        self.id
    }

    fn title(&self) -> &str {
        &self.nome
    }

    fn from_draft(id: DbId, draft: CityDraft) -> Self {
        Self {
            id,
            nome: draft.nome,
        }
    }

    fn into_draft(self) -> CityDraft {
        CityDraft { nome: self.nome }
    }

    fn blank_form() -> FormData {
        let mut form = FormData::new();
        form.insert("nome".into(), Value::from(""));
        form
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: DbId,
    pub nome_completo: String,
    pub email: String,
    pub cidade_id: DbId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    #[validate(length(min = 3))]
    pub nome_completo: String,
    #[validate(email)]
    pub email: String,
    pub cidade_id: DbId,
}

impl Schema for PersonDraft {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("nomeCompleto", "nome_completo", FieldKind::Text),
        FieldSpec::required("email", "email", FieldKind::Text),
        FieldSpec::required("cidadeId", "cidade_id", FieldKind::Integer),
    ];

    fn from_cast(values: &CastValues) -> Self {
        Self {
            nome_completo: values.text("nomeCompleto"),
            email: values.text("email"),
            cidade_id: values.integer("cidadeId"),
        }
    }
}

impl Entity for Person {
    type Draft = PersonDraft;

    const RESOURCE: &'static str = "pessoas";
    const NAME: &'static str = "Person";
    const TITLE_FIELD: &'static str = "nomeCompleto";
    const NEW_TITLE: &'static str = "Nova Pessoa";

    fn id(&self) -> DbId {
        self.id
    }

    fn title(&self) -> &str {
        &self.nome_completo
    }

    fn from_draft(id: DbId, draft: PersonDraft) -> Self {
        Self {
            id,
            nome_completo: draft.nome_completo,
            email: draft.email,
            cidade_id: draft.cidade_id,
        }
    }

    fn into_draft(self) -> PersonDraft {
        PersonDraft {
            nome_completo: self.nome_completo,
            email: self.email,
            cidade_id: self.cidade_id,
        }
    }

    fn blank_form() -> FormData {
        let mut form = FormData::new();
        form.insert("nomeCompleto".into(), Value::from(""));
        form.insert("email".into(), Value::from(""));
        form.insert("cidadeId".into(), Value::Null);
        form
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::validation::{locale, validate_form};

    fn form(value: Value) -> FormData {
        match value {
            Value::Object(map) => map,
            _ => panic!("form fixture must be an object"),
        }
    }

    // -- City ---------------------------------------------------------------

    #[test]
    fn city_short_name_fails_with_min_length_message() {
        let errors = validate_form::<CityDraft>(&form(json!({ "nome": "ab" }))).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("nome"), Some("O campo precisa ter pelo menos 3 caracteres"));
    }

    #[test]
    fn city_missing_name_is_required() {
        let errors = validate_form::<CityDraft>(&FormData::new()).unwrap_err();
        assert_eq!(errors.get("nome"), Some(locale::REQUIRED));
    }

    #[test]
    fn city_blank_form_reports_required_not_length() {
        let errors = validate_form::<CityDraft>(&City::blank_form()).unwrap_err();
        assert_eq!(errors.get("nome"), Some(locale::REQUIRED));
    }

    #[test]
    fn city_valid_name_is_trimmed() {
        let draft = validate_form::<CityDraft>(&form(json!({ "nome": "  Springfield " }))).unwrap();
        assert_eq!(draft.nome, "Springfield");
    }

    #[test]
    fn city_length_is_checked_after_trimming() {
        let errors = validate_form::<CityDraft>(&form(json!({ "nome": " ab  " }))).unwrap_err();
        assert!(errors.contains("nome"));
    }

    // -- Person -------------------------------------------------------------

    #[test]
    fn person_aggregates_one_error_per_failing_field() {
        let data = form(json!({ "nomeCompleto": "Al", "email": "not-an-email", "cidadeId": null }));
        let errors = validate_form::<PersonDraft>(&data).unwrap_err();

        assert_eq!(errors.paths(), vec!["cidadeId", "email", "nomeCompleto"]);
        assert_eq!(errors.get("nomeCompleto"), Some("O campo precisa ter pelo menos 3 caracteres"));
        assert_eq!(errors.get("email"), Some(locale::EMAIL));
        assert_eq!(errors.get("cidadeId"), Some(locale::REQUIRED));
    }

    #[test]
    fn person_blank_form_reports_every_field_as_required() {
        let errors = validate_form::<PersonDraft>(&Person::blank_form()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|(_, message)| message == locale::REQUIRED));
    }

    #[test]
    fn person_non_numeric_city_is_a_type_error() {
        let data = form(json!({ "nomeCompleto": "Ana Maria", "email": "ana@example.com", "cidadeId": "x" }));
        let errors = validate_form::<PersonDraft>(&data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("cidadeId"), Some(locale::NUMBER));
    }

    #[test]
    fn person_valid_data_is_typed() {
        let data = form(json!({ "nomeCompleto": "Ana Maria", "email": " ana@example.com ", "cidadeId": "7" }));
        let draft = validate_form::<PersonDraft>(&data).unwrap();
        assert_eq!(
            draft,
            PersonDraft {
                nome_completo: "Ana Maria".into(),
                email: "ana@example.com".into(),
                cidade_id: 7,
            }
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let data = form(json!({ "id": 4, "nome": "Olinda", "extra": true }));
        assert!(validate_form::<CityDraft>(&data).is_ok());
    }

    // -- Entity helpers -----------------------------------------------------

    #[test]
    fn person_form_uses_wire_names() {
        let person = Person {
            id: 3,
            nome_completo: "Ana".into(),
            email: "ana@example.com".into(),
            cidade_id: 2,
        };
        let form = person.to_form();
        assert_eq!(form["nomeCompleto"], json!("Ana"));
        assert_eq!(form["cidadeId"], json!(2));
        assert_eq!(form["id"], json!(3));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let city = City { id: 1, nome: "Porto Alegre".into() };
        assert!(city.matches_filter("alegre"));
        assert!(city.matches_filter(""));
        assert!(!city.matches_filter("recife"));
    }
}
