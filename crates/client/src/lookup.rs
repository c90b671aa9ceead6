//! City autocomplete used by the person form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cadastros_core::record::City;
use cadastros_core::service::{ListQuery, RecordService};
use cadastros_core::types::DbId;

/// Form field bound to the selected city.
pub const CITY_FIELD: &str = "cidadeId";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityOption {
    pub id: DbId,
    pub label: String,
}

impl From<City> for CityOption {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            label: city.nome,
        }
    }
}

pub struct CityLookup<S> {
    service: S,
    options: Vec<CityOption>,
    selected: Option<CityOption>,
    is_loading: bool,
}

impl<S: RecordService<City>> CityLookup<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            options: Vec::new(),
            selected: None,
            is_loading: false,
        }
    }

    pub fn options(&self) -> &[CityOption] {
        &self.options
    }

    pub fn selected(&self) -> Option<&CityOption> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Value to bind into the form's `cidadeId` field.
    pub fn value(&self) -> Value {
        self.selected
            .as_ref()
            .map_or(Value::Null, |option| Value::from(option.id))
    }

    /// Replace the options with the first page of cities matching `text`.
    /// A failed search leaves no options.
    pub async fn search(&mut self, text: &str) -> &[CityOption] {
        self.is_loading = true;
        let result = self.service.list(&ListQuery::new(1, text)).await;
        self.is_loading = false;

        self.options = match result {
            Ok(page) => page.items.into_iter().map(CityOption::from).collect(),
            Err(err) => {
                tracing::warn!(search = text, error = %err, "City search failed");
                Vec::new()
            }
        };
        &self.options
    }

    pub fn select(&mut self, option: Option<CityOption>) -> Value {
        self.selected = option;
        self.value()
    }

    /// Show the label of a city already held by the form. An unknown id
    /// clears the selection.
    pub async fn sync(&mut self, id: Option<DbId>) {
        let Some(id) = id else {
            self.selected = None;
            return;
        };
        if self.selected.as_ref().is_some_and(|option| option.id == id) {
            return;
        }

        self.is_loading = true;
        let result = self.service.get_by_id(id).await;
        self.is_loading = false;

        self.selected = match result {
            Ok(city) => Some(city.into()),
            Err(err) => {
                tracing::warn!(id, error = %err, "Selected city could not be loaded");
                None
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cadastros_core::record::CityDraft;
    use cadastros_core::service::MemoryRecordService;

    use super::*;

    fn cities(names: &[&str]) -> Arc<MemoryRecordService<City>> {
        let service = Arc::new(MemoryRecordService::new());
        service.seed(names.iter().map(|n| CityDraft { nome: n.to_string() }));
        service
    }

    #[tokio::test]
    async fn search_lists_matching_cities_as_options() {
        let mut lookup = CityLookup::new(cities(&["Recife", "Olinda", "Rio Branco"]));

        let labels: Vec<String> = lookup
            .search("r")
            .await
            .iter()
            .map(|o| o.label.clone())
            .collect();

        assert_eq!(labels, vec!["Recife", "Rio Branco"]);
    }

    #[tokio::test]
    async fn failed_search_yields_no_options() {
        let service = cities(&["Recife"]);
        let mut lookup = CityLookup::new(Arc::clone(&service));
        lookup.search("").await;

        service.fail_next("offline");
        assert!(lookup.search("rec").await.is_empty());
    }

    #[tokio::test]
    async fn select_binds_id_into_form_value() {
        let mut lookup = CityLookup::new(cities(&[]));
        let value = lookup.select(Some(CityOption { id: 4, label: "Natal".into() }));
        assert_eq!(value, Value::from(4));
        assert_eq!(lookup.select(None), Value::Null);
    }

    #[tokio::test]
    async fn sync_fetches_label_once() {
        let service = cities(&["Recife", "Olinda"]);
        let mut lookup = CityLookup::new(Arc::clone(&service));

        lookup.sync(Some(2)).await;
        lookup.sync(Some(2)).await;

        assert_eq!(lookup.selected().map(|o| o.label.as_str()), Some("Olinda"));
        assert_eq!(service.calls().get_by_id, 1);
    }

    #[tokio::test]
    async fn sync_with_unknown_id_clears_selection() {
        let mut lookup = CityLookup::new(cities(&["Recife"]));
        lookup.select(Some(CityOption { id: 1, label: "Recife".into() }));

        lookup.sync(Some(99)).await;

        assert_eq!(lookup.selected(), None);
    }
}
