//! Paged, filterable listing of one record kind.

use std::marker::PhantomData;

use crate::environment::{
    CONFIRMAR_EXCLUSAO, INPUT_DE_BUSCA, LISTAGEM_VAZIA, REGISTRO_APAGADO, TEXTO_BOTAO_NOVO,
};
use crate::interaction::Interaction;
use crate::record::Entity;
use crate::routes::{AppRoute, RouteIdentity};
use crate::service::{page_count, ListQuery, RecordService, RequestError};
use crate::types::DbId;

/// Search box and "new" button above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingToolbar {
    pub search_text: String,
    pub show_search: bool,
    pub search_placeholder: &'static str,
    pub new_button_text: &'static str,
    pub show_new: bool,
}

pub struct ListingScreen<E, S, I> {
    service: S,
    interaction: I,
    search: String,
    page: u32,
    page_size: u32,
    rows: Vec<E>,
    total_count: u64,
    is_loading: bool,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S, I> ListingScreen<E, S, I>
where
    E: Entity,
    S: RecordService<E>,
    I: Interaction,
{
    pub fn new(service: S, interaction: I, page_size: u32) -> Self {
        Self {
            service,
            interaction,
            search: String::new(),
            page: 1,
            page_size,
            rows: Vec::new(),
            total_count: 0,
            is_loading: false,
            _entity: PhantomData,
        }
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    pub fn page_count(&self) -> u64 {
        page_count(self.total_count, self.page_size)
    }

    /// Message to show instead of the table when nothing matched.
    pub fn empty_message(&self) -> Option<&'static str> {
        (!self.is_loading && self.total_count == 0).then_some(LISTAGEM_VAZIA)
    }

    pub fn toolbar(&self) -> ListingToolbar {
        ListingToolbar {
            search_text: self.search.clone(),
            show_search: true,
            search_placeholder: INPUT_DE_BUSCA,
            new_button_text: TEXTO_BOTAO_NOVO,
            show_new: true,
        }
    }

    /// Fetch the current page. On failure the user is alerted and the
    /// previous rows are kept.
    pub async fn load(&mut self) -> Result<(), RequestError> {
        self.is_loading = true;
        let query = ListQuery::new(self.page, self.search.clone());
        let result = self.service.list(&query).await;
        self.is_loading = false;

        match result {
            Ok(page) => {
                tracing::debug!(
                    entity = E::NAME,
                    page = self.page,
                    total = page.total_count,
                    "Listing loaded"
                );
                self.rows = page.items;
                self.total_count = page.total_count;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = E::NAME, error = %err, "Failed to load listing");
                self.interaction.alert(err.message());
                Err(err)
            }
        }
    }

    /// Change the search text. Resets to the first page and reloads.
    pub async fn set_search(&mut self, text: impl Into<String>) -> Result<(), RequestError> {
        self.search = text.into();
        self.page = 1;
        self.load().await
    }

    pub async fn set_page(&mut self, page: u32) -> Result<(), RequestError> {
        self.page = page.max(1);
        self.load().await
    }

    /// Delete a row after confirmation. The row is removed locally on
    /// success; returns whether it was deleted.
    pub async fn delete_row(&mut self, id: DbId) -> bool {
        if !self.interaction.confirm(CONFIRMAR_EXCLUSAO) {
            return false;
        }

        match self.service.delete_by_id(id).await {
            Ok(()) => {
                tracing::info!(entity = E::NAME, id, "Record deleted from listing");
                self.rows.retain(|row| row.id() != id);
                self.total_count = self.total_count.saturating_sub(1);
                self.interaction.alert(REGISTRO_APAGADO);
                true
            }
            Err(err) => {
                tracing::warn!(entity = E::NAME, id, error = %err, "Failed to delete record");
                self.interaction.alert(err.message());
                false
            }
        }
    }

    pub fn edit_row(&mut self, id: DbId) {
        self.interaction
            .navigate(AppRoute::detail::<E>(RouteIdentity::Existing(id)));
    }

    pub fn go_new(&mut self) {
        self.interaction
            .navigate(AppRoute::detail::<E>(RouteIdentity::New));
    }
}
