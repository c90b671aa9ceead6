//! Generic create/edit screen for a single record.
//!
//! One implementation serves every [`Entity`]: the record kind supplies the
//! schema, title field and blank defaults; the service persists; the
//! [`Interaction`] shows alerts, asks for confirmation and navigates.
//!
//! Ordering within a screen: validate, then persist, then navigate.

use std::marker::PhantomData;

use serde_json::Value;

use crate::environment::{CONFIRMAR_EXCLUSAO, REGISTRO_APAGADO, TEXTO_BOTAO_NOVO};
use crate::error::CoreError;
use crate::form::{FormController, SubmitIntent};
use crate::interaction::Interaction;
use crate::record::Entity;
use crate::routes::{AppRoute, RouteIdentity};
use crate::service::{RecordService, RequestError};
use crate::types::DbId;
use crate::validation::{validate_form, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Fetching an existing record (also the state before `mount`).
    LoadingExisting,
    /// Seeded with blank defaults, nothing edited yet.
    IdleNew,
    Editing,
    Saving,
    /// The screen navigated elsewhere; further input is ignored.
    NavigatedAway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors were applied to the form.
    Invalid(FieldErrors),
    Created(DbId),
    Updated,
    /// The service call failed; the user was alerted.
    Failed(RequestError),
    /// The screen was loading, saving or already gone.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed(RequestError),
    /// Nothing to delete while creating a record.
    Unavailable,
    Ignored,
}

/// Toolbar buttons shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailToolbar {
    pub new_button_text: &'static str,
    pub show_save: bool,
    pub show_save_and_close: bool,
    pub show_new: bool,
    pub show_delete: bool,
    pub show_back: bool,
    /// Inputs and buttons are disabled while a request is outstanding.
    pub disabled: bool,
}

pub struct DetailScreen<E, S, I> {
    identity: RouteIdentity,
    service: S,
    interaction: I,
    form: FormController,
    state: ScreenState,
    title: String,
    is_loading: bool,
    mounted: bool,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S, I> DetailScreen<E, S, I>
where
    E: Entity,
    S: RecordService<E>,
    I: Interaction,
{
    pub fn new(identity: RouteIdentity, service: S, interaction: I) -> Self {
        let state = match identity {
            RouteIdentity::New => ScreenState::IdleNew,
            RouteIdentity::Existing(_) => ScreenState::LoadingExisting,
        };
        Self {
            identity,
            service,
            interaction,
            form: FormController::new(),
            state,
            title: String::new(),
            is_loading: false,
            mounted: false,
            _entity: PhantomData,
        }
    }

    /// Build a screen from a route parameter (`nova` or a numeric id).
    pub fn from_param(param: &str, service: S, interaction: I) -> Result<Self, CoreError> {
        Ok(Self::new(param.parse()?, service, interaction))
    }

    // -- accessors ----------------------------------------------------------

    pub fn identity(&self) -> RouteIdentity {
        self.identity
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    /// Page title: the fixed new-record title while creating, otherwise the
    /// live value of the title field.
    pub fn title(&self) -> &str {
        match self.identity {
            RouteIdentity::New => E::NEW_TITLE,
            RouteIdentity::Existing(_) => &self.title,
        }
    }

    pub fn toolbar(&self) -> DetailToolbar {
        let existing = !self.identity.is_new();
        DetailToolbar {
            new_button_text: TEXTO_BOTAO_NOVO,
            show_save: true,
            show_save_and_close: true,
            show_new: existing,
            show_delete: existing,
            show_back: true,
            disabled: self.is_loading,
        }
    }

    fn accepts_input(&self) -> bool {
        self.mounted
            && !self.is_loading
            && !matches!(self.state, ScreenState::Saving | ScreenState::NavigatedAway)
    }

    fn leave(&mut self, route: AppRoute) {
        self.state = ScreenState::NavigatedAway;
        self.interaction.navigate(route);
    }

    // -- lifecycle ----------------------------------------------------------

    /// Seed the form (creating) or load the record (editing). Runs once.
    pub async fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        let id = match self.identity {
            RouteIdentity::New => {
                self.form.set_data(E::blank_form());
                self.state = ScreenState::IdleNew;
                return;
            }
            RouteIdentity::Existing(id) => id,
        };

        self.state = ScreenState::LoadingExisting;
        self.is_loading = true;
        let result = self.service.get_by_id(id).await;
        self.is_loading = false;

        match result {
            Ok(record) => {
                tracing::debug!(entity = E::NAME, id, "Record loaded");
                self.title = record.title().to_string();
                self.form.set_data(record.to_form());
                self.state = ScreenState::Editing;
            }
            Err(err) => {
                tracing::warn!(entity = E::NAME, id, error = %err, "Failed to load record");
                self.interaction.alert(err.message());
                self.leave(AppRoute::list::<E>());
            }
        }
    }

    /// Change one field as the user types.
    pub fn edit_field(&mut self, field: &str, value: Value) {
        if !self.accepts_input() {
            return;
        }
        if field == E::TITLE_FIELD {
            self.title = value.as_str().map(str::to_owned).unwrap_or_default();
        }
        self.form.set_field(field, value);
        self.state = ScreenState::Editing;
    }

    // -- submit -------------------------------------------------------------

    pub async fn save(&mut self) -> SubmitOutcome {
        self.submit(SubmitIntent::Save).await
    }

    pub async fn save_and_close(&mut self) -> SubmitOutcome {
        self.submit(SubmitIntent::SaveAndClose).await
    }

    pub async fn submit(&mut self, intent: SubmitIntent) -> SubmitOutcome {
        if !self.accepts_input() {
            return SubmitOutcome::Ignored;
        }
        let Some(raw) = self.form.begin_submit(intent) else {
            return SubmitOutcome::Ignored;
        };

        let draft = match validate_form::<E::Draft>(&raw) {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::debug!(entity = E::NAME, fields = ?errors.paths(), "Validation failed");
                self.form.set_errors(errors.clone());
                self.form.finish_submit();
                self.state = ScreenState::Editing;
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.state = ScreenState::Saving;
        self.is_loading = true;

        let outcome = match self.identity {
            RouteIdentity::New => self.persist_new(draft).await,
            RouteIdentity::Existing(id) => self.persist_existing(id, draft).await,
        };

        self.form.finish_submit();
        outcome
    }

    async fn persist_new(&mut self, draft: E::Draft) -> SubmitOutcome {
        let result = self.service.create(&draft).await;
        self.is_loading = false;

        match result {
            Ok(id) => {
                tracing::info!(entity = E::NAME, id, intent = ?self.form.intent(), "Record created");
                let route = if self.form.is_save_and_close() {
                    AppRoute::list::<E>()
                } else {
                    AppRoute::detail::<E>(RouteIdentity::Existing(id))
                };
                self.leave(route);
                SubmitOutcome::Created(id)
            }
            Err(err) => self.fail(err),
        }
    }

    async fn persist_existing(&mut self, id: DbId, draft: E::Draft) -> SubmitOutcome {
        let record = E::from_draft(id, draft);
        let result = self.service.update_by_id(id, &record).await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                tracing::info!(entity = E::NAME, id, intent = ?self.form.intent(), "Record updated");
                if self.form.is_save_and_close() {
                    self.leave(AppRoute::list::<E>());
                } else {
                    self.state = ScreenState::Editing;
                }
                SubmitOutcome::Updated
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: RequestError) -> SubmitOutcome {
        tracing::warn!(entity = E::NAME, error = %err, "Failed to save record");
        self.interaction.alert(err.message());
        self.state = ScreenState::Editing;
        SubmitOutcome::Failed(err)
    }

    // -- delete and navigation ------------------------------------------------

    /// Delete the record after the user confirms.
    pub async fn delete(&mut self) -> DeleteOutcome {
        let RouteIdentity::Existing(id) = self.identity else {
            return DeleteOutcome::Unavailable;
        };
        if !self.accepts_input() {
            return DeleteOutcome::Ignored;
        }
        if !self.interaction.confirm(CONFIRMAR_EXCLUSAO) {
            return DeleteOutcome::Cancelled;
        }

        self.is_loading = true;
        let result = self.service.delete_by_id(id).await;
        self.is_loading = false;

        match result {
            Ok(()) => {
                tracing::info!(entity = E::NAME, id, "Record deleted");
                self.interaction.alert(REGISTRO_APAGADO);
                self.leave(AppRoute::list::<E>());
                DeleteOutcome::Deleted
            }
            Err(err) => {
                tracing::warn!(entity = E::NAME, id, error = %err, "Failed to delete record");
                self.interaction.alert(err.message());
                DeleteOutcome::Failed(err)
            }
        }
    }

    /// Back to the listing.
    pub fn go_back(&mut self) {
        self.leave(AppRoute::list::<E>());
    }

    /// Open a blank detail screen for a new record.
    pub fn go_new(&mut self) {
        self.leave(AppRoute::detail::<E>(RouteIdentity::New));
    }
}
