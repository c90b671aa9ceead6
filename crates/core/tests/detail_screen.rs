//! Behaviour of the generic detail screen against the in-memory service.

use std::sync::Arc;

use assert_matches::assert_matches;
use serde_json::json;

use cadastros_core::detail::{DeleteOutcome, DetailScreen, ScreenState, SubmitOutcome};
use cadastros_core::environment::{CONFIRMAR_EXCLUSAO, REGISTRO_APAGADO};
use cadastros_core::form::FormState;
use cadastros_core::interaction::Recorder;
use cadastros_core::record::{City, CityDraft, Person};
use cadastros_core::routes::{AppRoute, RouteIdentity};
use cadastros_core::service::MemoryRecordService;
use cadastros_core::validation::locale;

type CityScreen = DetailScreen<City, Arc<MemoryRecordService<City>>, Recorder>;

fn city_service(names: &[&str]) -> Arc<MemoryRecordService<City>> {
    let service = Arc::new(MemoryRecordService::<City>::new());
    service.seed(names.iter().map(|n| CityDraft { nome: n.to_string() }));
    service
}

async fn mounted(identity: RouteIdentity, service: &Arc<MemoryRecordService<City>>) -> CityScreen {
    let mut screen = DetailScreen::new(identity, Arc::clone(service), Recorder::new());
    screen.mount().await;
    screen
}

// ---------------------------------------------------------------------------
// Mount
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mount_new_seeds_blank_form_without_network() {
    let service = city_service(&[]);
    let screen = mounted(RouteIdentity::New, &service).await;

    assert_eq!(screen.state(), ScreenState::IdleNew);
    assert_eq!(screen.form().value("nome"), Some(&json!("")));
    assert_eq!(screen.title(), "Nova Cidade");
    assert_eq!(service.calls().total(), 0);
}

#[tokio::test]
async fn mount_existing_populates_form_and_title() {
    let service = city_service(&["Recife"]);
    let screen = mounted(RouteIdentity::Existing(1), &service).await;

    assert_eq!(screen.state(), ScreenState::Editing);
    assert_eq!(screen.title(), "Recife");
    assert_eq!(screen.form().value("nome"), Some(&json!("Recife")));
    assert!(!screen.is_loading());
    assert_eq!(service.calls().get_by_id, 1);
}

#[tokio::test]
async fn mount_failure_alerts_and_returns_to_list() {
    let service = city_service(&["Recife"]);
    service.fail_next("Erro ao consultar o registro.");

    let screen = mounted(RouteIdentity::Existing(1), &service).await;

    assert_eq!(screen.interaction().alerts, vec!["Erro ao consultar o registro."]);
    assert_eq!(screen.interaction().navigations(), &[AppRoute::List("cidades")]);
    assert_eq!(screen.form().state(), FormState::Idle);
    assert!(screen.form().data().is_empty());
    assert_eq!(screen.state(), ScreenState::NavigatedAway);
}

#[tokio::test]
async fn mount_missing_record_alerts() {
    let service = city_service(&[]);
    let screen = mounted(RouteIdentity::Existing(42), &service).await;

    assert_eq!(screen.interaction().alerts.len(), 1);
    assert_eq!(screen.interaction().router.current_path(), "/cidades");
}

#[tokio::test]
async fn mount_runs_once() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.mount().await;
    assert_eq!(service.calls().get_by_id, 1);
}

// ---------------------------------------------------------------------------
// Submit: validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_name_fails_validation_without_service_call() {
    let service = city_service(&[]);
    let mut screen = mounted(RouteIdentity::New, &service).await;
    screen.edit_field("nome", json!("ab"));

    let outcome = screen.save().await;

    let errors = assert_matches!(outcome, SubmitOutcome::Invalid(errors) => errors);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("nome"), Some("O campo precisa ter pelo menos 3 caracteres"));
    assert_eq!(screen.form().error("nome"), errors.get("nome"));
    assert_eq!(screen.state(), ScreenState::Editing);
    assert_eq!(service.calls().total(), 0);
    assert!(screen.interaction().navigations().is_empty());
}

#[tokio::test]
async fn person_errors_are_aggregated_on_the_form() {
    let service = Arc::new(MemoryRecordService::<Person>::new());
    let mut screen =
        DetailScreen::<Person, _, _>::new(RouteIdentity::New, Arc::clone(&service), Recorder::new());
    screen.mount().await;
    screen.edit_field("nomeCompleto", json!("Jo"));
    screen.edit_field("email", json!("jo-at-example"));

    let outcome = screen.save_and_close().await;

    let errors = assert_matches!(outcome, SubmitOutcome::Invalid(errors) => errors);
    assert_eq!(errors.paths(), vec!["cidadeId", "email", "nomeCompleto"]);
    assert_eq!(screen.form().error("cidadeId"), Some(locale::REQUIRED));
    assert_eq!(service.calls().total(), 0);
}

// ---------------------------------------------------------------------------
// Submit: create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_save_opens_the_new_record() {
    let service = city_service(&[]);
    let mut screen = mounted(RouteIdentity::New, &service).await;
    screen.edit_field("nome", json!("Springfield"));

    let outcome = screen.save().await;

    assert_eq!(outcome, SubmitOutcome::Created(1));
    assert_eq!(service.calls().create, 1);
    assert_eq!(screen.interaction().router.current_path(), "/cidades/detalhe/1");
    assert_eq!(screen.state(), ScreenState::NavigatedAway);
    assert_eq!(service.snapshot(1).map(|c| c.nome), Some("Springfield".to_string()));
}

#[tokio::test]
async fn create_with_save_and_close_returns_to_list() {
    let service = city_service(&[]);
    let mut screen = mounted(RouteIdentity::New, &service).await;
    screen.edit_field("nome", json!("Springfield"));

    let outcome = screen.save_and_close().await;

    assert_eq!(outcome, SubmitOutcome::Created(1));
    assert_eq!(screen.interaction().navigations(), &[AppRoute::List("cidades")]);
}

#[tokio::test]
async fn create_failure_alerts_and_stays_editing() {
    let service = city_service(&[]);
    service.fail_next("Erro ao criar o registro.");
    let mut screen = mounted(RouteIdentity::New, &service).await;
    screen.edit_field("nome", json!("Springfield"));

    let outcome = screen.save().await;

    assert_matches!(outcome, SubmitOutcome::Failed(err) if err.message() == "Erro ao criar o registro.");
    assert_eq!(screen.interaction().last_alert(), Some("Erro ao criar o registro."));
    assert!(screen.interaction().navigations().is_empty());
    assert_eq!(screen.state(), ScreenState::Editing);
    assert_eq!(screen.form().state(), FormState::Editing);
    assert!(!screen.is_loading());

    // The user can try again.
    assert_eq!(screen.save().await, SubmitOutcome::Created(1));
}

#[tokio::test]
async fn created_person_has_typed_city_reference() {
    let service = Arc::new(MemoryRecordService::<Person>::new());
    let mut screen =
        DetailScreen::<Person, _, _>::new(RouteIdentity::New, Arc::clone(&service), Recorder::new());
    screen.mount().await;
    screen.edit_field("nomeCompleto", json!("Ana Maria"));
    screen.edit_field("email", json!("ana@example.com"));
    screen.edit_field("cidadeId", json!("3"));

    assert_eq!(screen.save().await, SubmitOutcome::Created(1));

    let stored = service.snapshot(1).expect("person stored");
    assert_eq!(
        stored,
        Person {
            id: 1,
            nome_completo: "Ana Maria".into(),
            email: "ana@example.com".into(),
            cidade_id: 3,
        }
    );
}

// ---------------------------------------------------------------------------
// Submit: update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_with_save_stays_on_screen() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.edit_field("nome", json!("Olinda"));

    let outcome = screen.save().await;

    assert_eq!(outcome, SubmitOutcome::Updated);
    assert_eq!(service.calls().update_by_id, 1);
    assert!(screen.interaction().navigations().is_empty());
    assert_eq!(screen.state(), ScreenState::Editing);
    assert_eq!(service.snapshot(1), Some(City { id: 1, nome: "Olinda".into() }));
}

#[tokio::test]
async fn update_with_save_and_close_returns_to_list() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.edit_field("nome", json!("Olinda"));

    assert_eq!(screen.save_and_close().await, SubmitOutcome::Updated);
    assert_eq!(screen.interaction().navigations(), &[AppRoute::List("cidades")]);
}

#[tokio::test]
async fn update_merges_route_id_over_form_id() {
    let service = city_service(&["Recife", "Olinda"]);
    let mut screen = mounted(RouteIdentity::Existing(2), &service).await;
    screen.edit_field("id", json!(1));
    screen.edit_field("nome", json!("Paulista"));

    screen.save().await;

    assert_eq!(service.snapshot(1).map(|c| c.nome), Some("Recife".to_string()));
    assert_eq!(service.snapshot(2).map(|c| c.nome), Some("Paulista".to_string()));
}

#[tokio::test]
async fn update_failure_alerts_and_stays() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    service.fail_next("Erro ao atualizar o registro.");

    let outcome = screen.save_and_close().await;

    assert_matches!(outcome, SubmitOutcome::Failed(_));
    assert_eq!(screen.interaction().alerts, vec!["Erro ao atualizar o registro."]);
    assert!(screen.interaction().navigations().is_empty());
    assert_eq!(screen.state(), ScreenState::Editing);
}

#[tokio::test]
async fn title_follows_title_field_while_editing() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.edit_field("nome", json!("Rec"));
    assert_eq!(screen.title(), "Rec");
}

#[tokio::test]
async fn input_after_navigating_away_is_ignored() {
    let service = city_service(&[]);
    let mut screen = mounted(RouteIdentity::New, &service).await;
    screen.edit_field("nome", json!("Springfield"));
    screen.save_and_close().await;

    assert_eq!(screen.save().await, SubmitOutcome::Ignored);
    assert_eq!(service.calls().create, 1);
}

#[tokio::test]
async fn unmounted_screen_ignores_input() {
    let service = city_service(&["Recife"]);
    let mut screen: CityScreen =
        DetailScreen::new(RouteIdentity::Existing(1), Arc::clone(&service), Recorder::new());

    screen.edit_field("nome", json!("Olinda"));
    assert_eq!(screen.save().await, SubmitOutcome::Ignored);
    assert_eq!(screen.delete().await, DeleteOutcome::Ignored);

    assert!(screen.form().errors().is_empty());
    assert_eq!(screen.form().value("nome"), None);
    assert_eq!(service.calls().total(), 0);
    assert!(screen.interaction().confirmations.is_empty());
}

// ---------------------------------------------------------------------------
// Delete and toolbar
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_confirmed_removes_and_returns_to_list() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;

    let outcome = screen.delete().await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(screen.interaction().confirmations, vec![CONFIRMAR_EXCLUSAO]);
    assert_eq!(screen.interaction().alerts, vec![REGISTRO_APAGADO]);
    assert_eq!(screen.interaction().navigations(), &[AppRoute::List("cidades")]);
    assert!(service.is_empty());
}

#[tokio::test]
async fn delete_declined_does_nothing() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.interaction_mut().answer(false);

    assert_eq!(screen.delete().await, DeleteOutcome::Cancelled);
    assert_eq!(service.calls().delete_by_id, 0);
    assert_eq!(service.len(), 1);
}

#[tokio::test]
async fn delete_failure_alerts_and_stays() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    service.fail_next("Erro ao apagar o registro.");

    assert_matches!(screen.delete().await, DeleteOutcome::Failed(_));
    assert_eq!(screen.interaction().alerts, vec!["Erro ao apagar o registro."]);
    assert!(screen.interaction().navigations().is_empty());
}

#[tokio::test]
async fn delete_is_unavailable_for_new_records() {
    let service = city_service(&[]);
    let mut screen = mounted(RouteIdentity::New, &service).await;

    assert_eq!(screen.delete().await, DeleteOutcome::Unavailable);
    assert!(screen.interaction().confirmations.is_empty());
}

#[tokio::test]
async fn toolbar_hides_new_and_delete_while_creating() {
    let service = city_service(&["Recife"]);

    let creating = mounted(RouteIdentity::New, &service).await.toolbar();
    assert!(!creating.show_new && !creating.show_delete);
    assert!(creating.show_save_and_close);

    let editing = mounted(RouteIdentity::Existing(1), &service).await.toolbar();
    assert!(editing.show_new && editing.show_delete);
    assert_eq!(editing.new_button_text, "Nova");
}

#[tokio::test]
async fn back_and_new_buttons_navigate() {
    let service = city_service(&["Recife"]);
    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.go_new();
    assert_eq!(screen.interaction().router.current_path(), "/cidades/detalhe/nova");

    let mut screen = mounted(RouteIdentity::Existing(1), &service).await;
    screen.go_back();
    assert_eq!(screen.interaction().router.current_path(), "/cidades");
}

#[tokio::test]
async fn screen_from_route_param() {
    let service = city_service(&["Recife"]);
    let screen = CityScreen::from_param("nova", Arc::clone(&service), Recorder::new()).unwrap();
    assert_eq!(screen.identity(), RouteIdentity::New);
    assert!(CityScreen::from_param("abc", service, Recorder::new()).is_err());
}
