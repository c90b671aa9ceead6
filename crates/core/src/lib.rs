//! Cadastros core library.
//!
//! Pure logic for the records administration screens: record types,
//! validation schemas, the form controller, the generic detail and listing
//! screens, shell state (drawer, theme, auth, router) and the
//! [`RecordService`](service::RecordService) seam the screens persist through.
//! Nothing here renders; screens talk to the outside world through the
//! [`Interaction`](interaction::Interaction) capability.

pub mod detail;
pub mod environment;
pub mod error;
pub mod form;
pub mod interaction;
pub mod listing;
pub mod record;
pub mod routes;
pub mod service;
pub mod shell;
pub mod store;
pub mod types;
pub mod validation;
