//! Sample records loaded at startup for local development.

use cadastros_core::record::{CityDraft, PersonDraft};

use crate::state::AppState;

const CITIES: &[&str] = &[
    "Recife",
    "Olinda",
    "Caruaru",
    "Petrolina",
    "Garanhuns",
    "João Pessoa",
    "Natal",
];

const PEOPLE: &[(&str, &str, usize)] = &[
    ("Ana Maria Souza", "ana.souza@example.com", 0),
    ("Bruno Carvalho", "bruno.carvalho@example.com", 1),
    ("Carla Mendes", "carla.mendes@example.com", 2),
    ("Diego Ferreira", "diego.ferreira@example.com", 0),
    ("Elisa Ramos", "elisa.ramos@example.com", 5),
    ("Fábio Lima", "fabio.lima@example.com", 6),
];

/// Fill empty stores with sample cities and people. Stores that already
/// hold records are left alone.
pub async fn seed(state: &AppState) {
    if !state.cities.is_empty().await || !state.people.is_empty().await {
        tracing::debug!("Stores already populated, skipping seed data");
        return;
    }

    let mut city_ids = Vec::with_capacity(CITIES.len());
    for nome in CITIES {
        let city = state
            .cities
            .create(CityDraft {
                nome: nome.to_string(),
            })
            .await;
        city_ids.push(city.id);
    }

    for (nome, email, city) in PEOPLE {
        let Some(&cidade_id) = city_ids.get(*city) else {
            continue;
        };
        state
            .people
            .create(PersonDraft {
                nome_completo: nome.to_string(),
                email: email.to_string(),
                cidade_id,
            })
            .await;
    }

    tracing::info!(
        cities = city_ids.len(),
        people = PEOPLE.len(),
        "Seed data loaded"
    );
}
