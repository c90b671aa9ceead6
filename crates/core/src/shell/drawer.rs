//! Side menu (drawer) state.

use serde::{Deserialize, Serialize};

use crate::record::{City, Entity, Person};
use crate::routes::HOME_PATH;

/// A navigable entry of the side menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerOption {
    /// Material icon name.
    pub icon: String,
    pub path: String,
    pub label: String,
}

impl DrawerOption {
    pub fn new(icon: &str, path: &str, label: &str) -> Self {
        Self {
            icon: icon.to_string(),
            path: path.to_string(),
            label: label.to_string(),
        }
    }

    /// Selected when the current path starts with this option's path on a
    /// segment boundary (`/cidades` matches `/cidades/detalhe/3`, not
    /// `/cidadesx`).
    pub fn is_selected(&self, current_path: &str) -> bool {
        let own = self.path.trim_end_matches('/');
        match current_path.strip_prefix(own) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

pub fn default_options() -> Vec<DrawerOption> {
    vec![
        DrawerOption::new("home", HOME_PATH, "Página inicial"),
        DrawerOption::new("location_city", &format!("/{}", City::RESOURCE), "Cidades"),
        DrawerOption::new("people", &format!("/{}", Person::RESOURCE), "Pessoas"),
    ]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerState {
    pub is_open: bool,
    options: Vec<DrawerOption>,
}

impl DrawerState {
    pub fn new(options: Vec<DrawerOption>) -> Self {
        Self {
            is_open: false,
            options,
        }
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn options(&self) -> &[DrawerOption] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_matches_nested_paths() {
        let option = DrawerOption::new("people", "/pessoas", "Pessoas");
        assert!(option.is_selected("/pessoas"));
        assert!(option.is_selected("/pessoas/detalhe/nova"));
        assert!(!option.is_selected("/pessoasx"));
        assert!(!option.is_selected("/cidades"));
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut drawer = DrawerState::new(default_options());
        assert!(!drawer.is_open);
        drawer.toggle();
        assert!(drawer.is_open);
    }

    #[test]
    fn default_menu_lists_home_and_both_resources() {
        let paths: Vec<String> = default_options().into_iter().map(|o| o.path).collect();
        assert_eq!(paths, vec!["/pagina-inicial", "/cidades", "/pessoas"]);
    }
}
