//! Cross-cutting presentation state wrapping every page: side menu, theme,
//! authentication and the router.

pub mod auth;
pub mod drawer;
pub mod router;
pub mod theme;

use crate::routes::AppRoute;

use auth::AuthSession;
use drawer::{DrawerOption, DrawerState};
use router::Router;
use theme::ThemeMode;

/// A side menu entry as displayed, with its selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<'a> {
    pub option: &'a DrawerOption,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct Shell {
    pub drawer: DrawerState,
    pub theme: ThemeMode,
    pub auth: AuthSession,
    pub router: Router,
    /// Narrow viewport: the drawer overlays the page and closes after a pick.
    pub small_screen: bool,
}

impl Default for Shell {
    fn default() -> Self {
        Self {
            drawer: DrawerState::new(drawer::default_options()),
            theme: ThemeMode::default(),
            auth: AuthSession::new(),
            router: Router::new(),
            small_screen: false,
        }
    }
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_items(&self) -> Vec<MenuItem<'_>> {
        let current = self.router.current_path();
        self.drawer
            .options()
            .iter()
            .map(|option| MenuItem {
                option,
                selected: option.is_selected(&current),
            })
            .collect()
    }

    /// Follow a menu entry.
    pub fn choose(&mut self, path: &str) -> AppRoute {
        let route = self.router.navigate_path(path);
        if self.small_screen {
            self.drawer.close();
        }
        route
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }
}
