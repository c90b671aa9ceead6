//! Current location and navigation history.

use crate::routes::AppRoute;

#[derive(Debug, Clone)]
pub struct Router {
    start: AppRoute,
    visited: Vec<AppRoute>,
}

impl Default for Router {
    fn default() -> Self {
        Self::starting_at(AppRoute::Home)
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(route: AppRoute) -> Self {
        Self {
            start: route,
            visited: Vec::new(),
        }
    }

    pub fn current(&self) -> AppRoute {
        self.visited.last().copied().unwrap_or(self.start)
    }

    pub fn current_path(&self) -> String {
        self.current().path()
    }

    pub fn navigate(&mut self, route: AppRoute) {
        tracing::debug!(path = %route, "Navigating");
        self.visited.push(route);
    }

    /// Navigate to a raw path; unknown paths land on the home page.
    pub fn navigate_path(&mut self, path: &str) -> AppRoute {
        let route = AppRoute::resolve(path);
        self.navigate(route);
        route
    }

    /// Go back one step. Returns `false` when already at the start.
    pub fn back(&mut self) -> bool {
        self.visited.pop().is_some()
    }

    /// Routes navigated to, oldest first, excluding the start.
    pub fn visited(&self) -> &[AppRoute] {
        &self.visited
    }
}
