//! The capability screens use to reach the user and the router.
//!
//! Alerts are the only user-visible error channel: blocking, one message at
//! a time, no queue.

use std::collections::VecDeque;

use crate::routes::AppRoute;
use crate::shell::router::Router;

pub trait Interaction: Send {
    /// Show a blocking message.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question; `true` means confirmed.
    fn confirm(&mut self, message: &str) -> bool;

    fn navigate(&mut self, route: AppRoute);
}

impl<I: Interaction + ?Sized> Interaction for &mut I {
    fn alert(&mut self, message: &str) {
        (**self).alert(message);
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn navigate(&mut self, route: AppRoute) {
        (**self).navigate(route);
    }
}

/// Scripted [`Interaction`] that records everything it is asked to do.
///
/// Navigation goes through a real [`Router`]. Confirmations are answered from
/// a queue, defaulting to `true` when the queue is empty.
#[derive(Debug, Default)]
pub struct Recorder {
    pub router: Router,
    pub alerts: Vec<String>,
    pub confirmations: Vec<String>,
    answers: VecDeque<bool>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `route` instead of the home page.
    pub fn at(route: AppRoute) -> Self {
        Self {
            router: Router::starting_at(route),
            ..Self::default()
        }
    }

    /// Queue the answer for the next confirmation.
    pub fn answer(&mut self, confirmed: bool) -> &mut Self {
        self.answers.push_back(confirmed);
        self
    }

    /// Routes navigated to, oldest first, excluding the starting route.
    pub fn navigations(&self) -> &[AppRoute] {
        self.router.visited()
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl Interaction for Recorder {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(true)
    }

    fn navigate(&mut self, route: AppRoute) {
        self.router.navigate(route);
    }
}
