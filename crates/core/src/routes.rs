//! Application routes and the create-vs-update route identity.
//!
//! ```text
//! /pagina-inicial                 home
//! /{resource}                     listing
//! /{resource}/detalhe/nova        detail, creating
//! /{resource}/detalhe/{id}        detail, editing
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::record::{City, Entity, Person};
use crate::types::DbId;

/// Route parameter value meaning "create a new record".
pub const NEW_SENTINEL: &str = "nova";

pub const HOME_PATH: &str = "/pagina-inicial";

/// Resources the router knows how to resolve.
pub const RESOURCES: &[&str] = &[City::RESOURCE, Person::RESOURCE];

/// Whether a detail screen creates a record or edits an existing one.
///
/// Fixed for the lifetime of a screen; a different identity means a new
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteIdentity {
    New,
    Existing(DbId),
}

impl RouteIdentity {
    pub fn is_new(self) -> bool {
        matches!(self, Self::New)
    }

    pub fn id(self) -> Option<DbId> {
        match self {
            Self::New => None,
            Self::Existing(id) => Some(id),
        }
    }
}

impl FromStr for RouteIdentity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NEW_SENTINEL {
            return Ok(Self::New);
        }
        s.parse::<DbId>().map(Self::Existing).map_err(|_| {
            CoreError::Validation(format!(
                "Invalid record id '{s}'. Must be a number or '{NEW_SENTINEL}'"
            ))
        })
    }
}

impl fmt::Display for RouteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => f.write_str(NEW_SENTINEL),
            Self::Existing(id) => write!(f, "{id}"),
        }
    }
}

/// A navigable location in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    List(&'static str),
    Detail(&'static str, RouteIdentity),
}

impl AppRoute {
    pub fn list<E: Entity>() -> Self {
        Self::List(E::RESOURCE)
    }

    pub fn detail<E: Entity>(identity: RouteIdentity) -> Self {
        Self::Detail(E::RESOURCE, identity)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => HOME_PATH.to_string(),
            Self::List(resource) => format!("/{resource}"),
            Self::Detail(resource, identity) => format!("/{resource}/detalhe/{identity}"),
        }
    }

    /// Resolve a path. Returns `None` for anything the router does not know,
    /// including detail routes whose id is neither numeric nor `nova`.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["pagina-inicial"] => Some(Self::Home),
            [resource] => known_resource(resource).map(Self::List),
            [resource, "detalhe", id] => {
                let resource = known_resource(resource)?;
                let identity = id.parse().ok()?;
                Some(Self::Detail(resource, identity))
            }
            _ => None,
        }
    }

    /// Resolve a path, redirecting unknown locations to the home page.
    pub fn resolve(path: &str) -> Self {
        Self::parse(path).unwrap_or(Self::Home)
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn known_resource(segment: &str) -> Option<&'static str> {
    RESOURCES.iter().copied().find(|r| *r == segment)
}
