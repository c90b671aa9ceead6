//! Listing query parameters.
//!
//! Listings follow json-server conventions: `_page` (1-based), `_limit`, and
//! `<field>_like` for a case-insensitive substring filter on the record's
//! title field.

use std::collections::HashMap;

use cadastros_core::record::Entity;

use crate::error::AppError;

/// Rows per page when `_page` is given without `_limit`.
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    /// `0` means no paging.
    pub limit: u32,
    pub filter: String,
}

impl ListParams {
    /// Read the paging and filter parameters for record kind `E`. Unknown
    /// parameters are ignored.
    pub fn parse<E: Entity>(raw: &HashMap<String, String>) -> Result<Self, AppError> {
        let page = raw.get("_page").map(|v| parse_number("_page", v)).transpose()?;
        let limit = raw.get("_limit").map(|v| parse_number("_limit", v)).transpose()?;

        let limit = match (page, limit) {
            (_, Some(limit)) => limit,
            (Some(_), None) => DEFAULT_LIMIT,
            (None, None) => 0,
        };

        let filter = raw
            .get(&format!("{}_like", E::TITLE_FIELD))
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            page: page.unwrap_or(1).max(1),
            limit,
            filter,
        })
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32, AppError> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("{name} must be a non-negative integer")))
}
