//! Conversion of externally supplied identifier strings into [`DbId`]s.
//!
//! Three shapes show up in requests:
//!
//! - path identifiers, which must always be well-formed ([`parse_id`]);
//! - reference fields on create DTOs, where an empty string means "unset"
//!   ([`parse_ref`], [`parse_refs`]);
//! - reference fields on update DTOs, which distinguish "leave alone",
//!   "clear" and "set" ([`parse_ref_patch`]).

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a required identifier (path segment or relation target).
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    DbId::parse_str(raw.trim()).map_err(|_| CoreError::InvalidIdentifier {
        entity,
        value: raw.to_string(),
    })
}

/// Parse an optional reference. Empty (or whitespace-only) input is unset.
pub fn parse_ref(entity: &'static str, raw: &str) -> Result<Option<DbId>, CoreError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_id(entity, raw).map(Some)
}

/// Parse a list of references, keeping their order.
///
/// Empty entries are dropped. The first malformed entry fails the whole list.
pub fn parse_refs(entity: &'static str, raw: &[String]) -> Result<Vec<DbId>, CoreError> {
    let mut ids = Vec::with_capacity(raw.len());
    for value in raw {
        if let Some(id) = parse_ref(entity, value)? {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// A requested change to an optional reference column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefPatch {
    /// Field absent from the request: keep the stored value.
    Keep,
    /// Field present but empty: unset the reference.
    Clear,
    /// Field present with an identifier.
    Set(DbId),
}

impl RefPatch {
    /// Whether the column should be written at all.
    pub fn is_present(&self) -> bool {
        !matches!(self, RefPatch::Keep)
    }

    /// The value to write when [`is_present`](Self::is_present) is true.
    pub fn value(&self) -> Option<DbId> {
        match self {
            RefPatch::Set(id) => Some(*id),
            RefPatch::Keep | RefPatch::Clear => None,
        }
    }
}

/// Parse an update DTO reference field.
pub fn parse_ref_patch(entity: &'static str, raw: Option<&str>) -> Result<RefPatch, CoreError> {
    match raw {
        None => Ok(RefPatch::Keep),
        Some(value) => Ok(match parse_ref(entity, value)? {
            Some(id) => RefPatch::Set(id),
            None => RefPatch::Clear,
        }),
    }
}
