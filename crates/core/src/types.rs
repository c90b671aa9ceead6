/// Record identifiers are assigned by the backing store.
pub type DbId = i64;

/// Raw, untyped field values as bound by a form.
pub type FormData = serde_json::Map<String, serde_json::Value>;
