//! Field normalization for position documents.
//!
//! Position documents in the store were written by several tools over time, so the same attribute
//! appears under different keys (`labName`, `labname`, `lab_name`) and values are not always
//! strings. The helpers here pick the first usable value among synonymous keys and derive the
//! short description shown in listings.

use mongodb::bson::{Bson, Document};

use crate::constants::{ELLIPSIS, SHORT_DESCRIPTION_MAX_CHARS};

/// Keys holding the long description, most specific first.
pub const DESCRIPTION_FIELDS: &[&str] = &["full_description", "description", "shortDescription"];
/// Keys holding the lab name.
pub const LAB_NAME_FIELDS: &[&str] = &["labName", "labname", "lab_name"];
/// Keys holding the contact email.
pub const CONTACT_EMAIL_FIELDS: &[&str] = &["contactEmail", "contact_email", "email"];
/// Keys holding the lab or position web page.
pub const LINK_FIELDS: &[&str] = &["link", "url", "website"];

/// Return the first candidate with non-whitespace content, or `""`.
///
/// The chosen value is returned as stored, not trimmed.
pub fn pick_first<'a, I>(candidates: I) -> &'a str
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or("")
}

/// Shorten `full` to at most [`SHORT_DESCRIPTION_MAX_CHARS`] characters.
pub fn derive_short_description(full: &str) -> String {
    derive_short_description_with_limit(full, SHORT_DESCRIPTION_MAX_CHARS)
}

/// Shorten `full` to at most `max_chars` characters, ending in [`ELLIPSIS`] when truncated.
///
/// Lengths are counted in characters so multi-byte text is never split inside a code point.
pub fn derive_short_description_with_limit(full: &str, max_chars: usize) -> String {
    if full.chars().count() <= max_chars {
        return full.to_string();
    }

    let ellipsis_chars = ELLIPSIS.chars().count();
    if max_chars < ellipsis_chars {
        return full.chars().take(max_chars).collect();
    }

    let keep = max_chars - ellipsis_chars;
    let mut short: String = full.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

/// The string value stored under `key`, if it is a string.
pub fn string_field<'a>(doc: &'a Document, key: &str) -> Option<&'a str> {
    match doc.get(key) {
        Some(Bson::String(value)) => Some(value.as_str()),
        _ => None,
    }
}

/// [`pick_first`] over the string values of `keys` in `doc`.
pub fn pick_field<'a>(doc: &'a Document, keys: &[&str]) -> &'a str {
    pick_first(keys.iter().map(|key| string_field(doc, key)))
}

/// Render a document identifier the way clients expect it.
///
/// Object ids become their 24-character hex form; any other scalar falls back to its string
/// form.
pub fn document_id(doc: &Document) -> String {
    match doc.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(value)) => value.clone(),
        Some(other) => {
            tracing::warn!("position document has a non object id: {}", other);
            other.to_string()
        }
        None => String::new(),
    }
}
