//! Canonical position record.
//!
//! Every store converts its raw documents with [`Position::from_document`] as they leave the
//! store, so nothing past the data-access boundary deals with synonym keys or missing fields.

use api_shared::{PositionDetail, PositionSummary};
use mongodb::bson::Document;

use crate::classifier::infer_subject;
use crate::constants::UNTITLED_ROLE;
use crate::normalizer::{
    derive_short_description, document_id, pick_field, string_field, CONTACT_EMAIL_FIELDS,
    DESCRIPTION_FIELDS, LAB_NAME_FIELDS, LINK_FIELDS,
};

/// A research position with every field resolved to a usable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub id: String,
    pub title: String,
    /// Explicit subject tag, or the inferred one when the document has none.
    pub subject: String,
    /// Long description. May be empty.
    pub description: String,
    pub lab_name: String,
    pub contact_email: String,
    pub link: String,
}

impl Position {
    /// Normalize a raw position document.
    ///
    /// Never fails: missing or non-string fields fall back to their defaults.
    pub fn from_document(doc: &Document) -> Self {
        let title = match pick_field(doc, &["title"]) {
            "" => UNTITLED_ROLE,
            title => title,
        };
        let description = pick_field(doc, DESCRIPTION_FIELDS);

        let subject = match string_field(doc, "subject") {
            Some(subject) if !subject.trim().is_empty() => subject,
            _ => infer_subject(title, description),
        };

        Self {
            id: document_id(doc),
            title: title.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
            lab_name: pick_field(doc, LAB_NAME_FIELDS).to_string(),
            contact_email: pick_field(doc, CONTACT_EMAIL_FIELDS).to_string(),
            link: pick_field(doc, LINK_FIELDS).to_string(),
        }
    }

    pub fn short_description(&self) -> String {
        derive_short_description(&self.description)
    }

    pub fn summary(&self) -> PositionSummary {
        PositionSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            subject: self.subject.clone(),
            short_description: self.short_description(),
        }
    }

    pub fn detail(&self) -> PositionDetail {
        PositionDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            subject: self.subject.clone(),
            description: self.description.clone(),
            lab_name: self.lab_name.clone(),
            contact_email: self.contact_email.clone(),
            link: self.link.clone(),
        }
    }
}

/// Case-insensitive directory search over title, subject and short description.
///
/// A blank query matches everything.
pub fn summary_matches(summary: &PositionSummary, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    [&summary.title, &summary.subject, &summary.short_description]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}
