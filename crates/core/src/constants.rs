//! Constants used throughout the SlugLabs core crate.
//!
//! Collection names, field defaults and display limits live here so that the stores,
//! the normalizer and the services agree on them.

/// Database used when `MONGODB_DB` is not configured.
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// Collection holding research position documents.
pub const DEFAULT_POSITIONS_COLLECTION: &str = "real_opportunities";

/// Title given to positions whose document carries no usable title.
pub const UNTITLED_ROLE: &str = "Untitled role";

/// Subject label returned when no taxonomy keyword matches.
pub const DEFAULT_SUBJECT: &str = "Research";

/// Maximum length, in characters, of a derived short description.
pub const SHORT_DESCRIPTION_MAX_CHARS: usize = 120;

/// Marker appended to truncated short descriptions.
pub const ELLIPSIS: &str = "...";

/// Fields fetched when listing positions.
pub const LIST_PROJECTION_FIELDS: &[&str] = &[
    "title",
    "subject",
    "shortDescription",
    "description",
    "full_description",
];

/// Fields fetched when reading a single position.
pub const DETAIL_PROJECTION_FIELDS: &[&str] = &[
    "title",
    "subject",
    "shortDescription",
    "description",
    "full_description",
    "labName",
    "labname",
    "lab_name",
    "contactEmail",
    "contact_email",
    "email",
    "link",
    "url",
    "website",
];
