//! Editorial records read during rendering.
//!
//! Documents, their editions and supporting pages are owned by the editorial
//! workflow elsewhere. The renderer only reads them to decide where an
//! internal link should point and how to annotate it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Workflow state carried by an edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditionState {
    Imported,
    Draft,
    Submitted,
    Rejected,
    Scheduled,
    Published,
    ForcePublished,
    Withdrawn,
    Deleted,
}

impl EditionState {
    /// Label used in CSS class names and state annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditionState::Imported => "imported",
            EditionState::Draft => "draft",
            EditionState::Submitted => "submitted",
            EditionState::Rejected => "rejected",
            EditionState::Scheduled => "scheduled",
            EditionState::Published => "published",
            EditionState::ForcePublished => "force_published",
            EditionState::Withdrawn => "withdrawn",
            EditionState::Deleted => "deleted",
        }
    }

    /// Whether an edition in this state can be shown on the public site.
    pub fn is_public(&self) -> bool {
        matches!(self, EditionState::Published | EditionState::ForcePublished)
    }
}

impl fmt::Display for EditionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Versioned revision of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    pub id: RecordId,
    pub state: EditionState,
}

impl Edition {
    pub fn new(id: u64, state: EditionState) -> Self {
        Self {
            id: RecordId(id),
            state,
        }
    }
}

/// Document format, which selects the public route a document lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Policy,
    Publication,
    NewsArticle,
    Consultation,
    Speech,
    FatalityNotice,
    WorldLocationNewsArticle,
    DetailedGuide,
}

impl DocumentKind {
    /// Path segment of the public route for this kind.
    pub fn route_segment(&self) -> &'static str {
        match self {
            DocumentKind::Policy => "policies",
            DocumentKind::Publication => "publications",
            DocumentKind::NewsArticle => "news",
            DocumentKind::Consultation => "consultations",
            DocumentKind::Speech => "speeches",
            DocumentKind::FatalityNotice => "fatalities",
            DocumentKind::WorldLocationNewsArticle => "world-location-news",
            DocumentKind::DetailedGuide => "guidance",
        }
    }
}

/// Editorial content item with its edition history.
///
/// Hidden documents are filtered out of default store lookups but can still
/// be resolved when rendering for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: RecordId,
    pub kind: DocumentKind,
    pub slug: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub editions: Vec<Edition>,
}

impl Document {
    pub fn new(id: u64, kind: DocumentKind, slug: impl Into<String>) -> Self {
        Self {
            id: RecordId(id),
            kind,
            slug: slug.into(),
            hidden: false,
            editions: Vec::new(),
        }
    }

    /// Appends an edition to the history.
    pub fn with_edition(mut self, id: u64, state: EditionState) -> Self {
        self.editions.push(Edition::new(id, state));
        self
    }

    /// Marks the document as hidden from default lookups.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Returns the newest edition that has not been deleted.
    pub fn latest_edition(&self) -> Option<&Edition> {
        self.editions
            .iter()
            .filter(|e| e.state != EditionState::Deleted)
            .max_by_key(|e| e.id)
    }

    /// Whether any edition can be linked to on the public site.
    pub fn is_linkable(&self) -> bool {
        self.editions.iter().any(|e| e.state.is_public())
    }
}

/// Secondary page owned by exactly one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingPage {
    pub id: RecordId,
    pub document_id: RecordId,
    pub slug: String,
    #[serde(default)]
    pub title: String,
}

impl SupportingPage {
    pub fn new(id: u64, document_id: u64, slug: impl Into<String>) -> Self {
        Self {
            id: RecordId(id),
            document_id: RecordId(document_id),
            slug: slug.into(),
            title: String::new(),
        }
    }
}
