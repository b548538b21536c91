//! Records exchanged with the identity and drive services

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An account managed by the identity service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Sort in place by ascending id, the order the user table shows
    pub fn sort_for_display(users: &mut [User]) {
        users.sort_by_key(|user| user.id);
    }
}

/// Form contents for creating (`id == None`) or editing a user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub id: Option<i64>,
    pub email: String,
}

impl UserDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlKind {
    Folder,
    Url,
}

impl UrlKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Url => "url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::Url => "URL",
        }
    }
}

/// A node of the drive tree without its neighbourhood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UrlKind,
    pub url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A node with its ancestors (root first) and direct children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlNode {
    #[serde(flatten)]
    pub entry: UrlEntry,
    #[serde(default)]
    pub parent: Vec<UrlEntry>,
    #[serde(default)]
    pub children: Vec<UrlEntry>,
}

/// One link of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: String,
    pub label: String,
}

impl UrlNode {
    /// Ancestors followed by this node; the first crumb reads `Root`
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.parent
            .iter()
            .chain(std::iter::once(&self.entry))
            .enumerate()
            .map(|(index, entry)| Breadcrumb {
                id: entry.id.clone(),
                label: if index == 0 {
                    "Root".to_string()
                } else {
                    entry.name.clone()
                },
            })
            .collect()
    }

    /// Folders first, then case-insensitive by name
    pub fn sorted_children(&self) -> Vec<UrlEntry> {
        let mut children = self.children.clone();
        children.sort_by(compare_entries);
        children
    }
}

fn compare_entries(a: &UrlEntry, b: &UrlEntry) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Form contents for creating (empty `id`) or editing a drive node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDraft {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UrlKind,
    pub url: Option<String>,
    pub parent_id: String,
}

impl UrlDraft {
    /// A new url entry under `parent_id`
    pub fn new_in(parent_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            kind: UrlKind::Url,
            url: Some(String::new()),
            parent_id: parent_id.into(),
        }
    }

    /// Edit `entry`, which lives under `parent_id`
    pub fn from_entry(entry: &UrlEntry, parent_id: impl Into<String>) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            kind: entry.kind,
            url: entry.url.clone(),
            parent_id: parent_id.into(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    /// Switch the kind; folders never carry a url
    pub fn set_kind(&mut self, kind: UrlKind) {
        self.kind = kind;
        match kind {
            UrlKind::Folder => self.url = None,
            UrlKind::Url => {
                self.url.get_or_insert_with(String::new);
            }
        }
    }

    /// Draft as it should be sent: folder urls stripped, fields trimmed
    pub fn normalized(&self) -> Self {
        let mut draft = self.clone();
        draft.name = draft.name.trim().to_string();
        draft.url = match draft.kind {
            UrlKind::Folder => None,
            UrlKind::Url => draft.url.map(|url| url.trim().to_string()),
        };
        draft
    }
}
