//! Popup state for list screens that edit and delete records
//!
//! One enum replaces the independent "selected", "deleting", "saving" and
//! "dialog open" flags a screen would otherwise juggle.

/// State of a list screen's edit/delete interaction.
///
/// `D` is the draft being edited, `K` identifies the record pending deletion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState<D, K> {
    #[default]
    Idle,
    Editing(D),
    Saving,
    ConfirmingDelete(K),
    Failed { title: String, message: String },
}

impl<D, K> EditorState<D, K> {
    /// Open the editor popup with `draft`; ignored while a save is in flight
    #[must_use]
    pub fn edit(self, draft: D) -> Self {
        match self {
            Self::Saving => Self::Saving,
            _ => Self::Editing(draft),
        }
    }

    /// Change the draft in place while editing
    #[must_use]
    pub fn update(self, f: impl FnOnce(&mut D)) -> Self {
        match self {
            Self::Editing(mut draft) => {
                f(&mut draft);
                Self::Editing(draft)
            }
            other => other,
        }
    }

    /// Ask for delete confirmation of `key`; ignored while a save is in flight
    #[must_use]
    pub fn confirm_delete(self, key: K) -> Self {
        match self {
            Self::Saving => Self::Saving,
            _ => Self::ConfirmingDelete(key),
        }
    }

    /// Editing -> Saving, handing back the draft to submit
    pub fn begin_save(self) -> (Self, Option<D>) {
        match self {
            Self::Editing(draft) => (Self::Saving, Some(draft)),
            other => (other, None),
        }
    }

    /// ConfirmingDelete -> Saving, handing back the key to delete
    pub fn begin_delete(self) -> (Self, Option<K>) {
        match self {
            Self::ConfirmingDelete(key) => (Self::Saving, Some(key)),
            other => (other, None),
        }
    }

    /// Settle a save or delete
    #[must_use]
    pub fn finish(self, outcome: Result<(), String>) -> Self {
        match (self, outcome) {
            (Self::Saving, Ok(())) => Self::Idle,
            (Self::Saving, Err(message)) => Self::Failed {
                title: "Error".to_string(),
                message,
            },
            (other, _) => other,
        }
    }

    /// Close whatever popup is open. A save in flight cannot be dismissed.
    #[must_use]
    pub fn dismiss(self) -> Self {
        match self {
            Self::Saving => Self::Saving,
            _ => Self::Idle,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<&K> {
        match self {
            Self::ConfirmingDelete(key) => Some(key),
            _ => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, Self::Saving)
    }

    pub fn failure(&self) -> Option<(&str, &str)> {
        match self {
            Self::Failed { title, message } => Some((title, message)),
            _ => None,
        }
    }
}
