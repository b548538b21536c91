//! Reducer wrapper around the editor state machine

use std::ops::Deref;
use std::rc::Rc;
use vera_core::EditorState;
use yew::prelude::*;

pub enum EditorAction<D, K> {
    Edit(D),
    /// Replace the draft while editing
    Update(D),
    ConfirmDelete(K),
    BeginSave,
    BeginDelete,
    Finish(Result<(), String>),
    Dismiss,
}

/// Editor state held in a reducer so callbacks fired back to back (a
/// dialog's confirm followed by its close) see each other's transitions
#[derive(Debug, PartialEq)]
pub struct Editor<D, K>(EditorState<D, K>);

impl<D, K> Default for Editor<D, K> {
    fn default() -> Self {
        Self(EditorState::Idle)
    }
}

impl<D, K> Deref for Editor<D, K> {
    type Target = EditorState<D, K>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<D: Clone, K: Clone> Reducible for Editor<D, K> {
    type Action = EditorAction<D, K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let state = self.0.clone();
        let next = match action {
            EditorAction::Edit(draft) => state.edit(draft),
            EditorAction::Update(draft) => state.update(move |current| *current = draft),
            EditorAction::ConfirmDelete(key) => state.confirm_delete(key),
            EditorAction::BeginSave => state.begin_save().0,
            EditorAction::BeginDelete => state.begin_delete().0,
            EditorAction::Finish(outcome) => state.finish(outcome),
            EditorAction::Dismiss => state.dismiss(),
        };
        Rc::new(Self(next))
    }
}

#[hook]
pub fn use_editor<D, K>() -> UseReducerHandle<Editor<D, K>>
where
    D: Clone + PartialEq + 'static,
    K: Clone + PartialEq + 'static,
{
    use_reducer(Editor::default)
}
