//! Custom hooks for the application

pub mod use_editor;
pub mod use_remote;

pub use use_editor::{Editor, EditorAction, use_editor};
pub use use_remote::{Remote, RemoteHandle, use_remote};
