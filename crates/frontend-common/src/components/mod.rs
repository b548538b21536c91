mod button;
mod context_menu;
pub mod icons;
mod input;
mod popup;
mod radio;
mod row;
mod spinner;

pub use button::{ButtonStyle, IconButton, TextButton};
pub use context_menu::{ContextMenu, ContextMenuItem, MenuPosition};
pub use input::Input;
pub use popup::{Popup, PopupDialog, PopupLoading, PopupWindow};
pub use radio::{Radio, RadioOption};
pub use row::Row;
pub use spinner::{Loading, LoadingSpinner as Spinner};
