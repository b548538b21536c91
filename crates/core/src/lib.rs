//! Vera core types and utilities
//!
//! Everything in this crate is free of I/O: token decoding, the session
//! state model, the seams the HTTP layer and the browser plug into
//! (token storage, clock, navigation), and the records exchanged with the
//! identity and drive services.

pub mod claims;
pub mod clock;
pub mod editor;
pub mod error;
pub mod model;
pub mod navigation;
pub mod session;
pub mod store;
pub mod time;

#[cfg(any(test, feature = "tests"))]
pub mod testing;

pub use claims::Claims;
pub use clock::{Clock, FixedClock, SystemClock};
pub use editor::EditorState;
pub use error::{DecodeError, DecodeFailure};
pub use model::{Breadcrumb, UrlDraft, UrlEntry, UrlKind, UrlNode, User, UserDraft};
pub use navigation::{LoginRedirect, Navigator, APP_PATH, LOGIN_PATH};
pub use session::{Session, SessionState};
pub use store::{MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY};
