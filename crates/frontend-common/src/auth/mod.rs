//! Session handling for the component tree

pub mod context;

pub use context::{
    SessionAction, SessionContext, SessionContextData, SessionProvider, describe_error,
    use_session,
};
