//! Vera HTTP layer
//!
//! The session manager keeps the bearer token valid, the gateway attaches it
//! to every outbound call and reacts to authorization failures, and the
//! identity and drive clients expose the remote resources on top of it.

pub mod client;

pub use client::{
    ClientBuilder, ClientError, DriveClient, Gateway, IdentityClient, RefreshError,
    RefreshObserver, ServiceConfig, SessionManager, TransportError, VeraClient,
};
