//! Shared fixtures for the client integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use vera_core::testing::TokenBuilder;
use vera_core::{FixedClock, MemoryTokenStore, Navigator, Session, TokenStore};
use vera_http::client::DEFAULT_TIMEOUT;
use vera_http::{RefreshObserver, ServiceConfig, VeraClient};
use wiremock::MockServer;

pub const NOW: i64 = 1_700_000_000;

/// Navigator that records every navigation
pub struct RecordingNavigator {
    path: RefCell<String>,
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Rc<Self> {
        Rc::new(Self {
            path: RefCell::new(path.to_string()),
            visits: RefCell::new(Vec::new()),
        })
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.visits.borrow_mut().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }
}

pub struct Harness {
    pub client: VeraClient,
    pub store: Rc<MemoryTokenStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub clock: Rc<FixedClock>,
}

impl Harness {
    pub fn stored_token(&self) -> Option<String> {
        self.store.get()
    }
}

pub fn harness(server: &MockServer, path: &str) -> Harness {
    harness_with_timeout(server, path, DEFAULT_TIMEOUT)
}

/// Both services are served by the same mock server
pub fn harness_with_timeout(server: &MockServer, path: &str, timeout: Duration) -> Harness {
    build_harness(server, path, timeout, None)
}

/// Harness whose client records every session renewed by a request
pub fn observed_harness(server: &MockServer, path: &str) -> (Harness, Rc<RefCell<Vec<Session>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let harness = build_harness(
        server,
        path,
        DEFAULT_TIMEOUT,
        Some(Rc::new(move |session: &Session| {
            sink.borrow_mut().push(session.clone());
        })),
    );
    (harness, seen)
}

fn build_harness(
    server: &MockServer,
    path: &str,
    timeout: Duration,
    on_refresh: Option<RefreshObserver>,
) -> Harness {
    let config = ServiceConfig::new(server.uri(), server.uri())
        .unwrap()
        .with_timeout(timeout);
    let store = Rc::new(MemoryTokenStore::new());
    let navigator = RecordingNavigator::at(path);
    let clock = Rc::new(FixedClock::new(NOW));

    let mut builder = VeraClient::builder()
        .config(config)
        .store(store.clone())
        .clock(clock.clone())
        .navigator(navigator.clone());
    if let Some(observer) = on_refresh {
        builder = builder.on_refresh(observer);
    }
    let client = builder.build().unwrap();

    Harness {
        client,
        store,
        navigator,
        clock,
    }
}

pub fn valid_token() -> String {
    TokenBuilder::new().expires_at(NOW + 3600).build()
}

pub fn expired_token() -> String {
    TokenBuilder::new().expires_at(NOW - 60).build()
}
