//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up an in-memory store and test server
//! - A static dictionary standing in for the remote dictionary API
//! - Helpers for seeding users directly into the store

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;

use vocab_core::{MemStore, NewUser, User};
use wordwise_backend::{app, AppState};

use fixtures::StaticDictionary;

/// Test context holding the shared state behind the test server.
pub struct TestContext {
    pub state: AppState,
    pub dictionary: StaticDictionary,
}

impl TestContext {
    /// Create a context over an empty store.
    pub fn new() -> Self {
        Self::with_store(MemStore::new())
    }

    /// Create a context over a store seeded with the demo user.
    pub fn with_demo_data() -> Self {
        Self::with_store(MemStore::with_demo_data())
    }

    fn with_store(store: MemStore) -> Self {
        let dictionary = StaticDictionary::new();
        let state = AppState::new(store, dictionary.clone());
        Self { state, dictionary }
    }

    /// Build a test server over the full router.
    pub fn server(&self) -> TestServer {
        TestServer::new(app(self.state.clone())).expect("Failed to build test server")
    }

    /// Insert a user directly into the store.
    pub fn create_user(&self, username: &str) -> User {
        self.state
            .store()
            .expect("store lock")
            .create_user(NewUser {
                username: username.to_string(),
                password: "password".to_string(),
                display_initials: username[..2].to_uppercase(),
            })
            .expect("Failed to create test user")
    }
}
