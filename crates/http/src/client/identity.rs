//! Identity service: user management

use crate::client::{ClientError, Gateway, ServiceConfig};
use reqwest::Method;
use serde::Serialize;
use std::rc::Rc;
use vera_core::{User, UserDraft};

#[derive(Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Clone)]
pub struct IdentityClient {
    gateway: Rc<Gateway>,
    config: ServiceConfig,
}

impl IdentityClient {
    pub fn new(gateway: Rc<Gateway>, config: ServiceConfig) -> Self {
        Self { gateway, config }
    }

    /// Full-page login entry point
    pub fn login_url(&self) -> String {
        self.config.login_url()
    }

    /// All users, ordered by id
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let request = self
            .gateway
            .request(Method::GET, &self.config.identity_endpoint("/users"));
        let mut users: Vec<User> = self.gateway.execute(request).await?;
        User::sort_for_display(&mut users);
        Ok(users)
    }

    pub async fn create_user(&self, email: &str) -> Result<(), ClientError> {
        let request = self
            .gateway
            .request(Method::POST, &self.config.identity_endpoint("/users"))
            .json(&EmailBody {
                email: email.trim(),
            });
        self.gateway.execute_empty(request).await
    }

    pub async fn update_user(&self, id: i64, email: &str) -> Result<(), ClientError> {
        let request = self
            .gateway
            .request(
                Method::PATCH,
                &self.config.identity_endpoint(&format!("/users/{id}")),
            )
            .json(&EmailBody {
                email: email.trim(),
            });
        self.gateway.execute_empty(request).await
    }

    /// Create or update depending on whether the draft has an id
    pub async fn save_user(&self, draft: &UserDraft) -> Result<(), ClientError> {
        match draft.id {
            Some(id) => self.update_user(id, &draft.email).await,
            None => self.create_user(&draft.email).await,
        }
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ClientError> {
        let request = self.gateway.request(
            Method::DELETE,
            &self.config.identity_endpoint(&format!("/users/{id}")),
        );
        self.gateway.execute_empty(request).await
    }
}
