//! Drive service: the url/folder tree

use crate::client::{ClientError, Gateway, ServiceConfig};
use reqwest::Method;
use serde_json::Value;
use std::rc::Rc;
use vera_core::{UrlDraft, UrlNode};

#[derive(Clone)]
pub struct DriveClient {
    gateway: Rc<Gateway>,
    config: ServiceConfig,
}

impl DriveClient {
    pub fn new(gateway: Rc<Gateway>, config: ServiceConfig) -> Self {
        Self { gateway, config }
    }

    /// Id of the tree's root folder
    pub async fn root_id(&self) -> Result<String, ClientError> {
        let request = self
            .gateway
            .request(Method::GET, &self.config.drive_endpoint("/urls/root-id"));
        let value: Value = self.gateway.execute(request).await?;
        match value {
            Value::String(id) if !id.is_empty() => Ok(id),
            Value::Number(id) => Ok(id.to_string()),
            other => Err(ClientError::Request {
                status: 200,
                body: format!("unexpected root id: {other}"),
            }),
        }
    }

    /// A node with its ancestors and direct children
    pub async fn get_node(&self, id: &str) -> Result<UrlNode, ClientError> {
        let request = self
            .gateway
            .request(Method::GET, &self.node_url(id));
        self.gateway.execute(request).await
    }

    pub async fn create_node(&self, draft: &UrlDraft) -> Result<(), ClientError> {
        let request = self
            .gateway
            .request(Method::POST, &self.config.drive_endpoint("/urls"))
            .json(&draft.normalized());
        self.gateway.execute_empty(request).await
    }

    pub async fn update_node(&self, draft: &UrlDraft) -> Result<(), ClientError> {
        let request = self
            .gateway
            .request(Method::PUT, &self.node_url(&draft.id))
            .json(&draft.normalized());
        self.gateway.execute_empty(request).await
    }

    /// Create or update depending on whether the draft has an id
    pub async fn save_node(&self, draft: &UrlDraft) -> Result<(), ClientError> {
        if draft.is_new() {
            self.create_node(draft).await
        } else {
            self.update_node(draft).await
        }
    }

    pub async fn delete_node(&self, id: &str) -> Result<(), ClientError> {
        let request = self.gateway.request(Method::DELETE, &self.node_url(id));
        self.gateway.execute_empty(request).await
    }

    fn node_url(&self, id: &str) -> String {
        self.config.drive_endpoint(&format!("/urls/{id}"))
    }
}
