//! # vk-notion
//!
//! Notion-backed [`InventoryStore`] for Vaultkeeper.
//!
//! Translates between [`Item`]s and pages of a Notion database with the
//! fixed `Name` / `Type` / `Power` / `Location` / `Notes` schema. This is the
//! only crate that performs network I/O. Every operation is a single request
//! with no retry; failures are classified into [`StoreError`] kinds.

mod http;
mod pages;
mod schema;

use std::time::Duration;

use reqwest::Method;
use serde_json::json;
use vk_config::NotionConfig;
use vk_core::{InventoryStore, Item, ItemForm, StoreError};

use crate::http::{check_response, decode};
use crate::pages::{Created, QueryResponse};

/// Page size for database queries. Results beyond one page are not fetched.
const QUERY_PAGE_SIZE: u32 = 100;

/// HTTP client for one Notion workspace integration.
pub struct NotionStore {
    http: reqwest::Client,
    base_url: String,
    api_version: String,
    token: String,
    page_id: String,
    database_id: Option<String>,
    database_title: String,
}

impl NotionStore {
    /// Build a store from the `[notion]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Network`] if the HTTP client cannot be built.
    pub fn from_config(config: &NotionConfig) -> Result<Self, StoreError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("vaultkeeper/", env!("CARGO_PKG_VERSION")));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let http = builder.build().map_err(StoreError::network)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            token: config.token.clone(),
            page_id: config.page_id.clone(),
            database_id: config.database_id().map(str::to_string),
            database_title: config.database_title.clone(),
        })
    }

    /// Start an authenticated request to `path` (relative to the API root).
    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, StoreError> {
        if self.token.is_empty() {
            return Err(StoreError::Auth(
                "no Notion token configured (set NOTION_TOKEN)".to_string(),
            ));
        }
        Ok(self
            .http
            .request(method, format!("{}/{path}", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version))
    }

    fn active_database(&self) -> Result<&str, StoreError> {
        self.database_id
            .as_deref()
            .ok_or(StoreError::NotConfigured("notion.database_id"))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let resp = request.send().await.map_err(StoreError::network)?;
        check_response(resp).await
    }
}

impl InventoryStore for NotionStore {
    async fn create_schema(&self) -> Result<String, StoreError> {
        if self.page_id.is_empty() {
            return Err(StoreError::NotConfigured("notion.page_id"));
        }
        let body = json!({
            "parent": { "type": "page_id", "page_id": self.page_id },
            "title": schema::database_title(&self.database_title),
            "properties": schema::database_properties(),
        });

        tracing::debug!(parent = %self.page_id, "creating inventory database");
        let request = self.request(Method::POST, "databases")?.json(&body);
        let created: Created = decode(self.send(request).await?).await?;
        tracing::info!(database_id = %created.id, "created inventory database");
        Ok(created.id)
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let database_id = self.active_database()?;
        let body = json!({
            "sorts": [{ "property": "Name", "direction": "ascending" }],
            "page_size": QUERY_PAGE_SIZE,
        });

        tracing::debug!(database_id, "querying items");
        let request = self
            .request(Method::POST, &format!("databases/{database_id}/query"))?
            .json(&body);
        let data: QueryResponse = decode(self.send(request).await?).await?;
        if data.has_more {
            tracing::warn!(
                database_id,
                page_size = QUERY_PAGE_SIZE,
                "database has more items than one page; only the first page is shown"
            );
        }

        data.results
            .into_iter()
            .map(pages::PageObject::into_item)
            .collect()
    }

    async fn create_item(&self, form: &ItemForm) -> Result<String, StoreError> {
        let properties = schema::page_properties(form)?;
        let database_id = self.active_database()?;
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
        });

        let request = self.request(Method::POST, "pages")?.json(&body);
        let created: Created = decode(self.send(request).await?).await?;
        tracing::info!(id = %created.id, name = %form.name, "created item");
        Ok(created.id)
    }

    async fn update_item(&self, id: &str, form: &ItemForm) -> Result<(), StoreError> {
        let properties = schema::page_properties(form)?;
        let body = json!({ "properties": properties });

        let request = self
            .request(Method::PATCH, &format!("pages/{id}"))?
            .json(&body);
        self.send(request).await?;
        tracing::info!(id, name = %form.name, "updated item");
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        let request = self
            .request(Method::PATCH, &format!("pages/{id}"))?
            .json(&json!({ "archived": true }));
        self.send(request).await?;
        tracing::info!(id, "archived item");
        Ok(())
    }

    fn database_id(&self) -> Option<&str> {
        self.database_id.as_deref()
    }

    fn set_database_id(&mut self, id: String) {
        tracing::info!(database_id = %id, "switching active database");
        self.database_id = Some(id);
    }
}
