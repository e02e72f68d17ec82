//! Generic CRUD repository over one backend resource.
//!
//! Every resource-specific client in [`crate::resources`] wraps a
//! `Repository<T>` and adds narrow, named methods on top of it. The
//! repository itself performs no retries and keeps no cache; every call is a
//! fresh round trip and every failure propagates to the caller.

use crate::auth::TokenStore;
use crate::config::ClientOptions;
use crate::envelope::{normalize_list, normalize_record};
use crate::error::Error;
use crate::fetch::{Fetch, FetchBuilder};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Shared connection state handed to every repository
#[derive(Debug)]
pub(crate) struct ClientState {
    pub base_url: String,
    pub http_client: Client,
    pub tokens: TokenStore,
    pub options: ClientOptions,
}

impl ClientState {
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn prepared<'a>(&'a self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        builder
            .bearer_auth(self.tokens.get().as_deref())
            .timeout(self.options.request_timeout)
    }
}

/// Typed CRUD façade for a single resource endpoint
pub struct Repository<T> {
    state: Arc<ClientState>,
    endpoint: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            endpoint: self.endpoint,
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Repository<T> {
    pub(crate) fn new(state: Arc<ClientState>, endpoint: &'static str) -> Self {
        Self {
            state,
            endpoint,
            _marker: PhantomData,
        }
    }

    fn endpoint_url(&self) -> String {
        self.state.url(self.endpoint)
    }

    fn item_url(&self, id: &str) -> String {
        self.state.url(&format!("{}/{}", self.endpoint, id))
    }

    /// List records, with optional query parameters. The response may be a
    /// bare array or a `{data, pagination}` envelope; callers always get a
    /// flat vector, and a response matching neither shape yields an empty
    /// one.
    pub async fn get_all(&self, params: &[(&str, &str)]) -> Result<Vec<T>, Error> {
        let body = self
            .state
            .prepared(Fetch::get(&self.state.http_client, &self.endpoint_url()))
            .query(params)
            .execute_value()
            .await?;
        normalize_list(body)
    }

    /// List records from a sub-path of this resource (e.g. `low-stock`),
    /// applying the same envelope normalization as `get_all`.
    pub async fn get_all_at(&self, path: &str, params: &[(&str, &str)]) -> Result<Vec<T>, Error> {
        let url = self.state.url(&format!("{}/{}", self.endpoint, path));
        let body = self
            .state
            .prepared(Fetch::get(&self.state.http_client, &url))
            .query(params)
            .execute_value()
            .await?;
        normalize_list(body)
    }

    /// Fetch one record by id. A 404 from the backend propagates as
    /// `Error::Api`; it is never masked.
    pub async fn get_by_id(&self, id: &str) -> Result<T, Error> {
        let body = self
            .state
            .prepared(Fetch::get(&self.state.http_client, &self.item_url(id)))
            .execute_value()
            .await?;
        normalize_record(body)
    }

    /// Create a record; returns the server-assigned full record
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<T, Error> {
        let body = self
            .state
            .prepared(Fetch::post(&self.state.http_client, &self.endpoint_url()))
            .json(payload)?
            .execute_value()
            .await?;
        normalize_record(body)
    }

    /// Partially update a record via PATCH. Exactly the given payload is
    /// sent; merging with the existing record is the backend's job.
    pub async fn update<P: Serialize>(&self, id: &str, payload: &P) -> Result<T, Error> {
        let body = self
            .state
            .prepared(Fetch::patch(&self.state.http_client, &self.item_url(id)))
            .json(payload)?
            .execute_value()
            .await?;
        normalize_record(body)
    }

    /// Replace a record via PUT, for the resources whose backend contract
    /// requires full replacement instead of a partial merge.
    pub async fn replace<P: Serialize>(&self, id: &str, payload: &P) -> Result<T, Error> {
        let body = self
            .state
            .prepared(Fetch::put(&self.state.http_client, &self.item_url(id)))
            .json(payload)?
            .execute_value()
            .await?;
        normalize_record(body)
    }

    /// Delete a record. Repeat deletion surfaces whatever the backend
    /// returns; the client does not mask it.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        self.state
            .prepared(Fetch::delete(&self.state.http_client, &self.item_url(id)))
            .execute_empty()
            .await
    }

    /// POST an action sub-path of one record (`{endpoint}/{id}/{action}`),
    /// used for status transitions like approve or dispatch.
    pub async fn post_action<P: Serialize>(
        &self,
        id: &str,
        action: &str,
        payload: &P,
    ) -> Result<T, Error> {
        let url = self
            .state
            .url(&format!("{}/{}/{}", self.endpoint, id, action));
        let body = self
            .state
            .prepared(Fetch::post(&self.state.http_client, &url))
            .json(payload)?
            .execute_value()
            .await?;
        normalize_record(body)
    }

    /// GET an arbitrary path relative to the API root, returning the raw
    /// JSON body. Escape hatch for endpoints that do not belong to this
    /// repository's resource.
    pub(crate) async fn get_value_at(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, Error> {
        let url = self.state.url(path);
        self.state
            .prepared(Fetch::get(&self.state.http_client, &url))
            .query(params)
            .execute_value()
            .await
    }

    /// POST to an arbitrary path relative to the API root
    pub(crate) async fn post_value_at<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
    ) -> Result<Value, Error> {
        let url = self.state.url(path);
        self.state
            .prepared(Fetch::post(&self.state.http_client, &url))
            .json(payload)?
            .execute_value()
            .await
    }
}
