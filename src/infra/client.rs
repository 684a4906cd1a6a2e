//! Generic HTTP+JSON resource client.
//!
//! One client per microservice base URL. Adds the session's bearer token to
//! every request, and maps response status codes onto workflow error kinds.
//! A 401 clears the session before propagating, so the presentation layer
//! can redirect to authentication; that handling lives here, not in the
//! workflow.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::WorkflowError;
use crate::core::session::SessionContext;

/// HTTP-backed CRUD accessor for a named resource collection.
#[derive(Clone)]
pub struct ResourceClient {
    http: Client,
    base_url: Url,
    session: Arc<SessionContext>,
}

impl ResourceClient {
    /// Build a client for a service base URL.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        session: Arc<SessionContext>,
    ) -> Result<Self, WorkflowError> {
        let base_url = Url::parse(base_url).map_err(|e| WorkflowError::Transport {
            status: None,
            message: format!("invalid base url `{base_url}`: {e}"),
        })?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WorkflowError::Transport {
                status: None,
                message: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    fn url(&self, path: &str) -> Result<Url, WorkflowError> {
        self.base_url
            .join(path)
            .map_err(|e| WorkflowError::Transport {
                status: None,
                message: format!("invalid path `{path}`: {e}"),
            })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET a resource path and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, WorkflowError> {
        let request = self.authorize(self.http.get(self.url(path)?));
        self.dispatch(path, request).await
    }

    /// POST a JSON body to a resource path and decode the response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WorkflowError> {
        let request = self.authorize(self.http.post(self.url(path)?).json(body));
        self.dispatch(path, request).await
    }

    /// PUT a JSON body to a resource path and decode the response.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WorkflowError> {
        let request = self.authorize(self.http.put(self.url(path)?).json(body));
        self.dispatch(path, request).await
    }

    /// PUT to an action path (no body) with query parameters, decoding the
    /// response. Matches action routes like `PUT .../{id}/approve?approved_by=`.
    pub async fn put_action<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, WorkflowError> {
        let request = self.authorize(self.http.put(self.url(path)?).query(query));
        self.dispatch(path, request).await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, WorkflowError> {
        let response = request.send().await.map_err(|e| WorkflowError::Transport {
            status: None,
            message: format!("request to {path} failed: {e}"),
        })?;
        let response = self.check(path, response).await?;
        response.json().await.map_err(|e| WorkflowError::Transport {
            status: None,
            message: format!("malformed payload from {path}: {e}"),
        })
    }

    async fn check(&self, path: &str, response: Response) -> Result<Response, WorkflowError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            // Expired or invalid credential: drop the session so the
            // presentation layer redirects to authentication.
            tracing::warn!(path, "unauthorized response, clearing session");
            self.session.sign_out();
        }
        if status == StatusCode::NOT_FOUND {
            return Err(WorkflowError::NotFound(path.to_owned()));
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_owned());
        Err(WorkflowError::Transport {
            status: Some(status.as_u16()),
            message: format!("{path}: {message}"),
        })
    }
}
