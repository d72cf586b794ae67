//! HTTP client for the recipe backend.

use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use store::{Recipe, RecipeId, RecipePayload, Session};

use crate::error::ApiError;
use crate::query::RecipeQuery;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New account details for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Client for one backend, optionally acting on behalf of a signed-in user.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credential: None,
        }
    }

    /// Attach a credential to every request made by this client.
    pub fn with_credential(mut self, credential: Option<String>) -> Self {
        self.credential = credential.filter(|c| !c.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `base_url` followed by `segments`, each percent-encoded as one path
    /// segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let invalid = || ApiError::InvalidBaseUrl(self.base_url.clone());
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let builder = self.http.request(method, self.endpoint(segments)?);
        match &self.credential {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    /// Send and return the raw body of a success response.
    async fn send(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            tracing::debug!("Backend responded {}: {}", status, body);
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List recipes matching the dashboard filters.
    pub async fn list_recipes(&self, query: &RecipeQuery) -> Result<Vec<Recipe>, ApiError> {
        let builder = self
            .request(Method::GET, &["recipes"])?
            .query(&query.to_params());
        self.send_json(builder).await
    }

    /// Fetch one recipe. A missing id yields [`ApiError::NotFound`].
    pub async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, ApiError> {
        self.send_json(self.request(Method::GET, &["recipes", id.as_str()])?)
            .await
    }

    pub async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, ApiError> {
        let builder = self.request(Method::POST, &["recipes"])?.json(payload);
        let recipe: Recipe = self.send_json(builder).await?;
        tracing::info!("Created recipe {}", recipe.id);
        Ok(recipe)
    }

    /// Replace a recipe wholesale.
    pub async fn update_recipe(
        &self,
        id: &RecipeId,
        payload: &RecipePayload,
    ) -> Result<Recipe, ApiError> {
        let builder = self
            .request(Method::PUT, &["recipes", id.as_str()])?
            .json(payload);
        let recipe: Recipe = self.send_json(builder).await?;
        tracing::info!("Updated recipe {}", id);
        Ok(recipe)
    }

    /// Flip the favorite flag server-side and return the full updated record.
    pub async fn toggle_favorite(&self, id: &RecipeId) -> Result<Recipe, ApiError> {
        self.send_json(self.request(Method::PATCH, &["recipes", id.as_str(), "favorite"])?)
            .await
    }

    pub async fn delete_recipe(&self, id: &RecipeId) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &["recipes", id.as_str()])?)
            .await?;
        tracing::info!("Deleted recipe {}", id);
        Ok(())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        self.send_json(self.request(Method::POST, &["auth", "login"])?.json(request))
            .await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        self.send_json(self.request(Method::POST, &["auth", "register"])?.json(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(ApiClient::new("http://host/api/").base_url(), "http://host/api");
        assert_eq!(ApiClient::new("/api").base_url(), "/api");
    }

    #[test]
    fn test_empty_credential_is_ignored() {
        let client = ApiClient::new("/api").with_credential(Some(String::new()));
        assert!(client.credential.is_none());
        let client = ApiClient::new("/api").with_credential(Some("tok".to_string()));
        assert_eq!(client.credential.as_deref(), Some("tok"));
    }

    #[test]
    fn test_endpoint_encodes_each_segment() {
        let client = ApiClient::new("http://host/api/");
        let url = client.endpoint(&["recipes", "a/b?c#d"]).unwrap();
        assert_eq!(url.as_str(), "http://host/api/recipes/a%2Fb%3Fc%23d");

        let root = ApiClient::new("http://host:5000");
        assert_eq!(
            root.endpoint(&["auth", "login"]).unwrap().as_str(),
            "http://host:5000/auth/login"
        );
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        let err = ApiClient::new("/api").endpoint(&["recipes"]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}
