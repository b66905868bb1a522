//! Stateless HTTP request builder and response parser for the wishlist API.
//!
//! # Design
//! `WishlistClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The bearer token is passed per call because the identity
//! provider is asked for a fresh one every time; the client never stores it.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Movie, MovieId, NewMovie};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Synchronous, stateless client for the wishlist API.
#[derive(Debug, Clone)]
pub struct WishlistClient {
    base_url: String,
}

impl Default for WishlistClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl WishlistClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_movies(&self, token: Option<&str>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/movies", self.base_url),
            headers: auth_headers(token),
            body: None,
        }
    }

    pub fn build_add_movie(
        &self,
        input: &NewMovie,
        token: Option<&str>,
    ) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        headers.extend(auth_headers(token));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/movies", self.base_url),
            headers,
            body: Some(body),
        })
    }

    /// The request carries no body: the server flips the flag itself.
    pub fn build_toggle_watched(&self, id: &MovieId, token: Option<&str>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/movies/{id}", self.base_url),
            headers: auth_headers(token),
            body: None,
        }
    }

    pub fn build_delete_movie(&self, id: &MovieId, token: Option<&str>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/movies/{id}", self.base_url),
            headers: auth_headers(token),
            body: None,
        }
    }

    pub fn parse_list_movies(&self, response: HttpResponse) -> Result<Vec<Movie>, ApiError> {
        check_status(&response)?;
        parse_json(&response)
    }

    pub fn parse_add_movie(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        check_status(&response)?;
        parse_json(&response)
    }

    pub fn parse_toggle_watched(&self, response: HttpResponse) -> Result<Movie, ApiError> {
        check_status(&response)?;
        parse_json(&response)
    }

    /// The delete response has no defined body, so only the status matters.
    pub fn parse_delete_movie(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn auth_headers(token: Option<&str>) -> Vec<(String, String)> {
    match token {
        Some(token) => vec![("authorization".to_string(), format!("Bearer {token}"))],
        None => Vec::new(),
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        401 | 403 => Err(ApiError::Unauthorized {
            status: response.status,
        }),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

fn parse_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}
