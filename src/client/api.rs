use crate::client::search::{parse_results, SearchPayload};
use crate::domain::homes::{
    AddFavoriteRequest, FavoriteHome, FavoritesBody, MarkSeenRequest, RemoveFavoriteRequest,
    SeenHome, SeenHomesBody,
};
use crate::domain::Listing;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("Home not found in favorites")]
    NotFound,

    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("No results found in response")]
    NoResults,
}

/// The calls the listing manager makes: the homes API and the GraphQL search,
/// both through the local server.
pub trait HomesApi {
    fn seen_homes(&self) -> Result<Vec<SeenHome>, ClientError>;

    fn favorites(&self) -> Result<Vec<FavoriteHome>, ClientError>;

    fn mark_seen(&self, body: &MarkSeenRequest) -> Result<(), ClientError>;

    fn add_favorite(&self, body: &AddFavoriteRequest) -> Result<(), ClientError>;

    /// `ClientError::NotFound` when the server had no such favorite.
    fn remove_favorite(&self, property_url: &str) -> Result<(), ClientError>;

    fn search(&self, payload: &SearchPayload) -> Result<Vec<Listing>, ClientError>;
}

pub struct HttpHomesApi {
    client: Client,
    base_url: String,
}

impl HttpHomesApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn send(&self, builder: RequestBuilder) -> Result<reqwest::blocking::Response, ClientError> {
        let resp = builder.send().map_err(|e| {
            log::error!("API call failed: {e}");
            ClientError::Network(e.to_string())
        })?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            log::error!("API call failed with status {status}");
            Err(ClientError::Http(status.as_u16()))
        }
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        self.send(self.client.get(self.url(endpoint)))?
            .json()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl HomesApi for HttpHomesApi {
    fn seen_homes(&self) -> Result<Vec<SeenHome>, ClientError> {
        let body: SeenHomesBody = self.get_json("/api/homes/seen")?;
        Ok(body.seen_homes)
    }

    fn favorites(&self) -> Result<Vec<FavoriteHome>, ClientError> {
        let body: FavoritesBody = self.get_json("/api/homes/favorites")?;
        Ok(body.favorites)
    }

    fn mark_seen(&self, body: &MarkSeenRequest) -> Result<(), ClientError> {
        self.send(self.client.post(self.url("/api/homes/seen")).json(body))?;
        Ok(())
    }

    fn add_favorite(&self, body: &AddFavoriteRequest) -> Result<(), ClientError> {
        self.send(self.client.post(self.url("/api/homes/favorites")).json(body))?;
        Ok(())
    }

    fn remove_favorite(&self, property_url: &str) -> Result<(), ClientError> {
        let body = RemoveFavoriteRequest {
            property_url: Some(property_url.to_string()),
        };
        match self.send(self.client.delete(self.url("/api/homes/favorites")).json(&body)) {
            Ok(_) => Ok(()),
            Err(ClientError::Http(404)) => Err(ClientError::NotFound),
            Err(e) => Err(e),
        }
    }

    fn search(&self, payload: &SearchPayload) -> Result<Vec<Listing>, ClientError> {
        let resp = self.send(self.client.post(self.url("/graphql")).json(payload))?;
        let body = resp
            .bytes()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        parse_results(&body)
    }
}
