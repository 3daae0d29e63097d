use crate::client::ClientError;
use crate::domain::{Listing, Viewport};
use serde::{Deserialize, Serialize};

const SEARCH_QUERY: &str = include_str!("../../graphql/search.graphql");

pub const PAGE_SIZE: u32 = 100;
const SEARCH_ID: &str = "423";
const SEARCH_SESSION_ID: &str = "2234432";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub operation_name: &'static str,
    pub variables: SearchVariables,
    pub query: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariables {
    pub search_id: &'static str,
    pub location: SearchLocation,
    pub search_session_id: &'static str,
    pub page_info: PageInfo,
    pub filters: Vec<SearchFilter>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchLocation {
    pub viewport: Viewport,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_number: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchFilter {
    pub key: &'static str,
    pub value: &'static str,
}

impl SearchPayload {
    /// The one search the app runs: first page, dishwasher, $3000-4000.
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            operation_name: "Search",
            variables: SearchVariables {
                search_id: SEARCH_ID,
                location: SearchLocation { viewport },
                search_session_id: SEARCH_SESSION_ID,
                page_info: PageInfo {
                    page_number: 1,
                    page_size: PAGE_SIZE,
                },
                filters: vec![
                    SearchFilter { key: "dishwasher", value: "true" },
                    SearchFilter { key: "max-price", value: "4000" },
                    SearchFilter { key: "min-price", value: "3000" },
                ],
            },
            query: SEARCH_QUERY,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    search: Option<SearchResults>,
}

#[derive(Debug, Deserialize)]
struct SearchResults {
    results: Option<Vec<Listing>>,
}

/// Pull `data.search.results` out of a GraphQL response body.
pub fn parse_results(body: &[u8]) -> Result<Vec<Listing>, ClientError> {
    let resp: SearchResponse =
        serde_json::from_slice(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    resp.data
        .and_then(|d| d.search)
        .and_then(|s| s.results)
        .ok_or(ClientError::NoResults)
}
