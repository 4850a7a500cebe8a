//! Stateless HTTP request builder and response parser for the heroes API.
//!
//! # Design
//! `HeroClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Any 2xx status counts as success; the backend is free to
//! answer 200, 201 or 204.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Hero, NewHero};

pub const DEFAULT_COLLECTION_PATH: &str = "api/heroes";

/// Synchronous, stateless client for the heroes collection.
#[derive(Debug, Clone)]
pub struct HeroClient {
    collection_url: String,
}

impl HeroClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_collection(base_url, DEFAULT_COLLECTION_PATH)
    }

    pub fn with_collection(base_url: &str, collection_path: &str) -> Self {
        Self {
            collection_url: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                collection_path.trim_matches('/')
            ),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    pub fn build_list_heroes(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url.clone(), None)
    }

    pub fn build_get_hero(&self, id: u32) -> HttpRequest {
        self.request(HttpMethod::Get, self.item_url(id), None)
    }

    /// The term is sent verbatim (percent-encoded); blank terms are the
    /// caller's concern.
    pub fn build_search_heroes(&self, term: &str) -> HttpRequest {
        let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
        self.request(
            HttpMethod::Get,
            format!("{}?name={encoded}", self.collection_url),
            None,
        )
    }

    pub fn build_add_hero(&self, hero: &NewHero) -> Result<HttpRequest, ApiError> {
        let body = to_json(hero)?;
        Ok(self.request(HttpMethod::Post, self.collection_url.clone(), Some(body)))
    }

    /// Updates go to the collection URL; the id travels in the body.
    pub fn build_update_hero(&self, hero: &Hero) -> Result<HttpRequest, ApiError> {
        let body = to_json(hero)?;
        Ok(self.request(HttpMethod::Put, self.collection_url.clone(), Some(body)))
    }

    pub fn build_delete_hero(&self, id: u32) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url(id), None)
    }

    pub fn parse_list_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_search_heroes(&self, response: HttpResponse) -> Result<Vec<Hero>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_add_hero(&self, response: HttpResponse) -> Result<Hero, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_update_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_hero(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{id}", self.collection_url)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HeroClient {
        HeroClient::new("http://localhost:3000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_heroes_produces_correct_request() {
        let req = client().build_list_heroes();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_get_hero_produces_correct_request() {
        let req = client().build_get_hero(13);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/heroes/13");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_search_heroes_encodes_term() {
        let req = client().build_search_heroes("dr n&i");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/heroes?name=dr+n%26i");
    }

    #[test]
    fn build_add_hero_produces_correct_request() {
        let req = client().build_add_hero(&NewHero::new("Tornado")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "Tornado" }));
    }

    #[test]
    fn build_update_hero_targets_collection() {
        let hero = Hero {
            id: 14,
            name: "Celeritas".to_string(),
        };
        let req = client().build_update_hero(&hero).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["id"], 14);
        assert_eq!(body["name"], "Celeritas");
    }

    #[test]
    fn build_delete_hero_produces_correct_request() {
        let req = client().build_delete_hero(20);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/api/heroes/20");
        assert!(req.body.is_none());
    }

    #[test]
    fn custom_collection_path_is_normalized() {
        let client = HeroClient::with_collection("http://h:1/", "/v2/heroes/");
        assert_eq!(client.collection_url(), "http://h:1/v2/heroes");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = HeroClient::new("http://localhost:3000/");
        let req = client.build_list_heroes();
        assert_eq!(req.path, "http://localhost:3000/api/heroes");
    }

    #[test]
    fn parse_list_heroes_success() {
        let heroes = client()
            .parse_list_heroes(response(200, r#"[{"id":12,"name":"Dr. Nice"}]"#))
            .unwrap();
        assert_eq!(heroes.len(), 1);
        assert_eq!(heroes[0].name, "Dr. Nice");
    }

    #[test]
    fn parse_list_heroes_bad_json() {
        let err = client().parse_list_heroes(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_get_hero_not_found() {
        let err = client().parse_get_hero(response(404, "")).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }

    #[test]
    fn parse_add_hero_accepts_created() {
        let hero = client()
            .parse_add_hero(response(201, r#"{"id":21,"name":"X"}"#))
            .unwrap();
        assert_eq!(hero.id, 21);
    }

    #[test]
    fn parse_add_hero_wrong_status() {
        let err = client()
            .parse_add_hero(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_hero_ignores_body() {
        assert!(client().parse_update_hero(response(200, "whatever")).is_ok());
        assert!(client().parse_update_hero(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_hero_not_found() {
        let err = client().parse_delete_hero(response(404, "")).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
    }
}
