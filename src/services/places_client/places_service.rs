use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use super::types::places_service_error::PlacesServiceError;
use crate::{
    requests::{DefaultLanguage, PlacesRequest},
    responses::places_response::PlacesResponse,
    types::place_result_item::PlaceResultItem,
    utils::error::ResponseError,
};

pub const DEFAULT_HOST: &str = "https://maps.googleapis.com";

#[derive(Clone, Debug)]
pub struct PlacesServiceConfig {
    pub api_key: String,
    pub host: String,
    /// Language sent with requests that do not set one themselves.
    pub default_language: Option<String>,
}

impl PlacesServiceConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            host: DEFAULT_HOST.to_string(),
            default_language: None,
        }
    }
}

impl DefaultLanguage for PlacesServiceConfig {
    fn default_language(&self) -> Option<String> {
        self.default_language.clone()
    }
}

#[derive(Clone)]
pub struct PlacesService {
    config: PlacesServiceConfig,
    client: reqwest::Client,
}

impl PlacesService {
    pub fn new(config: PlacesServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &PlacesServiceConfig {
        &self.config
    }

    pub async fn send<R: PlacesRequest>(
        &self,
        request: R,
    ) -> Result<PlacesResponse<R, PlaceResultItem>, PlacesServiceError> {
        self.send_as(request).await
    }

    /// Like [`send`](Self::send), parsing result items as `I`.
    ///
    /// A non-OK API status is not an error here; check
    /// [`PlacesResponse::status`] on the returned response.
    pub async fn send_as<R, I>(&self, request: R) -> Result<PlacesResponse<R, I>, PlacesServiceError>
    where
        R: PlacesRequest,
        I: DeserializeOwned,
    {
        let url = request
            .url(&self.config.host, &self.config.api_key, &self.config)
            .map_err(|e| {
                error!(kind = request.kind(), "Failed to encode places request: {}", e);
                e
            })?;

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                // The url carries the api key.
                let e = e.without_url();
                error!(kind = request.kind(), "Failed to send places request: {}", e);
                e
            })?
            .text()
            .await?;

        let payload = serde_json::from_str::<Value>(&body).map_err(|e| {
            error!(kind = request.kind(), "Places response body is not JSON: {}", e);
            ResponseError::from(e)
        })?;

        let response = PlacesResponse::parse(&payload, request)?;
        debug!(status = %response.status(), "Received places response");

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde::Deserialize;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::{
        requests::{
            autocomplete_request::AutocompleteRequest, text_search_request::TextSearchRequest,
        },
        types::{place_type::AutocompletePlaceType, response_status::ResponseStatus},
        utils::error::RequestError,
    };

    fn gen_service(host: String) -> PlacesService {
        PlacesService::new(PlacesServiceConfig {
            api_key: "key".to_string(),
            host,
            default_language: Some("en".to_string()),
        })
    }

    #[tokio::test]
    async fn test_autocomplete() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let mock = mock_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("input".to_string(), "Test".to_string()),
                Matcher::UrlEncoded("location".to_string(), "40.7128,-74.006".to_string()),
                Matcher::UrlEncoded("radius".to_string(), "500".to_string()),
                Matcher::UrlEncoded("types".to_string(), "(cities)".to_string()),
                Matcher::UrlEncoded("language".to_string(), "en".to_string()),
                Matcher::UrlEncoded("key".to_string(), "key".to_string()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "status": "OK",
                    "predictions": [{
                        "place_id": "123",
                        "description": "Test Main, Test Sec",
                        "structured_formatting": {
                            "main_text": "Test Main",
                            "secondary_text": "Test Sec"
                        }
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let request = AutocompleteRequest::new("Test")
            .unwrap()
            .with_location(crate::types::lat_long_location::LatLongLocation::new(
                40.7128, -74.006,
            ))
            .with_radius(500)
            .with_place_type(AutocompletePlaceType::Cities);

        let response = service.send(request).await.unwrap();

        mock.assert_async().await;

        assert_eq!(response.status(), ResponseStatus::Ok);
        assert_eq!(response.results().len(), 1);
        assert_eq!(response.results()[0].place_id, "123");
        assert_eq!(response.results()[0].display_text(), "Test Main");
    }

    #[tokio::test]
    async fn test_text_search_next_page() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let first_page = mock_server
            .mock("GET", "/maps/api/place/textsearch/json")
            .match_query(Matcher::Regex(
                "^language=en&query=pizza%20in%20New%20York&key=key$".to_string(),
            ))
            .with_body(
                json!({
                    "status": "OK",
                    "results": [{ "place_id": "1", "name": "Joe's Pizza" }],
                    "next_page_token": "abc123",
                    "html_attributions": []
                })
                .to_string(),
            )
            .create_async()
            .await;

        let second_page = mock_server
            .mock("GET", "/maps/api/place/textsearch/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".to_string(), "pizza in New York".to_string()),
                Matcher::UrlEncoded("pagetoken".to_string(), "abc123".to_string()),
            ]))
            .with_body(
                json!({
                    "status": "OK",
                    "results": [{ "place_id": "2", "name": "Prince Street Pizza" }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = service
            .send(TextSearchRequest::new("pizza in New York").unwrap())
            .await
            .unwrap();

        assert!(response.has_next_page());

        let next = response.next_page_request().unwrap();
        let response = service.send(next).await.unwrap();

        first_page.assert_async().await;
        second_page.assert_async().await;

        assert!(!response.has_next_page());
        assert_eq!(response.results()[0].display_text(), "Prince Street Pizza");
    }

    #[tokio::test]
    async fn test_api_error_status_is_returned() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let mock = mock_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Any)
            .with_body(
                json!({
                    "status": "OVER_QUERY_LIMIT",
                    "error_message": "You have exceeded your daily request quota for this API.",
                    "predictions": []
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = service
            .send(AutocompleteRequest::new("Test").unwrap())
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(response.status(), ResponseStatus::ApiLimitExceeded);
        assert!(response.results().is_empty());
        assert!(response.error_message().is_some());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_invalid_body() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let mock = mock_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Any)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let err = service
            .send(AutocompleteRequest::new("Test").unwrap())
            .await
            .err()
            .unwrap();

        mock.assert_async().await;

        assert!(matches!(
            err,
            PlacesServiceError::Response(ResponseError::InvalidJson(_))
        ));
        assert!(logs_contain("Places response body is not JSON"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_http_error_status() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let mock = mock_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = service
            .send(AutocompleteRequest::new("Test").unwrap())
            .await
            .err()
            .unwrap();

        mock.assert_async().await;

        assert!(matches!(err, PlacesServiceError::Transport(_)));
        assert!(logs_contain("Failed to send places request"));
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_sent() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let mock = mock_server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let request = AutocompleteRequest::new("Test").unwrap().with_country("USA");
        let err = service.send(request).await.err().unwrap();

        mock.assert_async().await;

        assert!(matches!(
            err,
            PlacesServiceError::Request(RequestError::Invalid(_))
        ));
    }

    #[derive(Debug, Deserialize)]
    struct OpeningHoursItem {
        place_id: String,
        opening_hours: Option<OpeningHours>,
    }

    #[derive(Debug, Deserialize)]
    struct OpeningHours {
        open_now: bool,
    }

    #[tokio::test]
    async fn test_custom_item_type() {
        let mut mock_server = mockito::Server::new_async().await;
        let service = gen_service(mock_server.url());

        let mock = mock_server
            .mock("GET", "/maps/api/place/textsearch/json")
            .match_query(Matcher::Any)
            .with_body(
                json!({
                    "status": "OK",
                    "results": [
                        { "place_id": "1", "opening_hours": { "open_now": true } },
                        { "place_id": "2" }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = service
            .send_as::<_, OpeningHoursItem>(TextSearchRequest::new("bar").unwrap())
            .await
            .unwrap();

        mock.assert_async().await;

        assert_eq!(response.results()[0].place_id, "1");
        assert!(response.results()[0].opening_hours.as_ref().unwrap().open_now);
        assert!(response.results()[1].opening_hours.is_none());
    }

    #[test]
    fn config_defaults_to_google_host() {
        let config = PlacesServiceConfig::new("key");

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.default_language(), None);
    }
}
