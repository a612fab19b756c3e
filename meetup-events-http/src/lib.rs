use std::time::Duration;

use log::{debug, warn};
use meetup_core::Event;
use meetup_server_domain::{ServiceError, ServiceResult, event::EventRepository};
use reqwest::{StatusCode, Url};
use thiserror::Error;

pub const DEFAULT_EVENTS_API_URL: &str = "https://meetup-application-h68v.vercel.app/events";

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to deserialize response: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid events URL: {0}")]
    InvalidUrl(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Unexpected response status {0}")]
    NotOkResponse(StatusCode),
}

impl From<HttpError> for ServiceError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::NotFound => ServiceError::NotFound(error.to_string()),
            HttpError::InvalidUrl(_) => ServiceError::Internal(error.to_string()),
            HttpError::Request(_) | HttpError::Serde(_) | HttpError::NotOkResponse(_) => {
                ServiceError::Unavailable(error.to_string())
            }
        }
    }
}

/// Events repository backed by the remote events service.
///
/// `GET <base>` lists the collection, `GET <base>/<id>` reads one record.
#[derive(Clone)]
pub struct HttpEventRepository {
    base_url: Url,
    http_client: reqwest::Client,
}

impl HttpEventRepository {
    /// Without a timeout a hung upstream keeps the request waiting.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, HttpError> {
        let base_url =
            Url::parse(base_url).map_err(|e| HttpError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(HttpError::InvalidUrl(base_url.to_string()));
        }
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            base_url,
            http_client: builder.build()?,
        })
    }

    pub fn collection_url(&self) -> Url {
        self.base_url.clone()
    }

    /// The id is pushed as a single, percent-encoded path segment.
    pub fn item_url(&self, id: &str) -> Result<Url, HttpError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn fetch_body(&self, url: Url) -> Result<String, HttpError> {
        debug!("GET {}", url);
        let resp = self.http_client.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(HttpError::NotFound);
        }
        if !status.is_success() {
            return Err(HttpError::NotOkResponse(status));
        }
        Ok(resp.text().await?)
    }
}

/// Records that do not decode as an event are skipped, so one malformed entry
/// does not hide the rest of the collection.
pub fn decode_events(body: &str) -> Result<Vec<Event>, HttpError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    let events = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Skipping event record {}: {}", position, e);
                None
            }
        })
        .collect();
    Ok(events)
}

/// A `null` body is how the service answers for an id it does not know.
pub fn decode_event(body: &str) -> Result<Event, HttpError> {
    let event: Option<Event> = serde_json::from_str(body)?;
    event.ok_or(HttpError::NotFound)
}

#[async_trait::async_trait]
impl EventRepository for HttpEventRepository {
    async fn list_events(&self) -> ServiceResult<Vec<Event>> {
        let body = self.fetch_body(self.collection_url()).await?;
        let events = decode_events(&body)?;
        debug!("Fetched {} events", events.len());
        Ok(events)
    }

    async fn get_event(&self, id: &str) -> ServiceResult<Event> {
        let url = self.item_url(id)?;
        let body = self.fetch_body(url).await?;
        Ok(decode_event(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use meetup_core::EventType;

    use super::*;

    fn repository(url: &str) -> HttpEventRepository {
        HttpEventRepository::new(url, None).unwrap()
    }

    #[test]
    fn test_item_url() {
        let repo = repository("https://example.com/events");
        assert_eq!(
            repo.item_url("64f1a2b3").unwrap().as_str(),
            "https://example.com/events/64f1a2b3"
        );

        let repo = repository("https://example.com/api/events/");
        assert_eq!(
            repo.item_url("a b/c").unwrap().as_str(),
            "https://example.com/api/events/a%20b%2Fc"
        );
        assert_eq!(
            repo.collection_url().as_str(),
            "https://example.com/api/events/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpEventRepository::new("not a url", None),
            Err(HttpError::InvalidUrl(_))
        ));
        assert!(matches!(
            HttpEventRepository::new("mailto:events@example.com", None),
            Err(HttpError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_decode_events() {
        let body = r#"[
            {"_id": "1", "title": "Alpha Summit", "type": "Online", "date": "2024-05-01T09:00:00Z"},
            {"_id": "2", "title": "Beta Meetup", "type": "Offline", "price": "500"}
        ]"#;
        let events = decode_events(body).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event_type, Some(EventType::Offline));
        assert!(matches!(decode_events("{\"error\": true}"), Err(HttpError::Serde(_))));
    }

    #[test]
    fn test_decode_events_skips_malformed_records() {
        let body = r#"[
            {"_id": "a", "id": "a", "title": "X"},
            {"_id": "b", "title": null, "speakers": [{"role": "CTO"}]},
            {"_id": "c", "title": "Z", "tags": "not-a-list"},
            "garbage"
        ]"#;
        let events = decode_events(body).unwrap();
        let ids: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(events[1].title, "");
    }

    #[test]
    fn test_decode_event() {
        let event = decode_event(r#"{"_id": "1", "title": "Alpha Summit"}"#).unwrap();
        assert_eq!(event.title, "Alpha Summit");
        assert!(matches!(decode_event("null"), Err(HttpError::NotFound)));
        assert!(matches!(decode_event("<html>"), Err(HttpError::Serde(_))));
    }

    #[test]
    fn test_error_mapping() {
        assert!(matches!(
            ServiceError::from(HttpError::NotFound),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            ServiceError::from(HttpError::NotOkResponse(StatusCode::BAD_GATEWAY)),
            ServiceError::Unavailable(_)
        ));
        assert!(matches!(
            ServiceError::from(HttpError::InvalidUrl("x".to_string())),
            ServiceError::Internal(_)
        ));
    }
}
