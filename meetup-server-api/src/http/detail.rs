use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use meetup_core::ImageRef;
use meetup_server_domain::view::DetailState;
use serde::Deserialize;

use crate::{html::render_detail, http::AppState};

/// Navigation state handed over from the list page.
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    image: Option<String>,
}

pub async fn detail_page(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Query(params): Query<DetailParams>,
) -> (StatusCode, Html<String>) {
    let image = params.image.as_deref().and_then(ImageRef::parse);
    let view = app_state.event_service.detail_view(&id, image).await;
    let status = match view.state {
        DetailState::Loaded(_) | DetailState::Loading => StatusCode::OK,
        DetailState::NotFound | DetailState::Failed => StatusCode::NOT_FOUND,
    };
    (status, Html(render_detail(&view)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use meetup_core::{Event, EventType};
    use meetup_server_domain::event::{EventServiceImpl, MockEventRepository};

    use crate::html::NOT_FOUND_MESSAGE;

    use super::*;

    fn state(repository: &MockEventRepository) -> AppState {
        AppState {
            event_service: Arc::new(Box::new(EventServiceImpl::new(Arc::new(Box::new(
                repository.clone(),
            ))))),
        }
    }

    fn repository() -> MockEventRepository {
        MockEventRepository::with_events(vec![Event {
            id: "abc".to_string(),
            title: "Alpha Summit".to_string(),
            event_type: Some(EventType::Online),
            ..Default::default()
        }])
    }

    fn image(raw: &str) -> Query<DetailParams> {
        Query(DetailParams {
            image: Some(raw.to_string()),
        })
    }

    #[tokio::test]
    async fn test_renders_with_passed_image() {
        let repository = repository();
        let (status, Html(html)) =
            detail_page(Path("abc".to_string()), State(state(&repository)), image("1")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<h2 class=\"mb-3\">Alpha Summit</h2>"));
        assert!(html.contains(r#"<img src="/assets/ai.jpg""#));
        assert_eq!(repository.call_count(), 1);
    }

    #[tokio::test]
    async fn test_bad_image_state_falls_back() {
        let repository = repository();
        let (status, Html(html)) =
            detail_page(Path("abc".to_string()), State(state(&repository)), image("99")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<img src="/assets/tech.jpg""#));
    }

    #[tokio::test]
    async fn test_missing_event() {
        let repository = repository();
        let (status, Html(html)) = detail_page(
            Path("missing-123".to_string()),
            State(state(&repository)),
            Query(DetailParams::default()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn test_failed_fetch_looks_like_missing() {
        let repository = repository();
        repository.set_unavailable(true);
        let (status, Html(html)) = detail_page(
            Path("missing-123".to_string()),
            State(state(&repository)),
            Query(DetailParams::default()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains(NOT_FOUND_MESSAGE));
    }
}
