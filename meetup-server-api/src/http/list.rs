use axum::{
    extract::{Query, State},
    response::Html,
};
use meetup_core::{EventQuery, TypeFilter};
use serde::Deserialize;

use crate::{html::render_list, http::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    search: Option<String>,
    #[serde(rename = "type")]
    type_filter: Option<String>,
}

impl ListParams {
    fn into_query(self) -> EventQuery {
        EventQuery::new(
            self.search.unwrap_or_default(),
            self.type_filter
                .as_deref()
                .map_or(TypeFilter::All, TypeFilter::parse),
        )
    }
}

pub async fn list_page(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Html<String> {
    let view = app_state
        .event_service
        .list_view(params.into_query())
        .await;
    Html(render_list(&view))
}
