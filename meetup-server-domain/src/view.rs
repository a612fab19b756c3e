use meetup_core::{
    DEFAULT_HERO_IMAGE, Event, EventId, EventQuery, ImageRef, enrich, filter_events,
};

use crate::{ServiceError, ServiceResult};

#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Event>),
    /// The upstream read failed. Shown exactly like an empty result.
    Failed,
}

#[derive(Clone, Debug)]
pub struct ListedEvent<'a> {
    pub event: &'a Event,
    pub image: ImageRef,
}

/// State behind the list page: one fetch, then filtering on the fetched set.
#[derive(Clone, Debug)]
pub struct EventListView {
    pub state: ListState,
    pub query: EventQuery,
}

impl EventListView {
    pub fn new(query: EventQuery) -> Self {
        Self {
            state: ListState::Loading,
            query,
        }
    }

    pub fn resolve(&mut self, result: ServiceResult<Vec<Event>>) {
        self.state = match result {
            Ok(events) => ListState::Loaded(events),
            Err(_) => ListState::Failed,
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    pub fn events(&self) -> &[Event] {
        match &self.state {
            ListState::Loaded(events) => events.as_slice(),
            ListState::Loading | ListState::Failed => &[],
        }
    }

    /// Matching events with their card image. The image cycles over the
    /// position in the filtered sequence, not the fetch order.
    pub fn visible(&self) -> Vec<ListedEvent<'_>> {
        filter_events(self.events(), &self.query)
            .into_iter()
            .enumerate()
            .map(|(position, event)| ListedEvent {
                event,
                image: ImageRef::for_position(position),
            })
            .collect()
    }

    pub fn shows_no_events(&self) -> bool {
        !self.is_loading() && self.visible().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Box<Event>),
    NotFound,
    /// The upstream read failed. Shown exactly like `NotFound`.
    Failed,
}

#[derive(Clone, Debug)]
pub struct EventDetailView {
    pub id: EventId,
    pub state: DetailState,
    /// Image carried over from the list page, if the visitor came from there.
    pub image: Option<ImageRef>,
    /// Rendered in the header search box; it does not filter anything.
    pub search: String,
}

impl EventDetailView {
    pub fn new(id: impl Into<EventId>, image: Option<ImageRef>) -> Self {
        Self {
            id: id.into(),
            state: DetailState::Loading,
            image,
            search: String::new(),
        }
    }

    /// Stores the fetched event, enriched, or the reason there is none.
    /// Enrichment is keyed on the requested id, not the record's own.
    pub fn resolve(&mut self, result: ServiceResult<Event>) {
        self.state = match result {
            Ok(event) if event.is_blank() => DetailState::NotFound,
            Ok(mut event) => {
                if event.id.trim().is_empty() {
                    event.id = self.id.clone();
                }
                enrich(&self.id, &mut event);
                DetailState::Loaded(Box::new(event))
            }
            Err(ServiceError::NotFound(_)) | Err(ServiceError::BadRequest(_)) => {
                DetailState::NotFound
            }
            Err(_) => DetailState::Failed,
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DetailState::Loading)
    }

    pub fn event(&self) -> Option<&Event> {
        match &self.state {
            DetailState::Loaded(event) => Some(&**event),
            _ => None,
        }
    }

    pub fn hero_image(&self) -> &'static str {
        self.image.map_or(DEFAULT_HERO_IMAGE, |image| image.file_name())
    }
}

#[cfg(test)]
mod tests {
    use meetup_core::{EventType, TypeFilter, pools, stable_index};

    use super::*;

    fn titled(id: &str, title: &str, event_type: EventType) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            event_type: Some(event_type),
            ..Default::default()
        }
    }

    #[test]
    fn test_list_view_starts_loading() {
        let view = EventListView::new(EventQuery::default());
        assert!(view.is_loading());
        assert!(view.visible().is_empty());
        assert!(!view.shows_no_events());
    }

    #[test]
    fn test_images_follow_filtered_position() {
        let mut view = EventListView::new(EventQuery::new("", TypeFilter::Offline));
        view.resolve(Ok(vec![
            titled("1", "One", EventType::Online),
            titled("2", "Two", EventType::Offline),
            titled("3", "Three", EventType::Online),
            titled("4", "Four", EventType::Offline),
        ]));
        let visible = view.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].event.id, "2");
        assert_eq!(visible[0].image.index(), 0);
        assert_eq!(visible[1].event.id, "4");
        assert_eq!(visible[1].image.index(), 1);
    }

    #[test]
    fn test_detail_resolve_enriches() {
        let mut view = EventDetailView::new("abc", None);
        assert!(view.is_loading());
        view.resolve(Ok(titled("abc", "Alpha Summit", EventType::Online)));

        let event = view.event().unwrap();
        let venue_index = stable_index("abc", pools::VENUES.len());
        assert_eq!(event.venue.as_ref().unwrap().name, pools::VENUES[venue_index].0);
        assert_eq!(view.hero_image(), DEFAULT_HERO_IMAGE);
    }

    #[test]
    fn test_detail_resolve_uses_requested_id_when_record_has_none() {
        let mut view = EventDetailView::new("abc", None);
        view.resolve(Ok(Event {
            title: "Untagged".to_string(),
            ..Default::default()
        }));
        assert_eq!(view.event().unwrap().id, "abc");
    }

    #[test]
    fn test_detail_resolve_keys_enrichment_on_requested_id() {
        let mut view = EventDetailView::new("abc", None);
        view.resolve(Ok(titled("hello", "Alpha Summit", EventType::Online)));

        let event = view.event().unwrap();
        assert_eq!(event.id, "hello");
        let venue_index = stable_index("abc", pools::VENUES.len());
        assert_ne!(venue_index, stable_index("hello", pools::VENUES.len()));
        assert_eq!(event.venue.as_ref().unwrap().name, pools::VENUES[venue_index].0);
    }

    #[test]
    fn test_detail_resolve_failures() {
        let mut view = EventDetailView::new("missing-123", None);
        view.resolve(ServiceError::not_found("missing-123"));
        assert_eq!(view.state, DetailState::NotFound);

        let mut view = EventDetailView::new("missing-123", None);
        view.resolve(Ok(Event::default()));
        assert_eq!(view.state, DetailState::NotFound);

        let mut view = EventDetailView::new("x", None);
        view.resolve(ServiceError::unavailable("connection refused"));
        assert_eq!(view.state, DetailState::Failed);
    }
}
