use std::sync::{Arc, Mutex};

use log::{debug, warn};
use meetup_core::{Event, EventQuery, ImageRef};

use crate::{
    ServiceError, ServiceResult,
    view::{EventDetailView, EventListView},
};

pub type ArcEventRepository = Arc<Box<dyn EventRepository + Send + Sync>>;

/// Read access to the remote events service.
#[async_trait::async_trait]
pub trait EventRepository {
    async fn list_events(&self) -> ServiceResult<Vec<Event>>;
    /// `ServiceError::NotFound` when the service does not know `id`.
    async fn get_event(&self, id: &str) -> ServiceResult<Event>;
}

pub type ArcEventService = Arc<Box<dyn EventService + Send + Sync>>;

#[async_trait::async_trait]
pub trait EventService {
    /// All events, or none when the service could not be read.
    async fn list_events(&self) -> Vec<Event>;
    /// The event as stored upstream, without enrichment.
    async fn get_event(&self, id: &str) -> Option<Event>;
    async fn list_view(&self, query: EventQuery) -> EventListView;
    async fn detail_view(&self, id: &str, image: Option<ImageRef>) -> EventDetailView;
}

pub struct EventServiceImpl {
    repository: ArcEventRepository,
}

impl EventServiceImpl {
    pub fn new(repository: ArcEventRepository) -> Self {
        Self { repository }
    }

    /// Reads the collection, logging a failed read.
    async fn load_events(&self) -> ServiceResult<Vec<Event>> {
        let result = self.repository.list_events().await;
        match &result {
            Ok(events) => debug!("Loaded {} events", events.len()),
            Err(e) => warn!("Failed to load events: {}", e),
        }
        result
    }

    /// Reads one record, logging a failed read. An empty id never reaches the
    /// repository.
    async fn load_event(&self, id: &str) -> ServiceResult<Event> {
        if id.trim().is_empty() {
            return ServiceError::bad_request("event id is empty");
        }
        let result = self.repository.get_event(id).await;
        match &result {
            Ok(_) => {}
            Err(ServiceError::NotFound(_)) => debug!("Event {} not found", id),
            Err(e) => warn!("Failed to load event {}: {}", id, e),
        }
        result
    }
}

#[async_trait::async_trait]
impl EventService for EventServiceImpl {
    async fn list_events(&self) -> Vec<Event> {
        self.load_events().await.unwrap_or_default()
    }

    async fn get_event(&self, id: &str) -> Option<Event> {
        self.load_event(id).await.ok()
    }

    async fn list_view(&self, query: EventQuery) -> EventListView {
        let mut view = EventListView::new(query);
        view.resolve(self.load_events().await);
        view
    }

    async fn detail_view(&self, id: &str, image: Option<ImageRef>) -> EventDetailView {
        let mut view = EventDetailView::new(id, image);
        view.resolve(self.load_event(id).await);
        view
    }
}

/// In-memory repository with canned responses, for tests.
#[derive(Clone, Default)]
pub struct MockEventRepository {
    events: Arc<Mutex<Vec<Event>>>,
    unavailable: Arc<Mutex<bool>>,
    calls: Arc<Mutex<usize>>,
}

#[allow(unused)]
impl MockEventRepository {
    pub fn with_events(events: Vec<Event>) -> Self {
        let repository = Self::default();
        *repository.events.lock().unwrap() = events;
        repository
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) -> ServiceResult<()> {
        *self.calls.lock().unwrap() += 1;
        if *self.unavailable.lock().unwrap() {
            return ServiceError::unavailable("mock repository is offline");
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventRepository for MockEventRepository {
    async fn list_events(&self) -> ServiceResult<Vec<Event>> {
        self.record_call()?;
        Ok(self.events.lock().unwrap().clone())
    }

    async fn get_event(&self, id: &str) -> ServiceResult<Event> {
        self.record_call()?;
        let events = self.events.lock().unwrap();
        match events.iter().find(|event| event.id == id) {
            Some(event) => Ok(event.clone()),
            None => ServiceError::not_found(format!("event '{}'", id)),
        }
    }
}
