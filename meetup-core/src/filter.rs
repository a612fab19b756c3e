use std::fmt;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Online,
    Offline,
}

impl TypeFilter {
    pub const OPTIONS: [TypeFilter; 3] = [TypeFilter::All, TypeFilter::Online, TypeFilter::Offline];

    /// Unknown or missing values fall back to `All`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Online" => TypeFilter::Online,
            "Offline" => TypeFilter::Offline,
            _ => TypeFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Online => "Online",
            TypeFilter::Offline => "Offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All Events",
            TypeFilter::Online => "Online",
            TypeFilter::Offline => "Offline",
        }
    }

    pub fn matches(&self, event_type: Option<&EventType>) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Online => event_type == Some(&EventType::Online),
            TypeFilter::Offline => event_type == Some(&EventType::Offline),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQuery {
    pub search: String,
    pub type_filter: TypeFilter,
}

impl EventQuery {
    pub fn new(search: impl Into<String>, type_filter: TypeFilter) -> Self {
        Self {
            search: search.into(),
            type_filter,
        }
    }

    /// Case-insensitive substring match on the title, combined with the type
    /// filter.
    pub fn matches(&self, event: &Event) -> bool {
        let matches_search = event
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        matches_search && self.type_filter.matches(event.event_type.as_ref())
    }
}

/// Visible subset of `events`, in fetch order.
pub fn filter_events<'a>(events: &'a [Event], query: &EventQuery) -> Vec<&'a Event> {
    events.iter().filter(|event| query.matches(event)).collect()
}
