use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub type EventId = String;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Online,
    Offline,
    Other(String),
}

impl EventType {
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Online => "Online",
            EventType::Offline => "Offline",
            EventType::Other(other) => other,
        }
    }
}

impl From<String> for EventType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Online" => EventType::Online,
            "Offline" => EventType::Offline,
            _ => EventType::Other(value),
        }
    }
}

impl From<EventType> for String {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ticket price as sent upstream, either a bare number or free text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(serde_json::Number),
    Text(String),
}

impl Price {
    /// Zero amounts and blank text are treated as "no price".
    pub fn is_displayable(&self) -> bool {
        match self {
            Price::Amount(amount) => amount.as_f64().is_some_and(|value| value != 0.0),
            Price::Text(text) => !text.trim().is_empty(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) if amount.is_f64() => match amount.as_f64() {
                Some(value) => write!(f, "{}", value),
                None => write!(f, "{}", amount),
            },
            Price::Amount(amount) => write!(f, "{}", amount),
            Price::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "EventRecord")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: Option<String>,
    pub host: Option<String>,
    pub location: Option<String>,
    pub venue: Option<Venue>,
    pub price: Option<Price>,
    pub tags: Option<Vec<String>>,
    pub event_tags: Option<Vec<String>>,
    pub speakers: Option<Vec<Speaker>>,
    pub dress_code: Option<String>,
    pub age_restriction: Option<String>,
}

/// Wire shape of an event. Records may carry `_id`, `id` or both, and send
/// `null` for any field.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    record_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(rename = "type")]
    event_type: Option<EventType>,
    date: Option<String>,
    time: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    description: Option<String>,
    host: Option<String>,
    location: Option<String>,
    venue: Option<Venue>,
    price: Option<Price>,
    tags: Option<Vec<String>>,
    event_tags: Option<Vec<String>>,
    speakers: Option<Vec<Speaker>>,
    dress_code: Option<String>,
    age_restriction: Option<String>,
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        let id = if record.record_id.trim().is_empty() {
            record.id
        } else {
            record.record_id
        };
        Event {
            id,
            title: record.title,
            event_type: record.event_type,
            date: record.date,
            time: record.time,
            start_time: record.start_time,
            end_time: record.end_time,
            description: record.description,
            host: record.host,
            location: record.location,
            venue: record.venue,
            price: record.price,
            tags: record.tags,
            event_tags: record.event_tags,
            speakers: record.speakers,
            dress_code: record.dress_code,
            age_restriction: record.age_restriction,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Event {
    pub fn is_online(&self) -> bool {
        matches!(self.event_type, Some(EventType::Online))
    }

    pub fn type_label(&self) -> &str {
        self.event_type.as_ref().map_or("", EventType::as_str)
    }

    /// Tags shown on list cards. Cards read `eventTags` and only fall back to
    /// `tags` when the upstream record has no `eventTags` at all.
    pub fn list_tags(&self) -> &[String] {
        self.event_tags
            .as_deref()
            .or(self.tags.as_deref())
            .unwrap_or(&[])
    }

    pub fn detail_tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn speakers(&self) -> &[Speaker] {
        self.speakers.as_deref().unwrap_or(&[])
    }

    pub fn displayable_price(&self) -> Option<&Price> {
        self.price.as_ref().filter(|price| price.is_displayable())
    }

    /// True for a record sent back without identity or title, which is how an
    /// unknown id shows up on some deployments of the events service.
    pub fn is_blank(&self) -> bool {
        self.id.trim().is_empty() && self.title.trim().is_empty()
    }
}
