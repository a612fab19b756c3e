mod enrich;
mod event;
mod filter;
pub mod format;
mod image;

pub use enrich::{PoolIndices, enrich, pools, stable_index};
pub use event::{Event, EventId, EventType, Price, Speaker, Venue};
pub use filter::{EventQuery, TypeFilter, filter_events};
pub use image::{BRAND_LOGO, DEFAULT_HERO_IMAGE, ILLUSTRATIVE_IMAGES, ImageRef};
