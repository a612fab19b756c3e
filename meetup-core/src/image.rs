/// Decorative card images, cycled by position on the list page.
pub const ILLUSTRATIVE_IMAGES: [&str; 6] = [
    "tech.jpg",
    "ai.jpg",
    "green.jpg",
    "health.jpg",
    "startup.jpg",
    "cyber.jpg",
];

pub const DEFAULT_HERO_IMAGE: &str = "tech.jpg";

pub const BRAND_LOGO: &str = "meetup.png";

/// Reference to one of the illustrative images, handed from the list page to
/// the detail page. It says nothing about the event itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(usize);

impl ImageRef {
    pub fn for_position(position: usize) -> Self {
        Self(position % ILLUSTRATIVE_IMAGES.len())
    }

    pub fn from_index(index: usize) -> Option<Self> {
        (index < ILLUSTRATIVE_IMAGES.len()).then_some(Self(index))
    }

    /// Lenient parse of navigation state; anything unusable is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<usize>().ok().and_then(Self::from_index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn file_name(&self) -> &'static str {
        ILLUSTRATIVE_IMAGES[self.0]
    }
}
