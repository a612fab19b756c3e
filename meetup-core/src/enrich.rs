use crate::event::{Event, Speaker, Venue};

/// Fixed candidate tables the enrichment picks from.
pub mod pools {
    pub const VENUES: [(&str, &str); 5] = [
        (
            "Marriott Grand Ballroom",
            "Andheri East, Mumbai, Maharashtra 400059",
        ),
        (
            "The Lalit Convention Hall",
            "Barakhamba Avenue, Connaught Place, New Delhi 110001",
        ),
        (
            "Bangalore International Exhibition Centre",
            "Tumkur Road, Madavara, Bengaluru 562123",
        ),
        (
            "HICC Novotel",
            "Izzathnagar, Kondapur, Hyderabad, Telangana 500084",
        ),
        (
            "Chennai Trade Centre",
            "Mount Poonamallee Road, Nandambakkam, Chennai 600089",
        ),
    ];

    pub const DRESS_CODES: [&str; 5] = [
        "Smart casual",
        "Business formal",
        "Casual",
        "Business casual",
        "Semi-formal",
    ];

    pub const AGE_RESTRICTIONS: [&str; 3] = ["18 and above", "All ages welcome", "21 and above"];

    pub const DESCRIPTIONS: [&str; 6] = [
        "Join industry leaders and practitioners for a day of talks, live demos and \
         hands-on sessions. Whether you are just getting started or have years of \
         experience, you will leave with practical ideas you can apply straight away \
         and plenty of new connections.",
        "This meetup brings together developers, designers and product people to share \
         what they have learned building real products. Expect short lightning talks, \
         an open Q&A with the speakers and time to network over refreshments.",
        "An interactive workshop focused on emerging technologies and the problems they \
         solve. Attendees work in small groups on guided exercises, with mentors on hand \
         to answer questions. Bring a laptop and your curiosity.",
        "A community evening celebrating local founders and the ecosystem around them. \
         Hear candid stories about launching, scaling and failing, followed by a panel \
         discussion and an open networking session.",
        "Deep-dive sessions led by experienced engineers covering architecture, tooling \
         and the lessons learned running systems in production. The agenda balances \
         conceptual talks with concrete case studies.",
        "A relaxed gathering for anyone interested in learning something new. Sessions \
         are beginner friendly, slides are shared after the event and there is plenty \
         of time between talks to meet fellow attendees.",
    ];

    pub const TIME_PAIRS: [(&str, &str); 6] = [
        ("09:00", "12:00"),
        ("10:00", "13:00"),
        ("11:00", "15:00"),
        ("13:30", "17:00"),
        ("16:00", "19:00"),
        ("18:00", "21:00"),
    ];

    /// Assigned whole when a record has no speakers.
    pub const FALLBACK_SPEAKERS: [(&str, &str); 3] = [
        ("Sahil Mehta", "Marketing Manager"),
        ("Aditi Rao", "Product Lead"),
        ("Rahul Verma", "Software Engineer"),
    ];

    /// Assigned whole when a record has no tags.
    pub const FALLBACK_TAGS: [&str; 3] = ["Networking", "Technology", "Community"];
}

/// Maps an identifier onto `[0, pool_size)`.
///
/// The hash is `hash * 31 + unit` over the UTF-16 code units of `id`, wrapped
/// to `i32` at every step. The absolute value is taken unsigned so `i32::MIN`
/// does not overflow. A zero `pool_size` yields 0.
pub fn stable_index(id: &str, pool_size: usize) -> usize {
    let hash = id.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    });
    (hash.unsigned_abs() as usize)
        .checked_rem(pool_size)
        .unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolIndices {
    pub venue: usize,
    pub dress_code: usize,
    pub age_restriction: usize,
    pub description: usize,
    pub time_pair: usize,
}

impl PoolIndices {
    pub fn for_id(id: &str) -> Self {
        Self {
            venue: stable_index(id, pools::VENUES.len()),
            dress_code: stable_index(id, pools::DRESS_CODES.len()),
            age_restriction: stable_index(id, pools::AGE_RESTRICTIONS.len()),
            description: stable_index(id, pools::DESCRIPTIONS.len()),
            time_pair: stable_index(id, pools::TIME_PAIRS.len()),
        }
    }
}

/// Fills the presentational fields of `event` from the pools, keyed by `key`.
///
/// The venue is always replaced. Every other field is only written when it is
/// missing or blank.
pub fn enrich(key: &str, event: &mut Event) {
    let indices = PoolIndices::for_id(key);

    let (venue_name, venue_address) = pools::VENUES[indices.venue];
    event.venue = Some(Venue {
        name: venue_name.to_string(),
        address: venue_address.to_string(),
    });

    fill_text(&mut event.description, pools::DESCRIPTIONS[indices.description]);
    fill_text(&mut event.dress_code, pools::DRESS_CODES[indices.dress_code]);
    fill_text(
        &mut event.age_restriction,
        pools::AGE_RESTRICTIONS[indices.age_restriction],
    );
    fill_list(&mut event.tags, || {
        pools::FALLBACK_TAGS.iter().map(|tag| tag.to_string()).collect()
    });
    fill_list(&mut event.speakers, || {
        pools::FALLBACK_SPEAKERS
            .iter()
            .map(|(name, role)| Speaker {
                name: name.to_string(),
                role: role.to_string(),
                image: None,
            })
            .collect()
    });

    let (start, end) = pools::TIME_PAIRS[indices.time_pair];
    fill_text(&mut event.start_time, start);
    fill_text(&mut event.end_time, end);
}

fn fill_text(slot: &mut Option<String>, value: &str) {
    if slot.as_deref().is_none_or(|current| current.trim().is_empty()) {
        *slot = Some(value.to_string());
    }
}

fn fill_list<T>(slot: &mut Option<Vec<T>>, make: impl FnOnce() -> Vec<T>) {
    if slot.as_ref().is_none_or(Vec::is_empty) {
        *slot = Some(make());
    }
}
