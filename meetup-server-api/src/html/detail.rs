use std::fmt::Write;

use meetup_core::{
    Event,
    format::{format_date, format_time, format_time_range},
};
use meetup_server_domain::view::{DetailState, EventDetailView};

use super::{asset_url, escape, page};

pub const NOT_FOUND_MESSAGE: &str = "Event not found";

const CURRENCY_PREFIX: &str = "₹";

pub fn render_detail(view: &EventDetailView) -> String {
    match &view.state {
        DetailState::Loading => page(
            "Loading...",
            r#"<div class="text-center mt-5">Loading...</div>"#,
        ),
        DetailState::NotFound | DetailState::Failed => page(
            NOT_FOUND_MESSAGE,
            &format!(r#"<div class="text-center mt-5">{NOT_FOUND_MESSAGE}</div>"#),
        ),
        DetailState::Loaded(event) => page(&event.title, &loaded(view, event)),
    }
}

fn loaded(view: &EventDetailView, event: &Event) -> String {
    let hero = asset_url(view.hero_image());
    let mut body = String::new();
    body.push_str(r#"<div class="container my-4">"#);
    let _ = write!(
        body,
        r#"<div class="d-flex justify-content-between mb-4"><a href="/" class="btn btn-outline-secondary">← Back to Events</a><input type="search" class="form-control w-25" placeholder="Search..." value="{}"></div>"#,
        escape(&view.search)
    );
    body.push_str(r#"<div class="row">"#);
    body.push_str(&primary_column(event, &hero));
    body.push_str(&secondary_column(event, &hero));
    body.push_str("</div></div>");
    body
}

fn primary_column(event: &Event, hero: &str) -> String {
    let mut col = String::new();
    col.push_str(r#"<div class="col-md-8">"#);
    let _ = write!(
        col,
        r#"<img src="{}" alt="{}" class="img-fluid rounded mb-4" style="max-height: 400px; object-fit: cover; width: 100%">"#,
        hero,
        escape(&event.title)
    );
    let _ = write!(col, r#"<h2 class="mb-3">{}</h2>"#, escape(&event.title));

    if let Some(host) = non_blank(&event.host) {
        let _ = write!(
            col,
            r#"<p class="text-muted"><strong>Hosted By:</strong> {}</p>"#,
            escape(host)
        );
    }
    if let Some(description) = non_blank(&event.description) {
        let _ = write!(
            col,
            r#"<h5 class="mb-2">Details:</h5><p>{}</p>"#,
            escape(description)
        );
    }

    let dress_code = non_blank(&event.dress_code);
    let age_restriction = non_blank(&event.age_restriction);
    if dress_code.is_some() || age_restriction.is_some() {
        col.push_str(r#"<h5 class="mt-4">Additional Information:</h5>"#);
        if let Some(dress_code) = dress_code {
            let _ = write!(
                col,
                "<p><strong>Dress Code:</strong> {}</p>",
                escape(dress_code)
            );
        }
        if let Some(age_restriction) = age_restriction {
            let _ = write!(
                col,
                "<p><strong>Age Restrictions:</strong> {}</p>",
                escape(age_restriction)
            );
        }
    }

    col.push_str(r#"<h5 class="mt-4">Event Tags:</h5><div class="mb-4">"#);
    let tags = event.detail_tags();
    if tags.is_empty() {
        col.push_str("<span>No tags available</span>");
    }
    for tag in tags {
        let _ = write!(
            col,
            r#"<span class="badge bg-danger me-2">{}</span>"#,
            escape(tag)
        );
    }
    col.push_str("</div></div>");
    col
}

fn secondary_column(event: &Event, hero: &str) -> String {
    let mut col = String::new();
    col.push_str(r#"<div class="col-md-4">"#);

    col.push_str(r#"<div class="card shadow-sm p-3 mb-4">"#);
    let date = non_blank(&event.date).map(format_date);
    let time = schedule_line(event);
    if date.is_some() || time.is_some() {
        let _ = write!(
            col,
            "<p>{}<br>{}</p>",
            escape(date.as_deref().unwrap_or_default()),
            escape(time.as_deref().unwrap_or_default())
        );
    }
    if let Some(location) = non_blank(&event.location) {
        let _ = write!(col, "<p>{}</p>", escape(location));
    }
    if let Some(price) = event.displayable_price() {
        let _ = write!(
            col,
            "<p><strong>{} {}</strong></p>",
            CURRENCY_PREFIX,
            escape(&price.to_string())
        );
    }
    col.push_str("</div>");

    if let Some(venue) = &event.venue {
        let _ = write!(
            col,
            r#"<div class="card shadow-sm p-3 mb-4"><h6 class="mb-1">{}</h6><p class="text-muted mb-0">{}</p></div>"#,
            escape(&venue.name),
            escape(&venue.address)
        );
    }

    col.push_str(
        r#"<h5 class="mt-4 mb-3">Speakers:</h5><div class="d-flex gap-2 mb-3 flex-wrap">"#,
    );
    let speakers = event.speakers();
    if speakers.is_empty() {
        col.push_str("<p>No speakers listed</p>");
    }
    for speaker in speakers {
        let avatar = match non_blank(&speaker.image) {
            Some(image) => image.to_string(),
            None => hero.to_string(),
        };
        let _ = write!(
            col,
            r#"<div class="card text-center p-2" style="width: 120px"><img src="{}" alt="{}" class="img-fluid rounded-circle mb-2" style="height: 80px; width: 80px; object-fit: cover"><h6 class="mb-0">{}</h6><p class="text-muted small">{}</p></div>"#,
            escape(&avatar),
            escape(&speaker.name),
            escape(&speaker.name),
            escape(&speaker.role)
        );
    }
    col.push_str("</div>");

    col.push_str(r#"<button type="button" class="btn btn-danger w-100">RSVP</button>"#);
    col.push_str("</div>");
    col
}

/// `start - end` when both ends are known, else the single `time` value.
fn schedule_line(event: &Event) -> Option<String> {
    match (non_blank(&event.start_time), non_blank(&event.end_time)) {
        (Some(start), Some(end)) => Some(format_time_range(start, end)),
        _ => non_blank(&event.time).map(format_time),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
