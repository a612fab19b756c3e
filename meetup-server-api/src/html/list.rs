use std::fmt::Write;

use meetup_core::{BRAND_LOGO, TypeFilter, format::format_date_time};
use meetup_server_domain::view::{EventListView, ListedEvent};

use super::{asset_url, encode_path_segment, escape, page};

pub const NO_EVENTS_MESSAGE: &str = "No events found.";

pub fn render_list(view: &EventListView) -> String {
    if view.is_loading() {
        return page("Upcoming Events", &spinner());
    }

    let mut body = String::new();
    body.push_str(r#"<div class="container my-4">"#);
    let _ = write!(
        body,
        r#"<div class="d-flex align-items-center justify-content-center mb-4"><img src="{}" alt="Meetup Logo" style="height: 60px; margin-right: 10px"><h1 class="mb-0">Upcoming Events</h1></div>"#,
        asset_url(BRAND_LOGO)
    );
    body.push_str(&search_form(view));

    body.push_str(r#"<div class="row">"#);
    let visible = view.visible();
    if visible.is_empty() {
        let _ = write!(
            body,
            r#"<p class="text-center text-muted">{}</p>"#,
            NO_EVENTS_MESSAGE
        );
    } else {
        for listed in &visible {
            body.push_str(&card(listed));
        }
    }
    body.push_str("</div></div>");

    page("Upcoming Events", &body)
}

fn spinner() -> String {
    r#"<div class="text-center mt-5"><div class="spinner-border text-primary" role="status"><span class="visually-hidden">Loading...</span></div></div>"#
        .to_string()
}

fn search_form(view: &EventListView) -> String {
    let mut form = String::new();
    form.push_str(r#"<form class="row mb-4" method="get" action="/">"#);
    let _ = write!(
        form,
        r#"<div class="col-md-6 mb-2"><input type="text" name="search" class="form-control" placeholder="Search by event name..." value="{}"></div>"#,
        escape(&view.query.search)
    );
    form.push_str(
        r#"<div class="col-md-6 mb-2"><select name="type" class="form-select" onchange="this.form.submit()">"#,
    );
    for option in TypeFilter::OPTIONS {
        let selected = if option == view.query.type_filter {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            form,
            r#"<option value="{}"{}>{}</option>"#,
            option.as_str(),
            selected,
            option.label()
        );
    }
    form.push_str("</select></div></form>");
    form
}

fn card(listed: &ListedEvent<'_>) -> String {
    let event = listed.event;
    let image_url = asset_url(listed.image.file_name());
    let href = format!(
        "/events/{}?image={}",
        encode_path_segment(&event.id),
        listed.image.index()
    );
    let badge_class = if event.is_online() {
        "bg-primary"
    } else {
        "bg-success"
    };

    let mut card = String::new();
    let _ = write!(
        card,
        r#"<div class="col-md-4 mb-4"><a href="{href}" class="text-decoration-none text-dark"><div class="card h-100 shadow-sm">"#,
        href = escape(&href)
    );
    let _ = write!(
        card,
        r#"<div class="position-relative"><img src="{}" class="card-img-top rounded-top" alt="{}" style="height: 200px; object-fit: cover"><span class="badge position-absolute top-0 start-0 m-2 px-3 py-2 {}">{} Event</span></div>"#,
        image_url,
        escape(&event.title),
        badge_class,
        escape(event.type_label())
    );
    card.push_str(r#"<div class="card-body d-flex flex-column">"#);
    if let Some(date) = &event.date {
        let _ = write!(
            card,
            r#"<p class="card-text text-muted mb-1">{}</p>"#,
            escape(&format_date_time(date))
        );
    }
    let _ = write!(
        card,
        r#"<h5 class="card-title">{}</h5>"#,
        escape(&event.title)
    );
    card.push_str(r#"<div class="mb-2">"#);
    for tag in event.list_tags() {
        let _ = write!(
            card,
            r#"<span class="badge bg-secondary me-1 mb-1">{}</span>"#,
            escape(tag)
        );
    }
    card.push_str("</div>");
    if let Some(description) = &event.description {
        let _ = write!(
            card,
            r#"<p class="card-text text-truncate">{}</p>"#,
            escape(description)
        );
    }
    card.push_str("</div></div></a></div>");
    card
}

#[cfg(test)]
mod tests {
    use meetup_core::{Event, EventQuery, EventType};

    use super::*;

    fn loaded(query: EventQuery) -> EventListView {
        let mut view = EventListView::new(query);
        view.resolve(Ok(vec![
            Event {
                id: "1".to_string(),
                title: "Alpha Summit".to_string(),
                event_type: Some(EventType::Online),
                date: Some("2024-05-01T09:00:00Z".to_string()),
                event_tags: Some(vec!["AI".to_string()]),
                ..Default::default()
            },
            Event {
                id: "2".to_string(),
                title: "Beta <Meetup>".to_string(),
                event_type: Some(EventType::Offline),
                ..Default::default()
            },
        ]));
        view
    }

    #[test]
    fn test_loading_shows_only_spinner() {
        let html = render_list(&EventListView::new(EventQuery::default()));
        assert!(html.contains("spinner-border"));
        assert!(!html.contains("Upcoming Events</h1>"));
        assert!(!html.contains(NO_EVENTS_MESSAGE));
    }

    #[test]
    fn test_cards_link_with_image_state() {
        let html = render_list(&loaded(EventQuery::default()));
        assert!(html.contains(r#"href="/events/1?image=0""#));
        assert!(html.contains(r#"href="/events/2?image=1""#));
        assert!(html.contains("/assets/tech.jpg"));
        assert!(html.contains("/assets/ai.jpg"));
        assert!(html.contains("May 1, 2024 at 09:00 AM"));
        assert!(html.contains(r#"bg-primary">Online Event"#));
        assert!(html.contains(r#"bg-success">Offline Event"#));
        assert!(html.contains("Beta &lt;Meetup&gt;"));
        assert!(html.contains(">AI</span>"));
    }

    #[test]
    fn test_filtered_list_restarts_image_cycle() {
        let html = render_list(&loaded(EventQuery::new("", TypeFilter::Offline)));
        assert!(html.contains(r#"href="/events/2?image=0""#));
        assert!(!html.contains("Alpha Summit"));
        assert!(html.contains(r#"<option value="Offline" selected>"#));
    }

    #[test]
    fn test_no_match_message() {
        let html = render_list(&loaded(EventQuery::new("zzz", TypeFilter::All)));
        assert!(html.contains(NO_EVENTS_MESSAGE));
        assert!(!html.contains("card-title"));
        assert!(html.contains(r#"value="zzz""#));
    }
}
