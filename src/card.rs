use chrono::{DateTime, FixedOffset, Timelike};

use crate::format::{capitalize_words, to_clock_time};
use crate::node::{create_node, Node};
use crate::Event;

const NO_ATTRIBUTES: [(&str, &str); 0] = [];

/// Builds the card for one event: name header, time/date/location row and
/// description.
pub fn render_card(event: &Event, offset: &FixedOffset) -> Node {
    let mut card = create_node("section", "", [("class", "containerEvent")]);

    let mut top = create_node("section", "", NO_ATTRIBUTES);
    top.append_child(create_node(
        "div",
        capitalize_words(event.name.as_deref()),
        [("class", "eventName")],
    ));

    let (time, date) = match event
        .date
        .as_deref()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
    {
        Some(date) => {
            let local = date.with_timezone(offset);
            (
                to_clock_time(local.hour() as i32, local.minute() as i32),
                local.format("%a %b %d %Y").to_string(),
            )
        }
        None => Default::default(),
    };

    let mut middle = create_node("section", "", [("class", "containerCenter")]);
    middle.replace_children([
        create_node("div", time, [("class", "eventTime")]),
        create_node("div", date, [("class", "eventDate")]),
        create_node(
            "div",
            event.location.clone().unwrap_or_default(),
            [("class", "eventLocation")],
        ),
    ]);

    let mut bottom = create_node("section", "", NO_ATTRIBUTES);
    bottom.append_child(create_node(
        "div",
        event.description.clone().unwrap_or_default(),
        [("class", "eventDescription")],
    ));

    card.replace_children([top, middle, bottom]);
    card
}
