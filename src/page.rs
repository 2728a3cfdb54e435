use chrono::FixedOffset;

use crate::card::render_card;
use crate::node::{create_node, escape, Node};
use crate::theme::{inline_style, Theme};
use crate::{Event, State};

pub const CONTAINER_ID: &str = "allEvents";
pub const CONTROL_ID: &str = "colorMode";

const STYLESHEET: &str = "\
:root {
  --darkBackground: #1e1e24;
  --darkContrast: #f2f2f2;
  --lightBackground: #fafafa;
  --lightContrast: #202020;
}
body {
  background-color: var(--backgroundColor);
  color: var(--contrastColor);
  font-family: sans-serif;
  margin: 0 auto;
  max-width: 48rem;
  padding: 1rem;
}
#colorMode {
  border: 1px solid currentColor;
  border-radius: 0.25rem;
  float: right;
  padding: 0.25rem 0.75rem;
  text-decoration: none;
}
.containerEvent {
  border: 1px solid var(--contrastColor);
  border-radius: 0.5rem;
  margin: 1rem 0;
  padding: 0.5rem 1rem;
}
.containerCenter {
  display: flex;
  gap: 1rem;
  opacity: 0.8;
}
.eventName {
  font-size: 1.25rem;
  font-weight: bold;
}
";

/// The empty `section#allEvents` cards are rendered into.
pub fn events_container() -> Node {
    create_node("section", "", [("id", CONTAINER_ID)])
}

/// Replaces the container's children with one card per event, in order.
pub fn render_events(container: &mut Node, events: &[Event], offset: &FixedOffset) {
    container.replace_children(events.iter().map(|event| render_card(event, offset)));
}

/// Renders the whole page for `state` in `theme`.
pub fn render_document(state: &State, theme: &Theme, offset: &FixedOffset) -> String {
    let mut container = events_container();
    render_events(&mut container, state.events(), offset);

    let control = create_node(
        "a",
        theme.control_label(),
        [
            ("id", CONTROL_ID.to_string()),
            ("href", format!("/?mode={}", theme.other())),
            ("style", inline_style(&theme.control_style())),
        ],
    );

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\" style=\"{root}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Events</title>\n\
         <style>\n{STYLESHEET}</style>\n\
         </head>\n\
         <body>\n\
         {control}\n\
         <h1>Events</h1>\n\
         {container}\n\
         </body>\n\
         </html>\n",
        root = escape(&inline_style(&theme.root_style()), true),
    )
}
