use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One scheduled occurrence as delivered by the events API.
///
/// Fields are not validated: anything missing or not a JSON string is kept as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "string_or_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response body of the events API.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub data: Vec<Event>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// The most recently loaded list of events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    events: Vec<Event>,
}

impl State {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Replaces the whole list.
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_ignores_unknown_fields() {
        let envelope: Envelope = serde_json::from_str(
            r#"{"success":true,"data":[{"id":7,"cohortId":1,"name":"demo","date":"2024-01-01T13:00:00Z","location":"Hall","description":"x"}]}"#,
        )
        .unwrap();

        assert_eq!(
            envelope.data,
            [Event {
                name: Some("demo".into()),
                date: Some("2024-01-01T13:00:00Z".into()),
                location: Some("Hall".into()),
                description: Some("x".into()),
            }]
        );
    }

    #[test]
    fn missing_and_non_string_fields_are_none() {
        let event: Event = serde_json::from_str(r#"{"name":123,"location":null}"#).unwrap();
        assert_eq!(event, Event::default());
    }

    #[test]
    fn envelope_requires_data() {
        assert!(serde_json::from_str::<Envelope>(r#"{"error":"nope"}"#).is_err());
    }
}
