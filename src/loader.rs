use log::debug;
use reqwest::Client;

use crate::error::{Error, Result};
use crate::event::{Envelope, Event};
use crate::State;

pub const DEFAULT_UPSTREAM: &str =
    "https://fsa-crud-2aa9294fe819.herokuapp.com/api/2402-FTB-ET-WEB-FT/events";

/// Fetches the event list from a fixed URL.
#[derive(Debug, Clone)]
pub struct Loader {
    client: Client,
    url: String,
}

impl Loader {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<Event>> {
        debug!("Sending HTTP request to {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        debug!("Reading response body");
        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;

        Ok(envelope.data)
    }

    /// Replaces `state` with a fresh fetch and returns the number of events.
    /// On error `state` is left as it was.
    pub async fn load(&self, state: &mut State) -> Result<usize> {
        let events = self.fetch().await?;
        let count = events.len();
        state.replace(events);
        Ok(count)
    }
}
