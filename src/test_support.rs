//! Shared fixtures for unit tests.

use std::sync::Mutex;

use serde_json::{json, Value};
use url::Url;
use uuid::Uuid;

use crate::feed_item::FeedItem;
use crate::http::{Completion, HttpClient, HttpClientResult, HttpResponse};

/// Builds a [`FeedItem`] together with its wire representation.
///
/// Optional fields left unset are omitted from the JSON rather than sent as
/// `null`.
pub struct ItemFixture {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl ItemFixture {
    pub fn new(image_url: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: None,
            location: None,
            image_url: Url::parse(image_url).unwrap(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn model(&self) -> FeedItem {
        FeedItem::new(
            self.id,
            self.description.clone(),
            self.location.clone(),
            self.image_url.clone(),
        )
    }

    pub fn json(&self) -> Value {
        let mut json = json!({
            "id": self.id.to_string(),
            "image": self.image_url.as_str(),
        });
        if let Some(description) = &self.description {
            json["description"] = json!(description);
        }
        if let Some(location) = &self.location {
            json["location"] = json!(location);
        }
        json
    }
}

pub fn make_items_json(items: &[Value]) -> Vec<u8> {
    serde_json::to_vec(&json!({ "items": items })).unwrap()
}

/// Records every `get` and lets the test decide when and how each one
/// completes.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<(Url, Option<Completion>)>>,
}

impl HttpClientSpy {
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn complete_with_error(&self, error: anyhow::Error, index: usize) {
        let completion = self.take_completion(index);
        completion(HttpClientResult::Failure(error));
    }

    pub fn complete_with_status(&self, status: u16, body: Vec<u8>, index: usize) {
        let url = self.requested_urls()[index].clone();
        let completion = self.take_completion(index);
        completion(HttpClientResult::Success {
            body,
            response: HttpResponse { url, status },
        });
    }

    // The lock is released before the completion runs so it may call back
    // into the spy.
    fn take_completion(&self, index: usize) -> Completion {
        let mut messages = self.messages.lock().unwrap();
        messages[index].1.take().expect("request already completed")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: Completion) {
        self.messages
            .lock()
            .unwrap()
            .push((url.clone(), Some(completion)));
    }
}
