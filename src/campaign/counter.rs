use std::cell::Cell;
use std::rc::Rc;

use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use super::tags::TagSet;
use crate::api;
use crate::config;
use crate::error::ApiError;
use crate::models::{CountRequest, CountResult};

/// Builds the count payload. The exclusion filter is only sent when the
/// anti-spam toggle is on and the campaign has a name.
pub fn count_request(tags: &TagSet, anti_spam: bool, campaign_name: &str) -> CountRequest {
    let campaign_name = campaign_name.trim();
    CountRequest {
        tags: tags.to_vec(),
        exclude_campaign_name: (anti_spam && !campaign_name.is_empty())
            .then(|| campaign_name.to_string()),
    }
}

/// Text for the summary count node once a response settles.
pub fn count_text(result: &Result<CountResult, ApiError>) -> String {
    match result {
        Ok(result) => result.count.to_string(),
        Err(_) => config::COUNT_ERROR_TEXT.to_string(),
    }
}

/// Hands out increasing tickets so only the newest response is shown.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

pub struct RecipientCounter {
    campaign_name: HtmlInputElement,
    anti_spam: HtmlInputElement,
    hidden_tags: HtmlInputElement,
    summary_count: Element,
    sequence: RequestSequence,
}

impl RecipientCounter {
    pub fn new(
        campaign_name: HtmlInputElement,
        anti_spam: HtmlInputElement,
        hidden_tags: HtmlInputElement,
        summary_count: Element,
    ) -> Rc<Self> {
        Rc::new(Self {
            campaign_name,
            anti_spam,
            hidden_tags,
            summary_count,
            sequence: RequestSequence::default(),
        })
    }

    pub fn refresh(self: &Rc<Self>, tags: &TagSet) {
        self.hidden_tags.set_value(&tags.joined());

        let request = count_request(tags, self.anti_spam.checked(), &self.campaign_name.value());
        let ticket = self.sequence.issue();
        debug!("Counting recipients for {} tags (request #{})", tags.len(), ticket);
        let counter = Rc::clone(self);

        spawn_local(async move {
            let result = api::count_contacts(&request).await;
            if !counter.sequence.is_latest(ticket) {
                debug!("Dropping stale contact count response #{}", ticket);
                return;
            }
            if let Err(e) = &result {
                error!("Error fetching contact count: {}", e);
            }
            counter.summary_count.set_text_content(Some(&count_text(&result)));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tags(items: &[&str]) -> TagSet {
        let mut set = TagSet::default();
        for item in items {
            set.insert(item);
        }
        set
    }

    #[test]
    fn exclusion_requires_toggle_and_name() {
        let vip = tags(&["vip"]);
        assert_eq!(count_request(&vip, false, "Spring Sale").exclude_campaign_name, None);
        assert_eq!(count_request(&vip, true, "   ").exclude_campaign_name, None);
        assert_eq!(count_request(&vip, true, "").exclude_campaign_name, None);
        assert_eq!(
            count_request(&vip, true, "  Spring Sale ").exclude_campaign_name.as_deref(),
            Some("Spring Sale")
        );
    }

    #[test]
    fn tags_without_anti_spam_serialize_alone() {
        let request = count_request(&tags(&["vip", "north"]), false, "Spring Sale");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"tags": ["vip", "north"]})
        );
    }

    #[test]
    fn empty_tags_with_anti_spam_sends_exclusion() {
        let request = count_request(&TagSet::default(), true, "Spring Sale");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"tags": [], "exclude_campaign_name": "Spring Sale"})
        );
    }

    #[test]
    fn settled_count_is_shown_as_decimal_text() {
        assert_eq!(count_text(&Ok(CountResult { count: 42 })), "42");
        assert_eq!(count_text(&Ok(CountResult { count: 0 })), "0");
    }

    #[test]
    fn failed_count_shows_error_indicator() {
        let rejected: Result<CountResult, ApiError> =
            Err(gloo_net::Error::GlooError("Failed to fetch".into()).into());
        assert_eq!(count_text(&rejected), "Error");
        assert_eq!(count_text(&Err(ApiError::Status(500))), "Error");
        assert_eq!(count_text(&Err(ApiError::Decode("expected value".into()))), "Error");
    }

    #[test]
    fn only_latest_ticket_is_applied() {
        let sequence = RequestSequence::default();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(second > first);
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));

        let third = sequence.issue();
        assert!(!sequence.is_latest(second));
        assert!(sequence.is_latest(third));
    }
}
