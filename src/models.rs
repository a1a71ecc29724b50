use serde::{Deserialize, Serialize};

/// Body of `POST /api/contacts/count`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CountRequest {
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_campaign_name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CountResult {
    pub count: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub body: String,
}

/// Body of `POST /api/templates`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewTemplate {
    pub name: String,
    pub body: String,
}

/// Failure body returned by the template endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_request_omits_missing_exclusion() {
        let request = CountRequest {
            tags: vec!["vip".to_string(), "north".to_string()],
            exclude_campaign_name: None,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"tags":["vip","north"]}"#
        );
    }

    #[test]
    fn count_request_carries_exclusion() {
        let request = CountRequest {
            tags: vec![],
            exclude_campaign_name: Some("Spring Sale".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"tags":[],"exclude_campaign_name":"Spring Sale"}"#
        );
    }

    #[test]
    fn template_list_decodes_in_order() {
        let raw = r#"[
            {"id": 3, "name": "Welcome", "body": "Hello {name}"},
            {"id": 1, "name": "Promo", "body": "50% off"}
        ]"#;
        let templates: Vec<Template> = serde_json::from_str(raw).unwrap();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].id, 3);
        assert_eq!(templates[1].name, "Promo");
    }

    #[test]
    fn count_result_rejects_missing_count() {
        assert_eq!(
            serde_json::from_str::<CountResult>(r#"{"count": 42}"#).unwrap(),
            CountResult { count: 42 }
        );
        assert!(serde_json::from_str::<CountResult>(r#"{"total": 42}"#).is_err());
    }
}
