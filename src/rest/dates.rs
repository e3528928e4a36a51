use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models;

/// Wire form of [`models::Dates`]; RFC 3339 timestamps or `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dates {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
}

impl From<models::Dates> for Dates {
    fn from(d: models::Dates) -> Self {
        Self {
            start: d.start,
            due: d.due,
        }
    }
}

impl From<Dates> for models::Dates {
    fn from(d: Dates) -> Self {
        Self {
            start: d.start,
            due: d.due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_ends_decode_as_null() {
        let d: Dates = serde_json::from_str("{}").unwrap();
        assert_eq!(d, Dates::default());

        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json, serde_json::json!({ "start": null, "due": null }));
    }

    #[test]
    fn domain_round_trip() {
        let domain = models::Dates {
            start: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            due: None,
        };
        assert_eq!(models::Dates::from(Dates::from(domain)), domain);
    }

    #[test]
    fn rfc3339_is_accepted() {
        let d: Dates = serde_json::from_str(r#"{"start":"2024-01-02T03:04:05Z","due":null}"#).unwrap();
        assert_eq!(d.start, Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()));
        assert!(serde_json::from_str::<Dates>(r#"{"start":"tomorrow"}"#).is_err());
    }
}
