use serde::{Deserialize, Serialize};

use crate::models;

/// Wire form of [`models::Priority`]. Unknown strings fail to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl From<models::Priority> for Priority {
    fn from(p: models::Priority) -> Self {
        match p {
            models::Priority::None => Priority::None,
            models::Priority::Low => Priority::Low,
            models::Priority::Medium => Priority::Medium,
            models::Priority::High => Priority::High,
        }
    }
}

impl From<Priority> for models::Priority {
    fn from(p: Priority) -> Self {
        match p {
            Priority::None => models::Priority::None,
            Priority::Low => models::Priority::Low,
            Priority::Medium => models::Priority::Medium,
            Priority::High => models::Priority::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_round_trip() {
        for p in [
            models::Priority::None,
            models::Priority::Low,
            models::Priority::Medium,
            models::Priority::High,
        ] {
            assert_eq!(models::Priority::from(Priority::from(p)), p);
        }
    }

    #[test]
    fn lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), r#""medium""#);
        assert_eq!(serde_json::from_str::<Priority>(r#""high""#).unwrap(), Priority::High);
    }

    #[test]
    fn unknown_value_is_rejected() {
        assert!(serde_json::from_str::<Priority>(r#""urgent""#).is_err());
        assert!(serde_json::from_str::<Priority>("2").is_err());
    }
}
