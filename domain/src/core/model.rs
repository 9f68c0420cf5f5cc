//! Model value object representing a hosted chat model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Chat models the hosted endpoint is allowed to serve (Value Object)
///
/// The list is closed: anything outside of it is rejected at parse time
/// rather than being forwarded to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChatModel {
    #[default]
    Llama3_8b,
    Llama3_70b,
    DeepseekR1DistillLlama70b,
}

impl ChatModel {
    /// All allowed models, in the order they are offered to the user.
    pub const ALL: [ChatModel; 3] = [
        ChatModel::Llama3_8b,
        ChatModel::Llama3_70b,
        ChatModel::DeepseekR1DistillLlama70b,
    ];

    /// Get the provider identifier for this model
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatModel::Llama3_8b => "llama3-8b-8192",
            ChatModel::Llama3_70b => "llama3-70b-8192",
            ChatModel::DeepseekR1DistillLlama70b => "deepseek-r1-distill-llama-70b",
        }
    }

    /// Identifiers of every allowed model
    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|m| m.as_str()).collect()
    }
}

impl std::fmt::Display for ChatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ChatModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownModel(needle.to_string()))
    }
}

impl Serialize for ChatModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChatModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_allowed_model() {
        assert_eq!(ChatModel::default(), ChatModel::ALL[0]);
        assert_eq!(ChatModel::default().as_str(), "llama3-8b-8192");
    }

    #[test]
    fn test_parse_allowed_models() {
        for model in ChatModel::ALL {
            assert_eq!(model.as_str().parse::<ChatModel>().unwrap(), model);
        }
        assert_eq!(
            " llama3-70b-8192 ".parse::<ChatModel>().unwrap(),
            ChatModel::Llama3_70b
        );
    }

    #[test]
    fn test_parse_rejects_unknown_model() {
        let err = "gpt-4o".parse::<ChatModel>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownModel(ref m) if m == "gpt-4o"));
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&ChatModel::DeepseekR1DistillLlama70b).unwrap();
        assert_eq!(json, "\"deepseek-r1-distill-llama-70b\"");
        let back: ChatModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ChatModel::DeepseekR1DistillLlama70b);
        assert!(serde_json::from_str::<ChatModel>("\"mixtral\"").is_err());
    }
}
