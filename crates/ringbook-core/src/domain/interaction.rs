use crate::domain::ids::LogId;
use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionType {
    Call,
    #[serde(rename = "SMS")]
    Sms,
    WhatsApp,
}

impl InteractionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            InteractionType::Call => "Call",
            InteractionType::Sms => "SMS",
            InteractionType::WhatsApp => "WhatsApp",
        }
    }

    pub const fn all() -> &'static [InteractionType] {
        &[
            InteractionType::Call,
            InteractionType::Sms,
            InteractionType::WhatsApp,
        ]
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionType {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim().to_ascii_lowercase();
        match value.as_str() {
            "call" => Ok(InteractionType::Call),
            "sms" => Ok(InteractionType::Sms),
            "whatsapp" | "whats-app" => Ok(InteractionType::WhatsApp),
            _ => Err(CoreError::InvalidInteractionType(raw.to_string())),
        }
    }
}

/// A single touchpoint. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionLog {
    pub id: LogId,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

/// Caller-supplied part of a log; id and timestamp are minted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionNew {
    pub kind: InteractionType,
    pub comment: Option<String>,
    pub audio_base64: Option<String>,
    pub image_base64: Option<String>,
}

impl InteractionNew {
    pub fn new(kind: InteractionType) -> Self {
        Self {
            kind,
            comment: None,
            audio_base64: None,
            image_base64: None,
        }
    }
}
