use crate::domain::ids::ContactId;
use crate::domain::interaction::InteractionLog;
use crate::error::CoreError;
use crate::rules::validation::{validate_mobile, validate_name};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub mobile: String,
    /// Most recent first.
    #[serde(default)]
    pub logs: Vec<InteractionLog>,
}

impl Contact {
    pub fn last_interaction(&self) -> Option<&InteractionLog> {
        self.logs.first()
    }
}

/// A `{name, mobile}` candidate coming from a form or an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub mobile: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mobile: mobile.into(),
        }
    }

    /// Returns the draft with both fields trimmed, or the first rule it breaks.
    pub fn validate(&self) -> Result<ContactDraft, CoreError> {
        Ok(ContactDraft {
            name: validate_name(&self.name)?,
            mobile: validate_mobile(&self.mobile)?,
        })
    }

    pub(crate) fn into_contact(self) -> Contact {
        Contact {
            id: ContactId::new(),
            name: self.name,
            mobile: self.mobile,
            logs: Vec::new(),
        }
    }
}
