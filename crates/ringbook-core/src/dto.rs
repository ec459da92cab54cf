use crate::domain::{Contact, ContactId, ContactManagerState, InteractionLog, ListId, SavedList};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummaryDto {
    pub id: ListId,
    pub name: String,
    pub contact_count: usize,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListSummaryDto {
    pub fn from_list(list: &SavedList, state: &ContactManagerState) -> Self {
        Self {
            id: list.id.clone(),
            name: list.name.clone(),
            contact_count: list.contacts.len(),
            active: state.is_active(&list.id),
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }

    pub fn all(state: &ContactManagerState) -> Vec<Self> {
        state
            .saved_lists
            .iter()
            .map(|list| Self::from_list(list, state))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactListItemDto {
    pub id: ContactId,
    pub name: String,
    pub mobile: String,
    pub log_count: usize,
    pub last_interaction_at: Option<DateTime<Utc>>,
}

impl From<&Contact> for ContactListItemDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            mobile: contact.mobile.clone(),
            log_count: contact.logs.len(),
            last_interaction_at: contact.last_interaction().map(|log| log.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailDto {
    pub id: ContactId,
    pub name: String,
    pub mobile: String,
    pub logs: Vec<InteractionLog>,
}

impl From<&Contact> for ContactDetailDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.clone(),
            name: contact.name.clone(),
            mobile: contact.mobile.clone(),
            logs: contact.logs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactListItemDto, ListSummaryDto};
    use crate::domain::{ContactDraft, ContactManagerState, InteractionNew, InteractionType};
    use crate::ops::{add_contact, create_list, log_interaction};
    use chrono::{TimeZone, Utc};

    #[test]
    fn summaries_flag_the_active_list() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let state = ContactManagerState::with_default_list("My Contacts", now);
        let added = add_contact(&state, now, ContactDraft::new("Ada", "111")).unwrap();
        let created = create_list(&added.state, now, "Work").unwrap();

        let summaries = ListSummaryDto::all(&created.state);
        assert_eq!(summaries.len(), 2);
        assert!(summaries[0].active);
        assert!(!summaries[1].active);
        assert_eq!(summaries[1].contact_count, 1);
    }

    #[test]
    fn list_item_reports_latest_interaction() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let state = ContactManagerState::with_default_list("My Contacts", now);
        let added = add_contact(&state, now, ContactDraft::new("Ada", "111")).unwrap();
        let id = added.id.unwrap();
        let contact = added.state.find_contact(&id).unwrap();
        assert_eq!(ContactListItemDto::from(contact).last_interaction_at, None);

        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let logged = log_interaction(
            &added.state,
            later,
            &id,
            InteractionNew::new(InteractionType::Sms),
        );
        let item = ContactListItemDto::from(logged.state.find_contact(&id).unwrap());
        assert_eq!(item.log_count, 1);
        assert_eq!(item.last_interaction_at, Some(later));
    }
}
