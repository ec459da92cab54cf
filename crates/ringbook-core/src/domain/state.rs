use crate::domain::contact::Contact;
use crate::domain::ids::{ContactId, ListId};
use crate::domain::interaction::InteractionLog;
use crate::domain::list::SavedList;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIST_NAME: &str = "My Contacts";

/// Aggregate root: every saved list plus the one currently active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactManagerState {
    pub active_list_id: Option<ListId>,
    pub saved_lists: Vec<SavedList>,
}

impl ContactManagerState {
    pub fn empty() -> Self {
        Self {
            active_list_id: None,
            saved_lists: Vec::new(),
        }
    }

    /// One empty list, active.
    pub fn with_default_list(name: &str, now: DateTime<Utc>) -> Self {
        let list = SavedList::new(name, now);
        Self {
            active_list_id: Some(list.id.clone()),
            saved_lists: vec![list],
        }
    }

    pub fn active_list(&self) -> Option<&SavedList> {
        let id = self.active_list_id.as_ref()?;
        self.list(id)
    }

    pub(crate) fn active_list_mut(&mut self) -> Option<&mut SavedList> {
        let id = self.active_list_id.clone()?;
        self.list_mut(&id)
    }

    pub fn list(&self, id: &ListId) -> Option<&SavedList> {
        self.saved_lists.iter().find(|list| &list.id == id)
    }

    pub(crate) fn list_mut(&mut self, id: &ListId) -> Option<&mut SavedList> {
        self.saved_lists.iter_mut().find(|list| &list.id == id)
    }

    pub fn is_active(&self, id: &ListId) -> bool {
        self.active_list_id.as_ref() == Some(id)
    }

    /// Looks the contact up in the active list only.
    pub fn find_contact(&self, id: &ContactId) -> Option<&Contact> {
        self.active_list()?.contact(id)
    }

    pub fn contact_history(&self, id: &ContactId) -> Option<&[InteractionLog]> {
        self.find_contact(id).map(|contact| contact.logs.as_slice())
    }

    /// Points a dangling or missing active id at the first list, or clears it
    /// when no lists exist. Returns true when the selection changed.
    pub fn repair_active_list(&mut self) -> bool {
        let resolvable = self
            .active_list_id
            .as_ref()
            .is_some_and(|id| self.list(id).is_some());
        if resolvable {
            return false;
        }
        let repaired = self.saved_lists.first().map(|list| list.id.clone());
        let changed = repaired != self.active_list_id;
        self.active_list_id = repaired;
        changed
    }
}
