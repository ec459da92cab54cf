use crate::domain::{
    Contact, ContactId, ContactManagerState, InteractionLog, ListId, LogId, SavedList,
};
use crate::error::CoreError;
use crate::ops::Created;
use crate::rules::validate_list_name;
use chrono::{DateTime, Utc};

/// Saves the active list's contacts under a new name. The copy is fully
/// independent: contacts and logs are cloned and given fresh ids, so no id
/// is shared between the two lists. The selection does not change.
pub fn create_list(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    name: &str,
) -> Result<Created<ListId>, CoreError> {
    let name = validate_list_name(name)?;
    let mut list = SavedList::new(name, now);
    if let Some(active) = state.active_list() {
        list.contacts = active.contacts.iter().map(copy_contact).collect();
    }

    let id = list.id.clone();
    let mut next = state.clone();
    next.saved_lists.push(list);
    if next.active_list_id.is_none() {
        next.repair_active_list();
    }
    Ok(Created {
        state: next,
        id: Some(id),
    })
}

fn copy_contact(contact: &Contact) -> Contact {
    Contact {
        id: ContactId::new(),
        name: contact.name.clone(),
        mobile: contact.mobile.clone(),
        logs: contact
            .logs
            .iter()
            .map(|log| InteractionLog {
                id: LogId::new(),
                ..log.clone()
            })
            .collect(),
    }
}

pub fn load_list(state: &ContactManagerState, id: &ListId) -> ContactManagerState {
    let mut next = state.clone();
    if next.list(id).is_some() {
        next.active_list_id = Some(id.clone());
    }
    next
}

/// Refuses to remove the last list. Removing the active list hands the
/// selection to the first remaining one.
pub fn delete_list(
    state: &ContactManagerState,
    id: &ListId,
) -> Result<ContactManagerState, CoreError> {
    if state.saved_lists.len() == 1 {
        return Err(CoreError::LastListRemaining);
    }

    let mut next = state.clone();
    next.saved_lists.retain(|list| &list.id != id);
    if next.is_active(id) {
        next.active_list_id = next.saved_lists.first().map(|list| list.id.clone());
    }
    Ok(next)
}

pub fn rename_list(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    id: &ListId,
    name: &str,
) -> Result<ContactManagerState, CoreError> {
    let name = validate_list_name(name)?;
    let mut next = state.clone();
    if let Some(list) = next.list_mut(id) {
        list.name = name;
        list.touch(now);
    }
    Ok(next)
}
