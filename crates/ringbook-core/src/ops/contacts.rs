use crate::domain::{ContactDraft, ContactId, ContactManagerState};
use crate::error::CoreError;
use crate::ops::Created;
use chrono::{DateTime, Utc};

pub fn add_contact(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    draft: ContactDraft,
) -> Result<Created<ContactId>, CoreError> {
    let draft = draft.validate()?;
    let mut next = state.clone();
    let Some(list) = next.active_list_mut() else {
        return Ok(Created::unchanged(state));
    };

    let contact = draft.into_contact();
    let id = contact.id.clone();
    list.contacts.insert(0, contact);
    list.touch(now);

    Ok(Created {
        state: next,
        id: Some(id),
    })
}

/// Replaces name and mobile; id and logs are carried over untouched.
pub fn edit_contact(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    id: &ContactId,
    draft: ContactDraft,
) -> Result<ContactManagerState, CoreError> {
    let draft = draft.validate()?;
    let mut next = state.clone();
    if let Some(list) = next.active_list_mut() {
        if let Some(contact) = list.contact_mut(id) {
            contact.name = draft.name;
            contact.mobile = draft.mobile;
            list.touch(now);
        }
    }
    Ok(next)
}

pub fn delete_contact(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    id: &ContactId,
) -> ContactManagerState {
    let mut next = state.clone();
    if let Some(list) = next.active_list_mut() {
        let before = list.contacts.len();
        list.contacts.retain(|contact| &contact.id != id);
        if list.contacts.len() != before {
            list.touch(now);
        }
    }
    next
}

/// Puts the batch, in input order, ahead of the existing contacts. Drafts
/// are trusted to be valid already; see [`bulk_import_checked`].
pub fn bulk_import(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    drafts: Vec<ContactDraft>,
) -> ContactManagerState {
    let mut next = state.clone();
    if drafts.is_empty() {
        return next;
    }
    if let Some(list) = next.active_list_mut() {
        let existing = std::mem::take(&mut list.contacts);
        list.contacts = drafts
            .into_iter()
            .map(ContactDraft::into_contact)
            .chain(existing)
            .collect();
        list.touch(now);
    }
    next
}

/// Validates every draft first; one bad row rejects the whole batch.
pub fn bulk_import_checked(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    drafts: Vec<ContactDraft>,
) -> Result<ContactManagerState, CoreError> {
    let validated = drafts
        .iter()
        .enumerate()
        .map(|(index, draft)| {
            draft.validate().map_err(|source| CoreError::InvalidRow {
                row: index + 1,
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(bulk_import(state, now, validated))
}
