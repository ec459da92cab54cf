use crate::domain::{ContactId, ContactManagerState, InteractionLog, InteractionNew, LogId};
use crate::ops::Created;
use chrono::{DateTime, Utc};

/// Prepends a new log to the contact's history. Attachments are stored as
/// given; an empty comment is dropped.
pub fn log_interaction(
    state: &ContactManagerState,
    now: DateTime<Utc>,
    contact_id: &ContactId,
    input: InteractionNew,
) -> Created<LogId> {
    let mut next = state.clone();
    let Some(list) = next.active_list_mut() else {
        return Created::unchanged(state);
    };
    let Some(contact) = list.contact_mut(contact_id) else {
        return Created::unchanged(state);
    };

    let log = InteractionLog {
        id: LogId::new(),
        kind: input.kind,
        timestamp: now,
        comment: input.comment.filter(|comment| !comment.is_empty()),
        audio_base64: input.audio_base64,
        image_base64: input.image_base64,
    };
    let id = log.id.clone();
    contact.logs.insert(0, log);
    list.touch(now);

    Created {
        state: next,
        id: Some(id),
    }
}
