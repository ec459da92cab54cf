use crate::error::StoreError;
use crate::gateway::{Gateway, LoadIssue};
use crate::kv::ByteStore;
use chrono::{DateTime, Utc};
use ringbook_core::ops;
use ringbook_core::{
    ContactDraft, ContactId, ContactManagerState, CoreError, InteractionNew, ListId, LogId,
};
use tracing::warn;

/// Outcome of an accepted mutation. The in-memory state has already moved
/// on; `save_error` is set when the write behind it failed.
#[must_use]
#[derive(Debug)]
pub struct Commit<T> {
    pub value: T,
    pub save_error: Option<StoreError>,
}

impl<T> Commit<T> {
    pub fn persisted(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Owns the current state and replaces it wholesale on every mutation.
pub struct Session<'a, S: ByteStore + ?Sized> {
    gateway: Gateway<'a, S>,
    state: ContactManagerState,
    load_issue: Option<LoadIssue>,
}

impl<'a, S: ByteStore + ?Sized> Session<'a, S> {
    /// Loads the stored state. A state that loading had to build, repair or
    /// migrate is written straight back so its ids hold across sessions;
    /// a failed write is reported like any other commit.
    pub fn open(gateway: Gateway<'a, S>, now: DateTime<Utc>) -> Commit<Self> {
        let outcome = gateway.load(now);
        let save_error = if outcome.needs_save {
            save_logged(&gateway, &outcome.state)
        } else {
            None
        };
        let migrated = matches!(outcome.issue, Some(LoadIssue::MigratedLegacy { .. }));
        if migrated && save_error.is_none() {
            if let Err(err) = gateway.clear_legacy() {
                warn!(error = %err, "failed to remove migrated single-list keys");
            }
        }

        Commit {
            value: Self {
                gateway,
                state: outcome.state,
                load_issue: outcome.issue,
            },
            save_error,
        }
    }

    pub fn state(&self) -> &ContactManagerState {
        &self.state
    }

    pub fn load_issue(&self) -> Option<&LoadIssue> {
        self.load_issue.as_ref()
    }

    /// Installs `next` and writes it. Unchanged states are not written.
    pub fn commit<T>(&mut self, next: ContactManagerState, value: T) -> Commit<T> {
        if next == self.state {
            return Commit {
                value,
                save_error: None,
            };
        }
        self.state = next;
        let save_error = save_logged(&self.gateway, &self.state);
        Commit { value, save_error }
    }

    pub fn add_contact(
        &mut self,
        now: DateTime<Utc>,
        draft: ContactDraft,
    ) -> Result<Commit<Option<ContactId>>, CoreError> {
        let created = ops::add_contact(&self.state, now, draft)?;
        Ok(self.commit(created.state, created.id))
    }

    pub fn edit_contact(
        &mut self,
        now: DateTime<Utc>,
        id: &ContactId,
        draft: ContactDraft,
    ) -> Result<Commit<()>, CoreError> {
        let next = ops::edit_contact(&self.state, now, id, draft)?;
        Ok(self.commit(next, ()))
    }

    pub fn delete_contact(&mut self, now: DateTime<Utc>, id: &ContactId) -> Commit<()> {
        let next = ops::delete_contact(&self.state, now, id);
        self.commit(next, ())
    }

    /// Validates the whole batch before touching the state.
    pub fn bulk_import(
        &mut self,
        now: DateTime<Utc>,
        drafts: Vec<ContactDraft>,
    ) -> Result<Commit<usize>, CoreError> {
        let count = drafts.len();
        let next = ops::bulk_import_checked(&self.state, now, drafts)?;
        let imported = if self.state.active_list().is_some() {
            count
        } else {
            0
        };
        Ok(self.commit(next, imported))
    }

    pub fn log_interaction(
        &mut self,
        now: DateTime<Utc>,
        contact_id: &ContactId,
        input: InteractionNew,
    ) -> Commit<Option<LogId>> {
        let created = ops::log_interaction(&self.state, now, contact_id, input);
        self.commit(created.state, created.id)
    }

    pub fn create_list(
        &mut self,
        now: DateTime<Utc>,
        name: &str,
    ) -> Result<Commit<Option<ListId>>, CoreError> {
        let created = ops::create_list(&self.state, now, name)?;
        Ok(self.commit(created.state, created.id))
    }

    /// Returns whether the list existed and is now active.
    pub fn load_list(&mut self, id: &ListId) -> Commit<bool> {
        let next = ops::load_list(&self.state, id);
        let loaded = next.is_active(id);
        self.commit(next, loaded)
    }

    pub fn delete_list(&mut self, id: &ListId) -> Result<Commit<()>, CoreError> {
        let next = ops::delete_list(&self.state, id)?;
        Ok(self.commit(next, ()))
    }

    pub fn rename_list(
        &mut self,
        now: DateTime<Utc>,
        id: &ListId,
        name: &str,
    ) -> Result<Commit<()>, CoreError> {
        let next = ops::rename_list(&self.state, now, id, name)?;
        Ok(self.commit(next, ()))
    }
}

fn save_logged<S: ByteStore + ?Sized>(
    gateway: &Gateway<'_, S>,
    state: &ContactManagerState,
) -> Option<StoreError> {
    match gateway.save(state) {
        Ok(()) => None,
        Err(err) => {
            warn!(error = %err, "failed to persist state; changes may not survive a reload");
            Some(err)
        }
    }
}
