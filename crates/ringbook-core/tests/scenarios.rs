use chrono::{DateTime, Duration, TimeZone, Utc};
use ringbook_core::ops::{
    add_contact, bulk_import, create_list, delete_list, log_interaction, rename_list,
};
use ringbook_core::{
    ContactDraft, ContactManagerState, CoreError, InteractionNew, InteractionType,
    DEFAULT_LIST_NAME,
};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
}

#[test]
fn add_contact_on_default_state() {
    let state = ContactManagerState::with_default_list(DEFAULT_LIST_NAME, t0());
    let created = add_contact(
        &state,
        t0(),
        ContactDraft::new("Jane Doe", "+1 (555) 123-4567"),
    )
    .expect("add contact");

    let list = created.state.active_list().expect("active list");
    assert_eq!(list.name, "My Contacts");
    assert_eq!(list.contacts.len(), 1);
    assert_eq!(list.contacts[0].name, "Jane Doe");
    assert_eq!(list.contacts[0].mobile, "+1 (555) 123-4567");
    assert!(list.contacts[0].logs.is_empty());
}

#[test]
fn bulk_import_keeps_existing_contact() {
    let state = ContactManagerState::with_default_list(DEFAULT_LIST_NAME, t0());
    let state = add_contact(&state, t0(), ContactDraft::new("C", "333"))
        .expect("add contact")
        .state;
    let state = bulk_import(
        &state,
        t0(),
        vec![ContactDraft::new("A", "111"), ContactDraft::new("B", "222")],
    );

    let names: Vec<&str> = state
        .active_list()
        .expect("active list")
        .contacts
        .iter()
        .map(|contact| contact.name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn rename_to_blank_is_rejected() {
    let state = ContactManagerState::with_default_list(DEFAULT_LIST_NAME, t0());
    let active = state.active_list_id.clone().expect("active id");
    let err = rename_list(&state, t0(), &active, "").unwrap_err();
    assert_eq!(err, CoreError::EmptyListName);
    assert_eq!(
        state.active_list().expect("active list").name,
        DEFAULT_LIST_NAME
    );
}

#[test]
fn deleting_active_of_two_lists_selects_the_other() {
    let state = ContactManagerState::with_default_list(DEFAULT_LIST_NAME, t0());
    let active = state.active_list_id.clone().expect("active id");
    let created = create_list(&state, t0(), "Backup").expect("create list");
    let other = created.id.expect("new list id");

    let next = delete_list(&created.state, &active).expect("delete list");
    assert_eq!(next.active_list_id, Some(other));
    assert_eq!(next.saved_lists.len(), 1);
}

#[test]
fn history_is_most_recent_first() {
    let state = ContactManagerState::with_default_list(DEFAULT_LIST_NAME, t0());
    let created = add_contact(&state, t0(), ContactDraft::new("Ada", "111")).expect("add");
    let id = created.id.expect("contact id");

    let mut state = created.state;
    for (offset, kind) in InteractionType::all().iter().enumerate() {
        state = log_interaction(
            &state,
            t0() + Duration::minutes(offset as i64),
            &id,
            InteractionNew::new(*kind),
        )
        .state;
    }

    let kinds: Vec<InteractionType> = state
        .contact_history(&id)
        .expect("history")
        .iter()
        .map(|log| log.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            InteractionType::WhatsApp,
            InteractionType::Sms,
            InteractionType::Call
        ]
    );
}
