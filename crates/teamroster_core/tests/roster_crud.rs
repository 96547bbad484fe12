use teamroster_core::{
    KeyValueStore, MemberValidationError, MemoryKeyValueStore, RosterStore, StoreError, STORE_KEY,
};

#[test]
fn add_grows_roster_by_one_with_unique_id() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let seed_size = store.len();

    let id = store.add("Ada", "Compilers").unwrap();

    assert_eq!(store.len(), seed_size + 1);
    let ids: Vec<_> = store.members().iter().map(|m| m.id).collect();
    assert_eq!(
        ids.iter().filter(|candidate| **candidate == id).count(),
        1,
        "freshly generated id must appear exactly once"
    );
}

#[test]
fn rapid_adds_get_distinct_ids() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();

    let first = store.add("Ada", "Compilers").unwrap();
    let second = store.add("Grace", "Linkers").unwrap();
    let third = store.add("Edsger", "Proofs").unwrap();

    assert!(first < second && second < third);
}

#[test]
fn add_trims_fields_before_storage() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();

    let id = store.add("  Ada  ", " Compilers ").unwrap();

    let member = store.members().iter().find(|m| m.id == id).unwrap();
    assert_eq!(member.name, "Ada");
    assert_eq!(member.skill, "Compilers");
}

#[test]
fn add_rejects_blank_name_and_leaves_roster_unchanged() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let before: Vec<_> = store.members().to_vec();

    let err = store.add("   ", "Compilers").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(MemberValidationError::EmptyName)
    ));
    assert_eq!(store.members(), before.as_slice());
}

#[test]
fn add_rejects_blank_skill() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();

    let err = store.add("Ada", "\t ").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(MemberValidationError::EmptySkill)
    ));
}

#[test]
fn remove_present_id_shrinks_roster_by_one() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let victim = store.members()[0].id;
    let before = store.len();

    assert!(store.remove(victim).unwrap());
    assert_eq!(store.len(), before - 1);
    assert!(store.members().iter().all(|m| m.id != victim));
}

#[test]
fn remove_absent_id_is_a_silent_noop() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let before: Vec<_> = store.members().to_vec();

    assert!(!store.remove(999_999).unwrap());
    assert_eq!(store.members(), before.as_slice());
}

#[test]
fn update_rewrites_fields_in_place() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let target = store.members()[1].id;

    assert!(store.update(target, "Renamed", "New Skill").unwrap());

    let member = store.members().iter().find(|m| m.id == target).unwrap();
    assert_eq!(member.name, "Renamed");
    assert_eq!(member.skill, "New Skill");
}

#[test]
fn update_absent_id_is_a_noop_and_blank_fields_are_rejected() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let target = store.members()[0].id;

    assert!(!store.update(424_242, "Ghost", "Nowhere").unwrap());

    let err = store.update(target, "", "Skill").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn every_successful_mutation_persists_the_roster() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    let id = store.add("Ada", "Compilers").unwrap();
    let expected = serde_json::to_string(store.members()).unwrap();

    let kv = store.into_backend();
    assert_eq!(kv.get(STORE_KEY).unwrap().as_deref(), Some(expected.as_str()));
    assert!(kv.get(STORE_KEY).unwrap().unwrap().contains(&id.to_string()));
}

#[test]
fn failed_add_does_not_write_to_the_backend() {
    let mut store = RosterStore::load(MemoryKeyValueStore::new()).unwrap();
    store.add("  ", "Skill").unwrap_err();

    let kv = store.into_backend();
    // Load alone never persists; the first write happens on the first
    // successful mutation.
    assert_eq!(kv.get(STORE_KEY).unwrap(), None);
}
