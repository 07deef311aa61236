use super::profile;
use crate::{MemoryStorage, SessionStore};

use bp_core::ProfilePatch;

use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<Option<String>>>>;

fn store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStorage::new()))
}

fn recorder() -> (Seen, impl FnMut(Option<&bp_core::UserProfile>) + Send + 'static) {
    let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |user: Option<&bp_core::UserProfile>| {
        sink.lock().unwrap().push(user.map(|u| u.name.clone()));
    })
}

#[tokio::test]
async fn given_subscriber_when_set_update_clear_then_notified_in_order() {
    let store = store();
    let (seen, listener) = recorder();
    let _sub = store.subscribe(listener);

    store.set_user(profile("u1", "A")).unwrap();
    store.update_user(&ProfilePatch::new().name("B")).unwrap();
    store.clear_user();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some("A".to_string()), Some("B".to_string()), None]
    );
}

#[tokio::test]
async fn given_subscriber_when_listener_runs_then_store_already_updated() {
    let store = Arc::new(store());
    let observed = Arc::new(Mutex::new(None));
    let (reader, sink) = (Arc::downgrade(&store), observed.clone());
    let _sub = store.subscribe(move |user| {
        let current = reader.upgrade().and_then(|s| s.current_user());
        *sink.lock().unwrap() = Some((
            user.map(|u| u.id.clone()),
            current.map(|u| u.id.clone()),
        ));
    });

    store.set_user(profile("u1", "A")).unwrap();

    assert_eq!(
        *observed.lock().unwrap(),
        Some((Some("u1".to_string()), Some("u1".to_string())))
    );
}

#[tokio::test]
async fn given_unsubscribed_listener_when_mutation_then_not_called() {
    let store = store();
    let (seen, listener) = recorder();
    let sub = store.subscribe(listener);
    store.set_user(profile("u1", "A")).unwrap();

    sub.unsubscribe();
    store.set_user(profile("u2", "B")).unwrap();

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(store.listener_count(), 0);
}

#[tokio::test]
async fn given_dropped_subscription_when_mutation_then_not_called() {
    let store = store();
    let (seen, listener) = recorder();
    drop(store.subscribe(listener));

    store.set_user(profile("u1", "A")).unwrap();

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_active_subscription_when_unsubscribe_then_registry_empty() {
    let store = store();
    let (_seen, listener) = recorder();
    let sub = store.subscribe(listener);
    assert!(sub.is_active());

    sub.unsubscribe();

    assert_eq!(store.listener_count(), 0);
}

#[tokio::test]
async fn given_equal_profile_when_set_user_then_identity_subscriber_still_notified() {
    let store = store();
    let (seen, listener) = recorder();
    let _sub = store.subscribe(listener);

    store.set_user(profile("u1", "A")).unwrap();
    store.set_user(profile("u1", "A")).unwrap();

    assert_eq!(seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn given_clear_with_no_user_when_identity_subscriber_then_not_notified() {
    let store = store();
    let (seen, listener) = recorder();
    let _sub = store.subscribe(listener);

    store.clear_user();

    assert!(seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_selector_when_unrelated_field_changes_then_not_notified() {
    let store = store();
    store.set_user(profile("u1", "A")).unwrap();
    let names = Arc::new(Mutex::new(Vec::new()));
    let sink = names.clone();
    let _sub = store.subscribe_with(
        |state| state.user().map(|u| u.name.clone()),
        move |name: &Option<String>| sink.lock().unwrap().push(name.clone()),
    );

    store
        .update_user(&ProfilePatch::new().monthly_spend(99.0))
        .unwrap();
    store.update_user(&ProfilePatch::new().name("B")).unwrap();

    assert_eq!(*names.lock().unwrap(), vec![Some("B".to_string())]);
}

#[tokio::test]
async fn given_two_subscribers_when_one_unsubscribes_then_other_still_notified() {
    let store = store();
    let (first_seen, first) = recorder();
    let (second_seen, second) = recorder();
    let first_sub = store.subscribe(first);
    let _second_sub = store.subscribe(second);

    first_sub.unsubscribe();
    store.set_user(profile("u1", "A")).unwrap();

    assert!(first_seen.lock().unwrap().is_empty());
    assert_eq!(second_seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn given_store_dropped_when_subscription_dropped_then_no_panic() {
    let store = store();
    let (_seen, listener) = recorder();
    let sub = store.subscribe(listener);

    drop(store);

    assert!(sub.is_active());
    drop(sub);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_concurrent_mutators_when_notified_then_revisions_only_move_forward() {
    let store = store();
    let revisions = Arc::new(Mutex::new(Vec::new()));
    let sink = revisions.clone();
    let _sub = store.subscribe_with(
        |state| state.revision(),
        move |revision: &u64| sink.lock().unwrap().push(*revision),
    );

    std::thread::scope(|scope| {
        for thread in 0..4 {
            let store = &store;
            scope.spawn(move || {
                for i in 0..250 {
                    store
                        .set_user(profile(&format!("t{thread}-{i}"), "A"))
                        .unwrap();
                }
            });
        }
    });

    let seen = revisions.lock().unwrap();
    assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(seen.last().copied(), Some(store.snapshot().revision()));
}

#[tokio::test]
async fn given_listener_that_mutates_when_notified_then_nested_call_skipped() {
    let store = Arc::new(store());
    let calls = Arc::new(Mutex::new(0));
    let (handle, counter) = (Arc::downgrade(&store), calls.clone());
    let _sub = store.subscribe(move |user| {
        *counter.lock().unwrap() += 1;
        if let (Some(store), Some(user)) = (handle.upgrade(), user)
            && user.name == "A"
        {
            store.update_user(&ProfilePatch::new().name("B")).unwrap();
        }
    });

    store.set_user(profile("u1", "A")).unwrap();

    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(store.current_user().unwrap().name, "B");
}
