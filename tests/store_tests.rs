use rtrainwatch::{AppError, EventStore, NewEvent};
use std::sync::{Arc, Barrier};
use std::thread;

mod common;
use common::{new_event, setup_test_db, store_with};

#[test]
fn test_get_after_create_returns_same_record() {
    let store = EventStore::open_in_memory().unwrap();

    let created = store
        .create(&NewEvent::new("Room A", "Ana", "09:00", "10:00"))
        .unwrap();

    assert!(created.id > 0);
    assert!(!created.created_at.is_empty());
    assert_eq!(created.location, "Room A");
    assert_eq!(created.trainer, "Ana");
    assert_eq!(created.start_time, "09:00");
    assert_eq!(created.end_time, "10:00");

    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched, Some(created));
}

#[test]
fn test_get_unknown_id_is_absent_not_error() {
    let store = EventStore::open_in_memory().unwrap();
    assert_eq!(store.get(42).unwrap(), None);
}

#[test]
fn test_create_rejects_missing_fields() {
    let store = EventStore::open_in_memory().unwrap();

    let cases = [
        NewEvent::new("", "Ana", "09:00", "10:00"),
        NewEvent::new("Room A", "", "09:00", "10:00"),
        NewEvent::new("Room A", "Ana", "", "10:00"),
        NewEvent::new("Room A", "Ana", "09:00", "   "),
    ];

    for ev in &cases {
        let err = store.create(ev).unwrap_err();
        assert!(
            matches!(err, AppError::Validation(_)),
            "expected validation error for {:?}, got {:?}",
            ev,
            err
        );
    }

    assert_eq!(store.count().unwrap(), 0, "nothing must be stored");
}

#[test]
fn test_create_keeps_loose_times_by_default() {
    let store = EventStore::open_in_memory().unwrap();

    let ev = store
        .create(&NewEvent::new("Room A", "Ana", "late", "25:99"))
        .unwrap();
    assert_eq!(ev.end_time, "25:99");
}

#[test]
fn test_strict_times_rejects_malformed_times() {
    let store = EventStore::open_in_memory()
        .unwrap()
        .with_strict_times(true);

    let err = store
        .create(&NewEvent::new("Room A", "Ana", "09:00", "25:00"))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(_)));

    store
        .create(&NewEvent::new("Room A", "Ana", "09:00", "23:59"))
        .unwrap();
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn test_list_is_most_recent_first() {
    let store = store_with(&[("first", "10:00"), ("second", "11:00"), ("third", "12:00")]);

    let locations: Vec<String> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|e| e.location)
        .collect();

    assert_eq!(locations, vec!["third", "second", "first"]);
}

#[test]
fn test_list_empty_store() {
    let store = EventStore::open_in_memory().unwrap();
    assert!(store.list().unwrap().is_empty());
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_list_reflects_create_and_delete() {
    let store = store_with(&[("a", "10:00")]);
    assert_eq!(store.list().unwrap().len(), 1);

    let b = store.create(&new_event("b", "11:00")).unwrap();
    assert!(store.list().unwrap().iter().any(|e| e.id == b.id));

    store.delete(b.id).unwrap();
    assert!(!store.list().unwrap().iter().any(|e| e.id == b.id));
}

#[test]
fn test_delete_twice_fails_second_time() {
    let store = store_with(&[("a", "10:00")]);
    let id = store.list().unwrap()[0].id;

    let deleted = store.delete(id).unwrap();
    assert_eq!(deleted.id, id);
    assert_eq!(deleted.location, "a");

    let err = store.delete(id).unwrap_err();
    assert!(matches!(err, AppError::NotFound(x) if x == id));
    assert!(!err.is_storage());
}

#[test]
fn test_count_matches_list_len() {
    let store = EventStore::open_in_memory().unwrap();

    for i in 0..5 {
        store.create(&new_event(&format!("room {i}"), "10:00")).unwrap();
        assert_eq!(store.count().unwrap() as usize, store.list().unwrap().len());
    }

    let ids: Vec<i64> = store.list().unwrap().iter().map(|e| e.id).collect();
    for id in ids.iter().take(3) {
        store.delete(*id).unwrap();
        assert_eq!(store.count().unwrap() as usize, store.list().unwrap().len());
    }
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_ids_are_never_reused() {
    let store = store_with(&[("a", "10:00"), ("b", "11:00")]);
    let max_id = store.list().unwrap().iter().map(|e| e.id).max().unwrap();

    store.delete(max_id).unwrap();
    let next = store.create(&new_event("c", "12:00")).unwrap();

    assert!(next.id > max_id, "id {} reused after deleting {}", next.id, max_id);
}

#[test]
fn test_concurrent_delete_exactly_one_succeeds() {
    let (_dir, db_path) = setup_test_db("concurrent_delete");
    let store = Arc::new(EventStore::open(&db_path).unwrap());
    let id = store.create(&new_event("contended", "10:00")).unwrap().id;

    let workers = 8;
    let barrier = Arc::new(Barrier::new(workers));

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.delete(id)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let not_found = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::NotFound(_))))
        .count();

    assert_eq!(ok, 1);
    assert_eq!(not_found, workers - 1);
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_concurrent_delete_across_store_handles() {
    let (_dir, db_path) = setup_test_db("concurrent_handles");
    let id = {
        let store = EventStore::open(&db_path).unwrap();
        let id = store.create(&new_event("shared", "10:00")).unwrap().id;
        store.close().unwrap();
        id
    };

    let barrier = Arc::new(Barrier::new(4));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = db_path.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let store = EventStore::open(&path).unwrap();
                barrier.wait();
                store.delete(id).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(successes, 1);
}

#[test]
fn test_writes_visible_to_other_handles() {
    let (_dir, db_path) = setup_test_db("cross_handle");
    let writer = EventStore::open(&db_path).unwrap();
    let reader = EventStore::open(&db_path).unwrap();

    // warm up the reader connection before the write
    assert_eq!(reader.count().unwrap(), 0);

    let ev = writer.create(&new_event("Room B", "15:30")).unwrap();

    assert_eq!(reader.get(ev.id).unwrap(), Some(ev.clone()));
    assert_eq!(reader.count().unwrap(), 1);

    writer.delete(ev.id).unwrap();
    assert_eq!(reader.get(ev.id).unwrap(), None);
    assert!(reader.list().unwrap().is_empty());
}

#[test]
fn test_concurrent_readers_and_writer() {
    let (_dir, db_path) = setup_test_db("readers_writer");
    let store = Arc::new(EventStore::open(&db_path).unwrap());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..20 {
                store.create(&new_event(&format!("w{i}"), "10:00")).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut last = 0;
                for _ in 0..20 {
                    let n = store.list().unwrap().len();
                    assert!(n >= last, "list shrank from {} to {}", last, n);
                    last = n;
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }

    assert_eq!(store.count().unwrap(), 20);
}

#[test]
fn test_data_survives_reopen() {
    let (_dir, db_path) = setup_test_db("reopen");

    let created = {
        let store = EventStore::open(&db_path).unwrap();
        let ev = store.create(&new_event("persist", "18:00")).unwrap();
        store.close().unwrap();
        ev
    };

    let store = EventStore::open(&db_path).unwrap();
    assert_eq!(store.get(created.id).unwrap(), Some(created));
}

#[test]
fn test_journal_records_create_and_delete() {
    let store = store_with(&[("logged", "10:00")]);
    let id = store.list().unwrap()[0].id;
    store.delete(id).unwrap();

    let ops: Vec<String> = store
        .journal()
        .unwrap()
        .into_iter()
        .filter(|e| e.operation != "migration_applied")
        .map(|e| format!("{}:{}", e.operation, e.target))
        .collect();

    assert_eq!(ops, vec![format!("add:{id}"), format!("del:{id}")]);
}

#[test]
fn test_failed_delete_leaves_no_journal_entry() {
    let store = EventStore::open_in_memory().unwrap();
    assert!(store.delete(7).is_err());

    assert!(
        !store
            .journal()
            .unwrap()
            .iter()
            .any(|e| e.operation == "del")
    );
}

#[test]
fn test_integrity_check_ok() {
    let store = store_with(&[("a", "10:00")]);
    assert_eq!(store.integrity_check().unwrap(), "ok");
    store.vacuum().unwrap();
    store.migrate().unwrap();
    assert_eq!(store.count().unwrap(), 1);
}
