use std::{cell::Cell, rc::Rc};

use movielog::{
    movie::{MovieDraft, MoviePatch, MovieRecord},
    persist::{sqlite::SqliteRecordStore, RecordStore, StoreError, StoreResult},
    session::{
        events::SessionEvent,
        handle::{Session, SessionError},
    },
    types::{Rating, Year},
    validate::Rejection,
};

/// Store whose writes can be switched to fail, wrapping a real SQLite store.
struct FlakyStore {
    inner: SqliteRecordStore,
    fail_writes: Rc<Cell<bool>>,
}

impl FlakyStore {
    fn check(&self) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Sqlite(rusqlite::Error::InvalidQuery));
        }
        Ok(())
    }
}

impl RecordStore for FlakyStore {
    fn list(&self) -> StoreResult<Vec<MovieRecord>> {
        self.inner.list()
    }

    fn insert(&mut self, record: &MovieRecord) -> StoreResult<()> {
        self.check()?;
        self.inner.insert(record)
    }

    fn update(&mut self, title: &str, year: Year, rating: Rating) -> StoreResult<()> {
        self.check()?;
        self.inner.update(title, year, rating)
    }

    fn delete(&mut self, title: &str) -> StoreResult<()> {
        self.check()?;
        self.inner.delete(title)
    }
}

fn memory_session() -> Session {
    let store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    Session::open(Box::new(store))
        .expect("open session")
        .with_current_year(2024)
}

fn flaky_session() -> (Session, Rc<Cell<bool>>) {
    let fail_writes = Rc::new(Cell::new(false));
    let store = FlakyStore {
        inner: SqliteRecordStore::open_in_memory().expect("open sqlite"),
        fail_writes: Rc::clone(&fail_writes),
    };
    let session = Session::open(Box::new(store))
        .expect("open session")
        .with_current_year(2024);
    (session, fail_writes)
}

fn snapshot(session: &Session) -> Vec<MovieRecord> {
    session.catalog().export_snapshot()
}

#[test]
fn add_persists_and_updates_snapshot() {
    let mut session = memory_session();
    let event = session
        .add(MovieDraft::manual("Heat", 1995, 8.333))
        .expect("add");

    assert_eq!(
        event,
        SessionEvent::Added {
            title: "Heat".to_string()
        }
    );
    assert_eq!(session.catalog().get("heat").map(|r| r.rating), Some(8.33));
    assert_eq!(session.stored_records().expect("list"), snapshot(&session));
}

#[test]
fn open_loads_existing_rows_as_snapshot() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    store
        .insert(&MovieRecord {
            title: "Heat".to_string(),
            year: 1995,
            rating: 8.3,
            poster_url: String::new(),
        })
        .expect("insert");

    let session = Session::open(Box::new(store)).expect("open session");
    assert_eq!(session.catalog().len(), 1);
    assert!(session.catalog().contains("HEAT"));
}

#[test]
fn duplicate_titles_are_rejected_ignoring_case() {
    let mut session = memory_session();
    session
        .add(MovieDraft::manual("Heat", 1995, 8.3))
        .expect("add");

    let res = session.add(MovieDraft::manual("heat", 2001, 5.0));
    assert!(matches!(res, Err(SessionError::Duplicate(t)) if t == "Heat"));
    assert_eq!(session.stored_records().expect("list").len(), 1);
}

#[test]
fn invalid_drafts_never_reach_the_store() {
    let mut session = memory_session();

    let too_old = session.add(MovieDraft::manual("Ancient", 1700, 5.0));
    assert!(matches!(
        too_old,
        Err(SessionError::Invalid(Rejection::YearOutOfRange { year: 1700, .. }))
    ));

    let too_high = session.add(MovieDraft::manual("Loud", 2000, 11.0));
    assert!(matches!(
        too_high,
        Err(SessionError::Invalid(Rejection::RatingOutOfRange))
    ));

    let symbols = session.add(MovieDraft::manual("!!!", 2000, 5.0));
    assert!(matches!(
        symbols,
        Err(SessionError::Invalid(Rejection::SymbolOnlyTitle))
    ));

    assert!(session.stored_records().expect("list").is_empty());
    assert!(session.catalog().is_empty());
}

#[test]
fn update_changes_only_requested_fields() {
    let mut session = memory_session();
    session
        .add(MovieDraft::manual("Heat", 1995, 8.3))
        .expect("add");

    let event = session
        .update(
            "HEAT",
            MoviePatch {
                rating: Some(9.0),
                ..MoviePatch::default()
            },
        )
        .expect("update");
    assert_eq!(
        event,
        SessionEvent::Updated {
            title: "Heat".to_string(),
            year: false,
            rating: true,
        }
    );

    let rec = session.catalog().get("Heat").expect("present").clone();
    assert_eq!((rec.year, rec.rating), (1995, 9.0));
    assert_eq!(session.stored_records().expect("list"), vec![rec]);
}

#[test]
fn update_rejects_missing_titles_and_empty_patches() {
    let mut session = memory_session();
    session
        .add(MovieDraft::manual("Heat", 1995, 8.3))
        .expect("add");

    let missing = session.update(
        "Ronin",
        MoviePatch {
            year: Some(1998),
            ..MoviePatch::default()
        },
    );
    assert!(matches!(missing, Err(SessionError::NotFound(_))));

    let empty = session.update("Heat", MoviePatch::default());
    assert!(matches!(empty, Err(SessionError::EmptyPatch)));

    let bad_year = session.update(
        "Heat",
        MoviePatch {
            year: Some(2999),
            ..MoviePatch::default()
        },
    );
    assert!(matches!(bad_year, Err(SessionError::Invalid(_))));
    assert_eq!(session.catalog().get("Heat").map(|r| r.year), Some(1995));
}

#[test]
fn delete_is_case_insensitive_and_missing_is_reported() {
    let mut session = memory_session();
    session
        .add(MovieDraft::manual("Heat", 1995, 8.3))
        .expect("add");

    let event = session.delete("hEaT").expect("delete");
    assert_eq!(
        event,
        SessionEvent::Deleted {
            title: "Heat".to_string()
        }
    );
    assert!(session.catalog().is_empty());
    assert!(session.stored_records().expect("list").is_empty());

    assert!(matches!(
        session.delete("Heat"),
        Err(SessionError::NotFound(_))
    ));
}

#[test]
fn store_failures_leave_snapshot_untouched() {
    let (mut session, fail_writes) = flaky_session();
    session
        .add(MovieDraft::manual("Heat", 1995, 8.3))
        .expect("add");
    let before = snapshot(&session);

    fail_writes.set(true);

    let add = session.add(MovieDraft::manual("Ronin", 1998, 7.2));
    assert!(matches!(add, Err(SessionError::Store(_))));

    let update = session.update(
        "Heat",
        MoviePatch {
            year: Some(1996),
            rating: Some(1.0),
        },
    );
    assert!(matches!(update, Err(SessionError::Store(_))));

    let delete = session.delete("Heat");
    assert!(matches!(delete, Err(SessionError::Store(_))));

    assert_eq!(snapshot(&session), before);
    assert_eq!(session.stored_records().expect("list"), before);

    fail_writes.set(false);
    session
        .add(MovieDraft::manual("Ronin", 1998, 7.2))
        .expect("add after recovery");
    assert_eq!(session.catalog().len(), 2);
}
