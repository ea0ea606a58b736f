use tempfile::TempDir;

use movielog::{
    movie::MovieRecord,
    persist::{sqlite::SqliteRecordStore, RecordStore, StoreError},
};

fn record(title: &str, year: i32, rating: f64) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        year,
        rating,
        poster_url: String::new(),
    }
}

#[test]
fn insert_then_list_returns_exact_values() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    store.insert(&record("Heat", 1995, 8.3)).expect("insert");

    let listed = store.list().expect("list");
    assert_eq!(listed, vec![record("Heat", 1995, 8.3)]);
}

#[test]
fn ratings_are_stored_with_two_decimals() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    store.insert(&record("Alien", 1979, 8.456)).expect("insert");

    let listed = store.list().expect("list");
    assert_eq!(listed[0].rating, 8.46);
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    for (i, title) in ["Zodiac", "Amelie", "Memento"].iter().enumerate() {
        store
            .insert(&record(title, 2000 + i as i32, 7.0))
            .expect("insert");
    }

    let titles: Vec<String> = store
        .list()
        .expect("list")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Zodiac", "Amelie", "Memento"]);
}

#[test]
fn duplicate_insert_is_rejected_and_store_unchanged() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    store.insert(&record("Heat", 1995, 8.3)).expect("insert");

    let exact = store.insert(&record("Heat", 2001, 1.0));
    assert!(matches!(exact, Err(StoreError::DuplicateKey(t)) if t == "Heat"));

    let folded = store.insert(&record("HEAT", 2001, 1.0));
    assert!(matches!(folded, Err(StoreError::DuplicateKey(_))));

    assert_eq!(store.list().expect("list"), vec![record("Heat", 1995, 8.3)]);
}

#[test]
fn update_overwrites_year_and_rating_but_not_poster() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    let mut rec = record("Heat", 1995, 8.3);
    rec.poster_url = "https://example.com/heat.jpg".to_string();
    store.insert(&rec).expect("insert");

    store.update("heat", 1996, 9.125).expect("update");

    let listed = store.list().expect("list");
    assert_eq!(listed[0].title, "Heat");
    assert_eq!(listed[0].year, 1996);
    assert_eq!(listed[0].rating, 9.13);
    assert_eq!(listed[0].poster_url, "https://example.com/heat.jpg");
}

#[test]
fn update_of_missing_title_fails_and_changes_nothing() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    store.insert(&record("Heat", 1995, 8.3)).expect("insert");

    let res = store.update("Ronin", 1998, 7.0);
    assert!(matches!(res, Err(StoreError::NotFound(t)) if t == "Ronin"));
    assert_eq!(store.list().expect("list"), vec![record("Heat", 1995, 8.3)]);
}

#[test]
fn delete_removes_row_and_missing_delete_is_noop() {
    let mut store = SqliteRecordStore::open_in_memory().expect("open sqlite");
    store.insert(&record("Heat", 1995, 8.3)).expect("insert");
    store.insert(&record("Ronin", 1998, 7.2)).expect("insert");

    store.delete("HEAT").expect("delete");
    let titles: Vec<String> = store
        .list()
        .expect("list")
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(titles, vec!["Ronin"]);

    let res = store.delete("Heat");
    assert!(matches!(res, Err(StoreError::NotFound(_))));
    assert_eq!(store.count().expect("count"), 1);
}

#[test]
fn rows_survive_reopen() {
    let tmp = TempDir::new().expect("tmp");
    let db_path = tmp.path().join("movies.db");

    let mut store = SqliteRecordStore::open(&db_path).expect("open sqlite");
    store.insert(&record("Heat", 1995, 8.3)).expect("insert");
    store.insert(&record("Ronin", 1998, 7.2)).expect("insert");
    store.delete("Ronin").expect("delete");
    drop(store);

    let reopened = SqliteRecordStore::open(&db_path).expect("reopen");
    assert_eq!(reopened.list().expect("list"), vec![record("Heat", 1995, 8.3)]);
}
