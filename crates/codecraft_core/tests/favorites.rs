use chrono::NaiveDate;
use codecraft_core::db::open_db_in_memory;
use codecraft_core::store::FAVORITES_KEY;
use codecraft_core::{ContentStore, FixedClock, KvRepository, SqliteKvRepository};

fn test_clock() -> Box<FixedClock> {
    Box::new(FixedClock::at_date(
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
    ))
}

#[test]
fn toggle_parity_matches_call_count() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    let mut store = ContentStore::new(repo, test_clock());

    assert!(!store.is_favorite("react-hooks-dasar"));
    for round in 1..=5 {
        let now_member = store.toggle_favorite("react-hooks-dasar");
        assert_eq!(now_member, round % 2 == 1);
        assert_eq!(store.is_favorite("react-hooks-dasar"), round % 2 == 1);
    }
}

#[test]
fn toggle_pair_restores_the_empty_set() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    let mut store = ContentStore::new(repo, test_clock());

    assert!(store.toggle_favorite("p1"));
    assert_eq!(store.favorites(), ["p1".to_string()]);
    assert!(!store.toggle_favorite("p1"));
    assert!(store.favorites().is_empty());
}

#[test]
fn favorite_articles_follow_store_order_and_skip_unknown_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    let mut store = ContentStore::new(repo, test_clock());

    store.toggle_favorite("react-hooks-dasar");
    store.toggle_favorite("post-never-existed");
    store.toggle_favorite("laravel-panduan-lengkap-pemula");

    let favorites = store.favorite_articles();
    let ids: Vec<&str> = favorites.iter().map(|article| article.id.as_str()).collect();
    // Store order, not toggle order; the unknown id contributes nothing.
    assert_eq!(ids, ["laravel-panduan-lengkap-pemula", "react-hooks-dasar"]);
}

#[test]
fn favorites_survive_reinitialization() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteKvRepository::try_new(&conn).unwrap();
        let mut store = ContentStore::new(repo, test_clock());
        store.toggle_favorite("react-hooks-dasar");
    }

    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    let store = ContentStore::new(repo, test_clock());
    assert!(store.is_favorite("react-hooks-dasar"));
    assert_eq!(store.favorites().len(), 1);
}

#[test]
fn corrupt_favorites_degrade_to_an_empty_set() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteKvRepository::try_new(&conn).unwrap();
        repo.write(FAVORITES_KEY, "not-an-array").unwrap();
    }

    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    let store = ContentStore::new(repo, test_clock());
    assert!(store.favorites().is_empty());
}

#[test]
fn duplicate_ids_in_stored_favorites_are_collapsed() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteKvRepository::try_new(&conn).unwrap();
        repo.write(FAVORITES_KEY, "[\"p1\",\"p2\",\"p1\"]").unwrap();
    }

    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    let store = ContentStore::new(repo, test_clock());
    assert_eq!(store.favorites(), ["p1".to_string(), "p2".to_string()]);
}
