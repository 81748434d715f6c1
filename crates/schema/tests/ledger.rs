#![forbid(unsafe_code)]

use bx_schema::SchemaStore;
use std::path::PathBuf;

fn temp_db(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    base.join(format!("bx_schema_{test_name}_{pid}_{nonce}.db"))
}

#[test]
fn ledger_persists_across_reopen() {
    let db = temp_db("ledger_persists_across_reopen");

    {
        let mut store = SchemaStore::open(&db).expect("open store");
        let ran = store.apply_steps(3).expect("apply three");
        assert_eq!(ran, vec![20251109080411, 20251109081015, 20251109111931]);
    }

    let mut store = SchemaStore::open(&db).expect("reopen store");
    let applied = store.applied().expect("ledger");
    assert_eq!(applied.len(), 3);

    let report = store.status().expect("status");
    assert_eq!(report.pending(), 41);

    let rest = store.apply_all().expect("finish history");
    assert_eq!(rest.len(), 41);
    assert_eq!(store.status().expect("status").pending(), 0);

    std::fs::remove_file(&db).expect("remove temp db");
}

#[test]
fn apply_steps_zero_is_a_no_op() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    let ran = store.apply_steps(0).expect("apply zero");
    assert!(ran.is_empty());
    assert!(store.applied().expect("ledger").is_empty());
}

#[test]
fn ledger_records_names_and_timestamps() {
    let mut store = SchemaStore::open_in_memory().expect("open store");
    store.apply_steps(1).expect("apply baseline");

    let applied = store.applied().expect("ledger");
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].version, 20251109080411);
    assert_eq!(applied[0].name, "baseline");
    assert!(applied[0].applied_at_ms > 0);
}
