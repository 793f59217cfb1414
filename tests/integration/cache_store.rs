use raritymon::fingerprint::fingerprint;
use raritymon::store::{CacheStore, SledCacheStore, CACHE_TREE};
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

#[test]
fn round_trip_through_on_disk_database() {
    let temp_dir = TempDir::new().unwrap();
    let store = SledCacheStore::open(&temp_dir.path().join("raritymon.db")).unwrap();

    let key = fingerprint("X", 7);
    let bytes = br#"{"name":"Ape #7"}"#;
    store.put(&key, bytes).unwrap();

    assert_eq!(store.get(&key).unwrap().as_deref(), Some(&bytes[..]));
    assert_eq!(store.get(&fingerprint("X", 8)).unwrap(), None);
    assert_eq!(store.get(&fingerprint("Y", 7)).unwrap(), None);
}

#[test]
fn keys_are_raw_fingerprint_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("raritymon.db");
    {
        let store = SledCacheStore::open(&path).unwrap();
        store.put(&fingerprint("X", 7), b"v").unwrap();
        store.flush().unwrap();
    }

    let db = sled::open(&path).unwrap();
    let tree = db.open_tree(CACHE_TREE).unwrap();
    let keys: Vec<Vec<u8>> = tree.iter().keys().map(|k| k.unwrap().to_vec()).collect();
    assert_eq!(keys, vec![fingerprint("X", 7).to_vec()]);
}

#[test]
fn concurrent_puts_never_expose_partial_values() {
    let store = Arc::new(SledCacheStore::temporary().unwrap());
    let key = fingerprint("X", 7);

    let writers: Vec<_> = (0..4u8)
        .map(|i| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    store.put(&key, &[i; 256]).unwrap();
                }
            })
        })
        .collect();

    let reader = {
        let store = store.clone();
        thread::spawn(move || {
            for _ in 0..200 {
                if let Some(value) = store.get(&key).unwrap() {
                    assert_eq!(value.len(), 256);
                    assert!(value.iter().all(|b| *b == value[0]));
                }
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();
    assert_eq!(store.len(), 1);
}
