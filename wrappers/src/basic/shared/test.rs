use super::*;
use ruc::*;
use serde_json::json;
use std::thread;

#[test]
fn test_concurrent_add() {
    let hdr = SharedDictionary::new();
    let threads = 8;
    let per_thread = 200;

    (0..threads)
        .map(|t| {
            let hdr = hdr.clone();
            thread::spawn(move || {
                (0..per_thread).for_each(|i| {
                    assert!(hdr.add(&format!("{}-{}", t, i), i).is_done());
                });
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .for_each(|h| pnk!(h.join().map_err(|_| eg!("thread panicked"))));

    assert_eq!(hdr.size(), threads * per_thread);
    assert_eq!(hdr.snapshot().len(), hdr.size());
}

#[test]
fn test_concurrent_add_remove() {
    let hdr = SharedDictionary::new();
    (0..100).for_each(|i| {
        assert!(hdr.add(&i.to_string(), i).is_done());
    });

    let removers = (0..4)
        .map(|t| {
            let hdr = hdr.clone();
            thread::spawn(move || {
                (0..100).filter(|i| i % 4 == t).for_each(|i| {
                    assert_eq!(hdr.remove(&i.to_string()), Outcome::Done(true));
                });
            })
        })
        .collect::<Vec<_>>();
    removers.into_iter().for_each(|h| {
        h.join().unwrap();
    });

    assert!(hdr.is_empty());
    assert_eq!(hdr.remove("0"), Outcome::Done(false));
}

#[test]
fn test_forwarded_ops() {
    let hdr = SharedDictionary::new();
    assert_eq!(hdr.add("name", "Anna"), Outcome::Done(1));
    assert_eq!(hdr.add(" ", "x"), Outcome::Invalid);
    assert_eq!(hdr.add_all(json!({"a": 1, "b": null}), false), Outcome::Done(2));

    assert!(hdr.has_key("a"));
    assert_eq!(hdr.has_key_dyn(&json!(1)), Outcome::Invalid);
    assert_eq!(hdr.get("a"), Outcome::Done(Value::from(1)));
    assert_eq!(hdr.get("b"), Outcome::Absent);

    assert_eq!(hdr.search("name", "ANN", false, false), Outcome::Done(true));
    assert_eq!(
        hdr.search_with("name", "anna", &SearchOpts::new().strict(true).exact_match(true)),
        Outcome::Done(false)
    );

    assert_eq!(hdr.remove_all(), 0);
    assert!(hdr.is_empty());
}

#[test]
fn test_read_write_closures() {
    let hdr = SharedDictionary::from(Dictionary::new());

    // read-modify-write under one lock
    let bump = |d: &mut Dictionary| {
        let n = d.get("n").done().and_then(Value::as_f64).unwrap_or(0.0);
        d.add("n", n + 1.0)
    };
    (0..10).for_each(|_| {
        assert!(hdr.write(bump).is_done());
    });
    assert_eq!(hdr.read(|d| d.get("n").cloned()), Outcome::Done(Value::from(10)));

    let other = hdr.clone();
    let hdr = pnk!(hdr.try_unwrap().err());
    drop(other);
    let d = pnk!(hdr.try_unwrap().ok());
    assert_eq!(d.size(), 1);
}
