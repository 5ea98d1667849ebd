mod common;

use catdoor::models::Location;
use common::*;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn racing_triggers_log_a_transition_once() {
    let tmp = tempfile::tempdir().unwrap();
    let (engine, notifier, _) = observed_engine(&tmp);
    let engine = Arc::new(engine);
    let workers = 8;
    let barrier = Arc::new(Barrier::new(workers));

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                engine
                    .handle_remote(at("20230301-080000"), Location::Out)
                    .unwrap()
                    .is_significant()
            })
        })
        .collect();

    let significant = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|s| *s)
        .count();

    assert_eq!(significant, 1);
    assert_eq!(
        partition(&tmp, "202303"),
        "20230301-080000-sylvester_face-OUT\n"
    );
    assert_eq!(notifier.count(), 1);
}

#[test]
fn racing_returns_credit_time_outside_once() {
    let tmp = tempfile::tempdir().unwrap();
    let engine = Arc::new(file_engine(&tmp));
    engine
        .handle_remote(at("20230301-080000"), Location::Out)
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                engine
                    .handle_remote(at("20230301-090000"), Location::In)
                    .unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(aggregate(&tmp), "20230301,60\n");
    assert_eq!(partition(&tmp, "202303").lines().count(), 2);
}

#[test]
fn separate_engines_on_one_directory_log_a_transition_once() {
    for _ in 0..25 {
        let tmp = tempfile::tempdir().unwrap();
        let workers = 4;
        let barrier = Arc::new(Barrier::new(workers));

        // One engine per worker, as with separate `catdoor` processes.
        let handles: Vec<_> = (0..workers)
            .map(|_| {
                let engine = file_engine(&tmp);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    engine
                        .handle_remote(at("20230301-080000"), Location::Out)
                        .unwrap()
                        .is_significant()
                })
            })
            .collect();

        let significant = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|s| *s)
            .count();

        assert_eq!(significant, 1);
        assert_eq!(
            partition(&tmp, "202303"),
            "20230301-080000-sylvester_face-OUT\n"
        );
    }
}
