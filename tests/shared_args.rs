//! Integration tests for the shared argument holder.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use flagmap::args::{parse, ArgsBuilder, SharedArgs};

#[test]
fn readers_see_whole_parses_only() {
    const READERS: usize = 4;

    let shared = SharedArgs::new(parse(["-a=1", "-b=1"]));
    let start = Arc::new(Barrier::new(READERS + 1));
    let done = Arc::new(AtomicBool::new(false));
    let newer_seen = Arc::new(AtomicUsize::new(0));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let shared = shared.clone();
            let start = Arc::clone(&start);
            let done = Arc::clone(&done);
            let newer_seen = Arc::clone(&newer_seen);
            thread::spawn(move || {
                start.wait();
                loop {
                    // Read the flag before the store so the last pass sees the final parse.
                    let finished = done.load(Ordering::Acquire);
                    let current = shared.current();
                    // Both flags always come from the same parse.
                    assert_eq!(current.get_int("a", -1), current.get_int("b", -2));
                    if current.get_int("a", 0) > 1 {
                        newer_seen.fetch_add(1, Ordering::Relaxed);
                    }
                    if finished {
                        break;
                    }
                }
            })
        })
        .collect();

    start.wait();
    for n in 2..50 {
        let a = format!("-a={n}");
        let b = format!("--b={n}");
        shared.reset([a, b]);
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
    assert_eq!(shared.current().get_int("a", 0), 49);
    // Every reader's final pass runs after the last reset.
    assert!(newer_seen.load(Ordering::Relaxed) >= READERS);
}

#[test]
fn held_store_outlives_reset() {
    let shared = SharedArgs::default();
    shared.reset(["-connect=a", "-connect=b"]);
    let held = shared.current();

    shared.reset(["-noconnect"]);

    assert_eq!(held.get_all("connect"), ["a".to_string(), "b".to_string()]);
    assert!(shared.current().is_negated("connect"));
}

#[test]
fn builder_defaults_then_share() {
    let mut builder = ArgsBuilder::from_args(["-listen=0", "-noupnp"]);
    builder.soft_set_bool("listen", true);
    builder.soft_set_bool("upnp", true);
    builder.soft_set("maxconnections", "125");

    let shared = SharedArgs::new(builder.build());
    let current = shared.current();

    assert!(!current.get_bool("listen", true));
    assert!(!current.get_bool("upnp", true));
    assert_eq!(current.get_int("maxconnections", 0), 125);
}
