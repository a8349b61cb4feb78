//! Concurrency tests for the playback controller
//!
//! Many tasks on a multi-threaded runtime hammer one shared controller. The
//! lock must serialize every operation: no lost advances, no index outside
//! the playlist, no bag that disagrees with the index.

use std::collections::HashMap;
use std::sync::Arc;

use sequin_common::{PlaybackMode, Track};
use sequin_player::playback::SeededShuffle;
use sequin_player::PlaybackController;

const TASKS: usize = 16;
const ADVANCES_PER_TASK: usize = 250;

fn playlist(n: usize) -> Vec<Track> {
    (0..n)
        .map(|i| Track::new(format!("Song {}", i), "Artist", format!("/static/music/{}.mp3", i)))
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sequential_advances_are_not_lost() {
    let len = 7;
    let controller = Arc::new(PlaybackController::new());
    controller.replace_playlist(playlist(len)).await;

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                let mut returned = 0;
                for _ in 0..ADVANCES_PER_TASK {
                    if controller.advance().await.is_some() {
                        returned += 1;
                    }
                }
                returned
            })
        })
        .collect();

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap();
    }

    assert_eq!(total, TASKS * ADVANCES_PER_TASK);
    // Every advance moved the index by exactly one
    let snapshot = controller.snapshot().await;
    assert_eq!(snapshot.current_index, (TASKS * ADVANCES_PER_TASK) % len);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_random_advances_keep_bag_consistent() {
    let len = 5;
    let controller = Arc::new(PlaybackController::with_shuffle_source(SeededShuffle::new(11)));
    controller.replace_playlist(playlist(len)).await;
    controller.set_mode("random").await;

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                let mut seen = Vec::with_capacity(ADVANCES_PER_TASK);
                for _ in 0..ADVANCES_PER_TASK {
                    let track = controller.advance().await.expect("playlist is not empty");
                    seen.push(track.path);

                    let snapshot = controller.snapshot().await;
                    assert!(snapshot.current_index < len);
                    let remaining = snapshot.shuffle_remaining.expect("bag exists in random mode");
                    assert!((1..=len).contains(&remaining));
                }
                seen
            })
        })
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for handle in handles {
        for path in handle.await.unwrap() {
            *counts.entry(path).or_default() += 1;
        }
    }

    // 4000 draws over 5 tracks are 800 full bags: every track exactly 800 times
    let total = TASKS * ADVANCES_PER_TASK;
    assert_eq!(total % len, 0);
    assert_eq!(counts.len(), len);
    for count in counts.values() {
        assert_eq!(*count, total / len);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_mixed_operations_preserve_invariants() {
    let controller = Arc::new(PlaybackController::new());
    controller.replace_playlist(playlist(4)).await;

    let modes = ["sequence", "random", "repeat", "loop-all"];
    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                for i in 0..100 {
                    match (task + i) % 5 {
                        0 => {
                            controller.set_mode(modes[(task + i) % modes.len()]).await;
                        }
                        1 => {
                            controller.toggle_playing().await;
                        }
                        2 if i % 25 == 0 => {
                            controller.replace_playlist(playlist(2 + task % 5)).await;
                        }
                        _ => {
                            controller.advance().await;
                        }
                    }

                    let snapshot = controller.snapshot().await;
                    assert!(snapshot.current_index < snapshot.track_count);
                    assert_eq!(
                        snapshot.current.as_ref().map(|t| t.title.clone()),
                        Some(format!("Song {}", snapshot.current_index))
                    );
                    if let Some(remaining) = snapshot.shuffle_remaining {
                        assert!(remaining <= snapshot.track_count);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_toggles_balance_out() {
    let controller = Arc::new(PlaybackController::new());

    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                for _ in 0..10 {
                    controller.toggle_playing().await;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    // An even number of toggles returns to the initial paused state
    assert!(!controller.is_playing().await);
    assert_eq!(controller.mode().await, PlaybackMode::Sequential);
}
