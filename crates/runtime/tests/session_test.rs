//! End-to-end session tests driving the runtime without background
//! tickers: every tick is issued manually so the assertions stay
//! deterministic.

use std::sync::Arc;
use std::time::Duration;

use pet_core::action::{ActionResult, ApplyOutcome, PetActionKind};
use pet_core::derived::Mood;
use pet_core::state::{DecayRates, SceneKind, Stats};
use runtime::{
    Event, FileSnapshotRepository, LifecycleEvent, Runtime, RuntimeConfig, RuntimeError,
    StateEvent, Topic,
};

fn manual_config() -> RuntimeConfig {
    RuntimeConfig {
        background_tickers: false,
        rest_wake_delay_ms: 50,
        ..RuntimeConfig::default()
    }
}

#[tokio::test]
async fn complete_care_session() {
    let runtime = Runtime::builder()
        .config(manual_config())
        .build()
        .await
        .expect("runtime should build");
    let handle = runtime.handle();

    // Fresh session starts from the content defaults.
    let state = handle.state().await.unwrap();
    assert_eq!(state.stats.hunger, 80.0);
    assert_eq!(state.inventory.get("kibble").unwrap().quantity, 5);
    assert_eq!(handle.mood().await.unwrap(), Mood::Happy);

    // Feeding consumes one kibble and applies its effect.
    let result = handle.feed("kibble").await.expect("feed should succeed");
    assert_eq!(
        result,
        ActionResult::Pet {
            kind: PetActionKind::Feed,
            outcome: ApplyOutcome::Applied,
        }
    );
    let state = handle.state().await.unwrap();
    assert_eq!(state.stats.hunger, 100.0); // 80 + 20 clamped
    assert_eq!(state.stats.happiness, 95.0);
    assert_eq!(state.inventory.get("kibble").unwrap().quantity, 4);

    // Bare-hands play falls back to the ball's effect.
    handle.play(None).await.expect("play should succeed");
    let state = handle.state().await.unwrap();
    assert_eq!(state.stats.energy, 65.0); // 75 - 10

    // Cleaning defaults to the bath routine.
    handle.clean(None).await.expect("clean should succeed");
    let state = handle.state().await.unwrap();
    assert_eq!(state.stats.cleanliness, 100.0); // 85 + 30 clamped

    // Unknown food is a silent no-op, not an error.
    let result = handle.feed("pizza").await.expect("no-op should not error");
    assert_eq!(
        result,
        ActionResult::Pet {
            kind: PetActionKind::Feed,
            outcome: ApplyOutcome::NoEffect,
        }
    );

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn guard_rejection_surfaces_the_player_message() {
    let mut state = pet_content::default_state(0);
    state.stats = Stats::new(50.0, 50.0, 50.0, 8.0);

    let runtime = Runtime::builder()
        .config(manual_config())
        .initial_state(state.clone())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let error = handle.play(None).await.expect_err("play should be rejected");
    match error {
        RuntimeError::Rejected(inner) => assert_eq!(
            inner.player_message(),
            "Your pet is too tired to play. Let them rest first."
        ),
        other => panic!("unexpected error: {other:?}"),
    }

    // A rejected action leaves state untouched.
    assert_eq!(handle.state().await.unwrap(), state);

    // Cleaning is still allowed above its lower floor.
    handle.clean(None).await.expect("clean should succeed");

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn rest_suppresses_decay_until_the_scheduled_wake() {
    let runtime = Runtime::builder()
        .config(manual_config())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut lifecycle = handle.subscribe(Topic::Lifecycle);

    handle.rest(None).await.expect("rest should succeed");
    let state = handle.state().await.unwrap();
    assert!(state.flags.sleeping);
    assert_eq!(state.stats.energy, 100.0); // 75 + 50 clamped
    let rested = state.stats;

    match lifecycle.recv().await.unwrap() {
        Event::Lifecycle(LifecycleEvent::Slept { wake_after_ms }) => {
            assert_eq!(wake_after_ms, 50)
        }
        other => panic!("expected Slept, got {other:?}"),
    }

    // Decay is fully suppressed while sleeping.
    let result = handle.decay_tick().await.unwrap();
    assert_eq!(result, ActionResult::Decay(ApplyOutcome::NoEffect));
    assert_eq!(handle.state().await.unwrap().stats, rested);

    // The scheduled wake fires and decay resumes.
    match lifecycle.recv().await.unwrap() {
        Event::Lifecycle(LifecycleEvent::Woke) => {}
        other => panic!("expected Woke, got {other:?}"),
    }
    assert!(!handle.state().await.unwrap().flags.sleeping);

    let result = handle.decay_tick().await.unwrap();
    assert_eq!(result, ActionResult::Decay(ApplyOutcome::Applied));

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn manual_wake_ends_the_rest_early() {
    let config = RuntimeConfig {
        rest_wake_delay_ms: 10_000,
        ..manual_config()
    };
    let runtime = Runtime::builder().config(config).build().await.unwrap();
    let handle = runtime.handle();

    handle.rest(Some("sleep".into())).await.unwrap();
    assert!(handle.state().await.unwrap().flags.sleeping);

    handle.wake_up().await.unwrap();
    assert!(!handle.state().await.unwrap().flags.sleeping);

    // The stale scheduled wake is a no-op against an awake pet.
    let result = handle.wake_up().await.unwrap();
    assert_eq!(result, ActionResult::System);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn overlapping_rest_reschedules_the_wake() {
    let config = RuntimeConfig {
        rest_wake_delay_ms: 200,
        ..manual_config()
    };
    let runtime = Runtime::builder().config(config).build().await.unwrap();
    let handle = runtime.handle();
    let mut lifecycle = handle.subscribe(Topic::Lifecycle);

    handle.rest(None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;

    // A second rest before the first deadline restarts the delay; the
    // first rest's wake must not end this one early.
    handle.rest(None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(120)).await;

    // Past the first deadline now, and still asleep.
    assert!(handle.state().await.unwrap().flags.sleeping);

    // Exactly one wake fires, at the second deadline.
    let mut woke = 0;
    while let Ok(Ok(event)) =
        tokio::time::timeout(Duration::from_millis(300), lifecycle.recv()).await
    {
        if let Event::Lifecycle(LifecycleEvent::Woke) = event {
            woke += 1;
        }
    }
    assert_eq!(woke, 1);
    assert!(!handle.state().await.unwrap().flags.sleeping);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_commands_apply_as_if_serial() {
    let mut state = pet_content::default_state(0);
    state.stats = Stats::new(20.0, 50.0, 50.0, 50.0);

    let runtime = Runtime::builder()
        .config(manual_config())
        .initial_state(state)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let mut tasks = Vec::new();
    for _ in 0..2 {
        let feeder = handle.clone();
        tasks.push(tokio::spawn(async move { feeder.feed("kibble").await }));
        let ticker = handle.clone();
        tasks.push(tokio::spawn(async move { ticker.decay_tick().await }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    // Whatever the interleaving, the outcome is a serial replay of two
    // feeds and two decay ticks, each applied as a whole.
    let state = handle.state().await.unwrap();
    assert_eq!(state.stats.hunger, 58.0); // 20 + 20 + 20 - 1 - 1
    assert_eq!(state.stats.happiness, 59.0); // 50 + 5 + 5 - 0.5 - 0.5
    assert_eq!(state.stats.cleanliness, 50.0 - 0.3 - 0.3);
    assert_eq!(state.stats.energy, 50.0 - 0.2 - 0.2);
    assert_eq!(state.inventory.get("kibble").unwrap().quantity, 3);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn decay_tick_accepts_override_rates() {
    let runtime = Runtime::builder()
        .config(manual_config())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let before = handle.state().await.unwrap().stats;

    handle
        .decay_tick_with(DecayRates::new(-10.0, 0.0, 0.0, 0.0))
        .await
        .unwrap();

    let after = handle.state().await.unwrap().stats;
    assert_eq!(after.hunger, before.hunger - 10.0);
    assert_eq!(after.happiness, before.happiness);
    assert_eq!(after.cleanliness, before.cleanliness);
    assert_eq!(after.energy, before.energy);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn notifications_are_raised_deduplicated_and_swept() {
    let mut state = pet_content::default_state(0);
    state.stats = Stats::new(8.0, 25.0, 85.0, 75.0);

    let runtime = Runtime::builder()
        .config(manual_config())
        .initial_state(state)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let raised = handle.check_and_notify().await.unwrap();
    assert_eq!(raised.len(), 2);
    assert_eq!(raised[0].message, "Hunger is critically low!");
    assert_eq!(raised[1].message, "Happiness is getting low.");

    // A second check inside the dedup window raises nothing.
    let again = handle.check_and_notify().await.unwrap();
    assert!(again.is_empty());

    // Dismissal is recorded; recent dismissals survive the sweep.
    handle.dismiss_notification(raised[0].id).await.unwrap();
    let removed = handle.cleanup_notifications().await.unwrap();
    assert_eq!(removed, 0);

    let state = handle.state().await.unwrap();
    assert!(state.notifications.entries[0].dismissed);
    assert_eq!(state.notifications.entries.len(), 2);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn snapshot_round_trips_through_the_file_repository() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(FileSnapshotRepository::new(dir.path()).unwrap());

    let first = Runtime::builder()
        .config(manual_config())
        .repository(repository.clone())
        .build()
        .await
        .unwrap();
    let handle = first.handle();

    handle.feed("kibble").await.unwrap();
    handle.change_scene(SceneKind::Park).await.unwrap();
    handle.complete_tutorial().await.unwrap();
    handle.save().await.expect("save should succeed");
    let saved_state = handle.state().await.unwrap();
    assert!(saved_state.flags.last_saved_at_ms > 0);
    first.shutdown().await.unwrap();

    // A fresh runtime over the same repository resumes the session.
    let second = Runtime::builder()
        .config(manual_config())
        .repository(repository)
        .build()
        .await
        .unwrap();
    let handle = second.handle();

    let restored = handle.state().await.unwrap();
    assert_eq!(restored.inventory.get("kibble").unwrap().quantity, 4);
    assert_eq!(restored.stats, saved_state.stats);
    assert_eq!(restored.scene, SceneKind::Park);
    assert!(restored.flags.tutorial_completed);
    assert!(!restored.flags.first_visit);

    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn events_route_to_their_topics() {
    let runtime = Runtime::builder()
        .config(manual_config())
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();

    let mut state_rx = handle.subscribe(Topic::State);
    let mut lifecycle_rx = handle.subscribe(Topic::Lifecycle);

    handle.feed("kibble").await.unwrap();
    match state_rx.recv().await.unwrap() {
        Event::State(StateEvent::ActionExecuted { stats, .. }) => {
            assert_eq!(stats.hunger, 100.0);
        }
        other => panic!("expected ActionExecuted, got {other:?}"),
    }

    handle.save().await.unwrap();
    match lifecycle_rx.recv().await.unwrap() {
        Event::Lifecycle(LifecycleEvent::Saved { at_ms }) => assert!(at_ms > 0),
        other => panic!("expected Saved, got {other:?}"),
    }

    // The lifecycle subscriber never saw the state event.
    assert!(
        tokio::time::timeout(Duration::from_millis(20), lifecycle_rx.recv())
            .await
            .is_err()
    );

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn background_tickers_drive_decay() {
    let config = RuntimeConfig {
        decay: runtime::DecayConfig {
            enabled: true,
            interval_ms: 20,
            ..runtime::DecayConfig::default()
        },
        ..RuntimeConfig::default()
    };

    let rt = Runtime::builder().config(config).build().await.unwrap();
    let handle = rt.handle();
    let start = handle.state().await.unwrap().stats.hunger;

    tokio::time::sleep(Duration::from_millis(120)).await;
    let after = handle.state().await.unwrap().stats.hunger;
    assert!(after < start, "decay ticker should have lowered hunger");

    rt.shutdown().await.unwrap();
}
