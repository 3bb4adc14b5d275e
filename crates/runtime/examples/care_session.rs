//! Minimal care session: feed, play, rest, and watch events.
//!
//! Run with: `cargo run -p runtime --example care_session`

use runtime::{Event, Runtime, RuntimeConfig, Topic};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,runtime=debug".into()),
        )
        .init();

    let config = RuntimeConfig {
        rest_wake_delay_ms: 2_000,
        ..RuntimeConfig::default()
    };
    let rt = Runtime::builder().config(config).build().await?;
    let handle = rt.handle();

    let mut events = handle.subscribe(Topic::Lifecycle);
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let Event::Lifecycle(lifecycle) = event {
                tracing::info!(?lifecycle, "lifecycle event");
            }
        }
    });

    tracing::info!(mood = %handle.mood().await?, "session started");

    handle.feed("kibble").await?;
    handle.play(None).await?;
    let state = handle.state().await?;
    tracing::info!(
        hunger = state.stats.hunger,
        happiness = state.stats.happiness,
        energy = state.stats.energy,
        "after feeding and playing"
    );

    handle.rest(None).await?;
    tokio::time::sleep(std::time::Duration::from_millis(2_500)).await;
    tracing::info!(
        sleeping = handle.state().await?.flags.sleeping,
        "after the scheduled wake"
    );

    handle.save().await?;
    rt.shutdown().await?;
    Ok(())
}
