use caravel::{DevContentHost, LifecycleEvent, Shell, ShellConfig};

#[cfg(target_os = "android")]
fn main() {
    // Android entry-point handled via `lib.rs`.
}

#[cfg(not(target_os = "android"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
    env_logger::init();

    let config = ShellConfig::load()?;

    let (events_tx, events_rx) = flume::unbounded();
    events_tx.send(LifecycleEvent::Create(None))?;

    let mut shell = Shell::new(DevContentHost::new());
    shell.pump(&events_rx)?;

    shell.into_host().run(config)?;
    Ok(())
}
