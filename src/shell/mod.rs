#[cfg(target_os = "android")]
pub mod android;
pub mod content;
pub mod host;
pub mod lifecycle;

use flume::Receiver;
use host::{InstanceState, PlatformHost};
use lifecycle::{Lifecycle, LifecycleEvent};
use log::debug;
use std::error::Error;

/// The application shell: owns the lifecycle state and the platform host,
/// and prepares the window before the host serves content into it.
pub struct Shell<H: PlatformHost> {
    host: H,
    state: Lifecycle,
}

impl<H: PlatformHost> Shell<H> {
    pub fn new(host: H) -> Self {
        Shell {
            host,
            state: Lifecycle::NotCreated,
        }
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Activity creation. The host initializes first, with the prior-state
    /// snapshot forwarded verbatim; only then is the window switched to
    /// edge-to-edge, so the hosted content owns inset handling instead of
    /// the OS letterboxing it. A host failure aborts the transition and
    /// surfaces unchanged.
    pub fn on_create(
        &mut self,
        prior: Option<InstanceState>,
    ) -> Result<(), Box<dyn Error + 'static>> {
        self.handle(LifecycleEvent::Create(prior))
    }

    /// Advance the lifecycle by one platform event. `Create` is the only
    /// event with shell behavior attached; the rest just move the state
    /// machine. Off-table events leave both state and host untouched.
    pub fn handle(&mut self, event: LifecycleEvent) -> Result<(), Box<dyn Error + 'static>> {
        let next = self.state.next(&event)?;
        if let LifecycleEvent::Create(prior) = event {
            self.host.initialize(prior)?;
            self.host.window().set_decor_fits_system_windows(false);
            debug!("window switched to edge-to-edge");
        } else {
            debug!("lifecycle {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        Ok(())
    }

    /// Drain pending events from the platform adapter. Stops at `Destroyed`;
    /// the OS delivers nothing further to this instance.
    pub fn pump(
        &mut self,
        events: &Receiver<LifecycleEvent>,
    ) -> Result<(), Box<dyn Error + 'static>> {
        for event in events.try_iter() {
            self.handle(event)?;
            if self.state.is_destroyed() {
                break;
            }
        }
        Ok(())
    }
}
