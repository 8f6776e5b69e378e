use super::host::InstanceState;
use thiserror::Error;

/// Activity lifecycle as the platform drives it. Owned by the shell, fed by
/// the platform adapter; anything off the transition table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    NotCreated,
    Created,
    Started,
    Resumed,
    Paused,
    Stopped,
    Destroyed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    Create(Option<InstanceState>),
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
}

impl LifecycleEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Create(_) => "create",
            LifecycleEvent::Start => "start",
            LifecycleEvent::Resume => "resume",
            LifecycleEvent::Pause => "pause",
            LifecycleEvent::Stop => "stop",
            LifecycleEvent::Destroy => "destroy",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("{event} event not allowed in {state:?}")]
    Transition { state: Lifecycle, event: &'static str },
}

impl Lifecycle {
    pub fn next(self, event: &LifecycleEvent) -> Result<Lifecycle, LifecycleError> {
        use Lifecycle::*;
        let next = match (self, event) {
            (NotCreated, LifecycleEvent::Create(_)) => Created,
            (Created | Stopped, LifecycleEvent::Start) => Started,
            (Started | Paused, LifecycleEvent::Resume) => Resumed,
            (Resumed, LifecycleEvent::Pause) => Paused,
            (Started | Paused, LifecycleEvent::Stop) => Stopped,
            (Created | Stopped, LifecycleEvent::Destroy) => Destroyed,
            (state, event) => {
                return Err(LifecycleError::Transition {
                    state,
                    event: event.name(),
                })
            }
        };
        Ok(next)
    }

    pub fn is_created(self) -> bool {
        !matches!(self, Lifecycle::NotCreated)
    }

    pub fn is_destroyed(self) -> bool {
        matches!(self, Lifecycle::Destroyed)
    }
}
