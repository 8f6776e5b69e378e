use std::error::Error;

/// Opaque snapshot of a prior shell instance, handed back by the platform
/// when the process is recreated after being reclaimed. The shell forwards
/// it verbatim and never looks inside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceState(Vec<u8>);

impl InstanceState {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        InstanceState(bytes)
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Display-mode handle for the current window. When decor-fits is on, the
/// OS insets content to keep it clear of system bars; off means the hosted
/// content lays itself out into the full window bounds.
pub trait WindowChrome {
    fn set_decor_fits_system_windows(&mut self, fits: bool);
    fn decor_fits_system_windows(&self) -> bool;
}

/// The two operations the shell needs from the platform and the content
/// runtime behind it: one mandatory initialization call, then access to the
/// current window. The window handle is only meaningful once `initialize`
/// has returned, since the content surface is allocated during it.
pub trait PlatformHost {
    /// Error semantics are owned by the host; the shell treats any failure
    /// as fatal and surfaces it untouched.
    fn initialize(&mut self, prior: Option<InstanceState>)
        -> Result<(), Box<dyn Error + 'static>>;

    fn window(&mut self) -> &mut dyn WindowChrome;
}
