use super::host::{InstanceState, PlatformHost, WindowChrome};
use crate::config::ShellConfig;
use eframe::egui;
use log::debug;
use std::error::Error;

pub const INNER_SIZE: [f32; 2] = [420.0, 840.0];
pub const MIN_INNER_SIZE: [f32; 2] = [280.0, 480.0];

/// Chrome state held between `initialize` and the hand-off to the content
/// runtime. The platform default is decor-fits on.
pub struct ViewportChrome {
    decor_fits: bool,
}

impl Default for ViewportChrome {
    fn default() -> Self {
        ViewportChrome { decor_fits: true }
    }
}

impl WindowChrome for ViewportChrome {
    fn set_decor_fits_system_windows(&mut self, fits: bool) {
        self.decor_fits = fits;
    }
    fn decor_fits_system_windows(&self) -> bool {
        self.decor_fits
    }
}

/// Desktop stand-in for the embedded content runtime, for running the shell
/// without a device. `initialize` allocates the pending surface description;
/// `run` hands control to the runtime, which presents a placeholder pane
/// where the hosted content would render.
#[derive(Default)]
pub struct DevContentHost {
    chrome: ViewportChrome,
    surface_ready: bool,
}

impl DevContentHost {
    pub fn new() -> Self {
        DevContentHost::default()
    }

    pub fn surface_ready(&self) -> bool {
        self.surface_ready
    }

    pub fn run(self, config: ShellConfig) -> Result<(), eframe::Error> {
        // Decor-fits off maps to an undecorated window on desktop: the
        // content owns the full bounds, same as drawing under system bars.
        let viewport = egui::ViewportBuilder::default()
            .with_inner_size(INNER_SIZE)
            .with_min_inner_size(MIN_INNER_SIZE)
            .with_resizable(true)
            .with_decorations(self.chrome.decor_fits);
        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };
        let title = config.app_name.clone();
        eframe::run_native(
            &title,
            options,
            Box::new(move |cc| Ok(Box::new(ContentPane::new(cc, config)))),
        )
    }
}

impl PlatformHost for DevContentHost {
    fn initialize(
        &mut self,
        prior: Option<InstanceState>,
    ) -> Result<(), Box<dyn Error + 'static>> {
        if let Some(state) = &prior {
            debug!("restoring {} bytes of instance state", state.as_bytes().len());
        }
        self.surface_ready = true;
        Ok(())
    }

    fn window(&mut self) -> &mut dyn WindowChrome {
        &mut self.chrome
    }
}

/// Placeholder for the hosted content surface: shows what the runtime would
/// load and from where.
pub(crate) struct ContentPane {
    app_name: String,
    app_id: String,
    source: String,
}

impl ContentPane {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, config: ShellConfig) -> Self {
        ContentPane {
            source: config.content_source(),
            app_name: config.app_name,
            app_id: config.app_id,
        }
    }
}

impl eframe::App for ContentPane {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("shell_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong(&self.app_name);
                ui.weak(&self.app_id);
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(format!("content host loads {}", self.source));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_is_ready_after_initialize() {
        let mut host = DevContentHost::new();
        assert!(!host.surface_ready());
        host.initialize(None).unwrap();
        assert!(host.surface_ready());
        host.initialize(Some(InstanceState::from_bytes(vec![9])))
            .unwrap();
        assert!(host.surface_ready());
    }

    #[test]
    fn chrome_defaults_to_decor_fits() {
        let mut host = DevContentHost::new();
        host.initialize(None).unwrap();
        assert!(host.window().decor_fits_system_windows());
        host.window().set_decor_fits_system_windows(false);
        assert!(!host.window().decor_fits_system_windows());
    }
}
