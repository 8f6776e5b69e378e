use super::content::ContentPane;
use super::host::{InstanceState, PlatformHost, WindowChrome};
use crate::config::ShellConfig;
use egui_winit::winit::platform::android::{
    activity::{AndroidApp, WindowManagerFlags},
    EventLoopBuilderExtAndroid,
};
use log::debug;
use std::error::Error;

/// Adapter over the activity glue. The platform creates the activity and
/// its content surface before native code runs, so `initialize` records the
/// hand-off; the decor flag maps to window-manager layout flags.
pub struct AndroidHost {
    chrome: ActivityChrome,
    surface_ready: bool,
}

struct ActivityChrome {
    app: AndroidApp,
    decor_fits: bool,
}

impl ActivityChrome {
    fn edge_to_edge() -> WindowManagerFlags {
        WindowManagerFlags::LAYOUT_IN_SCREEN | WindowManagerFlags::LAYOUT_NO_LIMITS
    }
}

impl WindowChrome for ActivityChrome {
    fn set_decor_fits_system_windows(&mut self, fits: bool) {
        if fits {
            self.app
                .set_window_flags(WindowManagerFlags::empty(), Self::edge_to_edge());
        } else {
            self.app
                .set_window_flags(Self::edge_to_edge(), WindowManagerFlags::empty());
        }
        self.decor_fits = fits;
    }
    fn decor_fits_system_windows(&self) -> bool {
        self.decor_fits
    }
}

impl AndroidHost {
    pub fn new(app: AndroidApp) -> Self {
        AndroidHost {
            chrome: ActivityChrome {
                app,
                decor_fits: true,
            },
            surface_ready: false,
        }
    }

    pub fn surface_ready(&self) -> bool {
        self.surface_ready
    }

    /// Hand control to the content runtime bound to this activity. Never
    /// returns into shell logic while the activity lives.
    pub fn run(self, config: ShellConfig) -> Result<(), eframe::Error> {
        let app = self.chrome.app.clone();
        let options = eframe::NativeOptions {
            renderer: eframe::Renderer::Glow,
            event_loop_builder: Some(Box::new(move |builder| {
                builder.with_android_app(app);
            })),
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

impl PlatformHost for AndroidHost {
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
