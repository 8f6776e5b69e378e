mod config;
mod shell;

pub use config::ShellConfig;
#[cfg(target_os = "android")]
pub use shell::android::AndroidHost;
pub use shell::{
    content::DevContentHost,
    host::{InstanceState, PlatformHost, WindowChrome},
    lifecycle::{Lifecycle, LifecycleError, LifecycleEvent},
    Shell,
};

#[cfg(test)]
mod tests;

#[cfg(target_os = "android")]
pub use egui_winit::winit::{
    self,
    platform::android::{
        activity::{AndroidApp, WindowManagerFlags},
        EventLoopBuilderExtAndroid,
    },
};

#[cfg(target_os = "android")]
#[no_mangle]
fn android_main(app: winit::platform::android::activity::AndroidApp) {
    std::env::set_var("RUST_BACKTRACE", "full");
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );

    let config = ShellConfig::load().unwrap_or_else(|err| {
        log::warn!("falling back to default config: {err}");
        ShellConfig::default()
    });

    // The activity glue runs after the platform has created the activity, so
    // a process start is always a fresh launch; no prior bundle reaches
    // native code.
    let mut shell = Shell::new(AndroidHost::new(app));
    if let Err(err) = shell.on_create(None) {
        panic!("activity creation failed: {err}");
    }

    shell.into_host().run(config).ok();
}
