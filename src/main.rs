use anyhow::Result;
use typetune::{settings, App, Settings};

fn main() -> Result<()> {
    pretty_env_logger::try_init()?;

    let app = App::new(load_settings());
    let native_options = eframe::NativeOptions::default();

    eframe::run_native(Box::new(app), native_options)
}

fn load_settings() -> Settings {
    let path = match settings::dir() {
        Some(dir) => dir.join(settings::FILENAME),
        None => {
            log::warn!("couldn't determine the configuration directory, using default settings");
            return Settings::default();
        }
    };

    if !path.exists() {
        log::trace!("no settings file at `{}`, using defaults", path.display());
        return Settings::default();
    }

    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!(
                "failed to load settings from `{}` - {:?}, using defaults",
                path.display(),
                e
            );
            Settings::default()
        }
    }
}
