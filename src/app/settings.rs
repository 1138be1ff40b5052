use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::ui::icon;
use crate::store::{DEFAULT_FONT_FAMILY_INDEX, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT};

pub const FILENAME: &str = "typetune.yml";

pub fn dir() -> Option<PathBuf> {
    dirs::config_dir()
}

/// Startup defaults for the style store, persisted as YAML.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub font_size: f32,
    pub line_height: f32,
    pub font_family_index: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            font_family_index: DEFAULT_FONT_FAMILY_INDEX,
        }
    }
}

impl Settings {
    /// Reads settings from the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read(path).context("failed to read configuration file")?;
        serde_yaml::from_slice(&data).context("failed to deserialize configuration")
    }

    /// Writes these settings as YAML to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let data = serde_yaml::to_vec(&self).context("failed to serialize settings")?;
        fs::write(path, &data).context("failed to write settings to file")
    }
}

#[derive(Debug)]
pub enum Message {
    Error(String),
    Ok(String),
}

#[derive(Debug)]
pub struct SettingsWindow {
    pub show: bool,
    pub settings: Settings,
    pub settings_path: Option<PathBuf>,
    pub msg: Option<Message>,
    pub apply_requested: bool,
}

impl Default for SettingsWindow {
    fn default() -> Self {
        Self {
            show: false,
            settings: Settings::default(),
            settings_path: dir().map(|d| d.join(FILENAME)),
            msg: None,
            apply_requested: false,
        }
    }
}

impl SettingsWindow {
    pub fn toggle(&mut self) {
        self.show = !self.show;
    }

    /// True once after the user clicked `apply`; the caller pushes the
    /// edited defaults into the live store.
    pub fn take_apply(&mut self) -> bool {
        std::mem::take(&mut self.apply_requested)
    }

    pub fn save_settings(&mut self) -> Result<()> {
        if let Some(settings_path) = &self.settings_path {
            log::trace!("saving settings");
            self.settings.save(settings_path)
        } else {
            Ok(())
        }
    }

    pub fn display(&mut self, ctx: &egui::CtxRef) {
        let mut show = self.show;
        let mut msg = std::mem::take(&mut self.msg);
        let mut apply = self.apply_requested;
        egui::Window::new("settings")
            .open(&mut show)
            .show(ctx, |ui| {
                if let Some(m) = &msg {
                    let (color, m) = match m {
                        Message::Ok(m) => (egui::Color32::GREEN, m),
                        Message::Error(m) => (egui::Color32::RED, m),
                    };
                    ui.add(egui::Label::new(m).text_color(color));
                }
                ui.label("Default font size (px):");
                ui.add(egui::DragValue::new(&mut self.settings.font_size));
                ui.label("Default line height:");
                ui.add(egui::DragValue::new(&mut self.settings.line_height).speed(0.1));
                ui.label("Default font family index:");
                ui.add(egui::DragValue::new(&mut self.settings.font_family_index));
                ui.horizontal(|ui| {
                    if ui.button("apply").clicked() {
                        apply = true;
                    }
                    if ui.button(format!("{} save", icon::SAVE)).clicked() {
                        if let Err(e) = self.save_settings() {
                            msg = Some(Message::Error(format!("{:?}", e)));
                        } else {
                            msg = Some(Message::Ok(format!(
                                "successfully saved settings {}",
                                self.settings_path
                                    .as_deref()
                                    .map(|p| format!("to {}", p.display()))
                                    .unwrap_or_default(),
                            )));
                        }
                    }
                });
            });
        self.show = show;
        self.msg = msg;
        self.apply_requested = apply;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_roundtrip_through_yaml() {
        let path = std::env::temp_dir().join(format!("typetune-settings-{}.yml", std::process::id()));
        let settings = Settings {
            font_size: 18.0,
            line_height: 2.0,
            font_family_index: 3,
        };

        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn load_on_a_missing_path_is_an_error() {
        assert!(Settings::load("/definitely/not/here/typetune.yml").is_err());
    }

    #[test]
    fn take_apply_resets_the_flag() {
        let mut window = SettingsWindow {
            apply_requested: true,
            ..Default::default()
        };

        assert!(window.take_apply());
        assert!(!window.take_apply());
    }
}
