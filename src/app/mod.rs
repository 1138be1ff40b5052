mod fonts;
pub mod settings;
pub mod ui;

use crate::event::{InputEvent, StyleField};
use crate::store::{StyleStore, FONT_FAMILY_LIST};
use crate::style::{font_scale_percent, Applicator};
use crate::{fmt_compact, fmt_percent};
use fonts::{EguiSurface, FontSizes};
use settings::{Settings, SettingsWindow};

use eframe::{egui, epi};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::SystemTime;

pub const SIDE_PANEL_MIN_WIDTH: f32 = 150.;

struct InputBuffers {
    font_size: String,
    line_height: String,
    font_family_index: String,
}

impl InputBuffers {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            font_size: fmt_compact(settings.font_size),
            line_height: fmt_compact(settings.line_height),
            font_family_index: settings.font_family_index.to_string(),
        }
    }
}

pub struct App {
    store: StyleStore,
    surface: Rc<RefCell<EguiSurface>>,
    _applicator: Applicator,

    inputs: InputBuffers,

    current_window: egui::Rect,
    errors: VecDeque<(SystemTime, String)>,
    notifications: VecDeque<(SystemTime, String)>,

    settings_window: SettingsWindow,
}

impl epi::App for App {
    fn name(&self) -> &str {
        "typetune"
    }

    fn save(&mut self, _storage: &mut dyn epi::Storage) {
        self.save_settings();
    }

    fn update(&mut self, ctx: &egui::CtxRef, _frame: &mut epi::Frame<'_>) {
        self.display(ctx);
        self.display_windows(ctx);
    }
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let store = StyleStore::new(
            settings.font_size,
            settings.line_height,
            settings.font_family_index,
        );
        let surface = Rc::new(RefCell::new(EguiSurface::new(FontSizes::default())));
        let applicator = Applicator::attach(&store, Some(Rc::clone(&surface)));

        Self {
            inputs: InputBuffers::from_settings(&settings),
            store,
            surface,
            _applicator: applicator,

            current_window: egui::Rect::EVERYTHING,
            errors: VecDeque::new(),
            notifications: VecDeque::new(),

            settings_window: SettingsWindow {
                settings,
                ..Default::default()
            },
        }
    }

    pub fn display(&mut self, ctx: &egui::CtxRef) {
        if ctx.style().visuals.dark_mode {
            ctx.set_visuals(ui::dark_visuals());
        } else {
            ctx.set_visuals(ui::light_visuals());
        }
        self.current_window = ctx.available_rect();
        self.handle_notifications();
        self.handle_settings_apply();
        self.surface.borrow_mut().update_ctx(ctx);

        self.top_panel(ctx);
        self.side_panel(ctx);
        self.central_panel(ctx);
    }

    fn display_windows(&mut self, ctx: &egui::CtxRef) {
        self.settings_window.display(ctx);
    }

    fn top_panel(&mut self, ctx: &egui::CtxRef) {
        let frame = egui::Frame {
            fill: if ctx.style().visuals.dark_mode {
                *ui::color::D_BG_00
            } else {
                *ui::color::L_BG_0
            },
            margin: egui::vec2(5., 5.),
            ..Default::default()
        };
        egui::TopBottomPanel::top("top_panel")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new("typetune").strong());
                    ui.with_layout(egui::Layout::right_to_left(), |ui| {
                        egui::global_dark_light_mode_switch(ui);

                        if ui.button(ui::icon::SETTINGS).clicked() {
                            self.settings_window.toggle();
                        }
                    });
                });
            });
    }

    #[inline]
    fn side_panel_size(&self) -> f32 {
        (self.current_window.width() / 4.).max(SIDE_PANEL_MIN_WIDTH)
    }

    fn side_panel(&mut self, ctx: &egui::CtxRef) {
        let frame = egui::Frame {
            fill: if ctx.style().visuals.dark_mode {
                *ui::color::D_BG_00
            } else {
                *ui::color::L_BG_0
            },
            margin: egui::vec2(10., 10.),
            ..Default::default()
        };
        egui::SidePanel::left("side_panel")
            .frame(frame)
            .min_width(SIDE_PANEL_MIN_WIDTH)
            .max_width(self.side_panel_size())
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Font size (px):");
                if ui.text_edit_singleline(&mut self.inputs.font_size).changed() {
                    let event = InputEvent::new(StyleField::FontSize, self.inputs.font_size.clone());
                    log::trace!("input changed: {:?}", event);
                    self.store.apply_input(&event);
                }

                ui.label("Line height:");
                if ui
                    .text_edit_singleline(&mut self.inputs.line_height)
                    .changed()
                {
                    let event =
                        InputEvent::new(StyleField::LineHeight, self.inputs.line_height.clone());
                    log::trace!("input changed: {:?}", event);
                    self.store.apply_input(&event);
                }

                ui.label("Font family:");
                if ui
                    .text_edit_singleline(&mut self.inputs.font_family_index)
                    .changed()
                {
                    let event = InputEvent::new(
                        StyleField::FontFamilyIndex,
                        self.inputs.font_family_index.clone(),
                    );
                    log::trace!("input changed: {:?}", event);
                    self.store.apply_input(&event);
                }
                for (i, family) in FONT_FAMILY_LIST.iter().enumerate() {
                    ui.add(
                        egui::Label::new(format!("{} - {}", i, family))
                            .text_style(egui::TextStyle::Small),
                    );
                }

                let separator_width = ui.available_width();
                ui::line_with_size(ui, egui::Frame::none(), (separator_width, 0.));

                egui::Grid::new("computed_style").show(ui, |ui| {
                    ui::key_val!(
                        ui,
                        "font-size:",
                        &fmt_percent(font_scale_percent(self.store.font_size().get()))
                    );
                    ui::key_val!(ui, "line-height:", &fmt_compact(self.store.line_height().get()));
                    ui::key_val!(
                        ui,
                        "font-family:",
                        self.store.font_family().get().unwrap_or("unset")
                    );
                });
            });
    }

    fn central_panel(&mut self, ctx: &egui::CtxRef) {
        let frame = egui::Frame {
            fill: if ctx.style().visuals.dark_mode {
                *ui::color::D_BG_0
            } else {
                *ui::color::L_BG_3
            },
            margin: (10., 10.).into(),
            ..Default::default()
        };
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            self.display_notifications_and_errors(ctx);
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("The quick brown fox jumps over the lazy dog");
                ui.label(
                    "Sphinx of black quartz, judge my vow. Pack my box with five dozen \
                     liquor jugs. How vexingly quick daft zebras jump!",
                );
                ui.label("Grumpy wizards make\ntoxic brew for the evil\nqueen and jack.");
                ui.monospace("0123456789 () {} [] <> :: -> => != |>");
            });
        });
    }

    fn display_notifications_and_errors(&mut self, ctx: &egui::CtxRef) {
        let mut offset = 0.;
        for (_, notification) in &self.notifications {
            if let Some(response) = egui::Window::new("Notification")
                .id(egui::Id::new(offset as u32))
                .anchor(egui::Align2::RIGHT_TOP, (0., offset))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(notification);
                })
            {
                offset += response.response.rect.height();
            }
        }
        for (_, error) in &self.errors {
            if let Some(response) = egui::Window::new("Error")
                .id(egui::Id::new(offset as u32))
                .anchor(egui::Align2::RIGHT_TOP, (0., offset))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::RED, error);
                })
            {
                offset += response.response.rect.height();
            }
        }
    }

    fn add_notification(&mut self, notification: impl std::fmt::Display) {
        self.notifications
            .push_back((SystemTime::now(), format!("{}", notification)));
    }

    fn add_error(&mut self, error: impl std::fmt::Debug) {
        self.errors
            .push_back((SystemTime::now(), format!("{:?}", error)));
    }

    fn handle_notifications(&mut self) {
        loop {
            let should_pop = self
                .notifications
                .front()
                .map(|(time, _)| time.elapsed().unwrap_or_default().as_millis() >= 5000)
                .unwrap_or_default();

            if should_pop {
                self.notifications.pop_front();
            } else {
                break;
            }
        }
        loop {
            let should_pop = self
                .errors
                .front()
                .map(|(time, _)| time.elapsed().unwrap_or_default().as_millis() >= 5000)
                .unwrap_or_default();

            if should_pop {
                self.errors.pop_front();
            } else {
                break;
            }
        }
    }

    fn handle_settings_apply(&mut self) {
        if self.settings_window.take_apply() {
            let settings = self.settings_window.settings.clone();
            self.store.font_size().set(settings.font_size);
            self.store.line_height().set(settings.line_height);
            self.store.font_family_index().set(settings.font_family_index);
            self.inputs = InputBuffers::from_settings(&settings);
            self.add_notification("applied settings to the live preview");
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings_window.save_settings() {
            self.add_error(e);
        }
    }
}
