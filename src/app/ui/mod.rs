use egui::{
    style::{Selection, Widgets},
    Stroke, Visuals,
};
use epaint::Shadow;

pub mod color {
    use egui::Color32;
    use lazy_static::lazy_static;

    lazy_static! {
        // ink
        pub static ref D_BG_00: Color32 = Color32::from_rgb(0x15, 0x13, 0x10);
        pub static ref D_BG_0: Color32 = Color32::from_rgb(0x1d, 0x1a, 0x16);
        pub static ref D_BG_1: Color32 = Color32::from_rgb(0x2a, 0x26, 0x1f);
        pub static ref D_BG_2: Color32 = Color32::from_rgb(0x3a, 0x35, 0x2c);
        pub static ref D_BG_3: Color32 = Color32::from_rgb(0x4c, 0x46, 0x3a);
        pub static ref D_FG_0: Color32 = Color32::from_rgb(0xec, 0xe5, 0xd8);
        pub static ref D_FG_1: Color32 = Color32::from_rgb(0xc9, 0xc2, 0xb5);
        // paper
        pub static ref L_BG_0: Color32 = Color32::from_rgb(0xd8, 0xd1, 0xc3);
        pub static ref L_BG_1: Color32 = Color32::from_rgb(0xe4, 0xde, 0xd1);
        pub static ref L_BG_2: Color32 = Color32::from_rgb(0xee, 0xe8, 0xdc);
        pub static ref L_BG_3: Color32 = Color32::from_rgb(0xf6, 0xf1, 0xe7);
        pub static ref L_FG_0: Color32 = Color32::from_rgb(0x14, 0x12, 0x0e);
        pub static ref L_FG_1: Color32 = Color32::from_rgb(0x2b, 0x27, 0x20);
    }
}

pub mod icon {
    pub const SETTINGS: &str = "\u{2699}";
    pub const SAVE: &str = "\u{1F4BE}";
}

pub fn light_visuals() -> Visuals {
    use color::*;
    let mut widgets = Widgets::light();
    widgets.noninteractive.bg_fill = *L_BG_2;
    widgets.inactive.bg_fill = *L_BG_2;
    widgets.hovered.bg_fill = *L_BG_3;
    widgets.open.bg_fill = *L_BG_3;
    widgets.active.bg_fill = *L_BG_3;

    widgets.noninteractive.fg_stroke = Stroke::new(1.2, *L_FG_1);
    widgets.inactive.fg_stroke = Stroke::new(1.2, *L_FG_1);
    widgets.hovered.fg_stroke = Stroke::new(1.5, *L_FG_1);
    widgets.open.fg_stroke = Stroke::new(1.5, *L_FG_1);
    widgets.active.fg_stroke = Stroke::new(1.5, *L_FG_0);

    Visuals {
        dark_mode: false,
        extreme_bg_color: *L_BG_3,
        selection: Selection {
            bg_fill: *L_BG_0,
            stroke: Stroke::new(0.7, *D_BG_0),
        },
        popup_shadow: Shadow::small_light(),
        widgets,
        faint_bg_color: *L_BG_0,
        ..Default::default()
    }
}

pub fn dark_visuals() -> Visuals {
    use color::*;
    let mut widgets = Widgets::dark();
    widgets.noninteractive.bg_fill = *D_BG_0;
    widgets.inactive.bg_fill = *D_BG_1;
    widgets.hovered.bg_fill = *D_BG_2;
    widgets.open.bg_fill = *D_BG_2;
    widgets.active.bg_fill = *D_BG_3;

    widgets.noninteractive.fg_stroke = Stroke::new(0.7, *D_FG_1);
    widgets.inactive.fg_stroke = Stroke::new(0.7, *D_FG_1);
    widgets.hovered.fg_stroke = Stroke::new(1., *D_FG_0);
    widgets.open.fg_stroke = Stroke::new(1., *D_FG_0);
    widgets.active.fg_stroke = Stroke::new(1.5, *D_FG_0);

    Visuals {
        dark_mode: true,
        extreme_bg_color: *D_BG_00,
        selection: Selection {
            bg_fill: *D_BG_3,
            stroke: Stroke::new(0.7, *D_FG_0),
        },
        popup_shadow: Shadow::small_dark(),
        widgets,
        faint_bg_color: *D_BG_00,
        ..Default::default()
    }
}

#[macro_export]
macro_rules! key {
    ($ui:ident, $k:expr) => {
        $ui.add(egui::Label::new($k).strong().sense(egui::Sense {
            click: true,
            focusable: true,
            drag: false,
        }))
    };
}

#[macro_export]
macro_rules! val {
    ($ui:ident, $v:expr) => {
        if $ui
            .add(egui::Label::new($v).monospace().sense(egui::Sense {
                click: true,
                focusable: true,
                drag: false,
            }))
            .on_hover_text("secondary-click to copy")
            .secondary_clicked()
        {
            log::debug!("setting clipboard content to `{}`", $v);
            if let Err(e) = crate::save_to_clipboard($v.to_string()) {
                log::error!("failed to save content to clipboard - {}", e);
            }
        }
    };
}

#[macro_export]
macro_rules! key_val {
    ($ui:ident, $k:expr, $v:expr) => {
        crate::app::ui::key!($ui, $k);
        crate::app::ui::val!($ui, $v);
        $ui.end_row();
    };
}

pub use key;
pub use key_val;
pub use val;

pub fn line_with_size(
    ui: &mut egui::Ui,
    frame: egui::Frame,
    size: impl Into<egui::Vec2>,
) -> egui::Response {
    frame
        .show(ui, |ui| {
            ui.set_max_height(1.);
            let available_space = size.into();

            let size = egui::vec2(available_space.x, 0.);

            let (rect, response) = ui.allocate_at_least(size, egui::Sense::hover());
            let points = [
                egui::pos2(rect.left(), rect.bottom()),
                egui::pos2(rect.right(), rect.bottom()),
            ];

            let stroke = ui.visuals().widgets.noninteractive.fg_stroke;
            ui.painter().line_segment(points, stroke);
            response
        })
        .response
}
