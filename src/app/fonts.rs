use egui::{FontDefinitions, TextStyle};

use crate::store::DEFAULT_LINE_HEIGHT;
use crate::style::StyleSurface;

/// Unscaled per-text-style sizes, matching egui's defaults.
#[derive(Debug, Clone, Copy)]
pub struct FontSizes {
    pub small: f32,
    pub body: f32,
    pub button: f32,
    pub heading: f32,
    pub monospace: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            small: 10.,
            body: 14.,
            button: 14.,
            heading: 20.,
            monospace: 14.,
        }
    }
}

impl FontSizes {
    fn size_of(&self, style: TextStyle) -> f32 {
        match style {
            TextStyle::Small => self.small,
            TextStyle::Body => self.body,
            TextStyle::Button => self.button,
            TextStyle::Heading => self.heading,
            TextStyle::Monospace => self.monospace,
        }
    }
}

/// The egui rendering surface.
///
/// Style writes land here as pending values; [`update_ctx`](Self::update_ctx)
/// pushes them into the context once per frame when something changed.
pub struct EguiSurface {
    base: FontSizes,
    scale_percent: f32,
    line_height: f32,
    font_family: Option<String>,
    dirty: bool,
}

impl EguiSurface {
    pub fn new(base: FontSizes) -> Self {
        Self {
            base,
            scale_percent: 100.0,
            line_height: DEFAULT_LINE_HEIGHT,
            font_family: None,
            dirty: true,
        }
    }

    /// Applies any pending writes to the context. Cheap when nothing
    /// changed since the previous frame.
    pub fn update_ctx(&mut self, ctx: &egui::CtxRef) {
        if !self.dirty {
            return;
        }
        self.dirty = false;

        let scale = self.scale_percent / 100.0;
        let mut fonts = FontDefinitions::default();
        for (text_style, (_family, size)) in fonts.family_and_size.iter_mut() {
            *size = self.base.size_of(*text_style) * scale;
        }
        if let Some(family) = &self.font_family {
            // the selected face takes priority in every family list
            for priority in fonts.fonts_for_family.values_mut() {
                priority.retain(|name| name != family);
                priority.insert(0, family.clone());
            }
        }
        ctx.set_fonts(fonts);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing.y =
            (self.base.body * scale * (self.line_height - 1.0)).max(0.0);
        ctx.set_style(style);
    }
}

impl StyleSurface for EguiSurface {
    fn set_font_scale(&mut self, percent: f32) {
        self.scale_percent = percent;
        self.dirty = true;
    }

    fn set_line_height(&mut self, line_height: f32) {
        self.line_height = line_height;
        self.dirty = true;
    }

    fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.to_string());
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_mark_the_surface_dirty() {
        let mut surface = EguiSurface::new(FontSizes::default());
        surface.dirty = false;

        surface.set_font_scale(200.0);
        assert!(surface.dirty);
        assert_eq!(surface.scale_percent, 200.0);

        surface.dirty = false;
        surface.set_font_family("ProggyClean");
        assert!(surface.dirty);
        assert_eq!(surface.font_family.as_deref(), Some("ProggyClean"));
    }

    #[test]
    fn base_sizes_match_text_styles() {
        let sizes = FontSizes::default();
        assert_eq!(sizes.size_of(TextStyle::Heading), 20.);
        assert_eq!(sizes.size_of(TextStyle::Body), 14.);
        assert_eq!(sizes.size_of(TextStyle::Small), 10.);
    }
}
