use super::observable::Observable;
use crate::event::{InputEvent, StyleField};

/// Font families available to the preview, in selection order. These are
/// the faces shipped with egui's default font definitions, so every
/// in-range index resolves to a face that actually renders.
pub const FONT_FAMILY_LIST: [&str; 4] = [
    "Ubuntu-Light",
    "ProggyClean",
    "NotoEmoji-Regular",
    "emoji-icon-font",
];

pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const DEFAULT_LINE_HEIGHT: f32 = 1.5;
pub const DEFAULT_FONT_FAMILY_INDEX: i64 = 0;

/// Canonical current values for the adjustable style fields, plus the
/// derived font-family stream.
///
/// Built once at startup and shared by reference with every consumer;
/// consumers push new values into the fields but never replace the store
/// itself. Tests construct isolated instances.
pub struct StyleStore {
    font_size: Observable<f32>,
    line_height: Observable<f32>,
    font_family_index: Observable<i64>,
    font_family: Observable<Option<&'static str>>,
}

impl StyleStore {
    pub fn new(font_size: f32, line_height: f32, font_family_index: i64) -> Self {
        let font_family_index = Observable::new(font_family_index);
        let font_family = font_family_index.map(|index| resolve_family(*index));

        Self {
            font_size: Observable::new(font_size),
            line_height: Observable::new(line_height),
            font_family_index,
            font_family,
        }
    }

    /// Font size in px.
    pub fn font_size(&self) -> &Observable<f32> {
        &self.font_size
    }

    /// Unitless line-height multiplier.
    pub fn line_height(&self) -> &Observable<f32> {
        &self.line_height
    }

    /// Index into [`FONT_FAMILY_LIST`]. The store does not guard the
    /// range; resolution happens in the derived stream.
    pub fn font_family_index(&self) -> &Observable<i64> {
        &self.font_family_index
    }

    /// Derived family name, `None` when the index is out of range.
    /// Downstream consumers treat `None` as "no family change".
    pub fn font_family(&self) -> &Observable<Option<&'static str>> {
        &self.font_family
    }

    /// Routes a raw input event into the matching field. Parsing never
    /// fails outright: garbage becomes an inert value (`NaN`, or an
    /// out-of-range index) that renders as a visual no-op.
    pub fn apply_input(&self, input: &InputEvent) {
        match input.field {
            StyleField::FontSize => self.font_size.set(input.parse_numeric()),
            StyleField::LineHeight => self.line_height.set(input.parse_numeric()),
            StyleField::FontFamilyIndex => self.font_family_index.set(input.parse_index()),
        }
    }
}

impl Default for StyleStore {
    fn default() -> Self {
        Self::new(
            DEFAULT_FONT_SIZE,
            DEFAULT_LINE_HEIGHT,
            DEFAULT_FONT_FAMILY_INDEX,
        )
    }
}

fn resolve_family(index: i64) -> Option<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| FONT_FAMILY_LIST.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_resolves_in_range_indices() {
        let store = StyleStore::default();
        assert_eq!(store.font_family().get(), Some(FONT_FAMILY_LIST[0]));

        store.font_family_index().set(2);
        assert_eq!(store.font_family().get(), Some(FONT_FAMILY_LIST[2]));
    }

    #[test]
    fn family_is_absent_out_of_range() {
        let store = StyleStore::default();

        store.font_family_index().set(99);
        assert_eq!(store.font_family().get(), None);

        store.font_family_index().set(-1);
        assert_eq!(store.font_family().get(), None);
    }

    #[test]
    fn fields_are_last_write_wins() {
        let store = StyleStore::default();
        store.font_size().set(20.0);
        store.font_size().set(32.0);
        store.line_height().set(2.0);
        store.font_family_index().set(1);

        assert_eq!(store.font_size().get(), 32.0);
        assert_eq!(store.line_height().get(), 2.0);
        assert_eq!(store.font_family_index().get(), 1);
    }

    #[test]
    fn apply_input_routes_and_parses() {
        let store = StyleStore::default();

        store.apply_input(&InputEvent::new(StyleField::FontSize, "32"));
        store.apply_input(&InputEvent::new(StyleField::LineHeight, "2"));
        store.apply_input(&InputEvent::new(StyleField::FontFamilyIndex, "3"));

        assert_eq!(store.font_size().get(), 32.0);
        assert_eq!(store.line_height().get(), 2.0);
        assert_eq!(store.font_family().get(), Some(FONT_FAMILY_LIST[3]));
    }

    #[test]
    fn garbage_input_is_inert() {
        let store = StyleStore::default();

        store.apply_input(&InputEvent::new(StyleField::FontSize, "huge"));
        assert!(store.font_size().get().is_nan());

        store.apply_input(&InputEvent::new(StyleField::FontFamilyIndex, "serif"));
        assert_eq!(store.font_family_index().get(), -1);
        assert_eq!(store.font_family().get(), None);
    }
}
