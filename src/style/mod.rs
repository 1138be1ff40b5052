use std::cell::RefCell;
use std::rc::Rc;

use crate::store::{StyleStore, Subscription};

/// Baseline font size the relative scale is computed against.
pub const BASE_FONT_SIZE: f32 = 16.0;

/// Relative scale, in percent, of a pixel font size against the
/// [`BASE_FONT_SIZE`] baseline. 32 px maps to 200%.
pub fn font_scale_percent(font_size_px: f32) -> f32 {
    (font_size_px / BASE_FONT_SIZE) * 100.0
}

/// A rendering target the applicator writes style properties to.
pub trait StyleSurface {
    fn set_font_scale(&mut self, percent: f32);
    fn set_line_height(&mut self, line_height: f32);
    fn set_font_family(&mut self, family: &str);
}

/// Keeps a rendering surface synchronized with a [`StyleStore`].
///
/// Attaching subscribes to the store's three streams; replay-on-subscribe
/// performs the initial writes, and every later change triggers the
/// matching write. The applicator holds no style state of its own.
pub struct Applicator {
    _subscriptions: Vec<Subscription>,
}

impl Applicator {
    /// Wires `store` to `surface`. Passing `None` (no renderable surface,
    /// e.g. a headless run) wires nothing: every later store change is a
    /// silent no-op and no error is raised.
    ///
    /// Non-finite numeric values and an absent font family are never
    /// written; the last valid write stays in effect.
    pub fn attach<S>(store: &StyleStore, surface: Option<Rc<RefCell<S>>>) -> Self
    where
        S: StyleSurface + 'static,
    {
        let surface = match surface {
            Some(surface) => surface,
            None => {
                return Self {
                    _subscriptions: Vec::new(),
                }
            }
        };

        let font_size = {
            let surface = Rc::clone(&surface);
            store.font_size().subscribe(move |px| {
                let percent = font_scale_percent(*px);
                if percent.is_finite() {
                    surface.borrow_mut().set_font_scale(percent);
                }
            })
        };

        let line_height = {
            let surface = Rc::clone(&surface);
            store.line_height().subscribe(move |value| {
                if value.is_finite() {
                    surface.borrow_mut().set_line_height(*value);
                }
            })
        };

        let font_family = {
            let surface = Rc::clone(&surface);
            store.font_family().subscribe(move |family| {
                if let Some(family) = family {
                    surface.borrow_mut().set_font_family(family);
                }
            })
        };

        Self {
            _subscriptions: vec![font_size, line_height, font_family],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FONT_FAMILY_LIST;

    #[derive(Debug, PartialEq)]
    enum Write {
        Scale(f32),
        LineHeight(f32),
        Family(String),
    }

    #[derive(Default)]
    struct RecordingSurface {
        writes: Vec<Write>,
    }

    impl StyleSurface for RecordingSurface {
        fn set_font_scale(&mut self, percent: f32) {
            self.writes.push(Write::Scale(percent));
        }

        fn set_line_height(&mut self, line_height: f32) {
            self.writes.push(Write::LineHeight(line_height));
        }

        fn set_font_family(&mut self, family: &str) {
            self.writes.push(Write::Family(family.to_string()));
        }
    }

    fn recording() -> Rc<RefCell<RecordingSurface>> {
        Rc::new(RefCell::new(RecordingSurface::default()))
    }

    #[test]
    fn attach_performs_the_initial_writes() {
        let store = StyleStore::default();
        let surface = recording();
        let _applicator = Applicator::attach(&store, Some(Rc::clone(&surface)));

        assert_eq!(
            surface.borrow().writes,
            vec![
                Write::Scale(100.0),
                Write::LineHeight(1.5),
                Write::Family(FONT_FAMILY_LIST[0].to_string()),
            ]
        );
    }

    #[test]
    fn scale_follows_the_16px_baseline() {
        let store = StyleStore::default();
        let surface = recording();
        let _applicator = Applicator::attach(&store, Some(Rc::clone(&surface)));

        store.font_size().set(32.0);
        assert_eq!(surface.borrow().writes.last(), Some(&Write::Scale(200.0)));

        store.font_size().set(16.0);
        assert_eq!(surface.borrow().writes.last(), Some(&Write::Scale(100.0)));
    }

    #[test]
    fn non_finite_values_are_not_written() {
        let store = StyleStore::default();
        let surface = recording();
        let _applicator = Applicator::attach(&store, Some(Rc::clone(&surface)));

        let before = surface.borrow().writes.len();
        store.font_size().set(f32::NAN);
        store.line_height().set(f32::INFINITY);

        assert_eq!(surface.borrow().writes.len(), before);
    }

    #[test]
    fn absent_family_is_not_written() {
        let store = StyleStore::default();
        let surface = recording();
        let _applicator = Applicator::attach(&store, Some(Rc::clone(&surface)));

        let before = surface.borrow().writes.len();
        store.font_family_index().set(99);

        assert_eq!(surface.borrow().writes.len(), before);
    }

    #[test]
    fn headless_attach_is_a_no_op() {
        let store = StyleStore::default();
        let _applicator = Applicator::attach::<RecordingSurface>(&store, None);

        store.font_size().set(32.0);
        store.font_family_index().set(99);

        assert_eq!(store.font_size().get(), 32.0);
    }
}
