mod observable;
mod style;

pub use observable::{Observable, Subscription};
pub use style::{
    StyleStore, DEFAULT_FONT_FAMILY_INDEX, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT,
    FONT_FAMILY_LIST,
};
