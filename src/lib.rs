mod app;
mod event;
mod store;
mod style;

pub use app::{settings, settings::Settings, App};
pub use event::{InputEvent, StyleField};
pub use store::{Observable, StyleStore, Subscription, FONT_FAMILY_LIST};
pub use style::{font_scale_percent, Applicator, StyleSurface, BASE_FONT_SIZE};

use anyhow::Result;

/// Copies `content` to the system clipboard.
pub fn save_to_clipboard(content: String) -> Result<()> {
    use clipboard::{ClipboardContext, ClipboardProvider};

    let mut ctx: ClipboardContext = ClipboardProvider::new()
        .map_err(|e| anyhow::anyhow!("failed to access the clipboard - {}", e))?;
    ctx.set_contents(content)
        .map_err(|e| anyhow::anyhow!("failed to set clipboard contents - {}", e))
}

/// Formats a float without the trailing `.0` when it is a whole number.
pub fn fmt_compact(value: f32) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Percentage readout with two decimal places.
pub fn fmt_percent(value: f32) -> String {
    format!("{:.2}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_drops_the_trailing_zero() {
        assert_eq!(fmt_compact(16.0), "16");
        assert_eq!(fmt_compact(1.5), "1.5");
        assert_eq!(fmt_compact(-2.0), "-2");
        assert_eq!(fmt_compact(f32::NAN), "NaN");
    }

    #[test]
    fn percent_keeps_two_decimals() {
        assert_eq!(fmt_percent(100.0), "100.00%");
        assert_eq!(fmt_percent(212.5), "212.50%");
    }
}
