/// Style fields adjustable from the UI.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum StyleField {
    FontSize,
    LineHeight,
    FontFamilyIndex,
}

/// A change emitted by one of the numeric inputs, carrying the raw text
/// as typed.
#[derive(Debug, Clone)]
pub struct InputEvent {
    pub field: StyleField,
    pub raw: String,
}

impl InputEvent {
    pub fn new(field: StyleField, raw: impl Into<String>) -> Self {
        Self {
            field,
            raw: raw.into(),
        }
    }

    /// Base-10 integer parse for the float-valued fields. Reads an
    /// optional sign and the leading digit run, ignoring whatever
    /// follows, so `"12.5"` parses as `12`. Input without a leading
    /// integer maps to `NaN`, which flows through the store and is
    /// ignored at the surface.
    pub fn parse_numeric(&self) -> f32 {
        int_prefix(&self.raw).map(|v| v as f32).unwrap_or(f32::NAN)
    }

    /// Base-10 integer parse for the family index. Integers carry no
    /// `NaN`, so unparseable input maps to `-1`, out of range for every
    /// family list.
    pub fn parse_index(&self) -> i64 {
        int_prefix(&self.raw).unwrap_or(-1)
    }
}

fn int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(raw: &str) -> f32 {
        InputEvent::new(StyleField::FontSize, raw).parse_numeric()
    }

    fn index(raw: &str) -> i64 {
        InputEvent::new(StyleField::FontFamilyIndex, raw).parse_index()
    }

    #[test]
    fn parses_plain_integers() {
        assert_eq!(numeric("16"), 16.0);
        assert_eq!(numeric("  32 "), 32.0);
        assert_eq!(numeric("-3"), -3.0);
        assert_eq!(numeric("+2"), 2.0);
        assert_eq!(index("3"), 3);
    }

    #[test]
    fn ignores_a_trailing_suffix() {
        assert_eq!(numeric("12.5"), 12.0);
        assert_eq!(numeric("2em"), 2.0);
        assert_eq!(index("1x"), 1);
    }

    #[test]
    fn garbage_becomes_inert() {
        assert!(numeric("").is_nan());
        assert!(numeric("big").is_nan());
        assert!(numeric(".5").is_nan());
        assert_eq!(index(""), -1);
        assert_eq!(index("serif"), -1);
    }
}
