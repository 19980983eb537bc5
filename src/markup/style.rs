//! Inline `style="..."` declarations and pixel values.

/// Split an inline style into `(property, value)` pairs.
///
/// Property names are ASCII-lowercased; both sides are trimmed. Declarations without a colon
/// or with an empty property are ignored.
pub fn declarations(style: &str) -> impl Iterator<Item = (String, &str)> {
    style.split(';').filter_map(|decl| {
        let (prop, value) = decl.split_once(':')?;
        let prop = prop.trim();
        if prop.is_empty() {
            return None;
        }
        Some((prop.to_ascii_lowercase(), value.trim()))
    })
}

/// Value of `name` in `style`; the last declaration wins, as in CSS.
pub fn property<'a>(style: &'a str, name: &str) -> Option<&'a str> {
    declarations(style)
        .filter(|(prop, _)| prop.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
        .last()
}

/// Largest offset accepted from a style, in either direction.
pub const MAX_PX: i64 = 1 << 31;

/// Parse a CSS length in pixels, truncating fractions toward zero.
///
/// Accepts `12px`, `-3px`, `12.5px` and a bare `0`. Other units, garbage and magnitudes beyond
/// [`MAX_PX`] yield `None`.
pub fn parse_px(value: &str) -> Option<i64> {
    let value = value
        .trim()
        .trim_end_matches("!important")
        .trim_end()
        .to_ascii_lowercase();
    let Some(number) = value.strip_suffix("px") else {
        return (value.parse::<f64>() == Ok(0.0)).then_some(0);
    };
    let v: f64 = number.trim_end().parse().ok()?;
    let v = v.trunc();
    if !v.is_finite() || v.abs() > MAX_PX as f64 {
        return None;
    }
    Some(v as i64)
}

/// Leading decimal digits of an HTML size attribute (`"120"`, `"120px"` -> 120).
pub fn parse_dimension(value: &str) -> Option<u32> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/style.rs"]
mod tests;
