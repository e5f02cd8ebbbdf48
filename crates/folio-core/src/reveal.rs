//! Delays for the hero entrance and scroll-reveal animations.

use crate::constants::*;

/// Integer-prefix parse of a `data-delay` attribute: optional leading
/// whitespace and sign, then digits; trailing junk is ignored. Missing and
/// unparsable values give 0; huge values saturate.
pub fn parse_delay_signed(attr: Option<&str>) -> i64 {
    let Some(s) = attr else { return 0 };
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return 0;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Timer delay from `data-delay`; negative delays fire immediately.
pub fn parse_delay(attr: Option<&str>) -> u32 {
    clamp_ms(parse_delay_signed(attr))
}

/// Hero `.animate-in` elements appear a fixed offset after their own
/// (possibly negative) delay.
pub fn hero_delay_ms(data_delay: Option<&str>) -> u32 {
    clamp_ms(parse_delay_signed(data_delay).saturating_add(HERO_ANIMATION_OFFSET_MS as i64))
}

#[inline]
fn clamp_ms(ms: i64) -> u32 {
    u32::try_from(ms.max(0)).unwrap_or(u32::MAX)
}

/// Whether a parent with these classes staggers its revealed children.
pub fn is_staggered_grid<'a>(classes: impl IntoIterator<Item = &'a str>) -> bool {
    classes
        .into_iter()
        .any(|c| STAGGERED_GRID_CLASSES.contains(&c))
}

/// Delay before a `.reveal` element becomes visible. Children of a staggered
/// grid use their position among the grid's reveal elements and ignore
/// `data-delay`.
pub fn reveal_delay_ms(data_delay: Option<&str>, grid_index: Option<usize>) -> u32 {
    match grid_index {
        Some(i) => u32::try_from(i)
            .unwrap_or(u32::MAX)
            .saturating_mul(REVEAL_STAGGER_MS),
        None => parse_delay(data_delay),
    }
}
