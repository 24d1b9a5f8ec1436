//! # Presentation settings and slide-count clamping
//!
//! [`PresentationSettings`] holds the three choices made on the settings page.
//! The slide count is kept inside [`PresentationSettings::MIN_SLIDES`]..=
//! [`PresentationSettings::MAX_SLIDES`] by every setter, so callers never
//! observe an out-of-range value.
//!
//! | Input | Result |
//! |-------|--------|
//! | `0`, `-3` | `1` |
//! | `51`, `1000` | `50` |
//! | `"abc"`, `""` | `1` |

use crate::models::Theme;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationSettings {
    pub title: String,
    pub theme: Option<Theme>,
    slide_count: u32,
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            theme: None,
            slide_count: Self::DEFAULT_SLIDES,
        }
    }
}

impl PresentationSettings {
    pub const MIN_SLIDES: u32 = 1;
    pub const MAX_SLIDES: u32 = 50;
    pub const DEFAULT_SLIDES: u32 = 5;

    pub fn slide_count(&self) -> u32 {
        self.slide_count
    }

    /// Set the slide count, clamped to `[1, 50]`.
    pub fn set_slide_count(&mut self, count: i64) {
        self.slide_count = clamp_slide_count(count);
    }

    /// Apply raw text from the numeric input. Non-numeric input counts as 1.
    pub fn set_slide_count_input(&mut self, input: &str) {
        self.slide_count = parse_slide_count(input);
    }

    pub fn increment(&mut self) {
        self.set_slide_count(i64::from(self.slide_count) + 1);
    }

    pub fn decrement(&mut self) {
        self.set_slide_count(i64::from(self.slide_count) - 1);
    }

    /// Whether the generate control may be enabled from this page's inputs.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && self.theme.is_some()
    }
}

pub fn clamp_slide_count(count: i64) -> u32 {
    count.clamp(
        i64::from(PresentationSettings::MIN_SLIDES),
        i64::from(PresentationSettings::MAX_SLIDES),
    ) as u32
}

/// Parse the leading integer of `input` the way a browser number field
/// reports it, then clamp. Anything without a leading integer (or a zero) is 1.
pub fn parse_slide_count(input: &str) -> u32 {
    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    if end == 0 {
        return PresentationSettings::MIN_SLIDES;
    }
    match digits[..end].parse::<i64>() {
        Ok(n) => clamp_slide_count(sign * n),
        // Longer than i64: saturate in the direction of the sign.
        Err(_) if sign < 0 => PresentationSettings::MIN_SLIDES,
        Err(_) => PresentationSettings::MAX_SLIDES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PresentationSettings::default();
        assert_eq!(settings.title, "");
        assert_eq!(settings.theme, None);
        assert_eq!(settings.slide_count(), 5);
    }

    #[test]
    fn test_numeric_clamping() {
        let mut settings = PresentationSettings::default();
        settings.set_slide_count(0);
        assert_eq!(settings.slide_count(), 1);
        settings.set_slide_count(-7);
        assert_eq!(settings.slide_count(), 1);
        settings.set_slide_count(51);
        assert_eq!(settings.slide_count(), 50);
        settings.set_slide_count(12);
        assert_eq!(settings.slide_count(), 12);
    }

    #[test]
    fn test_text_input_clamping() {
        assert_eq!(parse_slide_count("0"), 1);
        assert_eq!(parse_slide_count("-4"), 1);
        assert_eq!(parse_slide_count("51"), 50);
        assert_eq!(parse_slide_count("999999999999999999999999"), 50);
        assert_eq!(parse_slide_count("abc"), 1);
        assert_eq!(parse_slide_count(""), 1);
        assert_eq!(parse_slide_count("  17 "), 17);
        assert_eq!(parse_slide_count("8.9"), 8);
    }

    #[test]
    fn test_step_buttons_stay_in_range() {
        let mut settings = PresentationSettings::default();
        settings.set_slide_count(1);
        settings.decrement();
        assert_eq!(settings.slide_count(), 1);

        settings.set_slide_count(50);
        settings.increment();
        assert_eq!(settings.slide_count(), 50);

        settings.decrement();
        assert_eq!(settings.slide_count(), 49);
    }

    #[test]
    fn test_is_complete_requires_trimmed_title_and_theme() {
        let mut settings = PresentationSettings::default();
        assert!(!settings.is_complete());

        settings.title = "   ".to_string();
        settings.theme = Some(Theme::Report);
        assert!(!settings.is_complete());

        settings.title = "Q1 Review".to_string();
        assert!(settings.is_complete());

        settings.theme = None;
        assert!(!settings.is_complete());
    }
}
