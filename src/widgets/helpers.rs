//! Helper functions for formatting amounts and blending colors.
//!
//! This module contains utility functions used across the widgets for:
//! - Thousands grouping and Persian digit substitution
//! - Balance and signed amount display strings
//! - Opacity-style color interpolation for entrance animations

use ratatui::style::Color;

use crate::constants::{CURRENCY_LABEL, MASKED_BALANCE};

// ============================================================================
// Digits
// ============================================================================

/// Persian digit glyphs indexed by their value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Format a number with commas for thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_commas(1000), "1,000");
/// assert_eq!(format_with_commas(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Replace every ASCII digit with its Persian glyph, leaving other characters alone.
#[must_use]
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

// ============================================================================
// Amount Formatting
// ============================================================================

/// Group the magnitude of `amount` by thousands and localize its digits.
///
/// The sign is dropped; callers that need it use [`format_signed_amount`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_localized_number(2_253_623), "۲,۲۵۳,۶۲۳");
/// assert_eq!(format_localized_number(-600_000), "۶۰۰,۰۰۰");
/// ```
#[must_use]
pub fn format_localized_number(amount: i64) -> String {
    to_persian_digits(&format_with_commas(amount.unsigned_abs()))
}

/// The balance figure, or the masking string when the balance is hidden.
///
/// The currency label is rendered separately by the header so that it stays
/// visible while the figure is masked.
#[must_use]
pub fn format_balance(balance: i64, visible: bool) -> String {
    if visible {
        format_localized_number(balance)
    } else {
        MASKED_BALANCE.to_string()
    }
}

/// Sign glyph of an amount: `+` for zero and above, `-` below.
#[must_use]
pub const fn sign_glyph(amount: i64) -> char {
    if amount < 0 { '-' } else { '+' }
}

/// Format a signed amount as `<magnitude> <sign> <currency>`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_signed_amount(-600_000), "۶۰۰,۰۰۰ - ریال");
/// assert_eq!(format_signed_amount(3_500_000), "۳,۵۰۰,۰۰۰ + ریال");
/// ```
#[must_use]
pub fn format_signed_amount(amount: i64) -> String {
    format!(
        "{} {} {CURRENCY_LABEL}",
        format_localized_number(amount),
        sign_glyph(amount)
    )
}

// ============================================================================
// Color Interpolation
// ============================================================================

/// Blend `color` over `background` at the given opacity (0.0 to 1.0).
///
/// Only RGB colors can be interpolated; named colors snap at half opacity.
#[must_use]
pub fn fade(color: Color, background: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, background) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |fg: u8, bg: u8| -> u8 {
                (f32::from(bg) + (f32::from(fg) - f32::from(bg)) * opacity).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        _ if opacity >= 0.5 => color,
        _ => background,
    }
}

/// Linear blend between two RGB colors, `t` = 0.0 gives `from`.
#[must_use]
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    fade(to, from, t)
}

/// Progress (0.0 to 1.0) of an entrance animation that starts after `delay`
/// ticks and lasts `duration` ticks.
#[must_use]
pub fn reveal_progress(elapsed: u64, delay: u64, duration: u64) -> f32 {
    let started = elapsed.saturating_sub(delay);
    if duration == 0 || started >= duration {
        return 1.0;
    }
    started as f32 / duration as f32
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Maps Persian digits back to ASCII and drops separators.
    fn digits_only(s: &str) -> String {
        s.chars()
            .filter_map(|c| PERSIAN_DIGITS.iter().position(|&p| p == c))
            .map(|d| char::from(b'0' + d as u8))
            .collect()
    }

    /// Table-driven tests for number formatting with commas.
    #[test]
    fn test_format_with_commas() {
        let cases = [
            (0_u64, "0"),
            (999, "999"),
            (1000, "1,000"),
            (1_000_000, "1,000,000"),
            (1_234_567_890, "1,234,567,890"),
        ];

        for (input, expected) in cases {
            assert_eq!(format_with_commas(input), expected, "input={input}");
        }
    }

    #[test]
    fn test_to_persian_digits_keeps_other_characters() {
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_persian_digits("1,000 - x"), "۱,۰۰۰ - x");
        assert_eq!(to_persian_digits("۱۲"), "۱۲");
    }

    #[test]
    fn test_localized_number_preserves_digits_and_grouping() {
        let samples = [
            0_i64,
            7,
            42,
            999,
            1_000,
            12_345,
            600_000,
            2_253_623,
            1_000_000_000,
            i64::MAX,
        ];

        for n in samples {
            let formatted = format_localized_number(n);

            assert_eq!(digits_only(&formatted), n.to_string(), "digits of {n}");
            assert_eq!(
                formatted.chars().filter(|c| PERSIAN_DIGITS.contains(c)).count(),
                n.to_string().len(),
                "one glyph per digit for {n}"
            );

            let groups: Vec<&str> = formatted.split(',').collect();
            assert!((1..=3).contains(&groups[0].chars().count()), "lead group of {n}");
            for group in &groups[1..] {
                assert_eq!(group.chars().count(), 3, "inner group of {n}");
            }
        }
    }

    #[test]
    fn test_localized_number_uses_magnitude() {
        assert_eq!(format_localized_number(-600_000), format_localized_number(600_000));
        assert_eq!(digits_only(&format_localized_number(i64::MIN)), "9223372036854775808");
    }

    #[test]
    fn test_reference_amounts() {
        insta::assert_snapshot!(format_localized_number(2_253_623), @"۲,۲۵۳,۶۲۳");
        insta::assert_snapshot!(format_signed_amount(-600_000), @"۶۰۰,۰۰۰ - ریال");
        insta::assert_snapshot!(format_signed_amount(3_500_000), @"۳,۵۰۰,۰۰۰ + ریال");
    }

    #[rstest]
    #[case::large_debit(-1_000_000, '-')]
    #[case::small_debit(-1, '-')]
    #[case::zero(0, '+')]
    #[case::credit(3_500_000, '+')]
    #[case::min(i64::MIN, '-')]
    #[case::max(i64::MAX, '+')]
    fn test_signed_amount_sign_and_magnitude(#[case] amount: i64, #[case] sign: char) {
        let formatted = format_signed_amount(amount);
        let expected = format!(
            "{} {sign} {CURRENCY_LABEL}",
            format_localized_number(amount)
        );
        assert_eq!(sign_glyph(amount), sign);
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_format_balance_visibility() {
        assert_eq!(format_balance(2_253_623, true), "۲,۲۵۳,۶۲۳");
        assert_eq!(format_balance(2_253_623, false), MASKED_BALANCE);
        assert_eq!(format_balance(0, false), MASKED_BALANCE);
        assert_eq!(format_balance(-5, false), MASKED_BALANCE);
    }

    #[test]
    fn test_fade_interpolates_rgb() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(fade(fg, bg, 0.0), bg);
        assert_eq!(fade(fg, bg, 1.0), fg);
        assert_eq!(fade(fg, bg, 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(fade(fg, bg, 7.0), fg);
    }

    #[test]
    fn test_fade_snaps_named_colors() {
        assert_eq!(fade(Color::White, Color::Black, 0.2), Color::Black);
        assert_eq!(fade(Color::White, Color::Black, 0.8), Color::White);
    }

    #[test]
    fn test_reveal_progress() {
        assert_eq!(reveal_progress(0, 2, 5), 0.0);
        assert_eq!(reveal_progress(2, 2, 5), 0.0);
        assert!((reveal_progress(4, 2, 5) - 0.4).abs() < f32::EPSILON);
        assert_eq!(reveal_progress(7, 2, 5), 1.0);
        assert_eq!(reveal_progress(0, 0, 0), 1.0);
        assert_eq!(reveal_progress(u64::MAX, 3, 5), 1.0);
    }
}
