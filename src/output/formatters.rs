//! Formatting utilities for terminal output

/// Spell a word as spaced capital letters
#[must_use]
pub fn letter_tiles(word: &str) -> String {
    let mut result = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.extend(c.to_uppercase());
    }
    result
}

/// Remaining tries as filled and empty pips
#[must_use]
pub fn attempt_pips(remaining: u8, max: u8) -> String {
    let remaining = remaining.min(max) as usize;
    format!(
        "{}{}",
        "●".repeat(remaining),
        "○".repeat(max as usize - remaining)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Pluralize a count of tries
#[must_use]
pub const fn tries(n: u8) -> &'static str {
    if n == 1 { "try" } else { "tries" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_are_spaced_capitals() {
        assert_eq!(letter_tiles("tca"), "T C A");
        assert_eq!(letter_tiles("a"), "A");
        assert_eq!(letter_tiles(""), "");
    }

    #[test]
    fn pips_show_remaining_tries() {
        assert_eq!(attempt_pips(3, 3), "●●●");
        assert_eq!(attempt_pips(1, 3), "●○○");
        assert_eq!(attempt_pips(0, 3), "○○○");
    }

    #[test]
    fn pips_clamp_to_max() {
        assert_eq!(attempt_pips(5, 3), "●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 1.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(1.0, 1.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(0.5, 1.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn tries_pluralizes() {
        assert_eq!(tries(1), "try");
        assert_eq!(tries(2), "tries");
        assert_eq!(tries(0), "tries");
    }
}
