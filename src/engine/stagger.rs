/// Rendered in place of a space so letters keep their width.
pub const NBSP: char = '\u{a0}';

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub index: usize,
    /// Seconds.
    pub delay: f64,
}

impl Glyph {
    pub fn style(&self) -> String {
        format!("animation-delay: {:.3}s;", self.delay)
    }
}

/// Splits `text` into one glyph per char, each delayed `increment` seconds
/// after the previous one.
pub fn stagger(text: &str, increment: f64) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| Glyph {
            ch: if ch == ' ' { NBSP } else { ch },
            index,
            delay: index as f64 * increment,
        })
        .collect()
}

/// Entrance delay of the `card`-th pricing card.
pub fn card_delay(card: usize) -> f64 {
    card as f64 * 0.15 + 0.5
}

/// Feature rows start after their card and follow each other by 0.1s.
pub fn cascade_delay(card: usize, item: usize) -> f64 {
    card_delay(card) + item as f64 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_glyph_per_char_with_linear_delays() {
        let glyphs = stagger("Our Pricing Plan", 0.05);
        assert_eq!(glyphs.len(), "Our Pricing Plan".chars().count());
        for (i, glyph) in glyphs.iter().enumerate() {
            assert_eq!(glyph.index, i);
            assert!((glyph.delay - i as f64 * 0.05).abs() < 1e-12);
        }
        assert!(glyphs.windows(2).all(|w| w[0].delay <= w[1].delay));
    }

    #[test]
    fn spaces_become_non_breaking() {
        let glyphs = stagger("a b", 0.1);
        let chars: String = glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, "a\u{a0}b");
    }

    #[test]
    fn repeated_letters_are_distinct_units() {
        let glyphs = stagger("ll", 0.1);
        assert_ne!(glyphs[0], glyphs[1]);
        assert!(stagger("", 0.1).is_empty());
    }

    #[test]
    fn multibyte_text_counts_chars() {
        let glyphs = stagger("$59 ✓", 0.04);
        assert_eq!(glyphs.len(), 5);
        assert_eq!(glyphs[4].ch, '✓');
        assert_eq!(glyphs[2].style(), "animation-delay: 0.080s;");
    }

    #[test]
    fn pricing_rows_cascade_after_their_card() {
        assert!((card_delay(0) - 0.5).abs() < 1e-12);
        assert!((card_delay(2) - 0.8).abs() < 1e-12);
        assert!((cascade_delay(1, 3) - 0.95).abs() < 1e-12);
    }
}
