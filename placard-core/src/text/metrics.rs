use crate::text::Font;
use std::collections::HashMap;

/// Character widths for a standard font, in 1/1000 em
pub struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16) -> Self {
        Self {
            widths: HashMap::new(),
            default_width,
        }
    }

    fn with_widths(mut self, widths: &[(char, u16)]) -> Self {
        self.widths.extend(widths.iter().copied());
        self
    }

    pub fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

const HELVETICA_WIDTHS: &[(char, u16)] = &[
    (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
    ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
    (',', 278), ('-', 333), ('.', 278), ('/', 278), (':', 278), (';', 278),
    ('<', 584), ('=', 584), ('>', 584), ('?', 556), ('@', 1015), ('A', 667),
    ('B', 667), ('C', 722), ('D', 722), ('E', 667), ('F', 611), ('G', 778),
    ('H', 722), ('I', 278), ('J', 500), ('K', 667), ('L', 556), ('M', 833),
    ('N', 722), ('O', 778), ('P', 667), ('Q', 778), ('R', 722), ('S', 667),
    ('T', 611), ('U', 722), ('V', 667), ('W', 944), ('X', 667), ('Y', 667),
    ('Z', 611), ('[', 278), ('\\', 278), (']', 278), ('^', 469), ('_', 556),
    ('`', 333), ('c', 500), ('f', 278), ('i', 222), ('j', 222), ('k', 500),
    ('l', 222), ('m', 833), ('r', 333), ('s', 500), ('t', 278), ('v', 500),
    ('w', 722), ('x', 500), ('y', 500), ('z', 500), ('{', 334), ('|', 260),
    ('}', 334), ('~', 584),
];

const HELVETICA_BOLD_WIDTHS: &[(char, u16)] = &[
    ('0', 556), ('1', 556), ('2', 556), ('3', 556), ('4', 556), ('5', 556),
    ('6', 556), ('7', 556), ('8', 556), ('9', 556), ('#', 556), ('$', 556),
    ('%', 889), (' ', 278), ('!', 333), ('"', 474), ('&', 722), ('\'', 238), ('(', 333),
    (')', 333), ('*', 389), ('+', 584), (',', 278), ('-', 333), ('.', 278),
    ('/', 278), (':', 333), (';', 333), ('<', 584), ('=', 584), ('>', 584),
    ('@', 975), ('A', 722), ('B', 722), ('C', 722), ('D', 722), ('E', 667),
    ('F', 611), ('G', 778), ('H', 722), ('I', 278), ('J', 556), ('K', 722),
    ('L', 611), ('M', 833), ('N', 722), ('O', 778), ('P', 667), ('Q', 778),
    ('R', 722), ('S', 667), ('T', 611), ('U', 722), ('V', 667), ('W', 944),
    ('X', 667), ('Y', 667), ('Z', 611), ('[', 333), ('\\', 278), (']', 333),
    ('^', 584), ('_', 556), ('`', 333), ('a', 556), ('c', 556), ('e', 556),
    ('f', 333), ('i', 278), ('j', 278), ('k', 556), ('l', 278), ('m', 889),
    ('r', 389), ('s', 556), ('t', 333), ('v', 556), ('w', 778), ('x', 556),
    ('y', 556), ('z', 500), ('{', 389), ('|', 280), ('}', 389), ('~', 584),
];

lazy_static::lazy_static! {
    static ref FONT_METRICS: HashMap<Font, FontMetrics> = {
        let mut metrics = HashMap::new();
        // Digits and unlisted letters fall back to the default width.
        metrics.insert(Font::Helvetica, FontMetrics::new(556).with_widths(HELVETICA_WIDTHS));
        metrics.insert(
            Font::HelveticaBold,
            FontMetrics::new(611).with_widths(HELVETICA_BOLD_WIDTHS),
        );
        metrics.insert(Font::Courier, FontMetrics::new(600));
        metrics
    };
}

/// Measure the width of a text string in a given font and size
pub fn measure_text(text: &str, font: Font, font_size: f64) -> f64 {
    let width_units: u32 = match FONT_METRICS.get(&font) {
        Some(metrics) => text.chars().map(|ch| metrics.char_width(ch) as u32).sum(),
        None => text.chars().count() as u32 * 600,
    };

    (width_units as f64 / 1000.0) * font_size
}
