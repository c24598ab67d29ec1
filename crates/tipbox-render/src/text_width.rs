#![forbid(unsafe_code)]

//! Display-width measurement.
//!
//! Widths are terminal columns, not bytes or chars. ASCII control characters
//! that commonly appear in popup text (`\t`, `\n`, `\r`) count as one column
//! so that size arithmetic over raw strings stays stable; other control
//! characters count as zero.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[inline]
fn ascii_display_width(text: &str) -> usize {
    text.bytes()
        .filter(|b| matches!(b, b'\t' | b'\n' | b'\r' | 0x20..=0x7E))
        .count()
}

/// Width of a single character.
#[inline]
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return match ch {
            '\t' | '\n' | '\r' => 1,
            ' '..='~' => 1,
            _ => 0,
        };
    }
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Width of one extended grapheme cluster.
#[inline]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_ascii() {
        return ascii_display_width(grapheme);
    }
    UnicodeWidthStr::width(grapheme)
}

/// Width of a string, summed over grapheme clusters.
#[inline]
pub fn display_width(text: &str) -> usize {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        return text.len();
    }
    if text.is_ascii() {
        return ascii_display_width(text);
    }
    text.graphemes(true).map(grapheme_width).sum()
}
