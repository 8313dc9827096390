use unicode_display_width::width as display_width_impl;
use unicode_segmentation::UnicodeSegmentation;

pub(crate) fn display_width(text: &str) -> usize {
    display_width_impl(text) as usize
}

pub(crate) fn grapheme_count(text: &str) -> usize {
    UnicodeSegmentation::graphemes(text, true).count()
}

pub(crate) fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    UnicodeSegmentation::graphemes(text, true)
}
