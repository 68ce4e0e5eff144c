//! Line segmentation.
//!
//! A line is the unit of analysis for signal detection. Splitting is on `\n`
//! only, so empty lines survive as empty strings and a trailing `\r` stays
//! on the line until the record builder trims it.

/// Split document text into lines.
///
/// The iterator borrows from `text` and can be recreated at will.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}
