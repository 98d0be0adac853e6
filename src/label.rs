//! Display-length limits of the Cirklon's screen

/// Maximum characters shown for a slot label
pub const LABEL_MAX_LEN: usize = 6;

/// Maximum characters shown for an instrument name
pub const NAME_MAX_LEN: usize = 9;

/// Truncate `text` to at most `max` characters.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Truncate a slot label to the device's label width
pub fn truncate_label(label: &str) -> String {
    truncate(label, LABEL_MAX_LEN)
}

/// Truncate an instrument name to the device's name width
pub fn truncate_name(name: &str) -> String {
    truncate(name, NAME_MAX_LEN)
}
