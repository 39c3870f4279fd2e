//! Display-name handling for crop labels

/// Capitalize a label for display: first character uppercased, the rest
/// lowercased ("tOMATO" → "Tomato").
///
/// Works on any input, including crops absent from the table.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}
