/// Split raw input on runs of whitespace and commas.
///
/// Fragments keep their original casing and left-to-right order; empty
/// fragments are dropped, so input made only of separators yields nothing.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}
