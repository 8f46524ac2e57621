/// True for empty or whitespace-only input.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Case-insensitive match against a list of command words, ignoring
/// surrounding whitespace.
pub fn is_command(input: &str, words: &[&str]) -> bool {
    let input = input.trim();
    words.iter().any(|w| input.eq_ignore_ascii_case(w))
}
