/// Characters removed before tokenizing.
const PUNCTUATION: &[char] = &['?', ',', '.', '!', '\'', '"', ';', ':'];

/// Filler words dropped from the prompt. Matching is per space-separated token,
/// so the multi-word entries never match.
pub const STOP_WORDS: &[&str] = &[
    "olá", "oi", "por favor", "me diga", "explique", "o que é", "qual", "a", "é", "me", "ajude",
    "e",
];

/// Reduce a user message to its keywords.
pub fn process_prompt(prompt: &str) -> String {
    let cleaned: String = prompt
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();

    cleaned
        .split(' ')
        .filter(|word| !word.is_empty() && !STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
