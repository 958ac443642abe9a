use crate::case::{CaseStyle, Word, WordSequence};

/// Reassemble words in the given style. An empty sequence joins to `""`.
pub fn join(words: &WordSequence, style: CaseStyle) -> String {
    words
        .iter()
        .enumerate()
        .map(|(idx, word)| transform(word, idx, style))
        .collect::<Vec<_>>()
        .join(style.separator())
}

fn transform(word: &Word, idx: usize, style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel if idx > 0 => capitalize(word.as_str()),
        _ => word.as_str().to_lowercase(),
    }
}

/// Uppercase the first character and lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
