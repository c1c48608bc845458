pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str;
}

/// ASCII tokenizer: drops everything that is neither ASCII-alphanumeric
/// nor whitespace, folds case, and splits on whitespace runs.
#[derive(Clone)]
pub struct AsciiTokenizer {
    pub lowercase: bool,
}

impl Default for AsciiTokenizer {
    fn default() -> Self {
        AsciiTokenizer { lowercase: true }
    }
}

impl Tokenizer for AsciiTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut filtered = String::with_capacity(text.len());

        for ch in text.chars() {
            if ch.is_ascii_alphanumeric() {
                filtered.push(if self.lowercase {
                    ch.to_ascii_lowercase()
                } else {
                    ch
                });
            } else if ch.is_whitespace() {
                // newlines and other whitespace become plain separators
                filtered.push(' ');
            }
        }

        filtered
            .split_whitespace()
            .map(String::from)
            .collect()
    }

    fn name(&self) -> &str {
        "ascii"
    }
}
