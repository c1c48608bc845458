use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{AsciiTokenizer, Tokenizer};

/// Text analysis pipeline: tokenizer followed by filters, in order.
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
    pub name: String,
}

impl Analyzer {
    pub fn new(name: String, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            tokenizer,
            filters: Vec::new(),
            name,
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Pure function of (text, configured filters). Never emits empty tokens.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// ASCII analyzer with the given stop words.
    pub fn ascii_with_stop_words(stop_words: StopWordFilter) -> Self {
        Analyzer::new("ascii_stop".to_string(), Box::new(AsciiTokenizer::default()))
            .add_filter(Box::new(stop_words))
    }

    /// Bare ASCII analyzer, no stop-word filtering.
    pub fn ascii() -> Self {
        Analyzer::new("ascii".to_string(), Box::new(AsciiTokenizer::default()))
    }
}
