use crate::core::types::DocId;

/// Map stage: one (token, doc) pair per occurrence. Duplicate tokens in the
/// same document yield duplicate pairs on purpose; deduplication happens in
/// the trie's posting set.
pub fn map_document(doc_id: &DocId, tokens: Vec<String>) -> Vec<(String, DocId)> {
    tokens
        .into_iter()
        .map(|token| (token, doc_id.clone()))
        .collect()
}
