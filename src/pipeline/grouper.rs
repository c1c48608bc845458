use crate::core::types::{DocId, GroupedData};

/// Shuffle stage: group pairs by token. Value lists may contain duplicate
/// document ids; order carries no meaning.
pub fn group_pairs(pairs: Vec<(String, DocId)>) -> GroupedData {
    let mut grouped = GroupedData::new();
    for (token, doc_id) in pairs {
        grouped.entry(token).or_default().push(doc_id);
    }
    grouped
}
