//! Folder flattening
//!
//! Walks the source item tree and produces a flat, ordered sequence of leaf
//! descriptors, each carrying the slash-joined prefix of its ancestor
//! folders. No filtering happens here; method dispatch is the classifier's
//! job.

use crate::source::SourceItem;

/// A leaf of the source tree paired with its accumulated folder prefix.
#[derive(Debug)]
pub(crate) struct FlatLeaf<'a> {
    /// The leaf node itself
    pub item: &'a SourceItem,
    /// Ancestor folder names, each followed by `/`; empty at root level
    pub prefix: String,
}

impl FlatLeaf<'_> {
    /// The flattened display name: prefix plus the leaf's own name.
    pub fn flattened_name(&self) -> String {
        format!("{}{}", self.prefix, self.item.name)
    }
}

/// Flattens a source item tree pre-order, depth-first.
///
/// Nesting depth is unbounded; recursion continues until no folder
/// children remain. Every leaf reachable in the tree is yielded exactly
/// once, in source order.
pub(crate) fn flatten_items<'a>(items: &'a [SourceItem], prefix: &str) -> Vec<FlatLeaf<'a>> {
    let mut leaves = Vec::new();
    collect(items, prefix, &mut leaves);
    leaves
}

fn collect<'a>(items: &'a [SourceItem], prefix: &str, out: &mut Vec<FlatLeaf<'a>>) {
    for item in items {
        if item.is_folder() {
            let child_prefix = format!("{}{}/", prefix, item.name);
            if let Some(children) = item.item.as_ref() {
                collect(children, &child_prefix, out);
            }
        } else {
            out.push(FlatLeaf {
                item,
                prefix: prefix.to_string(),
            });
        }
    }
}
