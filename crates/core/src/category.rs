//! Category tree assembly.
//!
//! Categories are stored as a flat parent-pointer table; this module builds
//! the nested tree for display, with children ordered by title at every
//! level. Rows pointing at a missing parent are treated as roots.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// Flat category row as loaded from storage.
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub id: DbId,
    pub title: String,
    pub parent_id: Option<DbId>,
}

/// A category with its nested children.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryNode {
    pub id: DbId,
    pub title: String,
    pub children: Vec<CategoryNode>,
}

/// Assemble the nested tree from flat rows, title-ordered at every level.
pub fn build_tree(rows: &[CategoryRow]) -> Vec<CategoryNode> {
    let known: HashSet<DbId> = rows.iter().map(|r| r.id).collect();

    let mut children_of: HashMap<Option<DbId>, Vec<&CategoryRow>> = HashMap::new();
    for row in rows {
        // An orphaned parent pointer demotes the row to a root.
        let key = row.parent_id.filter(|p| known.contains(p));
        children_of.entry(key).or_default().push(row);
    }

    assemble(None, &children_of)
}

fn assemble(
    parent: Option<DbId>,
    children_of: &HashMap<Option<DbId>, Vec<&CategoryRow>>,
) -> Vec<CategoryNode> {
    let mut nodes: Vec<CategoryNode> = children_of
        .get(&parent)
        .map(|rows| {
            rows.iter()
                .map(|row| CategoryNode {
                    id: row.id,
                    title: row.title.clone(),
                    children: assemble(Some(row.id), children_of),
                })
                .collect()
        })
        .unwrap_or_default();
    nodes.sort_by(|a, b| a.title.cmp(&b.title));
    nodes
}
