//! GraphQL query construction
//!
//! The tree query is written out statically: each level asks for `name`,
//! `type` and blob `text`, and every level but the last also asks for the
//! nested tree's `entries`. Directories deeper than [`TREE_DEPTH`] never
//! appear in the response.

/// Number of tree levels requested, counting the root.
pub const TREE_DEPTH: usize = 3;

/// Build the tree query for `owner/name` at `branch`.
///
/// Inputs are interpolated as-is; a bad owner or branch produces a query the
/// API rejects.
pub fn build_tree_query(owner: &str, name: &str, branch: &str) -> String {
    let mut query = String::new();
    query.push_str("{\n");
    query.push_str(&format!(
        "  repository(owner: \"{}\", name: \"{}\") {{\n",
        owner, name
    ));
    query.push_str(&format!("    object(expression: \"{}:\") {{\n", branch));
    query.push_str("      ... on Tree {\n");
    push_entries(&mut query, TREE_DEPTH, 8);
    query.push_str("      }\n");
    query.push_str("    }\n");
    query.push_str("  }\n");
    query.push_str("}\n");
    query
}

fn push_entries(query: &mut String, levels_left: usize, indent: usize) {
    let pad = " ".repeat(indent);
    query.push_str(&format!("{pad}entries {{\n"));
    query.push_str(&format!("{pad}  name\n"));
    query.push_str(&format!("{pad}  type\n"));
    query.push_str(&format!("{pad}  object {{\n"));
    query.push_str(&format!("{pad}    ... on Blob {{\n"));
    query.push_str(&format!("{pad}      text\n"));
    query.push_str(&format!("{pad}    }}\n"));
    if levels_left > 1 {
        query.push_str(&format!("{pad}    ... on Tree {{\n"));
        push_entries(query, levels_left - 1, indent + 6);
        query.push_str(&format!("{pad}    }}\n"));
    }
    query.push_str(&format!("{pad}  }}\n"));
    query.push_str(&format!("{pad}}}\n"));
}
