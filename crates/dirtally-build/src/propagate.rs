//! Bottom-up size aggregation.

use dirtally_core::{PathTree, SizeUnits};

/// Compute every node's cumulative size and return the grand total in bytes.
///
/// Files report their own size; folders report their own declared size plus
/// everything beneath them. The arena is walked from the last slot to the
/// first, which visits every child before its parent without recursion.
///
/// A tree is only ever aggregated once: calling this again returns the
/// stored total and leaves every node untouched.
pub fn propagate(tree: &mut PathTree) -> u64 {
    if tree.propagated {
        tracing::debug!(total = tree.total.bytes, "Sizes already propagated");
        return tree.total.bytes;
    }

    let mut descendants = vec![0u64; tree.nodes.len()];

    for index in (0..tree.nodes.len()).rev() {
        let node = &mut tree.nodes[index];
        let bytes = node.own_size.saturating_add(descendants[index]);
        node.cumulative = SizeUnits::from_bytes(bytes);

        if let Some(parent) = node.parent {
            let slot = &mut descendants[parent.index()];
            *slot = slot.saturating_add(bytes);
        }
    }

    let total = tree
        .top_level()
        .fold(0u64, |acc, node| acc.saturating_add(node.cumulative.bytes));

    tree.total = SizeUnits::from_bytes(total);
    tree.propagated = true;

    tracing::debug!(total, nodes = tree.len(), "Propagated sizes");
    total
}
