//! Dependency-path feature strings.
//!
//! Interior vertices are abstracted to their part-of-speech tag, except the
//! query trigger, which is rendered as the trigger sentinel.

use crate::data::SentenceInstance;
use crate::digraph::{DependencyPath, ShortestPath};

/// Shortest path between two token sets, `None` if the sentence has no parse
/// or the sets are disconnected.
pub(crate) fn path_between(
    inst: &SentenceInstance,
    from: &[usize],
    to: &[usize],
) -> Option<DependencyPath> {
    inst.graph()?.shortest_path(from, to)
}

/// Render the interior of `path`. A vertex equal to `trigger` becomes
/// `sentinel`; every other vertex becomes its POS tag.
pub(crate) fn render_path(
    inst: &SentenceInstance,
    path: &DependencyPath,
    trigger: Option<usize>,
    sentinel: &str,
) -> String {
    let tokens = inst.tokens();
    path.render_with(|vertex| {
        if Some(vertex) == trigger {
            sentinel
        } else {
            tokens.get(vertex).map(|t| t.pos.as_str()).unwrap_or_default()
        }
    })
}
