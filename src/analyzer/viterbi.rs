use tracing::debug;

use super::lattice::{Lattice, LatticeNode};

/// Find the minimum-cost path through the lattice.
///
/// Path cost is the sum of word costs plus `segment_penalty` per node. On
/// ties the first path found is kept. Returns `None` only for an empty or
/// disconnected lattice.
pub fn best_path(lattice: &Lattice, segment_penalty: i64) -> Option<Vec<&LatticeNode>> {
    let char_count = lattice.char_count;
    if char_count == 0 {
        return None;
    }

    // best[pos] = (accumulated cost, index of the node ending at pos)
    let mut best: Vec<Option<(i64, Option<usize>)>> = vec![None; char_count + 1];
    best[0] = Some((0, None));

    for pos in 0..char_count {
        let Some((cost_here, _)) = best[pos] else {
            continue;
        };
        for &idx in &lattice.nodes_by_start[pos] {
            let node = &lattice.nodes[idx];
            let total = cost_here + node.cost as i64 + segment_penalty;
            match best[node.end] {
                Some((existing, _)) if existing <= total => {}
                _ => best[node.end] = Some((total, Some(idx))),
            }
        }
    }

    let (total_cost, _) = best[char_count]?;

    let mut path = Vec::new();
    let mut pos = char_count;
    while pos > 0 {
        let (_, idx) = best[pos]?;
        let node = &lattice.nodes[idx?];
        path.push(node);
        pos = node.start;
    }
    path.reverse();

    debug!(total_cost, segment_count = path.len());
    Some(path)
}
