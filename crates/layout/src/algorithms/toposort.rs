//! Kahn's algorithm over indexed nodes.

use std::collections::VecDeque;

/// Orders `count` nodes so that every node comes after the nodes it depends
/// on. `dependencies[i]` lists the indices node `i` reads from.
///
/// Nodes with no pending dependencies are released in index order, so the
/// result is deterministic. On a cycle, returns the indices that could not
/// be ordered (every node on a cycle plus anything depending on one), in
/// index order. A node listing itself is a cycle.
pub fn topological_order(count: usize, dependencies: &[Vec<usize>]) -> Result<Vec<usize>, Vec<usize>> {
    let mut pending = vec![0usize; count];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

    for (node, deps) in dependencies.iter().enumerate().take(count) {
        let mut seen: Vec<usize> = Vec::with_capacity(deps.len());
        for &dep in deps {
            if dep >= count || seen.contains(&dep) {
                continue;
            }
            seen.push(dep);
            pending[node] += 1;
            dependents[dep].push(node);
        }
    }

    let mut ready: VecDeque<usize> = (0..count).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(count);
    while let Some(node) = ready.pop_front() {
        order.push(node);
        for &next in &dependents[node] {
            pending[next] -= 1;
            if pending[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() == count {
        Ok(order)
    } else {
        Err((0..count).filter(|&i| pending[i] > 0).collect())
    }
}
