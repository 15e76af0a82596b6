//! Strongly connected components (Kosaraju, two passes).
//!
//! # Algorithm
//!
//! 1. Depth-first traversal of the forward graph, roots taken in node-id
//!    order, recording each node when it finishes (post-order)
//! 2. Reset visitation
//! 3. Pop the finish order; every unvisited popped node roots a traversal of
//!    the transposed graph, and everything it reaches is one component
//!
//! Both traversals use an explicit stack of `(node, next successor position)`
//! frames, so graph depth is bounded by heap memory rather than the call
//! stack.
//!
//! # Complexity
//! O(V + E)
//!
//! # Reference
//! Sharir (1981), "A strong-connectivity algorithm and its applications in
//! data flow analysis", *Computers & Mathematics with Applications* 7(1)

use super::types::{Digraph, Edge, NodeId};
use crate::error::Result;

/// Partitions `0..node_count` into strongly connected components.
///
/// Every node appears in exactly one component. Components are returned in
/// the order the second pass discovers them; nodes inside a component are in
/// discovery order.
///
/// # Errors
/// [`NodeOutOfRange`](crate::TopologyError::NodeOutOfRange) if an edge
/// endpoint is not below `node_count`.
///
/// # Example
///
/// ```
/// use u_netopt::graph::{strongly_connected_components, Edge};
///
/// // 0 <-> 1, 2 alone
/// let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 0, 1.0), Edge::new(1, 2, 1.0)];
/// let mut components = strongly_connected_components(3, &edges).unwrap();
/// for c in &mut components {
///     c.sort_unstable();
/// }
/// components.sort();
/// assert_eq!(components, vec![vec![0, 1], vec![2]]);
/// ```
pub fn strongly_connected_components<'a, I>(node_count: usize, edges: I) -> Result<Vec<Vec<NodeId>>>
where
    I: IntoIterator<Item = &'a Edge>,
{
    Ok(Digraph::from_edges(node_count, edges)?.strongly_connected_components())
}

/// Returns `true` if every node reaches every other node.
///
/// The empty graph counts as strongly connected.
pub fn is_strongly_connected<'a, I>(node_count: usize, edges: I) -> Result<bool>
where
    I: IntoIterator<Item = &'a Edge>,
{
    Ok(strongly_connected_components(node_count, edges)?.len() <= 1)
}

impl Digraph {
    /// Strongly connected components of this graph.
    ///
    /// See [`strongly_connected_components`].
    pub fn strongly_connected_components(&self) -> Vec<Vec<NodeId>> {
        let n = self.node_count();
        let forward = self.forward_adjacency();
        let reverse = self.reverse_adjacency();

        let mut visited = vec![false; n];
        let mut stack = Vec::new();

        // Pass 1: finish order on the forward graph
        let mut finished = Vec::with_capacity(n);
        for root in 0..n {
            if !visited[root] {
                depth_first(&forward, root, &mut visited, &mut stack, |_| {}, |node| {
                    finished.push(node)
                });
            }
        }

        // Pass 2: transposed graph in reverse finish order
        visited.fill(false);
        let mut components = Vec::new();
        while let Some(root) = finished.pop() {
            if visited[root] {
                continue;
            }
            let mut component = Vec::new();
            depth_first(
                &reverse,
                root,
                &mut visited,
                &mut stack,
                |node| component.push(node),
                |_| {},
            );
            components.push(component);
        }

        components
    }
}

/// Iterative depth-first traversal from `root` over unvisited nodes.
///
/// `on_enter` fires when a node is first reached, `on_finish` once all of its
/// successors are exhausted. `stack` is scratch space and is empty on return.
fn depth_first(
    adjacency: &[Vec<NodeId>],
    root: NodeId,
    visited: &mut [bool],
    stack: &mut Vec<(NodeId, usize)>,
    mut on_enter: impl FnMut(NodeId),
    mut on_finish: impl FnMut(NodeId),
) {
    visited[root] = true;
    on_enter(root);
    stack.push((root, 0));

    while let Some(frame) = stack.last_mut() {
        let (node, position) = *frame;
        match adjacency[node].get(position) {
            Some(&next) => {
                frame.1 += 1;
                if !visited[next] {
                    visited[next] = true;
                    on_enter(next);
                    stack.push((next, 0));
                }
            }
            None => {
                stack.pop();
                on_finish(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(mut components: Vec<Vec<NodeId>>) -> Vec<Vec<NodeId>> {
        for c in &mut components {
            c.sort_unstable();
        }
        components.sort();
        components
    }

    fn cycle(n: usize) -> Vec<Edge> {
        (0..n).map(|i| Edge::new(i, (i + 1) % n, 1.0)).collect()
    }

    // ---- Fixed graphs ----

    #[test]
    fn test_no_edges_gives_singletons() {
        let components = strongly_connected_components(4, &[] as &[Edge]).unwrap();
        assert_eq!(sorted(components), vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_single_cycle_is_one_component() {
        let components = strongly_connected_components(7, &cycle(7)).unwrap();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 7);
    }

    #[test]
    fn test_two_cycles_joined_one_way() {
        // {0,1,2} -> {3,4}
        let edges = [
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 1.0),
            Edge::new(2, 0, 1.0),
            Edge::new(2, 3, 1.0),
            Edge::new(3, 4, 1.0),
            Edge::new(4, 3, 1.0),
        ];
        let components = strongly_connected_components(5, &edges).unwrap();
        assert_eq!(sorted(components), vec![vec![0, 1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let edges = [
            Edge::new(0, 0, 1.0),
            Edge::new(0, 1, 1.0),
            Edge::new(0, 1, 2.0),
        ];
        let components = strongly_connected_components(2, &edges).unwrap();
        assert_eq!(sorted(components), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_source_component_discovered_first() {
        // Kosaraju yields components in topological order of the condensation.
        let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
        let components = strongly_connected_components(3, &edges).unwrap();
        assert_eq!(components, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_deep_path_does_not_overflow() {
        let n = 200_000;
        let mut edges: Vec<Edge> = (0..n - 1).map(|i| Edge::new(i, i + 1, 1.0)).collect();
        edges.push(Edge::new(n - 1, 0, 1.0));
        let components = strongly_connected_components(n, &edges).unwrap();
        assert_eq!(components.len(), 1);
    }

    #[test]
    fn test_is_strongly_connected() {
        assert!(is_strongly_connected(5, &cycle(5)).unwrap());
        assert!(!is_strongly_connected(2, &[Edge::new(0, 1, 1.0)]).unwrap());
        assert!(is_strongly_connected(0, &[] as &[Edge]).unwrap());
    }

    #[test]
    fn test_out_of_range_edge_is_rejected() {
        assert!(strongly_connected_components(2, &[Edge::new(0, 2, 1.0)]).is_err());
    }

    // ---- Properties ----

    fn arbitrary_graph() -> impl Strategy<Value = (usize, Vec<Edge>)> {
        (1usize..25).prop_flat_map(|n| {
            let edge = (0..n, 0..n).prop_map(|(a, b)| Edge::new(a, b, 1.0));
            (Just(n), proptest::collection::vec(edge, 0..80))
        })
    }

    proptest! {
        #[test]
        fn prop_components_partition_nodes((n, edges) in arbitrary_graph()) {
            let components = strongly_connected_components(n, &edges).unwrap();
            let mut seen = vec![0usize; n];
            for component in &components {
                prop_assert!(!component.is_empty());
                for &node in component {
                    seen[node] += 1;
                }
            }
            prop_assert!(seen.iter().all(|&count| count == 1));
        }

        #[test]
        fn prop_edge_endpoints_in_same_component_iff_mutually_reachable(
            (n, edges) in arbitrary_graph(),
        ) {
            let components = strongly_connected_components(n, &edges).unwrap();
            let mut owner = vec![0usize; n];
            for (idx, component) in components.iter().enumerate() {
                for &node in component {
                    owner[node] = idx;
                }
            }

            // Transitive closure by repeated relaxation; graphs here are tiny.
            let mut reach = vec![vec![false; n]; n];
            for (i, row) in reach.iter_mut().enumerate() {
                row[i] = true;
            }
            for e in &edges {
                reach[e.from][e.to] = true;
            }
            for k in 0..n {
                for i in 0..n {
                    if reach[i][k] {
                        for j in 0..n {
                            if reach[k][j] {
                                reach[i][j] = true;
                            }
                        }
                    }
                }
            }

            for i in 0..n {
                for j in 0..n {
                    let mutual = reach[i][j] && reach[j][i];
                    prop_assert_eq!(owner[i] == owner[j], mutual);
                }
            }
        }
    }
}
