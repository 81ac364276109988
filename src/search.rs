use std::collections::HashSet;

use crate::graph::DirectedGraph;
use crate::path::Path;

/// The outcome code of an all-paths search. `TooManyPaths` and
/// `PathContainsCycle` are expected outcomes to branch on, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSearchResult {
    /// At least one path satisfying every bound was found, and the
    /// collection is the complete enumeration.
    FoundPath,
    /// Exploration exhausted every branch within bounds without completing a
    /// path and without meeting a cycle.
    NoPath,
    /// More qualifying paths exist than `max_paths`; the collection holds
    /// the first `max_paths` of them.
    TooManyPaths,
    /// A cycle lies on a candidate path within the explorable window; the
    /// collection must be treated as unreliable.
    PathContainsCycle,
}

/// Bounds on an all-paths search. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after this many complete paths have been found.
    pub max_paths: Option<usize>,
    /// Exclude completed paths with a hop count below this.
    pub min_depth: Option<usize>,
    /// Do not extend any path prefix beyond this hop count.
    pub max_depth: Option<usize>,
}

impl SearchLimits {
    /// No bounds at all.
    #[must_use]
    pub fn none() -> Self {
        SearchLimits::default()
    }

    /// Set the maximum number of paths to collect.
    #[must_use]
    pub fn max_paths(mut self, n: usize) -> Self {
        self.max_paths = Some(n);
        self
    }

    /// Set the minimum hop count of a reported path.
    #[must_use]
    pub fn min_depth(mut self, depth: usize) -> Self {
        self.min_depth = Some(depth);
        self
    }

    /// Set the maximum hop count explored.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// The result of an all-paths search: the outcome code plus every path
/// collected before the search finished or was cut short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<V> {
    pub result: PathSearchResult,
    pub paths: Vec<Path<V>>,
}

impl<V> SearchOutcome<V> {
    /// Whether the caller may treat the collection as the complete
    /// enumeration of qualifying paths.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(
            self.result,
            PathSearchResult::FoundPath | PathSearchResult::NoPath
        )
    }
}

/// Enumerate every simple path from `start` to `goal`, subject to `limits`.
///
/// The traversal is an exhaustive depth-first search that keeps the current
/// prefix acyclic: an edge closing onto a vertex already on the prefix is
/// recorded as a cycle and not expanded. Paths are emitted in DFS visitation
/// order, which follows the graph's deterministic neighbor order.
///
/// Outcome rules:
///
/// - `start == goal` is the single zero-depth path, regardless of depth
///   bounds.
/// - A recorded cycle that shares a vertex with any emitted path degrades
///   the outcome to `PathContainsCycle`, and so does any recorded cycle
///   when no path was emitted at all: in both cases the enumeration cannot
///   be trusted to be bounded. A cycle disjoint from the emitted paths is
///   otherwise ignored, as is any cycle beyond `max_depth`. Skipping a
///   loop-closing edge never hides a result, since any walk to the goal
///   contains a loop-free path to the goal.
/// - Finding more than `max_paths` qualifying paths stops the search with
///   `TooManyPaths`; a tainting cycle seen before that point wins over it.
/// - Inverted bounds (`min_depth > max_depth`) exclude every path and yield
///   `NoPath`.
pub fn all_paths_between<G: DirectedGraph>(
    graph: &G,
    start: &G::V,
    goal: &G::V,
    limits: SearchLimits,
) -> SearchOutcome<G::V> {
    if start == goal {
        if limits.max_paths == Some(0) {
            return SearchOutcome {
                result: PathSearchResult::TooManyPaths,
                paths: Vec::new(),
            };
        }

        return SearchOutcome {
            result: PathSearchResult::FoundPath,
            paths: vec![Path::new(start.clone())],
        };
    }

    let mut dfs = Dfs {
        graph,
        goal: goal.clone(),
        limits,
        prefix: vec![start.clone()],
        on_prefix: HashSet::from([start.clone()]),
        cycle_vertices: HashSet::new(),
        paths: Vec::new(),
        overflowed: false,
    };

    dfs.visit(start, 0);

    let tainted = dfs
        .paths
        .iter()
        .any(|p| p.iter().any(|v| dfs.cycle_vertices.contains(v)));

    let result = if tainted || (dfs.paths.is_empty() && !dfs.cycle_vertices.is_empty()) {
        PathSearchResult::PathContainsCycle
    } else if dfs.overflowed {
        PathSearchResult::TooManyPaths
    } else if dfs.paths.is_empty() {
        PathSearchResult::NoPath
    } else {
        PathSearchResult::FoundPath
    };

    SearchOutcome {
        result,
        paths: dfs.paths,
    }
}

/// The mutable state of one search invocation. Each invocation owns its own
/// prefix and visited set, so independent searches over a shared graph are
/// safe to run in parallel.
struct Dfs<'a, G: DirectedGraph> {
    graph: &'a G,
    goal: G::V,
    limits: SearchLimits,
    prefix: Vec<G::V>,
    on_prefix: HashSet<G::V>,
    cycle_vertices: HashSet<G::V>,
    paths: Vec<Path<G::V>>,
    overflowed: bool,
}

impl<G: DirectedGraph> Dfs<'_, G> {
    /// Expand the prefix ending at `u` at hop count `depth`. Returns false
    /// when the whole search should stop.
    fn visit(&mut self, u: &G::V, depth: usize) -> bool {
        if Some(depth) == self.limits.max_depth {
            return true;
        }

        let neighbors: Vec<G::V> = self.graph.out_neighbors(u).collect();

        for w in neighbors {
            if self.on_prefix.contains(&w) {
                // The edge closes a loop onto the path under construction.
                // Remember the loop's vertices and leave the branch alone.
                if let Some(pos) = self.prefix.iter().position(|v| *v == w) {
                    self.cycle_vertices.extend(self.prefix[pos..].iter().cloned());
                }
                continue;
            }

            if w == self.goal {
                if depth + 1 >= self.limits.min_depth.unwrap_or(0) {
                    if Some(self.paths.len()) == self.limits.max_paths {
                        self.overflowed = true;
                        return false;
                    }

                    let mut vertices = self.prefix.clone();
                    vertices.push(w.clone());
                    self.paths.push(Path::from_vertices(vertices));
                }
                continue;
            }

            self.prefix.push(w.clone());
            self.on_prefix.insert(w.clone());

            let keep_going = self.visit(&w, depth + 1);

            self.prefix.pop();
            self.on_prefix.remove(&w);

            if !keep_going {
                return false;
            }
        }

        true
    }
}
