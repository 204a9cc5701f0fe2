use super::dictionary::{Dictionary, NodeId};

/// A capability set driving one DAWG traversal. The navigator owns no
/// graph state of its own; it only asks the policy for permission and
/// records what the policy accepts.
///
/// See [`navigate`] for the exact calling protocol.
pub trait Policy {
    /// Permission to enter an edge whose prefix starts with `first_char`.
    fn push_edge(&mut self, first_char: char) -> bool;
    /// Whether to continue at all, checked before consuming each character.
    fn accepting(&self) -> bool;
    /// Consume one more character; may mutate internal state. Returning
    /// `false` aborts the current edge.
    fn accepts(&mut self, ch: char) -> bool;
    /// Record a match; `matched` is the full path from the root to this
    /// point. `is_final` means a valid word ends exactly here.
    fn accept(&mut self, matched: &str, is_final: bool);
    /// Called after an entered edge (and everything below it) has been
    /// fully explored. The return value decides whether sibling edges at
    /// the same node are still visited.
    fn pop_edge(&mut self) -> bool;
    /// Finalization hook, called once the whole traversal is complete.
    fn done(&mut self) {}
}

/// Resume point for one node's sibling-edge iteration: either we are about
/// to look at edge `idx`, or we just returned from recursing into the edge
/// at `idx` and still owe the policy a `pop_edge()` call.
enum Task {
    Visit {
        node: NodeId,
        idx: usize,
    },
    AfterChild {
        node: NodeId,
        idx: usize,
        path_before: usize,
    },
}

/// Drive `policy` over every edge of `dict` reachable under the rules it
/// grants itself via `push_edge`/`accepting`/`accepts`. Traversal is
/// iterative (an explicit stack of resume points), not recursive, so
/// traversal depth is bounded only by available memory rather than the
/// host call stack. A single `path` buffer accumulates the characters
/// matched from the root to the current position, growing as edges are
/// entered and truncated back as they are left, so `Policy::accept` always
/// sees the full match-so-far rather than just the current edge's prefix.
pub fn navigate<P: Policy>(dict: &Dictionary, policy: &mut P) {
    let mut stack: Vec<Task> = vec![Task::Visit {
        node: dict.root(),
        idx: 0,
    }];
    let mut path = String::new();
    while let Some(task) = stack.pop() {
        match task {
            Task::Visit { node, idx } => {
                let edges = dict.edges(node);
                if idx >= edges.len() {
                    continue;
                }
                let (prefix, child) = &edges[idx];
                let first = prefix.chars().next().expect("edge prefix is never empty");
                if !policy.push_edge(first) {
                    stack.push(Task::Visit { node, idx: idx + 1 });
                    continue;
                }
                let path_before = path.len();
                let completed = walk_prefix(dict, prefix, *child, policy, &mut path);
                stack.push(Task::AfterChild {
                    node,
                    idx,
                    path_before,
                });
                if completed {
                    if let Some(child) = child {
                        stack.push(Task::Visit {
                            node: *child,
                            idx: 0,
                        });
                    }
                }
            }
            Task::AfterChild {
                node,
                idx,
                path_before,
            } => {
                path.truncate(path_before);
                if policy.pop_edge() {
                    stack.push(Task::Visit { node, idx: idx + 1 });
                }
            }
        }
    }
    policy.done();
}

/// Walk one edge's prefix character by character, appending matched
/// characters to the shared `path`. Returns `true` if the whole prefix was
/// consumed with the policy still accepting (in which case the caller may
/// recurse into `child`).
fn walk_prefix<P: Policy>(
    dict: &Dictionary,
    prefix: &str,
    child: Option<NodeId>,
    policy: &mut P,
    path: &mut String,
) -> bool {
    let mut chars = prefix.chars().peekable();
    while let Some(ch) = chars.next() {
        if !policy.accepting() || !policy.accepts(ch) {
            return false;
        }
        path.push(ch);
        let mut is_final = false;
        if chars.peek() == Some(&'|') {
            chars.next();
            is_final = true;
        } else if chars.peek().is_none() && (child.is_none() || dict.is_final(child.unwrap())) {
            is_final = true;
        }
        policy.accept(path, is_final);
    }
    true
}
