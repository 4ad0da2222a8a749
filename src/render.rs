//! Dependency graph rendering
//!
//! Pure text production: a snapshot of the store and graph in, an ordered
//! sequence of lines out. The command layer decides where the lines go.

use crate::state::ModState;
use crate::store::Status;

/// Render the full dependency tree, one header per bundle in registration
/// order, each dependency annotated with its own install status.
///
/// A node already on the current render path is printed once and marked
/// instead of re-expanded, so rendering terminates even if a hand-edited
/// state file introduced a cycle.
pub fn render(state: &ModState) -> Vec<String> {
    let mut lines = Vec::new();
    let mut first = true;
    for (name, status) in state.store.entries() {
        if !first {
            lines.push(String::new());
        }
        first = false;

        lines.push(format!("{} {name}", tag(Some(status))));
        let deps = state.graph.dependencies_of(name);
        if deps.is_empty() {
            lines.push("└── (no dependencies)".to_string());
        } else {
            let mut path = vec![name.to_string()];
            render_children(state, deps, "", &mut path, &mut lines);
        }
    }
    lines
}

fn render_children(
    state: &ModState,
    deps: &[String],
    indent: &str,
    path: &mut Vec<String>,
    lines: &mut Vec<String>,
) {
    for (i, dep) in deps.iter().enumerate() {
        let last = i == deps.len() - 1;
        let connector = if last { "└── " } else { "├── " };
        let dep_tag = tag(state.store.status(dep));

        if path.contains(dep) {
            lines.push(format!(
                "{indent}{connector}{dep} {dep_tag} (circular dependency)"
            ));
            continue;
        }
        lines.push(format!("{indent}{connector}{dep} {dep_tag}"));

        let sub = state.graph.dependencies_of(dep);
        if !sub.is_empty() {
            path.push(dep.clone());
            let next_indent = format!("{indent}{}", if last { "    " } else { "│   " });
            render_children(state, sub, &next_indent, path, lines);
            path.pop();
        }
    }
}

/// Status tag; a dependency pointing at nothing in the store is marked
/// missing rather than guessed at.
fn tag(status: Option<Status>) -> &'static str {
    match status {
        Some(Status::Installed) => "[INSTALLED]",
        Some(Status::Uninstalled) => "[UNINSTALLED]",
        None => "[MISSING]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModState;

    fn installed_chain(edges: &[(&str, &str)], bundles: &[&str]) -> ModState {
        let mut state = ModState::new();
        for name in bundles {
            state.store.register(name).unwrap();
            state.store.mark_installed(name).unwrap();
        }
        let store = state.store.clone();
        for (dependant, dependency) in edges {
            state
                .graph
                .add_dependency(&store, dependant, dependency)
                .unwrap();
        }
        state
    }

    #[test]
    fn test_render_chain() {
        let state = installed_chain(
            &[("x.zip", "y.zip"), ("y.zip", "z.zip")],
            &["x.zip", "y.zip", "z.zip"],
        );
        let lines = render(&state);
        assert_eq!(
            lines,
            vec![
                "[INSTALLED] x.zip",
                "└── y.zip [INSTALLED]",
                "    └── z.zip [INSTALLED]",
                "",
                "[INSTALLED] y.zip",
                "└── z.zip [INSTALLED]",
                "",
                "[INSTALLED] z.zip",
                "└── (no dependencies)",
            ]
        );
    }

    #[test]
    fn test_render_sibling_connectors() {
        let state = installed_chain(
            &[("a.zip", "b.zip"), ("a.zip", "c.zip")],
            &["a.zip", "b.zip", "c.zip"],
        );
        let lines = render(&state);
        assert_eq!(lines[0], "[INSTALLED] a.zip");
        assert_eq!(lines[1], "├── b.zip [INSTALLED]");
        assert_eq!(lines[2], "└── c.zip [INSTALLED]");
    }

    #[test]
    fn test_render_tags_follow_store_status() {
        let mut state = ModState::new();
        state.store.register("a.zip").unwrap();
        state.store.mark_installed("a.zip").unwrap();
        state.store.register("b.zip").unwrap();
        let store = state.store.clone();
        state.graph.add_dependency(&store, "a.zip", "b.zip").unwrap();

        let lines = render(&state);
        assert_eq!(lines[0], "[INSTALLED] a.zip");
        assert_eq!(lines[1], "└── b.zip [UNINSTALLED]");
        assert_eq!(lines[3], "[UNINSTALLED] b.zip");
    }

    #[test]
    fn test_render_missing_dependency_tagged() {
        let mut state = ModState::new();
        state.store.register("a.zip").unwrap();
        state.store.mark_installed("a.zip").unwrap();
        // ghost dep straight from a hand-edited state file
        state
            .graph
            .insert_raw("a.zip".to_string(), vec!["ghost.zip".to_string()]);

        let lines = render(&state);
        assert_eq!(lines[1], "└── ghost.zip [MISSING]");
    }

    #[test]
    fn test_render_truncates_cycles() {
        let mut state = ModState::new();
        state.store.register("a.zip").unwrap();
        state.store.register("b.zip").unwrap();
        state
            .graph
            .insert_raw("a.zip".to_string(), vec!["b.zip".to_string()]);
        state
            .graph
            .insert_raw("b.zip".to_string(), vec!["a.zip".to_string()]);

        let lines = render(&state);
        assert!(
            lines
                .iter()
                .any(|l| l.contains("(circular dependency)")),
            "{lines:?}"
        );
        // and it terminated, which is the point
        assert!(lines.len() < 20);
    }

    #[test]
    fn test_render_diamond_expands_shared_dep_under_each_parent() {
        let state = installed_chain(
            &[
                ("a.zip", "b.zip"),
                ("a.zip", "c.zip"),
                ("b.zip", "d.zip"),
                ("c.zip", "d.zip"),
            ],
            &["a.zip", "b.zip", "c.zip", "d.zip"],
        );
        let lines = render(&state);
        let d_count = lines
            .iter()
            .take_while(|l| !l.is_empty())
            .filter(|l| l.contains("d.zip"))
            .count();
        assert_eq!(d_count, 2);
        assert!(!lines.iter().any(|l| l.contains("circular")));
    }

    #[test]
    fn test_render_empty_state() {
        assert!(render(&ModState::new()).is_empty());
    }
}
