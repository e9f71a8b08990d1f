use devhelper_protocol::ProjectEntry;

const INDENT: &str = "  ";

/// Iconified listing, one entry per line, two spaces per nesting level.
pub fn render_tree(entries: &[ProjectEntry]) -> String {
    let mut out = String::new();
    push_entries(&mut out, entries, 0);
    out
}

fn push_entries(out: &mut String, entries: &[ProjectEntry], depth: usize) {
    for entry in entries {
        out.push_str(&INDENT.repeat(depth));
        if entry.is_dir() {
            out.push_str(&format!("📁 {}/\n", entry.name));
            push_entries(out, &entry.children, depth + 1);
        } else {
            out.push_str(&format!("📄 {}\n", entry.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_entries_indent_by_level() {
        let tree = vec![
            ProjectEntry::file("a.txt"),
            ProjectEntry::directory(
                "b",
                vec![
                    ProjectEntry::file("c.txt"),
                    ProjectEntry::directory("d", vec![ProjectEntry::file("e.txt")]),
                ],
            ),
        ];
        assert_eq!(
            render_tree(&tree),
            "📄 a.txt\n📁 b/\n  📄 c.txt\n  📁 d/\n    📄 e.txt\n"
        );
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render_tree(&[]), "");
    }
}
