// Plain terminal rendering of a store

use crate::filter::FilterMode;
use crate::store::TaskListStore;
use colored::Colorize;

/// Render the current state as lines of text
///
/// Colors follow `colored`'s global switch, so callers can disable them with
/// `colored::control::set_override(false)`.
pub fn render(store: &TaskListStore) -> String {
    let mut lines = Vec::new();

    if let Some(notification) = store.notification() {
        lines.push(format!("✔ {}", notification.message).green().bold().to_string());
    }

    let visible = store.visible_tasks();
    if visible.is_empty() {
        lines.push("(nothing to show)".dimmed().to_string());
    }
    for task in visible {
        let mark = if task.completed { "[x]" } else { "[ ]" };
        let text = if task.completed {
            task.text.as_str().red().strikethrough()
        } else {
            task.text.as_str().normal()
        };
        lines.push(format!("{:>4} {} {}", task.id, mark, text));
    }

    lines.push(format!(
        "{} items left   filter: {}",
        store.items_left(),
        filter_bar(store.filter())
    ));

    if let Some(edit) = store.edit_session() {
        lines.push(format!("{} #{}: {:?}", "editing".cyan(), edit.task_id, edit.text));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn filter_bar(current: FilterMode) -> String {
    FilterMode::ALL
        .iter()
        .map(|mode| {
            if *mode == current {
                format!("[{}]", mode).bold().to_string()
            } else {
                mode.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn plain(store: &TaskListStore) -> String {
        colored::control::set_override(false);
        render(store)
    }

    #[test]
    fn test_render_empty() {
        let store = TaskListStore::new();
        let out = plain(&store);
        assert!(out.contains("(nothing to show)"));
        assert!(out.contains("0 items left"));
    }

    #[test]
    fn test_render_tasks_and_notification() {
        let mut store = TaskListStore::with_clock(Config::default(), || 0);
        let a = store.add("buy milk").unwrap();
        store.add("walk dog");
        store.toggle_complete(a);

        let out = plain(&store);
        assert!(out.contains("Todo added successfully!"));
        assert!(out.contains("[x] buy milk"));
        assert!(out.contains("[ ] walk dog"));
        assert!(out.contains("2 items left"));
        assert!(out.contains("[all] active completed"));
    }

    #[test]
    fn test_render_line_order() {
        let mut store = TaskListStore::with_clock(Config::default(), || 0);
        let id = store.add("first").unwrap();
        store.add("second");
        store.begin_edit(id);

        let out = plain(&store);
        assert!(out.ends_with('\n'));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "✔ Todo added successfully!");
        assert_eq!(lines[1], "   1 [ ] first");
        assert_eq!(lines[2], "   2 [ ] second");
        assert!(lines[3].starts_with("2 items left"));
        assert!(lines[4].starts_with("editing #1"));
    }

    #[test]
    fn test_render_edit_session() {
        let mut store = TaskListStore::new();
        let id = store.add("draft").unwrap();
        store.begin_edit(id);
        store.set_filter(FilterMode::Active);

        let out = plain(&store);
        assert!(out.contains("editing #1: \"draft\""));
        assert!(out.contains("all [active] completed"));
    }
}
