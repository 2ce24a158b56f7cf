// User actions as values, and their dispatch onto the store

use crate::filter::FilterMode;
use crate::store::TaskListStore;
use crate::task::TaskId;
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// One user action; each maps to exactly one store operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    Add { text: String },
    Input { text: String },
    Submit,
    Toggle { id: TaskId },
    Delete { id: TaskId },
    Edit { id: TaskId },
    EditText { text: String },
    Save,
    Cancel,
    ClearCompleted,
    Filter { mode: FilterMode },
    Dismiss,
}

/// Whether a dispatched command changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    Changed,
    Ignored,
}

impl From<bool> for Dispatched {
    fn from(changed: bool) -> Self {
        if changed { Dispatched::Changed } else { Dispatched::Ignored }
    }
}

/// Usage lines for the text syntax
pub const HELP: &str = "\
add <text>          add a task
input <text>        set the new-task input
submit              add the input as a task
toggle <id>         flip completion
delete <id>         remove a task
edit <id>           start editing a task
text <text>         change the text being edited
save                save the edit
cancel              discard the edit
clear               remove completed tasks
filter <mode>       show all, active or completed
dismiss             hide the notification";

impl Command {
    /// Parse a JSON command such as `{"cmd":"toggle","id":3}`
    pub fn from_json(line: &str) -> Result<Self> {
        serde_json::from_str(line).context("Failed to parse JSON command")
    }
}

fn parse_id(verb: &str, arg: &str) -> Result<TaskId> {
    if arg.is_empty() {
        return Err(eyre!("{} needs a task id", verb));
    }
    arg.parse::<TaskId>()
        .with_context(|| format!("Invalid task id for {}: {}", verb, arg))
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };
        let arg = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            // Text arguments keep their whitespace; add trims on its own, edits are verbatim
            "add" => Command::Add { text: rest.to_string() },
            "input" => Command::Input { text: rest.to_string() },
            "submit" => Command::Submit,
            "toggle" => Command::Toggle { id: parse_id(verb, arg)? },
            "delete" | "rm" => Command::Delete { id: parse_id(verb, arg)? },
            "edit" => Command::Edit { id: parse_id(verb, arg)? },
            "text" => Command::EditText { text: rest.to_string() },
            "save" => Command::Save,
            "cancel" => Command::Cancel,
            "clear" => Command::ClearCompleted,
            "filter" => Command::Filter { mode: arg.parse()? },
            "dismiss" => Command::Dismiss,
            "" => return Err(eyre!("Empty command")),
            other => return Err(eyre!("Unknown command: {}", other)),
        };

        Ok(command)
    }
}

impl TaskListStore {
    /// Run one command to completion
    pub fn dispatch(&mut self, command: Command) -> Dispatched {
        debug!(?command, "dispatch");
        match command {
            Command::Add { text } => self.add(&text).is_some().into(),
            Command::Input { text } => {
                self.set_input(text);
                Dispatched::Changed
            }
            Command::Submit => self.submit_input().is_some().into(),
            Command::Toggle { id } => self.toggle_complete(id).into(),
            Command::Delete { id } => {
                // Shows a notification even for unknown ids
                self.delete(id);
                Dispatched::Changed
            }
            Command::Edit { id } => self.begin_edit(id).into(),
            Command::EditText { text } => self.update_edit_text(text).into(),
            Command::Save => self.save_edit().is_some().into(),
            Command::Cancel => self.cancel_edit().into(),
            Command::ClearCompleted => {
                self.clear_completed();
                Dispatched::Changed
            }
            Command::Filter { mode } => {
                self.set_filter(mode);
                Dispatched::Changed
            }
            Command::Dismiss => self.dismiss_notification().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_commands() {
        assert_eq!(
            "add buy milk".parse::<Command>().unwrap(),
            Command::Add {
                text: "buy milk".to_string()
            }
        );
        assert_eq!("toggle 3".parse::<Command>().unwrap(), Command::Toggle { id: 3 });
        assert_eq!("rm 4".parse::<Command>().unwrap(), Command::Delete { id: 4 });
        assert_eq!("EDIT 2".parse::<Command>().unwrap(), Command::Edit { id: 2 });
        assert_eq!(
            "filter completed".parse::<Command>().unwrap(),
            Command::Filter {
                mode: FilterMode::Completed
            }
        );
        assert_eq!("clear".parse::<Command>().unwrap(), Command::ClearCompleted);
        assert_eq!("save".parse::<Command>().unwrap(), Command::Save);
    }

    #[test]
    fn test_parse_keeps_edit_text_verbatim() {
        assert_eq!(
            "text  two  spaces ".parse::<Command>().unwrap(),
            Command::EditText {
                text: " two  spaces ".to_string()
            }
        );
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add { text: String::new() });
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Command>().is_err());
        assert!("frobnicate 1".parse::<Command>().is_err());
        assert!("toggle".parse::<Command>().is_err());
        assert!("delete abc".parse::<Command>().is_err());
        assert!("filter someday".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_json_commands() {
        assert_eq!(
            Command::from_json(r#"{"cmd":"add","text":"buy milk"}"#).unwrap(),
            Command::Add {
                text: "buy milk".to_string()
            }
        );
        assert_eq!(
            Command::from_json(r#"{"cmd":"filter","mode":"active"}"#).unwrap(),
            Command::Filter {
                mode: FilterMode::Active
            }
        );
        assert_eq!(
            Command::from_json(r#"{"cmd":"clear_completed"}"#).unwrap(),
            Command::ClearCompleted
        );
        assert!(Command::from_json(r#"{"cmd":"toggle"}"#).is_err());
        assert!(Command::from_json("not json").is_err());
    }

    #[test]
    fn test_dispatch_session() {
        let mut store = TaskListStore::new();

        assert_eq!(store.dispatch("add   ".parse().unwrap()), Dispatched::Ignored);
        assert_eq!(store.dispatch("add a".parse().unwrap()), Dispatched::Changed);
        assert_eq!(store.dispatch("add b".parse().unwrap()), Dispatched::Changed);
        let a = store.tasks()[0].id;

        assert_eq!(store.dispatch(Command::Toggle { id: a }), Dispatched::Changed);
        assert_eq!(store.dispatch(Command::Toggle { id: 99 }), Dispatched::Ignored);
        assert_eq!(store.dispatch(Command::Edit { id: a }), Dispatched::Changed);
        assert_eq!(
            store.dispatch(Command::EditText {
                text: "a2".to_string()
            }),
            Dispatched::Changed
        );
        assert_eq!(store.dispatch(Command::Save), Dispatched::Changed);
        assert_eq!(store.dispatch(Command::Save), Dispatched::Ignored);
        assert_eq!(store.task(a).unwrap().text, "a2");

        store.dispatch(Command::ClearCompleted);
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text, "b");
    }

    #[test]
    fn test_dispatch_input_then_submit() {
        let mut store = TaskListStore::new();
        store.dispatch(Command::Input {
            text: " from input ".to_string(),
        });
        assert_eq!(store.input(), " from input ");
        assert_eq!(store.dispatch(Command::Submit), Dispatched::Changed);
        assert_eq!(store.tasks()[0].text, "from input");
        assert_eq!(store.input(), "");
    }

    #[test]
    fn test_dispatch_dismiss() {
        let mut store = TaskListStore::new();
        assert_eq!(store.dispatch(Command::Dismiss), Dispatched::Ignored);
        store.dispatch(Command::Delete { id: 1 });
        assert_eq!(store.dispatch(Command::Dismiss), Dispatched::Changed);
        assert!(store.notification().is_none());
    }
}
