// View filter over the task collection

use crate::task::Task;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which tasks are visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// Whether a task passes this filter
    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" | "done" => Ok(FilterMode::Completed),
            other => Err(eyre!(
                "Invalid filter: {} (expected all, active or completed)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, completed: bool) -> Task {
        Task {
            id,
            text: format!("task {}", id),
            completed,
        }
    }

    #[test]
    fn test_filter_matches() {
        let open = task(1, false);
        let done = task(2, true);

        assert!(FilterMode::All.matches(&open));
        assert!(FilterMode::All.matches(&done));
        assert!(FilterMode::Active.matches(&open));
        assert!(!FilterMode::Active.matches(&done));
        assert!(!FilterMode::Completed.matches(&open));
        assert!(FilterMode::Completed.matches(&done));
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("Active".parse::<FilterMode>().unwrap(), FilterMode::Active);
        assert_eq!(" COMPLETED ".parse::<FilterMode>().unwrap(), FilterMode::Completed);
        assert!("pending".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_filter_display_round_trips() {
        for mode in FilterMode::ALL {
            assert_eq!(mode.to_string().parse::<FilterMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_filter_serde_lowercase() {
        assert_eq!(serde_json::to_string(&FilterMode::Active).unwrap(), "\"active\"");
        let mode: FilterMode = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(mode, FilterMode::Completed);
    }
}
