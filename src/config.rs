//! Task descriptions read from JSON

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::task::Task;

/// Everything needed to build a [`Task`] with the default target rule.
///
/// ```
/// use poset_pairs::TaskConfig;
///
/// let config = TaskConfig::from_json(
///     r#"{"task_name": "ti_example", "ground_set": [[0], [1]], "ranking": [0, 1]}"#,
/// ).unwrap();
/// assert_eq!(config.ground_set.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Must contain exactly one of the `ti` / `si` markers
    pub task_name: String,
    /// One feature payload per item
    pub ground_set: Vec<Vec<f64>>,
    /// Rank of each ground-set element (transitive inference only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranking: Option<Vec<i64>>,
}

impl TaskConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_task(self) -> Result<Task> {
        Task::new(&self.task_name, self.ground_set, self.ranking, None)
    }
}
