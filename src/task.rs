use std::collections::HashSet;

use tracing::{debug, warn};

use crate::dataset::PosetDataset;
use crate::error::{PosetError, Result};
use crate::item::Item;
use crate::rule::TargetRule;

/// Scenario a task describes, read from markers in its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// `"ti"`: an explicit ranking is supplied
    TransitiveInference,
    /// `"si"`: rankings are derived from structure
    StructuralInference,
}

impl TaskKind {
    /// Case-insensitive; exactly one of `"ti"` and `"si"` must appear.
    pub fn from_name(task_name: &str) -> Result<Self> {
        let name = task_name.to_lowercase();
        match (name.contains("ti"), name.contains("si")) {
            (true, false) => Ok(TaskKind::TransitiveInference),
            (false, true) => Ok(TaskKind::StructuralInference),
            (true, true) => Err(PosetError::ContractViolation(format!(
                "task name {:?} contains both the \"ti\" and \"si\" markers",
                task_name
            ))),
            (false, false) => Err(PosetError::ContractViolation(format!(
                "task name {:?} must contain \"ti\" or \"si\"",
                task_name
            ))),
        }
    }
}

/// Builds ranked itemsets and their pair datasets for one scenario.
#[derive(Debug, Clone)]
pub struct Task {
    name: String,
    kind: TaskKind,
    ground_set: Vec<Vec<f64>>,
    ranking: Option<Vec<i64>>,
    target_rule: TargetRule,
}

impl Task {
    /// Validates the name marker. A ranking given to a structural-inference
    /// task is logged and dropped. `target_rule` defaults to "left outranks right".
    pub fn new(
        task_name: &str,
        ground_set: Vec<Vec<f64>>,
        ranking: Option<Vec<i64>>,
        target_rule: Option<TargetRule>,
    ) -> Result<Self> {
        let kind = TaskKind::from_name(task_name)?;
        let ranking = match (kind, ranking) {
            (TaskKind::StructuralInference, Some(_)) => {
                warn!(
                    "Explicit rankings should not be given to SI task {:?}; ignoring",
                    task_name
                );
                None
            }
            (_, ranking) => ranking,
        };

        Ok(Self {
            name: task_name.to_lowercase(),
            kind,
            ground_set,
            ranking,
            target_rule: target_rule.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn ground_set(&self) -> &[Vec<f64>] {
        &self.ground_set
    }

    pub fn ranking(&self) -> Option<&[i64]> {
        self.ranking.as_deref()
    }

    pub fn target_rule(&self) -> &TargetRule {
        &self.target_rule
    }

    /// Trees or DAGs of chains.
    pub fn construct_tree(&self) -> Result<()> {
        Err(PosetError::NotImplemented("poset tree construction"))
    }

    /// One item per ground-set element on the implicit chain, ranked as given.
    ///
    /// Unique ids default to the rank, so a ranking with ties is rejected.
    pub fn initialize_itemset(&self) -> Result<Vec<Item>> {
        match self.kind {
            TaskKind::TransitiveInference => {
                let ranking = self.ranking.as_ref().ok_or_else(|| {
                    PosetError::ContractViolation(format!(
                        "transitive-inference task {:?} needs a ranking",
                        self.name
                    ))
                })?;
                if ranking.len() != self.ground_set.len() {
                    return Err(PosetError::ContractViolation(format!(
                        "ranking has {} entries but the ground set has {}",
                        ranking.len(),
                        self.ground_set.len()
                    )));
                }
                let mut seen = HashSet::with_capacity(ranking.len());
                if let Some(rank) = ranking.iter().find(|&&rank| !seen.insert(rank)) {
                    return Err(PosetError::ContractViolation(format!(
                        "rank {} appears more than once in the ranking of task {:?}",
                        rank, self.name
                    )));
                }
                let items: Vec<Item> = self
                    .ground_set
                    .iter()
                    .zip(ranking)
                    .map(|(value, &rank)| Item::new(value.clone(), rank))
                    .collect();
                debug!("Initialized {} items for task {:?}", items.len(), self.name);
                Ok(items)
            }
            TaskKind::StructuralInference => Err(PosetError::NotImplemented(
                "itemset initialization for structural-inference tasks",
            )),
        }
    }

    pub fn master_dataset(&self, itemset: Vec<Item>) -> Result<PosetDataset> {
        PosetDataset::from_itemset(self.target_rule.clone(), itemset)
    }
}
