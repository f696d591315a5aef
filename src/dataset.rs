use std::collections::HashSet;
use std::sync::OnceLock;

use ordermap::OrderMap;
use tracing::debug;

use crate::error::{PosetError, Result};
use crate::item::Item;
use crate::rule::TargetRule;

/// One materialised pair: left payload followed by right payload, and the
/// label the target rule assigns to `(left, right)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub features: Vec<f64>,
    pub label: u8,
}

#[derive(Debug)]
struct PairPartition {
    adjacent: Vec<usize>,
    non_adjacent: Vec<usize>,
}

/// Every ordered pair of distinct items from one chain, with a stable index.
///
/// Index `k` is the `k`-th 2-permutation of the sorted itemset in
/// lexicographic position order, so the index space is `[0, n(n-1))`.
#[derive(Debug)]
pub struct PosetDataset {
    /// Items sorted by `(rank, unique_id)`
    itemset: Vec<Item>,
    target_rule: TargetRule,
    /// Positions into `itemset`, one entry per index
    unique_pairs: Vec<(usize, usize)>,
    /// Forward index: idx -> (left unique_id, right unique_id)
    idx_to_pair: Vec<(i64, i64)>,
    /// Reverse index in enumeration order: (left unique_id, right unique_id) -> idx
    pair_to_idx: OrderMap<(i64, i64), usize>,
    /// Adjacent / non-adjacent split, filled on first access
    partition: OnceLock<PairPartition>,
}

impl PosetDataset {
    /// Builds the dataset from exactly one of an itemset or a chain collection.
    ///
    /// Empty collections count as absent. Chain collections are not supported yet.
    pub fn new(
        target_rule: TargetRule,
        itemset: Option<Vec<Item>>,
        chains: Option<Vec<Vec<Item>>>,
    ) -> Result<Self> {
        let itemset = itemset.filter(|items| !items.is_empty());
        let chains = chains.filter(|chains| !chains.is_empty());
        match (itemset, chains) {
            (None, None) => Err(PosetError::ContractViolation(
                "either an itemset or a set of chains must be passed in".to_string(),
            )),
            (Some(_), Some(_)) => Err(PosetError::ContractViolation(
                "pass an itemset or a set of chains, not both".to_string(),
            )),
            (None, Some(_)) => Err(PosetError::NotImplemented("dataset construction from chains")),
            (Some(items), None) => Self::build(target_rule, items),
        }
    }

    pub fn from_itemset(target_rule: TargetRule, itemset: Vec<Item>) -> Result<Self> {
        Self::new(target_rule, Some(itemset), None)
    }

    fn build(target_rule: TargetRule, mut itemset: Vec<Item>) -> Result<Self> {
        if let Some(first) = itemset.first() {
            if let Some(other) = itemset.iter().find(|item| !item.same_chain(first)) {
                return Err(PosetError::ContractViolation(format!(
                    "items are not comparable: itemset mixes chain {} and chain {}",
                    first.chain_id(),
                    other.chain_id()
                )));
            }
        }

        let mut seen = HashSet::with_capacity(itemset.len());
        for item in &itemset {
            if !seen.insert(item.unique_id()) {
                return Err(PosetError::ContractViolation(format!(
                    "unique_id {} appears more than once in the itemset",
                    item.unique_id()
                )));
            }
        }

        itemset.sort_by_key(|item| (item.rank(), item.unique_id()));

        let n = itemset.len();
        let mut unique_pairs = Vec::with_capacity(n * n.saturating_sub(1));
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    unique_pairs.push((i, j));
                }
            }
        }

        let idx_to_pair: Vec<(i64, i64)> = unique_pairs
            .iter()
            .map(|&(i, j)| (itemset[i].unique_id(), itemset[j].unique_id()))
            .collect();
        let pair_to_idx: OrderMap<(i64, i64), usize> = idx_to_pair
            .iter()
            .enumerate()
            .map(|(idx, &pair)| (pair, idx))
            .collect();

        debug!("Built poset dataset: {} items, {} pairs", n, idx_to_pair.len());

        Ok(Self {
            itemset,
            target_rule,
            unique_pairs,
            idx_to_pair,
            pair_to_idx,
            partition: OnceLock::new(),
        })
    }

    /// Number of ordered pairs, `n(n-1)`.
    pub fn len(&self) -> usize {
        self.idx_to_pair.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idx_to_pair.is_empty()
    }

    pub fn itemset(&self) -> &[Item] {
        &self.itemset
    }

    pub fn target_rule(&self) -> &TargetRule {
        &self.target_rule
    }

    /// The `(left, right)` items behind an index.
    pub fn pair(&self, idx: usize) -> Option<(&Item, &Item)> {
        self.unique_pairs
            .get(idx)
            .map(|&(i, j)| (&self.itemset[i], &self.itemset[j]))
    }

    /// `(left unique_id, right unique_id)` for an index.
    pub fn idx_to_pair(&self, idx: usize) -> Option<(i64, i64)> {
        self.idx_to_pair.get(idx).copied()
    }

    /// Index of the ordered pair of unique ids.
    pub fn pair_to_idx(&self, left: i64, right: i64) -> Option<usize> {
        self.pair_to_idx.get(&(left, right)).copied()
    }

    /// (adjacent, non-adjacent) indices. Adjacent means the ranks differ by
    /// exactly one; equal ranks are never adjacent. Computed once.
    pub fn types_of_pairs_partition(&self) -> (&[usize], &[usize]) {
        let partition = self.partition.get_or_init(|| self.compute_partition());
        (
            partition.adjacent.as_slice(),
            partition.non_adjacent.as_slice(),
        )
    }

    fn compute_partition(&self) -> PairPartition {
        let mut adjacent = Vec::new();
        let mut non_adjacent = Vec::new();
        for (idx, &(i, j)) in self.unique_pairs.iter().enumerate() {
            if self.itemset[i].rank().abs_diff(self.itemset[j].rank()) == 1 {
                adjacent.push(idx);
            } else {
                non_adjacent.push(idx);
            }
        }
        debug!(
            "Partitioned {} pairs: {} adjacent, {} non-adjacent",
            self.len(),
            adjacent.len(),
            non_adjacent.len()
        );
        PairPartition {
            adjacent,
            non_adjacent,
        }
    }

    /// Adjacent pairs form the training split.
    pub fn train_indices(&self) -> &[usize] {
        self.types_of_pairs_partition().0
    }

    /// Non-adjacent pairs form the test split.
    pub fn test_indices(&self) -> &[usize] {
        self.types_of_pairs_partition().1
    }

    /// Materialises the pair at `idx`.
    pub fn get(&self, idx: usize) -> Result<Example> {
        let (left, right) = self.pair(idx).ok_or(PosetError::IndexOutOfRange {
            index: idx,
            len: self.len(),
        })?;
        let label = u8::from(self.target_rule.evaluate(left, right)?);
        let mut features = Vec::with_capacity(left.value().len() + right.value().len());
        features.extend_from_slice(left.value());
        features.extend_from_slice(right.value());
        Ok(Example { features, label })
    }

    /// Lazily materialises the given indices, in order.
    pub fn examples<'a>(
        &'a self,
        indices: &'a [usize],
    ) -> impl Iterator<Item = Result<Example>> + 'a {
        indices.iter().map(move |&idx| self.get(idx))
    }

    pub fn train_examples(&self) -> impl Iterator<Item = Result<Example>> + '_ {
        self.examples(self.train_indices())
    }

    pub fn test_examples(&self) -> impl Iterator<Item = Result<Example>> + '_ {
        self.examples(self.test_indices())
    }
}
