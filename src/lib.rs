//! # poset_pairs
//!
//! Pairwise comparison datasets drawn from ranked partially-ordered sets.
//!
//! A [`Task`] ranks a ground set of feature payloads into [`Item`]s on a
//! single chain. From those items a [`PosetDataset`] enumerates every ordered
//! pair with a stable integer index, labels pairs with a [`TargetRule`], and
//! splits the index space into adjacent pairs (ranks differ by one, the
//! training split) and non-adjacent pairs (the test split).
mod config;
mod dataset;
mod error;
mod item;
mod rule;
mod task;

pub use config::TaskConfig;
pub use dataset::{Example, PosetDataset};
pub use error::{PosetError, Result};
pub use item::Item;
pub use rule::TargetRule;
pub use task::{Task, TaskKind};
