use serde::Serialize;

use crate::error::{PosetError, Result};

/// One element of a poset.
///
/// Equality looks at the feature payload only. Ordering is by rank and is
/// only defined between items of the same chain, so it is exposed through
/// [`Item::outranks`] and [`Item::at_least`] rather than `PartialOrd`.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    /// Feature payload, passed through untouched
    value: Vec<f64>,
    /// Position within the chain
    rank: i64,
    /// Chain this item belongs to; 0 is the implicit chain
    chain_id: u64,
    /// Identifier unique across an itemset; defaults to the rank
    unique_id: i64,
}

impl Item {
    /// Item on the implicit chain, identified by its rank.
    pub fn new(value: Vec<f64>, rank: i64) -> Self {
        Self::with_ids(value, rank, None, None)
    }

    pub fn with_ids(
        value: Vec<f64>,
        rank: i64,
        chain_id: Option<u64>,
        unique_id: Option<i64>,
    ) -> Self {
        Self {
            value,
            rank,
            chain_id: chain_id.unwrap_or(0),
            unique_id: unique_id.unwrap_or(rank),
        }
    }

    pub fn value(&self) -> &[f64] {
        &self.value
    }

    pub fn rank(&self) -> i64 {
        self.rank
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn unique_id(&self) -> i64 {
        self.unique_id
    }

    /// Reads `bits` as a binary number, most significant bit first.
    ///
    /// ```
    /// use poset_pairs::Item;
    ///
    /// assert_eq!(Item::decimal_from_bits(&[1, 0, 1, 1]).unwrap(), 11);
    /// assert_eq!(Item::decimal_from_bits(&[0, 0, 0]).unwrap(), 0);
    /// ```
    pub fn decimal_from_bits(bits: &[u8]) -> Result<u64> {
        if bits.is_empty() {
            return Err(PosetError::InvalidBits("empty bit sequence".to_string()));
        }
        bits.iter().enumerate().try_fold(0u64, |acc, (pos, &bit)| {
            if bit > 1 {
                return Err(PosetError::InvalidBits(format!(
                    "entry {} is {}, expected 0 or 1",
                    pos, bit
                )));
            }
            acc.checked_mul(2)
                .and_then(|shifted| shifted.checked_add(u64::from(bit)))
                .ok_or_else(|| {
                    PosetError::InvalidBits(format!("{} bits overflow u64", bits.len()))
                })
        })
    }

    pub fn same_chain(&self, other: &Item) -> bool {
        self.chain_id == other.chain_id
    }

    /// Payload equality; rank, chain and id are ignored.
    pub fn equals(&self, other: &Item) -> bool {
        self.value == other.value
    }

    /// `true` if `self` has the higher rank. Both items must share a chain.
    pub fn outranks(&self, other: &Item) -> Result<bool> {
        self.require_same_chain(other)?;
        Ok(self.rank > other.rank)
    }

    /// `outranks(other) || equals(other)`, with the same chain precondition.
    pub fn at_least(&self, other: &Item) -> Result<bool> {
        Ok(self.outranks(other)? || self.equals(other))
    }

    /// Rank derived from a one-hot feature encoding.
    pub fn rank_from_feature_repr(_feat: &[f64]) -> Result<i64> {
        Err(PosetError::NotImplemented("rank from feature representation"))
    }

    fn require_same_chain(&self, other: &Item) -> Result<()> {
        if self.same_chain(other) {
            Ok(())
        } else {
            Err(PosetError::ContractViolation(format!(
                "items are not comparable: chain {} vs chain {}",
                self.chain_id, other.chain_id
            )))
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
