use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::item::Item;

type RuleFn = dyn Fn(&Item, &Item) -> Result<bool> + Send + Sync;

/// Ground-truth relation for an ordered pair `(left, right)`.
///
/// Rules return `Result` so that a contract violation raised while comparing
/// (e.g. items on different chains) reaches the caller instead of becoming a label.
#[derive(Clone)]
pub struct TargetRule(Arc<RuleFn>);

impl TargetRule {
    pub fn new<F>(rule: F) -> Self
    where
        F: Fn(&Item, &Item) -> Result<bool> + Send + Sync + 'static,
    {
        Self(Arc::new(rule))
    }

    /// `left` outranks `right`.
    pub fn outranks() -> Self {
        Self::new(|left, right| left.outranks(right))
    }

    pub fn evaluate(&self, left: &Item, right: &Item) -> Result<bool> {
        (self.0)(left, right)
    }
}

impl Default for TargetRule {
    fn default() -> Self {
        Self::outranks()
    }
}

impl fmt::Debug for TargetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TargetRule(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PosetError;

    #[test]
    fn test_default_rule_is_outranks() {
        let rule = TargetRule::default();
        let low = Item::new(vec![0.0], 0);
        let high = Item::new(vec![1.0], 1);
        assert!(rule.evaluate(&high, &low).unwrap());
        assert!(!rule.evaluate(&low, &high).unwrap());
    }

    #[test]
    fn test_custom_rule() {
        let rule = TargetRule::new(|left, right| Ok(left.rank() + 1 == right.rank()));
        let a = Item::new(vec![0.0], 3);
        let b = Item::new(vec![1.0], 4);
        assert!(rule.evaluate(&a, &b).unwrap());
        assert!(!rule.evaluate(&b, &a).unwrap());
    }

    #[test]
    fn test_rule_propagates_contract_violation() {
        let rule = TargetRule::outranks();
        let a = Item::new(vec![0.0], 0);
        let b = Item::with_ids(vec![1.0], 1, Some(5), None);
        assert!(matches!(
            rule.evaluate(&a, &b),
            Err(PosetError::ContractViolation(_))
        ));
    }
}
