use jarvis_history::{JarvisError, Result};

use super::purchase::{Money, Purchase};

/// In-memory list of paid purchases
///
/// Indices exposed to callers are one-based, matching what the user sees in
/// the displayed list. Single-threaded; owned by the `Model` aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinanceTracker {
    purchases: Vec<Purchase>,
}

impl FinanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a purchase to the end of the list
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the purchase would push the total spent
    /// past what `Money` can represent. The list is left unchanged.
    pub fn add_purchase(&mut self, purchase: Purchase) -> Result<()> {
        self.check_total_with(&purchase)?;
        self.purchases.push(purchase);
        Ok(())
    }

    /// Insert a purchase so that it ends up at the given one-based index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` unless `1 <= index <= len + 1`, or
    /// `InvalidInput` if the total spent would overflow.
    pub fn insert_purchase(&mut self, index: usize, purchase: Purchase) -> Result<()> {
        if index == 0 || index > self.purchases.len() + 1 {
            return Err(JarvisError::IndexOutOfBounds {
                index,
                len: self.purchases.len(),
            });
        }
        self.check_total_with(&purchase)?;
        self.purchases.insert(index - 1, purchase);
        Ok(())
    }

    /// Get the purchase at a one-based index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if no purchase sits at `index`.
    pub fn get_purchase(&self, index: usize) -> Result<&Purchase> {
        index
            .checked_sub(1)
            .and_then(|i| self.purchases.get(i))
            .ok_or(JarvisError::IndexOutOfBounds {
                index,
                len: self.purchases.len(),
            })
    }

    /// Remove and return the purchase at a one-based index
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if no purchase sits at `index`.
    pub fn delete_purchase(&mut self, index: usize) -> Result<Purchase> {
        self.get_purchase(index)?;
        Ok(self.purchases.remove(index - 1))
    }

    /// Remove the most recently added purchase equal to `purchase`
    ///
    /// Returns the one-based index it was removed from.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` if no equal purchase is tracked.
    pub fn remove_purchase(&mut self, purchase: &Purchase) -> Result<usize> {
        let position = self
            .purchases
            .iter()
            .rposition(|p| p == purchase)
            .ok_or_else(|| JarvisError::EntityNotFound {
                entity: "Purchase".to_string(),
                id: purchase.description().to_string(),
            })?;
        self.purchases.remove(position);
        Ok(position + 1)
    }

    pub fn has_purchase(&self, purchase: &Purchase) -> bool {
        self.purchases.contains(purchase)
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.purchases.is_empty()
    }

    /// Sum of every tracked purchase
    ///
    /// Never overflows: additions that would are rejected up front.
    pub fn total_spent(&self) -> Money {
        Money::from_cents(
            self.purchases
                .iter()
                .fold(0u64, |total, p| total.saturating_add(p.money_spent().cents())),
        )
    }

    fn check_total_with(&self, purchase: &Purchase) -> Result<()> {
        self.total_spent()
            .cents()
            .checked_add(purchase.money_spent().cents())
            .map(|_| ())
            .ok_or_else(|| JarvisError::InvalidInput {
                reason: format!(
                    "Adding {} would exceed the maximum total spent",
                    purchase
                ),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn purchase(description: &str, amount: &str) -> Purchase {
        Purchase::new(description, amount).unwrap()
    }

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = FinanceTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.total_spent(), Money::from_cents(0));
    }

    #[test]
    fn test_get_and_delete_are_one_based() {
        let mut tracker = FinanceTracker::new();
        tracker.add_purchase(purchase("coffee", "1.50")).unwrap();
        tracker.add_purchase(purchase("lunch", "5")).unwrap();

        assert_eq!(tracker.get_purchase(1).unwrap().description(), "coffee");
        let removed = tracker.delete_purchase(2).unwrap();
        assert_eq!(removed.description(), "lunch");
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut tracker = FinanceTracker::new();
        tracker.add_purchase(purchase("coffee", "1.50")).unwrap();

        assert_eq!(
            tracker.get_purchase(0),
            Err(JarvisError::IndexOutOfBounds { index: 0, len: 1 })
        );
        assert!(matches!(
            tracker.delete_purchase(2),
            Err(JarvisError::IndexOutOfBounds { index: 2, len: 1 })
        ));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_insert_at_end_and_middle() {
        let mut tracker = FinanceTracker::new();
        tracker.add_purchase(purchase("a", "1")).unwrap();
        tracker.insert_purchase(2, purchase("c", "3")).unwrap();
        tracker.insert_purchase(2, purchase("b", "2")).unwrap();

        let names: Vec<_> = tracker.purchases().iter().map(|p| p.description()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(tracker.insert_purchase(5, purchase("x", "1")).is_err());
    }

    #[test]
    fn test_remove_purchase_takes_latest_match() {
        let mut tracker = FinanceTracker::new();
        let coffee = purchase("coffee", "1.50");
        tracker.add_purchase(coffee.clone()).unwrap();
        tracker.add_purchase(purchase("lunch", "5")).unwrap();
        tracker.add_purchase(coffee.clone()).unwrap();

        assert_eq!(tracker.remove_purchase(&coffee).unwrap(), 3);
        assert_eq!(tracker.len(), 2);
        assert!(tracker.has_purchase(&coffee));

        let missing = purchase("dinner", "9");
        assert!(matches!(
            tracker.remove_purchase(&missing),
            Err(JarvisError::EntityNotFound { .. })
        ));
    }

    #[test]
    fn test_total_spent() {
        let mut tracker = FinanceTracker::new();
        tracker.add_purchase(purchase("coffee", "1.50")).unwrap();
        tracker.add_purchase(purchase("lunch", "5.25")).unwrap();
        assert_eq!(tracker.total_spent().to_string(), "$6.75");
    }

    #[test]
    fn test_total_overflow_rejected_without_change() {
        let mut tracker = FinanceTracker::new();
        let yacht = purchase("yacht", "100000000000000000");
        tracker.add_purchase(yacht.clone()).unwrap();

        let err = tracker.add_purchase(yacht.clone()).unwrap_err();
        assert!(matches!(err, JarvisError::InvalidInput { .. }));
        assert!(tracker.insert_purchase(1, yacht.clone()).is_err());
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.total_spent(), yacht.money_spent());
    }
}
