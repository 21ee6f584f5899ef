use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, RecordId};

/// A stocked product.
///
/// `qty` is unsigned: the quantity on hand can never be negative, and the
/// checked mutations below fail instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub qty: u64,
    /// Unit price in smallest currency unit (e.g., cents).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl InventoryItem {
    pub fn new(id: RecordId, name: impl Into<String>, qty: u64) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            qty,
            price: None,
            category: None,
        })
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add returned or restocked units.
    pub fn receive(&mut self, qty: u64) -> Result<(), DomainError> {
        self.qty = self
            .qty
            .checked_add(qty)
            .ok_or_else(|| DomainError::invariant("stock quantity overflow"))?;
        Ok(())
    }

    /// Remove sold units. Fails without mutating when stock is insufficient.
    pub fn deduct(&mut self, qty: u64) -> Result<(), DomainError> {
        self.qty = self
            .qty
            .checked_sub(qty)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(qty: u64) -> InventoryItem {
        InventoryItem::new(RecordId::new(), "Garden hose", qty).unwrap()
    }

    #[test]
    fn name_cannot_be_blank() {
        let err = InventoryItem::new(RecordId::new(), "  ", 1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn deduct_reduces_stock() {
        let mut it = item(10);
        it.deduct(3).unwrap();
        assert_eq!(it.qty, 7);
    }

    #[test]
    fn deduct_below_zero_fails_and_leaves_qty() {
        let mut it = item(2);
        let err = it.deduct(3).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(it.qty, 2);
    }

    #[test]
    fn receive_adds_stock() {
        let mut it = item(5);
        it.receive(2).unwrap();
        assert_eq!(it.qty, 7);
    }

    #[test]
    fn receive_overflow_fails() {
        let mut it = item(u64::MAX);
        assert!(it.receive(1).is_err());
        assert_eq!(it.qty, u64::MAX);
    }

    #[test]
    fn persisted_shape_is_camel_case() {
        let it = item(4).with_price(1250).with_category("tools");
        let json = serde_json::to_value(&it).unwrap();
        assert!(json.get("qty").is_some());
        assert_eq!(json["price"], 1250);
        assert_eq!(json["category"], "tools");
    }
}
