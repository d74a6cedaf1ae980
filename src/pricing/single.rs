//! One-time purchase quote with optional add-ons.

use serde::{Deserialize, Serialize};

pub const CASE_PRICE_KRW: u32 = 4_500;
pub const STAND_PRICE_KRW: u32 = 12_000;

/// Selection state for a one-time order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinglePurchase {
    pub base_price_krw: u32,
    pub quantity: u32,
    pub with_case: bool,
    pub with_stand: bool,
}

impl SinglePurchase {
    pub fn new(base_price_krw: u32) -> Self {
        Self {
            base_price_krw,
            quantity: 1,
            with_case: false,
            with_stand: false,
        }
    }

    /// Quantity floor is one, matching the basket behavior.
    pub fn adjust_quantity(&mut self, delta: i32) {
        let next = i64::from(self.quantity) + i64::from(delta);
        self.quantity = next.max(1) as u32;
    }

    pub fn addons_krw(&self) -> u32 {
        let mut sum = 0;
        if self.with_case {
            sum += CASE_PRICE_KRW;
        }
        if self.with_stand {
            sum += STAND_PRICE_KRW;
        }
        sum
    }

    pub fn total_krw(&self) -> u32 {
        self.base_price_krw * self.quantity + self.addons_krw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_quote() {
        let order = SinglePurchase::new(13_900);
        assert_eq!(order.total_krw(), 13_900);
    }

    #[test]
    fn test_addons_add_to_total() {
        let mut order = SinglePurchase::new(13_900);
        order.with_case = true;
        assert_eq!(order.total_krw(), 18_400);
        order.with_stand = true;
        assert_eq!(order.total_krw(), 30_400);
    }

    #[test]
    fn test_quantity_scales_base_only() {
        let mut order = SinglePurchase::new(13_900);
        order.with_case = true;
        order.adjust_quantity(2);
        assert_eq!(order.quantity, 3);
        assert_eq!(order.total_krw(), 13_900 * 3 + 4_500);

        order.adjust_quantity(-10);
        assert_eq!(order.quantity, 1);
    }
}
