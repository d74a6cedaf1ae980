//! Subscription basket and monthly cost arithmetic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subscribers get 15% off the combined monthly cost.
pub const SUBSCRIPTION_DISCOUNT_RATE: f64 = 0.15;

/// Delivery day must avoid month-end gaps.
pub const MIN_DELIVERY_DAY: u8 = 1;
pub const MAX_DELIVERY_DAY: u8 = 28;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("delivery day {0} outside 1..=28")]
    DeliveryDayOutOfRange(u8),
}

/// How often an item ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryCycle {
    Monthly,
    EveryTwoMonths,
    Quarterly,
}

impl DeliveryCycle {
    /// Cycle length in months, used to spread the price.
    pub fn months(&self) -> u32 {
        match self {
            DeliveryCycle::Monthly => 1,
            DeliveryCycle::EveryTwoMonths => 2,
            DeliveryCycle::Quarterly => 3,
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            DeliveryCycle::Monthly => "매월",
            DeliveryCycle::EveryTwoMonths => "2개월마다",
            DeliveryCycle::Quarterly => "3개월마다",
        }
    }
}

/// One line of the subscription basket.
#[derive(Debug, Clone, Serialize)]
pub struct BasketItem {
    pub name: &'static str,
    pub variant: &'static str,
    pub price_krw: u32,
    pub quantity: u32,
    pub cycle: DeliveryCycle,
}

impl BasketItem {
    /// Price spread over the delivery cycle, rounded to the nearest won.
    pub fn monthly_cost_krw(&self) -> u32 {
        let spread = f64::from(self.price_krw * self.quantity) / f64::from(self.cycle.months());
        spread.round() as u32
    }
}

/// The subscription basket plus delivery preferences.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub items: Vec<BasketItem>,
    pub delivery_day: u8,
}

impl Default for Subscription {
    fn default() -> Self {
        Self {
            items: default_basket(),
            delivery_day: 5,
        }
    }
}

impl Subscription {
    /// Sum of per-item monthly costs before discount.
    pub fn monthly_total_krw(&self) -> u32 {
        self.items.iter().map(BasketItem::monthly_cost_krw).sum()
    }

    /// Discount amount, rounded to the nearest won.
    pub fn discount_krw(&self) -> u32 {
        (f64::from(self.monthly_total_krw()) * SUBSCRIPTION_DISCOUNT_RATE).round() as u32
    }

    /// Monthly total after the subscriber discount.
    pub fn final_monthly_krw(&self) -> u32 {
        self.monthly_total_krw() - self.discount_krw()
    }

    /// Quantity never drops below one; removal is a separate action.
    pub fn adjust_quantity(&mut self, index: usize, delta: i32) {
        if let Some(item) = self.items.get_mut(index) {
            let next = i64::from(item.quantity) + i64::from(delta);
            item.quantity = next.max(1) as u32;
        }
    }

    pub fn remove_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn set_delivery_day(&mut self, day: u8) -> Result<(), SubscriptionError> {
        if !(MIN_DELIVERY_DAY..=MAX_DELIVERY_DAY).contains(&day) {
            return Err(SubscriptionError::DeliveryDayOutOfRange(day));
        }
        self.delivery_day = day;
        Ok(())
    }
}

/// Basket the purchase page starts with.
pub fn default_basket() -> Vec<BasketItem> {
    vec![
        BasketItem {
            name: "Aquila Soft Precision 칫솔",
            variant: "Soft+ 미세모",
            price_krw: 12_000,
            quantity: 1,
            cycle: DeliveryCycle::Quarterly,
        },
        BasketItem {
            name: "치간칫솔",
            variant: "S 사이즈",
            price_krw: 4_500,
            quantity: 3,
            cycle: DeliveryCycle::Monthly,
        },
        BasketItem {
            name: "저자극 치약",
            variant: "120g",
            price_krw: 8_500,
            quantity: 1,
            cycle: DeliveryCycle::EveryTwoMonths,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_cost_spreads_over_cycle() {
        let basket = default_basket();
        // 12,000 quarterly -> 4,000 a month.
        assert_eq!(basket[0].monthly_cost_krw(), 4_000);
        // 4,500 x 3 monthly -> 13,500.
        assert_eq!(basket[1].monthly_cost_krw(), 13_500);
        // 8,500 every two months -> 4,250.
        assert_eq!(basket[2].monthly_cost_krw(), 4_250);
    }

    #[test]
    fn test_default_subscription_totals() {
        let sub = Subscription::default();
        assert_eq!(sub.monthly_total_krw(), 21_750);
        assert_eq!(sub.discount_krw(), 3_263);
        assert_eq!(sub.final_monthly_krw(), 18_487);
    }

    #[test]
    fn test_quantity_floor_is_one() {
        let mut sub = Subscription::default();
        sub.adjust_quantity(1, -10);
        assert_eq!(sub.items[1].quantity, 1);
        sub.adjust_quantity(1, 2);
        assert_eq!(sub.items[1].quantity, 3);
    }

    #[test]
    fn test_remove_item_changes_total() {
        let mut sub = Subscription::default();
        sub.remove_item(1);
        assert_eq!(sub.items.len(), 2);
        assert_eq!(sub.monthly_total_krw(), 8_250);
    }

    #[test]
    fn test_delivery_day_bounds() {
        let mut sub = Subscription::default();
        assert!(sub.set_delivery_day(1).is_ok());
        assert!(sub.set_delivery_day(28).is_ok());
        assert_eq!(
            sub.set_delivery_day(29),
            Err(SubscriptionError::DeliveryDayOutOfRange(29))
        );
        assert_eq!(
            sub.set_delivery_day(0),
            Err(SubscriptionError::DeliveryDayOutOfRange(0))
        );
        assert_eq!(sub.delivery_day, 28);
    }
}
