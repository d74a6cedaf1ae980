//! Purchase arithmetic: subscription basket, one-time quotes, family roster.

mod family;
mod single;
mod subscription;

pub use family::{FamilyError, FamilyMember, FamilyRoster, MAX_FAMILY_MEMBERS};
pub use single::{SinglePurchase, CASE_PRICE_KRW, STAND_PRICE_KRW};
pub use subscription::{
    default_basket, BasketItem, DeliveryCycle, Subscription, SubscriptionError,
    MAX_DELIVERY_DAY, MIN_DELIVERY_DAY, SUBSCRIPTION_DISCOUNT_RATE,
};
