//! Configuration module.

mod i18n;

pub use i18n::{get_messages, Messages, MESSAGES_EN, MESSAGES_KO};
