//! Subscription Context - 订阅

mod entities;
mod value_objects;

pub use entities::{Subscription, SubscriptionDraft, SubscriptionPatch, DEFAULT_CURRENCY};
pub use value_objects::{BillingCycle, SubscriptionId};
