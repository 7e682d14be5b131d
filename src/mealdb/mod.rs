mod client;
pub mod normalize;
pub mod raw;

pub use client::{MealDbClient, MealDbClientBuilder};
pub use normalize::normalize_meal;
pub use raw::{RawMeal, MAX_INGREDIENTS};
