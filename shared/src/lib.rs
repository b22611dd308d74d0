//! Nutrition Tracker Shared Library
//!
//! Pure calculators (calorie targets, goal progress, macros, hydration,
//! daily totals) and the types used to exchange them between the backend,
//! the browser client and the WASM module.

pub mod daily;
pub mod energy;
pub mod errors;
pub mod hydration;
pub mod nutrition;
pub mod progress;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use daily::*;
pub use energy::*;
pub use errors::*;
pub use hydration::*;
pub use nutrition::*;
pub use progress::*;
