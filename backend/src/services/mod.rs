//! Business logic services
//!
//! Services wrap the shared calculators and the catalog; handlers only
//! translate HTTP to service calls.

pub mod calculations;
pub mod catalog;
pub mod daily;

pub use calculations::CalculationService;
pub use catalog::Catalog;
pub use daily::DailyLogService;
