// ============================================================================
// Economy Module
// Geometric-growth pricing and the purchase commit protocol
// ============================================================================

pub mod curve;
pub mod purchase;

pub use curve::{GrowthCurve, MAX_RUN_LENGTH};
pub use purchase::{execute_max_purchase, execute_purchase, PurchaseReceipt, Wallet};
