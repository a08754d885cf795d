// ============================================================================
// Idle Economy Library
// Extended-range currency arithmetic and geometric-growth pricing
// ============================================================================

//! # Idle Economy
//!
//! The numeric core of an incremental-growth game: currency values that
//! outgrow native floats, and the escalating-cost economics built on top
//! of them.
//!
//! ## Features
//!
//! - **Extended-range decimal floats** stored as normalized
//!   `mantissa × 10^exponent` pairs, bounded only by an `i64` exponent
//! - **Total arithmetic**: non-finite inputs sanitize to zero, currency
//!   never goes negative, nothing panics inside the frame loop
//! - **Log-space pricing** with closed-form geometric-series costs and an
//!   algebraic affordability search that never overflow, however large the
//!   owned count grows
//! - **Player-facing notation**: suffix (`1.50K`) and scientific
//!   (`1.50e3`) rendering plus a lenient parser for typed amounts
//! - **JSON-safe persistence** via a `{mantissa, exponent}` record that
//!   degrades malformed saves to zero instead of failing the load
//!
//! ## Example
//!
//! ```rust
//! use idle_economy::prelude::*;
//!
//! // A building curve: base price 10, +15% per unit owned
//! let curve = GrowthCurve::building(DecimalFloat::from_number(10.0));
//! let mut wallet = Wallet::with_balance(DecimalFloat::from_number(1_000.0));
//!
//! // Size the largest affordable run, then commit it
//! let receipt = execute_max_purchase(&mut wallet, &curve, 0, &NoOpEventHandler)
//!     .expect("1000 affords several units at base price 10");
//! assert_eq!(receipt.quantity, 19);
//!
//! // The next unit is priced from the advanced owned count
//! let next = curve.price_at(receipt.owned_after);
//! assert_eq!(next.to_string(), "142");
//! ```

pub mod economy;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::economy::{
        execute_max_purchase, execute_purchase, GrowthCurve, PurchaseReceipt, Wallet,
        MAX_RUN_LENGTH,
    };
    pub use crate::interfaces::{
        EconomyEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{
        format_amount, parse_amount, Currency, CurrencyRecord, DecimalFloat, Notation,
        NumericError, NumericResult,
    };
}
