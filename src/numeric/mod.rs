// ============================================================================
// Numeric Module
// Extended-range decimal arithmetic for currency values
// ============================================================================
//
// This module provides:
// - DecimalFloat: normalized mantissa/exponent values past native float range
// - CurrencyRecord: the JSON-safe persisted form
// - Notation/format/parse: player-facing rendering and lenient input parsing
// - NumericError: the parse-boundary error type
//
// Design principles:
// - Every constructor funnels through one normalizer; an invalid value
//   cannot exist downstream of it
// - Arithmetic is total: non-finite inputs sanitize to zero, the currency
//   domain clamps at zero, division by zero yields zero
// - Values are immutable; operations return new values

mod decimal_float;
mod errors;
mod notation;

pub use decimal_float::{Currency, CurrencyRecord, DecimalFloat};
pub use errors::{NumericError, NumericResult};
pub use notation::{format_amount, format_scientific, format_suffix, parse_amount, Notation};
