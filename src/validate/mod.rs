//! Format validators
//!
//! Stateless predicates over strings. They can be handed directly to
//! [`ClauseNode::refine`](crate::clause::ClauseNode::refine).
//!
//! Every string validator returns false for blank input.

mod date;
mod email;
mod number;

pub use date::{is_date, is_date_time, is_date_time_exact};
pub use email::is_email;
pub use number::{is_bool, is_decimal, is_double, is_float, is_int, is_long};
