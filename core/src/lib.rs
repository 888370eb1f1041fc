//! # Checkr Core
//!
//! The predicates evaluated by `checkr`. Every function here is pure:
//! no state, no I/O, same answer for the same input.
//!
//! * **[`parity`]**: even/odd classification of integers.
//! * **[`palindrome`]**: forward/backward comparison of normalized text.

pub mod palindrome;
pub mod parity;

pub use palindrome::is_palindrome;
pub use parity::is_even;
