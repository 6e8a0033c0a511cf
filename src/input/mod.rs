//! Weight entry input handling
//!
//! Converts raw keypad keystrokes into display strings and committed weights.

pub mod keypad;

pub use keypad::{format_weight, parse_weight, DigitBuffer};
