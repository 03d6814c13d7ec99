#![cfg_attr(not(test), no_std)]
// src/lib.rs

pub mod modes;
pub mod registers;
pub mod switches;

pub use modes::{DcOffsetCal, IfLpMode, IfMode};
