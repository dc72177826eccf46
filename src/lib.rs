//! Decimal counter on a multiplexed 4-digit 7-segment display.
//!
//! The display and counter logic lives in [`controller`], [`counter`] and
//! [`scanner`] and has no hardware dependency, so it can be exercised on the
//! host. The timer/GPIO binding for the ATmega128 board is in `main.rs`.
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controller;
pub mod counter;
pub mod drivers;
pub mod hal;
pub mod scanner;
