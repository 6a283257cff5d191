//! Ticket Office - Venue ticket purchasing
//!
//! This crate validates ticket purchase requests against the venue's business
//! rules, prices them, and hands the totals to the payment and seat
//! reservation services.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
