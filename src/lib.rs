//! Type E thermocouple conversion library
//!
//! Implements the ITS-90 polynomial approximation for Type E thermocouples:
//! direct lookup (temperature to thermoelectric voltage), inverse lookup
//! (voltage to temperature), and cold-junction compensation, in Celsius and
//! Fahrenheit.
//!
//! The crate is pure computation over constant coefficient tables. The
//! hardware sampling loop (ADC, amplifier gain, ambient reference sensor)
//! belongs to the caller:
//!
//! ```ignore
//! let tc = TypeE::new();
//! let mv = read_amplifier_mv();
//! let ambient_c = read_ambient_c();
//! match tc.compensated_celsius(mv, ambient_c) {
//!     Ok(temp_c) => info!("tip temperature: {} C", temp_c),
//!     Err(Error::OutOfRange) => warn!("signal outside table domain"),
//! }
//! ```
//!
//! Every fallible operation returns `Result` rather than a reserved error
//! value, so an out-of-range ambient reading cannot silently corrupt a
//! compensated result.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod converter;
pub mod its90;
pub mod units;

pub use converter::{Error, TypeE};
pub use units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
