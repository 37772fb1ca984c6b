//! Gateway connector implementations.

pub mod connectors;

pub use connectors::Vnpay;
