// Connector registry and exports

pub mod vnpay;

pub use vnpay::Vnpay;
