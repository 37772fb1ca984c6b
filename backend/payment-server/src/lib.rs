//! HTTP service exposing the gateway payment operations.

pub mod app;
pub mod configs;
pub mod error;
pub mod http;
pub mod logger;

/// Name of this service as it appears in log filtering directives.
#[macro_export]
macro_rules! service_name {
    () => {
        "payment_server"
    };
}
