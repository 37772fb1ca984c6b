use std::sync::Arc;

use connector_integration::Vnpay;

use crate::configs::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub vnpay: Vnpay,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            vnpay: Vnpay::new(),
        }
    }
}
