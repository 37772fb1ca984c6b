// VNPay Connector Implementation

pub mod constants;
pub mod transformers;

use common_utils::{
    errors::CustomResult,
    types::{AmountConvertor, MinorUnit, StringMinorUnit, StringMinorUnitForConnector},
};
use domain_types::{
    connector_types::{
        PaymentCallbackStatus, PaymentsCallbackData, PaymentsRedirectData,
        PaymentsRedirectResponse,
    },
    errors::ConnectorError,
    router_data::RouterData,
    types::Connectors,
};
use error_stack::ResultExt;

use self::transformers as vnpay;

/// VNPay hosted-checkout connector.
///
/// Both entry points are pure over their inputs apart from order-reference
/// generation and timestamping; they hold no state and are safe to call
/// concurrently.
#[derive(Clone)]
pub struct Vnpay {
    amount_converter: &'static (dyn AmountConvertor<Output = StringMinorUnit> + Sync),
    connector_name: &'static str,
}

impl Vnpay {
    pub fn new() -> Self {
        Self {
            amount_converter: &StringMinorUnitForConnector,
            connector_name: "vnpay",
        }
    }

    pub fn id(&self) -> &'static str {
        self.connector_name
    }

    pub fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.vnpay.base_url.as_ref()
    }

    /// Build the signed redirect URL authorizing a payment attempt.
    ///
    /// Returns the URL the customer's browser should follow, plus the
    /// generated merchant order reference. No side effects beyond that.
    pub fn build_payment_url(
        &self,
        req: &RouterData<PaymentsRedirectData>,
        connectors: &Connectors,
    ) -> CustomResult<PaymentsRedirectResponse, ConnectorError> {
        let base_url = self.base_url(connectors);
        if base_url.is_empty() {
            return Err(ConnectorError::InvalidConnectorConfig {
                config: "connectors.vnpay.base_url",
            }
            .into());
        }

        let auth = vnpay::VnpayAuth::try_from(&req.connector_auth_type)?;
        let amount = self
            .amount_converter
            .convert(
                MinorUnit::from_major_units(
                    req.request.amount,
                    constants::AMOUNT_MULTIPLIER,
                )
                .change_context(ConnectorError::AmountConversionFailed)?,
            )
            .change_context(ConnectorError::AmountConversionFailed)?;

        let request = vnpay::VnpayPaymentsRequest::try_from(vnpay::VnpayRouterData {
            amount,
            router_data: req,
        })?;
        let redirect_url = request.signed_redirect_url(base_url, &auth)?;

        Ok(PaymentsRedirectResponse {
            redirect_url,
            txn_ref: request.txn_ref,
        })
    }

    /// Authenticate a gateway return callback and classify the outcome.
    ///
    /// A signature mismatch (including an absent or malformed signature
    /// field) classifies as `Invalid`; a verified callback is `Success` only
    /// when the gateway reports transaction status
    /// [`constants::TRANSACTION_STATUS_SUCCESS`].
    pub fn verify_redirect_response(
        &self,
        req: &RouterData<PaymentsCallbackData>,
    ) -> CustomResult<PaymentCallbackStatus, ConnectorError> {
        let auth = vnpay::VnpayAuth::try_from(&req.connector_auth_type)?;
        Ok(vnpay::verify_callback(&req.request.params, &auth))
    }
}

impl Default for Vnpay {
    fn default() -> Self {
        Self::new()
    }
}
