use std::collections::{BTreeMap, HashMap};

use common_utils::{
    crypto::{HmacSha512, SignMessage, VerifySignature},
    date_time::{self, DateFormat},
    errors::CustomResult,
    types::StringMinorUnit,
    PeekInterface, Secret,
};
use domain_types::{
    connector_types::{PaymentCallbackStatus, PaymentsRedirectData},
    errors::ConnectorError,
    router_data::{ConnectorAuthType, RouterData},
};
use error_stack::ResultExt;
use time::Duration;

use super::constants;

/// Threads the converted amount into request construction.
pub struct VnpayRouterData<'a> {
    pub amount: StringMinorUnit,
    pub router_data: &'a RouterData<PaymentsRedirectData>,
}

#[derive(Debug, Clone)]
pub struct VnpayAuth {
    pub tmn_code: Secret<String>,
    pub hash_secret: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for VnpayAuth {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                tmn_code: api_key.clone(),
                hash_secret: key1.clone(),
            }),
            _ => Err(ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

/// The full parameter set signed into a hosted-checkout redirect.
#[derive(Debug, Clone)]
pub struct VnpayPaymentsRequest {
    pub tmn_code: Secret<String>,
    pub amount: StringMinorUnit,
    pub txn_ref: String,
    pub order_info: String,
    pub return_url: String,
    pub ip_addr: String,
    pub create_date: String,
    pub expire_date: String,
}

impl<'a> TryFrom<VnpayRouterData<'a>> for VnpayPaymentsRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: VnpayRouterData<'a>) -> Result<Self, Self::Error> {
        let auth = VnpayAuth::try_from(&item.router_data.connector_auth_type)?;
        let request = &item.router_data.request;

        if request.return_url.is_empty() {
            return Err(ConnectorError::MissingRequiredField {
                field_name: "return_url",
            }
            .into());
        }

        let created_at = date_time::now();
        let create_date = date_time::format_date(created_at, DateFormat::YYYYMMDDHHmmss)
            .change_context(ConnectorError::DateFormattingFailed)?;
        let expire_date = date_time::format_date(
            created_at + Duration::minutes(constants::PAYMENT_WINDOW_MINUTES),
            DateFormat::YYYYMMDDHHmmss,
        )
        .change_context(ConnectorError::DateFormattingFailed)?;

        Ok(Self {
            tmn_code: auth.tmn_code,
            amount: item.amount,
            txn_ref: common_utils::generate_numeric_reference(constants::TXN_REF_LENGTH),
            order_info: request.order_info.clone(),
            return_url: request.return_url.clone(),
            ip_addr: request.ip_address.clone(),
            create_date,
            expire_date,
        })
    }
}

impl VnpayPaymentsRequest {
    /// Wire-format parameter set under the gateway's field names, unsigned.
    pub fn parameter_set(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("vnp_Version".to_string(), constants::VERSION.to_string()),
            ("vnp_Command".to_string(), constants::COMMAND_PAY.to_string()),
            ("vnp_TmnCode".to_string(), self.tmn_code.peek().clone()),
            (
                "vnp_Amount".to_string(),
                self.amount.get_amount_as_string().to_string(),
            ),
            (
                "vnp_CurrCode".to_string(),
                constants::CURRENCY_CODE.to_string(),
            ),
            ("vnp_TxnRef".to_string(), self.txn_ref.clone()),
            ("vnp_OrderInfo".to_string(), self.order_info.clone()),
            ("vnp_OrderType".to_string(), constants::ORDER_TYPE.to_string()),
            (
                "vnp_Locale".to_string(),
                constants::LOCALE_DEFAULT.to_string(),
            ),
            ("vnp_ReturnUrl".to_string(), self.return_url.clone()),
            ("vnp_IpAddr".to_string(), self.ip_addr.clone()),
            ("vnp_CreateDate".to_string(), self.create_date.clone()),
            ("vnp_ExpireDate".to_string(), self.expire_date.clone()),
        ])
    }

    /// Full redirect URL with the signature appended as the last parameter.
    pub fn signed_redirect_url(
        &self,
        base_url: &str,
        auth: &VnpayAuth,
    ) -> CustomResult<String, ConnectorError> {
        let canonical = canonical_query(&self.parameter_set());
        let signature = sign_canonical_query(&canonical, auth.hash_secret.peek())?;
        Ok(format!(
            "{base_url}?{canonical}&{}={signature}",
            constants::SECURE_HASH_PARAM
        ))
    }
}

/// Serialize a parameter set as `name=value&...` with values
/// form-urlencoded and names in bytewise-ascending order.
///
/// The gateway signs exactly these bytes on both legs, so outbound signing
/// and callback verification must go through this one function.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

/// HMAC-SHA512 over the canonical query, lowercase hex.
pub fn sign_canonical_query(
    canonical: &str,
    hash_secret: &str,
) -> CustomResult<String, ConnectorError> {
    let digest = HmacSha512
        .sign_message(hash_secret.as_bytes(), canonical.as_bytes())
        .change_context(ConnectorError::RequestEncodingFailed)?;
    Ok(hex::encode(digest))
}

/// Recompute the callback signature and classify the outcome.
///
/// Fails closed: a missing or undecodable signature field, or any
/// recomputation mismatch, yields `Invalid`.
pub fn verify_callback(
    params: &HashMap<String, String>,
    auth: &VnpayAuth,
) -> PaymentCallbackStatus {
    let Some(received_hash) = params.get(constants::SECURE_HASH_PARAM) else {
        return PaymentCallbackStatus::Invalid;
    };
    let Ok(received_signature) = hex::decode(received_hash) else {
        return PaymentCallbackStatus::Invalid;
    };

    let signed_params: BTreeMap<String, String> = params
        .iter()
        .filter(|(name, _)| {
            name.as_str() != constants::SECURE_HASH_PARAM
                && name.as_str() != constants::SECURE_HASH_TYPE_PARAM
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let canonical = canonical_query(&signed_params);
    let verified = HmacSha512
        .verify_signature(
            auth.hash_secret.peek().as_bytes(),
            &received_signature,
            canonical.as_bytes(),
        )
        .unwrap_or(false);
    if !verified {
        return PaymentCallbackStatus::Invalid;
    }

    match params
        .get(constants::TRANSACTION_STATUS_PARAM)
        .map(String::as_str)
    {
        Some(constants::TRANSACTION_STATUS_SUCCESS) => PaymentCallbackStatus::Success,
        _ => PaymentCallbackStatus::Failed,
    }
}
