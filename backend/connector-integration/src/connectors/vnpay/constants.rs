//! Protocol constants for the VNPay hosted-checkout API.

/// API version sent in every request.
pub const VERSION: &str = "2.1.0";
/// Command identifier for hosted-checkout payment creation.
pub const COMMAND_PAY: &str = "pay";
/// Settlement currency code.
pub const CURRENCY_CODE: &str = "VND";
/// Checkout-page locale.
pub const LOCALE_DEFAULT: &str = "vn";
/// Order category tag required by the gateway.
pub const ORDER_TYPE: &str = "other";

/// The gateway expects amounts scaled by 100, independent of currency
/// decimals.
pub const AMOUNT_MULTIPLIER: i64 = 100;
/// Length of the merchant order reference.
pub const TXN_REF_LENGTH: usize = 8;
/// Minutes before a signed payment request expires at the gateway.
pub const PAYMENT_WINDOW_MINUTES: i64 = 15;

/// Signature field appended by both sides; never part of the signed payload.
pub const SECURE_HASH_PARAM: &str = "vnp_SecureHash";
/// Optional signature-type field; also excluded from the signed payload.
pub const SECURE_HASH_TYPE_PARAM: &str = "vnp_SecureHashType";
/// Transaction status field inspected after signature verification.
pub const TRANSACTION_STATUS_PARAM: &str = "vnp_TransactionStatus";
/// Merchant order reference field echoed back by the gateway.
pub const TXN_REF_PARAM: &str = "vnp_TxnRef";
/// Status code for a successful transaction.
pub const TRANSACTION_STATUS_SUCCESS: &str = "00";

/// Human-readable message for a gateway transaction status code.
pub fn transaction_status_message(code: &str) -> &'static str {
    match code {
        "00" => "Transaction successful",
        "01" => "Transaction incomplete",
        "02" => "Transaction failed",
        "04" => "Reversed: customer was charged but the transaction did not complete",
        "05" => "Refund is being processed",
        "06" => "Refund request forwarded to the customer's bank",
        "07" => "Transaction suspected of fraud",
        "09" => "Refund rejected",
        _ => "Transaction failed with an unrecognized status code",
    }
}
