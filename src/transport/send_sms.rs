use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use crate::domain::{
    AccessKeyId, AccessKeySecret, OutId, ProtocolOptions, RawPhoneNumber, SendSms,
    SendSmsResponse, SignName, SmsUpExtendCode, TemplateCode, TemplateParams,
};
use crate::transport::signer::{self, SIGNATURE_FIELD};

pub const SIGNATURE_NONCE_FIELD: &str = "SignatureNonce";
pub const TIMESTAMP_FIELD: &str = "Timestamp";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-call replay protection values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Freshness {
    pub nonce: String,
    pub timestamp: String,
}

impl Freshness {
    /// Random decimal nonce and the current UTC time in ISO-8601 with milliseconds.
    pub fn now() -> Self {
        Self {
            nonce: rand::random::<u64>().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendSmsJsonResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    request_id: Option<String>,
    #[serde(default)]
    biz_id: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Parsed provider answer, before success/failure is decided by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendSmsReply {
    Accepted(SendSmsResponse),
    Rejected {
        message: Option<String>,
        code: Option<String>,
        request_id: Option<String>,
    },
}

pub fn encode_send_sms_params(request: &SendSms) -> Vec<(String, String)> {
    let mut params = vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            request.phone().raw().to_owned(),
        ),
        (SignName::FIELD.to_owned(), request.sign().as_str().to_owned()),
        (
            TemplateCode::FIELD.to_owned(),
            request.template().as_str().to_owned(),
        ),
        (
            TemplateParams::FIELD.to_owned(),
            request
                .params()
                .map(TemplateParams::to_json_string)
                .unwrap_or_default(),
        ),
    ];

    if let Some(out_id) = request.out_id() {
        params.push((OutId::FIELD.to_owned(), out_id.as_str().to_owned()));
    }
    if let Some(code) = request.sms_up_extend_code() {
        params.push((SmsUpExtendCode::FIELD.to_owned(), code.as_str().to_owned()));
    }

    params
}

/// Merge request fields, protocol options, and credentials, then sign.
///
/// Later layers win on key collisions: request fields, then protocol options and
/// `AccessKeyId`, then nonce and timestamp. The secret only keys the HMAC.
pub fn build_signed_params(
    request_params: Vec<(String, String)>,
    protocol: &ProtocolOptions,
    access_key_id: &AccessKeyId,
    secret: &AccessKeySecret,
    freshness: Freshness,
) -> BTreeMap<String, String> {
    let mut params = request_params.into_iter().collect::<BTreeMap<_, _>>();

    for (key, value) in protocol.fields() {
        params.insert(key.to_owned(), value.to_owned());
    }
    params.insert(
        AccessKeyId::FIELD.to_owned(),
        access_key_id.as_str().to_owned(),
    );
    params.insert(SIGNATURE_NONCE_FIELD.to_owned(), freshness.nonce);
    params.insert(TIMESTAMP_FIELD.to_owned(), freshness.timestamp);

    params.remove(AccessKeySecret::FIELD);
    params.remove(SIGNATURE_FIELD);

    let signature = signer::sign(&params, secret.expose());
    params.insert(SIGNATURE_FIELD.to_owned(), signature);
    params
}

/// `application/x-www-form-urlencoded` body using the signing percent-encoding.
pub fn encode_form_body(params: &BTreeMap<String, String>) -> String {
    signer::canonicalize(params)
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsReply, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;

    if parsed.message.as_deref() == Some(SendSmsResponse::OK) {
        return Ok(SendSmsReply::Accepted(SendSmsResponse {
            message: SendSmsResponse::OK.to_owned(),
            request_id: parsed.request_id.unwrap_or_default(),
            biz_id: parsed.biz_id.unwrap_or_default(),
            code: parsed.code.unwrap_or_default(),
        }));
    }

    Ok(SendSmsReply::Rejected {
        message: parsed.message,
        code: parsed.code,
        request_id: parsed.request_id,
    })
}
