//! Typed Rust client for the Alibaba Cloud SMS (`dysmsapi`) `SendSms` API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! request signing and wire-format quirks, and a small client layer performing the
//! HTTP call.
//!
//! ```rust,no_run
//! use dysms::{Credentials, DysmsClient, RawPhoneNumber, SendSms, SignName, TemplateCode, TemplateParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), dysms::DysmsError> {
//!     let client = DysmsClient::new(Credentials::new("access-key-id", "access-key-secret")?);
//!     let request = SendSms::new(
//!         RawPhoneNumber::new("13800138000")?,
//!         SignName::new("MySign")?,
//!         TemplateCode::new("SMS_001")?,
//!     )
//!     .with_params(TemplateParams::new().with("code", "1234"));
//!     let response = client.send_sms(request).await?;
//!     println!("BizId: {}", response.biz_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

/// Request signing primitives, for callers that need to sign other RPC-style calls.
pub mod signature {
    pub use crate::transport::{
        canonicalize, percent_encode, sign, sign_with_method, string_to_sign,
    };
}

pub use client::{Credentials, DysmsClient, DysmsClientBuilder, DysmsError};
pub use domain::{
    AccessKeyId, AccessKeySecret, OutId, PhoneNumber, ProtocolOptions, RawPhoneNumber,
    SendSms, SendSmsResponse, SignName, SmsUpExtendCode, TemplateCode, TemplateParams,
    ValidationError,
};

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<DysmsClient>;
    let _ = assert_send_sync::<DysmsError>;
    let _ = assert_send_sync::<Credentials>;
};
