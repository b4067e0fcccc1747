//! Transport layer: request signing and wire-format details (serialization/deserialization).

mod send_sms;
mod signer;

pub use send_sms::{
    Freshness, SendSmsReply, build_signed_params, decode_send_sms_json_response,
    encode_form_body, encode_send_sms_params,
};
pub use signer::{canonicalize, percent_encode, sign, sign_with_method, string_to_sign};
