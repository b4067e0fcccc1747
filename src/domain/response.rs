/// Successful `SendSms` response.
///
/// Only produced when the provider answered with `Message == "OK"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub message: String,
    pub request_id: String,
    pub biz_id: String,
    pub code: String,
}

impl SendSmsResponse {
    /// `Message` value the provider uses to signal success.
    pub const OK: &'static str = "OK";
}
