use crate::domain::value::{
    OutId, RawPhoneNumber, SignName, SmsUpExtendCode, TemplateCode, TemplateParams,
};

/// Protocol-level parameters sent with every request.
///
/// [`Default`] yields the values the `SendSms` API expects. Overriding a field
/// replaces the default on the wire; nothing stops an override from pointing the
/// request at a different action or API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolOptions {
    pub format: String,
    pub signature_method: String,
    pub signature_version: String,
    pub action: String,
    pub version: String,
    pub region_id: String,
}

impl ProtocolOptions {
    pub const DEFAULT_FORMAT: &'static str = "JSON";
    pub const DEFAULT_SIGNATURE_METHOD: &'static str = "HMAC-SHA1";
    pub const DEFAULT_SIGNATURE_VERSION: &'static str = "1.0";
    pub const DEFAULT_ACTION: &'static str = "SendSms";
    pub const DEFAULT_VERSION: &'static str = "2017-05-25";
    pub const DEFAULT_REGION_ID: &'static str = "cn-hangzhou";

    /// Parameter names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Format", self.format.as_str()),
            ("SignatureMethod", self.signature_method.as_str()),
            ("SignatureVersion", self.signature_version.as_str()),
            ("Action", self.action.as_str()),
            ("Version", self.version.as_str()),
            ("RegionId", self.region_id.as_str()),
        ]
    }
}

impl Default for ProtocolOptions {
    fn default() -> Self {
        Self {
            format: Self::DEFAULT_FORMAT.to_owned(),
            signature_method: Self::DEFAULT_SIGNATURE_METHOD.to_owned(),
            signature_version: Self::DEFAULT_SIGNATURE_VERSION.to_owned(),
            action: Self::DEFAULT_ACTION.to_owned(),
            version: Self::DEFAULT_VERSION.to_owned(),
            region_id: Self::DEFAULT_REGION_ID.to_owned(),
        }
    }
}

/// A single `SendSms` call.
///
/// `params` maps to `TemplateParam`; when absent the field is still sent, as an
/// empty string.
#[derive(Debug, Clone)]
pub struct SendSms {
    phone: RawPhoneNumber,
    sign: SignName,
    template: TemplateCode,
    params: Option<TemplateParams>,
    out_id: Option<OutId>,
    sms_up_extend_code: Option<SmsUpExtendCode>,
}

impl SendSms {
    pub fn new(phone: impl Into<RawPhoneNumber>, sign: SignName, template: TemplateCode) -> Self {
        Self {
            phone: phone.into(),
            sign,
            template,
            params: None,
            out_id: None,
            sms_up_extend_code: None,
        }
    }

    pub fn with_params(mut self, params: TemplateParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_out_id(mut self, out_id: OutId) -> Self {
        self.out_id = Some(out_id);
        self
    }

    pub fn with_sms_up_extend_code(mut self, code: SmsUpExtendCode) -> Self {
        self.sms_up_extend_code = Some(code);
        self
    }

    pub fn phone(&self) -> &RawPhoneNumber {
        &self.phone
    }

    pub fn sign(&self) -> &SignName {
        &self.sign
    }

    pub fn template(&self) -> &TemplateCode {
        &self.template
    }

    pub fn params(&self) -> Option<&TemplateParams> {
        self.params.as_ref()
    }

    pub fn out_id(&self) -> Option<&OutId> {
        self.out_id.as_ref()
    }

    pub fn sms_up_extend_code(&self) -> Option<&SmsUpExtendCode> {
        self.sms_up_extend_code.as_ref()
    }
}
