use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Alibaba Cloud `AccessKeyId`.
///
/// Invariant: not empty or whitespace-only. The value is sent exactly as given.
pub struct AccessKeyId(String);

impl AccessKeyId {
    /// Parameter name used by the provider (`AccessKeyId`).
    pub const FIELD: &'static str = "AccessKeyId";

    /// Create a validated [`AccessKeyId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key id as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Alibaba Cloud `AccessKeySecret`.
///
/// Invariant: not empty or whitespace-only; the value is stored untrimmed. The secret only ever
/// keys the request signature; it is never placed in the parameter set or the
/// request body, and its `Debug` output is redacted.
pub struct AccessKeySecret(String);

impl AccessKeySecret {
    /// Name of the credential field (`AccessKeySecret`).
    pub const FIELD: &'static str = "AccessKeySecret";

    /// Create a validated [`AccessKeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKeySecret(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to the provider (`PhoneNumbers`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want
/// normalization, parse into [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Parameter name used by the provider (`PhoneNumbers`).
    pub const FIELD: &'static str = "PhoneNumbers";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the provider.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RawPhoneNumber {
    /// Numeric phone numbers are sent as their decimal representation.
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to the provider's format.
    fn from(value: PhoneNumber) -> Self {
        Self(value.provider_format)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number.
///
/// The provider expects mainland China numbers without a country prefix and every
/// other number as country code followed by the national number, with no leading `+`.
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    provider_format: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parameter name used by the provider (`PhoneNumbers`).
    pub const FIELD: &'static str = "PhoneNumbers";

    const MAINLAND_CHINA_CODE: u16 = 86;

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        let code = parsed.code().value();
        let digits = e164.trim_start_matches('+');
        let provider_format = if code == Self::MAINLAND_CHINA_CODE {
            digits[code.to_string().len()..].to_owned()
        } else {
            digits.to_owned()
        };

        Ok(Self {
            raw,
            e164,
            provider_format,
            parsed,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Representation sent in `PhoneNumbers`.
    pub fn provider_format(&self) -> &str {
        &self.provider_format
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS signature name (`SignName`), as approved in the console.
///
/// Invariant: non-empty after trimming.
pub struct SignName(String);

impl SignName {
    /// Parameter name used by the provider (`SignName`).
    pub const FIELD: &'static str = "SignName";

    /// Create a validated [`SignName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated signature name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template code (`TemplateCode`), e.g. `SMS_71390007`.
///
/// Invariant: non-empty after trimming.
pub struct TemplateCode(String);

impl TemplateCode {
    /// Parameter name used by the provider (`TemplateCode`).
    pub const FIELD: &'static str = "TemplateCode";

    /// Create a validated [`TemplateCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated template code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Template variables (`TemplateParam`), sent as a JSON object string with keys in
/// insertion order.
pub struct TemplateParams(serde_json::Map<String, serde_json::Value>);

impl TemplateParams {
    /// Parameter name used by the provider (`TemplateParam`).
    pub const FIELD: &'static str = "TemplateParam";

    /// Create an empty set of template variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build template variables from any value that serializes to a JSON object.
    pub fn from_serialize<T: serde::Serialize + ?Sized>(
        value: &T,
    ) -> Result<Self, ValidationError> {
        let value = serde_json::to_value(value).map_err(|err| {
            ValidationError::InvalidTemplateParams {
                reason: err.to_string(),
            }
        })?;
        match value {
            serde_json::Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::InvalidTemplateParams {
                reason: format!("expected a JSON object, got {other}"),
            }),
        }
    }

    /// Set a template variable, returning `self` for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a template variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// JSON encoding as sent in `TemplateParam`.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::Object(self.0.clone()).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-defined correlation id echoed back in delivery receipts (`OutId`).
///
/// Invariant: non-empty after trimming.
pub struct OutId(String);

impl OutId {
    /// Parameter name used by the provider (`OutId`).
    pub const FIELD: &'static str = "OutId";

    /// Create a validated [`OutId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated out id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Uplink extension code (`SmsUpExtendCode`).
///
/// Invariant: non-empty, ASCII digits only.
pub struct SmsUpExtendCode(String);

impl SmsUpExtendCode {
    /// Parameter name used by the provider (`SmsUpExtendCode`).
    pub const FIELD: &'static str = "SmsUpExtendCode";

    /// Create a validated [`SmsUpExtendCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric {
                field: Self::FIELD,
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated extension code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
