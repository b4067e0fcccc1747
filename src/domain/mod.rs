//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{ProtocolOptions, SendSms};
pub use response::SendSmsResponse;
pub use validation::ValidationError;
pub use value::{
    AccessKeyId, AccessKeySecret, OutId, PhoneNumber, RawPhoneNumber, SignName,
    SmsUpExtendCode, TemplateCode, TemplateParams,
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn access_key_id_rejects_empty() {
        assert!(matches!(
            AccessKeyId::new("   "),
            Err(ValidationError::Empty {
                field: AccessKeyId::FIELD
            })
        ));
    }

    #[test]
    fn access_key_id_is_kept_as_given() {
        assert_eq!(AccessKeyId::new(" id ").unwrap().as_str(), " id ");
    }

    #[test]
    fn access_key_secret_rejects_whitespace_only_but_keeps_padding() {
        assert!(matches!(
            AccessKeySecret::new("   "),
            Err(ValidationError::Empty {
                field: AccessKeySecret::FIELD
            })
        ));
        assert_eq!(AccessKeySecret::new(" s ").unwrap().expose(), " s ");
    }

    #[test]
    fn access_key_secret_rejects_empty_and_redacts_debug() {
        assert!(matches!(
            AccessKeySecret::new(""),
            Err(ValidationError::Empty {
                field: AccessKeySecret::FIELD
            })
        ));

        let secret = AccessKeySecret::new("very-secret").unwrap();
        assert_eq!(secret.expose(), "very-secret");
        assert!(!format!("{secret:?}").contains("very-secret"));
    }

    #[test]
    fn raw_phone_number_accepts_numbers_and_trims_strings() {
        let pn = RawPhoneNumber::from(13_800_138_000_u64);
        assert_eq!(pn.raw(), "13800138000");

        let pn = RawPhoneNumber::new(" 13800138000 ").unwrap();
        assert_eq!(pn.raw(), "13800138000");

        assert!(RawPhoneNumber::new("  ").is_err());
    }

    #[test]
    fn phone_number_drops_mainland_china_prefix() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::CN), " 13800138000 ").unwrap();
        assert_eq!(pn.raw(), "13800138000");
        assert_eq!(pn.e164(), "+8613800138000");

        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "13800138000");
    }

    #[test]
    fn phone_number_keeps_country_code_for_international() {
        let pn = PhoneNumber::parse(None, "+79251234567").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "79251234567");
    }

    #[test]
    fn sign_name_and_template_code_reject_empty() {
        assert!(SignName::new(" ").is_err());
        assert!(TemplateCode::new("").is_err());
        assert_eq!(TemplateCode::new(" SMS_001 ").unwrap().as_str(), "SMS_001");
    }

    #[test]
    fn sms_up_extend_code_requires_digits() {
        assert!(SmsUpExtendCode::new("90999").is_ok());
        assert!(matches!(
            SmsUpExtendCode::new("9a"),
            Err(ValidationError::NotNumeric { .. })
        ));
    }

    #[test]
    fn template_params_encode_as_json_object() {
        let params = TemplateParams::new().with("code", "1234");
        assert_eq!(params.to_json_string(), r#"{"code":"1234"}"#);

        let mut from_map = BTreeMap::new();
        from_map.insert("customer", "test");
        let params = TemplateParams::from_serialize(&from_map).unwrap();
        assert_eq!(params.to_json_string(), r#"{"customer":"test"}"#);
    }

    #[test]
    fn template_params_keep_insertion_order() {
        let params = TemplateParams::new()
            .with("name", "Li")
            .with("code", "1234")
            .with("amount", 5);
        assert_eq!(
            params.to_json_string(),
            r#"{"name":"Li","code":"1234","amount":5}"#
        );
    }

    #[test]
    fn template_params_reject_non_objects() {
        let err = TemplateParams::from_serialize(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTemplateParams { .. }));
    }

    #[test]
    fn protocol_options_default_to_send_sms_constants() {
        let options = ProtocolOptions::default();
        assert_eq!(
            options.fields(),
            [
                ("Format", "JSON"),
                ("SignatureMethod", "HMAC-SHA1"),
                ("SignatureVersion", "1.0"),
                ("Action", "SendSms"),
                ("Version", "2017-05-25"),
                ("RegionId", "cn-hangzhou"),
            ]
        );
    }
}
