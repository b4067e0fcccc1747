//! RPC-style request signing (`SignatureMethod=HMAC-SHA1`, `SignatureVersion=1.0`).

use std::borrow::Cow;
use std::collections::BTreeMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Parameter name carrying the computed signature.
pub const SIGNATURE_FIELD: &str = "Signature";

const SIGNED_PATH: &str = "/";

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ~`.
pub fn percent_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// `k=v` pairs joined with `&`, keys in ascending code point order, both sides
/// percent-encoded.
pub fn canonicalize(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", percent_encode(key), percent_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn string_to_sign(method: &str, params: &BTreeMap<String, String>) -> String {
    format!(
        "{method}&{}&{}",
        percent_encode(SIGNED_PATH),
        percent_encode(&canonicalize(params))
    )
}

/// Signature for a `POST` request, base64 encoded.
pub fn sign(params: &BTreeMap<String, String>, secret: &str) -> String {
    sign_with_method("POST", params, secret)
}

pub fn sign_with_method(method: &str, params: &BTreeMap<String, String>, secret: &str) -> String {
    let key = format!("{secret}&");
    let Ok(mut mac) = HmacSha1::new_from_slice(key.as_bytes()) else {
        unreachable!("HMAC accepts keys of any length");
    };
    mac.update(string_to_sign(method, params).as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documented_params() -> BTreeMap<String, String> {
        [
            ("AccessKeyId", "testId"),
            ("Action", "SendSms"),
            ("Format", "XML"),
            ("OutId", "123"),
            ("PhoneNumbers", "15300000001"),
            ("RegionId", "cn-hangzhou"),
            ("SignName", "阿里云短信测试专用"),
            ("SignatureMethod", "HMAC-SHA1"),
            ("SignatureNonce", "45e25e9b-0a6f-4070-8c85-2956eda1b466"),
            ("SignatureVersion", "1.0"),
            ("TemplateCode", "SMS_71390007"),
            ("TemplateParam", r#"{"customer":"test"}"#),
            ("Timestamp", "2017-07-12T02:42:19Z"),
            ("Version", "2017-05-25"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }

    #[test]
    fn percent_encode_keeps_only_unreserved_characters() {
        assert_eq!(percent_encode("AZaz09-_.~"), "AZaz09-_.~");
        assert_eq!(percent_encode("a b*c+d/e"), "a%20b%2Ac%2Bd%2Fe");
        assert_eq!(percent_encode("!'()"), "%21%27%28%29");
        assert_eq!(percent_encode("短"), "%E7%9F%AD");
    }

    #[test]
    fn canonicalize_sorts_keys_and_encodes_pairs() {
        let mut params = BTreeMap::new();
        params.insert("b".to_owned(), "2 2".to_owned());
        params.insert("a".to_owned(), "{\"x\":1}".to_owned());
        assert_eq!(canonicalize(&params), "a=%7B%22x%22%3A1%7D&b=2%202");
    }

    #[test]
    fn string_to_sign_encodes_path_and_query() {
        let mut params = BTreeMap::new();
        params.insert("a".to_owned(), "1".to_owned());
        params.insert("b".to_owned(), "2".to_owned());
        assert_eq!(string_to_sign("POST", &params), "POST&%2F&a%3D1%26b%3D2");
    }

    #[test]
    fn matches_documented_get_signature() {
        let signature = sign_with_method("GET", &documented_params(), "testSecret");
        assert_eq!(signature, "zJDF+Lrzhj/ThnlvIToysFRq6t4=");
    }

    #[test]
    fn post_signature_is_stable() {
        let signature = sign(&documented_params(), "testSecret");
        assert_eq!(signature, "Xvhv7fPXrPkLVSnlt0jIr08o8NQ=");
    }

    #[test]
    fn signature_ignores_insertion_order() {
        let forward = documented_params();
        let reversed = forward
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<BTreeMap<_, _>>();
        assert_eq!(sign(&forward, "s"), sign(&reversed, "s"));
    }

    #[test]
    fn signs_with_keys_longer_than_the_block_size() {
        let mut params = BTreeMap::new();
        params.insert("a".to_owned(), "1".to_owned());
        assert_eq!(sign(&params, &"k".repeat(100)), "d8KqaCXCmCYUJHyq0/wVuSUIbrY=");
    }

    #[test]
    fn signature_depends_on_secret() {
        let params = documented_params();
        assert_ne!(sign(&params, "a"), sign(&params, "b"));
    }
}
