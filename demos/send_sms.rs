use std::io;

use dysms::{
    Credentials, DysmsClient, RawPhoneNumber, SendSms, SignName, TemplateCode, TemplateParams,
};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dysms=debug")),
        )
        .init();

    let access_key_id = required_env("ALIYUN_ACCESS_KEY_ID")?;
    let access_key_secret = required_env("ALIYUN_ACCESS_KEY_SECRET")?;
    let phone = required_env("DYSMS_PHONE")?;
    let sign_name = required_env("DYSMS_SIGN_NAME")?;
    let template_code = required_env("DYSMS_TEMPLATE_CODE")?;

    let client = DysmsClient::new(Credentials::new(access_key_id, access_key_secret)?);
    let mut request = SendSms::new(
        RawPhoneNumber::new(phone)?,
        SignName::new(sign_name)?,
        TemplateCode::new(template_code)?,
    );
    if let Ok(raw) = std::env::var("DYSMS_TEMPLATE_PARAM") {
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        request = request.with_params(TemplateParams::from_serialize(&value)?);
    }

    let response = client.send_sms(request).await?;
    println!(
        "message: {}, code: {}, biz_id: {}, request_id: {}",
        response.message, response.code, response.biz_id, response.request_id
    );

    Ok(())
}
