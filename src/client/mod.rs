//! Client layer: orchestrates signing, the HTTP call, and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, warn};

use crate::domain::{
    AccessKeyId, AccessKeySecret, ProtocolOptions, SendSms, SendSmsResponse, ValidationError,
};
use crate::transport::{
    Freshness, SendSmsReply, build_signed_params, decode_send_sms_json_response,
    encode_form_body, encode_send_sms_params,
};

const DEFAULT_ENDPOINT: &str = "http://dysmsapi.aliyuncs.com/";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
        timeout: Option<Duration>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
        timeout: Option<Duration>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self
                .client
                .post(url)
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body);
            if let Some(timeout) = timeout {
                request = request.timeout(timeout);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials used to sign every request.
///
/// Only the `AccessKeyId` is transmitted; the secret keys the signature.
pub struct Credentials {
    access_key_id: AccessKeyId,
    access_key_secret: AccessKeySecret,
}

impl Credentials {
    /// Validate both parts; fails before any network activity.
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            access_key_id: AccessKeyId::new(access_key_id)?,
            access_key_secret: AccessKeySecret::new(access_key_secret)?,
        })
    }

    pub fn access_key_id(&self) -> &AccessKeyId {
        &self.access_key_id
    }

    pub fn access_key_secret(&self) -> &AccessKeySecret {
        &self.access_key_secret
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DysmsClient`].
///
/// A call either resolves with a provider-confirmed `OK` or fails with exactly one
/// of these; nothing is retried.
pub enum DysmsError {
    /// HTTP client / transport failure (DNS, connection refused or reset, timeouts).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code whose body is not a JSON provider reply.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The provider answered with a `Message` other than `OK`.
    #[error("{}", .message.as_deref().unwrap_or("provider rejected the request without a message"))]
    Api {
        message: Option<String>,
        code: Option<String>,
        request_id: Option<String>,
    },

    /// Response body is not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`DysmsClient`].
///
/// Use this when you need to customize the endpoint, protocol options, timeout, or
/// user-agent.
pub struct DysmsClientBuilder {
    credentials: Credentials,
    endpoint: String,
    protocol: ProtocolOptions,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl DysmsClientBuilder {
    /// Create a builder with the default endpoint and protocol options, no timeout
    /// and no user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            protocol: ProtocolOptions::default(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the endpoint URL (default `http://dysmsapi.aliyuncs.com/`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the protocol options sent with every request.
    ///
    /// These values are sent as given, so changing `action` or `version` changes the
    /// API call being made.
    pub fn protocol(mut self, protocol: ProtocolOptions) -> Self {
        self.protocol = protocol;
        self
    }

    /// Override `RegionId` only.
    pub fn region_id(mut self, region_id: impl Into<String>) -> Self {
        self.protocol.region_id = region_id.into();
        self
    }

    /// Set an HTTP client timeout applied to every request made by this client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`DysmsClient`].
    pub fn build(self) -> Result<DysmsClient, DysmsError> {
        url::Url::parse(&self.endpoint).map_err(|_| ValidationError::InvalidEndpoint {
            input: self.endpoint.clone(),
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| DysmsError::Transport(Box::new(err)))?;

        Ok(DysmsClient {
            credentials: Arc::new(self.credentials),
            endpoint: self.endpoint,
            protocol: self.protocol,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Alibaba Cloud SMS client.
///
/// Each call builds its own parameter set, nonce, and timestamp and performs exactly
/// one HTTP `POST` to `http://dysmsapi.aliyuncs.com/`. The client holds no mutable
/// state, so concurrent calls are independent.
pub struct DysmsClient {
    credentials: Arc<Credentials>,
    endpoint: String,
    protocol: ProtocolOptions,
    http: Arc<dyn HttpTransport>,
}

impl DysmsClient {
    /// Create a client using the default endpoint and protocol options.
    ///
    /// For more customization, use [`DysmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Arc::new(credentials),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            protocol: ProtocolOptions::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> DysmsClientBuilder {
        DysmsClientBuilder::new(credentials)
    }

    /// Send one templated SMS.
    ///
    /// There is no timeout unless one was configured on the builder; a peer that
    /// never answers keeps this future pending.
    ///
    /// Errors:
    /// - [`DysmsError::Transport`] for connection-level failures,
    /// - [`DysmsError::Parse`] when the response body is not JSON,
    /// - [`DysmsError::HttpStatus`] for non-2xx responses without a JSON body,
    /// - [`DysmsError::Api`] when the provider's `Message` is not `OK`.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, DysmsError> {
        self.execute(request, None).await
    }

    /// Same as [`DysmsClient::send_sms`], failing with [`DysmsError::Transport`] if
    /// the exchange does not complete within `timeout`.
    pub async fn send_sms_with_timeout(
        &self,
        request: SendSms,
        timeout: Duration,
    ) -> Result<SendSmsResponse, DysmsError> {
        self.execute(request, Some(timeout)).await
    }

    async fn execute(
        &self,
        request: SendSms,
        timeout: Option<Duration>,
    ) -> Result<SendSmsResponse, DysmsError> {
        let freshness = Freshness::now();
        debug!(
            action = %self.protocol.action,
            phone = %request.phone().raw(),
            nonce = %freshness.nonce,
            "sending SMS request"
        );

        let params = build_signed_params(
            encode_send_sms_params(&request),
            &self.protocol,
            self.credentials.access_key_id(),
            self.credentials.access_key_secret(),
            freshness,
        );
        let body = encode_form_body(&params);

        let response = self
            .http
            .post_form(&self.endpoint, body, timeout)
            .await
            .map_err(DysmsError::Transport)?;
        debug!(status = response.status, "received SMS response");

        let reply = match decode_send_sms_json_response(&response.body) {
            Ok(reply) => reply,
            Err(_) if !(200..=299).contains(&response.status) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                return Err(DysmsError::HttpStatus {
                    status: response.status,
                    body,
                });
            }
            Err(err) => return Err(DysmsError::Parse(Box::new(err))),
        };

        match reply {
            SendSmsReply::Accepted(accepted) => {
                info!(
                    biz_id = %accepted.biz_id,
                    request_id = %accepted.request_id,
                    "SMS accepted"
                );
                Ok(accepted)
            }
            SendSmsReply::Rejected {
                message,
                code,
                request_id,
            } => {
                warn!(
                    message = ?message,
                    code = ?code,
                    request_id = ?request_id,
                    "SMS rejected by provider"
                );
                Err(DysmsError::Api {
                    message,
                    code,
                    request_id,
                })
            }
        }
    }
}
