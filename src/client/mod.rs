//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    ActionResponse, ApiKey, Balance, Object, ObjectAddOptions, ObjectEditOptions, ObjectEvent,
    ObjectEventsOptions, ObjectInfo, ObjectList, ObjectPosition, OperatorInfo, Position,
    PositionRequest, Project, RequestPositionsOptions, SubscribeEventOptions, SubscribedEvent,
    SubscriptionId, ValidationError,
};
use crate::transport::{self, DecodeError, Envelope, SuccessEnvelope};

mod subscriptions;

const DEFAULT_ENDPOINT: &str = "https://movizor.ru/api";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .get(url)
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .query(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Clone)]
/// MoVizor project name and API key.
///
/// The key is sent with every request and is never logged or printed by
/// `Debug`.
pub struct Credentials {
    project: Project,
    api_key: ApiKey,
}

impl Credentials {
    /// Both values must be non-empty after trimming.
    pub fn new(
        project: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            project: Project::new(project)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("project", &self.project)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`MovizorClient`].
///
/// This error preserves:
/// - HTTP-level failures (non-2xx status or transport failures),
/// - API-level failures (`result != "success"`),
/// - validation/parse failures.
pub enum MovizorError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// MoVizor reported an error in the response envelope.
    #[error("API error {code}: {error_code:?} {text:?}")]
    Api {
        code: String,
        error_code: Option<String>,
        text: Option<String>,
        text_ru: Option<String>,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[from] DecodeError),

    /// The configured endpoint cannot be used as a base URL.
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// One of the domain checks rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`MovizorClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct MovizorClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl MovizorClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL. Actions are requested at `<endpoint>/<project>/<action>`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`MovizorClient`].
    pub fn build(self) -> Result<MovizorClient, MovizorError> {
        action_url(&self.endpoint, &self.credentials.project, "balance")?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| MovizorError::Transport(Box::new(err)))?;

        Ok(MovizorClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level MoVizor client.
///
/// Every method validates its input, encodes the query parameters, performs one
/// GET request and decodes the `data` of a successful envelope. Nothing is sent
/// when local validation fails.
pub struct MovizorClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl MovizorClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`MovizorClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> MovizorClientBuilder {
        MovizorClientBuilder::new(credentials)
    }

    /// Account balance and tariff table.
    pub async fn balance(&self) -> Result<Balance, MovizorError> {
        let success = self.perform("balance", Vec::new()).await?;
        Ok(transport::decode_balance(success.data())?)
    }

    /// Start tracking an object.
    pub async fn add_object(
        &self,
        object: &Object,
        options: &ObjectAddOptions,
    ) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_add_object_form(object, options)?;
        self.perform_action("object_add", params).await
    }

    pub async fn object_info(&self, object: &Object) -> Result<ObjectInfo, MovizorError> {
        let params = transport::encode_object_form(object)?;
        let success = self.perform("object_get", params).await?;
        Ok(transport::decode_object_info(success.data())?)
    }

    /// Change object settings. Unless `activate` is set, changes apply from the next day.
    pub async fn edit_object(
        &self,
        object: &Object,
        options: &ObjectEditOptions,
    ) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_edit_object_form(object, options)?;
        self.perform_action("object_edit", params).await
    }

    /// Every object of the account with its tracking status.
    pub async fn objects(&self) -> Result<ObjectList, MovizorError> {
        let success = self.perform("object_list", Vec::new()).await?;
        Ok(transport::decode_object_list(success.data())?)
    }

    pub async fn delete_object(&self, object: &Object) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_object_form(object)?;
        self.perform_action("object_delete", params).await
    }

    /// Re-send the tracking confirmation request to the subscriber.
    pub async fn reactivate_object(&self, object: &Object) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_object_form(object)?;
        self.perform_action("object_reactivate", params).await
    }

    /// Cancel a tariff change scheduled for the next day.
    pub async fn cancel_tariff_change(
        &self,
        object: &Object,
    ) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_object_form(object)?;
        self.perform_action("object_cancel_tariff", params).await
    }

    pub async fn last_position(&self, object: &Object) -> Result<Position, MovizorError> {
        let params = transport::encode_object_form(object)?;
        let success = self.perform("pos_last", params).await?;
        Ok(transport::decode_position(success.data())?)
    }

    /// Position history of an object.
    pub async fn positions(
        &self,
        object: &Object,
        options: &RequestPositionsOptions,
    ) -> Result<Vec<Position>, MovizorError> {
        let params = transport::encode_positions_form(object, options)?;
        let success = self.perform("pos_list", params).await?;
        Ok(transport::decode_positions(success.data())?)
    }

    /// Ask the operator for a fresh position. Poll it with [`MovizorClient::requested_position`].
    pub async fn request_position(
        &self,
        object: &Object,
    ) -> Result<PositionRequest, MovizorError> {
        let params = transport::encode_object_form(object)?;
        let success = self.perform("pos_request", params).await?;
        Ok(transport::decode_position_request(success.data())?)
    }

    pub async fn requested_position(
        &self,
        request: PositionRequest,
    ) -> Result<Position, MovizorError> {
        let params = transport::encode_requested_position_form(request);
        let success = self.perform("pos_get", params).await?;
        Ok(transport::decode_position(success.data())?)
    }

    /// Last known positions of every object.
    pub async fn objects_positions(&self) -> Result<Vec<ObjectPosition>, MovizorError> {
        let success = self.perform("pos_objects", Vec::new()).await?;
        Ok(transport::decode_object_positions(success.data())?)
    }

    pub async fn operator_info(&self, object: &Object) -> Result<OperatorInfo, MovizorError> {
        let params = transport::encode_object_form(object)?;
        let success = self.perform("get_operator", params).await?;
        Ok(transport::decode_operator_info(success.data())?)
    }

    /// Event feed of the account.
    pub async fn events(
        &self,
        options: &ObjectEventsOptions,
    ) -> Result<Vec<ObjectEvent>, MovizorError> {
        let params = transport::encode_events_form(options);
        let success = self.perform("events", params).await?;
        Ok(transport::decode_events(success.data())?)
    }

    pub async fn event_subscriptions(&self) -> Result<Vec<SubscribedEvent>, MovizorError> {
        let success = self.perform("events_subscribe_list", Vec::new()).await?;
        Ok(transport::decode_subscribed_events(success.data())?)
    }

    pub async fn subscribe_event(
        &self,
        options: &SubscribeEventOptions,
    ) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_subscribe_event_form(options)?;
        self.perform_action("events_subscribe_add", params).await
    }

    pub async fn delete_event_subscription(
        &self,
        id: SubscriptionId,
    ) -> Result<ActionResponse, MovizorError> {
        let params = transport::encode_delete_subscription_form(id);
        self.perform_action("events_subscribe_delete", params).await
    }

    async fn perform_action(
        &self,
        action: &'static str,
        params: Vec<(String, String)>,
    ) -> Result<ActionResponse, MovizorError> {
        let success = self.perform(action, params).await?;
        Ok(success.into_action_response())
    }

    async fn perform(
        &self,
        action: &'static str,
        params: Vec<(String, String)>,
    ) -> Result<SuccessEnvelope, MovizorError> {
        let url = action_url(&self.endpoint, &self.credentials.project, action)?;
        tracing::debug!(action, params = params.len(), "sending MoVizor request");

        let mut query = params;
        query.push((
            ApiKey::FIELD.to_owned(),
            self.credentials.api_key.as_str().to_owned(),
        ));

        let response = self
            .http
            .get(url.as_str(), query)
            .await
            .map_err(MovizorError::Transport)?;
        tracing::debug!(
            action,
            status = response.status,
            bytes = response.body.len(),
            "received MoVizor response"
        );

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(MovizorError::HttpStatus {
                status: response.status,
                body,
            });
        }

        match transport::decode_envelope(&response.body)? {
            Envelope::Success(success) => Ok(success),
            Envelope::Failure(failure) => {
                tracing::warn!(
                    action,
                    code = %failure.code,
                    error_code = ?failure.error_code,
                    error_text = ?failure.error_text,
                    "MoVizor reported an error"
                );
                Err(MovizorError::Api {
                    code: failure.code,
                    error_code: failure.error_code,
                    text: failure.error_text.or(failure.message),
                    text_ru: failure.error_text_ru,
                })
            }
        }
    }
}

fn action_url(endpoint: &str, project: &Project, action: &str) -> Result<Url, MovizorError> {
    let invalid = |reason: String| MovizorError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        reason,
    };

    let mut url = Url::parse(endpoint).map_err(|err| invalid(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| invalid("cannot be a base URL".to_owned()))?
        .pop_if_empty()
        .push(project.as_str())
        .push(action);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::domain::{
        Coordinate, DestinationOptions, EventType, ObjectOptions, TariffType, TrackingStatus,
    };

    use super::*;

    #[derive(Debug, Clone)]
    pub(super) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug, Default)]
    struct FakeTransportState {
        requests: Vec<(String, Vec<(String, String)>)>,
        responses: VecDeque<(u16, String)>,
    }

    impl FakeTransport {
        pub(super) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_responses(vec![(response_status, response_body.into())])
        }

        /// Replies in order; the last response repeats once the queue runs dry.
        pub(super) fn with_responses(responses: Vec<(u16, String)>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    responses: responses.into(),
                })),
            }
        }

        pub(super) fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
            let state = self.state.lock().unwrap();
            match state.requests.last() {
                Some((url, params)) => (Some(url.clone()), params.clone()),
                None => (None, Vec::new()),
            }
        }

        pub(super) fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.state.lock().unwrap().requests.clone()
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push((url.to_owned(), params));
                    if state.responses.len() > 1 {
                        state.responses.pop_front().unwrap()
                    } else {
                        state.responses.front().cloned().unwrap()
                    }
                };
                Ok(HttpResponse { status, body })
            })
        }
    }

    pub(super) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    pub(super) fn make_client(transport: FakeTransport) -> MovizorClient {
        MovizorClient {
            credentials: Credentials::new("demo", "secret").unwrap(),
            endpoint: "https://example.invalid/api".to_owned(),
            http: Arc::new(transport),
        }
    }

    const OK_ACTION: &str = r#"{"result":"success","code":"0","message":"OK"}"#;

    #[tokio::test]
    async fn balance_builds_url_and_sends_key() {
        let json = r#"
        {
          "result": "success",
          "code": "0",
          "data": {"balance": "476.50", "credit": 0, "type": "prepay", "tariff": {}}
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let balance = client.balance().await.unwrap();
        assert_eq!(balance.balance, 476.5);
        assert_eq!(balance.contract_type, "prepay");

        let (url, params) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/api/demo/balance"));
        assert_eq!(params, vec![("key".to_owned(), "secret".to_owned())]);
    }

    #[tokio::test]
    async fn add_object_sends_canonical_phone_and_options() {
        let transport = FakeTransport::new(200, OK_ACTION);
        let client = make_client(transport.clone());

        let options = ObjectAddOptions {
            options: ObjectOptions {
                title: Some("Obj".to_owned()),
                tariff: Some(TariffType::Manual),
                destinations: vec![DestinationOptions::new(
                    "Depot",
                    Coordinate::new(55.5),
                    Coordinate::new(37.25),
                )],
                ..Default::default()
            },
            account: None,
        };
        let response = client
            .add_object(&Object::new("8 (912) 345-67-87"), &options)
            .await
            .unwrap();
        assert_eq!(response.code, "0");
        assert_eq!(response.message, "OK");

        let (url, params) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/api/demo/object_add")
        );
        assert_param(&params, "phone", "79123456787");
        assert_param(&params, "title", "Obj");
        assert_param(&params, "tariff", "manual");
        assert_param(&params, "destination[0][coord]", "55.50000000,37.25000000");
        assert_param(&params, "key", "secret");
    }

    #[tokio::test]
    async fn invalid_object_is_rejected_before_any_request() {
        let transport = FakeTransport::new(200, OK_ACTION);
        let client = make_client(transport.clone());

        let err = client
            .delete_object(&Object::new("12-34"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MovizorError::Validation(ValidationError::InvalidObject { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn invalid_subscription_is_rejected_before_any_request() {
        let transport = FakeTransport::new(200, OK_ACTION);
        let client = make_client(transport.clone());

        let options = SubscribeEventOptions::new(Object::new("79123456787"), EventType::Late);
        let err = client.subscribe_event(&options).await.unwrap_err();
        assert!(matches!(
            err,
            MovizorError::Validation(ValidationError::NoNotification)
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn api_error_envelope_maps_to_api_error() {
        let json = r#"
        {
          "result": "error",
          "code": "1",
          "error_code": "ERROR_PHONE",
          "error_text": "Object not found",
          "error_text_ru": "Объект не найден"
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport);

        let err = client
            .object_info(&Object::new("79123456787"))
            .await
            .unwrap_err();
        match err {
            MovizorError::Api {
                code,
                error_code,
                text,
                text_ru,
            } => {
                assert_eq!(code, "1");
                assert_eq!(error_code.as_deref(), Some("ERROR_PHONE"));
                assert_eq!(text.as_deref(), Some("Object not found"));
                assert_eq!(text_ru.as_deref(), Some("Объект не найден"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_success_http_status() {
        let client = make_client(FakeTransport::new(502, "bad gateway"));
        let err = client.objects().await.unwrap_err();
        assert!(matches!(
            err,
            MovizorError::HttpStatus {
                status: 502,
                body: Some(_)
            }
        ));

        let client = make_client(FakeTransport::new(503, "  "));
        let err = client.objects().await.unwrap_err();
        assert!(matches!(
            err,
            MovizorError::HttpStatus {
                status: 503,
                body: None
            }
        ));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_parse_error() {
        let client = make_client(FakeTransport::new(200, "{ not json }"));
        let err = client.objects().await.unwrap_err();
        assert!(matches!(err, MovizorError::Parse(_)));

        let json = r#"{"result":"success","code":"0","data":{"lat":"55,5","lon":"37.2","timestamp":1}}"#;
        let client = make_client(FakeTransport::new(200, json));
        let err = client
            .last_position(&Object::new("79123456787"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MovizorError::Parse(DecodeError::Field { field: "lat", .. })
        ));
    }

    #[tokio::test]
    async fn objects_decodes_list() {
        let json = r#"
        {
          "result": "success",
          "code": "0",
          "data": [{"phone": "79630005272", "status": "ok"}, {"phone": "79050005727", "status": "wait_off"}]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let list = client.objects().await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.objects[1].status, TrackingStatus::WaitOff);

        let (url, _) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/api/demo/object_list")
        );
    }

    #[tokio::test]
    async fn request_and_poll_position() {
        let transport = FakeTransport::with_responses(vec![
            (
                200,
                r#"{"result":"success","code":"0","data":{"request_id":"1432"}}"#.to_owned(),
            ),
            (
                200,
                r#"{"result":"success","code":"0","data":{"lat":"55.5","lon":"37.25","timestamp":"1548075614"}}"#
                    .to_owned(),
            ),
        ]);
        let client = make_client(transport.clone());

        let request = client
            .request_position(&Object::new("79123456787"))
            .await
            .unwrap();
        let position = client.requested_position(request).await.unwrap();
        assert_eq!(position.coordinates.lon, Coordinate::new(37.25));

        let requests = transport.requests();
        assert!(requests[0].0.ends_with("/demo/pos_request"));
        assert_param(&requests[0].1, "phone", "79123456787");
        assert!(requests[1].0.ends_with("/demo/pos_get"));
        assert_param(&requests[1].1, "id", "1432");
    }

    #[tokio::test]
    async fn edit_object_sends_activate() {
        let transport = FakeTransport::new(200, OK_ACTION);
        let client = make_client(transport.clone());

        let options = ObjectEditOptions {
            activate: true,
            ..Default::default()
        };
        client
            .edit_object(&Object::new("79123456787"), &options)
            .await
            .unwrap();

        let (url, params) = transport.last_request();
        assert!(url.unwrap().ends_with("/demo/object_edit"));
        assert_param(&params, "activate", "1");
    }

    #[tokio::test]
    async fn events_decodes_feed_entries() {
        let json = r#"
        {
          "result": "success",
          "code": "0",
          "data": [
            {"id": "2216", "timestamp": "1548075614", "phone": "79123456787", "type": "request_ok"}
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let options = ObjectEventsOptions {
            request_limit: Some(10),
            ..Default::default()
        };
        let events = client.events(&options).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, EventType::RequestOk);
        assert_eq!(events[0].phone, Object::new("79123456787"));

        let (url, params) = transport.last_request();
        assert!(url.unwrap().ends_with("/demo/events"));
        assert_param(&params, "req_limit", "10");
    }

    #[test]
    fn action_url_handles_trailing_slash() {
        let project = Project::new("demo").unwrap();
        let url = action_url("https://movizor.ru/api/", &project, "pos_last").unwrap();
        assert_eq!(url.as_str(), "https://movizor.ru/api/demo/pos_last");

        assert!(matches!(
            action_url("not a url", &project, "pos_last"),
            Err(MovizorError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn credentials_validate_and_hide_key() {
        assert!(Credentials::new(" ", "key").is_err());
        assert!(Credentials::new("demo", "").is_err());

        let credentials = Credentials::new("demo", "secret").unwrap();
        assert!(!format!("{credentials:?}").contains("secret"));
    }

    #[test]
    fn builder_rejects_invalid_endpoint() {
        let credentials = Credentials::new("demo", "secret").unwrap();
        let result = MovizorClient::builder(credentials)
            .endpoint("mailto:ops@example.com")
            .build();
        assert!(matches!(result, Err(MovizorError::InvalidEndpoint { .. })));
    }
}
