//! Common test utilities.
//!
//! This module contains an in-process fake notifications service for
//! integration tests. The fake implements the raw tonic `Service` contract
//! over the same wire types the client speaks, stores notifications in
//! memory, and records the request metadata of every call so tests can
//! assert on deadline and caller-identity propagation.
//! Import with `mod common;` in test files.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::{BufMut, Bytes, BytesMut};
use http_body_util::BodyExt;
use parking_lot::RwLock;
use prost::Message;
use tonic::codegen::http::{header, StatusCode};
use tonic::Status;

use notifications_client::proto::{
    CreateNotificationRequest, DeleteNotificationRequest, DeleteResponse, GetNotificationRequest,
    GetNotificationsRequest, Notification, NotificationRecord, NotificationResponse,
    NotificationType, NotificationTypesRequest, NotificationTypesResponse, NotificationsResponse,
};
use notifications_client::{
    ClientConfig, ClientResult, NotificationsClient, SecurityConfigProvider, SecurityTarget,
    ServiceAddress,
};

/// Request metadata captured for one call.
#[derive(Clone, Debug)]
pub struct CapturedCall {
    /// Full gRPC method path.
    pub path: String,
    /// Value of the `service-client` metadata entry, if present.
    pub caller: Option<String>,
    /// Raw `grpc-timeout` header, if present.
    pub grpc_timeout: Option<String>,
}

/// In-memory notification store plus captured call metadata.
#[derive(Default)]
pub struct TestStore {
    notifications: HashMap<String, Notification>,
    next_id: u64,
    pub calls: Vec<CapturedCall>,
}

/// Fake notifications service backed by [`TestStore`].
#[derive(Clone, Default)]
pub struct FakeNotificationsService {
    state: Arc<RwLock<TestStore>>,
}

impl FakeNotificationsService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the store for assertions.
    pub fn state(&self) -> Arc<RwLock<TestStore>> {
        Arc::clone(&self.state)
    }

    fn handle_types(&self, _req: NotificationTypesRequest) -> NotificationTypesResponse {
        NotificationTypesResponse {
            types: vec![
                NotificationType::Delivery.as_i32(),
                NotificationType::Order.as_i32(),
                NotificationType::Offer.as_i32(),
            ],
        }
    }

    fn handle_create(&self, req: CreateNotificationRequest) -> NotificationResponse {
        let mut state = self.state.write();
        state.next_id += 1;
        let id = format!("notification-{}", state.next_id);

        let notification = Notification {
            id: id.clone(),
            record: Some(NotificationRecord {
                actor_id: req.actor_id,
                subject_id: req.subject_id,
                transaction_id: req.transaction_id,
            }),
            content: req.content,
            r#type: req.r#type,
        };
        state.notifications.insert(id, notification.clone());

        NotificationResponse {
            notification: Some(notification),
        }
    }

    fn handle_get(&self, req: GetNotificationRequest) -> Result<NotificationResponse, Status> {
        let state = self.state.read();
        state
            .notifications
            .get(&req.id)
            .map(|notification| NotificationResponse {
                notification: Some(notification.clone()),
            })
            .ok_or_else(|| Status::not_found(format!("notification {} not found", req.id)))
    }

    fn handle_list(&self, req: GetNotificationsRequest) -> NotificationsResponse {
        let state = self.state.read();
        let notifications = state
            .notifications
            .values()
            .filter(|n| {
                n.record
                    .as_ref()
                    .is_some_and(|r| r.actor_id == req.actor_id)
            })
            .cloned()
            .collect();
        NotificationsResponse { notifications }
    }

    fn handle_delete(&self, req: DeleteNotificationRequest) -> Result<DeleteResponse, Status> {
        let mut state = self.state.write();
        match state.notifications.remove(&req.id) {
            Some(_) => Ok(DeleteResponse { ok: true }),
            None => Err(Status::not_found(format!(
                "notification {} not found",
                req.id
            ))),
        }
    }
}

impl tonic::server::NamedService for FakeNotificationsService {
    const NAME: &'static str = "notifications.v1.Notifications";
}

impl<B> tonic::codegen::Service<tonic::codegen::http::Request<B>> for FakeNotificationsService
where
    B: tonic::codegen::Body + Send + 'static,
    B::Data: Into<Bytes> + Send,
    B::Error: Into<tonic::codegen::StdError> + Send + 'static,
{
    type Response = tonic::codegen::http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: tonic::codegen::http::Request<B>) -> Self::Future {
        let service = self.clone();
        let path = req.uri().path().to_string();

        let header_str = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        let captured = CapturedCall {
            path: path.clone(),
            caller: header_str("service-client"),
            grpc_timeout: header_str("grpc-timeout"),
        };

        Box::pin(async move {
            service.state.write().calls.push(captured);

            let body = match read_unary_body(req.into_body()).await {
                Ok(body) => body,
                Err(status) => return Ok(grpc_error_response(status)),
            };

            let response = match path.as_str() {
                "/notifications.v1.Notifications/GetNotificationTypes" => {
                    match decode_grpc_message::<NotificationTypesRequest>(&body) {
                        Ok(req) => grpc_response(encode_grpc_message(&service.handle_types(req))),
                        Err(status) => grpc_error_response(status),
                    }
                }
                "/notifications.v1.Notifications/CreateNotification" => {
                    match decode_grpc_message::<CreateNotificationRequest>(&body) {
                        Ok(req) => grpc_response(encode_grpc_message(&service.handle_create(req))),
                        Err(status) => grpc_error_response(status),
                    }
                }
                "/notifications.v1.Notifications/GetNotification" => {
                    match decode_grpc_message::<GetNotificationRequest>(&body) {
                        Ok(req) => match service.handle_get(req) {
                            Ok(resp) => grpc_response(encode_grpc_message(&resp)),
                            Err(status) => grpc_error_response(status),
                        },
                        Err(status) => grpc_error_response(status),
                    }
                }
                "/notifications.v1.Notifications/GetNotifications" => {
                    match decode_grpc_message::<GetNotificationsRequest>(&body) {
                        Ok(req) => grpc_response(encode_grpc_message(&service.handle_list(req))),
                        Err(status) => grpc_error_response(status),
                    }
                }
                "/notifications.v1.Notifications/DeleteNotification" => {
                    match decode_grpc_message::<DeleteNotificationRequest>(&body) {
                        Ok(req) => match service.handle_delete(req) {
                            Ok(resp) => grpc_response(encode_grpc_message(&resp)),
                            Err(status) => grpc_error_response(status),
                        },
                        Err(status) => grpc_error_response(status),
                    }
                }
                _ => grpc_error_response(Status::unimplemented(format!(
                    "unknown method: {}",
                    path
                ))),
            };

            Ok(response)
        })
    }
}

/// Collect the data frames of a unary request body.
async fn read_unary_body<B>(body: B) -> Result<Bytes, Status>
where
    B: tonic::codegen::Body + Send + 'static,
    B::Data: Into<Bytes> + Send,
    B::Error: Into<tonic::codegen::StdError> + Send + 'static,
{
    let mut data = BytesMut::new();
    let mut pinned_body = std::pin::pin!(body);

    loop {
        match pinned_body.as_mut().frame().await {
            Some(Ok(frame)) => {
                if frame.is_data() {
                    if let Ok(chunk) = frame.into_data() {
                        let chunk_bytes: Bytes = chunk.into();
                        data.extend_from_slice(&chunk_bytes);
                        // gRPC frame: 1 byte compressed flag + 4 bytes length + message
                        if data.len() >= 5 {
                            let msg_len =
                                u32::from_be_bytes([data[1], data[2], data[3], data[4]]) as usize;
                            if data.len() >= 5 + msg_len {
                                break;
                            }
                        }
                    }
                } else if frame.is_trailers() {
                    break;
                }
            }
            Some(Err(_)) => {
                return Err(Status::internal("failed to read request body"));
            }
            None => break,
        }
    }

    Ok(data.freeze())
}

/// Decode a gRPC message from body bytes (strips the 5-byte header).
fn decode_grpc_message<M: Message + Default>(body: &Bytes) -> Result<M, Status> {
    if body.len() < 5 {
        return Err(Status::invalid_argument("gRPC message too short"));
    }

    let len = u32::from_be_bytes([body[1], body[2], body[3], body[4]]) as usize;
    if body.len() < 5 + len {
        return Err(Status::invalid_argument("gRPC message truncated"));
    }

    let msg_bytes = &body[5..5 + len];
    M::decode(msg_bytes).map_err(|e| Status::invalid_argument(format!("decode error: {}", e)))
}

/// Encode a gRPC message to bytes (adds the 5-byte header).
fn encode_grpc_message<M: Message>(msg: &M) -> Bytes {
    let encoded = msg.encode_to_vec();
    let mut buf = BytesMut::with_capacity(5 + encoded.len());
    buf.put_u8(0); // not compressed
    buf.put_u32(encoded.len() as u32);
    buf.put_slice(&encoded);
    buf.freeze()
}

/// A gRPC body that sends one data frame, then trailers with grpc-status 0.
struct UnaryBody {
    data: Option<Bytes>,
    trailers_sent: bool,
}

impl http_body::Body for UnaryBody {
    type Data = Bytes;
    type Error = Status;

    fn poll_frame(
        mut self: std::pin::Pin<&mut Self>,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Result<http_body::Frame<Self::Data>, Self::Error>>> {
        if let Some(data) = self.data.take() {
            return std::task::Poll::Ready(Some(Ok(http_body::Frame::data(data))));
        }
        if !self.trailers_sent {
            self.trailers_sent = true;
            let mut trailers = tonic::codegen::http::HeaderMap::new();
            trailers.insert("grpc-status", "0".parse().unwrap());
            return std::task::Poll::Ready(Some(Ok(http_body::Frame::trailers(trailers))));
        }
        std::task::Poll::Ready(None)
    }

    fn is_end_stream(&self) -> bool {
        self.data.is_none() && self.trailers_sent
    }
}

/// Build a successful gRPC response.
fn grpc_response(body: Bytes) -> tonic::codegen::http::Response<tonic::body::BoxBody> {
    let body = tonic::body::BoxBody::new(UnaryBody {
        data: Some(body),
        trailers_sent: false,
    });

    tonic::codegen::http::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/grpc")
        .body(body)
        .unwrap()
}

/// Build a gRPC error response.
fn grpc_error_response(status: Status) -> tonic::codegen::http::Response<tonic::body::BoxBody> {
    status.into_http()
}

/// A provider that always fails. Used both to prove construction fails
/// closed on provider errors and as a stand-in where the insecure path
/// never consults the provider.
pub struct FailingProvider;

impl SecurityConfigProvider for FailingProvider {
    fn client_tls(
        &self,
        target: SecurityTarget,
    ) -> ClientResult<tonic::transport::ClientTlsConfig> {
        Err(notifications_client::ClientError::Configuration {
            message: format!("no credentials for profile {}", target.profile_name()),
        })
    }
}

/// Start the fake service on an ephemeral local port.
pub async fn start_fake_server() -> (SocketAddr, FakeNotificationsService) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake server");
    let addr = listener.local_addr().expect("local addr");
    let service = FakeNotificationsService::new();

    let server_service = service.clone();
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(server_service)
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .ok();
    });

    (addr, service)
}

/// Connect a plaintext client to the fake service.
pub async fn connect_client(addr: SocketAddr, config: ClientConfig) -> NotificationsClient {
    let addr = ServiceAddress::new(addr.ip().to_string(), addr.port().to_string());
    NotificationsClient::connect_to(addr, config.with_insecure(), &FailingProvider)
        .await
        .expect("connect to fake server")
}
