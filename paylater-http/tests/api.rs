//! End-to-end exercises of the API surfaces against a mocked platform.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use paylater::{
    Amount, AuthorizePurchaseRequest, CapturePurchaseRequest, Currency, InitializePurchaseRequest,
    MethodType, OperationStatus, PurchaseState, RefundPurchaseRequest,
};
use paylater_http::api::{LegalDocumentsApi, PurchaseAuthorizationApi, PurchaseLifecycleApi};
use paylater_http::{
    Communicator, CommunicatorLogger, Configuration, Credentials, PayLaterError, factory,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn secret_key() -> Credentials {
    Credentials::SecretKey("sk-test".into())
}

fn communicator_for(server: &MockServer) -> Arc<Communicator> {
    Arc::new(factory::create_communicator_with_endpoint(
        server.uri().parse().expect("mock server URI"),
    ))
}

fn operation_response(purchase_id: &str, state: &str) -> serde_json::Value {
    json!({
        "result": {
            "operationId": "42049cb1-0db4-44b8-b1a3-6905ce153a10",
            "status": "OK",
            "statusCode": "0.0.0",
            "statusMessage": "Operation performed successfully"
        },
        "purchase": {
            "purchaseId": purchase_id,
            "state": state,
            "currency": "EUR",
            "purchaseAmount": {"amount": 50_000, "currency": "EUR"}
        }
    })
}

#[tokio::test]
async fn capture_purchase_decodes_the_response() {
    let server = MockServer::start().await;
    let request = CapturePurchaseRequest::new(Amount::new(25_000, Currency::Eur))
        .with_purchase_id("CID-kdifr9ho54zavijvr9jv");

    Mock::given(method("POST"))
        .and(path("/purchase/capture"))
        .and(header("paysafe-pl-secret-key", "sk-test"))
        .and(header("content-type", "application/json"))
        .and(body_json(&request))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(operation_response("CID-kdifr9ho54zavijvr9jv", "FULFILLMENT")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = PurchaseLifecycleApi::new(communicator_for(&server));
    let response = api.capture_purchase(&request, &secret_key()).await.unwrap();

    assert_eq!(response.result.status, OperationStatus::Ok);
    let purchase = response.purchase.unwrap();
    assert_eq!(purchase.purchase_id, "CID-kdifr9ho54zavijvr9jv");
    assert_eq!(purchase.state, PurchaseState::Fulfillment);
    assert_eq!(purchase.purchase_amount, Some(Amount::new(50_000, Currency::Eur)));
}

#[tokio::test]
async fn refund_error_carries_the_platform_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purchase/refund"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "INVALID_AMOUNT",
            "message": "Refund exceeds the captured amount"
        })))
        .mount(&server)
        .await;

    let api = PurchaseLifecycleApi::new(communicator_for(&server));
    let request = RefundPurchaseRequest::new(
        "CID-kdifr9ho54zavijvr9jv",
        Amount::new(999_999, Currency::Eur),
    );
    let result = api.refund_purchase(&request, &secret_key()).await;

    match result {
        Err(PayLaterError::Api(error)) => {
            assert_eq!(error.status.as_u16(), 400);
            assert_eq!(error.error_code.as_deref(), Some("INVALID_AMOUNT"));
            assert_eq!(
                error.message.as_deref(),
                Some("Refund exceeds the captured amount")
            );
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn initialize_pairs_body_with_access_token_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purchase/initialize"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("access_token", "abc123")
                .set_body_json(operation_response("CID-kdifr9ho54zavijvr9jv", "INITIALIZED")),
        )
        .mount(&server)
        .await;

    let api = PurchaseLifecycleApi::new(communicator_for(&server));
    let request = InitializePurchaseRequest::new(Amount::new(50_000, Currency::Eur));
    let (response, authorization) = api
        .initialize_purchase(&request, &secret_key())
        .await
        .unwrap()
        .into_parts();

    assert_eq!(authorization, "abc123");
    let purchase = response.purchase.unwrap();
    assert_eq!(purchase.state, PurchaseState::Initialized);
}

#[tokio::test]
async fn authorization_token_is_sent_as_bearer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purchase/authorization/paylater"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(operation_response(
                "CID-kdifr9ho54zavijvr9jv",
                "AUTHORIZATION_PENDING",
            )),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = PurchaseAuthorizationApi::new(communicator_for(&server));
    let request = AuthorizePurchaseRequest::new()
        .with_purchase_id("CID-kdifr9ho54zavijvr9jv")
        .with_method(MethodType::Url)
        .with_success_url("https://example.com/successUrl")
        .with_callback_url("https://example.com/callbackUrl");
    let response = api
        .authorize_pay_later(&request, &Credentials::AuthorizationToken("abc123".into()))
        .await
        .unwrap();

    assert_eq!(
        response.purchase.unwrap().state,
        PurchaseState::AuthorizationPending
    );
}

#[tokio::test]
async fn terms_and_conditions_returns_the_html_body() {
    let server = MockServer::start().await;
    let html = "<html><body>Terms and conditions</body></html>";

    Mock::given(method("GET"))
        .and(path(
            "/purchase/legaldocuments/termsandconditions/CID-kdifr9ho54zavijvr9jv",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(&server)
        .await;

    let api = LegalDocumentsApi::new(communicator_for(&server));
    let document = api
        .terms_and_conditions("CID-kdifr9ho54zavijvr9jv", &secret_key())
        .await
        .unwrap();

    assert_eq!(document, html);
}

#[tokio::test]
async fn closed_communicator_never_touches_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let communicator = communicator_for(&server);
    communicator.close();

    let api = PurchaseLifecycleApi::new(Arc::clone(&communicator));
    let result = api
        .get_purchase("CID-kdifr9ho54zavijvr9jv", &secret_key())
        .await;

    assert!(matches!(result, Err(PayLaterError::Closed)));
    server.verify().await;
}

#[tokio::test]
async fn concurrent_calls_do_not_cross_deliver() {
    let server = MockServer::start().await;
    for id in ["CID-aaaaaaaaaaaaaaaaaaaa", "CID-bbbbbbbbbbbbbbbbbbbb"] {
        Mock::given(method("GET"))
            .and(path(format!("/purchase/info/{id}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(operation_response(id, "AUTHORIZED")),
            )
            .mount(&server)
            .await;
    }

    let api = PurchaseLifecycleApi::new(communicator_for(&server));
    let credentials = secret_key();
    let (first, second) = tokio::join!(
        api.get_purchase("CID-aaaaaaaaaaaaaaaaaaaa", &credentials),
        api.get_purchase("CID-bbbbbbbbbbbbbbbbbbbb", &credentials),
    );

    assert_eq!(
        first.unwrap().purchase.unwrap().purchase_id,
        "CID-aaaaaaaaaaaaaaaaaaaa"
    );
    assert_eq!(
        second.unwrap().purchase.unwrap().purchase_id,
        "CID-bbbbbbbbbbbbbbbbbbbb"
    );
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    // Bind to an ephemeral port, then drop the listener so nothing answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let communicator = Arc::new(factory::create_communicator_with_endpoint(
        format!("http://127.0.0.1:{port}").parse().unwrap(),
    ));
    let api = PurchaseLifecycleApi::new(communicator);
    let result = api
        .get_purchase("CID-kdifr9ho54zavijvr9jv", &secret_key())
        .await;

    match result {
        Err(PayLaterError::Transport { .. }) => {}
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn stalled_read_past_the_timeout_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/purchase/info/CID-kdifr9ho54zavijvr9jv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(operation_response("CID-kdifr9ho54zavijvr9jv", "AUTHORIZED"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let configuration = Configuration::new(server.uri().parse().unwrap())
        .with_read_timeout(Duration::from_millis(200));
    let api = PurchaseLifecycleApi::new(Arc::new(Communicator::from_configuration(&configuration)));
    let result = api
        .get_purchase("CID-kdifr9ho54zavijvr9jv", &secret_key())
        .await;

    match result {
        Err(PayLaterError::Transport { .. }) => {}
        other => panic!("expected Transport error, got {other:?}"),
    }
}

/// Logger double that collects every message.
#[derive(Default)]
struct CollectingLogger {
    messages: Mutex<Vec<String>>,
}

impl CommunicatorLogger for CollectingLogger {
    fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }

    fn log_error(&self, message: &str, _error: &(dyn std::error::Error + 'static)) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[tokio::test]
async fn logging_reports_redacted_request_and_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/purchase/capture"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(operation_response("CID-kdifr9ho54zavijvr9jv", "FULFILLMENT")),
        )
        .mount(&server)
        .await;

    let communicator = communicator_for(&server);
    let logger = Arc::new(CollectingLogger::default());
    communicator.enable_logging(Arc::clone(&logger) as Arc<dyn CommunicatorLogger>);

    let api = PurchaseLifecycleApi::new(Arc::clone(&communicator));
    let request = CapturePurchaseRequest::new(Amount::new(25_000, Currency::Eur))
        .with_purchase_id("CID-kdifr9ho54zavijvr9jv");
    api.capture_purchase(&request, &secret_key()).await.unwrap();

    let messages = logger.messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Outgoing request"));
    assert!(messages[1].starts_with("Incoming response"));
    assert!(!messages[0].contains("sk-test"), "secret key must be masked");

    drop(messages);
    communicator.disable_logging();
    api.capture_purchase(&request, &secret_key()).await.unwrap();
    assert_eq!(logger.messages.lock().unwrap().len(), 2);
}
