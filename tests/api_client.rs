mod support;

use support::http::{closed_port_url, serve_json_once, serve_raw_once};

use std::time::Duration;
use wastelens::api::{
    ApiClient, ClassifierApi, ImageFile, RequestError, RetrainError, RetrainOutcome,
};

fn image(name: &str, bytes: &[u8]) -> ImageFile {
    ImageFile::from_bytes(name, bytes.to_vec()).expect("supported image name")
}

const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn predict_posts_single_image_field_and_parses_result() {
    let (url, requests) = serve_json_once(
        200,
        r#"{"success":true,"predicted_class":"Glass","confidence":0.9346,"confidence_percent":93.46,
            "all_predictions":{"Glass":0.9346,"Metal":0.05,"Plastic":0.0154},
            "latency_ms":128.7,"timestamp":"2025-01-01T00:00:00"}"#,
    );
    let client = ApiClient::new(url);

    let result = client
        .predict_waste(&image("bottle.png", b"PNGDATA"))
        .expect("prediction");

    assert_eq!(result.predicted_class, "Glass");
    assert_eq!(result.confidence_percent, 93.46);
    assert_eq!(result.all_predictions.len(), 3);
    assert_eq!(result.latency_ms, 128.7);

    let request = requests.recv_timeout(RECEIVE_TIMEOUT).unwrap();
    assert!(request.request_line.starts_with("POST /predict "));
    let content_type = request.header("content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = request.body_text();
    assert!(body.contains("name=\"image\"; filename=\"bottle.png\""));
    assert!(body.contains("Content-Type: image/png"));
    assert!(body.contains("PNGDATA"));
    assert_eq!(body.matches("filename=").count(), 1);
}

#[test]
fn predict_error_status_is_a_request_error() {
    let (url, _requests) = serve_json_once(500, r#"{"error":"model not loaded"}"#);
    let client = ApiClient::new(url);

    let err = client
        .predict_waste(&image("bottle.jpg", b"JPEG"))
        .unwrap_err();

    assert!(matches!(
        err,
        RequestError::Status {
            endpoint: "predict",
            status: 500
        }
    ));
}

#[test]
fn predict_with_malformed_body_is_invalid_response() {
    let (url, _requests) = serve_json_once(200, "<html>oops</html>");
    let client = ApiClient::new(url);

    let err = client
        .predict_waste(&image("bottle.jpg", b"JPEG"))
        .unwrap_err();

    assert!(matches!(err, RequestError::InvalidResponse { .. }));
}

#[test]
fn predict_against_closed_port_is_transport_error() {
    let client = ApiClient::new(closed_port_url());

    let err = client
        .predict_waste(&image("bottle.jpg", b"JPEG"))
        .unwrap_err();

    assert!(matches!(err, RequestError::Transport { .. }));
}

#[test]
fn retrain_sends_every_file_under_images_field() {
    let (url, requests) = serve_json_once(
        200,
        r#"{"success":true,"message":"Images uploaded","images_received":2}"#,
    );
    let client = ApiClient::new(url);

    let outcome = client
        .retrain_upload(&[image("a.png", b"AAA"), image("b.webp", b"BBB")])
        .expect("retrain");

    assert_eq!(outcome, RetrainOutcome::Accepted { images_received: 2 });
    let request = requests.recv_timeout(RECEIVE_TIMEOUT).unwrap();
    assert!(request.request_line.starts_with("POST /retrain "));
    let body = request.body_text();
    assert!(body.contains("name=\"images\"; filename=\"a.png\""));
    assert!(body.contains("name=\"images\"; filename=\"b.webp\""));
    assert!(body.contains("Content-Type: image/webp"));
}

#[test]
fn retrain_failure_envelope_is_returned_even_on_error_status() {
    let (url, _requests) = serve_json_once(400, r#"{"success":false,"error":"No valid images"}"#);
    let client = ApiClient::new(url);

    let outcome = client
        .retrain_upload(&[image("a.png", b"AAA")])
        .expect("envelope");

    assert_eq!(
        outcome,
        RetrainOutcome::Rejected {
            error: "No valid images".into()
        }
    );
}

#[test]
fn retrain_error_status_without_envelope_is_request_error() {
    let (url, _requests) = serve_raw_once(
        "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 3\r\nConnection: close\r\n\r\nbad".into(),
    );
    let client = ApiClient::new(url);

    let err = client.retrain_upload(&[image("a.png", b"AAA")]).unwrap_err();

    assert!(matches!(
        err,
        RetrainError::Request(RequestError::Status { status: 502, .. })
    ));
}

#[test]
fn health_classes_and_stats_are_parsed() {
    let (url, requests) = serve_json_once(
        200,
        r#"{"status":"healthy","uptime_seconds":12.5,"total_requests":4,
            "average_prediction_time_ms":120.0,"model_loaded":true,"timestamp":"now"}"#,
    );
    let health = ApiClient::new(url).get_health().expect("health");
    assert_eq!(health.summary(), "healthy (model loaded)");
    assert!(
        requests
            .recv_timeout(RECEIVE_TIMEOUT)
            .unwrap()
            .request_line
            .starts_with("GET /health ")
    );

    let (url, _requests) = serve_json_once(
        200,
        r#"{"classes":["Cardboard","Glass"],"num_classes":2}"#,
    );
    let classes = ApiClient::new(url).get_classes().expect("classes");
    assert_eq!(classes.classes, ["Cardboard", "Glass"]);

    let (url, _requests) = serve_json_once(
        200,
        r#"{"total_requests":10,"uptime_hours":1.5,
            "predictions":{"count":3,"average_latency_ms":110.0,"min_latency_ms":90.0,"max_latency_ms":130.0},
            "timestamp":"now"}"#,
    );
    let stats = ApiClient::new(url).get_stats().expect("stats");
    assert_eq!(stats.total_requests, 10);
    assert_eq!(stats.predictions.count, 3);
}

#[test]
fn health_error_status_is_a_request_error() {
    let (url, _requests) = serve_json_once(503, r#"{"status":"down"}"#);

    let err = ApiClient::new(url).get_health().unwrap_err();

    assert_eq!(err.to_string(), "health failed with HTTP 503");
}
