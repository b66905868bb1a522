//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use wishlist_core::{
    decode_claims, is_admin_token, ApiError, HttpMethod, HttpRequest, HttpResponse, Movie,
    MovieId, NewMovie, WishlistClient,
};

const BASE_URL: &str = "http://localhost:3001/api";

fn client() -> WishlistClient {
    WishlistClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn token(case: &Value) -> Option<&str> {
    case["token"].as_str()
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse::new(
        sim["status"].as_u64().unwrap() as u16,
        sim["body"].as_str().unwrap(),
    )
}

fn input_id(case: &Value) -> MovieId {
    serde_json::from_value(case["input_id"].clone()).unwrap()
}

/// Compare method, path and headers of a built request with the vector.
fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn check_error(name: &str, err: ApiError, expected: &str) {
    match expected {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
        "Unauthorized" => assert!(
            matches!(err, ApiError::Unauthorized { .. }),
            "{name}: expected Unauthorized"
        ),
        "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_movies(token(case));
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_list_movies(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Vec<Movie> = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn add_test_vectors() {
    let raw = include_str!("../../test-vectors/add.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: NewMovie = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_add_movie(&input, token(case)).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_add_movie(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Movie = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[test]
fn toggle_test_vectors() {
    let raw = include_str!("../../test-vectors/toggle.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_toggle_watched(&input_id(case), token(case));
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_toggle_watched(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let expected: Movie = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_delete_movie(&input_id(case), token(case));
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_movie(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}

// ---------------------------------------------------------------------------
// Claims
// ---------------------------------------------------------------------------

#[test]
fn claims_test_vectors() {
    let raw = include_str!("../../test-vectors/claims.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let token = match case["payload"].as_str() {
            Some(payload) => format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload)),
            None => case["raw_token"].as_str().unwrap().to_string(),
        };

        if case["expected_none"].as_bool() == Some(true) {
            assert!(decode_claims(&token).is_none(), "{name}: expected None");
            assert!(!is_admin_token(&token), "{name}: not admin");
        } else {
            let claims = decode_claims(&token).unwrap_or_else(|| panic!("{name}: decode"));
            let expected = case["expected_admin"].as_bool().unwrap();
            assert_eq!(claims.is_admin(), expected, "{name}: is_admin");
        }
    }
}
