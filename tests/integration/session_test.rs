//! Client tests over the real session
//!
//! Every request goes through `reqwest` to a local mockito server, so these
//! check what actually reaches the wire.

use super::{init_test_env, unreachable_url};
use mockito::Matcher;
use request_client::client::DEFAULT_USER_AGENT;
use request_client::{Client, ClientConfig, ClientError, RequestOptions, TransportError};
use serde_json::{json, Value};
use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

#[test]
fn test_get_sends_default_headers() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/users/1")
        .match_header("user-agent", DEFAULT_USER_AGENT)
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1, "name": "Leanne Graham"}"#)
        .create();

    let client = Client::new(server.url(), 30);
    let response = client.get("/users/1", RequestOptions::new()).unwrap();

    mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type(), Some("application/json"));

    let user: Value = response.json().unwrap();
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Leanne Graham");
}

#[test]
fn test_set_header_reaches_the_wire() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/users")
        .match_header("x-api-key", "secret")
        .match_header("user-agent", DEFAULT_USER_AGENT)
        .match_header("accept", "application/json")
        .with_status(200)
        .create();

    let mut client = Client::new(server.url(), 30);
    client.set_header("X-API-Key", "secret");
    client.get("/users", RequestOptions::new()).unwrap();

    mock.assert();
}

#[test]
fn test_get_with_query_and_extra_header() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .match_header("x-custom", "value")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body("[]")
        .create();

    let client = Client::new(format!("{}/", server.url()), 30);
    let options = RequestOptions::new()
        .query("page", "1")
        .query("limit", "10")
        .header("X-Custom", "value");
    let response = client.get("users", options).unwrap();

    mock.assert();
    assert_eq!(response.text().unwrap(), "[]");
}

#[test]
fn test_post_json() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/posts")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "title": "Hello",
            "body": "Testing POST",
            "userId": 1
        })))
        .with_status(201)
        .with_body(r#"{"id": 101, "title": "Hello"}"#)
        .create();

    let client = Client::new(server.url(), 30);
    let body = json!({"title": "Hello", "body": "Testing POST", "userId": 1});
    let response = client
        .post("/posts", None, Some(&body), RequestOptions::new())
        .unwrap();

    mock.assert();
    assert_eq!(response.status_code, 201);
    assert_eq!(response.json::<Value>().unwrap()["id"], 101);
}

#[test]
fn test_post_form() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/login")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body("username=test&password=123")
        .with_status(200)
        .create();

    let client = Client::new(server.url(), 30);
    let form = [("username", "test"), ("password", "123")];
    client
        .post("/login", Some(&form[..]), None, RequestOptions::new())
        .unwrap();

    mock.assert();
}

#[test]
fn test_post_with_both_bodies_sends_json() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/both")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"b": 2})))
        .with_status(200)
        .create();

    let client = Client::new(server.url(), 30);
    let form = [("a", "1")];
    let body = json!({"b": 2});
    client
        .post("/both", Some(&form[..]), Some(&body), RequestOptions::new())
        .unwrap();

    mock.assert();
}

#[test]
fn test_put_json() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/users/1")
        .match_body(Matcher::Json(json!({"name": "updated_name"})))
        .with_status(200)
        .with_body(r#"{"updated": true}"#)
        .create();

    let client = Client::new(server.url(), 30);
    let body = json!({"name": "updated_name"});
    let response = client
        .put("/users/1", None, Some(&body), RequestOptions::new())
        .unwrap();

    mock.assert();
    assert_eq!(response.json::<Value>().unwrap()["updated"], true);
}

#[test]
fn test_auth_headers_reach_the_wire() {
    init_test_env();
    let mut server = mockito::Server::new();
    let bearer = server
        .mock("GET", "/me")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .create();
    let basic = server
        .mock("GET", "/admin")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .create();

    let mut client = Client::new(server.url(), 30);
    client.set_auth("tok123");
    client.get("/me", RequestOptions::new()).unwrap();

    client.set_basic_auth("user", "pass");
    client.get("/admin", RequestOptions::new()).unwrap();

    bearer.assert();
    basic.assert();
}

#[test]
fn test_error_status_is_a_response() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/broken")
        .with_status(500)
        .with_body("boom")
        .expect(1)
        .create();

    let client = Client::new(server.url(), 30);
    let response = client.get("/broken", RequestOptions::new()).unwrap();

    // Exactly one request: no retry on a 5xx
    mock.assert();
    assert_eq!(response.status_code, 500);
    assert!(response.is_server_error());
    assert_eq!(response.text().unwrap(), "boom");
}

#[test]
fn test_absolute_url_bypasses_base() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/data").with_status(200).create();

    let client = Client::new("https://api.example.invalid", 30);
    let response = client
        .get(&format!("{}/data", server.url()), RequestOptions::new())
        .unwrap();

    mock.assert();
    assert!(response.is_success());
}

#[test]
fn test_redirects_follow_configuration() {
    init_test_env();
    let mut server = mockito::Server::new();
    let _old = server
        .mock("GET", "/old")
        .with_status(302)
        .with_header("location", "/new")
        .create();
    let _new = server.mock("GET", "/new").with_status(200).create();

    let following = Client::new(server.url(), 30);
    let response = following.get("/old", RequestOptions::new()).unwrap();
    assert_eq!(response.status_code, 200);
    assert!(response.url.ends_with("/new"));

    let config = ClientConfig {
        base_url: server.url(),
        follow_redirects: false,
        ..ClientConfig::default()
    };
    let not_following = Client::from_config(config).unwrap();
    let response = not_following.get("/old", RequestOptions::new()).unwrap();
    assert_eq!(response.status_code, 302);
    assert!(response.is_redirect());
    assert_eq!(response.header("Location"), Some("/new"));
}

#[test]
fn test_connection_error_is_get_error() {
    init_test_env();
    let client = Client::new(unreachable_url(), 10);

    let err = client.get("/users", RequestOptions::new()).unwrap_err();

    assert!(matches!(err, ClientError::Get(_)));
    let message = err.to_string();
    assert!(message.contains("GET failed"));
    assert!(message.contains(&err.cause().to_string()));
}

#[test]
fn test_connection_error_is_post_and_put_error() {
    init_test_env();
    let client = Client::new(unreachable_url(), 10);
    let body = json!({"name": "test"});

    let err = client
        .post("/users", None, Some(&body), RequestOptions::new())
        .unwrap_err();
    assert!(matches!(err, ClientError::Post(_)));
    assert!(err.to_string().contains("POST failed"));

    let err = client
        .put("/users/1", None, Some(&body), RequestOptions::new())
        .unwrap_err();
    assert!(matches!(err, ClientError::Put(_)));
    assert!(err.to_string().contains("PUT failed"));
}

#[test]
fn test_timeout_is_reported_as_timeout() {
    init_test_env();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept the connection, read the request, never answer
    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            thread::sleep(Duration::from_secs(2));
        }
    });

    let client = Client::new(format!("http://{}", addr), 30);
    let err = client
        .get("/slow", RequestOptions::new().timeout(Duration::from_millis(200)))
        .unwrap_err();

    assert!(matches!(err, ClientError::Get(TransportError::Timeout(_))));
    assert!(err.to_string().starts_with("GET failed: Request timed out"));

    handle.join().unwrap();
}

#[test]
fn test_invalid_header_value_fails_at_send() {
    init_test_env();
    let mut client = Client::new("http://127.0.0.1:9", 30);
    client.set_header("X-Bad", "line\nbreak");

    let err = client.get("/", RequestOptions::new()).unwrap_err();
    assert!(matches!(err, ClientError::Get(TransportError::BuildError(_))));
}

#[test]
fn test_repeated_response_headers_are_joined() {
    init_test_env();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/login")
        .with_status(200)
        .with_header("set-cookie", "a=1")
        .with_header("set-cookie", "b=2")
        .create();

    let client = Client::new(server.url(), 30);
    let response = client.get("/login", RequestOptions::new()).unwrap();

    mock.assert();
    let cookies = response.header("set-cookie").unwrap();
    assert!(cookies.contains("a=1"));
    assert!(cookies.contains("b=2"));
    assert_eq!(cookies, "a=1, b=2");
}
