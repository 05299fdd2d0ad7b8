// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, anyhow};
use std::thread;
use std::time::Duration;
use tiny_http::{Header, Response, Server};
use vitrina_api::Client;
use vitrina_app::Category;

fn json_header() -> Header {
    Header::from_bytes("Content-Type", "application/json").expect("valid content type header")
}

#[test]
fn fetch_error_contains_actionable_remediation() {
    let client = Client::new("http://127.0.0.1:1", Duration::from_millis(50))
        .expect("client should initialize");

    let error = client
        .fetch_projects(Category::All)
        .expect_err("fetch should fail for unreachable endpoint");
    let message = error.to_string();
    assert!(message.contains("cannot reach"));
    assert!(message.contains("api.base_url"));
}

#[test]
fn fetch_projects_maps_image_url_and_preserves_order() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/projects?category=ALL");
        let body = concat!(
            r#"{"projects":["#,
            r#"{"id":"1","name":"Music Page","image_url":"https://assets.example/music.png"},"#,
            r#"{"id":"2","name":"Tourism Site","image_url":"https://assets.example/tourism.png"}"#,
            r#"]}"#,
        );
        let response = Response::from_string(body)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let projects = client.fetch_projects(Category::All)?;

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "1");
    assert_eq!(projects[0].name, "Music Page");
    assert_eq!(projects[0].image_url, "https://assets.example/music.png");
    assert_eq!(projects[1].id, "2");
    assert_eq!(projects[1].image_url, "https://assets.example/tourism.png");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn fetch_projects_sends_selected_category_id() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        assert_eq!(request.url(), "/projects?category=REACT");
        let response = Response::from_string(r#"{"projects":[]}"#)
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let projects = client.fetch_projects(Category::React)?;
    assert!(projects.is_empty());

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn non_success_status_becomes_error() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string(r#"{"error_msg":"no such category"}"#)
            .with_status_code(404)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_projects(Category::React)
        .expect_err("404 should fail");
    assert_eq!(error.to_string(), "server error (404): no such category");

    handle.join().expect("server thread should join");
    Ok(())
}

#[test]
fn malformed_success_body_becomes_decode_error() -> Result<()> {
    let server =
        Server::http("127.0.0.1:0").map_err(|error| anyhow!("start mock server: {error}"))?;
    let addr = format!("http://{}", server.server_addr());

    let handle = thread::spawn(move || {
        let request = server.recv().expect("request expected");
        let response = Response::from_string("not json at all")
            .with_status_code(200)
            .with_header(json_header());
        request.respond(response).expect("response should succeed");
    });

    let client = Client::new(&addr, Duration::from_secs(1))?;
    let error = client
        .fetch_projects(Category::Static)
        .expect_err("garbage body should fail");
    assert!(error.to_string().contains("decode project list"));

    handle.join().expect("server thread should join");
    Ok(())
}
