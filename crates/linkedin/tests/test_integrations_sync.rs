#![cfg(feature = "client-ureq")]

//! The blocking client against the same mock LinkedIn. Run with
//! `--no-default-features --features client-ureq`.

use libs::serde_json::json;
use linkedin::{model::Urn, prelude::*, ClientError, Config, LinkedIn, MediaSource, Token};
use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use std::{fs, net::TcpListener, time::Duration};

const ASSET: &str = "urn:li:digitalmediaAsset:C5522AQGTYER3k3ByHQ";

fn client(server: &ServerGuard) -> LinkedIn {
    let config = Config {
        api_base_url: format!("{}/v2/", server.url()),
        ..Default::default()
    };
    LinkedIn::with_config(Token::new("test-token"), config)
}

fn owner() -> Urn {
    Urn::person("8675309").unwrap()
}

fn register_mock(server: &mut ServerGuard, upload_url: &str) -> mockito::Mock {
    let fixture =
        test_util::fixture("register_upload.json").replace("{{upload_url}}", upload_url);
    server
        .mock("POST", "/v2/assets")
        .match_query(Matcher::UrlEncoded(
            "action".to_owned(),
            "registerUpload".to_owned(),
        ))
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(fixture)
        .create()
}

#[test]
fn test_upload_file_with_content_length() {
    let path = std::env::temp_dir().join("linkedin-sync-upload-3000.bin");
    fs::write(&path, vec![0x42u8; 3000]).unwrap();

    let mut server = Server::new();
    let upload_url = format!("{}/upload/sync", server.url());
    let register = register_mock(&mut server, &upload_url);
    // an explicit length keeps ureq from chunking the file
    let upload = server
        .mock("POST", "/upload/sync")
        .match_header("content-length", "3000")
        .match_header("transfer-encoding", Matcher::Missing)
        .match_header("x-li-format", Matcher::Missing)
        .match_header("content-type", "application/octet-stream")
        .match_header("authorization", "Bearer test-token")
        .match_body(vec![0x42u8; 3000])
        .with_status(201)
        .create();

    let source = MediaSource::from(path.clone());
    let asset = client(&server)
        .upload_asset(&source, &owner(), Some(Duration::from_secs(5)))
        .unwrap();

    assert_eq!(asset, ASSET);
    register.assert();
    upload.assert();
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_create_share() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/v2/ugcPosts")
        .match_header("x-li-format", "json")
        .match_body(Matcher::PartialJson(json!({
            "lifecycleState": "PUBLISHED",
            "author": "urn:li:person:8675309"
        })))
        .with_status(201)
        .create();

    let options = linkedin::model::ShareOptions::new(&owner()).text("hello");
    let result = client(&server).create_share(&options).unwrap();

    assert_eq!(result, json!({}));
    mock.assert();
}

#[test]
fn test_upload_from_url() {
    let mut server = Server::new();
    let upload_url = format!("{}/upload/sync", server.url());
    let register = register_mock(&mut server, &upload_url);
    let download = server
        .mock("GET", "/media/cat.png")
        .with_status(200)
        .with_body(vec![7u8; 512])
        .create();
    let upload = server
        .mock("POST", "/upload/sync")
        .match_header("content-length", "512")
        .with_status(201)
        .create();

    let source = MediaSource::from_url(&format!("{}/media/cat.png", server.url())).unwrap();
    let asset = client(&server)
        .upload_asset(&source, &owner(), None)
        .unwrap();

    assert_eq!(asset, ASSET);
    register.assert();
    download.assert();
    upload.assert();
}

#[test]
fn test_upload_timeout() {
    let silent = TcpListener::bind("127.0.0.1:0").unwrap();
    let upload_url = format!("http://{}/upload", silent.local_addr().unwrap());

    let mut server = Server::new();
    let register = register_mock(&mut server, &upload_url);

    let timeout = Duration::from_secs(1);
    let started = std::time::Instant::now();
    let err = client(&server)
        .upload_asset(
            &MediaSource::from(b"never answered".to_vec()),
            &owner(),
            Some(timeout),
        )
        .unwrap_err();

    assert!(matches!(err, ClientError::UploadFailed(_)), "{:?}", err);
    assert!(started.elapsed() < timeout * 10, "took {:?}", started.elapsed());
    register.assert();
    drop(silent);
}
