// tests/fetch.rs
//
// Fetcher against a one-shot HTTP stub on localhost.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use marketwave::Error;
use marketwave::config::options::{RequestOptions, ScrapeOptions};
use marketwave::core::net::fetch_page;
use marketwave::runner::scrape_market_values;

const SQUAD: &str = include_str!("fixtures/squad.html");

/// Serve one response; the handle yields the raw request text.
fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/real-madrid/startseite/verein/418", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });

    (url, handle)
}

fn local_request() -> RequestOptions {
    RequestOptions { system_proxy: false, ..RequestOptions::default() }
}

fn local_scrape(url: &str) -> ScrapeOptions {
    ScrapeOptions { url: url.to_string(), request: local_request(), ..ScrapeOptions::default() }
}

#[test]
fn not_found_status_is_not_found_error() {
    let (url, server) = serve_once("404 Not Found", "gone".to_string());
    let err = fetch_page(&url, &local_request()).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, Error::NotFound { url: ref u } if *u == url));
}

#[test]
fn scrape_stops_at_not_found_before_parsing() {
    // A body that would otherwise fail extraction with StructureNotFound
    let (url, server) = serve_once("404 Not Found", "<html>nope</html>".to_string());
    let err = scrape_market_values(&local_scrape(&url)).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn request_carries_browser_headers_and_cookie() {
    let (url, server) = serve_once("200 OK", "<html>ok</html>".to_string());
    let body = fetch_page(&url, &local_request()).unwrap();
    let request = server.join().unwrap().to_ascii_lowercase();

    assert_eq!(body, b"<html>ok</html>");
    assert!(request.starts_with("get /real-madrid/startseite/verein/418 "));
    assert!(request.contains("user-agent: mozilla/5.0 (windows nt 10.0; win64; x64)"));
    assert!(request.contains("accept-language: en-us,en;q=0.9"));
    assert!(request.contains("referer: https://www.transfermarkt.com/"));
    assert!(request.contains("cookie: consentcookie=true"));
}

#[test]
fn other_error_statuses_pass_the_body_through() {
    let wall = "<html><body>Access denied</body></html>";
    let (url, server) = serve_once("403 Forbidden", wall.to_string());
    let err = scrape_market_values(&local_scrape(&url)).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, Error::StructureNotFound("container")));
}

#[test]
fn scrape_end_to_end_against_fixture() {
    let (url, server) = serve_once("200 OK", SQUAD.to_string());
    let records = scrape_market_values(&local_scrape(&url)).unwrap();
    server.join().unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].player, "Thibaut Courtois");
    assert_eq!(records[0].market_value, Some(35_000_000.0));
    assert_eq!(records[4].market_value, Some(180_000_000.0));
    assert!(records[2].market_value.is_none());
}

#[test]
fn silent_server_ends_in_timeout_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    thread::spawn(move || {
        // Hold the connection open without answering
        let (_stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(5));
    });

    let request = RequestOptions { timeout_secs: 1, ..local_request() };
    let started = Instant::now();
    let err = fetch_page(&url, &request).unwrap_err();

    assert!(matches!(err, Error::Transport(ref e) if e.is_timeout()));
    assert!(started.elapsed() < Duration::from_secs(4));
}
