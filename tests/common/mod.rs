//! In-process HTTP server serving canned provider responses

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub headers: Vec<String>,
}

pub struct MockServer {
    base: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockServer {
    /// Serve `(path, status, body)` routes; unknown paths get a 404.
    pub fn start(routes: Vec<(&str, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let routes: Vec<(String, u16, String)> = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), status, body))
            .collect();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().unwrap());

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                let path = request_line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("/")
                    .to_string();

                let mut headers = Vec::new();
                loop {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) | Err(_) => break,
                        Ok(_) if line == "\r\n" || line == "\n" => break,
                        Ok(_) => headers.push(line.trim_end().to_string()),
                    }
                }
                seen.lock().unwrap().push(Recorded {
                    path: path.clone(),
                    headers,
                });

                let (status, body) = routes
                    .iter()
                    .find(|(route, _, _)| *route == path)
                    .map(|(_, status, body)| (*status, body.clone()))
                    .unwrap_or((404, "{\"status\":\"error\"}".to_string()));
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Unknown",
                };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base, requests }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn asn_body() -> String {
    r#"{
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "asn": 14525,
            "name": "STELLAR-AS",
            "description_short": "Stellar Technologies Inc.",
            "country_code": "US",
            "website": "https://www.stellar.tech",
            "looking_glass": null
        }
    }"#
    .to_string()
}

pub fn ip_body() -> String {
    r#"{
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "ip": "1.1.1.1",
            "ptr_record": "one.one.one.one",
            "prefixes": [
                {
                    "prefix": "1.1.1.0/24",
                    "ip": "1.1.1.0",
                    "cidr": 24,
                    "asn": {"asn": 13335, "name": "CLOUDFLARENET", "description": "Cloudflare, Inc.", "country_code": "US"},
                    "name": "APNIC-LABS",
                    "description": "APNIC and Cloudflare DNS Resolver project",
                    "country_code": "AU"
                }
            ],
            "rir_allocation": {"rir_name": "APNIC", "country_code": null, "ip": "1.0.0.0", "cidr": 8, "prefix": "1.0.0.0/8"}
        }
    }"#
    .to_string()
}

pub fn prefix_body() -> String {
    r#"{
        "status": "ok",
        "status_message": "Query was successful",
        "data": {
            "prefix": "1.1.1.0/24",
            "ip": "1.1.1.0",
            "cidr": 24,
            "asns": [
                {"asn": 13335, "name": "CLOUDFLARENET", "description": "Cloudflare, Inc.", "country_code": "US"},
                {"asn": 4608, "name": null, "description": "APNIC", "country_code": "AU"}
            ],
            "name": "APNIC-LABS",
            "description_short": "APNIC and Cloudflare DNS Resolver project",
            "rir_allocation": {"rir_name": "APNIC", "prefix": "1.0.0.0/8"}
        }
    }"#
    .to_string()
}

pub fn sourced_body() -> String {
    r#"{
        "Response": {
            "Sourced": {
                "ASN": 14525,
                "Prefixes": [
                    "2620:0:2d0::/48",
                    "198.51.100.0/24",
                    "2001:db8::/32",
                    "203.0.113.0/24",
                    "192.0.0.0/16",
                    "10.0.0.5/24"
                ]
            }
        }
    }"#
    .to_string()
}
