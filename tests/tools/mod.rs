//! Hand-rolled single-request HTTP servers for exercising the client
//! against canned responses.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;

/// Serve `response` verbatim to the first connection on an OS-assigned
/// port. Joining the handle yields the request head that was received.
pub fn serve_once(response: Vec<u8>) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let head = read_head(&mut stream);
        stream.write_all(&response).unwrap();
        stream.flush().unwrap();
        head
    });
    (format!("http://127.0.0.1:{port}"), handle)
}

/// A 200 response declaring `declared_len` body bytes but carrying only
/// `body`; declaring more than is sent makes the connection drop
/// mid-stream from the client's point of view.
pub fn http_ok(content_type: &str, body: &[u8], declared_len: usize) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {declared_len}\r\nConnection: close\r\n\r\n"
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

/// An NDJSON response of the given lines, padded by `pad` phantom bytes.
pub fn ndjson_response(lines: &[&str], pad: usize) -> Vec<u8> {
    let body = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
    http_ok("application/x-ndjson", body.as_bytes(), body.len() + pad)
}

pub fn json_response(body: &str) -> Vec<u8> {
    http_ok("application/json", body.as_bytes(), body.len())
}

pub fn status_response(status: &str) -> Vec<u8> {
    format!("HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").into_bytes()
}

/// A port nothing is listening on.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn read_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut byte = [0u8; 1];
    while !head.ends_with(b"\r\n\r\n") {
        match stream.read(&mut byte) {
            Ok(0) | Err(_) => break,
            Ok(_) => head.push(byte[0]),
        }
    }
    String::from_utf8_lossy(&head).into_owned()
}
