//! Minimal HTTP/1.1 request parser and response serializer
//!
//! Just enough of the protocol to drive the visualization from a browser:
//! GET requests with query strings, no bodies, keep-alive responses with
//! explicit Content-Length. Parsing is incremental over a `BytesMut`
//! buffer and returns `Ok(None)` until a full request head has arrived.

use bytes::{Buf, BytesMut};
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::char,
    IResult,
};

/// Maximum request head size (16 KB) - prevents memory exhaustion from
/// a client that never sends the terminating blank line
const MAX_REQUEST_SIZE: usize = 16 * 1024;

/// A parsed request head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Request method (GET, POST, ...)
    pub method: String,
    /// Path component of the target, percent-decoded
    pub path: String,
    /// Query parameters in order of appearance, percent-decoded
    pub query: Vec<(String, String)>,
}

impl Request {
    /// Parse one request head from the buffer
    ///
    /// Consumes the head (up to and including the blank line) on success.
    /// Headers are read past but ignored; this server only routes on the
    /// request line.
    pub fn parse(buf: &mut BytesMut) -> Result<Option<Request>, String> {
        if buf.is_empty() {
            return Ok(None);
        }

        let head_end = match find_head_end(buf) {
            Some(end) => end,
            None => {
                if buf.len() > MAX_REQUEST_SIZE {
                    return Err(format!(
                        "request head too large: {} bytes (max: {} bytes)",
                        buf.len(),
                        MAX_REQUEST_SIZE
                    ));
                }
                return Ok(None); // Need more data
            }
        };

        let head = String::from_utf8(buf[..head_end].to_vec())
            .map_err(|e| format!("request head is not UTF-8: {}", e))?;

        let line = head.lines().next().unwrap_or("");
        let (_, (method, target)) =
            request_line(line).map_err(|_| format!("malformed request line: {:?}", line))?;

        let (path, query) = split_target(target);

        let request = Request {
            method: method.to_string(),
            path,
            query,
        };

        buf.advance(head_end + 4); // Past the \r\n\r\n
        Ok(Some(request))
    }

    /// First query parameter with the given name, empty string if missing
    ///
    /// Missing and empty fields take the same rejection path at the input
    /// boundary.
    pub fn param(&self, name: &str) -> &str {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}

fn find_head_end(buf: &BytesMut) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

fn request_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, method) = take_while1(|c: char| c.is_ascii_uppercase())(input)?;
    let (input, _) = char(' ')(input)?;
    let (input, target) = take_while1(|c: char| c != ' ')(input)?;
    let (input, _) = char(' ')(input)?;
    let (input, _) = tag("HTTP/1.")(input)?;
    Ok((input, (method, target)))
}

fn split_target(target: &str) -> (String, Vec<(String, String)>) {
    match target.split_once('?') {
        None => (percent_decode(target), Vec::new()),
        Some((path, query)) => {
            let params = query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                    (percent_decode(k), percent_decode(v))
                })
                .collect();
            (percent_decode(path), params)
        }
    }
}

/// Decode %XX escapes and form-encoded '+' spaces
///
/// Invalid escapes pass through untouched; they will fail integer parsing
/// at the input boundary like any other junk.
fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = bytes.get(i + 1..i + 3);
                match hex.and_then(|h| u8::from_str_radix(std::str::from_utf8(h).ok()?, 16).ok()) {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Response status line variants used by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl Status {
    fn line(self) -> &'static str {
        match self {
            Status::Ok => "200 OK",
            Status::BadRequest => "400 Bad Request",
            Status::NotFound => "404 Not Found",
            Status::MethodNotAllowed => "405 Method Not Allowed",
        }
    }
}

/// An outgoing response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status line variant
    pub status: Status,
    /// Content-Type header value
    pub content_type: &'static str,
    /// Response body
    pub body: String,
}

impl Response {
    /// 200 with an HTML body
    pub fn html(body: String) -> Self {
        Self {
            status: Status::Ok,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    /// 200 with a JSON body
    pub fn json(body: String) -> Self {
        Self {
            status: Status::Ok,
            content_type: "application/json",
            body,
        }
    }

    /// 404 with a plain-text body
    pub fn not_found(path: &str) -> Self {
        Self {
            status: Status::NotFound,
            content_type: "text/plain; charset=utf-8",
            body: format!("no such page: {}\n", path),
        }
    }

    /// 405 for anything that is not a GET
    pub fn method_not_allowed(method: &str) -> Self {
        Self {
            status: Status::MethodNotAllowed,
            content_type: "text/plain; charset=utf-8",
            body: format!("method not allowed: {}\n", method),
        }
    }

    /// 400 with a plain-text body, used for unparseable requests
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: Status::BadRequest,
            content_type: "text/plain; charset=utf-8",
            body: format!("{}\n", message),
        }
    }

    /// Serialize to wire format
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
            self.status.line(),
            self.content_type,
            self.body.len()
        )
        .into_bytes();
        out.extend_from_slice(self.body.as_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(data: &str) -> Result<Option<Request>, String> {
        let mut buf = BytesMut::from(data.as_bytes());
        Request::parse(&mut buf)
    }

    #[test]
    fn test_parse_simple_get() {
        let req = parse_str("GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .unwrap()
            .unwrap();

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/");
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_parse_query_string() {
        let req = parse_str("GET /store?key=5&value=100 HTTP/1.1\r\n\r\n")
            .unwrap()
            .unwrap();

        assert_eq!(req.path, "/store");
        assert_eq!(req.param("key"), "5");
        assert_eq!(req.param("value"), "100");
        assert_eq!(req.param("missing"), "");
    }

    #[test]
    fn test_parse_percent_decoding() {
        let req = parse_str("GET /load?key=%2D3+x HTTP/1.1\r\n\r\n")
            .unwrap()
            .unwrap();

        assert_eq!(req.param("key"), "-3 x");
    }

    #[test]
    fn test_parse_incomplete() {
        let result = parse_str("GET /load?key=1 HTTP/1.1\r\nHost: local");
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_parse_consumes_head() {
        let data = "GET / HTTP/1.1\r\n\r\nGET /clear HTTP/1.1\r\n\r\n";
        let mut buf = BytesMut::from(data.as_bytes());

        let first = Request::parse(&mut buf).unwrap().unwrap();
        assert_eq!(first.path, "/");

        let second = Request::parse(&mut buf).unwrap().unwrap();
        assert_eq!(second.path, "/clear");

        assert!(Request::parse(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_parse_malformed_request_line() {
        let result = parse_str("NONSENSE\r\n\r\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_oversized_head() {
        let mut data = String::from("GET /");
        data.push_str(&"x".repeat(MAX_REQUEST_SIZE + 1));
        let result = parse_str(&data);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serialize() {
        let resp = Response::html("<p>hi</p>".to_string());
        let wire = String::from_utf8(resp.serialize()).unwrap();

        assert!(wire.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(wire.contains("Content-Length: 9\r\n"));
        assert!(wire.ends_with("\r\n\r\n<p>hi</p>"));
    }

    #[test]
    fn test_response_not_found() {
        let resp = Response::not_found("/nope");
        assert_eq!(resp.status, Status::NotFound);
        assert!(resp.body.contains("/nope"));
    }
}
