use anyhow::{bail, Context, Result};
use reqwest::blocking::{Client, Response};

use crate::fl;

/// Issue a GET request, treating any non-2xx status as an error
pub fn get(client: &Client, url: &str) -> Result<Response> {
    let resp = client
        .get(url)
        .send()
        .with_context(|| fl!("err_fetch", url = url))?;

    if !resp.status().is_success() {
        bail!("{}: HTTP {}", fl!("err_fetch", url = url), resp.status());
    }

    Ok(resp)
}

/// Fetch a URL and decode the body as UTF-8 text
pub fn get_text(client: &Client, url: &str) -> Result<String> {
    let body = get(client, url)?
        .bytes()
        .with_context(|| fl!("err_fetch", url = url))?;

    String::from_utf8(body.to_vec()).with_context(|| fl!("err_non_utf8", url = url))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    pub(crate) fn client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    /// Answer a single request on a local port, returning the URL to hit
    pub(crate) fn serve_once(status: &str, body: &[u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);

        thread::spawn(move || {
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
            stream.write_all(&response).unwrap();
        });

        format!("http://{}/", addr)
    }

    #[test]
    fn test_get_text() {
        let url = serve_once("200 OK", b"<metadata/>");
        assert_eq!(get_text(&client(), &url).unwrap(), "<metadata/>");
    }

    #[test]
    fn test_not_found() {
        let url = serve_once("404 Not Found", b"missing");
        let err = get_text(&client(), &url).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_server_error() {
        let url = serve_once("500 Internal Server Error", b"");
        assert!(get(&client(), &url).is_err());
    }

    #[test]
    fn test_non_utf8_body() {
        let url = serve_once("200 OK", b"\xff\xfe");
        assert!(get_text(&client(), &url).is_err());
    }

    #[test]
    fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);
        assert!(get_text(&client(), &url).is_err());
    }
}
