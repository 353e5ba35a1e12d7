//! JSON-RPC plumbing shared by the tests that drive a spawned `sif-ls`
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::time::{Duration, Instant};

use serde_json::Value;

pub const SERVER_TIMEOUT: Duration = Duration::from_secs(5);
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_millis(200);

pub fn spawn_server() -> Child {
    let bin_path = std::env::var("CARGO_BIN_EXE_sif-ls")
        .unwrap_or_else(|_| "target/debug/sif-ls".to_string());

    Command::new(bin_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .env("SIF_LS_TEST_EXIT", "1")
        .spawn()
        .expect("Failed to spawn language server")
}

pub fn take_stdout(server: &mut Child) -> BufReader<ChildStdout> {
    let stdout = server
        .stdout
        .take()
        .expect("Child stdout should be available");
    BufReader::new(stdout)
}

pub fn create_initialize_request() -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "processId": null,
            "rootUri": null,
            "capabilities": {
                "textDocument": {
                    "publishDiagnostics": { "relatedInformation": false },
                    "documentSymbol": { "dynamicRegistration": false }
                }
            },
            "clientInfo": { "name": "test-client", "version": "1.0" }
        }
    })
}

/// Spawn, initialize and send `initialized`
pub fn start_session() -> (Child, BufReader<ChildStdout>) {
    let mut server = spawn_server();
    send_lsp_message(&mut server, &create_initialize_request());

    let mut reader = take_stdout(&mut server);
    let init_response = read_next_response_with_id(&mut reader, 1);
    assert!(init_response.get("result").is_some());

    send_lsp_message(
        &mut server,
        &serde_json::json!({ "jsonrpc": "2.0", "method": "initialized", "params": {} }),
    );

    (server, reader)
}

pub fn did_open(uri: &str, language_id: &str, text: &str) -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "method": "textDocument/didOpen",
        "params": {
            "textDocument": {
                "uri": uri,
                "languageId": language_id,
                "version": 1,
                "text": text
            }
        }
    })
}

pub fn send_lsp_message(child: &mut Child, message: &Value) {
    let body = message.to_string();
    let request = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);

    let stdin = child
        .stdin
        .as_mut()
        .expect("Child stdin should be available");
    stdin
        .write_all(request.as_bytes())
        .expect("Failed to write request");
    stdin.flush().expect("Failed to flush stdin");
}

pub fn read_message(reader: &mut BufReader<ChildStdout>) -> Value {
    let content_length = read_content_length_header(reader);
    let body = read_message_body(reader, content_length);
    serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("Invalid JSON message: {}\nBody: {}", e, body))
}

/// Skip log messages and other notifications until the response with `id`
pub fn read_next_response_with_id(reader: &mut BufReader<ChildStdout>, id: i64) -> Value {
    let start_time = Instant::now();
    loop {
        if start_time.elapsed() > SERVER_TIMEOUT {
            panic!("Timeout waiting for response {}", id);
        }
        let message = read_message(reader);
        if message.get("id").and_then(|v| v.as_i64()) == Some(id) {
            return message;
        }
    }
}

/// Params of the next publishDiagnostics notification for `uri`
pub fn read_diagnostics_for(reader: &mut BufReader<ChildStdout>, uri: &str) -> Value {
    let start_time = Instant::now();
    loop {
        if start_time.elapsed() > SERVER_TIMEOUT {
            panic!("Timeout waiting for diagnostics of {}", uri);
        }
        let message = read_message(reader);
        if message.get("method").and_then(|v| v.as_str())
            == Some("textDocument/publishDiagnostics")
            && message["params"]["uri"] == uri
        {
            return message["params"].clone();
        }
    }
}

fn read_content_length_header(reader: &mut BufReader<ChildStdout>) -> usize {
    let start_time = Instant::now();
    let mut content_length = None;

    loop {
        if start_time.elapsed() > SERVER_TIMEOUT {
            panic!("Timeout waiting for response headers");
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => panic!("Unexpected EOF while reading headers"),
            Ok(_) => {
                if line.trim().is_empty() {
                    break;
                }

                if let Some(length_str) = line.strip_prefix("Content-Length:") {
                    content_length = Some(
                        length_str
                            .trim()
                            .parse::<usize>()
                            .expect("Invalid Content-Length header"),
                    );
                }
            }
            Err(e) => panic!("Error reading headers: {}", e),
        }
    }

    content_length.expect("Missing Content-Length header")
}

fn read_message_body(reader: &mut BufReader<ChildStdout>, content_length: usize) -> String {
    let mut body_bytes = vec![0u8; content_length];
    std::io::Read::read_exact(reader, &mut body_bytes).expect("Failed to read response body");

    String::from_utf8(body_bytes).expect("Response body should be valid UTF-8")
}

pub fn shutdown_server(mut child: Child) {
    drop(child.stdin.take());

    std::thread::sleep(SHUTDOWN_GRACE_PERIOD);

    match child.try_wait() {
        Ok(Some(status)) => {
            if !status.success() {
                eprintln!("Server exited with non-zero status: {:?}", status);
            }
        }
        Ok(None) => {
            eprintln!("Server didn't exit gracefully, forcing termination");
            let _ = child.kill();
            let _ = child.wait();
        }
        Err(e) => panic!("Error checking server status: {}", e),
    }
}
