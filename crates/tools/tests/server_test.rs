use lumen_tools::{
    client::MockReservationApi,
    server::{ToolServer, DEFAULT_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, SERVER_NAME},
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::io::BufReader;

async fn exchange(input: &str) -> Vec<Value> {
    let server = ToolServer::new(MockReservationApi::new());
    let mut output = Vec::new();

    server
        .serve(BufReader::new(input.as_bytes()), &mut output)
        .await
        .unwrap();

    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_initialize_then_list() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-03-26","capabilities":{}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
        "\n",
    );

    let responses = exchange(input).await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[0]["result"]["protocolVersion"], "2025-03-26");
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], SERVER_NAME);
    assert_eq!(responses[0]["result"]["capabilities"], json!({ "tools": {} }));
    assert_eq!(responses[1]["id"], 2);
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_initialize_without_version_uses_default() {
    let responses = exchange("{\"jsonrpc\":\"2.0\",\"id\":\"init\",\"method\":\"initialize\"}\n").await;

    assert_eq!(responses[0]["id"], "init");
    assert_eq!(responses[0]["result"]["protocolVersion"], DEFAULT_PROTOCOL_VERSION);
}

#[tokio::test]
async fn test_ping_and_blank_lines() {
    let responses = exchange("\n   \n{\"jsonrpc\":\"2.0\",\"id\":7,\"method\":\"ping\"}\n").await;

    assert_eq!(responses, vec![json!({ "jsonrpc": "2.0", "id": 7, "result": {} })]);
}

#[tokio::test]
async fn test_unknown_method() {
    let responses = exchange("{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"resources/list\"}\n").await;

    assert_eq!(responses[0]["error"]["code"], METHOD_NOT_FOUND);
    assert_eq!(responses[0]["id"], 3);
}

#[tokio::test]
async fn test_malformed_json() {
    let responses = exchange("{not json\n").await;

    assert_eq!(responses[0]["error"]["code"], PARSE_ERROR);
    assert_eq!(responses[0]["id"], Value::Null);
}

#[tokio::test]
async fn test_tool_errors_are_results() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"teleport","arguments":{}}}"#,
        "\n",
    );

    let responses = exchange(input).await;

    assert!(responses[0].get("error").is_none());
    assert_eq!(responses[0]["result"]["isError"], true);
    assert_eq!(
        responses[0]["result"]["content"][0]["text"],
        "Tool desconocida: teleport"
    );
}
