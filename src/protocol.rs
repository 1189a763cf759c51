use crate::util;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

/// リクエストメソッド名
pub mod methods {
    pub const DOUBLE: &str = "double";
    pub const FORMAT_MESSAGE: &str = "format_message";
}

/// ユーティリティ関数の呼び出し
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum Request {
    Double { value: i64 },
    FormatMessage { name: String, count: i64 },
}

impl Request {
    pub fn method(&self) -> &'static str {
        match self {
            Request::Double { .. } => methods::DOUBLE,
            Request::FormatMessage { .. } => methods::FORMAT_MESSAGE,
        }
    }
}

/// result と error のどちらか一方だけが入る
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl Response {
    pub fn success(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// リクエストを処理してレスポンスを返す
pub fn handle(request: &Request) -> Response {
    debug!("Handling method: {}", request.method());

    match request {
        Request::Double { value } => match util::double(*value) {
            Ok(doubled) => Response::success(json!(doubled)),
            Err(e) => {
                warn!("{}", e);
                Response::failure(e)
            }
        },
        Request::FormatMessage { name, count } => {
            Response::success(json!(util::format_message(name, *count)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_double() {
        let response = handle(&Request::Double { value: 21 });
        assert_eq!(response.result, Some(json!(42)));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_handle_double_overflow() {
        let response = handle(&Request::Double { value: i64::MAX });
        assert!(response.is_error());
        assert_eq!(response.result, None);
        assert_eq!(
            response.error.as_deref(),
            Some("doubling 9223372036854775807 overflows i64")
        );
    }

    #[test]
    fn test_handle_format_message() {
        let response = handle(&Request::FormatMessage {
            name: "Charlie".to_string(),
            count: 42,
        });
        assert_eq!(response.result, Some(json!("Charlie has 42 items")));
        assert!(!response.is_error());
    }

    #[test]
    fn test_request_from_json() {
        let request: Request =
            serde_json::from_str(r#"{"method":"double","params":{"value":-3}}"#).unwrap();
        assert_eq!(request, Request::Double { value: -3 });
        assert_eq!(request.method(), methods::DOUBLE);

        let request: Request = serde_json::from_str(
            r#"{"method":"format_message","params":{"name":"Bob","count":0}}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            Request::FormatMessage {
                name: "Bob".to_string(),
                count: 0
            }
        );
        assert_eq!(request.method(), methods::FORMAT_MESSAGE);
    }

    #[test]
    fn test_unknown_method_rejected() {
        let parsed: Result<Request, _> =
            serde_json::from_str(r#"{"method":"triple","params":{"value":1}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_response_json_shape() {
        let json = serde_json::to_value(Response::success(json!(10))).unwrap();
        assert_eq!(json, json!({ "result": 10, "error": null }));

        let json = serde_json::to_value(Response::failure("boom")).unwrap();
        assert_eq!(json, json!({ "result": null, "error": "boom" }));
    }
}
