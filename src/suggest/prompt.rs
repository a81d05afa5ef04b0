use super::types::SuggestionRequest;
use serde_json::Value;

/// Absent, null and empty-string values render as `{}`.
fn json_or_empty(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "{}".to_string(),
        Some(Value::String(s)) if s.is_empty() => "{}".to_string(),
        Some(v) => v.to_string(),
    }
}

/// Renders the analysis prompt for a failed request.
pub fn build_prompt(request: &SuggestionRequest) -> String {
    let status = request
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!(
        "As an API expert, analyze this failed API request and provide suggestions:\n\
         \n\
         Request:\n\
         - URL: {url}\n\
         - Method: {method}\n\
         - Headers: {headers}\n\
         - Body: {body}\n\
         \n\
         Response:\n\
         - Status: {status}\n\
         - Data: {data}\n\
         \n\
         Provide a clear and concise suggestion about what might be wrong and how to fix it.",
        url = request.url,
        method = request.method,
        headers = json_or_empty(request.headers.as_ref()),
        body = json_or_empty(request.body.as_ref()),
        status = status,
        data = json_or_empty(request.response_data.as_ref()),
    )
}
