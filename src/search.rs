use crate::{
    api_client::ApiClient,
    error::{QueryError, ResponseCode},
    time_bound::TimeField,
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SEARCH_PATH: &str = "api/v3/search/quake_service";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    pub start: u64,
    pub size: Value,
    pub latest: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl QueryRequest {
    /// `size` goes out as a number when it parses as one, otherwise verbatim
    /// so the service can reject it.
    pub fn new(query: &str, size: &str) -> Self {
        let size = size
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(size));

        Self {
            query: query.to_string(),
            start: 0,
            size,
            latest: true,
            start_time: None,
            end_time: None,
        }
    }

    pub fn set_time(&mut self, field: TimeField, value: String) {
        match field {
            TimeField::StartTime => self.start_time = Some(value),
            TimeField::EndTime => self.end_time = Some(value),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub ip: String,
    pub port: u16,
    #[serde(default)]
    pub domain: Option<String>,
    pub time: String,
}

impl ResultRecord {
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref().filter(|domain| !domain.is_empty())
    }
}

// `data` is decoded only on success; failed envelopes may carry any shape there.
#[derive(Deserialize, Debug)]
struct ResponseEnvelope {
    code: ResponseCode,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

pub fn execute_query(
    client: &ApiClient,
    request: &QueryRequest,
) -> Result<Vec<ResultRecord>, QueryError> {
    log::debug!("Sending query {:?}", request);

    let response = client.post(SEARCH_PATH, request)?;
    let status = response.status();
    let body = response.text()?;

    log::debug!("Received {} ({} bytes)", status, body.len());
    interpret_response(status, &body)
}

/// Maps a raw HTTP reply onto the service envelope.
pub fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<Vec<ResultRecord>, QueryError> {
    let malformed = |source: serde_json::Error| QueryError::Transport {
        status,
        body: body.to_string(),
        source,
    };

    let envelope = serde_json::from_str::<ResponseEnvelope>(body).map_err(malformed)?;

    if !envelope.code.is_success() {
        return Err(QueryError::Service {
            code: envelope.code,
            message: envelope.message.unwrap_or_default(),
        });
    }

    match envelope.data {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(data) => serde_json::from_value(data).map_err(malformed),
    }
}
