use std::fmt;

use awc::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::Error;

/// Response field carrying the id of a freshly created story
pub const STORY_ID: &str = "storyId";
/// Response field carrying the backend's human readable outcome
pub const MSG: &str = "msg";

/// Status and raw body of one backend response
///
/// The body is only decoded as JSON when a field or list is read, so a
/// status check never depends on what the backend put in the body.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseEnvelope {
    pub status: StatusCode,
    body: String,
}

impl ResponseEnvelope {
    pub fn new(status: StatusCode, bytes: &[u8]) -> Self {
        Self {
            status,
            body: String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body; an empty body decodes as `null`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }

        Ok(serde_json::from_str(&self.body)?)
    }

    pub fn expect_status(&self, expected: StatusCode) -> Result<&Self, Error> {
        if self.status != expected {
            return Err(Error::UnexpectedStatus {
                expected,
                actual: self.status,
                body: self.body.clone(),
            });
        }

        Ok(self)
    }

    /// Read a string field from a JSON object body
    pub fn field(&self, name: &'static str) -> Result<String, Error> {
        self.json::<Value>()?
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(Error::MissingField(name))
    }

    pub fn story_id(&self) -> Result<String, Error> {
        let id = self.field(STORY_ID)?;
        if id.is_empty() {
            return Err(Error::EmptyField { field: STORY_ID });
        }

        Ok(id)
    }

    pub fn msg(&self) -> Result<String, Error> {
        self.field(MSG)
    }

    pub fn expect_msg(&self, expected: &str) -> Result<&Self, Error> {
        let actual = self.msg()?;
        if actual != expected {
            return Err(Error::UnexpectedMessage {
                expected: expected.to_string(),
                actual,
            });
        }

        Ok(self)
    }

    pub fn items(&self) -> Result<Vec<Value>, Error> {
        match self.json::<Value>()? {
            Value::Array(items) => Ok(items),
            _ => Err(Error::NotAnArray(self.body.clone())),
        }
    }
}

impl fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.body)
    }
}
