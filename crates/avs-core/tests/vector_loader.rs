//! JSON test vector loader shared by message/typed tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    /// Wire message as structured JSON.
    #[serde(default)]
    pub wire: Option<Value>,
    /// Wire message as literal text, for inputs that are not valid JSON.
    #[serde(default)]
    pub wire_text: Option<String>,
    #[serde(default)]
    pub expect: Option<Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub code: String,
}

impl TestVector {
    pub fn bytes(&self) -> Vec<u8> {
        match (&self.wire, &self.wire_text) {
            (Some(v), _) => serde_json::to_vec(v).expect("re-encode wire"),
            (None, Some(s)) => s.as_bytes().to_vec(),
            (None, None) => panic!("vector has neither wire nor wire_text: {}", self.description),
        }
    }
}

pub fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}
