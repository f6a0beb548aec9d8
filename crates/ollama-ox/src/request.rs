use bon::Builder;
use serde::Serialize;

/// Body of `POST /api/show`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Builder)]
pub struct ShowModelRequest {
    /// Model name, e.g. `llama3.2` or `llama3.2:3b-instruct-q4_K_M`
    #[builder(into)]
    pub model: String,
    /// Ask the server for the full tokenizer/tensor metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl ShowModelRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self::builder().model(model).build()
    }
}
