use serde::Deserialize;

use crate::error::OllamaRequestError;

/// Model family and quantization details reported by `/api/show`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelDetails {
    pub parent_model: Option<String>,
    pub format: Option<String>,
    pub family: Option<String>,
    pub families: Option<Vec<String>>,
    pub parameter_size: Option<String>,
    pub quantization_level: Option<String>,
}

/// Information about a specific model.
///
/// See <https://github.com/ollama/ollama/blob/main/docs/api.md#show-model-information>
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelInfoResponse {
    /// Licensing text shipped with the model
    pub license: Option<String>,
    /// Modelfile the model was created from
    pub modelfile: Option<String>,
    /// Runtime parameters, one `key value` pair per line
    pub parameters: String,
    /// Prompt template
    pub template: String,
    pub system: Option<String>,
    pub details: Option<ModelDetails>,
}

impl ModelInfoResponse {
    /// Decode a `/api/show` payload.
    ///
    /// # Errors
    ///
    /// Returns [`OllamaRequestError::Json`] if `parameters` or `template` is
    /// missing, or any field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, OllamaRequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Byte-slice variant of [`Self::from_json`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_json`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, OllamaRequestError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
