//! Provider-specific sampling configuration.
//!
//! A configuration is validated when it is built and is reusable across any number
//! of sends. Only parameters that were explicitly set are emitted.
//!
//! ```rust
//! use pdialogue::{AnthropicChatConfig, ChatConfiguration};
//!
//! let config = AnthropicChatConfig::builder(1024)
//!     .temperature(0.5)
//!     .top_p(0.9)
//!     .build()
//!     .expect("config should validate");
//!
//! let params = config.request_parameters();
//! assert_eq!(params["top_p"], serde_json::json!(0.9));
//! assert!(!params.contains_key("temperature"));
//! ```

use pcommon::{ParameterMap, insert_present};

use crate::DialogueError;

pub const DEFAULT_TEMPERATURE: f64 = 0.2;

pub trait ChatConfiguration: Send + Sync {
    fn request_parameters(&self) -> ParameterMap;
}

/// The single sampling control sent to Anthropic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sampling {
    Temperature(f64),
    TopP(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnthropicChatConfig {
    max_tokens: u32,
    sampling: Sampling,
    top_k: Option<u32>,
    stop_sequences: Vec<String>,
}

impl AnthropicChatConfig {
    /// Configuration sampling at [`DEFAULT_TEMPERATURE`].
    pub fn new(max_tokens: u32) -> Result<Self, DialogueError> {
        Self::builder(max_tokens)
            .temperature(DEFAULT_TEMPERATURE)
            .build()
    }

    pub fn builder(max_tokens: u32) -> AnthropicChatConfigBuilder {
        AnthropicChatConfigBuilder {
            max_tokens,
            temperature: None,
            top_p: None,
            top_k: None,
            stop_sequences: Vec::new(),
        }
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    pub fn top_k(&self) -> Option<u32> {
        self.top_k
    }

    pub fn stop_sequences(&self) -> &[String] {
        &self.stop_sequences
    }
}

impl ChatConfiguration for AnthropicChatConfig {
    fn request_parameters(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        insert_present(&mut params, "max_tokens", Some(self.max_tokens));

        match self.sampling {
            Sampling::Temperature(value) => insert_present(&mut params, "temperature", Some(value)),
            Sampling::TopP(value) => insert_present(&mut params, "top_p", Some(value)),
        }

        insert_present(&mut params, "top_k", self.top_k);
        if !self.stop_sequences.is_empty() {
            insert_present(
                &mut params,
                "stop_sequences",
                Some(self.stop_sequences.clone()),
            );
        }

        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnthropicChatConfigBuilder {
    max_tokens: u32,
    temperature: Option<f64>,
    top_p: Option<f64>,
    top_k: Option<u32>,
    stop_sequences: Vec<String>,
}

impl AnthropicChatConfigBuilder {
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn stop_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.stop_sequences.push(sequence.into());
        self
    }

    pub fn stop_sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the configuration. When both `temperature` and `top_p` are set, `top_p`
    /// is kept and a warning is logged.
    pub fn build(self) -> Result<AnthropicChatConfig, DialogueError> {
        if self.max_tokens == 0 {
            return Err(DialogueError::configuration(
                "max_tokens must be greater than zero",
            ));
        }

        check_unit_range("temperature", self.temperature)?;
        check_unit_range("top_p", self.top_p)?;

        let sampling = match (self.temperature, self.top_p) {
            (None, None) => {
                return Err(DialogueError::configuration(
                    "either temperature or top_p must be set",
                ));
            }
            (Some(temperature), Some(top_p)) => {
                tracing::warn!(
                    temperature,
                    top_p,
                    "both temperature and top_p set; top_p overrides temperature"
                );
                Sampling::TopP(top_p)
            }
            (Some(temperature), None) => Sampling::Temperature(temperature),
            (None, Some(top_p)) => Sampling::TopP(top_p),
        };

        Ok(AnthropicChatConfig {
            max_tokens: self.max_tokens,
            sampling,
            top_k: self.top_k,
            stop_sequences: self.stop_sequences,
        })
    }
}

fn check_unit_range(name: &str, value: Option<f64>) -> Result<(), DialogueError> {
    match value {
        Some(value) if !(0.0..=1.0).contains(&value) => Err(DialogueError::configuration(
            format!("{name} must be within 0.0..=1.0, got {value}"),
        )),
        _ => Ok(()),
    }
}

/// Sampling overrides for a local model host. Every field is optional; unset fields
/// fall back to the model's own defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OllamaChatConfig {
    pub mirostat: Option<u8>,
    pub mirostat_eta: Option<f64>,
    pub mirostat_tau: Option<f64>,
    pub num_ctx: Option<u32>,
    pub repeat_last_n: Option<i32>,
    pub repeat_penalty: Option<f64>,
    pub temperature: Option<f64>,
    pub seed: Option<i64>,
    pub stop: Vec<String>,
    pub tfs_z: Option<f64>,
    pub num_predict: Option<i32>,
    pub top_k: Option<u32>,
    pub top_p: Option<f64>,
}

impl OllamaChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mirostat(mut self, mirostat: u8) -> Self {
        self.mirostat = Some(mirostat);
        self
    }

    pub fn with_mirostat_eta(mut self, eta: f64) -> Self {
        self.mirostat_eta = Some(eta);
        self
    }

    pub fn with_mirostat_tau(mut self, tau: f64) -> Self {
        self.mirostat_tau = Some(tau);
        self
    }

    pub fn with_num_ctx(mut self, num_ctx: u32) -> Self {
        self.num_ctx = Some(num_ctx);
        self
    }

    pub fn with_repeat_last_n(mut self, repeat_last_n: i32) -> Self {
        self.repeat_last_n = Some(repeat_last_n);
        self
    }

    pub fn with_repeat_penalty(mut self, penalty: f64) -> Self {
        self.repeat_penalty = Some(penalty);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop.push(stop.into());
        self
    }

    pub fn with_tfs_z(mut self, tfs_z: f64) -> Self {
        self.tfs_z = Some(tfs_z);
        self
    }

    pub fn with_num_predict(mut self, num_predict: i32) -> Self {
        self.num_predict = Some(num_predict);
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

impl ChatConfiguration for OllamaChatConfig {
    fn request_parameters(&self) -> ParameterMap {
        let mut params = ParameterMap::new();
        insert_present(&mut params, "mirostat", self.mirostat);
        insert_present(&mut params, "mirostat_eta", self.mirostat_eta);
        insert_present(&mut params, "mirostat_tau", self.mirostat_tau);
        insert_present(&mut params, "num_ctx", self.num_ctx);
        insert_present(&mut params, "repeat_last_n", self.repeat_last_n);
        insert_present(&mut params, "repeat_penalty", self.repeat_penalty);
        insert_present(&mut params, "temperature", self.temperature);
        insert_present(&mut params, "seed", self.seed);
        if !self.stop.is_empty() {
            insert_present(&mut params, "stop", Some(self.stop.clone()));
        }
        insert_present(&mut params, "tfs_z", self.tfs_z);
        insert_present(&mut params, "num_predict", self.num_predict);
        insert_present(&mut params, "top_k", self.top_k);
        insert_present(&mut params, "top_p", self.top_p);
        params
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::DialogueErrorKind;

    #[test]
    fn new_uses_default_temperature() {
        let params = AnthropicChatConfig::new(512)
            .expect("valid config")
            .request_parameters();
        assert_eq!(params["max_tokens"], json!(512));
        assert_eq!(params["temperature"], json!(DEFAULT_TEMPERATURE));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn new_rejects_zero_max_tokens() {
        let err = AnthropicChatConfig::new(0).expect_err("max_tokens must be positive");
        assert_eq!(err.kind, DialogueErrorKind::Configuration);
    }

    #[test]
    fn top_p_overrides_temperature_when_both_set() {
        let config = AnthropicChatConfig::builder(1024)
            .temperature(0.5)
            .top_p(0.9)
            .build()
            .expect("both set is not an error");

        assert_eq!(config.sampling(), Sampling::TopP(0.9));
        let params = config.request_parameters();
        assert_eq!(params["top_p"], json!(0.9));
        assert!(!params.contains_key("temperature"));
    }

    #[test]
    fn missing_sampling_parameter_is_a_configuration_error() {
        let err = AnthropicChatConfig::builder(1024)
            .top_k(40)
            .build()
            .expect_err("temperature or top_p is required");
        assert_eq!(err.kind, DialogueErrorKind::Configuration);
    }

    #[test]
    fn out_of_range_values_and_zero_max_tokens_are_rejected() {
        for builder in [
            AnthropicChatConfig::builder(0).temperature(0.5),
            AnthropicChatConfig::builder(16).temperature(1.5),
            AnthropicChatConfig::builder(16).top_p(-0.1),
        ] {
            let err = builder.build().expect_err("invalid config");
            assert_eq!(err.kind, DialogueErrorKind::Configuration);
        }
    }

    #[test]
    fn only_present_parameters_are_emitted() {
        let params = AnthropicChatConfig::builder(64)
            .top_p(0.8)
            .build()
            .expect("valid config")
            .request_parameters();

        assert_eq!(params.len(), 2);
        assert!(!params.contains_key("top_k"));
        assert!(!params.contains_key("stop_sequences"));
    }

    #[test]
    fn zero_top_k_is_sent_and_empty_stop_list_is_not() {
        let params = AnthropicChatConfig::builder(64)
            .temperature(0.0)
            .top_k(0)
            .stop_sequences(Vec::<String>::new())
            .build()
            .expect("valid config")
            .request_parameters();

        assert_eq!(params["top_k"], json!(0));
        assert_eq!(params["temperature"], json!(0.0));
        assert!(!params.contains_key("stop_sequences"));
    }

    #[test]
    fn stop_sequences_are_emitted_under_their_own_key() {
        let params = AnthropicChatConfig::builder(64)
            .temperature(0.3)
            .stop_sequence("\n\nHuman:")
            .stop_sequence("END")
            .build()
            .expect("valid config")
            .request_parameters();

        assert_eq!(params["stop_sequences"], json!(["\n\nHuman:", "END"]));
        assert!(!params.contains_key("system"));
    }

    #[test]
    fn ollama_config_defaults_to_empty_parameters() {
        assert!(OllamaChatConfig::default().request_parameters().is_empty());
    }

    #[test]
    fn ollama_config_emits_only_overrides() {
        let params = OllamaChatConfig::new()
            .with_temperature(0.7)
            .with_num_ctx(4096)
            .with_seed(0)
            .with_stop("<|eot_id|>")
            .request_parameters();

        assert_eq!(
            serde_json::Value::Object(params),
            json!({
                "temperature": 0.7,
                "num_ctx": 4096,
                "seed": 0,
                "stop": ["<|eot_id|>"]
            })
        );
    }

    #[test]
    fn configurations_are_independent_instances() {
        let first = OllamaChatConfig::new().with_stop("a");
        let second = OllamaChatConfig::new();
        assert_eq!(first.stop.len(), 1);
        assert!(second.stop.is_empty());
    }

    #[test]
    fn ollama_config_omits_non_finite_overrides() {
        let params = OllamaChatConfig::new()
            .with_temperature(f64::NAN)
            .with_top_p(f64::INFINITY)
            .request_parameters();

        assert!(params.is_empty());
    }
}
