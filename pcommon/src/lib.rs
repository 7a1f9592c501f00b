//! Shared utilities and common values for workspace crates.
//!
//! ```rust
//! use pcommon::{ParameterMap, insert_present};
//!
//! let mut params = ParameterMap::new();
//! insert_present(&mut params, "top_k", Some(40_u32));
//! insert_present(&mut params, "seed", None::<i64>);
//!
//! assert_eq!(params.len(), 1);
//! assert!(params.contains_key("top_k"));
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod params {
    //! Provider request parameter maps.
    //!
    //! Parameters are kept as a JSON object keyed by parameter name so adapters can
    //! splice them into a request body or nest them under a provider-specific field.
    //! Keys iterate in sorted order; insertion order is not kept.
    //!
    //! ```rust
    //! use pcommon::{ParameterMap, insert_present};
    //!
    //! let mut params = ParameterMap::new();
    //! insert_present(&mut params, "temperature", Some(0.5));
    //! assert_eq!(params["temperature"], serde_json::json!(0.5));
    //! ```

    use serde_json::{Map, Value};

    pub type ParameterMap = Map<String, Value>;

    /// Inserts `value` under `key` only when it is present.
    ///
    /// A present zero-like value (`Some(0)`) is inserted as given. Values that
    /// convert to JSON `null`, such as NaN or infinite floats, are omitted.
    pub fn insert_present<T>(params: &mut ParameterMap, key: &str, value: Option<T>)
    where
        T: Into<Value>,
    {
        let Some(value) = value.map(Into::into) else {
            return;
        };
        if !value.is_null() {
            params.insert(key.to_string(), value);
        }
    }
}

pub use future::BoxFuture;
pub use params::{ParameterMap, insert_present};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ParameterMap, insert_present};

    #[test]
    fn insert_present_skips_absent_values() {
        let mut params = ParameterMap::new();
        insert_present(&mut params, "temperature", None::<f64>);
        insert_present(&mut params, "max_tokens", Some(256_u32));

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("max_tokens"), Some(&json!(256)));
        assert!(!params.contains_key("temperature"));
    }

    #[test]
    fn insert_present_keeps_zero_like_values() {
        let mut params = ParameterMap::new();
        insert_present(&mut params, "top_k", Some(0_u32));
        insert_present(&mut params, "stop", Some(Vec::<String>::new()));

        assert_eq!(params.get("top_k"), Some(&json!(0)));
        assert_eq!(params.get("stop"), Some(&json!([])));
    }

    #[test]
    fn insert_present_omits_non_finite_floats() {
        let mut params = ParameterMap::new();
        insert_present(&mut params, "temperature", Some(f64::NAN));
        insert_present(&mut params, "top_p", Some(f64::INFINITY));
        insert_present(&mut params, "min_p", Some(0.05_f64));

        assert!(!params.contains_key("temperature"));
        assert!(!params.contains_key("top_p"));
        assert_eq!(params.get("min_p"), Some(&json!(0.05)));
    }

    #[test]
    fn parameter_keys_iterate_sorted() {
        let mut params = ParameterMap::new();
        insert_present(&mut params, "top_k", Some(40_u32));
        insert_present(&mut params, "max_tokens", Some(256_u32));

        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, ["max_tokens", "top_k"]);
    }
}
