//! @dose
//! purpose: Encoding registry and resolution. Maps registered encoding names and model
//!     names to tiktoken BPE tables, loads the tables lazily, and counts tokens for a
//!     resolved encoding.
//!
//! when-editing:
//!     - !ENCODINGS is the single source of truth for registered names; for_name and
//!       encoding_names both read it
//!     - !Loaded BPE tables are cached process-wide so library callers pay the load once
//!     - Model lookup delegates to tiktoken-rs's model table; this module only
//!       canonicalizes the resulting name
//!
//! invariants:
//!     - The two resolution failures are distinct variants (UnknownEncoding vs
//!       UnmappableModel), never told apart by string matching
//!     - count returns exactly the length of the encoded id sequence; empty text counts 0
//!
//! gotchas:
//!     - gpt2 and r50k_base share one vocabulary; both names load the same table
//!     - First use of an encoding parses the embedded vocabulary (tens of milliseconds);
//!       later uses hit the cache

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};
use tiktoken_rs::CoreBPE;

/// Encoding used when no selector is given on the command line or in config.
pub const DEFAULT_ENCODING: &str = "o200k_base";

type Loader = fn() -> anyhow::Result<CoreBPE>;

/// Registered encodings: canonical name paired with its table loader. The names match
/// what the Python tiktoken distribution registers.
const ENCODINGS: &[(&str, Loader)] = &[
    ("cl100k_base", tiktoken_rs::cl100k_base),
    ("gpt2", tiktoken_rs::r50k_base),
    ("o200k_base", tiktoken_rs::o200k_base),
    ("p50k_base", tiktoken_rs::p50k_base),
    ("p50k_edit", tiktoken_rs::p50k_edit),
    ("r50k_base", tiktoken_rs::r50k_base),
];

/// Why a selector could not be turned into an [`Encoding`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested encoding name is not registered.
    #[error("Unknown encoding {0:?}. Use --list-encodings to see the registered names")]
    UnknownEncoding(String),

    /// The requested model name has no entry in the model-to-encoding table.
    #[error("Could not automatically map {0:?} to an encoding. Use -e to select one explicitly")]
    UnmappableModel(String),

    /// The tokenizer library failed to build the encoder for a registered name.
    #[error("failed to load encoding {name}: {reason}")]
    Load {
        name: &'static str,
        reason: anyhow::Error,
    },
}

/// Loaded BPE tables, keyed by canonical encoding name.
static BPE_CACHE: Lazy<Mutex<HashMap<&'static str, Arc<CoreBPE>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn load_bpe(name: &'static str, loader: Loader) -> Result<Arc<CoreBPE>, ResolveError> {
    let mut cache = BPE_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(bpe) = cache.get(name) {
        return Ok(Arc::clone(bpe));
    }
    let bpe = Arc::new(loader().map_err(|reason| ResolveError::Load { name, reason })?);
    cache.insert(name, Arc::clone(&bpe));
    Ok(bpe)
}

/// Canonical registered name for a tiktoken tokenizer variant.
fn canonical_name(tokenizer: &Tokenizer) -> &'static str {
    match tokenizer {
        Tokenizer::O200kBase => "o200k_base",
        Tokenizer::Cl100kBase => "cl100k_base",
        Tokenizer::P50kBase => "p50k_base",
        Tokenizer::P50kEdit => "p50k_edit",
        Tokenizer::R50kBase => "r50k_base",
        Tokenizer::Gpt2 => "gpt2",
    }
}

/// A resolved tokenizer configuration: a registered name plus its loaded BPE table.
#[derive(Clone)]
pub struct Encoding {
    name: &'static str,
    bpe: Arc<CoreBPE>,
}

// CoreBPE has no Debug impl, so render just the name.
impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoding")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Encoding {
    /// Resolve a registered encoding name.
    pub fn for_name(name: &str) -> Result<Self, ResolveError> {
        for &(canonical, loader) in ENCODINGS {
            if canonical == name {
                return Ok(Self {
                    name: canonical,
                    bpe: load_bpe(canonical, loader)?,
                });
            }
        }
        Err(ResolveError::UnknownEncoding(name.to_string()))
    }

    /// Resolve the encoding a model uses, via the tokenizer library's model table.
    pub fn for_model(model: &str) -> Result<Self, ResolveError> {
        let tokenizer =
            get_tokenizer(model).ok_or_else(|| ResolveError::UnmappableModel(model.to_string()))?;
        Self::for_name(canonical_name(&tokenizer))
    }

    /// Canonical name of this encoding.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of tokens the text encodes to under this encoding.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

/// All registered encoding names in lexicographic order.
pub fn encoding_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = ENCODINGS.iter().map(|&(name, _)| name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_name_known_encodings() {
        let enc = Encoding::for_name("o200k_base").unwrap();
        assert_eq!(enc.name(), "o200k_base");

        let enc = Encoding::for_name("cl100k_base").unwrap();
        assert_eq!(enc.name(), "cl100k_base");
    }

    #[test]
    fn test_for_name_unknown_encoding() {
        let err = Encoding::for_name("nonexistent_encoding").unwrap_err();
        assert!(matches!(err, ResolveError::UnknownEncoding(_)));

        let message = err.to_string();
        assert!(message.contains("Unknown encoding"), "Got: {}", message);
        assert!(message.contains("nonexistent_encoding"), "Got: {}", message);
    }

    #[test]
    fn test_for_model_maps_to_canonical_encoding() {
        let enc = Encoding::for_model("gpt-4o").unwrap();
        assert_eq!(enc.name(), "o200k_base");

        let enc = Encoding::for_model("gpt-3.5-turbo").unwrap();
        assert_eq!(enc.name(), "cl100k_base");
    }

    #[test]
    fn test_for_model_unmappable() {
        let err = Encoding::for_model("nonexistent_model").unwrap_err();
        assert!(matches!(err, ResolveError::UnmappableModel(_)));

        let message = err.to_string();
        assert!(
            message.contains("Could not automatically map"),
            "Got: {}",
            message
        );
        assert!(message.contains("nonexistent_model"), "Got: {}", message);
    }

    #[test]
    fn test_resolution_failures_are_distinguishable() {
        let by_name = Encoding::for_name("bogus").unwrap_err().to_string();
        let by_model = Encoding::for_model("bogus").unwrap_err().to_string();
        assert!(by_name.contains("Unknown encoding"));
        assert!(!by_name.contains("Could not automatically map"));
        assert!(by_model.contains("Could not automatically map"));
        assert!(!by_model.contains("Unknown encoding"));
    }

    #[test]
    fn test_count_hello_world_is_two() {
        // "hello world" is two tokens under both current OpenAI encodings.
        let o200k = Encoding::for_name("o200k_base").unwrap();
        assert_eq!(o200k.count("hello world"), 2);

        let cl100k = Encoding::for_name("cl100k_base").unwrap();
        assert_eq!(cl100k.count("hello world"), 2);
    }

    #[test]
    fn test_count_empty_is_zero() {
        let enc = Encoding::for_name(DEFAULT_ENCODING).unwrap();
        assert_eq!(enc.count(""), 0);
    }

    #[test]
    fn test_count_is_deterministic() {
        let enc = Encoding::for_name(DEFAULT_ENCODING).unwrap();
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(enc.count(text), enc.count(text));
    }

    #[test]
    fn test_default_encoding_is_registered() {
        assert!(Encoding::for_name(DEFAULT_ENCODING).is_ok());
        assert!(encoding_names().contains(&DEFAULT_ENCODING));
    }

    #[test]
    fn test_encoding_names_sorted_and_complete() {
        let names = encoding_names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert!(names.contains(&"o200k_base"));
        assert!(names.contains(&"cl100k_base"));
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_debug_output_identifies_the_encoding() {
        let enc = Encoding::for_name("o200k_base").unwrap();
        let rendered = format!("{:?}", enc);
        assert!(rendered.contains("Encoding"), "Got: {}", rendered);
        assert!(rendered.contains("o200k_base"), "Got: {}", rendered);
    }

    #[test]
    fn test_loaded_tables_are_shared() {
        let first = Encoding::for_name("cl100k_base").unwrap();
        let second = Encoding::for_name("cl100k_base").unwrap();
        assert!(Arc::ptr_eq(&first.bpe, &second.bpe));
    }

    #[test]
    fn test_model_and_name_paths_agree() {
        let by_model = Encoding::for_model("gpt-4o").unwrap();
        let by_name = Encoding::for_name("o200k_base").unwrap();
        let text = "hello world";
        assert_eq!(by_model.count(text), by_name.count(text));
    }
}
