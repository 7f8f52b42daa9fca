pub mod extract;

use serde::{Deserialize, Serialize};

/// Fixed OpenRouter model id used for every request.
pub const DEFAULT_MODEL: &str = "nvidia/llama-3.1-nemotron-ultra-253b-v1:free";

/// One generated documentation entry. Created on a successful generation
/// call, never mutated afterwards, discarded when the process exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub filename: String,
    pub original_code: String,
    pub generated_doc: String,
    pub header: String,
    pub timestamp: String,
}

impl GeneratedResult {
    pub fn new(
        macro_name: &str,
        original_code: String,
        generated_doc: String,
        header: String,
    ) -> Self {
        Self {
            filename: format!("{}.sas", macro_name),
            original_code,
            generated_doc,
            header,
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }
}

// --- API settings ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    pub api_key: String,
    pub model: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Seed settings from the environment. The key lives in memory only; saving
/// it later never touches disk or the environment.
pub fn read_settings() -> ApiSettings {
    ApiSettings {
        api_key: std::env::var("OPENROUTER_API_KEY").unwrap_or_default(),
        model: DEFAULT_MODEL.to_string(),
    }
}

pub fn api_configured(settings: &ApiSettings) -> bool {
    !settings.api_key.is_empty() && !settings.model.is_empty()
}

// --- Result store ---

/// Append-only list of generated documents plus the index currently shown
/// in the viewer. Appending always moves the pointer to the new entry;
/// only an explicit select moves it anywhere else.
#[derive(Debug, Default)]
pub struct ResultStore {
    results: Vec<GeneratedResult>,
    current: usize,
}

impl ResultStore {
    /// Append a result and make it current. Returns its index.
    pub fn push(&mut self, result: GeneratedResult) -> usize {
        self.results.push(result);
        self.current = self.results.len() - 1;
        self.current
    }

    pub fn select(&mut self, index: usize) -> Result<(), String> {
        if index >= self.results.len() {
            return Err(format!("no result at index {}", index));
        }
        self.current = index;
        Ok(())
    }

    pub fn current(&self) -> Option<&GeneratedResult> {
        self.results.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn filenames(&self) -> Vec<String> {
        self.results.iter().map(|r| r.filename.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
