use crate::prompt::render_json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

pub const DEFAULT_DESCRIPTION: &str = "No description.";

/// One menu entry. Only `dish_name` is typed; every other field keeps
/// whatever JSON the document carried and is defaulted by the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub dish_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_info: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Value>,
}

static EMPTY_OBJECT: OnceLock<Value> = OnceLock::new();

fn empty_object() -> &'static Value {
    EMPTY_OBJECT.get_or_init(|| Value::Object(Map::new()))
}

/// Strings as-is, anything else as its JSON text.
fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(render_json(other)),
    }
}

impl Dish {
    pub fn name(&self) -> &str {
        &self.dish_name
    }

    pub fn description(&self) -> Cow<'_, str> {
        self.description
            .as_ref()
            .map(as_text)
            .unwrap_or(Cow::Borrowed(DEFAULT_DESCRIPTION))
    }

    /// A list yields its items; a lone value is a one-item list.
    pub fn ingredients(&self) -> Vec<Cow<'_, str>> {
        match &self.ingredients {
            None => Vec::new(),
            Some(Value::Array(items)) => items.iter().map(as_text).collect(),
            Some(single) => vec![as_text(single)],
        }
    }

    pub fn dietary_info(&self) -> &Value {
        self.dietary_info.as_ref().unwrap_or_else(|| empty_object())
    }

    pub fn substitutions(&self) -> &Value {
        self.substitutions.as_ref().unwrap_or_else(|| empty_object())
    }

    pub fn policies(&self) -> &Value {
        self.policies.as_ref().unwrap_or_else(|| empty_object())
    }
}

/// The ordered dish collection of one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    dishes: Vec<Dish>,
}

impl Menu {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }
}

impl<'a> IntoIterator for &'a Menu {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}

/// API key for the completion service. Formatting never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for an empty or blank key.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Result of one answered question.
#[derive(Debug, Clone)]
pub struct Answer {
    pub text: String,
    pub dishes: Vec<String>,
    pub prompt: String,
    pub processing_time_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
