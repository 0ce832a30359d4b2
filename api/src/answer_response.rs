use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub dishes: Vec<String>,
    pub prompt_tokens: usize,
    pub processing_time_ms: u128,
}

#[derive(Deserialize, Serialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Deserialize, Serialize)]
pub struct MenuUploaded {
    pub status: String,
    pub dishes: usize,
}
