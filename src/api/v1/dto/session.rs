/*
 * Responsibility
 * - session login の request DTO
 * - user_id は型を緩く受けて (Value)、validate() で文字列以外を弾く
 */
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
}

impl LoginRequest {
    /// Returns the user id when it is a non-empty string.
    pub fn validate(&self) -> Result<&str, &'static str> {
        match &self.user_id {
            None | Some(Value::Null) => Err("user_id missing"),
            Some(Value::String(id)) if id.trim().is_empty() => Err("user_id missing"),
            Some(Value::String(id)) => Ok(id.as_str()),
            Some(_) => Err("user_id must be a string"),
        }
    }
}
