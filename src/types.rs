mod chat_permissions;
mod user;

pub use chat_permissions::{ChatPermissions, ChatPermissionsBuilder};
pub use user::User;

use crate::error::TypeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shared behaviour of Bot API objects.
///
/// Implementors capture keys they don't recognize in `api_kwargs` so newer
/// API versions don't break deserialization.
pub trait TelegramObject: Serialize + DeserializeOwned {
    /// Bot API type name, used in error messages.
    const NAME: &'static str;

    fn api_kwargs(&self) -> &Map<String, Value>;

    /// `null` deserializes to `None`. Anything other than an object is an error.
    fn de_json(data: &Value) -> Result<Option<Self>, TypeError> {
        match data {
            Value::Null => Ok(None),
            Value::Object(_) => {
                let object = Self::deserialize(data)?;
                if !object.api_kwargs().is_empty() {
                    tracing::debug!(
                        "{} received unknown keys: {:?}",
                        Self::NAME,
                        object.api_kwargs().keys().collect::<Vec<_>>()
                    );
                }
                Ok(Some(object))
            }
            _ => Err(TypeError::NotAnObject(Self::NAME)),
        }
    }

    fn to_dict(&self) -> Result<Map<String, Value>, TypeError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(TypeError::NotAnObject(Self::NAME)),
        }
    }

    fn to_json(&self) -> Result<String, TypeError> {
        Ok(serde_json::to_string(self)?)
    }
}
