use super::TelegramObject;
use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::hash::{Hash, Hasher};

macro_rules! chat_permission_flags {
    ($($(#[$doc:meta])* $name:ident),+ $(,)?) => {
        const FIELDS: &[&str] = &[$(stringify!($name)),+];
        const FLAG_COUNT: usize = FIELDS.len();

        /// Actions a non-administrator member is allowed to take in a chat.
        ///
        /// Every flag is optional and `None` leaves the chat default untouched.
        /// Equality and hashing look at the flags only, never at `api_kwargs`.
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        #[serde(default)]
        pub struct ChatPermissions {
            $($name: Option<bool>,)+
            #[serde(flatten)]
            api_kwargs: Map<String, Value>,
        }

        impl ChatPermissions {
            /// Wire names of every flag, in declaration order.
            pub const FIELDS: &'static [&'static str] = FIELDS;

            $(
                $(#[$doc])*
                pub const fn $name(&self) -> Option<bool> {
                    self.$name
                }
            )+

            const fn flags(&self) -> [Option<bool>; FLAG_COUNT] {
                [$(self.$name),+]
            }

            fn uniform(value: Option<bool>) -> Self {
                Self {
                    $($name: value,)+
                    api_kwargs: Map::new(),
                }
            }

            /// Looks up a flag by its wire name.
            pub fn get(&self, name: &str) -> Result<Option<bool>, TypeError> {
                match name {
                    $(stringify!($name) => Ok(self.$name),)+
                    _ => Err(TypeError::UnknownField(name.to_string())),
                }
            }
        }

        /// Sets flags by name in any order. Flags never set stay `None`.
        #[derive(Debug, Clone, Default)]
        #[must_use]
        pub struct ChatPermissionsBuilder {
            $($name: Option<bool>,)+
        }

        impl ChatPermissionsBuilder {
            $(
                pub const fn $name(mut self, value: bool) -> Self {
                    self.$name = Some(value);
                    self
                }
            )+

            pub fn build(self) -> ChatPermissions {
                ChatPermissions {
                    $($name: self.$name,)+
                    api_kwargs: Map::new(),
                }
            }
        }
    };
}

chat_permission_flags! {
    /// Text messages, contacts, locations and venues.
    can_send_messages,
    /// Audios, documents, photos, videos, video notes and voice notes.
    /// Implies `can_send_messages`.
    can_send_media_messages,
    /// Polls. Implies `can_send_messages`.
    can_send_polls,
    /// Animations, games, stickers and inline bot results.
    /// Implies `can_send_media_messages`.
    can_send_other_messages,
    /// Web page previews on messages. Implies `can_send_media_messages`.
    can_add_web_page_previews,
    /// Chat title, photo and other settings. Ignored in public supergroups.
    can_change_info,
    can_invite_users,
    /// Ignored in public supergroups.
    can_pin_messages,
    /// Create, rename, close and reopen forum topics.
    /// Falls back to `can_pin_messages` when absent.
    can_manage_topics,
}

impl ChatPermissions {
    pub fn builder() -> ChatPermissionsBuilder {
        ChatPermissionsBuilder::default()
    }

    /// Every flag set to `true`.
    pub fn all_permissions() -> Self {
        Self::uniform(Some(true))
    }

    /// Every flag set to `false`.
    pub fn no_permissions() -> Self {
        Self::uniform(Some(false))
    }

    /// `(wire name, value)` pairs in `FIELDS` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<bool>)> {
        FIELDS.iter().copied().zip(self.flags())
    }
}

impl PartialEq for ChatPermissions {
    fn eq(&self, other: &Self) -> bool {
        self.flags() == other.flags()
    }
}

impl Eq for ChatPermissions {}

impl Hash for ChatPermissions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.flags().hash(state);
    }
}

impl TelegramObject for ChatPermissions {
    const NAME: &'static str = "ChatPermissions";

    fn api_kwargs(&self) -> &Map<String, Value> {
        &self.api_kwargs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use std::hash::DefaultHasher;

    fn hash_of(permissions: &ChatPermissions) -> u64 {
        let mut hasher = DefaultHasher::new();
        permissions.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn fields_are_unique_and_complete() {
        let unique: HashSet<_> = ChatPermissions::FIELDS.iter().collect();
        assert_eq!(unique.len(), 9);
        assert_eq!(ChatPermissions::FIELDS[0], "can_send_messages");
        assert_eq!(ChatPermissions::FIELDS[8], "can_manage_topics");
    }

    #[test]
    fn builder_leaves_unset_flags_empty() {
        let permissions = ChatPermissions::builder()
            .can_send_polls(true)
            .can_pin_messages(false)
            .build();

        assert_eq!(permissions.can_send_polls(), Some(true));
        assert_eq!(permissions.can_pin_messages(), Some(false));
        assert_eq!(permissions.can_send_messages(), None);
        assert_eq!(permissions.can_manage_topics(), None);
        assert!(permissions.api_kwargs().is_empty());
    }

    #[test]
    fn get_reads_by_wire_name() {
        let permissions = ChatPermissions::builder().can_invite_users(true).build();
        assert_eq!(permissions.get("can_invite_users").unwrap(), Some(true));
        assert_eq!(permissions.get("can_change_info").unwrap(), None);
    }

    #[test]
    fn get_rejects_unknown_name() {
        let err = ChatPermissions::default().get("can_fly").unwrap_err();
        assert!(matches!(err, TypeError::UnknownField(ref name) if name == "can_fly"));
    }

    #[test]
    fn iter_follows_field_order() {
        let names: Vec<_> = ChatPermissions::all_permissions()
            .iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ChatPermissions::FIELDS);
    }

    #[test]
    fn api_kwargs_do_not_affect_equality_or_hash() {
        let with_extra = ChatPermissions::de_json(&json!({
            "can_send_messages": true,
            "can_send_stories": true,
        }))
        .unwrap()
        .unwrap();
        let plain = ChatPermissions::builder().can_send_messages(true).build();

        assert_eq!(with_extra.api_kwargs().len(), 1);
        assert_eq!(with_extra, plain);
        assert_eq!(hash_of(&with_extra), hash_of(&plain));
    }

    #[test]
    fn each_single_flag_change_breaks_equality() {
        let base = ChatPermissions::no_permissions();
        for name in ChatPermissions::FIELDS {
            let mut value = serde_json::to_value(&base).unwrap();
            value[*name] = json!(true);
            let changed = ChatPermissions::de_json(&value).unwrap().unwrap();
            assert_ne!(changed, base, "flipping {name} should change equality");
            assert_ne!(hash_of(&changed), hash_of(&base));
        }
    }

    #[test]
    fn null_and_missing_keys_both_deserialize_to_none() {
        let permissions = ChatPermissions::de_json(&json!({"can_send_polls": null}))
            .unwrap()
            .unwrap();
        assert_eq!(permissions, ChatPermissions::default());
        assert!(permissions.api_kwargs().is_empty());
    }

    #[test]
    fn non_boolean_flag_is_rejected() {
        let err = ChatPermissions::de_json(&json!({"can_send_messages": "yes"})).unwrap_err();
        assert!(matches!(err, TypeError::Json(_)));
    }

    #[test]
    fn non_object_input_is_rejected() {
        for value in [json!(true), json!([]), json!("can_send_messages")] {
            let err = ChatPermissions::de_json(&value).unwrap_err();
            assert!(matches!(err, TypeError::NotAnObject("ChatPermissions")));
        }
    }

    #[test]
    fn null_input_is_none() {
        assert!(ChatPermissions::de_json(&Value::Null).unwrap().is_none());
    }
}
