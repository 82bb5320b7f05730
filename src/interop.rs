//! Conversions to and from `teloxide`'s bitflag permissions.
//!
//! teloxide has no notion of an absent flag, so `None` and `Some(false)`
//! both clear the bit.

use crate::types::ChatPermissions;
use teloxide::types::ChatPermissions as TgPermissions;

/// teloxide flags in `ChatPermissions::FIELDS` order.
const TELOXIDE_FLAGS: [TgPermissions; 9] = [
    TgPermissions::SEND_MESSAGES,
    TgPermissions::SEND_MEDIA_MESSAGES,
    TgPermissions::SEND_POLLS,
    TgPermissions::SEND_OTHER_MESSAGES,
    TgPermissions::ADD_WEB_PAGE_PREVIEWS,
    TgPermissions::CHANGE_INFO,
    TgPermissions::INVITE_USERS,
    TgPermissions::PIN_MESSAGES,
    TgPermissions::MANAGE_TOPICS,
];

impl From<&ChatPermissions> for TgPermissions {
    fn from(permissions: &ChatPermissions) -> Self {
        let mut out = Self::empty();
        for ((_, value), flag) in permissions.iter().zip(TELOXIDE_FLAGS) {
            if value == Some(true) {
                out.insert(flag);
            }
        }
        out
    }
}

impl From<TgPermissions> for ChatPermissions {
    fn from(flags: TgPermissions) -> Self {
        ChatPermissions::builder()
            .can_send_messages(flags.contains(TgPermissions::SEND_MESSAGES))
            .can_send_media_messages(flags.contains(TgPermissions::SEND_MEDIA_MESSAGES))
            .can_send_polls(flags.contains(TgPermissions::SEND_POLLS))
            .can_send_other_messages(flags.contains(TgPermissions::SEND_OTHER_MESSAGES))
            .can_add_web_page_previews(flags.contains(TgPermissions::ADD_WEB_PAGE_PREVIEWS))
            .can_change_info(flags.contains(TgPermissions::CHANGE_INFO))
            .can_invite_users(flags.contains(TgPermissions::INVITE_USERS))
            .can_pin_messages(flags.contains(TgPermissions::PIN_MESSAGES))
            .can_manage_topics(flags.contains(TgPermissions::MANAGE_TOPICS))
            .build()
    }
}
