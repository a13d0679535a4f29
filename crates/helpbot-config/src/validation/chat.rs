//! Validation for the `[chat]` section.

use crate::schema::HelpbotConfig;

use super::helpers::{validate_not_blank, validate_range, validate_strftime};

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &HelpbotConfig) {
    let chat = &config.chat;
    validate_not_blank(
        errors,
        "chat.backend_unreachable_text",
        &chat.backend_unreachable_text,
    );
    validate_not_blank(errors, "chat.escalation_sent_text", &chat.escalation_sent_text);
    validate_not_blank(errors, "chat.timestamp_format", &chat.timestamp_format);
    validate_strftime(errors, "chat.timestamp_format", &chat.timestamp_format);
    validate_range(errors, "chat.queue_capacity", chat.queue_capacity, 1, 1024);
    validate_range(errors, "chat.history_limit", chat.history_limit, 1, 500);
}
