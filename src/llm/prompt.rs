//! Prompt assembly for the stylist persona.

use crate::conversation::history::{self, Role, Turn};

use serde::{Deserialize, Serialize};

/// Stored turns replayed to the model: the last two exchanges.
pub const HISTORY_CONTEXT_TURNS: usize = 4;

/// System instruction sent ahead of every conversation.
pub const SYSTEM_PROMPT: &str = "Ты — ассистент-стилист. Старайся брать информацию из открытого доступа. \
Не пиши ответ по пунктам и по одному шаблону: должно создаваться ощущение живого диалога между тобой и пользователем. \
Отвечай развёрнутыми предложениями и давай необходимую информацию. \
Поясняй то, что пользователь может не понять сразу. Можешь давать дополнительные советы. \
Участвуй в диалоге, подстраивайся под стиль общения пользователя, не делай диалог официальным. \
В процессе рекомендаций можешь ссылаться на вещи в интернет-магазинах. Стиль ответов — разговорный, живой. \
Все твои ответы должны быть связаны со стилем.";

/// Role vocabulary of the completion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl From<Role> for PromptRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => PromptRole::User,
            Role::Assistant => PromptRole::Assistant,
        }
    }
}

/// One entry of the outbound `messages` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub text: String,
}

impl PromptMessage {
    pub fn new(role: PromptRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

impl From<&Turn> for PromptMessage {
    fn from(turn: &Turn) -> Self {
        Self::new(turn.role().into(), turn.content())
    }
}

/// System prompt, then the recent history, then the new question.
pub fn build_messages(stored: &[Turn], message: &str) -> Vec<PromptMessage> {
    let context = history::recent(stored, HISTORY_CONTEXT_TURNS);

    let mut messages = Vec::with_capacity(context.len() + 2);
    messages.push(PromptMessage::new(PromptRole::System, SYSTEM_PROMPT));
    messages.extend(context.iter().map(PromptMessage::from));
    messages.push(PromptMessage::new(PromptRole::User, message));
    messages
}
