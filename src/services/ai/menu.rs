use crate::models::Language;
use crate::services::ai::{LlmProvider, Message};

pub const UNAVAILABLE_MESSAGE: &str = "Service currently unavailable.";
pub const EMPTY_SUGGESTION_MESSAGE: &str = "Unable to generate suggestions at this time.";

const SYSTEM_PROMPT: &str = "You are a catering planner for a wedding and event business in \
Haldwani, Uttarakhand. Reply with a short, numbered menu and nothing else.";

fn menu_prompt(event_type: &str, guest_count: u32, language: Language) -> String {
    format!(
        "Suggest a 5-item catering menu for a {event_type} in Uttarakhand with {guest_count} guests. \
         Provide the output in {}. Include at least one local Pahadi dish.",
        language.display_name()
    )
}

/// Best-effort menu ideas for the booking form. Never fails the caller.
pub async fn suggest_menu(
    llm: &dyn LlmProvider,
    event_type: &str,
    guest_count: u32,
    language: Language,
) -> String {
    let messages = [Message::user(menu_prompt(event_type, guest_count, language))];

    match llm.chat(SYSTEM_PROMPT, &messages).await {
        Ok(text) if text.trim().is_empty() => {
            tracing::warn!(event_type, "menu suggestion came back empty");
            EMPTY_SUGGESTION_MESSAGE.to_string()
        }
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            tracing::warn!(error = %e, event_type, "menu suggestion failed, using fallback");
            UNAVAILABLE_MESSAGE.to_string()
        }
    }
}
