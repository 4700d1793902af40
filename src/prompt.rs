use crate::messages::ChatMessage;
use crate::results::PageContent;

/// Instruction sent as the system message of every request
pub const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
and provides a short summary, ignoring text that might be navigation related. \
Respond in markdown.";

/// Builds the user message for a page
///
/// The page text is passed through whole; nothing is truncated.
pub fn user_prompt_for(page: &PageContent) -> String {
    let mut prompt = format!("You are looking at a website titled {}", page.title());
    prompt.push_str("\nThe contents of this website is as follows; summarize these.\n\n");
    prompt.push_str(page.text());
    prompt
}

/// System and user messages for a page, in that order
pub fn messages_for(page: &PageContent) -> [ChatMessage; 2] {
    [
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt_for(page)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Role;

    fn example_page() -> PageContent {
        PageContent::new(
            "https://example.com".to_string(),
            Some("Example Domain".to_string()),
            "This domain is for use in illustrative examples.".to_string(),
        )
    }

    #[test]
    fn test_user_prompt_layout() {
        assert_eq!(
            user_prompt_for(&example_page()),
            "You are looking at a website titled Example Domain\n\
             The contents of this website is as follows; summarize these.\n\n\
             This domain is for use in illustrative examples."
        );
    }

    #[test]
    fn test_messages_order_and_roles() {
        let [system, user] = messages_for(&example_page());
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, SYSTEM_PROMPT);
        assert_eq!(user.role, Role::User);
        assert!(
            user.content
                .starts_with("You are looking at a website titled Example Domain")
        );
    }

    #[test]
    fn test_deterministic() {
        let page = example_page();
        assert_eq!(messages_for(&page), messages_for(&page));
    }

    #[test]
    fn test_untitled_page_uses_sentinel() {
        let page = PageContent::new("https://example.com".into(), None, "Body".into());
        let prompt = user_prompt_for(&page);
        assert!(prompt.starts_with("You are looking at a website titled No title found\n"));
        assert!(prompt.ends_with("\n\nBody"));
    }

    #[test]
    fn test_large_text_not_truncated() {
        let text = "line of page text\n".repeat(20_000);
        let page = PageContent::new("https://example.com".into(), Some("Big".into()), text.clone());
        let prompt = user_prompt_for(&page);
        assert!(prompt.contains(&text));
        assert!(prompt.contains("Big"));
    }

    #[test]
    fn test_system_prompt_mentions_markdown() {
        assert!(SYSTEM_PROMPT.contains("short summary"));
        assert!(SYSTEM_PROMPT.contains("navigation related"));
        assert!(SYSTEM_PROMPT.ends_with("Respond in markdown."));
    }
}
