use crate::parsers::parse_page;
use crate::prompt::{SYSTEM_PROMPT, messages_for, user_prompt_for};
use crate::results::PageContent;

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_DOMAIN: &str = r#"<!doctype html>
<html>
<head>
    <title>Example Domain</title>
    <meta charset="utf-8" />
    <style type="text/css">
    body { background-color: #f0f0f2; }
    </style>
</head>
<body>
<div>
    <p>This domain is for use in illustrative examples.</p>
</div>
</body>
</html>"#;

    #[test]
    fn test_example_domain_page() {
        let page = parse_page("https://example.com", EXAMPLE_DOMAIN).unwrap();
        assert_eq!(
            page,
            PageContent::new(
                "https://example.com".to_string(),
                Some("Example Domain".to_string()),
                "This domain is for use in illustrative examples.".to_string(),
            )
        );
    }

    #[test]
    fn test_example_domain_prompt() {
        let page = parse_page("https://example.com", EXAMPLE_DOMAIN).unwrap();
        let [system, user] = messages_for(&page);

        assert_eq!(system.content, SYSTEM_PROMPT);
        assert!(
            user.content
                .starts_with("You are looking at a website titled Example Domain")
        );
        assert_eq!(
            user.content,
            "You are looking at a website titled Example Domain\n\
             The contents of this website is as follows; summarize these.\n\n\
             This domain is for use in illustrative examples."
        );
    }

    #[test]
    fn test_prompt_contains_title_and_text() {
        let html = r#"<html><head><title>Rust &amp; Friends</title><script>track()</script></head>
            <body><nav><a href="/">Home</a></nav><main><h1>Welcome</h1><p>Systems programming.</p>
            <script>track()</script><img src="logo.png"></main></body></html>"#;
        let page = parse_page("https://rust.example", html).unwrap();

        assert_eq!(page.title(), "Rust & Friends");
        assert_eq!(page.text(), "Home\nWelcome\nSystems programming.");

        let prompt = user_prompt_for(&page);
        assert!(prompt.contains(page.title()));
        assert!(prompt.contains(page.text()));
        assert!(!prompt.contains("track()"));
    }
}
