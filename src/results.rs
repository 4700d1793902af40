use serde::Serialize;

/// Title used when a page has no `<title>` element (or an empty one)
pub const NO_TITLE: &str = "No title found";

/// Cleaned title and body text of a single fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContent {
    url: String,
    title: String,
    text: String,
}

impl PageContent {
    /// Create a new page content instance
    ///
    /// An empty title is replaced with [`NO_TITLE`].
    pub fn new(url: String, title: Option<String>, text: String) -> Self {
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string());

        Self { url, title, text }
    }

    /// Address the page was fetched from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Page title, never empty
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text, one fragment per line
    pub fn text(&self) -> &str {
        &self.text
    }
}
