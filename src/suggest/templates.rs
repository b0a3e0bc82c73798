use super::SuggestionProvider;

/// Canned prompts offered when there is no search history yet.
pub const PROMPT_SUGGESTIONS: [&str; 8] = [
    "Compare TNET and ADP revenue growth",
    "Show TNET's profit margins over time",
    "Latest earnings call highlights for TNET",
    "Key risks mentioned in TNET's 10-K",
    "Compare employee productivity across competitors",
    "Show industry average metrics",
    "TNET's market position analysis",
    "Competitive advantages of TNET",
];

/// Local stand-in for a backend autocomplete: five fixed phrasings around the query.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSuggestions;

impl SuggestionProvider for TemplateSuggestions {
    fn suggest(&self, query: &str) -> Vec<String> {
        vec![
            format!("Show financial metrics for {query}"),
            format!("Compare {query} with competitors"),
            format!("Latest 10-K filings for {query}"),
            format!("{query} revenue growth trends"),
            format!("{query} earnings call highlights"),
        ]
    }

    fn name(&self) -> &'static str {
        "templates"
    }
}
