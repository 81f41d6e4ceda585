use anyhow::{Context, Result};
use scraper::{Html, Selector};

/// Fetches Massey Ratings archive pages and strips them down to the
/// preformatted comparison text.
pub struct MasseyScraper {
    client: reqwest::Client,
}

impl MasseyScraper {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .unwrap(),
        }
    }

    /// Fetch one season's archive page and return the plain text of its
    /// ranking table block.
    pub async fn fetch_page_text(&self, url: &str) -> Result<String> {
        let html = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch Massey archive page")?
            .error_for_status()
            .context("Massey archive page returned an error status")?
            .text()
            .await?;

        extract_pre_text(&html)
    }
}

impl Default for MasseyScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// The archive pages carry the whole comparison table as plain text inside
/// a single <pre> element; collecting its text drops any embedded tags.
pub fn extract_pre_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let pre_selector = Selector::parse("pre").ok().context("Invalid selector")?;

    let pre = document
        .select(&pre_selector)
        .next()
        .context("No <pre> block found on archive page")?;

    Ok(pre.text().collect::<String>().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_pre_text() {
        let html = "<html><body><h1>Rankings</h1>\
                    <pre>\n HDR a b\n 1 Duke <b>28-4</b>\n</pre></body></html>";
        let text = extract_pre_text(html).unwrap();
        assert_eq!(text, "HDR a b\n 1 Duke 28-4");
    }

    #[test]
    fn test_missing_pre_block_is_an_error() {
        let result = extract_pre_text("<html><body><p>moved</p></body></html>");
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "hits the live Massey Ratings archive"]
    async fn test_fetch_page_text() {
        let scraper = MasseyScraper::new();
        let text = scraper
            .fetch_page_text("https://www.masseyratings.com/cb/arch/compare2018-18.htm")
            .await
            .unwrap();
        assert!(!text.is_empty());
    }
}
