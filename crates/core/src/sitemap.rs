//! sitemaps.org XML generation.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

use crate::types::Category;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("failed to write sitemap: {0}")]
    Write(#[from] std::io::Error),

    #[error("sitemap is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// How often a location is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: ChangeFreq,
    /// Already formatted, e.g. `"0.7"`.
    pub priority: &'static str,
}

/// Entries for the home page and every category page.
#[must_use]
pub fn entries(site_url: &str, categories: &[Category]) -> Vec<SitemapEntry> {
    let site_url = site_url.trim_end_matches('/');

    std::iter::once(SitemapEntry {
        loc: format!("{site_url}/"),
        changefreq: ChangeFreq::Daily,
        priority: "1.0",
    })
    .chain(categories.iter().map(|c| SitemapEntry {
        loc: format!("{site_url}/categoria/{}", c.id),
        changefreq: ChangeFreq::Weekly,
        priority: "0.7",
    }))
    .collect()
}

/// Render a complete sitemap document.
///
/// # Errors
///
/// Returns an error if the XML writer fails.
pub fn render(entries: &[SitemapEntry]) -> Result<String, SitemapError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer
            .create_element("loc")
            .write_text_content(BytesText::new(&entry.loc))?;
        writer
            .create_element("changefreq")
            .write_text_content(BytesText::new(entry.changefreq.as_str()))?;
        writer
            .create_element("priority")
            .write_text_content(BytesText::new(entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())?;
    xml.push('\n');
    Ok(xml)
}

/// Sitemap for the storefront: home plus one page per category.
///
/// ```
/// use remakeup_core::sitemap::build_sitemap;
///
/// let xml = build_sitemap("https://remakeup.com.br", &[]).unwrap();
/// assert!(xml.contains("<loc>https://remakeup.com.br/</loc>"));
/// ```
///
/// # Errors
///
/// Returns an error if the XML writer fails.
pub fn build_sitemap(site_url: &str, categories: &[Category]) -> Result<String, SitemapError> {
    render(&entries(site_url, categories))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CategoryId;

    #[test]
    fn test_home_then_categories() {
        let categories = vec![
            Category {
                id: CategoryId::new(3),
                name: "Batom".to_string(),
            },
            Category {
                id: CategoryId::new(8),
                name: "Cursos".to_string(),
            },
        ];

        let entries = entries("https://remakeup.com.br/", &categories);
        let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://remakeup.com.br/",
                "https://remakeup.com.br/categoria/3",
                "https://remakeup.com.br/categoria/8",
            ]
        );
        assert_eq!(entries.first().map(|e| e.priority), Some("1.0"));
        assert_eq!(entries.last().map(|e| e.changefreq), Some(ChangeFreq::Weekly));
    }

    #[test]
    fn test_render_document() {
        let xml = build_sitemap("https://remakeup.com.br", &[]).unwrap();
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(
            lines,
            vec![
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>",
                "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
                "  <url>",
                "    <loc>https://remakeup.com.br/</loc>",
                "    <changefreq>daily</changefreq>",
                "    <priority>1.0</priority>",
                "  </url>",
                "</urlset>",
            ]
        );
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_escapes_locations() {
        let xml = render(&[SitemapEntry {
            loc: "https://a.example/?x=1&y=<2>".to_string(),
            changefreq: ChangeFreq::Weekly,
            priority: "0.5",
        }])
        .unwrap();
        assert!(xml.contains("<loc>https://a.example/?x=1&amp;y=&lt;2&gt;</loc>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
    }
}
