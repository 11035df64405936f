// src/services/detail.rs

//! Article page extraction.
//!
//! Each field falls through an ordered list of candidates independently until
//! one yields non-empty text. A page without a usable body container simply
//! has no content; that is not an error.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ArticleDetail, ScraperConfig};
use crate::utils::{clean_text, dedupe_by};

/// Candidate containers for the article body, in priority order.
const CONTENT_CONTAINERS: &str = "article, .article, .single, .content, .post";

/// Parse one article page into full metadata plus cleaned body text.
pub fn parse_details(html: &str, config: &ScraperConfig) -> Result<ArticleDetail> {
    let document = Html::parse_document(html);

    let title = first_text(&document, "h1")?;

    let published = time_element(&document)?
        .or(meta(&document, "article:published_time"))
        .map(|v| clean_text(&v))
        .filter(|v| !v.is_empty());

    let author = first_text(&document, r#"[rel~="author"], .author, .article-author"#)?;

    let description = meta(&document, "og:description")
        .map(|v| clean_text(&v))
        .filter(|v| !v.is_empty())
        .or(first_text(&document, "p")?);

    let category = meta(&document, "article:section")
        .map(|v| clean_text(&v))
        .filter(|v| !v.is_empty())
        .or(breadcrumb_category(&document)?)
        .or_else(|| Some(config.default_category.clone()));

    let main_image = meta(&document, "og:image");

    let tag_sel = parse_selector(r#"a[rel~="tag"], .tags a"#)?;
    let tags = dedupe_by(
        document
            .select(&tag_sel)
            .map(|el| clean_text(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
            .collect(),
        |t: &String| Some(t.clone()),
    );

    let content = extract_content(&document)?;

    Ok(ArticleDetail {
        title,
        published,
        author,
        description,
        category,
        main_image,
        tags,
        content,
    })
}

/// Text of every paragraph inside the primary content container, joined and
/// whitespace-collapsed. Absent container or zero paragraphs yields `None`.
fn extract_content(document: &Html) -> Result<Option<String>> {
    let container_sel = parse_selector(CONTENT_CONTAINERS)?;
    let paragraph_sel = parse_selector("p")?;

    let Some(container) = document.select(&container_sel).next() else {
        return Ok(None);
    };

    let paragraphs: Vec<String> = container
        .select(&paragraph_sel)
        .map(|p| clean_text(&p.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect();

    let joined = clean_text(&paragraphs.join("\n"));
    if joined.is_empty() {
        return Ok(None);
    }
    Ok(Some(joined))
}

/// First element matching `selector` with non-empty cleaned text.
fn first_text(document: &Html, selector: &str) -> Result<Option<String>> {
    let sel = parse_selector(selector)?;
    Ok(document
        .select(&sel)
        .next()
        .map(|el| clean_text(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty()))
}

/// Published candidate from the first `time` element: machine-readable
/// attribute first, visible text second.
fn time_element(document: &Html) -> Result<Option<String>> {
    let sel = parse_selector("time")?;
    let Some(el) = document.select(&sel).next() else {
        return Ok(None);
    };
    let machine = el
        .value()
        .attr("datetime")
        .map(clean_text)
        .filter(|v| !v.is_empty());
    Ok(machine.or_else(|| {
        let text = clean_text(&el.text().collect::<String>());
        if text.is_empty() { None } else { Some(text) }
    }))
}

/// Structured metadata content, checking `property` then `name` attributes.
fn meta(document: &Html, name: &str) -> Option<String> {
    for attr in ["property", "name"] {
        let selector = format!(r#"meta[{attr}="{name}"]"#);
        let Ok(sel) = Selector::parse(&selector) else {
            continue;
        };
        if let Some(content) = document
            .select(&sel)
            .next()
            .and_then(|el| el.value().attr("content"))
        {
            if !content.trim().is_empty() {
                return Some(content.to_string());
            }
        }
    }
    None
}

/// Second breadcrumb link, the conventional slot for the section name.
fn breadcrumb_category(document: &Html) -> Result<Option<String>> {
    let sel = parse_selector(".breadcrumbs a")?;
    Ok(document
        .select(&sel)
        .nth(1)
        .map(|el: ElementRef| clean_text(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty()))
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScraperConfig {
        ScraperConfig::default()
    }

    const FULL_PAGE: &str = r#"
        <html><head>
          <meta property="og:description" content="Kratak opis vesti">
          <meta property="og:image" content="https://img.example/naslovna.jpg">
          <meta property="article:section" content="Svet">
          <meta property="article:published_time" content="2026-08-01T09:00:00Z">
        </head><body>
          <h1> Veliki   naslov </h1>
          <div class="breadcrumbs"><a href="/">Početna</a><a href="/svet">Svet</a></div>
          <span class="author">Petar Petrović</span>
          <article>
            <p>Prvi pasus.</p>
            <p>  Drugi   pasus. </p>
            <div><p>Ugneždeni pasus.</p></div>
          </article>
          <div class="tags"><a>politika</a><a>svet</a><a>politika</a></div>
        </body></html>
    "#;

    #[test]
    fn extracts_all_fields_from_full_page() {
        let detail = parse_details(FULL_PAGE, &config()).expect("parse");
        assert_eq!(detail.title.as_deref(), Some("Veliki naslov"));
        assert_eq!(detail.published.as_deref(), Some("2026-08-01T09:00:00Z"));
        assert_eq!(detail.author.as_deref(), Some("Petar Petrović"));
        assert_eq!(detail.description.as_deref(), Some("Kratak opis vesti"));
        assert_eq!(detail.category.as_deref(), Some("Svet"));
        assert_eq!(
            detail.main_image.as_deref(),
            Some("https://img.example/naslovna.jpg")
        );
        assert_eq!(detail.tags, vec!["politika", "svet"]);
        assert_eq!(
            detail.content.as_deref(),
            Some("Prvi pasus. Drugi pasus. Ugneždeni pasus.")
        );
    }

    #[test]
    fn published_prefers_time_element_over_meta() {
        let html = r#"
            <head><meta property="article:published_time" content="meta-time"></head>
            <body><time datetime="attr-time">vidljivo</time><h1>T</h1></body>
        "#;
        let detail = parse_details(html, &config()).expect("parse");
        assert_eq!(detail.published.as_deref(), Some("attr-time"));
    }

    #[test]
    fn published_falls_back_through_text_then_meta() {
        let html = r#"
            <head><meta property="article:published_time" content="meta-time"></head>
            <body><time>  1. avgust </time></body>
        "#;
        let detail = parse_details(html, &config()).expect("parse");
        assert_eq!(detail.published.as_deref(), Some("1. avgust"));

        let html = r#"<head><meta property="article:published_time" content="meta-time"></head>"#;
        let detail = parse_details(html, &config()).expect("parse");
        assert_eq!(detail.published.as_deref(), Some("meta-time"));
    }

    #[test]
    fn description_falls_back_to_first_paragraph() {
        let html = "<body><p>Prvi pasus kao opis.</p></body>";
        let detail = parse_details(html, &config()).expect("parse");
        assert_eq!(detail.description.as_deref(), Some("Prvi pasus kao opis."));
    }

    #[test]
    fn category_falls_back_to_breadcrumb_then_default() {
        let html = r#"<div class="breadcrumbs"><a>Početna</a><a>Region</a></div>"#;
        let detail = parse_details(html, &config()).expect("parse");
        assert_eq!(detail.category.as_deref(), Some("Region"));

        let detail = parse_details("<p>x</p>", &config()).expect("parse");
        assert_eq!(detail.category.as_deref(), Some("Vesti"));
    }

    #[test]
    fn missing_container_yields_no_content() {
        let html = "<body><h1>Naslov</h1><span>bez tela</span></body>";
        let detail = parse_details(html, &config()).expect("parse");
        assert!(detail.content.is_none());
    }

    #[test]
    fn empty_container_yields_no_content() {
        let html = "<body><article><div>nema pasusa</div></article></body>";
        let detail = parse_details(html, &config()).expect("parse");
        assert!(detail.content.is_none());
    }
}
