// src/page/parse.rs
// =============================================================================
// This module pulls the three things the crawler needs out of an HTML page:
//
// - the title (text of the first <title>, if it has any)
// - the visible text (every text node, minus script/style/noscript/template)
// - the raw href of every <a href="..."> in document order
//
// We use the `scraper` crate, which is built on html5ever. html5ever never
// rejects input: broken markup is repaired the same way a browser would, so
// HtmlParser always succeeds. The PageParser trait still returns a Result
// so other parsers (and test doubles) can report a failure per page.
// =============================================================================

use scraper::{Html, Node, Selector};

use crate::error::PageError;

/// What the crawler keeps from a parsed page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub title: Option<String>,
    pub text: String,
    pub hrefs: Vec<String>,
}

pub trait PageParser: Send + Sync {
    fn parse(&self, url: &str, body: &str) -> Result<ParsedPage, PageError>;
}

// Elements whose text never shows up on screen
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

pub struct HtmlParser {
    title: Selector,
    anchors: Selector,
}

impl HtmlParser {
    pub fn new() -> Self {
        // Both selectors are constants, so parsing them cannot fail
        Self {
            title: Selector::parse("title").expect("valid title selector"),
            anchors: Selector::parse("a[href]").expect("valid anchor selector"),
        }
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PageParser for HtmlParser {
    fn parse(&self, _url: &str, body: &str) -> Result<ParsedPage, PageError> {
        let document = Html::parse_document(body);

        let title = document
            .select(&self.title)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|title| !title.is_empty());

        let hrefs = document
            .select(&self.anchors)
            .filter_map(|el| el.value().attr("href"))
            .filter(|href| !href.trim().is_empty())
            .map(str::to_string)
            .collect();

        Ok(ParsedPage {
            title,
            text: visible_text(&document),
            hrefs,
        })
    }
}

// Concatenates every text node that is not inside a hidden element.
fn visible_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        let Node::Text(chunk) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(el) => HIDDEN_ELEMENTS.contains(&el.name()),
            _ => false,
        });

        if !hidden {
            text.push_str(chunk);
        }
    }

    text
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `let ... else`?
//    - let Node::Text(chunk) = node.value() else { continue; };
//    - Binds `chunk` if the pattern matches, otherwise runs the else block
//    - The else block must leave the scope (continue, return, break, panic)
//
// 2. Why walk the tree instead of calling .text() on <body>?
//    - .text() on an element returns ALL its text, including <script> code
//    - Walking node by node lets us skip anything under a hidden element
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> ParsedPage {
        HtmlParser::new().parse("https://example.com", html).unwrap()
    }

    #[test]
    fn test_extracts_title_text_and_links() {
        let page = parse(
            r#"<html><head><title> Daily News </title></head>
               <body><h1>Headline</h1><p>Some <b>bold</b> words.</p>
               <a href="/one">One</a><a href="two.html">Two</a></body></html>"#,
        );

        assert_eq!(page.title.as_deref(), Some("Daily News"));
        assert!(page.text.contains("Headline"));
        assert!(page.text.contains("Some bold words."));
        assert_eq!(page.hrefs, vec!["/one", "two.html"]);
    }

    #[test]
    fn test_links_keep_document_order_and_duplicates() {
        let page = parse(r#"<a href="b">B</a><p><a href="a">A</a></p><a href="b">B again</a>"#);
        assert_eq!(page.hrefs, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_missing_or_empty_title() {
        assert_eq!(parse("<p>no head at all</p>").title, None);
        assert_eq!(parse("<title>   </title><p>x</p>").title, None);
    }

    #[test]
    fn test_skips_empty_hrefs_and_anchors_without_href() {
        let page = parse(r#"<a href="">empty</a><a name="top">anchor</a><a href="/ok">ok</a>"#);
        assert_eq!(page.hrefs, vec!["/ok"]);
    }

    #[test]
    fn test_hidden_text_is_excluded() {
        let page = parse(
            "<head><style>body { color: red }</style></head>\
             <body><script>var secret = 1;</script><p>shown</p></body>",
        );
        assert!(page.text.contains("shown"));
        assert!(!page.text.contains("secret"));
        assert!(!page.text.contains("color"));
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let page = parse("<html><body><p>unclosed <div>nested <a href='/x'>link");
        assert!(page.text.contains("unclosed"));
        assert!(page.text.contains("nested"));
        assert_eq!(page.hrefs, vec!["/x"]);
    }

    #[test]
    fn test_plain_text_body() {
        let page = parse("just some words");
        assert_eq!(page.title, None);
        assert_eq!(page.text, "just some words");
        assert!(page.hrefs.is_empty());
    }
}
