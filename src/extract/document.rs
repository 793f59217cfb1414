//! Document navigator
//!
//! Fallible lookups over one parsed HTML page. Single-node queries report
//! absence as `NodeNotFound`; list queries treat zero matches as a valid result.

use crate::error::ExtractError;
use crate::extract::layout::NodeQuery;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;

/// Elements html5ever synthesizes for any input, markup or not.
const SKELETON: [&str; 3] = ["html", "head", "body"];

/// A `NodeQuery` compiled to a selector.
#[derive(Debug, Clone)]
pub struct Query {
    css: Arc<str>,
    selector: Selector,
}

impl Query {
    pub fn compile(query: &NodeQuery) -> Result<Self, ExtractError> {
        let css = query.to_css();
        let selector = Selector::parse(&css).map_err(|e| ExtractError::InvalidSelector {
            selector: css.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            css: css.into(),
            selector,
        })
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// Parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a page, rejecting input that carries no markup at all.
    pub fn parse(raw: &str) -> Result<Self, ExtractError> {
        if raw.trim().is_empty() {
            return Err(ExtractError::ParseFailure("document is empty".to_string()));
        }

        let html = Html::parse_document(raw);
        let has_content = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .any(|el| !SKELETON.contains(&el.value().name()));
        if !has_content {
            return Err(ExtractError::ParseFailure(
                "document contains no HTML elements".to_string(),
            ));
        }

        Ok(Self { html })
    }

    /// First node in document order matching `query`.
    pub fn find_one(&self, query: &Query) -> Result<Node<'_>, ExtractError> {
        self.html
            .select(&query.selector)
            .next()
            .map(|element| Node {
                element,
                css: query.css.clone(),
            })
            .ok_or_else(|| ExtractError::NodeNotFound(query.css().to_string()))
    }

    /// All nodes matching `query`, in document order.
    pub fn find_all(&self, query: &Query) -> Vec<Node<'_>> {
        self.html
            .select(&query.selector)
            .map(|element| Node {
                element,
                css: query.css.clone(),
            })
            .collect()
    }
}

/// A matched element
#[derive(Debug, Clone)]
pub struct Node<'a> {
    element: ElementRef<'a>,
    css: Arc<str>,
}

impl<'a> Node<'a> {
    /// Value of the node's first text child. Leading elements and comments
    /// are skipped.
    pub fn text(&self) -> Result<&'a str, ExtractError> {
        self.element
            .children()
            .find_map(|child| child.value().as_text())
            .map(|text| &**text)
            .ok_or_else(|| ExtractError::MissingText(self.css.to_string()))
    }
}
