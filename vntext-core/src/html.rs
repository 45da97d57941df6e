//! Boundary to an external HTML document engine.
//!
//! Parsing HTML and evaluating XPath belong to whatever DOM library the
//! caller already uses. This module defines the small [`DocumentTree`] trait
//! such a library has to implement, and builds the engine-independent parts
//! on top of it:
//!
//! - [`visible_text`]: text of a subtree in document order, `script` /
//!   `style` / `noscript` content skipped, whitespace collapsed
//! - [`link_urls`]: absolute `a[href]` and `img[src]` URLs of a subtree,
//!   de-duplicated by first occurrence
//! - [`image_source`]: the absolute `src` of one image, `data:` URIs excluded
//! - [`resolve_url`]: the URL resolution rules shared by the above
//!
//! URL resolution follows the WHATWG URL standard through the `url` crate.
//! Fragments are always stripped, so `#top` resolves to the base page itself.
//! Only `http` and `https` results are returned; `data:`, `javascript:`,
//! `mailto:` and similar references are not links.

use rustc_hash::FxHashSet;
use tracing::debug;
use url::Url;
use vntext_types::{Result, TextError};

use crate::analyzer::spaces::SpaceCollapser;

/// What a node is, as far as text and link extraction care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    /// An element with its tag name.
    Element(&'a str),
    /// A text node with its content.
    Text(&'a str),
    /// Comments, doctypes, processing instructions, the document node.
    Other,
}

/// A parsed document, implemented by the caller's DOM engine.
pub trait DocumentTree {
    /// Cheap handle to a node in the tree.
    type Node: Copy;

    /// The document root.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidInput`] if the document has no usable root.
    fn root(&self) -> Result<Self::Node>;

    /// Evaluates an XPath query relative to `node`, in document order.
    ///
    /// # Errors
    ///
    /// [`TextError::QuerySyntax`] if `query` is malformed.
    fn select(&self, node: Self::Node, query: &str) -> Result<Vec<Self::Node>>;

    fn kind(&self, node: Self::Node) -> NodeKind<'_>;

    /// Direct children of `node`, in document order.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;
}

/// Elements whose text content is never shown to a reader.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

fn is_hidden(tag: &str) -> bool {
    HIDDEN_ELEMENTS.iter().any(|h| h.eq_ignore_ascii_case(tag))
}

/// Walks the subtree under `node` in document order (pre-order).
fn walk<T, F>(tree: &T, node: T::Node, mut visit: F)
where
    T: DocumentTree + ?Sized,
    F: FnMut(T::Node, NodeKind<'_>) -> bool,
{
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if !visit(current, tree.kind(current)) {
            continue;
        }
        let children = tree.children(current);
        stack.extend(children.into_iter().rev());
    }
}

/// Visible text under `node`.
///
/// Text nodes are joined with newlines, then passed through
/// [`SpaceCollapser`], so the result has one trimmed line per text block
/// and no blank lines.
pub fn visible_text<T>(tree: &T, node: T::Node) -> String
where
    T: DocumentTree + ?Sized,
{
    let mut raw = String::new();
    walk(tree, node, |_, kind| match kind {
        NodeKind::Element(tag) => !is_hidden(tag),
        NodeKind::Text(text) => {
            raw.push_str(text);
            raw.push('\n');
            false
        }
        NodeKind::Other => true,
    });
    SpaceCollapser::new().collapse(&raw)
}

/// Visible text of every node matching `query`, starting from the root.
///
/// # Errors
///
/// Propagates [`TextError::InvalidInput`] from [`DocumentTree::root`] and
/// [`TextError::QuerySyntax`] from [`DocumentTree::select`].
pub fn select_text<T>(tree: &T, query: &str) -> Result<Vec<String>>
where
    T: DocumentTree + ?Sized,
{
    let root = tree.root()?;
    let nodes = tree.select(root, query).inspect_err(|e| {
        debug!(query, error = %e, "document query failed");
    })?;
    Ok(nodes.into_iter().map(|n| visible_text(tree, n)).collect())
}

/// Parses a base URL.
///
/// # Errors
///
/// [`TextError::InvalidUrl`] if `base` is not an absolute URL.
pub fn parse_base(base: &str) -> Result<Url> {
    Url::parse(base).map_err(|e| TextError::InvalidUrl {
        url: base.to_owned(),
        reason: e.to_string(),
    })
}

/// Resolves `reference` against `base` into an absolute http(s) URL.
///
/// Returns `None` for empty references, for `data:` and other non-http
/// schemes, and for references the URL parser rejects.
///
/// The result is the WHATWG serialization, so a bare host always carries
/// its root path: `#top` against `https://www.google.com.vn` gives
/// `https://www.google.com.vn/`.
pub fn resolve_url(base: &Url, reference: &str) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() || has_scheme(reference, "data") {
        return None;
    }

    let mut resolved = match base.join(reference) {
        Ok(url) => url,
        Err(e) => {
            debug!(reference, error = %e, "skipping unresolvable link");
            return None;
        }
    };

    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }
    resolved.set_fragment(None);
    Some(resolved.into())
}

fn has_scheme(reference: &str, scheme: &str) -> bool {
    reference.len() > scheme.len()
        && reference.as_bytes()[scheme.len()] == b':'
        && reference[..scheme.len()].eq_ignore_ascii_case(scheme)
}

/// The resolved `src` of an `img` element, or `None` for inline `data:`
/// images, missing attributes and non-image nodes.
pub fn image_source<T>(tree: &T, node: T::Node, base: &Url) -> Option<String>
where
    T: DocumentTree + ?Sized,
{
    match tree.kind(node) {
        NodeKind::Element(tag) if tag.eq_ignore_ascii_case("img") => {
            resolve_url(base, tree.attribute(node, "src")?)
        }
        _ => None,
    }
}

/// Absolute URLs of all anchors and images under `node`.
///
/// Document order, duplicates removed by first occurrence.
///
/// # Errors
///
/// [`TextError::InvalidUrl`] if `base` cannot be parsed.
pub fn link_urls<T>(tree: &T, node: T::Node, base: &str) -> Result<Vec<String>>
where
    T: DocumentTree + ?Sized,
{
    let base = parse_base(base)?;
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();

    walk(tree, node, |current, kind| {
        let NodeKind::Element(tag) = kind else {
            return true;
        };

        let reference = if tag.eq_ignore_ascii_case("a") {
            tree.attribute(current, "href")
        } else if tag.eq_ignore_ascii_case("img") {
            tree.attribute(current, "src")
        } else {
            None
        };

        if let Some(url) = reference.and_then(|r| resolve_url(&base, r)) {
            if seen.insert(url.clone()) {
                out.push(url);
            }
        }
        true
    });

    Ok(out)
}
