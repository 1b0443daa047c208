//! Whole-document state accumulated during a traversal.

use std::collections::HashMap;
use std::collections::HashSet;

use a11yinspect_ast::Element;
use a11yinspect_ast::Location;
use a11yinspect_ast::NodeId;
use indexmap::IndexMap;

use crate::knowledge::html;
use crate::resolve;

/// The names of the access key attribute.
pub(crate) const ACCESSKEY_ATTRIBUTES: &[&str] = &["accessKey", "accesskey"];

/// State gathered over a single traversal of a document.
///
/// The dispatcher observes every element in document order before any rule
/// checks it, so a rule sees the state as of (and including) the element it
/// is checking. Nothing observed later is visible until finalization.
#[derive(Debug, Default)]
pub struct DocumentState {
    /// The first element seen with each literal `id`.
    ids: HashMap<String, NodeId>,
    /// The elements repeating an earlier `id`.
    duplicate_ids: HashSet<NodeId>,
    /// The levels of participating headings, in document order.
    headings: Vec<u8>,
    /// The headings that skip a level.
    skipped_headings: HashSet<NodeId>,
    /// The number of `h1` elements seen.
    h1_count: usize,
    /// The number of main landmarks seen.
    main_count: usize,
    /// The number of `header` elements seen.
    header_count: usize,
    /// The number of `footer` elements seen.
    footer_count: usize,
    /// The sites of each lowercase access key.
    accesskeys: IndexMap<String, Vec<Location>>,
    /// Whether a `title` element was seen.
    title_seen: bool,
    /// Whether a skip link was seen.
    skip_link_seen: bool,
}

impl DocumentState {
    /// Observes an element.
    pub fn observe(&mut self, element: &Element<'_>) {
        self.observe_id(element);
        self.observe_heading(element);

        match element.name() {
            "h1" => self.h1_count += 1,
            "header" => self.header_count += 1,
            "footer" => self.footer_count += 1,
            "title" => self.title_seen = true,
            "a" if is_skip_link(element) => self.skip_link_seen = true,
            _ => {}
        }

        if element.is("main") || resolve::literal_role(element) == Some("main") {
            self.main_count += 1;
        }

        for attribute in element
            .attributes()
            .filter(|a| ACCESSKEY_ATTRIBUTES.contains(&a.name()))
        {
            let value = attribute.value();
            if let Some(literal) = value.literal().filter(|l| l.is_truthy()) {
                self.accesskeys
                    .entry(literal.to_text().to_lowercase())
                    .or_default()
                    .push(attribute.location());
            }
        }
    }

    /// Records the literal `id` of an element.
    ///
    /// A repeat is recorded against the repeating element, never against the
    /// first one.
    fn observe_id(&mut self, element: &Element<'_>) {
        let Some(literal) = element.value("id").literal() else {
            return;
        };

        let id = literal.to_text();
        if id.trim().is_empty() {
            return;
        }

        if self.ids.contains_key(id.as_ref()) {
            self.duplicate_ids.insert(element.id());
        } else {
            self.ids.insert(id.into_owned(), element.id());
        }
    }

    /// Records a heading in the heading sequence.
    ///
    /// Decorative headings and headings whose text is definitely empty do not
    /// participate.
    fn observe_heading(&mut self, element: &Element<'_>) {
        let Some(level) = html::heading_level(element.name()) else {
            return;
        };

        if resolve::is_decorative(element) || element.text().is_empty() {
            return;
        }

        if let Some(last) = self.headings.last() {
            if level > last + 1 {
                self.skipped_headings.insert(element.id());
            }
        }

        self.headings.push(level);
    }

    /// Determines if the element repeats an `id` seen earlier.
    pub fn is_duplicate_id(&self, id: NodeId) -> bool {
        self.duplicate_ids.contains(&id)
    }

    /// Determines if the heading skips a level relative to the previous
    /// participating heading.
    pub fn is_skipped_heading(&self, id: NodeId) -> bool {
        self.skipped_headings.contains(&id)
    }

    /// Gets the levels of the participating headings seen so far.
    pub fn heading_levels(&self) -> &[u8] {
        &self.headings
    }

    /// Gets the number of `h1` elements seen so far.
    pub fn h1_count(&self) -> usize {
        self.h1_count
    }

    /// Gets the number of main landmarks seen so far.
    pub fn main_count(&self) -> usize {
        self.main_count
    }

    /// Gets the number of `header` elements seen so far.
    pub fn header_count(&self) -> usize {
        self.header_count
    }

    /// Gets the number of `footer` elements seen so far.
    pub fn footer_count(&self) -> usize {
        self.footer_count
    }

    /// Iterates the access keys and the attributes using each.
    pub fn accesskeys(&self) -> impl Iterator<Item = (&str, &[Location])> + '_ {
        self.accesskeys
            .iter()
            .map(|(key, sites)| (key.as_str(), sites.as_slice()))
    }

    /// Determines if a `title` element was seen.
    pub fn title_seen(&self) -> bool {
        self.title_seen
    }

    /// Determines if a skip link was seen.
    pub fn skip_link_seen(&self) -> bool {
        self.skip_link_seen
    }
}

/// Determines if an `a` element is a skip link.
///
/// A skip link targets an in-page fragment and its text mentions skipping or
/// the main content.
fn is_skip_link(element: &Element<'_>) -> bool {
    let is_fragment = element
        .value("href")
        .as_str()
        .is_some_and(|href| href.starts_with('#') && href.len() > 1);
    if !is_fragment {
        return false;
    }

    let text = element.text().text.to_lowercase();
    text.contains("skip") || text.contains("main")
}

#[cfg(test)]
mod tests {
    use a11yinspect_ast::Document;
    use a11yinspect_ast::builder::ElementBuilder;
    use a11yinspect_ast::builder::document;
    use a11yinspect_ast::builder::element;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Observes every element of a document.
    fn observe(doc: &Document) -> DocumentState {
        let mut state = DocumentState::default();
        for element in doc.elements() {
            state.observe(&element);
        }
        state
    }

    /// Builds a heading with text.
    fn heading(tag: &str) -> ElementBuilder {
        element(tag).text("Title")
    }

    #[test]
    fn duplicate_ids_report_every_repeat() {
        let doc = document([
            element("div").attr("id", "x"),
            element("div").attr("id", "x"),
            element("div").attr("id", "x"),
            element("div").attr("id", " "),
            element("div").attr("id", " "),
            element("div").dynamic("id"),
        ]);
        let state = observe(&doc);
        let duplicates: Vec<_> = doc
            .elements()
            .map(|e| state.is_duplicate_id(e.id()))
            .collect();
        assert_eq!(duplicates, [false, true, true, false, false, false]);
    }

    #[test]
    fn heading_sequence() {
        let doc = document([heading("h1"), heading("h2"), heading("h4")]);
        let state = observe(&doc);
        let skipped: Vec<_> = doc
            .elements()
            .map(|e| state.is_skipped_heading(e.id()))
            .collect();
        assert_eq!(skipped, [false, false, true]);

        let doc = document([heading("h1"), heading("h2"), heading("h3")]);
        let state = observe(&doc);
        assert!(doc.elements().all(|e| !state.is_skipped_heading(e.id())));
        assert_eq!(state.heading_levels(), [1, 2, 3]);
    }

    #[test]
    fn heading_sequence_excludes_empty_and_decorative() {
        let doc = document([
            heading("h1"),
            element("h2"),
            heading("h2").attr("aria-hidden", "true"),
            heading("h3"),
            element("h4").dynamic_text(),
        ]);
        let state = observe(&doc);
        assert_eq!(state.heading_levels(), [1, 3, 4]);
        let skipped: Vec<_> = doc
            .elements()
            .map(|e| state.is_skipped_heading(e.id()))
            .collect();
        assert_eq!(skipped, [false, false, false, true, false]);
    }

    #[test]
    fn counts_landmarks() {
        let doc = document([
            element("main"),
            element("div").attr("role", "main"),
            element("header"),
            element("footer"),
            element("footer"),
            element("h1"),
        ]);
        let state = observe(&doc);
        assert_eq!(state.main_count(), 2);
        assert_eq!(state.header_count(), 1);
        assert_eq!(state.footer_count(), 2);
        assert_eq!(state.h1_count(), 1);
        assert!(!state.title_seen());
    }

    #[test]
    fn groups_accesskeys() {
        let doc = document([
            element("button").attr("accessKey", "S"),
            element("a").attr("accesskey", "s"),
            element("a").attr("accesskey", ""),
            element("a").attr("accesskey", "h"),
        ]);
        let state = observe(&doc);
        let keys: Vec<_> = state
            .accesskeys()
            .map(|(key, sites)| (key, sites.len()))
            .collect();
        assert_eq!(keys, [("s", 2), ("h", 1)]);
    }

    #[test]
    fn detects_skip_links() {
        let doc = document([element("a").attr("href", "#").text("Skip")]);
        assert!(!observe(&doc).skip_link_seen());

        let doc = document([element("a").attr("href", "#content").text("Home")]);
        assert!(!observe(&doc).skip_link_seen());

        let doc = document([element("a")
            .attr("href", "#content")
            .text("Skip to content")]);
        assert!(observe(&doc).skip_link_seen());

        let doc = document([element("a").attr("href", "#main").expr_text("Main")]);
        assert!(observe(&doc).skip_link_seen());

        let doc = document([element("a")
            .attr("href", "#main")
            .child(element("span").text("Skip to content"))]);
        assert!(observe(&doc).skip_link_seen());
    }
}
