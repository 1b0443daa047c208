//! The lint rule contract.

use std::borrow::Cow;

use a11yinspect_ast::Document;
use a11yinspect_ast::Element;
use a11yinspect_ast::Location;
use a11yinspect_ast::Severity;

use crate::DocumentState;
use crate::TagSet;

/// A registered variant of a rule family.
///
/// Every family is registered under up to three names: the combined rule,
/// which reports everything the family checks, plus an `-error` rule and a
/// `-warning` rule reporting the blocking and advisory subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// The combined rule.
    Combined,
    /// The `-error` rule.
    Error,
    /// The `-warning` rule.
    Warning,
}

impl Variant {
    /// All variants, in registration order.
    pub const ALL: [Variant; 3] = [Self::Combined, Self::Error, Self::Warning];

    /// Gets the suffix the variant appends to its family's identifier.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Combined => "",
            Self::Error => "-error",
            Self::Warning => "-warning",
        }
    }

    /// Formats the registered name of the variant of a family.
    pub fn name(self, family: &str) -> String {
        format!("{family}{suffix}", suffix = self.suffix())
    }
}

/// A message a rule family may report.
///
/// A message has a stable key and, for each variant of the family that
/// reports it, the rendered text for that variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    /// The stable message key.
    key: &'static str,
    /// The text for the combined variant.
    combined: Option<&'static str>,
    /// The text for the `-error` variant.
    error: Option<&'static str>,
    /// The text for the `-warning` variant.
    warning: Option<&'static str>,
}

impl Message {
    /// Creates a message that no variant reports yet.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            combined: None,
            error: None,
            warning: None,
        }
    }

    /// Sets the text for the combined variant.
    pub const fn combined(mut self, text: &'static str) -> Self {
        self.combined = Some(text);
        self
    }

    /// Sets the text for the `-error` variant.
    pub const fn error(mut self, text: &'static str) -> Self {
        self.error = Some(text);
        self
    }

    /// Sets the text for the `-warning` variant.
    pub const fn warning(mut self, text: &'static str) -> Self {
        self.warning = Some(text);
        self
    }

    /// Gets the message key.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Gets the text for the given variant.
    ///
    /// Returns `None` if the variant does not report this message.
    pub const fn text(&self, variant: Variant) -> Option<&'static str> {
        match variant {
            Variant::Combined => self.combined,
            Variant::Error => self.error,
            Variant::Warning => self.warning,
        }
    }
}

/// Gets the default severity of a rendered message from its leading marker.
///
/// Messages are rendered with `❌` for failures, `⚠️` for likely problems and
/// `💡` for items needing manual review.
pub fn default_severity(text: &str) -> Severity {
    if text.starts_with('❌') {
        Severity::Error
    } else if text.starts_with('💡') {
        Severity::Note
    } else {
        Severity::Warning
    }
}

/// Quotes a configured threshold in place of the default one a message text
/// was written with.
pub fn quote_threshold(text: &'static str, default: &str, configured: &str) -> Cow<'static, str> {
    if default == configured {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replacen(default, configured, 1))
    }
}

/// The context a rule reports through.
#[derive(Debug)]
pub struct Context<'a> {
    /// The document being linted.
    document: &'a Document,
    /// The state accumulated so far.
    state: &'a DocumentState,
    /// The reports made since the context was created.
    reports: Vec<(&'static str, Location)>,
}

impl<'a> Context<'a> {
    /// Creates a new context.
    pub fn new(document: &'a Document, state: &'a DocumentState) -> Self {
        Self {
            document,
            state,
            reports: Vec::new(),
        }
    }

    /// Gets the document being linted.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Gets the document state.
    ///
    /// During a check this reflects every element up to and including the
    /// one being checked; during finalization it reflects the whole
    /// document.
    pub fn state(&self) -> &'a DocumentState {
        self.state
    }

    /// Reports a message at a location.
    pub fn report(&mut self, key: &'static str, location: Location) {
        self.reports.push((key, location));
    }

    /// Takes the reports made so far.
    pub fn into_reports(self) -> Vec<(&'static str, Location)> {
        self.reports
    }
}

/// A trait implemented by lint rule families.
///
/// A family implements its check once; the linter registers it under each
/// of its [`variants`](Rule::variants) and each variant reports only the
/// messages it has text for.
pub trait Rule: Send + Sync {
    /// The unique identifier of the rule family.
    ///
    /// The identifier is required to be kebab case. It is also the name of
    /// the combined variant.
    fn id(&self) -> &'static str;

    /// A short, single sentence description of the rule.
    fn description(&self) -> &'static str;

    /// Get the long-form explanation of the rule.
    fn explanation(&self) -> &'static str;

    /// Get the tags of the rule.
    fn tags(&self) -> TagSet;

    /// Gets the optional URL of the rule.
    fn url(&self) -> Option<&'static str> {
        None
    }

    /// Gets the identifiers of related rule families.
    fn related_rules(&self) -> &[&'static str] {
        &[]
    }

    /// Gets the variants the family is registered under.
    fn variants(&self) -> &'static [Variant];

    /// Gets the messages the family may report.
    fn messages(&self) -> &'static [Message];

    /// Determines if the rule checks the given element.
    fn applies_to(&self, element: &Element<'_>) -> bool;

    /// Checks an element the rule applies to.
    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>);

    /// Renders the text of a reported message.
    ///
    /// Families whose messages quote a configurable threshold override this
    /// to quote the configured value.
    fn render(&self, key: &'static str, text: &'static str) -> Cow<'static, str> {
        let _ = key;
        Cow::Borrowed(text)
    }

    /// Reports whole-document findings once the traversal is complete.
    fn finalize(&self, cx: &mut Context<'_>) {
        let _ = cx;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn message_text_per_variant() {
        const MESSAGE: Message = Message::new("imgEmptyAlt")
            .combined("❌ img has empty alt")
            .error("❌ [Critical] img has empty alt");

        assert_eq!(MESSAGE.key(), "imgEmptyAlt");
        assert_eq!(MESSAGE.text(Variant::Combined), Some("❌ img has empty alt"));
        assert_eq!(
            MESSAGE.text(Variant::Error),
            Some("❌ [Critical] img has empty alt")
        );
        assert_eq!(MESSAGE.text(Variant::Warning), None);
    }

    #[test]
    fn variant_names() {
        assert_eq!(Variant::Combined.name("img-element"), "img-element");
        assert_eq!(Variant::Error.name("img-element"), "img-element-error");
        assert_eq!(Variant::Warning.name("img-element"), "img-element-warning");
    }

    #[test]
    fn severity_from_marker() {
        assert_eq!(default_severity("❌ missing"), Severity::Error);
        assert_eq!(default_severity("⚠️ odd"), Severity::Warning);
        assert_eq!(default_severity("💡 review"), Severity::Note);
    }
}
