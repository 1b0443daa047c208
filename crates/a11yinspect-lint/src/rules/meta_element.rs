//! A lint rule for `meta` refresh and viewport settings.

use std::borrow::Cow;
use std::sync::LazyLock;

use a11yinspect_ast::Element;
use regex::Regex;

use crate::Config;
use crate::Context;
use crate::Message;
use crate::Rule;
use crate::Tag;
use crate::TagSet;
use crate::Variant;
use crate::quote_threshold;

/// The identifier for the meta element rule.
const ID: &str = "meta-element";

/// Matches a viewport that disables user scaling.
static USER_SCALABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"(?i)user-scalable\s*=\s*(no|0)").unwrap()
});

/// Matches the `maximum-scale` of a viewport.
static MAX_SCALE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: this is checked statically with tests to always unwrap.
    Regex::new(r"(?i)maximum-scale\s*=\s*(\d*\.?\d+)").unwrap()
});

/// The messages of the rule.
const MESSAGES: &[Message] = &[
    Message::new("metaRefreshTimeout")
        .combined("💡 meta refresh with timeout found")
        .warning("⚠️ [Critical] meta refresh with timeout found (2.2.1 A)"),
    Message::new("metaViewportDisablesZoom")
        .combined("❌ meta viewport disables zoom")
        .error("❌ [Minor] meta viewport disables zoom (1.4.4 AA)"),
    Message::new("metaViewportMaxScaleRestrictive")
        .combined("❌ meta viewport maximum-scale too restrictive"),
    Message::new("viewportUserScalableNo")
        .combined("❌ Viewport meta tag has user-scalable=no or user-scalable=0")
        .error("❌ [Major] Viewport meta tag has user-scalable=no or user-scalable=0 (1.4.4 AA)"),
    Message::new("viewportMaxScaleLow")
        .combined("❌ Viewport meta tag has maximum-scale less than 2")
        .error("❌ [Major] Viewport meta tag has maximum-scale less than 2 (1.4.4 AA)"),
    Message::new("metaRefreshDetected")
        .combined("💡 Meta http-equiv=\"refresh\" detected")
        .warning("⚠️ [Critical] Meta http-equiv=\"refresh\" detected (2.2.4 AAA)"),
];

/// Detects timed refreshes and viewports that restrict zooming.
#[derive(Debug, Clone, Copy)]
pub struct MetaElementRule {
    /// The smallest acceptable `maximum-scale`.
    min_viewport_max_scale: f64,
}

impl MetaElementRule {
    /// Creates a new meta element rule.
    pub fn new(config: &Config) -> Self {
        Self {
            min_viewport_max_scale: config.min_viewport_max_scale,
        }
    }

    /// Checks a refresh `meta` element.
    fn check_refresh(cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(content) = element.value("content").as_str().filter(|c| !c.is_empty()) else {
            return;
        };

        cx.report("metaRefreshDetected", element.location());
        if !content.starts_with("0;") {
            cx.report("metaRefreshTimeout", element.location());
        }
    }

    /// Checks a viewport `meta` element.
    fn check_viewport(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        let Some(attribute) = element.attribute("content") else {
            return;
        };

        let Some(content) = attribute.value().as_str() else {
            return;
        };

        if USER_SCALABLE_REGEX.is_match(content) {
            cx.report("metaViewportDisablesZoom", attribute.location());
            cx.report("viewportUserScalableNo", attribute.location());
        }

        let max_scale = MAX_SCALE_REGEX
            .captures(content)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());
        if max_scale.is_some_and(|s| s < self.min_viewport_max_scale) {
            cx.report("metaViewportMaxScaleRestrictive", attribute.location());
            cx.report("viewportMaxScaleLow", attribute.location());
        }
    }
}

impl Default for MetaElementRule {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Rule for MetaElementRule {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Ensures that pages neither refresh on a timer nor prevent zooming."
    }

    fn explanation(&self) -> &'static str {
        "A timed refresh or redirect moves users away before they have finished reading. A \
         viewport that disables scaling, or caps it too low, prevents users with low vision \
         from zooming in."
    }

    fn tags(&self) -> TagSet {
        TagSet::new(&[Tag::Perceivable, Tag::Operable])
    }

    fn url(&self) -> Option<&'static str> {
        Some("https://www.w3.org/WAI/WCAG22/Understanding/resize-text.html")
    }

    fn variants(&self) -> &'static [Variant] {
        &Variant::ALL
    }

    fn messages(&self) -> &'static [Message] {
        MESSAGES
    }

    fn applies_to(&self, element: &Element<'_>) -> bool {
        element.is("meta")
    }

    fn render(&self, key: &'static str, text: &'static str) -> Cow<'static, str> {
        match key {
            "viewportMaxScaleLow" => quote_threshold(
                text,
                "less than 2",
                &format!("less than {}", self.min_viewport_max_scale),
            ),
            _ => Cow::Borrowed(text),
        }
    }

    fn check(&self, cx: &mut Context<'_>, element: &Element<'_>) {
        if element.value_any(&["http-equiv", "httpEquiv"]).as_str() == Some("refresh") {
            Self::check_refresh(cx, element);
        }

        if element.value("name").as_str() == Some("viewport") {
            self.check_viewport(cx, element);
        }
    }
}
