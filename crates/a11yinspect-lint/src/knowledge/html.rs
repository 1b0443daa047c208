//! Native element semantics.

/// Elements that receive keyboard focus without a `tabIndex`.
pub const NATIVE_FOCUSABLE: &[&str] = &["a", "button", "input", "select", "textarea"];

/// Elements the user operates directly.
pub const INTERACTIVE_ELEMENTS: &[&str] = NATIVE_FOCUSABLE;

/// Elements that only convey structure or content.
pub const NONINTERACTIVE_ELEMENTS: &[&str] = &[
    "article",
    "aside",
    "blockquote",
    "caption",
    "dd",
    "details",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "span",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Gets the implicit role of a native element.
///
/// `input` elements take their role from their `type`, which defaults to
/// `text` when absent or not statically known.
pub fn implicit_role(tag: &str, input_type: Option<&str>) -> Option<&'static str> {
    if tag == "input" {
        return Some(match input_type.unwrap_or("text") {
            "text" | "email" | "tel" | "url" => "textbox",
            "checkbox" => "checkbox",
            "radio" => "radio",
            "range" => "slider",
            "search" => "searchbox",
            "number" => "spinbutton",
            _ => return None,
        });
    }

    Some(match tag {
        "a" => "link",
        "article" => "article",
        "aside" => "complementary",
        "button" | "summary" => "button",
        "details" | "fieldset" => "group",
        "dialog" => "dialog",
        "footer" => "contentinfo",
        "form" => "form",
        "header" => "banner",
        "hr" => "separator",
        "img" => "img",
        "li" => "listitem",
        "main" => "main",
        "meter" => "meter",
        "nav" => "navigation",
        "ol" | "ul" => "list",
        "output" => "status",
        "progress" => "progressbar",
        "section" => "region",
        "select" => "listbox",
        "table" => "table",
        "td" => "cell",
        "textarea" => "textbox",
        "th" => "columnheader",
        "tr" => "row",
        _ => return None,
    })
}

/// Gets the native element that carries a role's semantics, if there is one.
pub fn semantic_element(role: &str) -> Option<&'static str> {
    Some(match role {
        "article" => "<article>",
        "banner" => "<header>",
        "button" => "<button>",
        "complementary" => "<aside>",
        "contentinfo" => "<footer>",
        "form" => "<form>",
        "heading" => "<h1>-<h6>",
        "img" => "<img>",
        "link" => "<a>",
        "list" => "<ul> or <ol>",
        "listitem" => "<li>",
        "main" => "<main>",
        "navigation" => "<nav>",
        "region" => "<section>",
        "table" => "<table>",
        "textbox" => "<input> or <textarea>",
        _ => return None,
    })
}

/// Gets the level of a heading tag (`h1` through `h6`).
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag.as_bytes() {
        [b'h', level @ b'1'..=b'6'] => Some(level - b'0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_implicit_roles() {
        assert_eq!(implicit_role("nav", None), Some("navigation"));
        assert_eq!(implicit_role("input", None), Some("textbox"));
        assert_eq!(implicit_role("input", Some("range")), Some("slider"));
        assert_eq!(implicit_role("input", Some("submit")), None);
        assert_eq!(implicit_role("div", None), None);
    }

    #[test]
    fn parses_heading_levels() {
        assert_eq!(heading_level("h1"), Some(1));
        assert_eq!(heading_level("h6"), Some(6));
        assert_eq!(heading_level("h7"), None);
        assert_eq!(heading_level("header"), None);
    }
}
