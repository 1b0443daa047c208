//! ARIA roles, properties and their value constraints.

/// The valid ARIA roles.
pub const ROLES: &[&str] = &[
    "alert",
    "alertdialog",
    "application",
    "article",
    "banner",
    "button",
    "checkbox",
    "columnheader",
    "combobox",
    "complementary",
    "contentinfo",
    "definition",
    "dialog",
    "directory",
    "document",
    "feed",
    "figure",
    "form",
    "grid",
    "gridcell",
    "group",
    "heading",
    "img",
    "link",
    "list",
    "listbox",
    "listitem",
    "log",
    "main",
    "marquee",
    "math",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "navigation",
    "none",
    "note",
    "option",
    "presentation",
    "progressbar",
    "radio",
    "radiogroup",
    "region",
    "row",
    "rowgroup",
    "rowheader",
    "scrollbar",
    "search",
    "searchbox",
    "separator",
    "slider",
    "spinbutton",
    "status",
    "switch",
    "tab",
    "table",
    "tablist",
    "tabpanel",
    "term",
    "textbox",
    "timer",
    "toolbar",
    "tooltip",
    "tree",
    "treegrid",
    "treeitem",
];

/// The valid ARIA properties and states.
pub const PROPERTIES: &[&str] = &[
    "aria-activedescendant",
    "aria-atomic",
    "aria-autocomplete",
    "aria-braillelabel",
    "aria-brailleroledescription",
    "aria-busy",
    "aria-checked",
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-description",
    "aria-details",
    "aria-disabled",
    "aria-dropeffect",
    "aria-errormessage",
    "aria-expanded",
    "aria-flowto",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed",
    "aria-readonly",
    "aria-relevant",
    "aria-required",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-selected",
    "aria-setsize",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
];

/// The properties supported on every role.
pub const GLOBAL_PROPERTIES: &[&str] = &[
    "aria-atomic",
    "aria-busy",
    "aria-controls",
    "aria-describedby",
    "aria-details",
    "aria-disabled",
    "aria-dropeffect",
    "aria-errormessage",
    "aria-flowto",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-live",
    "aria-owns",
    "aria-relevant",
    "aria-roledescription",
];

/// Roles that are operated by the user.
pub const INTERACTIVE_ROLES: &[&str] = &[
    "button",
    "checkbox",
    "combobox",
    "gridcell",
    "link",
    "listbox",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "option",
    "radio",
    "radiogroup",
    "scrollbar",
    "searchbox",
    "slider",
    "spinbutton",
    "switch",
    "tab",
    "textbox",
    "treeitem",
];

/// Roles that only convey structure or content.
pub const NONINTERACTIVE_ROLES: &[&str] = &[
    "alert",
    "article",
    "banner",
    "complementary",
    "contentinfo",
    "definition",
    "dialog",
    "directory",
    "document",
    "feed",
    "figure",
    "form",
    "group",
    "heading",
    "img",
    "list",
    "listitem",
    "log",
    "main",
    "marquee",
    "math",
    "navigation",
    "none",
    "note",
    "presentation",
    "region",
    "row",
    "rowgroup",
    "separator",
    "status",
    "table",
    "term",
    "timer",
    "toolbar",
    "tooltip",
];

/// The value type of an ARIA property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `true` or `false`.
    Boolean,
    /// `true`, `false` or `mixed`.
    Tristate,
    /// One of a fixed set of tokens.
    Token(&'static [&'static str]),
    /// An integer.
    Integer,
    /// A decimal number.
    Number,
}

impl ValueType {
    /// Determines if the given value satisfies the type.
    ///
    /// The value is trimmed before it is checked.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Self::Boolean => matches!(value, "true" | "false"),
            Self::Tristate => matches!(value, "true" | "false" | "mixed"),
            Self::Token(tokens) => tokens.contains(&value),
            Self::Integer => is_integer(value),
            Self::Number => match value.split_once('.') {
                Some((whole, fraction)) => {
                    is_integer(whole)
                        && !fraction.is_empty()
                        && fraction.bytes().all(|b| b.is_ascii_digit())
                }
                None => is_integer(value),
            },
        }
    }
}

/// Determines if a string is an optionally negative run of digits.
fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Gets the value type of an ARIA property.
///
/// Properties without a checked type (ID references and free text) return
/// `None`.
pub fn value_type(property: &str) -> Option<ValueType> {
    Some(match property {
        "aria-atomic" | "aria-busy" | "aria-disabled" | "aria-grabbed" | "aria-hidden"
        | "aria-modal" | "aria-multiline" | "aria-multiselectable" | "aria-readonly"
        | "aria-required" => ValueType::Boolean,
        "aria-checked" | "aria-pressed" => ValueType::Tristate,
        "aria-autocomplete" => ValueType::Token(&["inline", "list", "both", "none"]),
        "aria-current" => {
            ValueType::Token(&["page", "step", "location", "date", "time", "true", "false"])
        }
        "aria-dropeffect" => {
            ValueType::Token(&["copy", "execute", "link", "move", "none", "popup"])
        }
        "aria-haspopup" => ValueType::Token(&[
            "true", "false", "menu", "listbox", "tree", "grid", "dialog",
        ]),
        "aria-invalid" => ValueType::Token(&["grammar", "spelling", "true", "false"]),
        "aria-live" => ValueType::Token(&["assertive", "off", "polite"]),
        "aria-orientation" => ValueType::Token(&["horizontal", "vertical", "undefined"]),
        "aria-relevant" => {
            ValueType::Token(&["additions", "additions text", "all", "removals", "text"])
        }
        "aria-sort" => ValueType::Token(&["ascending", "descending", "none", "other"]),
        "aria-expanded" | "aria-selected" => ValueType::Token(&["true", "false", "undefined"]),
        "aria-colcount" | "aria-colindex" | "aria-colspan" | "aria-level" | "aria-posinset"
        | "aria-rowcount" | "aria-rowindex" | "aria-rowspan" | "aria-setsize" => {
            ValueType::Integer
        }
        "aria-valuemax" | "aria-valuemin" | "aria-valuenow" => ValueType::Number,
        _ => return None,
    })
}

/// Determines if the given name is a valid ARIA role.
pub fn is_role(role: &str) -> bool {
    ROLES.contains(&role)
}

/// Determines if the given name is a valid ARIA property.
pub fn is_property(name: &str) -> bool {
    PROPERTIES.contains(&name)
}

/// Determines if the given role is interactive.
pub fn is_interactive_role(role: &str) -> bool {
    INTERACTIVE_ROLES.contains(&role)
}

/// Determines if the given role is non-interactive.
pub fn is_noninteractive_role(role: &str) -> bool {
    NONINTERACTIVE_ROLES.contains(&role)
}

/// Gets the properties a role requires.
pub fn required_properties(role: &str) -> Option<&'static [&'static str]> {
    Some(match role {
        "checkbox" | "radio" | "switch" => &["aria-checked"],
        "combobox" => &["aria-expanded"],
        "heading" => &["aria-level"],
        "meter" | "slider" | "spinbutton" => &["aria-valuenow"],
        "option" => &["aria-selected"],
        "scrollbar" => &["aria-controls", "aria-valuenow"],
        "separator" => &[],
        _ => return None,
    })
}

/// Gets the role-specific properties a role supports.
///
/// Roles without data return `None`; their properties are not checked.
/// [`GLOBAL_PROPERTIES`] are supported in addition to the returned set.
pub fn supported_properties(role: &str) -> Option<&'static [&'static str]> {
    Some(match role {
        "alert" => &["aria-atomic", "aria-live", "aria-relevant"],
        "button" => &["aria-disabled", "aria-expanded", "aria-haspopup", "aria-pressed"],
        "checkbox" | "switch" => &[
            "aria-checked",
            "aria-errormessage",
            "aria-expanded",
            "aria-invalid",
            "aria-readonly",
            "aria-required",
        ],
        "combobox" => &[
            "aria-activedescendant",
            "aria-autocomplete",
            "aria-expanded",
            "aria-readonly",
            "aria-required",
        ],
        "dialog" => &["aria-modal"],
        "grid" => &[
            "aria-activedescendant",
            "aria-colcount",
            "aria-multiselectable",
            "aria-readonly",
            "aria-rowcount",
        ],
        "img" | "tabpanel" => &[],
        "link" => &["aria-expanded"],
        "listbox" => &[
            "aria-activedescendant",
            "aria-expanded",
            "aria-multiselectable",
            "aria-orientation",
            "aria-readonly",
            "aria-required",
        ],
        "menu" => &["aria-activedescendant", "aria-orientation"],
        "menuitem" => &["aria-expanded", "aria-posinset", "aria-setsize"],
        "option" => &["aria-checked", "aria-posinset", "aria-selected", "aria-setsize"],
        "progressbar" => &[
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuenow",
            "aria-valuetext",
        ],
        "radio" => &["aria-checked", "aria-posinset", "aria-setsize"],
        "slider" => &[
            "aria-orientation",
            "aria-readonly",
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuenow",
            "aria-valuetext",
        ],
        "spinbutton" => &[
            "aria-readonly",
            "aria-required",
            "aria-valuemax",
            "aria-valuemin",
            "aria-valuenow",
            "aria-valuetext",
        ],
        "tab" => &["aria-expanded", "aria-posinset", "aria-selected", "aria-setsize"],
        "tablist" => &[
            "aria-activedescendant",
            "aria-multiselectable",
            "aria-orientation",
        ],
        "textbox" => &[
            "aria-activedescendant",
            "aria-autocomplete",
            "aria-multiline",
            "aria-placeholder",
            "aria-readonly",
            "aria-required",
        ],
        "tree" => &[
            "aria-activedescendant",
            "aria-multiselectable",
            "aria-orientation",
            "aria-required",
        ],
        "treeitem" => &[
            "aria-checked",
            "aria-expanded",
            "aria-level",
            "aria-posinset",
            "aria-selected",
            "aria-setsize",
        ],
        _ => return None,
    })
}

/// Determines if a role supports the given property.
///
/// Returns `None` when the role has no property data.
pub fn supports_property(role: &str, property: &str) -> Option<bool> {
    let supported = supported_properties(role)?;
    Some(supported.contains(&property) || GLOBAL_PROPERTIES.contains(&property))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_values() {
        assert!(ValueType::Boolean.accepts(" true "));
        assert!(!ValueType::Boolean.accepts("mixed"));
        assert!(ValueType::Tristate.accepts("mixed"));
        assert!(ValueType::Integer.accepts("-3"));
        assert!(!ValueType::Integer.accepts("3.5"));
        assert!(ValueType::Number.accepts("3.5"));
        assert!(!ValueType::Number.accepts("3."));
        assert!(!ValueType::Number.accepts("abc"));
        assert!(value_type("aria-live").is_some_and(|t| t.accepts("polite")));
        assert_eq!(value_type("aria-label"), None);
    }

    #[test]
    fn checks_supported_properties() {
        assert_eq!(supports_property("button", "aria-pressed"), Some(true));
        assert_eq!(supports_property("button", "aria-label"), Some(true));
        assert_eq!(supports_property("button", "aria-checked"), Some(false));
        assert_eq!(supports_property("row", "aria-checked"), None);
    }
}
