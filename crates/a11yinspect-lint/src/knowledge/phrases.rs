//! Uninformative text that does not describe its target.

/// Link text that does not describe the link's destination.
pub const GENERIC_LINK_TEXT: &[&str] = &[
    "click here",
    "here",
    "link",
    "read more",
    "more",
    "continue",
    "next",
    "previous",
    "back",
    "download",
];

/// Button text that does not describe the button's action.
pub const GENERIC_BUTTON_TEXT: &[&str] = &["click", "submit", "ok", "yes", "no"];

/// Text alternatives that name the kind of graphic instead of its content.
pub const GENERIC_IMAGE_TEXT: &[&str] = &[
    "image",
    "graphic",
    "picture",
    "photo",
    "spacer",
    "thumbnail",
    "drawing",
    "painting",
    "artwork",
    "animation",
    "jpeg",
    "png",
    "gif",
    "svg",
    "tiff",
    "webp",
    "img",
    "icon",
];

/// Determines if the text exactly matches one of the phrases, ignoring case
/// and surrounding whitespace.
pub fn matches(phrases: &[&str], text: &str) -> bool {
    let text = text.trim();
    phrases.iter().any(|p| p.eq_ignore_ascii_case(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert!(matches(GENERIC_LINK_TEXT, " Click Here "));
        assert!(matches(GENERIC_IMAGE_TEXT, "ICON"));
        assert!(!matches(GENERIC_BUTTON_TEXT, "submit order"));
    }
}
