//! Definition of lint rule tags.

use strum::EnumIter;
use strum::IntoEnumIterator;

/// A lint rule tag.
///
/// The first four tags are the principles of the Web Content Accessibility
/// Guidelines; a rule is tagged with the principle its success criteria
/// belong to.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, EnumIter, strum::Display)]
#[repr(u8)]
pub enum Tag {
    /// Rules about information being presentable to every user (text
    /// alternatives, captions, structure).
    Perceivable,

    /// Rules about components being operable by every user (keyboard access,
    /// focus order, timing).
    Operable,

    /// Rules about content and operation being understandable (language,
    /// labels, predictable behavior).
    Understandable,

    /// Rules about content being robust enough for assistive technology
    /// (valid roles, states and properties).
    Robust,

    /// Rules that flag advisory patterns rather than failures.
    #[strum(serialize = "BestPractice")]
    BestPractice,
}

/// A set of lint tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagSet(u32);

impl TagSet {
    /// Constructs a tag set from a slice of tags.
    ///
    /// # Panics
    ///
    /// This method will panic if the provided slice is empty.
    pub const fn new(tags: &[Tag]) -> Self {
        if tags.is_empty() {
            panic!("a tag set must be non-empty");
        }

        let mut bits = 0u32;
        let mut i = 0;
        while i < tags.len() {
            bits |= Self::mask(tags[i]);
            i += 1;
        }
        Self(bits)
    }

    /// Unions two tag sets together.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Checks if the tag is contained in the set.
    pub const fn contains(&self, tag: Tag) -> bool {
        self.0 & Self::mask(tag) != 0
    }

    /// Gets the count of tags in the set.
    pub const fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Masks the given tag to a `u32`.
    const fn mask(tag: Tag) -> u32 {
        1u32 << (tag as u8)
    }

    /// Iterates the tags in the set.
    pub fn iter(&self) -> impl Iterator<Item = Tag> + use<> {
        let set = *self;
        Tag::iter().filter(move |t| set.contains(*t))
    }
}

/// Display for a tag set.
impl std::fmt::Display for TagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags = self.iter().collect::<Vec<_>>();
        write!(f, "{:?}", tags)
    }
}
