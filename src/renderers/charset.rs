//! Box-drawing character sets, one box style per train category.

use crate::schedule::types::TrainCategory;

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for box-drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

impl CharSet {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }
}

// ─── BoxChars ─────────────────────────────────────────────────────────────────

/// The six characters needed to outline a train box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        }
    }

    pub fn unicode_heavy() -> Self {
        Self {
            top_left: '┏',
            top_right: '┓',
            bottom_left: '┗',
            bottom_right: '┛',
            horizontal: '━',
            vertical: '┃',
        }
    }

    pub fn unicode_rounded() -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '┄',
            vertical: '┆',
        }
    }

    pub fn ascii() -> Self {
        Self {
            top_left: '+',
            top_right: '+',
            bottom_left: '+',
            bottom_right: '+',
            horizontal: '-',
            vertical: '|',
        }
    }

    pub fn ascii_heavy() -> Self {
        Self {
            top_left: '#',
            top_right: '#',
            bottom_left: '#',
            bottom_right: '#',
            horizontal: '=',
            vertical: '#',
        }
    }

    pub fn ascii_rounded() -> Self {
        Self {
            top_left: '.',
            top_right: '.',
            bottom_left: '\'',
            bottom_right: '\'',
            horizontal: '.',
            vertical: ':',
        }
    }

    /// Commercial: light box. Evolution: heavy box. Unknown: dotted rounded box.
    pub fn for_category(cs: CharSet, category: TrainCategory) -> Self {
        match (cs, category) {
            (CharSet::Unicode, TrainCategory::Commercial) => Self::unicode(),
            (CharSet::Unicode, TrainCategory::Evolution) => Self::unicode_heavy(),
            (CharSet::Unicode, TrainCategory::Unknown) => Self::unicode_rounded(),
            (CharSet::Ascii, TrainCategory::Commercial) => Self::ascii(),
            (CharSet::Ascii, TrainCategory::Evolution) => Self::ascii_heavy(),
            (CharSet::Ascii, TrainCategory::Unknown) => Self::ascii_rounded(),
        }
    }
}

// ─── Glyphs ──────────────────────────────────────────────────────────────────

/// Arrow and marker glyphs drawn between and beside boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub shaft: char,
    pub arrow_right: char,
    pub depot: char,
}

impl Glyphs {
    pub fn for_charset(cs: CharSet) -> Self {
        match cs {
            CharSet::Unicode => Self {
                shaft: '─',
                arrow_right: '►',
                depot: '▣',
            },
            CharSet::Ascii => Self {
                shaft: '-',
                arrow_right: '>',
                depot: '@',
            },
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
