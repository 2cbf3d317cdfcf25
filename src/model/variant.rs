use std::fmt;

use serde::{Deserialize, Serialize};

/// The three incremental renditions of the todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One flat list: add, complete, delete
    Basic,
    /// Ongoing and done tasks in separate sections
    Sectioned,
    /// Sections plus in-place editing and delete-undo
    #[default]
    Styled,
}

/// Feature switches derived from a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub sections: bool,
    pub editing: bool,
    pub undo: bool,
    pub empty_state: bool,
}

impl Variant {
    pub fn features(self) -> Features {
        match self {
            Variant::Basic => Features {
                sections: false,
                editing: false,
                undo: false,
                empty_state: false,
            },
            Variant::Sectioned => Features {
                sections: true,
                editing: false,
                undo: false,
                empty_state: false,
            },
            Variant::Styled => Features {
                sections: true,
                editing: true,
                undo: true,
                empty_state: true,
            },
        }
    }

    /// Text shown when an empty draft is submitted
    pub fn empty_draft_message(self) -> &'static str {
        match self {
            Variant::Basic | Variant::Sectioned => "Please add todo item first.",
            Variant::Styled => "Please add a todo item",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Basic => "basic",
            Variant::Sectioned => "sectioned",
            Variant::Styled => "styled",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
