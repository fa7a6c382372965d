//! Confirmation prompts gating add and delete.

use serde::{Deserialize, Serialize};

/// A yes/no question put to the user before a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub title: &'static str,
    pub text: &'static str,
    pub confirm_label: &'static str,
}

pub const ADD_PROMPT: Prompt = Prompt {
    title: "Are you sure?",
    text: "This bookmark will be saved.",
    confirm_label: "Yes, add it!",
};

pub const DELETE_PROMPT: Prompt = Prompt {
    title: "Delete",
    text: "Are you sure you want to delete this bookmark?",
    confirm_label: "Yes, delete it!",
};

/// The user's answer to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Confirmed,
    Declined,
    /// The prompt was closed without an answer.
    Dismissed,
}

impl Decision {
    pub fn is_confirmed(self) -> bool {
        self == Decision::Confirmed
    }
}

impl From<bool> for Decision {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Decision::Confirmed
        } else {
            Decision::Declined
        }
    }
}

/// Asks the user to confirm a pending mutation.
pub trait Confirmation {
    fn request_confirmation(&mut self, prompt: &Prompt) -> Decision;
}

/// A decision already taken elsewhere, e.g. by a renderer that showed its own dialog.
impl Confirmation for Decision {
    fn request_confirmation(&mut self, _prompt: &Prompt) -> Decision {
        *self
    }
}

impl<C: Confirmation + ?Sized> Confirmation for &mut C {
    fn request_confirmation(&mut self, prompt: &Prompt) -> Decision {
        (**self).request_confirmation(prompt)
    }
}
