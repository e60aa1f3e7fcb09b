//! Transcript-related types.

/// Who a turn is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The person chatting with the mentor.
    User,
    /// The mentor.
    Assistant,
}

/// One message in the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChatTurn {
    role: Role,
    content: String,
}

impl ChatTurn {
    /// Creates a turn.
    #[inline]
    pub fn new<S: Into<String>>(role: Role, content: S) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Creates a user turn.
    #[inline]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant turn.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns the role of this turn.
    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the text of this turn.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The ordered history of a session.
///
/// Insertion order is display order. Turns are expected to alternate
/// between the user and the assistant, but nothing checks it.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    /// Appends a turn and returns a reference to it.
    #[inline]
    pub fn append(&mut self, turn: ChatTurn) -> &ChatTurn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// Removes every turn.
    #[inline]
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// Returns all turns, oldest first.
    #[inline]
    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Returns the latest turn.
    #[inline]
    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    /// Returns the number of turns.
    #[inline]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns `true` if there are no turns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
