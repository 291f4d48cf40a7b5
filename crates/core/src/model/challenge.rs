use crate::model::operation::OperationKind;

/// Number of answer buttons offered for every challenge.
pub const OPTION_COUNT: usize = 4;

/// Picture shown instead of a written question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illustration {
    /// The same glyph repeated `count` times.
    Repeat { glyph: &'static str, count: u32 },
}

impl Illustration {
    #[must_use]
    pub fn count(&self) -> u32 {
        match self {
            Illustration::Repeat { count, .. } => *count,
        }
    }
}

/// The two numbers of an arithmetic challenge, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub left: u32,
    pub right: u32,
}

/// One generated practice problem.
///
/// Exactly one entry of `options` equals `answer` and all entries are distinct.
/// A new challenge replaces the old one each round; nothing mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    kind: OperationKind,
    level: u8,
    prompt: String,
    spoken_prompt: String,
    options: [u32; OPTION_COUNT],
    answer: u32,
    operands: Option<Operands>,
    illustration: Option<Illustration>,
}

impl Challenge {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        kind: OperationKind,
        level: u8,
        prompt: String,
        spoken_prompt: String,
        options: [u32; OPTION_COUNT],
        answer: u32,
        operands: Option<Operands>,
        illustration: Option<Illustration>,
    ) -> Self {
        Self {
            kind,
            level,
            prompt,
            spoken_prompt,
            options,
            answer,
            operands,
            illustration,
        }
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Level (1..=5) the challenge was generated for.
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Text handed to speech synthesis.
    #[must_use]
    pub fn spoken_prompt(&self) -> &str {
        &self.spoken_prompt
    }

    #[must_use]
    pub fn options(&self) -> &[u32; OPTION_COUNT] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> u32 {
        self.answer
    }

    #[must_use]
    pub fn operands(&self) -> Option<Operands> {
        self.operands
    }

    #[must_use]
    pub fn illustration(&self) -> Option<Illustration> {
        self.illustration
    }

    #[must_use]
    pub fn is_correct(&self, value: u32) -> bool {
        value == self.answer
    }
}
