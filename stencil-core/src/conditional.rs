use crate::TranslateError;

/// Conditional keyword found inside SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conditional {
    Else,
    End,
}

impl Conditional {
    pub fn keyword(&self) -> &'static str {
        match self {
            Conditional::Else => "else",
            Conditional::End => "end",
        }
    }
}

/// Nesting of `%if` blocks within one translation.
///
/// The state only tracks whether output is currently suppressed: nothing is written while
/// suppressing, so a suppressed span never reaches the produced SQL.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConditionalState {
    if_depth: u32,
    /// Depth that started the suppression, zero when not suppressing.
    suppress_depth: u32,
}

impl ConditionalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> u32 {
        self.if_depth
    }

    pub fn is_suppressing(&self) -> bool {
        self.suppress_depth != 0
    }

    /// `%if` followed by a value with the given truthiness.
    pub fn open(&mut self, condition: bool) {
        self.if_depth += 1;
        if !self.is_suppressing() && !condition {
            self.suppress_depth = self.if_depth;
        }
    }

    /// `%else`: flips the branch of the innermost block unless an outer block is suppressing.
    pub fn otherwise(&mut self) -> Result<(), TranslateError> {
        if self.if_depth == 0 {
            return Err(TranslateError::UnexpectedConditional(
                Conditional::Else.keyword(),
            ));
        }
        if self.suppress_depth == self.if_depth {
            self.suppress_depth = 0;
        } else if !self.is_suppressing() {
            self.suppress_depth = self.if_depth;
        }
        Ok(())
    }

    /// `%end`: closes the innermost block, state is left untouched on error.
    pub fn end(&mut self) -> Result<(), TranslateError> {
        if self.if_depth == 0 {
            return Err(TranslateError::UnexpectedConditional(
                Conditional::End.keyword(),
            ));
        }
        self.if_depth -= 1;
        if self.suppress_depth == self.if_depth + 1 {
            self.suppress_depth = 0;
        }
        Ok(())
    }

    pub fn handle(&mut self, conditional: Conditional) -> Result<(), TranslateError> {
        match conditional {
            Conditional::Else => self.otherwise(),
            Conditional::End => self.end(),
        }
    }

    /// Close every block left open at the end of the input.
    ///
    /// Returns whether some block was still open.
    pub fn finish(&mut self) -> bool {
        let unterminated = self.if_depth != 0;
        *self = Self::default();
        unterminated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_without_if_leaves_depth_untouched() {
        let mut state = ConditionalState::new();
        assert_eq!(
            state.end(),
            Err(TranslateError::UnexpectedConditional("end"))
        );
        assert_eq!(state.depth(), 0);
        assert!(!state.is_suppressing());
    }

    #[test]
    fn outer_suppression_swallows_inner_else() {
        let mut state = ConditionalState::new();
        state.open(false);
        state.open(true);
        state.otherwise().unwrap();
        assert!(state.is_suppressing());
        state.end().unwrap();
        assert!(state.is_suppressing());
        state.end().unwrap();
        assert!(!state.is_suppressing());
        assert_eq!(state.depth(), 0);
    }

    #[test]
    fn else_flips_the_innermost_block() {
        let mut state = ConditionalState::new();
        state.open(true);
        state.otherwise().unwrap();
        assert!(state.is_suppressing());
        state.open(true);
        state.otherwise().unwrap();
        assert!(state.is_suppressing());
        state.end().unwrap();
        assert!(state.is_suppressing());
        state.end().unwrap();
        assert!(!state.is_suppressing());
    }

    #[test]
    fn finish_closes_suppression() {
        let mut state = ConditionalState::new();
        state.open(false);
        assert!(state.finish());
        assert!(!state.is_suppressing());
        assert!(!state.finish());
    }
}
