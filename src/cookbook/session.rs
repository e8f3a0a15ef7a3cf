//! Per-run state shared by materialization calls.

/// State that lives for one run of cookbook operations.
///
/// Create one per command invocation and pass it to every
/// [`Materializer`](super::Materializer) call of that run.
#[derive(Debug, Default)]
pub struct CookbookSession {
    prerequisites_shown: bool,
}

impl CookbookSession {
    /// Create a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the missing-prerequisites hint was already emitted.
    pub fn prerequisites_shown(&self) -> bool {
        self.prerequisites_shown
    }

    /// Record that the hint is being emitted.
    ///
    /// Returns `true` only the first time.
    pub fn mark_prerequisites_shown(&mut self) -> bool {
        !std::mem::replace(&mut self.prerequisites_shown, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_flips_once() {
        let mut session = CookbookSession::new();
        assert!(!session.prerequisites_shown());
        assert!(session.mark_prerequisites_shown());
        assert!(session.prerequisites_shown());
        assert!(!session.mark_prerequisites_shown());
        assert!(session.prerequisites_shown());
    }
}
