/// Where the loader overlay is in its one-way lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    AwaitingNetwork,
    /// Minimum dwell satisfied, still waiting on the page load.
    ReadyToExit,
    Revealing,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroSignal {
    DwellElapsed,
    PageLoaded,
    ExitElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    BeginReveal,
    Unmount,
}

/// Phase plus the two latches that gate the reveal.
///
/// Both latches are set-once. The only way into `Revealing` is the rule in
/// [`IntroSequencer::advance`], which fires when both are set, and only from a
/// pre-reveal phase, so `BeginReveal` can come out of this type at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroSequencer {
    phase: IntroPhase,
    dwell_elapsed: bool,
    page_loaded: bool,
}

impl Default for IntroSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntroSequencer {
    pub fn new() -> Self {
        Self {
            phase: IntroPhase::AwaitingNetwork,
            dwell_elapsed: false,
            page_loaded: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn page_loaded(&self) -> bool {
        self.page_loaded
    }

    pub fn is_ready_to_exit(&self) -> bool {
        self.dwell_elapsed && self.page_loaded
    }

    pub fn is_revealing(&self) -> bool {
        matches!(self.phase, IntroPhase::Revealing | IntroPhase::Hidden)
    }

    pub fn overlay_mounted(&self) -> bool {
        self.phase != IntroPhase::Hidden
    }

    pub fn status_caption(&self) -> &'static str {
        if self.page_loaded {
            "Initializing Intelligence"
        } else {
            "Awaiting Network..."
        }
    }

    pub fn handle(&mut self, signal: IntroSignal) -> Option<IntroEvent> {
        match signal {
            IntroSignal::DwellElapsed => self.dwell_elapsed = true,
            IntroSignal::PageLoaded => self.page_loaded = true,
            IntroSignal::ExitElapsed => {
                if self.phase == IntroPhase::Revealing {
                    self.phase = IntroPhase::Hidden;
                    return Some(IntroEvent::Unmount);
                }
                return None;
            }
        }
        self.advance()
    }

    fn advance(&mut self) -> Option<IntroEvent> {
        match self.phase {
            IntroPhase::AwaitingNetwork | IntroPhase::ReadyToExit if self.is_ready_to_exit() => {
                self.phase = IntroPhase::Revealing;
                Some(IntroEvent::BeginReveal)
            }
            IntroPhase::AwaitingNetwork if self.dwell_elapsed => {
                self.phase = IntroPhase::ReadyToExit;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_before_dwell_keeps_awaiting() {
        let mut intro = IntroSequencer::new();
        assert_eq!(intro.handle(IntroSignal::PageLoaded), None);
        assert_eq!(intro.phase(), IntroPhase::AwaitingNetwork);
        assert!(intro.page_loaded());
        assert_eq!(intro.status_caption(), "Initializing Intelligence");

        assert_eq!(intro.handle(IntroSignal::DwellElapsed), Some(IntroEvent::BeginReveal));
        assert_eq!(intro.phase(), IntroPhase::Revealing);
    }

    #[test]
    fn dwell_before_load_waits_in_ready_to_exit() {
        let mut intro = IntroSequencer::new();
        assert_eq!(intro.handle(IntroSignal::DwellElapsed), None);
        assert_eq!(intro.phase(), IntroPhase::ReadyToExit);
        assert!(!intro.is_ready_to_exit());
        assert_eq!(intro.status_caption(), "Awaiting Network...");

        assert_eq!(intro.handle(IntroSignal::PageLoaded), Some(IntroEvent::BeginReveal));
        assert!(intro.is_revealing());
    }

    #[test]
    fn reveal_is_emitted_once() {
        let mut intro = IntroSequencer::new();
        intro.handle(IntroSignal::DwellElapsed);
        let events: Vec<_> = (0..5)
            .filter_map(|_| intro.handle(IntroSignal::PageLoaded))
            .collect();
        assert_eq!(events, vec![IntroEvent::BeginReveal]);
        assert_eq!(intro.handle(IntroSignal::DwellElapsed), None);
        assert_eq!(intro.phase(), IntroPhase::Revealing);
    }

    #[test]
    fn exit_only_counts_while_revealing() {
        let mut intro = IntroSequencer::new();
        assert_eq!(intro.handle(IntroSignal::ExitElapsed), None);
        assert_eq!(intro.phase(), IntroPhase::AwaitingNetwork);

        intro.handle(IntroSignal::PageLoaded);
        intro.handle(IntroSignal::DwellElapsed);
        assert_eq!(intro.handle(IntroSignal::ExitElapsed), Some(IntroEvent::Unmount));
        assert_eq!(intro.phase(), IntroPhase::Hidden);
        assert!(!intro.overlay_mounted());

        assert_eq!(intro.handle(IntroSignal::ExitElapsed), None);
        assert_eq!(intro.handle(IntroSignal::PageLoaded), None);
        assert_eq!(intro.phase(), IntroPhase::Hidden);
    }
}
