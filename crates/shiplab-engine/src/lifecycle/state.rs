/// Lifecycle state of the application root.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Unstarted,
    Loading,
    Running,
    Suspended,
    /// Terminal.
    Shutdown,
}

/// Discrete events that can move the state machine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LifecycleEvent {
    Startup,
    /// The loading phase reported that every asset resolved.
    LoadingComplete,
    Suspend,
    Resume,
    Shutdown,
}

impl AppState {
    /// Returns the state after `event`, or `None` if the event does not apply.
    ///
    /// `loaded` selects where a resume lands: suspension may happen during
    /// loading, and resuming must go back to whichever phase was active.
    pub fn on(self, event: LifecycleEvent, loaded: bool) -> Option<AppState> {
        use AppState::*;

        match (self, event) {
            (Shutdown, _) => None,
            (_, LifecycleEvent::Shutdown) => Some(Shutdown),

            (Unstarted, LifecycleEvent::Startup) => Some(Loading),
            (Loading, LifecycleEvent::LoadingComplete) => Some(Running),
            (Loading | Running, LifecycleEvent::Suspend) => Some(Suspended),
            (Suspended, LifecycleEvent::Resume) => Some(if loaded { Running } else { Loading }),

            _ => None,
        }
    }

    /// True between startup and shutdown.
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, AppState::Loading | AppState::Running | AppState::Suspended)
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == AppState::Shutdown
    }
}

#[cfg(test)]
mod tests {
    use super::AppState::*;
    use super::LifecycleEvent as E;
    use super::*;

    const ALL_STATES: [AppState; 5] = [Unstarted, Loading, Running, Suspended, Shutdown];
    const ALL_EVENTS: [LifecycleEvent; 5] =
        [E::Startup, E::LoadingComplete, E::Suspend, E::Resume, E::Shutdown];

    #[test]
    fn happy_path() {
        let s = Unstarted.on(E::Startup, false).unwrap();
        assert_eq!(s, Loading);
        let s = s.on(E::LoadingComplete, false).unwrap();
        assert_eq!(s, Running);
        let s = s.on(E::Suspend, true).unwrap();
        assert_eq!(s, Suspended);
        let s = s.on(E::Resume, true).unwrap();
        assert_eq!(s, Running);
        assert_eq!(s.on(E::Shutdown, true), Some(Shutdown));
    }

    #[test]
    fn resume_returns_to_loading_when_not_loaded() {
        let s = Loading.on(E::Suspend, false).unwrap();
        assert_eq!(s.on(E::Resume, false), Some(Loading));
    }

    #[test]
    fn shutdown_is_terminal() {
        for event in ALL_EVENTS {
            assert_eq!(Shutdown.on(event, true), None);
            assert_eq!(Shutdown.on(event, false), None);
        }
    }

    #[test]
    fn shutdown_reachable_from_every_other_state() {
        for state in ALL_STATES.into_iter().filter(|s| !s.is_terminal()) {
            assert_eq!(state.on(E::Shutdown, false), Some(Shutdown));
        }
    }

    #[test]
    fn loading_completes_at_most_once() {
        for state in ALL_STATES.into_iter().filter(|s| *s != Loading) {
            assert_eq!(state.on(E::LoadingComplete, true), None);
        }
    }

    #[test]
    fn startup_only_from_unstarted() {
        for state in ALL_STATES.into_iter().filter(|s| *s != Unstarted) {
            assert_eq!(state.on(E::Startup, false), None);
        }
    }

    #[test]
    fn resume_only_from_suspended() {
        for state in ALL_STATES.into_iter().filter(|s| *s != Suspended) {
            assert_eq!(state.on(E::Resume, true), None);
        }
    }

    #[test]
    fn liveness() {
        let live: Vec<_> = ALL_STATES.into_iter().filter(|s| s.is_live()).collect();
        assert_eq!(live, [Loading, Running, Suspended]);
    }
}
