use super::AudioSink;

/// Tracks whether audio was paused by a suspension.
///
/// Repeated suspends pause once; a resume only resumes audio this gate paused.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct AudioGate {
    paused: bool,
}

impl AudioGate {
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn suspend(&mut self, sink: &mut dyn AudioSink) {
        if self.paused {
            return;
        }
        sink.pause_all();
        self.paused = true;
        log::debug!("audio paused");
    }

    pub fn resume(&mut self, sink: &mut dyn AudioSink) {
        if !self.paused {
            return;
        }
        sink.resume_all();
        self.paused = false;
        log::debug!("audio resumed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        pauses: u32,
        resumes: u32,
    }

    impl AudioSink for Counting {
        fn pause_all(&mut self) {
            self.pauses += 1;
        }
        fn resume_all(&mut self) {
            self.resumes += 1;
        }
    }

    #[test]
    fn suspend_pauses_once() {
        let mut sink = Counting::default();
        let mut gate = AudioGate::default();
        gate.suspend(&mut sink);
        gate.suspend(&mut sink);
        assert_eq!(sink.pauses, 1);
        assert!(gate.is_paused());
    }

    #[test]
    fn resume_without_suspend_does_nothing() {
        let mut sink = Counting::default();
        let mut gate = AudioGate::default();
        gate.resume(&mut sink);
        assert_eq!(sink.resumes, 0);
    }

    #[test]
    fn suspend_then_resume_round_trip() {
        let mut sink = Counting::default();
        let mut gate = AudioGate::default();
        gate.suspend(&mut sink);
        gate.resume(&mut sink);
        assert_eq!((sink.pauses, sink.resumes), (1, 1));
        assert!(!gate.is_paused());
    }
}
