use std::io::{self, Write};

/// Sound cues raised by simulation outcomes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundEffect {
    Eat,
    Wall,
}

/// Destination for sound cues, chosen by the frame loop.
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect) -> io::Result<()>;
}

/// Plays every cue as the terminal bell.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SoundSink for TerminalBell<W> {
    fn play(&mut self, _effect: SoundEffect) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl SoundSink for Muted {
    fn play(&mut self, _effect: SoundEffect) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io;

    use super::{Muted, SoundEffect, SoundSink, TerminalBell};

    /// Sink that remembers what was played, in order.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) played: Vec<SoundEffect>,
    }

    impl SoundSink for RecordingSink {
        fn play(&mut self, effect: SoundEffect) -> io::Result<()> {
            self.played.push(effect);
            Ok(())
        }
    }

    #[test]
    fn bell_writes_one_bel_per_cue() {
        let mut bell = TerminalBell::new(Vec::new());

        bell.play(SoundEffect::Eat).expect("vec writer never fails");
        bell.play(SoundEffect::Wall).expect("vec writer never fails");

        assert_eq!(bell.out, b"\x07\x07");
    }

    #[test]
    fn muted_sink_accepts_everything() {
        assert!(Muted.play(SoundEffect::Wall).is_ok());
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::default();
        sink.play(SoundEffect::Eat).expect("recording never fails");
        sink.play(SoundEffect::Wall).expect("recording never fails");

        assert_eq!(sink.played, vec![SoundEffect::Eat, SoundEffect::Wall]);
    }
}
