//! Game events and the audio notifier seam.
//!
//! The controller queues events as they happen; presentation drains them once
//! per frame. Line clears produce exactly one [`GameEvent::LinesCleared`] per
//! lock, however many rows went away, so an [`AudioNotifier`] hears one
//! notification per clearing lock.

/// Something observable that happened inside the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece became part of the board.
    PieceLocked,
    /// The lock that just happened removed `count` (> 0) rows.
    LinesCleared { count: u32 },
    /// The level increased to `level`.
    LevelUp { level: u32 },
    /// A freshly spawned piece collided; the session is over.
    GameOver,
    /// A new session started after game over.
    Restarted,
}

/// Sound collaborator consumed by the core.
pub trait AudioNotifier {
    /// Called once per lock that cleared at least one line.
    fn lines_cleared(&mut self, count: u32);
}

/// Notifier that stays silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioNotifier for NullAudio {
    fn lines_cleared(&mut self, _count: u32) {}
}

/// Forward the line-clear events in `events` to `audio`.
///
/// Returns how many notifications were sent.
pub fn dispatch_audio<A, I>(events: I, audio: &mut A) -> usize
where
    A: AudioNotifier + ?Sized,
    I: IntoIterator<Item = GameEvent>,
{
    let mut sent = 0;
    for event in events {
        if let GameEvent::LinesCleared { count } = event {
            audio.lines_cleared(count);
            sent += 1;
        }
    }
    sent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<u32>);

    impl AudioNotifier for Recorder {
        fn lines_cleared(&mut self, count: u32) {
            self.0.push(count);
        }
    }

    #[test]
    fn only_line_clears_reach_audio() {
        let events = [
            GameEvent::PieceLocked,
            GameEvent::LinesCleared { count: 3 },
            GameEvent::LevelUp { level: 2 },
            GameEvent::PieceLocked,
            GameEvent::GameOver,
        ];
        let mut audio = Recorder::default();
        assert_eq!(dispatch_audio(events, &mut audio), 1);
        assert_eq!(audio.0, vec![3]);
    }

    #[test]
    fn null_audio_accepts_everything() {
        let mut audio = NullAudio;
        assert_eq!(
            dispatch_audio([GameEvent::LinesCleared { count: 1 }], &mut audio),
            1
        );
    }
}
