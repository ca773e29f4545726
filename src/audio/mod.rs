//! Sound cues driven by simulation events
//!
//! The simulation only emits `GameEvent`s; this module turns them into cue
//! playback on an `AudioSink`. Playback is fire-and-forget and gated by a
//! single global mute flag.

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Arrow fired
    Shoot,
    /// Balloon burst
    Pop,
    /// Popped wolf starts dropping
    Fall,
    /// Popped wolf landed, points awarded
    Score,
    /// Buoyant wolf landed, life lost
    Hurt,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ArrowFired => Some(SoundEffect::Shoot),
            GameEvent::BalloonPopped => Some(SoundEffect::Pop),
            GameEvent::WolfFalling => Some(SoundEffect::Fall),
            GameEvent::WolfScored { .. } => Some(SoundEffect::Score),
            GameEvent::PlayerHurt { .. } => Some(SoundEffect::Hurt),
            GameEvent::SessionStarted | GameEvent::GameOver { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Pop => "pop",
            SoundEffect::Fall => "fall",
            SoundEffect::Score => "score",
            SoundEffect::Hurt => "hurt",
        }
    }
}

/// Where cues end up. Failures inside an implementation are swallowed.
pub trait AudioSink {
    /// Play a one-shot cue (no-op while muted)
    fn play(&mut self, effect: SoundEffect);

    /// Rewind and start the looping background music (no-op while muted)
    fn start_music(&mut self);

    /// Continue the background music from where it paused (no-op while muted)
    fn resume_music(&mut self);

    fn pause_music(&mut self);

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);
}

/// Route a batch of events to the sink, oldest first
pub fn dispatch(events: &[GameEvent], sink: &mut dyn AudioSink) {
    for event in events {
        match event {
            GameEvent::SessionStarted => sink.start_music(),
            GameEvent::GameOver { .. } => sink.pause_music(),
            other => {
                if let Some(effect) = SoundEffect::for_event(other) {
                    sink.play(effect);
                }
            }
        }
    }
}

/// Flip the global mute flag. Music pauses on mute and resumes on unmute only
/// while a session is running. Returns the new mute state.
pub fn toggle_mute(sink: &mut dyn AudioSink, running: bool) -> bool {
    let muted = !sink.is_muted();
    sink.set_muted(muted);
    if muted {
        sink.pause_music();
    } else if running {
        sink.resume_music();
    }
    log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
    muted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingSink {
        muted: bool,
        played: Vec<SoundEffect>,
        music: Vec<&'static str>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, effect: SoundEffect) {
            if !self.muted {
                self.played.push(effect);
            }
        }

        fn start_music(&mut self) {
            if !self.muted {
                self.music.push("start");
            }
        }

        fn resume_music(&mut self) {
            if !self.muted {
                self.music.push("resume");
            }
        }

        fn pause_music(&mut self) {
            self.music.push("pause");
        }

        fn is_muted(&self) -> bool {
            self.muted
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }
    }

    #[test]
    fn test_events_map_to_cues() {
        let mut sink = RecordingSink::default();
        dispatch(
            &[
                GameEvent::SessionStarted,
                GameEvent::ArrowFired,
                GameEvent::BalloonPopped,
                GameEvent::WolfFalling,
                GameEvent::WolfScored { score: 100 },
                GameEvent::PlayerHurt { lives: 0 },
                GameEvent::GameOver { score: 100 },
            ],
            &mut sink,
        );
        assert_eq!(
            sink.played,
            vec![
                SoundEffect::Shoot,
                SoundEffect::Pop,
                SoundEffect::Fall,
                SoundEffect::Score,
                SoundEffect::Hurt,
            ]
        );
        assert_eq!(sink.music, vec!["start", "pause"]);
    }

    #[test]
    fn test_mute_toggle_controls_music() {
        let mut sink = RecordingSink::default();

        assert!(toggle_mute(&mut sink, true));
        dispatch(&[GameEvent::ArrowFired], &mut sink);
        assert!(sink.played.is_empty());

        assert!(!toggle_mute(&mut sink, true));
        assert_eq!(sink.music, vec!["pause", "resume"]);

        // Unmuting on the start screen leaves the music off
        toggle_mute(&mut sink, false);
        toggle_mute(&mut sink, false);
        assert_eq!(sink.music, vec!["pause", "resume", "pause"]);
    }

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundEffect::Shoot.name(), "shoot");
        assert_eq!(SoundEffect::Hurt.name(), "hurt");
        assert_eq!(SoundEffect::for_event(&GameEvent::SessionStarted), None);
    }
}
