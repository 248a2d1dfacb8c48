//! Host-side sinks for simulation output.
//!
//! The engine reports audio cues as plain data; what happens to them is the
//! host's business. The CLI host routes them to the log. A sink that fails
//! is disabled for the rest of the session rather than retried every tick.

use skyguard_core::events::AudioEvent;

/// Destination for audio cues emitted by the simulation.
pub trait AudioSink: Send {
    fn play(&mut self, event: AudioEvent) -> anyhow::Result<()>;
}

/// Audio sink that writes cues to the log.
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn play(&mut self, event: AudioEvent) -> anyhow::Result<()> {
        match event {
            AudioEvent::DroneAmbient => log::debug!("audio cue: drone ambient"),
            AudioEvent::Explosion => log::info!("audio cue: explosion"),
            AudioEvent::NuclearExplosion => log::warn!("audio cue: nuclear explosion"),
        }
        Ok(())
    }
}

/// Routes cues to a sink, dropping the sink on its first failure.
pub struct AudioRouter {
    sink: Option<Box<dyn AudioSink>>,
}

impl AudioRouter {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// A router with no sink; all cues are dropped.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Forward a tick's worth of cues. On the first sink error the sink is
    /// logged and disabled for the remainder of the session.
    pub fn dispatch(&mut self, events: &[AudioEvent]) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        for event in events {
            if let Err(err) = sink.play(*event) {
                log::error!("audio sink failed, disabling for this session: {err:#}");
                self.sink = None;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingSink {
        calls: Arc<AtomicUsize>,
    }

    impl AudioSink for FailingSink {
        fn play(&mut self, _event: AudioEvent) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            anyhow::bail!("device gone")
        }
    }

    #[test]
    fn test_failing_sink_disabled_after_first_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut router = AudioRouter::new(Box::new(FailingSink {
            calls: calls.clone(),
        }));

        router.dispatch(&[AudioEvent::Explosion, AudioEvent::Explosion]);
        router.dispatch(&[AudioEvent::Explosion]);

        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_disabled_router_drops_cues() {
        let mut router = AudioRouter::disabled();
        router.dispatch(&[AudioEvent::NuclearExplosion]);
    }

    #[test]
    fn test_log_sink_accepts_all_cues() {
        let mut sink = LogAudioSink;
        for event in [
            AudioEvent::DroneAmbient,
            AudioEvent::Explosion,
            AudioEvent::NuclearExplosion,
        ] {
            assert!(sink.play(event).is_ok());
        }
    }
}
