use std::time::{Duration, Instant};

use crate::engine::QuizEngine;
use crate::error::QuizError;

pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Nada pendiente o todavía no vence
    Idle,
    Advanced,
    /// Venció pero el motor cambió de generación desde que se programó
    Discarded,
}

#[derive(Clone, Copy, Debug)]
struct PendingAdvance {
    due: Instant,
    generation: u64,
}

/// Avance diferido tras una respuesta correcta. Solo hay un avance pendiente
/// a la vez y se descarta si la generación del motor ya no coincide.
#[derive(Clone, Debug)]
pub struct AdvanceTimer {
    delay: Duration,
    pending: Option<PendingAdvance>,
}

impl Default for AdvanceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE_DELAY)
    }
}

impl AdvanceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule(&mut self, now: Instant, generation: u64) {
        self.pending = Some(PendingAdvance {
            due: now + self.delay,
            generation,
        });
        log::debug!("Advance scheduled in {:?} (generation {generation})", self.delay);
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("Pending advance cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.due.saturating_duration_since(now))
    }

    pub fn poll(&mut self, now: Instant, engine: &mut QuizEngine) -> Result<TimerEvent, QuizError> {
        let pending = match self.pending {
            Some(p) if now >= p.due => p,
            _ => return Ok(TimerEvent::Idle),
        };
        self.pending = None;

        if pending.generation != engine.generation() {
            log::debug!(
                "Stale advance discarded (scheduled at generation {}, now {})",
                pending.generation,
                engine.generation()
            );
            return Ok(TimerEvent::Discarded);
        }

        engine.advance()?;
        Ok(TimerEvent::Advanced)
    }
}
