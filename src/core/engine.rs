//! Turns raw detections into a clean IN/OUT log.
//!
//! The engine keeps no state of its own between calls. Each observation is
//! compared with the last event of its month's partition:
//!
//! - same location as last logged, and less than the threshold since → noise,
//!   nothing is written;
//! - otherwise the observation is a new event. Camera detections are logged
//!   inverted: at the frame rate we get, the cat is only ever seen waiting
//!   on one side, and by the time anyone reacts it is on the other;
//! - an event logged as IN closes an outside interval, which is folded into
//!   the day's aggregate.
//!
//! The read/decide/append sequence runs under a mutex and, for file-backed
//! stores, an advisory lock on the logs directory, so that the camera and
//! the remote sensor cannot both log the same transition even when they run
//! as separate processes.

use super::aggregate::update_aggregate;
use super::classifier::classify_centroid;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{DailyAggregate, Location, LocationEvent, RawObservation, Reading};
use crate::notify::{
    CommandCapture, CommandNotifier, EvidenceCapture, LogNotifier, NoCapture, Notice, Notifier,
    Source,
};
use crate::storage::{AggregateLog, DirLock, EventLog, FileAggregateLog, FileEventLog, Tail};
use crate::utils::time::{format_timestamp, rounded_minutes_between};
use chrono::NaiveDateTime;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Values the engine needs from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub label: String,
    pub subject_name: String,
    pub boundary_x: f64,
    pub remote_threshold_minutes: i64,
    pub visual_threshold_minutes: i64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            label: "sylvester_face".to_string(),
            subject_name: "Sylvester".to_string(),
            boundary_x: 250.0,
            remote_threshold_minutes: 30,
            visual_threshold_minutes: 10,
        }
    }
}

impl From<&Config> for EngineSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            label: cfg.label.clone(),
            subject_name: cfg.subject_name.clone(),
            boundary_x: f64::from(cfg.boundary_x),
            remote_threshold_minutes: cfg.remote_threshold_minutes,
            visual_threshold_minutes: cfg.visual_threshold_minutes,
        }
    }
}

/// Per-source rules applied to an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    pub source: Source,
    pub threshold_minutes: i64,
}

impl Policy {
    /// Camera sightings are logged as the opposite side.
    pub fn inverts_location(&self) -> bool {
        self.source == Source::Visual
    }

    pub fn captures_evidence(&self) -> bool {
        self.source == Source::Visual
    }
}

/// Last known state, as read from the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorState {
    pub location: Location,
    pub timestamp: NaiveDateTime,
    /// No event exists for the month yet; the cat is assumed inside as of
    /// the query time.
    pub sentinel: bool,
}

impl PriorState {
    fn from_tail(tail: Tail<LocationEvent>, at: NaiveDateTime) -> Self {
        match tail.found() {
            Some(ev) => Self {
                location: ev.location,
                timestamp: ev.timestamp,
                sentinel: false,
            },
            None => Self {
                location: Location::In,
                timestamp: at,
                sentinel: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Duplicate or noise; nothing was written.
    Suppressed,
    Recorded {
        event: LocationEvent,
        aggregate: Option<DailyAggregate>,
        evidence: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    /// Where the cat was seen (before inversion).
    pub observed: Location,
    pub prior: PriorState,
    pub interval_minutes: i64,
    pub outcome: Outcome,
}

impl Decision {
    pub fn is_significant(&self) -> bool {
        matches!(self.outcome, Outcome::Recorded { .. })
    }

    pub fn logged_event(&self) -> Option<&LocationEvent> {
        match &self.outcome {
            Outcome::Recorded { event, .. } => Some(event),
            Outcome::Suppressed => None,
        }
    }

    pub fn aggregate(&self) -> Option<&DailyAggregate> {
        match &self.outcome {
            Outcome::Recorded { aggregate, .. } => aggregate.as_ref(),
            Outcome::Suppressed => None,
        }
    }
}

/// New event iff the location changed or enough time went by.
pub fn is_significant(
    prior: Location,
    observed: Location,
    interval_minutes: i64,
    threshold: i64,
) -> bool {
    prior != observed || interval_minutes >= threshold
}

pub struct Engine {
    settings: EngineSettings,
    events: Arc<dyn EventLog>,
    aggregate: Arc<dyn AggregateLog>,
    notifier: Arc<dyn Notifier>,
    capture: Arc<dyn EvidenceCapture>,
    critical: Mutex<()>,
    store_lock: Option<DirLock>,
}

impl Engine {
    pub fn new(
        settings: EngineSettings,
        events: Arc<dyn EventLog>,
        aggregate: Arc<dyn AggregateLog>,
    ) -> Self {
        Self {
            settings,
            events,
            aggregate,
            notifier: Arc::new(LogNotifier),
            capture: Arc::new(NoCapture),
            critical: Mutex::new(()),
            store_lock: None,
        }
    }

    /// File-backed engine wired with the collaborators named in the config.
    pub fn from_config(cfg: &Config) -> Self {
        let logs = cfg.logs_dir();
        let mut engine = Self::new(
            EngineSettings::from(cfg),
            Arc::new(FileEventLog::new(&logs)),
            Arc::new(FileAggregateLog::in_dir(&logs)),
        )
        .with_store_lock(DirLock::in_dir(&logs));

        if let Some(cmd) = &cfg.notify_command {
            engine = engine.with_notifier(Arc::new(CommandNotifier::new(cmd.clone())));
        }
        if let Some(cmd) = &cfg.capture_command {
            engine = engine.with_capture(Arc::new(CommandCapture::new(
                cmd.clone(),
                cfg.images_dir(),
            )));
        }

        engine
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_capture(mut self, capture: Arc<dyn EvidenceCapture>) -> Self {
        self.capture = capture;
        self
    }

    /// Also exclude other processes sharing the same stores.
    pub fn with_store_lock(mut self, lock: DirLock) -> Self {
        self.store_lock = Some(lock);
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn policy(&self, source: Source) -> Policy {
        let threshold_minutes = match source {
            Source::Remote => self.settings.remote_threshold_minutes,
            Source::Visual => self.settings.visual_threshold_minutes,
        };
        Policy {
            source,
            threshold_minutes,
        }
    }

    /// Remote sensor message: the location is taken as is.
    pub fn handle_remote(
        &self,
        timestamp: NaiveDateTime,
        location: Location,
    ) -> AppResult<Decision> {
        self.process(RawObservation::located(timestamp, location), Source::Remote)
    }

    /// Camera detection centred at `(x, y)`.
    pub fn handle_detection(
        &self,
        timestamp: NaiveDateTime,
        x: f64,
        y: f64,
    ) -> AppResult<Decision> {
        self.process(RawObservation::centroid(timestamp, x, y), Source::Visual)
    }

    /// State of the log as seen from `at`.
    pub fn prior_state(&self, at: NaiveDateTime) -> AppResult<PriorState> {
        Ok(PriorState::from_tail(self.events.read_last_event(at)?, at))
    }

    pub fn process(&self, obs: RawObservation, source: Source) -> AppResult<Decision> {
        let policy = self.policy(source);
        let observed = self.resolve(obs.reading);

        let mut decision = {
            let _guard = self
                .critical
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let _store_guard = match &self.store_lock {
                Some(lock) => Some(lock.acquire()?),
                None => None,
            };
            self.decide_and_record(obs.timestamp, observed, policy)?
        };

        if let Outcome::Recorded { evidence, .. } = &mut decision.outcome {
            if policy.captures_evidence() {
                *evidence = self.capture.capture(obs.timestamp);
            }

            self.notifier.notify(&Notice {
                subject: self.settings.subject_name.clone(),
                source,
                location: observed,
                evidence: evidence.clone(),
            });
        }

        Ok(decision)
    }

    fn resolve(&self, reading: Reading) -> Location {
        match reading {
            Reading::Location(loc) => loc,
            Reading::Centroid { x, y } => classify_centroid(x, y, self.settings.boundary_x),
        }
    }

    fn decide_and_record(
        &self,
        timestamp: NaiveDateTime,
        observed: Location,
        policy: Policy,
    ) -> AppResult<Decision> {
        let prior = self.prior_state(timestamp)?;
        if prior.sentinel {
            log::debug!(
                "no events yet for {}; assuming inside",
                format_timestamp(&timestamp)
            );
        }

        let interval_minutes = if prior.sentinel {
            0
        } else {
            rounded_minutes_between(prior.timestamp, timestamp)
        };

        if !is_significant(
            prior.location,
            observed,
            interval_minutes,
            policy.threshold_minutes,
        ) {
            log::debug!(
                "{} {} at {} suppressed (last {}, {} min ago)",
                policy.source.as_str(),
                observed,
                format_timestamp(&timestamp),
                prior.location,
                interval_minutes
            );
            return Ok(Decision {
                observed,
                prior,
                interval_minutes,
                outcome: Outcome::Suppressed,
            });
        }

        let logged = if policy.inverts_location() {
            observed.opposite()
        } else {
            observed
        };

        let event = LocationEvent::new(timestamp, self.settings.label.clone(), logged);
        self.events.append_event(&event)?;
        log::info!(
            "logged {} ({} source)",
            event.to_line(),
            policy.source.as_str()
        );

        let aggregate = if logged.is_in() {
            Some(update_aggregate(
                self.aggregate.as_ref(),
                timestamp,
                interval_minutes,
            )?)
        } else {
            None
        };

        Ok(Decision {
            observed,
            prior,
            interval_minutes,
            outcome: Outcome::Recorded {
                event,
                aggregate,
                evidence: None,
            },
        })
    }
}
