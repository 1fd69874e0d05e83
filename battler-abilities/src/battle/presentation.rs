use std::{
    fmt::{
        self,
        Display,
    },
    mem,
};

use crate::battle::MonHandle;

/// A request for the presentation layer, produced when an ability resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationEvent {
    /// A message to display.
    ///
    /// Immediate messages are shown right away, instead of after messages already queued.
    Message { text: String, immediate: bool },
    /// The ability banner for a Mon's ability slot.
    ///
    /// Instant banners skip the entrance animation.
    AbilityBanner {
        mon: MonHandle,
        passive: bool,
        instant: bool,
    },
}

impl PresentationEvent {
    /// A queued message.
    pub fn message<S>(text: S) -> Self
    where
        S: Into<String>,
    {
        Self::Message {
            text: text.into(),
            immediate: false,
        }
    }
}

impl Display for PresentationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message { text, immediate } => {
                write!(f, "message|{text}")?;
                if *immediate {
                    write!(f, "|immediate")?;
                }
                Ok(())
            }
            Self::AbilityBanner {
                mon,
                passive,
                instant,
            } => {
                write!(f, "abilitybanner|mon:{mon}")?;
                if *passive {
                    write!(f, "|passive")?;
                }
                if *instant {
                    write!(f, "|instant")?;
                }
                Ok(())
            }
        }
    }
}

/// A log of presentation events, for [`Battle`][`crate::battle::Battle`] implementations that
/// record presentation rather than render it directly.
#[derive(Debug, Default)]
pub struct PresentationLog {
    events: Vec<PresentationEvent>,
    last_read: usize,
}

impl PresentationLog {
    /// Creates a new presentation log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain events since the last call to [`Self::read_out`]?
    pub fn has_new_events(&self) -> bool {
        self.last_read < self.events.len()
    }

    /// Pushes a new event to the log.
    ///
    /// Immediate messages are placed ahead of any unread events.
    pub fn push(&mut self, event: PresentationEvent) {
        match event {
            PresentationEvent::Message {
                immediate: true, ..
            } => self.events.insert(self.last_read, event),
            _ => self.events.push(event),
        }
    }

    /// Returns an iterator over all events.
    pub fn events(&self) -> impl Iterator<Item = &PresentationEvent> {
        self.events.iter()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Is the log empty?
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Reads out any events that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &PresentationEvent> {
        let i = mem::replace(&mut self.last_read, self.events.len());
        self.events[i..].iter()
    }
}
