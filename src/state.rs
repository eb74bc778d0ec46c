/// How a participant reacts to incoming messages.
///
/// A closed set — enum dispatch: match on variants, no vtable, and the
/// compiler tells you if a new state misses a case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryState {
    /// Messages are delivered and processed.
    #[default]
    Available,
    /// Messages are dropped. Intentional loss, not a failure.
    Unavailable,
    /// Messages are accepted and kept for later, not processed.
    Deferred,
}

/// What handling one message decided.
///
/// Pure decision — the space owns the side effects (journal entry, log
/// line), the state only picks the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reception {
    Processed,
    Stored,
    Dropped,
}

impl DeliveryState {
    /// Decide what happens to an incoming message in this state.
    pub fn handle(self) -> Reception {
        match self {
            DeliveryState::Available => Reception::Processed,
            DeliveryState::Unavailable => Reception::Dropped,
            DeliveryState::Deferred => Reception::Stored,
        }
    }

    /// The display name used in state-change events.
    pub fn name(self) -> &'static str {
        match self {
            DeliveryState::Available => "Available",
            DeliveryState::Unavailable => "Unavailable",
            DeliveryState::Deferred => "Deferred",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_processes() {
        assert_eq!(DeliveryState::Available.handle(), Reception::Processed);
    }

    #[test]
    fn unavailable_drops() {
        assert_eq!(DeliveryState::Unavailable.handle(), Reception::Dropped);
    }

    #[test]
    fn deferred_stores_without_processing() {
        assert_eq!(DeliveryState::Deferred.handle(), Reception::Stored);
    }

    #[test]
    fn new_participants_start_available() {
        assert_eq!(DeliveryState::default(), DeliveryState::Available);
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(DeliveryState::Available.name(), "Available");
        assert_eq!(DeliveryState::Unavailable.name(), "Unavailable");
        assert_eq!(DeliveryState::Deferred.name(), "Deferred");
    }
}
