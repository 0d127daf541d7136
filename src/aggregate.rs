//! Core aggregate and domain event traits.

use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    ///
    /// This is used for serialization and event store filtering.
    fn event_type(&self) -> &'static str;
}

/// Trait for aggregates in an event-sourced system.
///
/// An aggregate is a cluster of domain objects that can be treated as a single
/// unit. The aggregate root ensures consistency of changes being made within
/// the aggregate.
///
/// In event sourcing, aggregates:
/// - Are rebuilt by replaying events
/// - Validate commands against their current state
/// - Apply events to update state (pure, deterministic)
pub trait Aggregate: Send + Sync + Sized {
    /// The identifier type for this aggregate.
    type Id: Copy + Eq + std::fmt::Debug + Send + Sync;

    /// The type of commands this aggregate validates.
    type Command;

    /// The type of events this aggregate consumes.
    type Event: DomainEvent;

    /// The type of errors this aggregate can produce.
    type Error: std::error::Error + Send + Sync;

    /// Returns the aggregate type name.
    ///
    /// Used for event store organization and routing.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's unique identifier.
    fn id(&self) -> Self::Id;

    /// Validates a command against the current state.
    ///
    /// Returns the aggregate identifier when the command is accepted. No
    /// state is mutated here; turning an accepted command into a persisted
    /// event is the caller's responsibility, and this core never assumes
    /// that happens.
    fn handle(&self, command: &Self::Command) -> Result<Self::Id, Self::Error>;

    /// Applies an event to the aggregate, updating its state.
    ///
    /// This method must be pure and deterministic:
    /// - Given the same state and event, it must always produce the same new state
    /// - It must not have side effects
    /// - It must not fail (events represent facts that have happened)
    fn apply(&mut self, event: Self::Event);

    /// Applies multiple events in sequence, left to right.
    ///
    /// Full-history replay and incremental live updates share this one code
    /// path: applying an ordered sequence is equivalent to applying each
    /// event in turn.
    fn apply_events(&mut self, events: impl IntoIterator<Item = Self::Event>) {
        for event in events {
            self.apply(event);
        }
    }
}
