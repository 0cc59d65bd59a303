//! In-memory stores
//!
//! The repository layer: ordered event collection, immutable user registry,
//! and the notification feed. Constructed once at startup and handed to the
//! services by reference.

pub mod events;
pub mod notifications;
pub mod users;

pub use events::EventStore;
pub use notifications::NotificationFeed;
pub use users::UserRegistry;
