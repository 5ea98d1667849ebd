pub mod aggregate;
pub mod event;
pub mod location;
pub mod observation;

pub use aggregate::DailyAggregate;
pub use event::LocationEvent;
pub use location::Location;
pub use observation::{RawObservation, Reading};
