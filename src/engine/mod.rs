mod core;
mod messages;

pub use self::core::OddsEngine;

pub use messages::RecomputeTrigger;
