//! Entity types exposed over the API and their translation to/from the
//! remote store's untyped row representation.

pub mod errors;
pub mod item;
pub mod record;
pub mod user;
