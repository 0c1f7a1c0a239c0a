pub mod envelope;
pub mod event;
pub mod record;

pub use envelope::*;
pub use event::*;
pub use record::*;
