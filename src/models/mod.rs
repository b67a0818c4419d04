pub mod mode;
pub mod session;

pub use mode::Mode;
pub use session::SessionRecord;
