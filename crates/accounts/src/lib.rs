//! Account and session services for the EHC tracking system.
//!
//! Both services are constructed explicitly and passed by reference to
//! whichever layer needs them; there is no process-global state and no
//! lazy first-access initialization.
//!
//! These are demo-grade credentials: a single SHA-256 round over the
//! password, stored in a flat JSON file. Not a security boundary.

pub mod error;
pub mod session;
pub mod store;

pub use error::AccountError;
pub use session::{Session, SessionStore};
pub use store::AccountStore;
