//! State Management
//!
//! Global reactive state and the session guard for protected routes.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState};
pub use session::{resolve_session, Protected};
