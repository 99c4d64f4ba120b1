//! Session controller, page routing and the JSON command protocol.

pub mod command;
pub mod page;
pub mod state;

pub use command::{dispatch, parse_command, ReadyEvent, SessionCommand, SessionResponse};
pub use page::{NavItem, Page, NAV_ITEMS};
pub use state::{Screen, Session};
