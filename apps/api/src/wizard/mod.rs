// View Router: the six-screen wizard, its submission task, and the HTTP
// handlers that drive it.

pub mod handlers;
pub mod session;
pub mod submission;

pub use session::{Screen, Session, WizardError};
pub use submission::submit;
