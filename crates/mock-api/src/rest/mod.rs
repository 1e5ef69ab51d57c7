mod alert_muting;
mod health;
mod router;
mod server;

pub use router::{router, AppState};
pub use server::spawn;
