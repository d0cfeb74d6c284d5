pub mod health;
pub mod links;
pub mod redirect;

pub use health::{AppStartTime, HealthService};
pub use links::LinkService;
pub use redirect::RedirectService;
