mod alert_poller;
pub mod events;
mod home_screen;
mod home_state;
mod plant_list_fetcher;
mod scroll;

pub use alert_poller::*;
pub use home_screen::*;
pub use home_state::*;
pub use plant_list_fetcher::*;
pub use scroll::*;
