pub mod account;
pub mod api;
pub mod film_list;
pub mod genre_wheel;
pub mod pagination;
pub mod recommendations;
pub mod wheel;

pub use account::AccountService;
pub use film_list::FilmList;
pub use genre_wheel::{GenreWheel, SpinResult};
pub use pagination::{LoadOutcome, LoadRejection, PageLoader, ScrollMetrics};
pub use wheel::{Wheel, WheelState};
