//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod movie_repo;
pub mod notification_repo;
pub mod tv_show_repo;
pub mod user_repo;
pub mod watchlist_repo;

pub use movie_repo::MovieRepo;
pub use notification_repo::NotificationRepo;
pub use tv_show_repo::TvShowRepo;
pub use user_repo::UserRepo;
pub use watchlist_repo::WatchlistRepo;
