mod about;
mod activity_grid;
mod landing;
mod nav;
pub(crate) mod style;
mod video;

pub use about::About;
pub use activity_grid::{ActivityGrid, ActivityGridProps};
pub use landing::{Landing, LandingProps};
pub use nav::{NavBar, NavBarProps};
pub use video::{VideoPlayer, VideoPlayerProps};
