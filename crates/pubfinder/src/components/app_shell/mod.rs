//! App shell components: AppBar, ErrorBanner
//!
//! These components stay mounted while the user moves between the two pages.

mod appbar;
mod error_banner;

pub use appbar::AppBar;
pub use error_banner::ErrorBanner;
