//! Shared UI crate for Keyscore. Views and presentation logic live here;
//! the platform crates only add routing and launch configuration.

pub mod admin;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application header (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub mod icons;
}
