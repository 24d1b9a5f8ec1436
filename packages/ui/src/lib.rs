//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

mod app_state;
pub use app_state::{use_app_state, use_services, AppStateProvider, Services};

mod generator;
pub use generator::ConfiguredGenerator;

mod notice;
pub use notice::{use_notice, Notice, NoticeOverlay};

mod header;
pub use header::Header;

mod user_menu;
pub use user_menu::UserMenu;

#[cfg(target_arch = "wasm32")]
mod outside_click;
