//! Locale resolution, localized metadata and static per-locale page
//! generation for the Haru website.

pub mod config;
pub mod html;
pub mod i18n;
pub mod localizer;
pub mod meta;
pub mod page;
