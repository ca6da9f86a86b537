//! # energy-tips-page
//!
//! Leptos SSR renderer for the static Energy Saving Tips page.
//!
//! The page is a heading, a full-width banner and a grid of four tip cards
//! (heat pumps in the cold, pairing with a high-efficiency furnace, pairing
//! with solar PV, and GHG emissions). All content is compiled in; the only
//! startup input is [`PageAssets`], which says where the five images live.
//!
//! ## Quick Start
//!
//! ```rust
//! use energy_tips_page::{render_page, PageAssets};
//!
//! let html = render_page(&PageAssets::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Energy Saving Tips"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - heading strings, image identifiers and the tip table
//! - [`components`] - Leptos UI components
//! - [`styles`] - stylesheet and responsive grid breakpoints
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through the `RenderHtml` trait, with no reactive runtime
//! and no hydration:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let html: String = view! { <EnergySavingTipsPage assets=assets /> }.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::{EnergySavingTipsPage, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{AssetRef, TipCard};

pub use types::tip_cards;

/// Render the complete HTML document for the page.
///
/// Output is deterministic: the same `assets` always give the same string.
///
/// # Example
///
/// ```rust
/// use energy_tips_page::{render_page, PageAssets};
///
/// let assets = PageAssets { base_url: "/static/img".into(), ..Default::default() };
/// let html = render_page(&assets);
/// assert!(html.contains("/static/img/EnergySavingTipsPicture.jpg"));
/// ```
pub fn render_page(assets: &PageAssets) -> String {
    let doc = view! { <PageDocument assets=assets.clone() /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the page body (heading, banner and card grid), for embedding
/// in a host document.
pub fn render_fragment(assets: &PageAssets) -> String {
    view! { <EnergySavingTipsPage assets=assets.clone() /> }.to_html()
}

/// Where the page images are published.
///
/// Image URLs are `{base_url}/{file_name}`. An empty base yields bare file
/// names, which resolve relative to the page.
///
/// # Example
///
/// ```rust
/// use energy_tips_page::{PageAssets, types::AssetRef};
///
/// let assets = PageAssets { base_url: "https://cdn.example.org/tips/".into(), inline_css: false };
/// assert_eq!(
///     assets.url_for(AssetRef::Banner),
///     "https://cdn.example.org/tips/EnergySavingTipsPicture.jpg"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageAssets {
    /// URL prefix for the image files
    pub base_url: String,
    /// Embed the stylesheet in a `<style>` element of the document head
    pub inline_css: bool,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            base_url: "assets".into(),
            inline_css: true,
        }
    }
}

impl PageAssets {
    /// URL of one page image.
    pub fn url_for(&self, asset: AssetRef) -> String {
        if self.base_url.is_empty() {
            return asset.file_name().to_string();
        }
        format!("{}/{}", self.base_url.trim_end_matches('/'), asset.file_name())
    }

    /// URL of the banner image.
    pub fn banner_url(&self) -> String {
        self.url_for(AssetRef::Banner)
    }

    /// URL of a card's image.
    pub fn card_image_url(&self, card: &TipCard) -> String {
        self.url_for(card.image)
    }
}
