//! Leptos UI components for the tips page.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── EnergySavingTipsPage
//!     ├── PageHeading
//!     ├── Banner
//!     └── TipCardList
//!         └── TipCardView (one per entry of the tip table)
//! ```
//!
//! # Usage
//!
//! Components are normally used through [`crate::render_page`] or
//! [`crate::render_fragment`], but can be embedded in a larger view:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use energy_tips_page::{PageAssets, components::EnergySavingTipsPage};
//!
//! view! {
//!     <main class="host">
//!         <EnergySavingTipsPage assets=PageAssets::default() />
//!     </main>
//! }
//! ```

mod document;
mod page;
mod tip_card;

pub use document::PageDocument;
pub use page::{Banner, EnergySavingTipsPage, PageHeading};
pub use tip_card::{TipCardList, TipCardView};
