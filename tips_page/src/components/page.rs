//! Page shell: heading block, banner and the card grid.

use super::TipCardList;
use crate::PageAssets;
use crate::types::{BANNER_ALT, PAGE_SUBTITLE, PAGE_TITLE};
use leptos::prelude::*;

/// The Energy Saving Tips page.
///
/// Takes no content input; `assets` only decides where images are loaded from.
#[component]
pub fn EnergySavingTipsPage(assets: PageAssets) -> impl IntoView {
    let banner_src = assets.banner_url();
    view! {
        <PageHeading />
        <Banner src=banner_src />
        <TipCardList assets=assets />
    }
}

/// Title and subtitle above the banner
#[component]
pub fn PageHeading() -> impl IntoView {
    view! {
        <div class="heading">
            <h2>{PAGE_TITLE}</h2>
            <p>{PAGE_SUBTITLE}</p>
        </div>
    }
}

/// Full-width banner image
#[component]
pub fn Banner(src: String) -> impl IntoView {
    view! {
        <img src=src class="EnergySavingTipsPicture" alt=BANNER_ALT />
    }
}
