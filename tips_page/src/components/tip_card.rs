//! Tip card grid

use crate::PageAssets;
use crate::types::{TipCard, tip_cards};
use leptos::prelude::*;

/// Responsive grid with one card per entry of the tip table.
#[component]
pub fn TipCardList(assets: PageAssets) -> impl IntoView {
    view! {
        <section class="tips-grid">
            {tip_cards().iter().map(|card| {
                let image_src = assets.card_image_url(card);
                view! {
                    <div class="tips-grid-item">
                        <TipCardView card=*card image_src=image_src />
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

/// A single card: fixed-height image, title line and body paragraph.
#[component]
pub fn TipCardView(card: TipCard, image_src: String) -> impl IntoView {
    view! {
        <article class="tip-card">
            <img class="tip-card-media" src=image_src alt=card.alt />
            <div class="tip-card-content">
                <h5 class="tip-card-title">{card.title}</h5>
                <p class="tip-card-body">{card.body}</p>
            </div>
        </article>
    }
}
