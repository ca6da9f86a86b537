//! Root document component - the complete HTML page

use super::EnergySavingTipsPage;
use crate::PageAssets;
use crate::styles::page_css;
use crate::types::PAGE_TITLE;
use leptos::prelude::*;

/// The complete HTML document for the page
#[component]
pub fn PageDocument(assets: PageAssets) -> impl IntoView {
    let styles = if assets.inline_css {
        view! { <style>{page_css()}</style> }.into_any()
    } else {
        view! { "" }.into_any()
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{PAGE_TITLE}</title>
                {styles}
            </head>
            <body>
                <EnergySavingTipsPage assets=assets />
            </body>
        </html>
    }
}
