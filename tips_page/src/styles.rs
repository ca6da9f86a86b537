//! CSS for the tips page.
//!
//! The card grid is responsive: one column on narrow viewports, up to five
//! columns on wide ones. Column counts come from [`GRID_BREAKPOINTS`] so the
//! stylesheet and [`columns_at`] can never disagree.
//!
//! # Customization
//!
//! ```rust
//! use energy_tips_page::styles::page_css;
//!
//! let my_css = ".tip-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", page_css(), my_css);
//! assert!(combined.contains(".tips-grid"));
//! ```

use crate::types::tip_cards;

/// Minimum viewport width (px) and the number of grid columns from that width up.
///
/// Mirrors the usual `xs`/`md` grid breakpoints: full width below 900px,
/// five across at 900px and above.
pub const GRID_BREAKPOINTS: &[(u32, usize)] = &[(0, 1), (900, 5)];

/// Gap between cards in px.
pub const GRID_GAP_PX: u32 = 32;

/// Widest a card may grow, in px.
pub const CARD_MAX_WIDTH_PX: u32 = 345;
/// Fixed card height in px; longer bodies scroll.
pub const CARD_HEIGHT_PX: u32 = 600;
/// Height of the image at the top of each card, in px.
pub const CARD_IMAGE_HEIGHT_PX: u32 = 150;

/// Columns the card grid shows at `viewport_px`, bounded by the card count.
pub fn columns_at(viewport_px: u32) -> usize {
    let columns = GRID_BREAKPOINTS
        .iter()
        .rev()
        .find(|(min_width, _)| viewport_px >= *min_width)
        .map(|(_, columns)| *columns)
        .unwrap_or(1);
    columns.min(tip_cards().len())
}

/// Base styles: heading, banner and card chrome.
pub const BASE_CSS: &str = r#"
:root {
    --tips-bg: #ffffff;
    --tips-text: rgba(0, 0, 0, 0.87);
    --tips-text-secondary: rgba(0, 0, 0, 0.6);
    --tips-card-shadow: 0 2px 1px -1px rgba(0,0,0,0.2), 0 1px 1px 0 rgba(0,0,0,0.14), 0 1px 3px 0 rgba(0,0,0,0.12);
    --tips-font: "Roboto", "Helvetica", "Arial", sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--tips-bg);
    color: var(--tips-text);
    font-family: var(--tips-font);
}

.heading {
    text-align: center;
    padding: 1.5rem 1rem 0.5rem;
}

.heading h2 {
    margin: 0 0 0.5rem;
    font-size: 2rem;
    font-weight: 500;
}

.heading p {
    margin: 0;
    color: var(--tips-text-secondary);
}

.EnergySavingTipsPicture {
    display: block;
    width: 100%;
    height: auto;
}

.tip-card {
    display: flex;
    flex-direction: column;
    overflow: hidden;
    border-radius: 4px;
    background: var(--tips-bg);
    box-shadow: var(--tips-card-shadow);
}

.tip-card-media {
    display: block;
    width: 100%;
    object-fit: cover;
}

.tip-card-content {
    padding: 16px;
    overflow-y: auto;
}

.tip-card-title {
    margin: 0 0 0.35em;
    font-size: 1.5rem;
    font-weight: 400;
    line-height: 1.334;
}

.tip-card-body {
    margin: 0;
    font-size: 0.875rem;
    line-height: 1.43;
    color: var(--tips-text-secondary);
}
"#;

/// Grid and card sizing rules generated from the breakpoint table.
pub fn grid_css() -> String {
    let mut css = format!(
        ".tips-grid {{\n    display: flex;\n    flex-wrap: wrap;\n    justify-content: center;\n    gap: {gap}px;\n    margin: 1rem 0 2rem;\n    padding: 0 {gap}px;\n}}\n\n\
         .tip-card {{\n    max-width: {max_w}px;\n    height: {height}px;\n    margin: 0 auto;\n}}\n\n\
         .tip-card-media {{\n    height: {img_h}px;\n}}\n",
        gap = GRID_GAP_PX,
        max_w = CARD_MAX_WIDTH_PX,
        height = CARD_HEIGHT_PX,
        img_h = CARD_IMAGE_HEIGHT_PX,
    );

    for (min_width, columns) in GRID_BREAKPOINTS {
        // Each row holds `columns` items and `columns - 1` gaps.
        let item_rule = format!(
            ".tips-grid-item {{\n    flex: 0 0 calc((100% - {gaps}px) / {columns});\n}}\n",
            gaps = GRID_GAP_PX as usize * (columns - 1),
        );
        if *min_width == 0 {
            css.push('\n');
            css.push_str(&item_rule);
        } else {
            css.push_str(&format!(
                "\n@media (min-width: {min_width}px) {{\n{item_rule}}}\n"
            ));
        }
    }

    css
}

/// Complete stylesheet for the page.
pub fn page_css() -> String {
    format!("{}\n{}", BASE_CSS, grid_css())
}
