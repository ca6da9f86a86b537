//! Write the tips page to disk.
//!
//! Run with: `cargo run --example write_page`

use energy_tips_page::{render_page, PageAssets};

fn main() {
    let assets = PageAssets::default();

    let html = render_page(&assets);

    let output_path = "energy_saving_tips.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("Images expected under: {}/", assets.base_url);
    println!("HTML size: {} bytes", html.len());
}
