//! Page data: the heading strings, the image identifiers and the tip table.
//!
//! Everything here is `'static` and immutable. The card order is part of the
//! content (heating basics, then the furnace pairing, then solar, then
//! emissions) and is never changed at runtime.
//!
//! # Example
//!
//! ```rust
//! use energy_tips_page::types::{tip_cards, AssetRef};
//!
//! let cards = tip_cards();
//! assert_eq!(cards.len(), 4);
//! assert_eq!(cards[0].image, AssetRef::HeatingPicture);
//! assert_eq!(AssetRef::Banner.file_name(), "EnergySavingTipsPicture.jpg");
//! ```

use serde::Serialize;

/// Page heading title.
pub const PAGE_TITLE: &str = "Energy Saving Tips";

/// Line shown under the heading title.
pub const PAGE_SUBTITLE: &str =
    "Welcome to our Energy Saving Tips page! Find quick Energy Saving Tips below.";

/// Alt text of the banner image.
pub const BANNER_ALT: &str = "EnergySavingTipsPicture";

/// Build-time identifier of one of the five page images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetRef {
    /// Full-width banner above the card grid
    Banner,
    /// Heat pump in cold temperatures
    HeatingPicture,
    /// High-efficiency furnace
    FurnacePicture,
    /// Solar PV system
    SolarPicture,
    /// GHG emissions
    EmissionsPicture,
}

impl AssetRef {
    /// All page images, banner first, then the cards in display order.
    pub const ALL: [AssetRef; 5] = [
        AssetRef::Banner,
        AssetRef::HeatingPicture,
        AssetRef::FurnacePicture,
        AssetRef::SolarPicture,
        AssetRef::EmissionsPicture,
    ];

    /// File name the image is published under.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetRef::Banner => "EnergySavingTipsPicture.jpg",
            AssetRef::HeatingPicture => "EnergySavingTipsPic1.png",
            AssetRef::FurnacePicture => "EnergySavingTipsPic2.png",
            AssetRef::SolarPicture => "EnergySavingTipsPic3.png",
            AssetRef::EmissionsPicture => "EnergySavingTipsPic4.png",
        }
    }
}

/// One tip: an image, a title line and a body paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TipCard {
    /// Image shown at the top of the card
    pub image: AssetRef,
    /// Alt text for the card image
    pub alt: &'static str,
    /// Card title
    pub title: &'static str,
    /// Card body paragraph
    pub body: &'static str,
}

static TIP_CARDS: [TipCard; 4] = [
    TipCard {
        image: AssetRef::HeatingPicture,
        alt: "Heating your Home",
        title: "Heating your Home in Cold Temperatures",
        body: "Heat pumps can keep your home warm even in subzero temperatures. \
               Contrary to popular belief, they work efficiently in cold climates. \
               In Calgary, heating your home with an air-source heat pump below 10°C may lead to \
               higher utility bills compared to using a high-efficiency natural gas furnace. \
               This is because the blended rate of electricity is currently higher than natural gas \
               per unit of energy consumed. \
               Heat pumps are also notable for their environmental benefits, emitting less carbon \
               dioxide compared to traditional heating systems. \
               This makes them a greener choice for homeowners looking to reduce their carbon footprint.",
    },
    TipCard {
        image: AssetRef::FurnacePicture,
        alt: "Efficiency Furnace",
        title: "Pairing your Heat Pump with a High Efficiency Furnace",
        body: "Unless your home has been built with thick interior and exterior insulation and has \
               been professionally air sealed, it is wise to ensure your home has a source of natural \
               gas heating for those very cold winter days and nights. \
               Natural gas heating systems, while traditional, are known for their ability to provide \
               consistent and powerful heating quickly, which can be crucial during extreme cold snaps. \
               They also tend to have lower operational costs in many areas compared to standalone \
               furnaces when paired with a heatpump, depending on local gas prices.",
    },
    TipCard {
        image: AssetRef::SolarPicture,
        alt: "Solar System",
        title: "Pairing your Heat Pump with a Solar Photovoltaic System",
        body: "Installing a solar PV system along with your heat pump will allow you to generate \
               electricity credits that you can use in the winter to offset the cost of heating your \
               home with an air-source heat pump. \
               This will allow you to operate your heat pump at lower exterior temperatures and at a \
               lower cost. Furthermore, by leveraging solar power, you're tapping into a renewable \
               energy source that reduces your dependency on the grid and minimizes your carbon footprint. \
               In addition to long-term savings on utility bills, this setup may qualify you for \
               various government incentives.",
    },
    TipCard {
        image: AssetRef::EmissionsPicture,
        alt: "GHG Emissions",
        title: "GHG Emissions from Heat Pumps and Furnaces",
        body: "60% of Alberta’s electricity is generated by natural gas power plants. Because of this, \
               the GHG emissions created by a heat pump can be more than emissions created by a natural \
               gas furnace at lower temperatures. \
               As it gets colder outside, the heat pump must work harder to create heat, reducing its \
               efficiency, and causing it to draw more electricity from the grid. \
               As cleaner sources of electricity are added to Alberta’s electricity system such as wind, \
               solar, hydro, and nuclear, the GHG emissions created by your heat pump will go down.",
    },
];

/// The tip table, in display order.
pub fn tip_cards() -> &'static [TipCard] {
    &TIP_CARDS
}

/// The tip table as pretty-printed JSON.
pub fn tip_cards_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(tip_cards())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_follow_narrative_order() {
        let titles: Vec<_> = tip_cards().iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            [
                "Heating your Home in Cold Temperatures",
                "Pairing your Heat Pump with a High Efficiency Furnace",
                "Pairing your Heat Pump with a Solar Photovoltaic System",
                "GHG Emissions from Heat Pumps and Furnaces",
            ]
        );
    }

    #[test]
    fn bodies_are_single_spaced_paragraphs() {
        for card in tip_cards() {
            assert!(!card.body.is_empty());
            assert!(!card.alt.is_empty());
            assert!(!card.body.contains("  "), "double space in {:?}", card.title);
            assert!(!card.body.contains('\n'));
            assert_eq!(card.body, card.body.trim());
        }
    }

    #[test]
    fn each_card_has_its_own_image() {
        let images: Vec<_> = tip_cards().iter().map(|c| c.image).collect();
        assert_eq!(images, &AssetRef::ALL[1..]);
        assert!(!images.contains(&AssetRef::Banner));
    }

    #[test]
    fn image_file_names_are_distinct() {
        let mut names: Vec<_> = AssetRef::ALL.iter().map(|a| a.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AssetRef::ALL.len());
    }

    #[test]
    fn json_table_lists_cards() {
        let json = tip_cards_json().expect("serialize table");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("parse table");
        let cards = parsed.as_array().expect("array");
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[3]["image"], "emissions_picture");
        assert_eq!(cards[1]["alt"], "Efficiency Furnace");
    }
}
