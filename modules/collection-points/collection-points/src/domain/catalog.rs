//! Reference list of collectible waste categories.
//!
//! Seeded into the `items` table by a migration and never changed at runtime.
//! Each entry carries its SVG icon, installed next to uploaded images.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: i32,
    pub title: &'static str,
    /// Icon file name under the uploads directory
    pub image: &'static str,
    pub icon_svg: &'static str,
}

pub const ITEM_CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        id: 1,
        title: "L\u{e2}mpadas",
        image: "lampadas.svg",
        icon_svg: include_str!("../../assets/items/lampadas.svg"),
    },
    CatalogEntry {
        id: 2,
        title: "Pilhas e Baterias",
        image: "baterias.svg",
        icon_svg: include_str!("../../assets/items/baterias.svg"),
    },
    CatalogEntry {
        id: 3,
        title: "Pap\u{e9}is e Papel\u{e3}o",
        image: "papeis-papelao.svg",
        icon_svg: include_str!("../../assets/items/papeis-papelao.svg"),
    },
    CatalogEntry {
        id: 4,
        title: "Res\u{ed}duos Eletr\u{f4}nicos",
        image: "eletronicos.svg",
        icon_svg: include_str!("../../assets/items/eletronicos.svg"),
    },
    CatalogEntry {
        id: 5,
        title: "Res\u{ed}duos Org\u{e2}nicos",
        image: "organicos.svg",
        icon_svg: include_str!("../../assets/items/organicos.svg"),
    },
    CatalogEntry {
        id: 6,
        title: "\u{d3}leo de Cozinha",
        image: "oleo.svg",
        icon_svg: include_str!("../../assets/items/oleo.svg"),
    },
];
