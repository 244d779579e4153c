//! Built-in storefront data used when no catalog file is configured.

use tracing::instrument;

use crate::{CardOffer, ChessRole, PieceRole, SelectableItem};

fn piece(name: &str, role: ChessRole, description: &str) -> PieceRole {
    PieceRole::new(name.to_string(), description.to_string(), role)
}

/// The six playable characters.
#[instrument]
pub fn characters() -> Vec<SelectableItem> {
    vec![
        SelectableItem::new("zeus", "Zeus", "", "#3b82f6"),
        SelectableItem::new("athena", "Athena", "", "#2dd4bf"),
        SelectableItem::new("ares", "Ares", "", "#ef4444"),
        SelectableItem::new("apollo", "Apollo", "", "#facc15"),
        SelectableItem::new("hades", "Hades", "", "#6b21a8"),
        SelectableItem::new("poseidon", "Poseidon", "", "#60a5fa"),
    ]
}

/// The four chess sets on sale.
#[instrument]
pub fn cards() -> Vec<CardOffer> {
    use ChessRole::*;

    vec![
        CardOffer::new(
            1,
            "TRADITIONAL:",
            "Free",
            "Classic chess set with traditional black pieces featuring Greek mythology",
            vec![
                piece("Zeus", King, "The king of the gods, ruler of Mount Olympus and the sky, thunder and lightning."),
                piece("Hera", Queen, "Queen of the gods and goddess of marriage, women, childbirth, and family."),
                piece("Ares", Rook, "God of war, bloodshed, and violence. Represents the brutal and untamed aspects of war."),
                piece("Athena", Bishop, "Goddess of wisdom, courage, inspiration, civilization, law and justice, strategic warfare."),
                piece("Hermes", Knight, "God of boundaries, travel, communication, trade, language, and writing."),
                piece("Apollo", Pawn, "God of music, arts, knowledge, healing, plague, prophecy, poetry, manly beauty, and archery."),
            ],
        )
        .with_theme_color("#374151"),
        CardOffer::new(
            2,
            "TRADITIONAL:",
            "Free",
            "Elegant chess set with pristine white pieces featuring Norse mythology",
            vec![
                piece("Odin", King, "The Allfather of the gods and the ruler of Asgard. Associated with wisdom, healing, death, royalty, and poetry."),
                piece("Frigg", Queen, "The wife of Odin and the queen of Asgard. Goddess of foresight and wisdom."),
                piece("Thor", Rook, "God of thunder, lightning, storms, oak trees, strength, hallowing, and fertility."),
                piece("Heimdall", Bishop, "The ever-vigilant guardian of the Bifröst, the rainbow bridge that connects Midgard to Asgard."),
                piece("Loki", Knight, "A cunning trickster who can shape-shift. Although Loki is the father of many monsters, he helped the gods on many occasions."),
                piece("Valkyrie", Pawn, "Female figures who choose those who may die in battle and those who may live."),
            ],
        )
        .with_theme_color("#e5e7eb"),
        CardOffer::new(
            3,
            "JACKED",
            "£5.99",
            "High-energy chess set with powerful muscular pieces featuring Egyptian mythology",
            vec![
                piece("Ra", King, "The sun god and creator of all life. One of the most important deities in ancient Egyptian religion."),
                piece("Isis", Queen, "Goddess of magic, healing, and protection. Wife and sister of Osiris and mother of Horus."),
                piece("Horus", Rook, "God of the sky, war and hunting. Often depicted as a falcon or as a man with a falcon head."),
                piece("Thoth", Bishop, "God of wisdom, writing, hieroglyphs, science, magic, art, and judgment."),
                piece("Anubis", Knight, "God of mummification and the afterlife. Depicted as a jackal-headed man."),
                piece("Bastet", Pawn, "Goddess of home, fertility, childbirth, women's secrets and cats."),
            ],
        )
        .with_title_image("/cardtitles/black.png")
        .with_theme_color("#f59e0b"),
        CardOffer::new(
            4,
            "DIVINE",
            "£7.99",
            "Mystical chess set with divine pieces featuring Hindu mythology",
            vec![
                piece("Brahma", King, "The creator god in Hinduism, responsible for the creation of the universe and all beings."),
                piece("Saraswati", Queen, "The goddess of knowledge, music, art, wisdom, and learning. Consort of Brahma."),
                piece("Vishnu", Rook, "The preserver god who protects the universe from being destroyed and restores dharma."),
                piece("Shiva", Bishop, "The destroyer god who destroys in order to recreate, bringing about change in the universe."),
                piece("Ganesha", Knight, "The elephant-headed god of beginnings, remover of obstacles, patron of arts and sciences."),
                piece("Indra", Pawn, "The king of the heavens, god of rain, lightning, and thunder. Wields the thunderbolt Vajra."),
            ],
        )
        .with_title_image("/cardtitles/black.png")
        .with_theme_color("#6366f1"),
    ]
}
