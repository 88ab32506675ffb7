//! Built-in roster and word lists used on first launch and whenever the
//! persisted setup cannot be read.

use crate::types::{Category, Player, SetupState};

/// Key of the persisted setup entry
pub const STORAGE_KEY: &str = "imposter-game-setup-v1";

/// Emojis handed out to new players, cycling by roster size
pub const EMOJI_POOL: &[&str] = &["🦋", "🍓", "🌸", "🧁", "🐬", "🫧", "💐", "🎀"];

/// Emoji for categories added by the facilitator
pub const NEW_CATEGORY_EMOJI: &str = "💗";

pub fn emoji_for_new_player(roster_len: usize) -> &'static str {
    EMOJI_POOL[roster_len % EMOJI_POOL.len()]
}

fn player(id: &str, name: &str, emoji: &str, active: bool) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        active,
    }
}

fn category(id: &str, name: &str, emoji: &str, selected: bool, words: &[&str]) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        selected,
        words: words.iter().map(|w| w.to_string()).collect(),
    }
}

pub fn starter_players() -> Vec<Player> {
    vec![
        player("p1", "aayush", "🦋", true),
        player("p2", "sima", "🍓", true),
        player("p3", "sristi", "🌸", true),
        player("p4", "vv", "🧁", false),
    ]
}

pub fn starter_categories() -> Vec<Category> {
    vec![
        category(
            "c1",
            "Foods",
            "🍛",
            true,
            &[
                "momo", "titaura", "sel roti", "dal bhat", "gundruk", "yomari", "chatpate",
                "chiya", "bara", "kheer", "laphing", "thukpa", "pani puri", "chowmein",
                "alu tama",
            ],
        ),
        category(
            "c2",
            "Places",
            "🗺️",
            true,
            &[
                "Kathmandu",
                "Pokhara",
                "Bhaktapur",
                "Lalitpur",
                "Chitwan",
                "Lumbini",
                "Nagarkot",
                "Phewa Lake",
                "Durbar Square",
                "Swayambhu",
                "Boudha",
                "Thamel",
                "Everest Base Camp",
                "Mustang",
                "Bandipur",
            ],
        ),
        category(
            "c3",
            "Animals",
            "🐒",
            true,
            &[
                "red panda", "snow leopard", "yak", "tiger", "elephant", "monkey", "dog", "cat",
                "cow", "goat", "buffalo", "rabbit", "deer", "peacock",
            ],
        ),
        category(
            "c4",
            "Things",
            "🎒",
            false,
            &[
                "khukuri", "sari", "tika", "bangle", "backpack", "phone", "notebook", "camera",
                "headphones", "umbrella", "sunglasses", "water bottle", "lantern", "bicycle",
            ],
        ),
        category(
            "c5",
            "Activities",
            "🎉",
            false,
            &[
                "hiking", "dancing", "singing", "football", "cricket", "shopping", "picnic",
                "road trip", "temple visit", "cooking", "movie night", "study group", "karaoke",
                "festival",
            ],
        ),
        category(
            "c6",
            "Movies & Shows",
            "🎬",
            false,
            &[
                "3 Idiots",
                "Dangal",
                "RRR",
                "Kantara",
                "Lagaan",
                "Kuch Kuch Hota Hai",
                "Kabhi Khushi Kabhie Gham",
                "Titanic",
                "Harry Potter",
                "Spider-Man",
                "Stranger Things",
                "Money Heist",
                "Breaking Bad",
                "Friends",
            ],
        ),
    ]
}

pub fn default_setup() -> SetupState {
    SetupState {
        players: starter_players(),
        categories: starter_categories(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setup_can_start() {
        let setup = default_setup();
        let summary = setup.eligibility();
        assert!(summary.active_players >= 3);
        assert!(summary.eligible_categories >= 1);
        assert!(summary.can_start);
        assert_eq!(summary.total_players, 4);
        assert_eq!(summary.selected_categories, 3);
        assert_eq!(summary.words_available, 15 + 15 + 14);
        assert_eq!(summary.total_words, 15 + 15 + 14 + 14 + 14 + 14);
    }

    #[test]
    fn test_default_ids_are_unique() {
        let setup = default_setup();
        let mut ids: Vec<&str> = setup.players.iter().map(|p| p.id.as_str()).collect();
        ids.extend(setup.categories.iter().map(|c| c.id.as_str()));
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_emoji_pool_cycles() {
        assert_eq!(emoji_for_new_player(0), "🦋");
        assert_eq!(emoji_for_new_player(4), "🐬");
        assert_eq!(emoji_for_new_player(8), "🦋");
    }
}
