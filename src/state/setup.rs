use super::AppState;
use crate::defaults::{emoji_for_new_player, NEW_CATEGORY_EMOJI};
use crate::error::{GameError, GameResult};
use crate::types::*;

fn trimmed(input: &str, what: &'static str) -> GameResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GameError::EmptyInput(what));
    }
    Ok(trimmed.to_string())
}

impl AppState {
    /// Get a copy of the current setup
    pub async fn get_setup(&self) -> SetupState {
        self.setup.read().await.clone()
    }

    /// Round checklist counts
    pub async fn eligibility(&self) -> EligibilitySummary {
        self.setup.read().await.eligibility()
    }

    pub async fn active_players(&self) -> Vec<Player> {
        self.setup.read().await.active_players()
    }

    pub async fn eligible_categories(&self) -> Vec<Category> {
        self.setup.read().await.eligible_categories()
    }

    /// Add an active player with the next emoji from the pool
    pub async fn add_player(&self, name: String) -> GameResult<Player> {
        let name = trimmed(&name, "Player name")?;
        let mut setup = self.setup.write().await;

        let player = Player {
            id: ulid::Ulid::new().to_string(),
            name,
            emoji: emoji_for_new_player(setup.players.len()).to_string(),
            active: true,
        };
        setup.players.push(player.clone());
        self.persist(&setup);

        tracing::info!("Added player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// Flip whether a player takes part in the next round
    pub async fn toggle_player(&self, player_id: &str) -> GameResult<Player> {
        let mut setup = self.setup.write().await;

        let player = setup
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
        player.active = !player.active;
        let player = player.clone();
        self.persist(&setup);

        tracing::debug!("Player {} active={}", player.id, player.active);
        Ok(player)
    }

    /// Remove a player from the roster. A live round keeps its snapshot.
    pub async fn remove_player(&self, player_id: &str) -> GameResult<Player> {
        let mut setup = self.setup.write().await;

        let index = setup
            .players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| GameError::PlayerNotFound(player_id.to_string()))?;
        let player = setup.players.remove(index);
        self.persist(&setup);

        tracing::info!("Removed player {} ({})", player.name, player.id);
        Ok(player)
    }

    /// Add a selected, empty category
    pub async fn add_category(&self, name: String) -> GameResult<Category> {
        let name = trimmed(&name, "Category name")?;
        let mut setup = self.setup.write().await;

        let category = Category {
            id: ulid::Ulid::new().to_string(),
            name,
            emoji: NEW_CATEGORY_EMOJI.to_string(),
            selected: true,
            words: Vec::new(),
        };
        setup.categories.push(category.clone());
        self.persist(&setup);

        tracing::info!("Added category {} ({})", category.name, category.id);
        Ok(category)
    }

    pub async fn toggle_category(&self, category_id: &str) -> GameResult<Category> {
        let mut setup = self.setup.write().await;

        let category = setup
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| GameError::CategoryNotFound(category_id.to_string()))?;
        category.selected = !category.selected;
        let category = category.clone();
        self.persist(&setup);

        tracing::debug!("Category {} selected={}", category.id, category.selected);
        Ok(category)
    }

    pub async fn remove_category(&self, category_id: &str) -> GameResult<Category> {
        let mut setup = self.setup.write().await;

        let index = setup
            .categories
            .iter()
            .position(|c| c.id == category_id)
            .ok_or_else(|| GameError::CategoryNotFound(category_id.to_string()))?;
        let category = setup.categories.remove(index);
        self.persist(&setup);

        tracing::info!("Removed category {} ({})", category.name, category.id);
        Ok(category)
    }

    /// Append a word to a category
    pub async fn add_word(&self, category_id: &str, word: String) -> GameResult<Category> {
        let word = trimmed(&word, "Word")?;
        let mut setup = self.setup.write().await;

        let category = setup
            .categories
            .iter_mut()
            .find(|c| c.id == category_id)
            .ok_or_else(|| GameError::CategoryNotFound(category_id.to_string()))?;
        category.words.push(word);
        let category = category.clone();
        self.persist(&setup);

        tracing::debug!("Category {} now has {} words", category.id, category.words.len());
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GameError;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_add_player_assigns_pool_emoji() {
        let state = AppState::in_memory();
        // four starter players, so the fifth emoji in the pool
        let player = state.add_player("dipa".to_string()).await.unwrap();
        assert_eq!(player.emoji, "🐬");
        assert_eq!(state.get_setup().await.players.len(), 5);
        assert_eq!(state.active_players().await.len(), 4);
    }

    #[tokio::test]
    async fn test_add_player_rejects_blank_name() {
        let state = AppState::in_memory();
        let result = state.add_player("   ".to_string()).await;
        assert_eq!(result.unwrap_err(), GameError::EmptyInput("Player name"));
        assert_eq!(state.get_setup().await.players.len(), 4);
    }

    #[tokio::test]
    async fn test_toggle_player() {
        let state = AppState::in_memory();
        let player = state.toggle_player("p4").await.unwrap();
        assert!(player.active);
        let player = state.toggle_player("p4").await.unwrap();
        assert!(!player.active);

        let result = state.toggle_player("nope").await;
        assert_eq!(result.unwrap_err(), GameError::PlayerNotFound("nope".to_string()));
    }

    #[tokio::test]
    async fn test_remove_player_by_id() {
        let state = AppState::in_memory();
        let removed = state.remove_player("p2").await.unwrap();
        assert_eq!(removed.name, "sima");

        let setup = state.get_setup().await;
        let ids: Vec<&str> = setup.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3", "p4"]);
        assert!(state.remove_player("p2").await.is_err());
    }

    #[tokio::test]
    async fn test_new_category_needs_words_to_be_eligible() {
        let state = AppState::in_memory();
        let before = state.eligibility().await.eligible_categories;

        let category = state.add_category(" Sweets ".to_string()).await.unwrap();
        assert_eq!(category.name, "Sweets");
        assert!(category.selected);
        assert!(category.words.is_empty());
        assert_eq!(state.eligibility().await.eligible_categories, before);

        let category = state
            .add_word(&category.id, " jeri ".to_string())
            .await
            .unwrap();
        assert_eq!(category.words, vec!["jeri"]);
        assert_eq!(state.eligibility().await.eligible_categories, before + 1);
    }

    #[tokio::test]
    async fn test_add_word_keeps_insertion_order() {
        let state = AppState::in_memory();
        state.add_word("c4", "kite".to_string()).await.unwrap();
        let category = state.add_word("c4", "drum".to_string()).await.unwrap();

        let n = category.words.len();
        assert_eq!(&category.words[n - 2..], &["kite".to_string(), "drum".to_string()]);
    }

    #[tokio::test]
    async fn test_add_word_errors() {
        let state = AppState::in_memory();
        assert_eq!(
            state.add_word("c1", "  ".to_string()).await.unwrap_err(),
            GameError::EmptyInput("Word")
        );
        assert_eq!(
            state.add_word("zz", "x".to_string()).await.unwrap_err(),
            GameError::CategoryNotFound("zz".to_string())
        );
    }

    #[tokio::test]
    async fn test_toggle_and_remove_category() {
        let state = AppState::in_memory();
        let category = state.toggle_category("c1").await.unwrap();
        assert!(!category.selected);
        assert_eq!(state.eligible_categories().await.len(), 2);

        state.remove_category("c2").await.unwrap();
        assert_eq!(state.eligible_categories().await.len(), 1);
        assert!(state.toggle_category("c2").await.is_err());
    }
}
