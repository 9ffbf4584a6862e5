use log::debug;

use crate::models::{Draft, FormState, RecipeRequest};
use crate::services::storage::{load_json, save_json, KeyValueStore};

pub const KEY_DRAFT: &str = "recipe_draft_v1";
pub const DEFAULT_SERVINGS: u32 = 2;

/// Parses the leading integer of `input`; anything not positive falls back to [`DEFAULT_SERVINGS`].
/// Counts beyond `u32::MAX` saturate.
pub fn parse_servings(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return DEFAULT_SERVINGS;
    }
    // Only digits remain, so a parse failure is an overflow.
    match digits.parse::<u32>() {
        Ok(0) => DEFAULT_SERVINGS,
        Ok(n) => n,
        Err(_) => u32::MAX,
    }
}

/// Request for the generation service built from the live form.
pub fn request_from_form(form: &FormState) -> RecipeRequest {
    RecipeRequest {
        prompt: form.prompt.trim().to_string(),
        difficulty: form.difficulty.clone(),
        wishes: form.wishes.trim().to_string(),
        servings: parse_servings(&form.servings),
    }
}

/// Owns the single draft slot.
pub struct DraftManager<S> {
    storage: S,
}

impl<S: KeyValueStore> DraftManager<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stores the form wholesale, or drops the draft when the prompt is blank.
    pub fn save(&self, form: &FormState) {
        if form.prompt.trim().is_empty() {
            self.clear();
            return;
        }
        let draft = Draft {
            prompt: form.prompt.clone(),
            difficulty: form.difficulty.clone(),
            wishes: form.wishes.clone(),
            servings: parse_servings(&form.servings),
        };
        save_json(&self.storage, KEY_DRAFT, &draft);
    }

    pub fn clear(&self) {
        self.storage.remove(KEY_DRAFT);
    }

    pub fn load(&self) -> Option<Draft> {
        load_json(&self.storage, KEY_DRAFT)
    }

    /// Offers the stored draft for restoring, if there is one.
    pub fn check_and_offer(&self) -> Option<DraftOffer<'_, S>> {
        let draft = self.load()?;
        debug!("offering saved draft ({} chars)", draft.prompt.len());
        Some(DraftOffer { manager: self, draft })
    }
}

/// A pending restore/dismiss decision. Consuming it withdraws the offer.
pub struct DraftOffer<'a, S> {
    manager: &'a DraftManager<S>,
    draft: Draft,
}

impl<'a, S: KeyValueStore> DraftOffer<'a, S> {
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Copies the draft into `form`. The stored draft stays in place.
    pub fn restore(self, form: &mut FormState) {
        form.prompt = self.draft.prompt;
        form.difficulty = self.draft.difficulty;
        form.wishes = self.draft.wishes;
        form.servings = self.draft.servings.to_string();
    }

    pub fn dismiss(self) {
        self.manager.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn form(prompt: &str, servings: &str) -> FormState {
        FormState {
            prompt: prompt.to_string(),
            difficulty: "easy".to_string(),
            wishes: "vegetarisch".to_string(),
            servings: servings.to_string(),
        }
    }

    #[test]
    fn servings_parse_like_an_integer_prefix() {
        assert_eq!(parse_servings("4"), 4);
        assert_eq!(parse_servings("  6 Personen"), 6);
        assert_eq!(parse_servings("+3"), 3);
        assert_eq!(parse_servings(""), DEFAULT_SERVINGS);
        assert_eq!(parse_servings("viele"), DEFAULT_SERVINGS);
        assert_eq!(parse_servings("0"), DEFAULT_SERVINGS);
        assert_eq!(parse_servings("-5"), DEFAULT_SERVINGS);
        assert_eq!(parse_servings("-0"), DEFAULT_SERVINGS);
    }

    #[test]
    fn huge_servings_saturate() {
        assert_eq!(parse_servings("99999999999"), u32::MAX);
        assert_eq!(parse_servings("4294967295"), u32::MAX);
        assert_eq!(parse_servings("000012"), 12);
    }

    #[test]
    fn request_uses_parsed_servings() {
        let request = request_from_form(&form(" Gulasch ", "5 Leute"));
        assert_eq!(request.prompt, "Gulasch");
        assert_eq!(request.servings, 5);
        assert_eq!(request.difficulty, "easy");
    }

    #[test]
    fn restore_round_trips_the_form() {
        let storage = MemoryStorage::new();
        let drafts = DraftManager::new(&storage);
        let saved = form("X", "4");
        drafts.save(&saved);

        let mut live = FormState::default();
        drafts.check_and_offer().expect("draft offered").restore(&mut live);

        assert_eq!(live, saved);
        assert!(drafts.load().is_some());
    }

    #[test]
    fn unparsable_servings_are_stored_as_default() {
        let storage = MemoryStorage::new();
        let drafts = DraftManager::new(&storage);
        drafts.save(&form("Linseneintopf", "abc"));

        let draft = drafts.load().expect("draft stored");
        assert_eq!(draft.servings, DEFAULT_SERVINGS);

        let mut live = FormState::default();
        drafts.check_and_offer().expect("draft offered").restore(&mut live);
        assert_eq!(live.servings, "2");
    }

    #[test]
    fn blank_prompt_deletes_the_draft() {
        let storage = MemoryStorage::new();
        let drafts = DraftManager::new(&storage);
        drafts.save(&form("Lasagne", "4"));
        drafts.save(&form("   ", "4"));

        assert!(drafts.check_and_offer().is_none());
        assert_eq!(storage.get(KEY_DRAFT), None);
    }

    #[test]
    fn save_overwrites_previous_draft() {
        let storage = MemoryStorage::new();
        let drafts = DraftManager::new(&storage);
        drafts.save(&form("Lasagne", "4"));
        drafts.save(&form("Pizza", "3"));

        let draft = drafts.load().expect("draft stored");
        assert_eq!(draft.prompt, "Pizza");
        assert_eq!(draft.servings, 3);
    }

    #[test]
    fn dismiss_clears_the_slot() {
        let storage = MemoryStorage::new();
        let drafts = DraftManager::new(&storage);
        drafts.save(&form("Lasagne", "4"));

        let offer = drafts.check_and_offer().expect("draft offered");
        assert_eq!(offer.draft().prompt, "Lasagne");
        offer.dismiss();

        assert!(drafts.check_and_offer().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let storage = MemoryStorage::new();
        let drafts = DraftManager::new(&storage);
        drafts.clear();
        drafts.clear();
        assert!(drafts.load().is_none());
    }
}
