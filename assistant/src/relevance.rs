use crate::models::*;

/// Picks the dishes a question is about.
pub trait RelevanceStrategy: Send + Sync {
    fn select<'m>(&self, question: &str, menu: &'m Menu) -> Vec<&'m Dish>;
}

/// Substring match on the dish name and on each word of it.
///
/// Short words in a name ("the", "a") match almost any question. When nothing
/// matches, the whole menu is returned so the prompt always has dishes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFilter;

impl KeywordFilter {
    fn matches(question: &str, dish: &Dish) -> bool {
        let name = dish.name().to_lowercase();
        question.contains(&name) || name.split_whitespace().any(|word| question.contains(word))
    }
}

impl RelevanceStrategy for KeywordFilter {
    fn select<'m>(&self, question: &str, menu: &'m Menu) -> Vec<&'m Dish> {
        let question = question.to_lowercase();

        let relevant: Vec<&Dish> = menu
            .iter()
            .filter(|dish| Self::matches(&question, dish))
            .collect();

        if relevant.is_empty() {
            log::debug!("No dish matched the question, using full menu");
            menu.iter().collect()
        } else {
            log::debug!("Found {} relevant dishes", relevant.len());
            relevant
        }
    }
}
