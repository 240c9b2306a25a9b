//! Noun phrases and list joining for descriptions.
//!
//! All player-visible descriptions are built here: indefinite-article
//! phrases with optional state-modifier prefixes, and the "a, b and c"
//! list rendering used for contents disclosure.

use crate::entity::{Entity, EntityKind, Role};
use crate::item::Item;

/// Chooses "an" before vowel-initial words, "a" otherwise.
#[must_use]
pub fn indefinite(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Joins phrases as prose: "nothing", "x", or "x, y and z".
#[must_use]
pub fn tell_list<I>(phrases: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let parts: Vec<String> = phrases.into_iter().collect();
    match parts.len() {
        0 => "nothing".to_string(),
        1 => parts.into_iter().next().unwrap_or_default(),
        n => format!("{} and {}", parts[..n - 1].join(", "), parts[n - 1]),
    }
}

/// Builds an article noun phrase for an entity, with its active state
/// prefixes (broken scenery reads "damaged", creatures carry their health
/// adjective). Passing an article overrides the indefinite choice.
///
/// The player is always described as "you".
#[must_use]
pub fn describe_entity(entity: &Entity, article: Option<&str>) -> String {
    if matches!(
        &entity.kind,
        EntityKind::Creature(c) if c.role == Role::Player
    ) {
        return "you".to_string();
    }

    let prefix = match &entity.kind {
        EntityKind::Creature(c) => c.vitals.level.adjective(),
        _ if entity.broken => "damaged",
        _ => "",
    };
    let chosen = article.unwrap_or_else(|| indefinite(&entity.name));

    let mut phrase = String::from(chosen);
    if !prefix.is_empty() {
        phrase.push(' ');
        phrase.push_str(prefix);
    }
    phrase.push(' ');
    phrase.push_str(&entity.name);
    phrase
}

/// Builds an article noun phrase for an item.
#[must_use]
pub fn describe_item(item: &Item, article: Option<&str>) -> String {
    let chosen = article.unwrap_or_else(|| indefinite(&item.name));
    format!("{chosen} {}", item.name)
}

/// Renders the contents of an item list as prose ("nothing" when empty).
#[must_use]
pub fn contents_phrase(items: &[Item]) -> String {
    tell_list(items.iter().map(|i| describe_item(i, None)))
}
