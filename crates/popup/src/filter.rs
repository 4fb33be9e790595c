//! Search-text filtering of the per-frame item sequence.

use frizbee::{Config, match_list};

use crate::flags::PopupFlags;

/// Inputs at or above this size get frizbee's prefilter and a typo budget.
pub const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Run `filter` over `items` when the search bar is enabled and has text.
///
/// Otherwise the items pass through unchanged and `filter` is never called.
pub fn apply<T, F>(flags: PopupFlags, items: Vec<T>, query: &str, filter: F) -> Vec<T>
where
	F: FnOnce(Vec<T>, &str) -> Vec<T>,
{
	if flags.contains(PopupFlags::SEARCH_BAR) && !query.is_empty() {
		filter(items, query)
	} else {
		items
	}
}

/// Builds fuzzy matching options for the provided query and input size.
#[must_use]
pub fn config_for_query(query: &str, item_count: usize) -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		8..=12 => 3,
		_ => 4,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if item_count >= PREFILTER_ENABLE_THRESHOLD {
		config.prefilter = true;
		config.max_typos = Some(allowed_typos);
	} else {
		config.max_typos = None;
	}
	config.sort = false;

	config
}

/// Filter function for text-like items: keeps fuzzy matches of `query`
/// against `key`, best score first, ties in their original order.
pub fn fuzzy_filter<T, K>(items: Vec<T>, query: &str, key: K) -> Vec<T>
where
	K: Fn(&T) -> &str,
{
	let trimmed = query.trim();
	if trimmed.is_empty() {
		return items;
	}

	let config = config_for_query(trimmed, items.len());
	let mut ranked: Vec<(usize, u16)> = {
		let haystacks: Vec<&str> = items.iter().map(&key).collect();
		match_list(trimmed, &haystacks, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| (entry.index as usize, entry.score))
			.collect()
	};
	ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

	let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
	ranked
		.into_iter()
		.filter_map(|(index, _)| slots.get_mut(index).and_then(Option::take))
		.collect()
}
