//! Unique element ids derived from layer names.

use std::collections::HashSet;

use convert_case::{Case, Casing};

/// Maximum length of a generated id, suffix included.
pub const MAX_ID_LEN: usize = 32;

const FALLBACK_ID: &str = "layer";

/// Generates sanitized ids, unique within one generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    used: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for a layer name.
    ///
    /// The result is kebab case, limited to `[a-z0-9-]`, starts with a
    /// letter and is at most [`MAX_ID_LEN`] bytes. Repeated names get `-2`,
    /// `-3`, ... suffixes.
    pub fn generate(&mut self, name: &str) -> String {
        let base = sanitize(name);
        if self.used.insert(base.clone()) {
            return base;
        }
        let mut n = 2usize;
        loop {
            let suffix = format!("-{n}");
            let stem = truncate(&base, MAX_ID_LEN - suffix.len());
            let candidate = format!("{stem}{suffix}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

fn sanitize(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    let kebab = spaced.to_case(Case::Kebab);

    let mut id = String::with_capacity(kebab.len());
    for c in kebab.chars() {
        match c {
            'a'..='z' | '0'..='9' => id.push(c),
            '-' if !id.is_empty() && !id.ends_with('-') => id.push('-'),
            _ => {}
        }
    }
    let id = id.trim_end_matches('-');

    let id = match id.chars().next() {
        None => return FALLBACK_ID.to_string(),
        Some(first) if first.is_ascii_lowercase() => id.to_string(),
        Some(_) => format!("{FALLBACK_ID}-{id}"),
    };
    truncate(&id, MAX_ID_LEN).to_string()
}

/// Cut to at most `max` bytes without leaving a trailing hyphen.
fn truncate(id: &str, max: usize) -> &str {
    let end = id.len().min(max);
    id[..end].trim_end_matches('-')
}
