use thiserror::Error;

use super::prefix::extract_code_prefix;
use crate::config::Vocabulary;
use crate::models::{CategoryId, MajorChoice, MajorResolution, MajorType, PrefixStat};
use crate::store::{CourseStore, StoreResult};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("prefix '{0}' is not one of the detected major prefixes")]
    UnknownPrefix(String),

    #[error("prefix '{0}' cannot be both the primary and the secondary major")]
    DuplicateSelection(String),

    #[error("major selection failed: {0}")]
    Selector(String),
}

/// Source of the user's major decision
///
/// This is the only point where an import waits on the user. Returning `Ok(None)` from
/// [`choose_majors`](MajorSelector::choose_majors) means the dialog was cancelled.
pub trait MajorSelector {
    /// Single detected prefix: is it the primary major?
    fn confirm_primary(&mut self, stat: &PrefixStat) -> Result<bool, ResolutionError>;

    /// Several detected prefixes, most frequent first
    fn choose_majors(
        &mut self,
        stats: &[PrefixStat],
    ) -> Result<Option<MajorChoice>, ResolutionError>;
}

/// Non-interactive selector driven by command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetSelector {
    primary: Option<String>,
    secondary: Option<String>,
    accept_defaults: bool,
}

impl PresetSelector {
    /// Confirm a single prefix and pick the most frequent one when there are several
    pub fn accept_defaults() -> Self {
        Self { accept_defaults: true, ..Self::default() }
    }

    /// Decline a single prefix and cancel the selection when there are several
    pub fn decline() -> Self {
        Self::default()
    }

    pub fn with_choice(primary: impl Into<String>, secondary: Option<String>) -> Self {
        Self { primary: Some(primary.into()), secondary, accept_defaults: false }
    }
}

impl MajorSelector for PresetSelector {
    fn confirm_primary(&mut self, stat: &PrefixStat) -> Result<bool, ResolutionError> {
        Ok(match &self.primary {
            Some(primary) => primary.eq_ignore_ascii_case(&stat.prefix),
            None => self.accept_defaults,
        })
    }

    fn choose_majors(
        &mut self,
        stats: &[PrefixStat],
    ) -> Result<Option<MajorChoice>, ResolutionError> {
        if let Some(primary) = &self.primary {
            return Ok(Some(MajorChoice::new(primary.clone(), self.secondary.clone())));
        }
        if self.accept_defaults {
            return Ok(stats.first().map(|top| MajorChoice::new(top.prefix.clone(), None)));
        }
        Ok(None)
    }
}

/// Decide which detected prefixes are majors
///
/// Returns `Ok(None)` when there are no prefixes; the selector is not consulted.
pub fn resolve_majors(
    stats: &[PrefixStat],
    selector: &mut dyn MajorSelector,
) -> Result<Option<MajorResolution>, ResolutionError> {
    let all_prefixes = || stats.iter().map(|s| s.prefix.clone());

    match stats {
        [] => Ok(None),
        [only] => {
            if selector.confirm_primary(only)? {
                Ok(Some(MajorResolution {
                    primary_prefix: Some(only.prefix.clone()),
                    ..MajorResolution::default()
                }))
            } else {
                tracing::info!(prefix = %only.prefix, "Single major prefix declined, treating as other");
                Ok(Some(MajorResolution::all_other(all_prefixes())))
            }
        }
        _ => match selector.choose_majors(stats)? {
            None => {
                tracing::info!("Major selection cancelled, treating every prefix as other");
                Ok(Some(MajorResolution::all_other(all_prefixes())))
            }
            Some(choice) => validate_choice(stats, &choice).map(Some),
        },
    }
}

fn validate_choice(
    stats: &[PrefixStat],
    choice: &MajorChoice,
) -> Result<MajorResolution, ResolutionError> {
    let offered = |prefix: &str| -> Result<String, ResolutionError> {
        let normalized = extract_code_prefix(prefix);
        stats
            .iter()
            .find(|s| s.prefix == normalized)
            .map(|s| s.prefix.clone())
            .ok_or_else(|| ResolutionError::UnknownPrefix(prefix.to_string()))
    };

    let primary = offered(&choice.primary)?;
    let secondary = choice.secondary.as_deref().map(offered).transpose()?;
    if secondary.as_deref() == Some(primary.as_str()) {
        return Err(ResolutionError::DuplicateSelection(primary));
    }

    let other_prefixes = stats
        .iter()
        .map(|s| s.prefix.clone())
        .filter(|p| *p != primary && Some(p) != secondary.as_ref())
        .collect();

    Ok(MajorResolution {
        primary_prefix: Some(primary),
        secondary_prefixes: secondary.into_iter().collect(),
        other_prefixes,
    })
}

/// Tag major categories per the resolution
///
/// Primary and secondary prefixes get their major type. Categories of "other" prefixes are
/// renamed with the removal marker and demoted; their ids are returned so the caller can delete
/// them once ingestion has rerouted their courses. The catch-all category is never touched.
pub fn apply_resolution<S: CourseStore + ?Sized>(
    store: &mut S,
    resolution: &MajorResolution,
    vocab: &Vocabulary,
) -> StoreResult<Vec<CategoryId>> {
    let candidates: Vec<_> = store
        .categories()
        .iter()
        .filter(|c| c.is_major && c.name != vocab.general_elective)
        .map(|c| (c.id.clone(), c.name.clone(), c.required_credits))
        .collect();

    let mut marked = Vec::new();
    for (id, name, required_credits) in candidates {
        let Some((prefix, _)) = name.split_once(char::is_whitespace) else {
            continue;
        };

        if let Some(major_type) = resolution.major_type_of(prefix) {
            store.update_category(&id, &name, required_credits, true, major_type)?;
        } else if resolution.is_other(prefix) {
            let renamed = vocab.removal_name(&name);
            store.update_category(&id, &renamed, required_credits, false, MajorType::None)?;
            tracing::debug!(category = %name, "Marked category for removal");
            marked.push(id);
        }
    }

    Ok(marked)
}
