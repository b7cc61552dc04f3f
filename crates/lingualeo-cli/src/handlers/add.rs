//! Add-to-dictionary handler

use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use lingualeo_core::{LingualeoClient, WordResult};
use tracing::{debug, instrument, warn};

/// One word/translation pair to send to the dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    pub word: String,
    pub translation: String,
}

/// What an add run will do, decided before any request is made
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddPlan {
    pub additions: Vec<Addition>,
    /// Words skipped because they are already in the dictionary
    pub already_known: Vec<String>,
    /// Words skipped because there is nothing to add for them
    pub untranslated: Vec<String>,
}

/// Decide which pairs to add
///
/// Custom translations, when given, are added for every word. Otherwise the
/// top ranked translation is used. Words already in the dictionary are left
/// alone unless `force` is set.
pub fn plan_additions(results: &[&WordResult], custom: &[String], force: bool) -> AddPlan {
    let mut plan = AddPlan::default();

    for result in results {
        if result.in_dictionary && !force {
            plan.already_known.push(result.word.clone());
            continue;
        }

        if !custom.is_empty() {
            plan.additions.extend(custom.iter().map(|translation| Addition {
                word: result.word.clone(),
                translation: translation.clone(),
            }));
        } else if let Some(top) = result.top_translation() {
            plan.additions.push(Addition {
                word: result.word.clone(),
                translation: top.to_string(),
            });
        } else {
            plan.untranslated.push(result.word.clone());
        }
    }

    plan
}

/// Add the looked-up words to the dictionary
///
/// Returns the planned additions and how many of them failed.
#[instrument(skip_all, fields(words = results.len(), force = force))]
pub async fn handle_add(
    client: &LingualeoClient,
    results: &[&WordResult],
    custom: &[String],
    force: bool,
    output: &mut OutputWriter,
) -> Result<(usize, usize)> {
    let _timer = Timer::new("add_words");
    let plan = plan_additions(results, custom, force);

    for word in &plan.already_known {
        output.warning(&format!(
            "{} is already in your dictionary, use --force to add it anyway",
            word
        ))?;
    }
    for word in &plan.untranslated {
        output.warning(&format!("{} has no translation to add", word))?;
    }

    if plan.additions.is_empty() {
        debug!("Nothing to add");
        return Ok((0, 0));
    }

    output.section("Adding to dictionary")?;

    let mut failed = 0;
    for addition in &plan.additions {
        match client.add_word(&addition.word, &addition.translation).await {
            Ok(()) => {
                output.success(&format!("{} → {}", addition.word, addition.translation))?;
            }
            Err(e) => {
                warn!(word = %addition.word, error = %e, "Failed to add word");
                output.error(&format!("{}: {}", addition.word, e))?;
                failed += 1;
            }
        }
    }

    Ok((plan.additions.len(), failed))
}
