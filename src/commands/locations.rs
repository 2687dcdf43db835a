use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use carebase::models::{Location, LocationTag, TagId};
use carebase::query::TagQuery;
use carebase::store::LocationStore;

use super::{OutputFormat, load_dataset};

#[derive(Debug, Clone)]
pub enum TagMatch {
    All(Vec<String>),
    Any(Vec<String>),
}

pub fn locations_command(
    data_path: &Path,
    matching: TagMatch,
    format: OutputFormat,
) -> Result<()> {
    let dataset = load_dataset(data_path)?;
    let store = &dataset.store;
    let query = TagQuery::new(store);

    let locations = match &matching {
        TagMatch::All(refs) => {
            let tags = resolve_tags(store, refs)?;
            query.locations_having_all_tags(tags.into_iter().map(Some))
        }
        TagMatch::Any(refs) => {
            let tags = resolve_tags(store, refs)?;
            query.locations_having_any_tag(tags.into_iter().map(Some))
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&locations)?);
        }
        OutputFormat::Text => print_locations(store, &locations),
    }

    Ok(())
}

/// Resolve tag references given on the command line.
///
/// `id:<n>` and `name:<text>` pick the lookup explicitly. A bare numeric
/// reference is an id unless a different tag carries it as its name, which
/// is rejected as ambiguous. Anything else is a name.
fn resolve_tags<'s, S: LocationStore>(
    store: &'s S,
    refs: &[String],
) -> Result<Vec<&'s LocationTag>> {
    refs.iter()
        .map(|reference| resolve_tag(store, reference.trim()))
        .collect()
}

fn resolve_tag<'s, S: LocationStore>(store: &'s S, reference: &str) -> Result<&'s LocationTag> {
    if let Some(id) = reference.strip_prefix("id:") {
        let id = id
            .trim()
            .parse::<u32>()
            .map_err(|_| anyhow::anyhow!("Invalid tag id in '{reference}'"))?;
        return Ok(store.location_tag(TagId(id))?);
    }

    if let Some(name) = reference.strip_prefix("name:") {
        return Ok(store.location_tag_by_name(name.trim())?);
    }

    let Ok(id) = reference.parse::<u32>() else {
        return Ok(store.location_tag_by_name(reference)?);
    };

    match (store.location_tag(TagId(id)), store.location_tag_by_name(reference)) {
        (Ok(by_id), Ok(by_name)) if by_id.id != by_name.id => anyhow::bail!(
            "Tag reference '{reference}' is ambiguous: tag {} has that id and tag {} has that name; use 'id:{reference}' or 'name:{reference}'",
            by_id.id,
            by_name.id
        ),
        (Ok(tag), _) | (Err(_), Ok(tag)) => Ok(tag),
        (Err(error), Err(_)) => Err(error.into()),
    }
}

fn print_locations<S: LocationStore>(store: &S, locations: &[&Location]) {
    println!("Locations ({}):", locations.len());
    if locations.is_empty() {
        println!("  (none)");
        return;
    }

    for location in locations {
        let tag_names: Vec<&str> = location
            .tags
            .iter()
            .filter_map(|id| store.location_tag(*id).ok())
            .map(|tag| tag.name.as_str())
            .collect();
        println!(
            "  {:>4}  {} [{}]",
            location.id.0,
            location.name.bright_cyan(),
            tag_names.join(", ")
        );
    }
}
