use std::collections::BTreeMap;
use log::{info, warn};
use crate::record::Territory;
use crate::territory::model::{Utility, ZipCode};
use crate::territory::tables::{OVERRIDES, STATE_ZIP_RANGE};
use crate::territory::{assign_utility, Resolver};

/// zip -> county name, county may be empty
pub type ZipCounties = BTreeMap<ZipCode, String>;

/// Resolve every known zip, falling back to pure zip-range mode when the
/// source has no county information, then back-fill the override zips.
#[tracing::instrument(skip_all, fields(zips = zip_counties.len()))]
pub fn build_territory(zip_counties: &ZipCounties) -> Territory {
    let mut territory = if has_county_data(zip_counties) {
        info!("resolving [{}] zips with county data", zip_counties.len());
        resolve_with_counties(zip_counties)
    } else {
        warn!("no county data available, using zip-range heuristics");
        resolve_zip_range()
    };

    let filled = backfill_overrides(&mut territory);
    if filled > 0 {
        info!("back-filled [{}] override zips missing from the source", filled);
    }
    territory
}

fn has_county_data(zip_counties: &ZipCounties) -> bool {
    zip_counties.values().any(|county| !county.trim().is_empty())
}

fn resolve_with_counties(zip_counties: &ZipCounties) -> Territory {
    let mut territory = Territory::default();
    for (zip, county) in zip_counties {
        territory.insert(zip.clone(), assign_utility(zip, county));
    }
    territory
}

/// every zip in the state range plus every override zip, overrides only
fn resolve_zip_range() -> Territory {
    let resolver = Resolver::overrides_only();
    let zips = STATE_ZIP_RANGE
        .filter_map(ZipCode::from_number)
        .chain(override_zips())
        .collect::<Vec<_>>();

    let mut territory = Territory::default();
    for zip in zips {
        let utility = resolver.resolve(&zip, "");
        territory.insert(zip, utility);
    }
    territory
}

/// insert override zips absent from `territory`, returns how many were added
///
/// Sets are walked in priority order, so a zip listed twice gets the
/// higher-priority utility.
fn backfill_overrides(territory: &mut Territory) -> usize {
    let mut filled = 0;
    for (utility, zips) in OVERRIDES.iter() {
        for zip in zips.iter().filter_map(|z| z.parse::<ZipCode>().ok()) {
            if territory.get(&zip).is_none() {
                territory.insert(zip, *utility);
                filled += 1;
            }
        }
    }
    filled
}

fn override_zips() -> impl Iterator<Item = ZipCode> {
    OVERRIDES.iter()
        .flat_map(|(_, zips)| zips.iter())
        .filter_map(|z| z.parse().ok())
}

/// log the per-utility tally
pub fn report(territory: &Territory) {
    info!("[{}] zip codes mapped", territory.len());
    for utility in Utility::ALL {
        info!("  {}: {}", utility, territory.count(utility));
    }
}
