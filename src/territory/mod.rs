use log::trace;
use crate::territory::model::{normalize_county, Utility, ZipCode};
use crate::territory::tables::{EXCEPTION_SPLITS, OVERRIDES, RANGE_SPLITS, SOLE_PROVIDER_COUNTIES};

pub mod model;
pub mod tables;

/// utility for anything no rule claims
pub const DEFAULT_UTILITY: Utility = Utility::Columbia;

/// A single step of the resolution procedure.
///
/// Rules are tried in order and the first one returning `Some` wins, so more
/// specific knowledge has to come earlier in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// zip is pinned to a utility by an override set
    ZipOverride,
    /// county has exactly one utility
    SoleProviderCounty,
    /// county is split along a numeric zip range
    SplitCountyRange,
    /// county is split by a list of exception zips
    SplitCountyExceptions,
}

impl Rule {
    pub fn apply(&self, zip: &ZipCode, county: &str) -> Option<Utility> {
        match self {
            Rule::ZipOverride => override_for(zip),
            Rule::SoleProviderCounty => SOLE_PROVIDER_COUNTIES.iter()
                .find(|(name, _)| *name == county)
                .map(|(_, utility)| *utility),
            Rule::SplitCountyRange => RANGE_SPLITS.iter()
                .find(|split| split.counties.contains(&county))
                .map(|split| if split.zips.contains(&zip.value()) {
                    split.inside
                } else {
                    split.outside
                }),
            Rule::SplitCountyExceptions => EXCEPTION_SPLITS.iter()
                .find(|split| split.county == county)
                .map(|split| if split.exceptions.contains(&zip.as_str()) {
                    split.exception
                } else {
                    split.rest
                }),
        }
    }
}

/// the utility a zip is pinned to, checked in override priority order
pub fn override_for(zip: &ZipCode) -> Option<Utility> {
    OVERRIDES.iter()
        .find(|(_, zips)| zips.contains(zip.as_str()))
        .map(|(utility, _)| *utility)
}

/// Ordered rule list with a fallback utility.
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: &'static [Rule],
    default: Utility,
}

impl Resolver {
    /// zip overrides, then county rules
    pub fn full() -> Self {
        Self {
            rules: &[
                Rule::ZipOverride,
                Rule::SoleProviderCounty,
                Rule::SplitCountyRange,
                Rule::SplitCountyExceptions,
            ],
            default: DEFAULT_UTILITY,
        }
    }

    /// used when there is no county data at all
    pub fn overrides_only() -> Self {
        Self {
            rules: &[Rule::ZipOverride],
            default: DEFAULT_UTILITY,
        }
    }

    pub fn resolve(&self, zip: &ZipCode, county: &str) -> Utility {
        let county = normalize_county(county);
        self.rules.iter()
            .find_map(|rule| rule.apply(zip, county).map(|utility| (rule, utility)))
            .map(|(rule, utility)| {
                trace!("[{}] ({}) resolved to {} by {:?}", zip, county, utility, rule);
                utility
            })
            .unwrap_or(self.default)
    }
}

/// Assign a utility to a zip code, `county` may be empty.
pub fn assign_utility(zip: &ZipCode, county: &str) -> Utility {
    Resolver::full().resolve(zip, county)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::territory::tables::{CENTERPOINT_ZIPS, DUKE_ZIPS, ENBRIDGE_ZIPS};

    fn zip(s: &str) -> ZipCode {
        s.parse().unwrap()
    }

    #[test]
    fn scenarios() {
        assert_eq!(assign_utility(&zip("44101"), "Cuyahoga"), Utility::Enbridge);
        assert_eq!(assign_utility(&zip("44130"), "Cuyahoga"), Utility::Columbia);
        assert_eq!(assign_utility(&zip("45300"), "Montgomery"), Utility::Centerpoint);
        assert_eq!(assign_utility(&zip("43999"), ""), Utility::Columbia);
    }

    #[test]
    fn overrides_win_over_any_county() {
        let sets = [
            (Utility::Centerpoint, CENTERPOINT_ZIPS),
            (Utility::Duke, DUKE_ZIPS),
            (Utility::Enbridge, ENBRIDGE_ZIPS),
        ];
        for (utility, zips) in sets {
            for z in zips {
                for county in ["", "Franklin", "Hamilton County", "Cuyahoga", "Montgomery"] {
                    assert_eq!(assign_utility(&zip(z), county), utility, "{} / {}", z, county);
                }
            }
        }
    }

    #[test]
    fn sole_provider_counties_cover_non_override_zips() {
        // none of these are in an override set
        for z in ["43001", "43999", "44999", "45999"] {
            assert_eq!(override_for(&zip(z)), None);
            for (county, utility) in SOLE_PROVIDER_COUNTIES {
                assert_eq!(assign_utility(&zip(z), county), *utility);
                assert_eq!(assign_utility(&zip(z), &format!("{} County", county)), *utility);
            }
        }
    }

    #[test]
    fn range_split_boundaries() {
        let rule = Rule::SplitCountyRange;
        assert_eq!(rule.apply(&zip("45299"), "Greene"), Some(Utility::Columbia));
        assert_eq!(rule.apply(&zip("45300"), "Greene"), Some(Utility::Centerpoint));
        assert_eq!(rule.apply(&zip("45510"), "Greene"), Some(Utility::Centerpoint));
        assert_eq!(rule.apply(&zip("45511"), "Greene"), Some(Utility::Columbia));
        assert_eq!(rule.apply(&zip("45000"), "Butler"), Some(Utility::Columbia));
        assert_eq!(rule.apply(&zip("45001"), "Warren"), Some(Utility::Duke));
        assert_eq!(rule.apply(&zip("45099"), "Warren"), Some(Utility::Duke));
        assert_eq!(rule.apply(&zip("45100"), "Butler"), Some(Utility::Columbia));
        assert_eq!(rule.apply(&zip("45300"), "Franklin"), None);
    }

    #[test]
    fn exception_split_for_cuyahoga() {
        let rule = Rule::SplitCountyExceptions;
        for z in ["44129", "44130", "44134", "44136"] {
            assert_eq!(rule.apply(&zip(z), "Cuyahoga"), Some(Utility::Columbia));
        }
        assert_eq!(rule.apply(&zip("44148"), "Cuyahoga"), Some(Utility::Enbridge));
        assert_eq!(rule.apply(&zip("44130"), "Lake"), None);
    }

    #[test]
    fn each_rule_ignores_what_it_does_not_know() {
        let unknown = zip("43215");
        let rules = [Rule::ZipOverride, Rule::SoleProviderCounty, Rule::SplitCountyRange, Rule::SplitCountyExceptions];
        for rule in rules {
            assert_eq!(rule.apply(&unknown, "Franklin"), None, "{:?}", rule);
        }
        assert_eq!(assign_utility(&unknown, "Franklin"), DEFAULT_UTILITY);
    }

    #[test]
    fn county_matching_is_case_sensitive() {
        assert_eq!(assign_utility(&zip("44999"), "summit"), Utility::Columbia);
        assert_eq!(assign_utility(&zip("44999"), "Summit"), Utility::Enbridge);
    }

    #[test]
    fn overrides_only_ignores_county() {
        let resolver = Resolver::overrides_only();
        assert_eq!(resolver.resolve(&zip("44999"), "Summit"), Utility::Columbia);
        assert_eq!(resolver.resolve(&zip("45202"), ""), Utility::Duke);
    }
}
