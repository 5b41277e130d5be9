//! Consolidation of variant reports
//!
//! Some implementations come in several variants: the same engine built for
//! different environments such as iOS, Android or Web. For the formal report
//! they count as one implementation, so the variants sharing a name are merged
//! into a single report whose variant is `"consolidated"`. A test passes in the
//! merged report if it passes in any variant.

use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

use super::loader::sort_by_name;
use super::types::ImplementationReport;
use crate::constants::report::CONSOLIDATED_VARIANT;

/// Merge the results of several variants.
///
/// The result holds the union of the identifiers that any variant reported
/// with a value; `null` entries do not count as reported. Each value is the
/// logical OR of the values reported for that identifier.
pub fn merge_variant_results<'a, I>(variants: I) -> BTreeMap<String, Option<bool>>
where
    I: IntoIterator<Item = &'a BTreeMap<String, Option<bool>>>,
{
    let mut merged: BTreeMap<String, bool> = BTreeMap::new();
    for results in variants {
        for (test_id, result) in results {
            if let Some(passed) = result {
                *merged.entry(test_id.clone()).or_insert(false) |= *passed;
            }
        }
    }

    merged
        .into_iter()
        .map(|(test_id, passed)| (test_id, Some(passed)))
        .collect()
}

/// Replace the variant reports of each implementation with one consolidated report
///
/// Reports without a variant pass through unchanged. The output is sorted by
/// name; for equal names plain reports come before consolidated ones.
pub fn consolidate_implementation_reports(
    implementations: &[ImplementationReport],
) -> Vec<ImplementationReport> {
    let mut result = Vec::with_capacity(implementations.len());
    let mut variants: BTreeMap<&str, Vec<&ImplementationReport>> = BTreeMap::new();

    for report in implementations {
        if report.is_variant() {
            variants.entry(report.name.as_str()).or_default().push(report);
        } else {
            result.push(report.clone());
        }
    }

    for (name, reports) in variants {
        debug!("Consolidating {} variants of '{}'", reports.len(), name);

        // Smallest URL keeps the choice independent of input order
        let reference: Option<Url> = reports
            .iter()
            .filter_map(|r| r.reference.as_ref())
            .min_by(|a, b| a.as_str().cmp(b.as_str()))
            .cloned();

        result.push(ImplementationReport {
            name: name.to_string(),
            variant: Some(CONSOLIDATED_VARIANT.to_string()),
            reference,
            tests: merge_variant_results(reports.iter().map(|r| &r.tests)),
        });
    }

    sort_by_name(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(name: &str, variant: &str, results: &[(&str, Option<bool>)]) -> ImplementationReport {
        results.iter().fold(
            ImplementationReport::new(name).with_variant(variant),
            |report, (id, result)| report.with_result(*id, *result),
        )
    }

    #[test]
    fn test_two_variant_scenario() {
        let ios = variant("X", "ios", &[("t1", Some(true)), ("t2", Some(false))]);
        let android = variant("X", "android", &[("t2", Some(true)), ("t3", None)]);

        let consolidated = consolidate_implementation_reports(&[ios, android]);

        assert_eq!(consolidated.len(), 1);
        let report = &consolidated[0];
        assert_eq!(report.name, "X");
        assert_eq!(report.variant.as_deref(), Some("consolidated"));
        assert_eq!(report.tests.len(), 2);
        assert_eq!(report.tests["t1"], Some(true));
        assert_eq!(report.tests["t2"], Some(true));
        assert!(!report.tests.contains_key("t3"));
    }

    #[test]
    fn test_plain_reports_pass_through() {
        let plain = ImplementationReport::new("B").with_result("t1", Some(false));
        let a_ios = variant("A", "ios", &[("t1", Some(false))]);
        let c_web = variant("C", "web", &[("t1", Some(true))]);

        let consolidated = consolidate_implementation_reports(&[a_ios, plain.clone(), c_web]);

        let names: Vec<&str> = consolidated.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(consolidated[1], plain);
        assert_eq!(consolidated[0].tests["t1"], Some(false));
        assert!(consolidated[0].is_consolidated());
    }

    #[test]
    fn test_consolidation_is_idempotent() {
        let single = variant("X", "ios", &[("t1", Some(true)), ("t2", Some(false))]);
        let once = consolidate_implementation_reports(&[single]);
        let twice = consolidate_implementation_reports(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_consolidation_is_order_independent() {
        let a = variant("X", "ios", &[("t1", Some(false)), ("t2", Some(true))]);
        let b = variant("X", "android", &[("t1", Some(true)), ("t4", Some(false))]);
        let c = variant("X", "web", &[("t3", Some(false)), ("t2", Some(false))]);

        let forward = consolidate_implementation_reports(&[a.clone(), b.clone(), c.clone()]);
        let backward = consolidate_implementation_reports(&[c.clone(), a.clone(), b.clone()]);
        let shuffled = consolidate_implementation_reports(&[b, c, a]);

        assert_eq!(forward[0].tests, backward[0].tests);
        assert_eq!(forward[0].tests, shuffled[0].tests);
    }

    #[test]
    fn test_union_and_no_invented_passes() {
        let a = variant("X", "ios", &[("t1", Some(false))]);
        let b = variant("X", "android", &[("t2", Some(false)), ("t3", Some(true))]);

        let merged = merge_variant_results([&a.tests, &b.tests]);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["t1"], Some(false));
        assert_eq!(merged["t2"], Some(false));
        assert_eq!(merged["t3"], Some(true));
    }

    #[test]
    fn test_smallest_reference_is_kept() {
        let mut a = variant("X", "ios", &[]);
        a.reference = Some(Url::parse("https://b.example.org/").unwrap());
        let mut b = variant("X", "android", &[]);
        b.reference = Some(Url::parse("https://a.example.org/").unwrap());
        let c = variant("X", "web", &[]);

        let consolidated = consolidate_implementation_reports(&[a, b, c]);
        assert_eq!(
            consolidated[0].reference.as_ref().map(Url::as_str),
            Some("https://a.example.org/")
        );
    }
}
