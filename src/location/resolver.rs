//! Location resolver: runs the staged matching pipeline.
//!
//! Flow:  candidates → ignore list → countries → regions → cities → other
//!
//! Each stage is a value that owns the previous one, so a city stage can only
//! be built from a region stage, which can only be built from a country stage.
//! The region stage fills an empty store from the bulk source before querying.

use super::countries::{CountryMatcher, CountryRegistry};
use super::ignore::IgnoreList;
use super::source::GeoSource;
use super::store::{fold, GeoStore};
use super::types::{
    CityPlacement, GeoRecord, LocationError, LocationModel, Mention, ResolvedRegion, Result, Stage,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Output of the country stage.
#[derive(Debug, Clone)]
pub struct CountryStage {
    /// Candidates after ignore-list filtering, in mention order.
    pub candidates: Vec<String>,
    /// Distinct candidates accepted as countries, first-seen order.
    pub countries: Vec<String>,
    pub country_mentions: Vec<Mention>,
}

/// Output of the region stage.
#[derive(Debug, Clone)]
pub struct RegionStage {
    pub countries: CountryStage,
    pub regions: Vec<ResolvedRegion>,
    pub country_regions: BTreeMap<String, Vec<String>>,
    pub other_countries: Vec<String>,
}

/// Output of the city stage.
#[derive(Debug, Clone)]
pub struct CityStage {
    pub regions: RegionStage,
    pub cities: Vec<String>,
    pub city_mentions: Vec<Mention>,
    pub city_regions: BTreeMap<String, Vec<CityPlacement>>,
    pub region_cities: BTreeMap<String, Vec<String>>,
    pub country_cities: BTreeMap<String, Vec<String>>,
    pub other_regions: Vec<String>,
    /// Region-stage countries plus those first reached through a city.
    pub other_countries: Vec<String>,
    /// Single mentions for countries reached only through a city.
    pub implied_country_mentions: Vec<Mention>,
    pub address_strings: Vec<String>,
}

/// The location resolver with its injected collaborators.
pub struct LocationResolver<S: GeoStore> {
    store: S,
    source: Option<Box<dyn GeoSource + Send + Sync>>,
    registry: CountryRegistry,
    ignore: IgnoreList,
}

impl<S: GeoStore> LocationResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            source: None,
            registry: CountryRegistry::iso3166(),
            ignore: IgnoreList::default(),
        }
    }

    /// Bulk source used to populate an empty store.
    pub fn with_source(mut self, source: impl GeoSource + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_ignore_list(mut self, ignore: IgnoreList) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_registry(mut self, registry: CountryRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run every stage over `candidates`.
    ///
    /// Either the whole model is returned or a single error naming the stage
    /// that failed.
    pub fn resolve<T: AsRef<str>>(&self, candidates: &[T]) -> Result<LocationModel> {
        let candidates = self.ignore.filter(candidates);
        if candidates.is_empty() {
            log::debug!("No candidates left after filtering; nothing to resolve");
            return Ok(LocationModel::default());
        }

        let countries = self.resolve_countries(candidates);
        let regions = self
            .resolve_regions(countries)
            .map_err(|e| e.in_stage(Stage::Regions))?;
        let cities = self
            .resolve_cities(regions)
            .map_err(|e| e.in_stage(Stage::Cities))?;
        Ok(self.finish(cities))
    }

    /// Replace the store contents from the bulk source.
    pub fn reload(&self) -> Result<usize> {
        let source = self.source.as_ref().ok_or_else(|| {
            LocationError::DataUnavailable("no bulk source configured".into())
        })?;
        let rows = source.read_rows()?;
        if rows.is_empty() {
            return Err(LocationError::DataUnavailable(format!(
                "{} contains no rows",
                source.describe()
            )));
        }
        log::info!("Loading geo dataset from {}", source.describe());
        self.store.load(&rows)
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.store.has_data()? {
            return Ok(());
        }
        if self.source.is_none() {
            return Err(LocationError::DataUnavailable(
                "store is empty and no bulk source is configured".into(),
            ));
        }
        self.reload().map(|_| ())
    }

    // ── Stage 1: countries ──────────────────────────────────────

    pub fn resolve_countries(&self, candidates: Vec<String>) -> CountryStage {
        let matcher = CountryMatcher::new(&self.registry);
        let accepted: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|c| matcher.is_country(c))
            .collect();

        let mut countries: Vec<String> = Vec::new();
        for country in &accepted {
            push_distinct(&mut countries, &country.to_string());
        }
        let country_mentions = most_common(&accepted);

        log::debug!(
            "{} stage: {} of {} candidates are countries",
            Stage::Countries,
            accepted.len(),
            candidates.len()
        );
        CountryStage {
            candidates,
            countries,
            country_mentions,
        }
    }

    // ── Stage 2: regions ────────────────────────────────────────

    pub fn resolve_regions(&self, countries: CountryStage) -> Result<RegionStage> {
        self.ensure_loaded()?;

        let names: BTreeSet<String> = countries.candidates.iter().cloned().collect();
        let records = self.store.find_by_subdivision_name(&names)?;

        let mut regions: Vec<ResolvedRegion> = Vec::new();
        let mut country_regions: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut other_countries: Vec<String> = Vec::new();

        for record in &records {
            let country = self.owning_country(record);
            let region = &record.subdivision_name;

            // First record seen for a region decides its owner.
            if !regions.iter().any(|r| &r.name == region) {
                regions.push(ResolvedRegion {
                    name: region.clone(),
                    country: country.clone(),
                });
            }
            push_distinct(&mut other_countries, &country);
            push_distinct(country_regions.entry(country).or_default(), region);
        }

        log::debug!(
            "{} stage: {} records, {} regions",
            Stage::Regions,
            records.len(),
            regions.len()
        );
        Ok(RegionStage {
            countries,
            regions,
            country_regions,
            other_countries,
        })
    }

    // ── Stage 3: cities ─────────────────────────────────────────

    pub fn resolve_cities(&self, regions: RegionStage) -> Result<CityStage> {
        let candidates = &regions.countries.candidates;
        let names: BTreeSet<String> = candidates.iter().cloned().collect();
        let records = self.store.find_by_city_name(&names)?;

        // Country-stage names as written and as the registry names them.
        let matcher = CountryMatcher::new(&self.registry);
        let seen_countries: HashSet<String> = regions
            .countries
            .countries
            .iter()
            .flat_map(|c| {
                let registry_name = matcher.lookup(c).map(|country| fold(country.name));
                std::iter::once(fold(c)).chain(registry_name)
            })
            .collect();

        let mut cities: Vec<String> = Vec::new();
        let mut city_regions: BTreeMap<String, Vec<CityPlacement>> = BTreeMap::new();
        let mut region_cities: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut country_cities: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut other_regions: Vec<String> = Vec::new();
        let mut other_countries = regions.other_countries.clone();
        let mut implied_country_mentions: Vec<Mention> = Vec::new();
        let mut address_strings: Vec<String> = Vec::new();

        for record in &records {
            let country = self.owning_country(record);
            let region = &record.subdivision_name;
            let city = &record.city_name;

            push_distinct(&mut cities, city);
            push_distinct(&mut other_regions, region);
            push_distinct(&mut other_countries, &country);

            if !seen_countries.contains(&fold(&country))
                && !implied_country_mentions.iter().any(|m| m.name == country)
            {
                implied_country_mentions.push(Mention::new(country.clone(), 1));
            }

            push_distinct(region_cities.entry(region.clone()).or_default(), city);
            push_distinct(country_cities.entry(country.clone()).or_default(), city);

            let placement = CityPlacement {
                region: region.clone(),
                country: country.clone(),
            };
            let new_placement =
                push_distinct(city_regions.entry(city.clone()).or_default(), &placement);
            let corroborated = regions
                .country_regions
                .get(&country)
                .is_some_and(|rs| rs.contains(region));
            if new_placement && corroborated {
                address_strings.push(format!("{}, {}, {}", city, region, country));
            }
        }

        let city_set: HashSet<&str> = cities.iter().map(String::as_str).collect();
        let mentioned: Vec<&str> = candidates
            .iter()
            .map(String::as_str)
            .filter(|c| city_set.contains(c))
            .collect();
        let city_mentions = most_common(&mentioned);

        log::debug!(
            "{} stage: {} records, {} cities, {} addresses",
            Stage::Cities,
            records.len(),
            cities.len(),
            address_strings.len()
        );
        Ok(CityStage {
            regions,
            cities,
            city_mentions,
            city_regions,
            region_cities,
            country_cities,
            other_regions,
            other_countries,
            implied_country_mentions,
            address_strings,
        })
    }

    // ── Stage 4: other ──────────────────────────────────────────

    /// Collect unresolved candidates and assemble the final model.
    pub fn finish(&self, cities: CityStage) -> LocationModel {
        let CityStage {
            regions,
            cities,
            city_mentions,
            city_regions,
            region_cities,
            country_cities,
            other_regions,
            other_countries,
            implied_country_mentions,
            address_strings,
        } = cities;
        let RegionStage {
            countries,
            regions,
            country_regions,
            ..
        } = regions;
        let CountryStage {
            candidates,
            countries,
            mut country_mentions,
        } = countries;

        let resolved: HashSet<String> = countries
            .iter()
            .chain(cities.iter())
            .chain(regions.iter().map(|r| &r.name))
            .map(|name| fold(name))
            .collect();

        let mut other: Vec<String> = Vec::new();
        for candidate in &candidates {
            if !resolved.contains(&fold(candidate)) {
                other.push(candidate.clone());
            }
        }
        log::debug!("{} stage: {} unresolved candidates", Stage::Other, other.len());

        country_mentions.extend(implied_country_mentions);

        LocationModel {
            countries,
            country_mentions,
            other_countries,
            regions,
            other_regions,
            cities,
            city_mentions,
            city_regions,
            country_regions,
            region_cities,
            country_cities,
            address_strings,
            other,
        }
    }

    /// Registry name for the record's ISO code, else the name stored in the dataset.
    fn owning_country(&self, record: &GeoRecord) -> String {
        match self.registry.name_for_alpha_2(&record.country_iso_code) {
            Some(name) => name.to_string(),
            None => {
                log::debug!(
                    "No registry entry for '{}', using stored country name '{}'",
                    record.country_iso_code,
                    record.country_name
                );
                record.country_name.clone()
            }
        }
    }
}

/// Append `item` unless already present. Returns whether it was appended.
fn push_distinct<T: PartialEq + Clone>(list: &mut Vec<T>, item: &T) -> bool {
    if list.contains(item) {
        false
    } else {
        list.push(item.clone());
        true
    }
}

/// Exact-string frequencies, most frequent first; ties keep first-seen order.
fn most_common(items: &[&str]) -> Vec<Mention> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &item in items {
        let count = counts.entry(item).or_insert(0);
        if *count == 0 {
            order.push(item);
        }
        *count += 1;
    }
    let mut mentions: Vec<Mention> = order
        .into_iter()
        .map(|name| Mention::new(name, counts[name]))
        .collect();
    mentions.sort_by(|a, b| b.count.cmp(&a.count));
    mentions
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::store::tests::{record, test_store};
    use super::super::store::SqliteGeoStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn resolver_with(rows: Vec<GeoRecord>) -> (LocationResolver<SqliteGeoStore>, TempDir) {
        let (store, dir) = test_store();
        store.load(&rows).unwrap();
        (LocationResolver::new(store), dir)
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn paris() -> GeoRecord {
        record(2988507, "FR", "France", "Île-de-France", "Paris")
    }

    #[test]
    fn test_scenario_country_and_city() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver.resolve(&["France", "France", "Paris"]).unwrap();

        assert_eq!(model.countries, vec!["France"]);
        assert_eq!(model.country_mentions, vec![Mention::new("France", 2)]);
        assert_eq!(model.cities, vec!["Paris"]);
        assert_eq!(model.city_mentions, vec![Mention::new("Paris", 1)]);
        assert_eq!(model.country_cities["France"], vec!["Paris"]);
        assert!(model.other.is_empty());
        assert!(model.regions.is_empty());
        // Île-de-France was never mentioned, so no address is corroborated.
        assert!(model.address_strings.is_empty());
    }

    #[test]
    fn test_scenario_unknown_place() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver.resolve(&["Atlantis"]).unwrap();

        assert_eq!(model.other, vec!["Atlantis"]);
        assert!(model.countries.is_empty());
        assert!(model.country_mentions.is_empty());
        assert!(model.regions.is_empty());
        assert!(model.cities.is_empty());
        assert!(model.country_regions.is_empty());
        assert!(model.region_cities.is_empty());
        assert!(model.country_cities.is_empty());
        assert!(model.address_strings.is_empty());
    }

    #[test]
    fn test_scenario_case_insensitive_match_case_sensitive_count() {
        let (resolver, _dir) = resolver_with(vec![record(1, "ID", "Indonesia", "Bali Province", "Bali")]);
        let model = resolver.resolve(&["Bali", "bali"]).unwrap();

        assert_eq!(model.cities, vec!["Bali"]);
        assert_eq!(model.city_mention_count("Bali"), 1);
        assert_eq!(model.city_mentions.len(), 1);
        assert!(model.other.is_empty());
    }

    #[test]
    fn test_lowercase_candidate_alone_still_resolves() {
        let (resolver, _dir) = resolver_with(vec![record(1, "ID", "Indonesia", "Bali Province", "Bali")]);
        let model = resolver.resolve(&["bali"]).unwrap();
        assert_eq!(model.cities, vec!["Bali"]);
        assert!(model.city_mentions.is_empty());
        assert!(model.other.is_empty());
    }

    #[test]
    fn test_scenario_city_in_two_countries() {
        let (resolver, _dir) = resolver_with(vec![
            record(1, "US", "United States", "Missouri", "Columbia"),
            record(2, "CA", "Canada", "Ontario", "Columbia"),
        ]);
        let model = resolver.resolve(&["Columbia"]).unwrap();

        assert_eq!(model.cities, vec!["Columbia"]);
        assert_eq!(model.country_cities["United States"], vec!["Columbia"]);
        assert_eq!(model.country_cities["Canada"], vec!["Columbia"]);
        assert_eq!(model.city_regions["Columbia"].len(), 2);
        assert_eq!(model.other_countries, vec!["United States", "Canada"]);
        assert_eq!(model.country_mention_count("United States"), 1);
        assert_eq!(model.country_mention_count("Canada"), 1);
        assert!(model.countries.is_empty());
    }

    #[test]
    fn test_address_requires_corroborated_region() {
        let (resolver, _dir) = resolver_with(vec![
            paris(),
            record(3, "FR", "France", "Île-de-France", "Versailles"),
            record(4, "FR", "France", "Provence-Alpes-Côte d'Azur", "Nice"),
        ]);
        let model = resolver
            .resolve(&["île-de-france", "Paris", "Versailles", "Nice"])
            .unwrap();

        assert_eq!(model.region_names(), vec!["Île-de-France"]);
        assert_eq!(model.country_regions["France"], vec!["Île-de-France"]);
        assert_eq!(
            model.address_strings,
            vec![
                "Paris, Île-de-France, France",
                "Versailles, Île-de-France, France"
            ]
        );
        assert_eq!(model.region_cities["Île-de-France"], vec!["Paris", "Versailles"]);
        assert_eq!(model.region_cities["Provence-Alpes-Côte d'Azur"], vec!["Nice"]);
        assert!(model.other.is_empty());
    }

    #[test]
    fn test_region_owner_first_seen_wins() {
        let (resolver, _dir) = resolver_with(vec![
            record(1, "AR", "Argentina", "Córdoba", "Córdoba"),
            record(2, "ES", "Spain", "Córdoba", "Córdoba"),
        ]);
        let model = resolver.resolve(&["Córdoba"]).unwrap();

        assert_eq!(model.regions.len(), 1);
        assert_eq!(model.regions[0].country, "Argentina");
        assert_eq!(model.country_regions["Argentina"], vec!["Córdoba"]);
        assert_eq!(model.country_regions["Spain"], vec!["Córdoba"]);
    }

    #[test]
    fn test_unknown_iso_code_falls_back_to_stored_name() {
        let (resolver, _dir) = resolver_with(vec![record(1, "XK", "Kosovo", "Pristina", "Pristina")]);
        let model = resolver.resolve(&["Pristina"]).unwrap();

        assert_eq!(model.regions[0].country, "Kosovo");
        assert_eq!(model.country_cities["Kosovo"], vec!["Pristina"]);
        assert_eq!(model.address_strings, vec!["Pristina, Pristina, Kosovo"]);
    }

    #[test]
    fn test_registry_name_replaces_stored_name() {
        let (resolver, _dir) = resolver_with(vec![record(1, "US", "USA", "Texas", "Austin")]);
        let model = resolver.resolve(&["Austin"]).unwrap();
        assert!(model.country_cities.contains_key("United States"));
        assert!(!model.country_cities.contains_key("USA"));
    }

    #[test]
    fn test_country_mentions_most_common_first() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver
            .resolve(&["Spain", "France", "France", "Spain", "France", "Peru"])
            .unwrap();

        assert_eq!(model.countries, vec!["Spain", "France", "Peru"]);
        assert_eq!(
            model.country_mentions,
            vec![
                Mention::new("France", 3),
                Mention::new("Spain", 2),
                Mention::new("Peru", 1)
            ]
        );
    }

    #[test]
    fn test_differently_cased_countries_counted_separately() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver.resolve(&["France", "france"]).unwrap();
        assert_eq!(model.countries, vec!["France", "france"]);
        assert_eq!(model.country_mention_count("France"), 1);
        assert_eq!(model.country_mention_count("france"), 1);
        assert!(model.other.is_empty());
    }

    #[test]
    fn test_city_country_seen_in_country_stage_gets_no_extra_mention() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver.resolve(&["france", "Paris"]).unwrap();
        assert_eq!(model.country_mentions, vec![Mention::new("france", 1)]);
    }

    #[test]
    fn test_official_name_country_gets_no_extra_mention() {
        let (resolver, _dir) = resolver_with(vec![record(1, "US", "United States", "Texas", "Austin")]);
        let model = resolver.resolve(&["United States of America", "Austin"]).unwrap();
        assert_eq!(model.countries, vec!["United States of America"]);
        assert_eq!(
            model.country_mentions,
            vec![Mention::new("United States of America", 1)]
        );
        assert_eq!(model.country_cities["United States"], vec!["Austin"]);
    }

    #[test]
    fn test_other_keeps_every_unresolved_mention() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver
            .resolve(&["Reuters", "Paris", "AFP", "Reuters"])
            .unwrap();
        assert_eq!(model.other, vec!["Reuters", "AFP", "Reuters"]);
    }

    #[test]
    fn test_padded_candidate_is_not_a_city() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let model = resolver.resolve(&[" Paris"]).unwrap();
        assert!(model.cities.is_empty());
        assert_eq!(model.other, vec![" Paris"]);
    }

    #[test]
    fn test_every_candidate_is_accounted_for() {
        let (resolver, _dir) = resolver_with(vec![
            paris(),
            record(2, "SE", "Sweden", "Stockholm", "Stockholm"),
            record(3, "ID", "Indonesia", "Bali", "Denpasar"),
        ]);
        let candidates = strings(&[
            "France", "paris", "BALI", "Stockholm", "Denpasar", "Gotham", "Indonesia", "gotham",
        ]);
        let model = resolver.resolve(&candidates).unwrap();

        let mut covered: HashSet<String> = HashSet::new();
        for name in model
            .countries
            .iter()
            .chain(&model.cities)
            .chain(&model.other)
            .chain(model.regions.iter().map(|r| &r.name))
        {
            covered.insert(fold(name));
        }
        let expected: HashSet<String> = candidates.iter().map(|c| fold(c)).collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn test_mention_counts_match_occurrences() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let candidates = strings(&["Paris", "France", "Paris", "PARIS", "Paris"]);
        let model = resolver.resolve(&candidates).unwrap();
        for mention in model.city_mentions.iter().chain(&model.country_mentions) {
            let occurrences = candidates.iter().filter(|c| **c == mention.name).count();
            assert_eq!(mention.count, occurrences, "{}", mention.name);
        }
        assert_eq!(model.city_mention_count("Paris"), 3);
    }

    #[test]
    fn test_addresses_reference_hierarchy() {
        let (resolver, _dir) = resolver_with(vec![
            paris(),
            record(2, "SE", "Sweden", "Stockholm", "Stockholm"),
            record(3, "SE", "Sweden", "Stockholm", "Solna"),
        ]);
        let model = resolver
            .resolve(&["Stockholm", "Solna", "Paris", "Île-de-France"])
            .unwrap();
        assert_eq!(model.address_strings.len(), 3);
        for address in &model.address_strings {
            let parts: Vec<&str> = address.split(", ").collect();
            let (city, region, country) = (parts[0], parts[1], parts[2]);
            assert!(model.region_cities[region].iter().any(|c| c == city));
            assert!(model.country_regions[country].iter().any(|r| r == region));
        }
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let (resolver, _dir) = resolver_with(vec![
            paris(),
            record(2, "US", "United States", "Missouri", "Columbia"),
            record(3, "CA", "Canada", "Ontario", "Columbia"),
        ]);
        let candidates = ["Columbia", "France", "Ontario", "Paris", "Nowhere"];
        let first = resolver.resolve(&candidates).unwrap();
        let second = resolver.resolve(&candidates).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ignore_list_filters_candidates() {
        let (store, _dir) = test_store();
        store.load(&[paris()]).unwrap();
        let resolver = LocationResolver::new(store).with_ignore_list(IgnoreList::new(["reuters"]));
        let model = resolver.resolve(&["Reuters", "Paris"]).unwrap();
        assert!(model.other.is_empty());
        assert_eq!(model.cities, vec!["Paris"]);
    }

    #[test]
    fn test_empty_candidates_skip_store() {
        let (store, _dir) = test_store();
        let resolver = LocationResolver::new(store);
        let model = resolver.resolve::<&str>(&[]).unwrap();
        assert!(model.is_empty());
        assert!(!resolver.store().has_data().unwrap());
    }

    struct CountingSource {
        rows: Vec<GeoRecord>,
        reads: Arc<AtomicUsize>,
    }

    impl GeoSource for CountingSource {
        fn read_rows(&self) -> Result<Vec<GeoRecord>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.rows.clone())
        }
    }

    #[test]
    fn test_empty_store_is_loaded_once() {
        let (store, _dir) = test_store();
        let reads = Arc::new(AtomicUsize::new(0));
        let resolver = LocationResolver::new(store).with_source(CountingSource {
            rows: vec![paris()],
            reads: reads.clone(),
        });

        let model = resolver.resolve(&["Paris"]).unwrap();
        assert_eq!(model.cities, vec!["Paris"]);
        resolver.resolve(&["Paris"]).unwrap();

        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert!(resolver.store().has_data().unwrap());
    }

    #[test]
    fn test_reload_from_source() {
        let (store, _dir) = test_store();
        store.load(&[paris()]).unwrap();
        let resolver = LocationResolver::new(store)
            .with_source(vec![record(5, "DE", "Germany", "Berlin", "Berlin")]);
        assert_eq!(resolver.reload().unwrap(), 1);
        let model = resolver.resolve(&["Paris", "Berlin"]).unwrap();
        assert_eq!(model.cities, vec!["Berlin"]);
        assert_eq!(model.other, vec!["Paris"]);
    }

    #[test]
    fn test_empty_store_without_source_fails_in_region_stage() {
        let (store, _dir) = test_store();
        let resolver = LocationResolver::new(store);
        let err = resolver.resolve(&["Paris"]).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Regions));
        assert!(matches!(
            err,
            LocationError::Stage { ref source, .. } if matches!(**source, LocationError::DataUnavailable(_))
        ));
    }

    #[test]
    fn test_empty_source_is_data_unavailable() {
        let (store, _dir) = test_store();
        let resolver = LocationResolver::new(store).with_source(Vec::<GeoRecord>::new());
        let err = resolver.resolve(&["Paris"]).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Regions));
        assert!(err.to_string().contains("contains no rows"));
    }

    struct BrokenCityStore {
        inner: SqliteGeoStore,
    }

    impl GeoStore for BrokenCityStore {
        fn load(&self, rows: &[GeoRecord]) -> Result<usize> {
            self.inner.load(rows)
        }
        fn has_data(&self) -> Result<bool> {
            self.inner.has_data()
        }
        fn find_by_subdivision_name(&self, names: &BTreeSet<String>) -> Result<Vec<GeoRecord>> {
            self.inner.find_by_subdivision_name(names)
        }
        fn find_by_city_name(&self, _names: &BTreeSet<String>) -> Result<Vec<GeoRecord>> {
            Err(LocationError::Storage(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn test_storage_failure_aborts_run() {
        let (inner, _dir) = test_store();
        inner.load(&[paris()]).unwrap();
        let resolver = LocationResolver::new(BrokenCityStore { inner });
        let err = resolver.resolve(&["France", "Paris"]).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::Cities));
    }

    #[test]
    fn test_stepwise_pipeline() {
        let (resolver, _dir) = resolver_with(vec![paris()]);
        let countries = resolver.resolve_countries(strings(&["France", "Île-de-France"]));
        assert_eq!(countries.countries, vec!["France"]);

        let regions = resolver.resolve_regions(countries).unwrap();
        assert_eq!(regions.other_countries, vec!["France"]);

        let cities = resolver.resolve_cities(regions).unwrap();
        assert!(cities.cities.is_empty());

        let model = resolver.finish(cities);
        assert_eq!(model.region_names(), vec!["Île-de-France"]);
        assert!(model.other.is_empty());
    }

    #[test]
    fn test_most_common_ties_keep_first_seen() {
        let mentions = most_common(&["b", "a", "a", "b", "c"]);
        let names: Vec<&str> = mentions.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }
}
