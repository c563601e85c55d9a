use dromcom_engine::generators::{self, HDI_CEILING, LIFE_EXPECTANCY_CEILING};
use dromcom_engine::registry::{self, TERRITORIES};
use dromcom_engine::{AgeShareCheck, EngineConfig, SeriesKind, Synthesizer};
use proptest::prelude::*;

/// Any registry name, or one the registry has never heard of.
fn territory() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        (0..TERRITORIES.len()).prop_map(|i| TERRITORIES[i].name),
        Just("Clipperton"),
    ]
}

fn synth(start: i32, len: i32) -> Synthesizer {
    let config = EngineConfig {
        start_year: start,
        end_year: start + len - 1,
        age_share_check: AgeShareCheck::Off,
        ..EngineConfig::default()
    };
    Synthesizer::new(&config).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn property_columns_align_with_horizon(
        name in territory(),
        seed in any::<u64>(),
        start in 1990i32..2040,
        len in 1i32..80,
    ) {
        let run = synth(start, len).run(name, seed).unwrap();
        let years: Vec<i32> = run.series.years().iter().collect();
        prop_assert_eq!(years.len(), len as usize);
        prop_assert_eq!(years[0], start);
        for kind in SeriesKind::ALL {
            prop_assert_eq!(run.series.get(kind).len(), len as usize);
        }
        for (i, row) in run.series.rows().enumerate() {
            prop_assert_eq!(row.year, start + i as i32);
        }
    }

    #[test]
    fn property_natural_balance_is_births_minus_deaths(
        name in territory(),
        seed in any::<u64>(),
        start in 1990i32..2040,
        len in 1i32..60,
    ) {
        let run = synth(start, len).run(name, seed).unwrap();
        let b = run.series.get(SeriesKind::Births);
        let d = run.series.get(SeriesKind::Deaths);
        let nb = run.series.get(SeriesKind::NaturalBalance);
        for i in 0..nb.len() {
            prop_assert_eq!(nb[i], b[i] - d[i]);
        }
    }

    #[test]
    fn property_population_is_the_trend(
        name in territory(),
        seed in any::<u64>(),
        len in 1i32..60,
    ) {
        let run = synth(2002, len).run(name, seed).unwrap();
        let profile = registry::profile(name);
        for (i, p) in run.series.get(SeriesKind::Population).iter().enumerate() {
            let expected = generators::level(SeriesKind::Population, profile, i).unwrap();
            prop_assert_eq!(*p, expected);
        }
    }

    #[test]
    fn property_capped_levels_never_exceed_ceilings(
        index in 0..TERRITORIES.len(),
        offset in 0usize..10_000,
    ) {
        let profile = &TERRITORIES[index];
        let hdi = generators::level(SeriesKind::Hdi, profile, offset).unwrap();
        let life = generators::level(SeriesKind::LifeExpectancy, profile, offset).unwrap();
        prop_assert!(hdi <= HDI_CEILING);
        prop_assert!(life <= LIFE_EXPECTANCY_CEILING);
    }

    #[test]
    fn property_same_seed_same_series(name in territory(), seed in any::<u64>()) {
        let s = Synthesizer::default();
        prop_assert_eq!(s.run(name, seed).unwrap().series, s.run(name, seed).unwrap().series);
    }
}
