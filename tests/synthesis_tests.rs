#[cfg(test)]
mod tests {
    use dromcom_engine::consistency::{self, age_share_overflows};
    use dromcom_engine::generators::{self, HDI_CEILING};
    use dromcom_engine::registry::{self, TERRITORIES};
    use dromcom_engine::{
        AgeShareCheck, BalanceStrategy, EngineConfig, EngineError, FlatNoise, SeriesKind,
        ShockTable, Synthesizer, YearIndex,
    };

    fn synth_over(start: i32, end: i32) -> Synthesizer {
        let config = EngineConfig { start_year: start, end_year: end, ..EngineConfig::default() };
        Synthesizer::new(&config).unwrap()
    }

    /// Trend level at `year`, before cycle, events and noise.
    fn level(territory: &str, kind: SeriesKind, years: &YearIndex, year: i32) -> f64 {
        let offset = years.offset_of(year).unwrap();
        generators::level(kind, registry::profile(territory), offset).unwrap()
    }

    // ========== Shape ==========

    #[test]
    fn test_every_column_matches_the_horizon() {
        let synth = Synthesizer::default();
        for name in registry::names().chain(["Atlantis"]) {
            let run = synth.run(name, 42).unwrap();
            assert_eq!(run.series.len(), 24);
            for kind in SeriesKind::ALL {
                assert_eq!(run.series.get(kind).len(), 24, "{} {}", name, kind.column());
            }
            let rows: Vec<_> = run.series.rows().collect();
            assert_eq!(rows.first().map(|r| r.year), Some(2002));
            assert_eq!(rows.last().map(|r| r.year), Some(2025));
        }
    }

    #[test]
    fn test_single_year_horizon() {
        let run = synth_over(2010, 2010).run("Guadeloupe", 3).unwrap();
        assert_eq!(run.series.len(), 1);
        let summary = run.summary();
        assert_eq!(summary.population_growth, 0.0);
        assert_eq!(summary.mean_population, 390_000.0);
    }

    #[test]
    fn test_inverted_horizon_is_rejected() {
        assert!(matches!(
            YearIndex::new(2025, 2002),
            Err(EngineError::InvalidHorizon { start: 2025, end: 2002 })
        ));
        let config = EngineConfig { start_year: 2030, end_year: 2029, ..EngineConfig::default() };
        assert!(Synthesizer::new(&config).is_err());

        let config = EngineConfig {
            start_year: -2_000_000_000,
            end_year: 2_000_000_000,
            ..EngineConfig::default()
        };
        assert!(matches!(Synthesizer::new(&config), Err(EngineError::InvalidHorizon { .. })));
    }

    // ========== Determinism ==========

    #[test]
    fn test_same_seed_is_bit_identical() {
        let synth = Synthesizer::default();
        let a = synth.run("La Réunion", 2024).unwrap();
        let b = synth.run("La Réunion", 2024).unwrap();
        assert_eq!(a.series, b.series);
        let c = synth.run("La Réunion", 2025).unwrap();
        assert_ne!(a.series, c.series);
        // population draws nothing, so seeds agree on it
        assert_eq!(a.series.get(SeriesKind::Population), c.series.get(SeriesKind::Population));
    }

    // ========== Natural Balance ==========

    #[test]
    fn test_consistent_balance_is_exact() {
        let synth = Synthesizer::default();
        for seed in 0..5 {
            for name in registry::names() {
                let run = synth.run(name, seed).unwrap();
                let b = run.series.get(SeriesKind::Births);
                let d = run.series.get(SeriesKind::Deaths);
                let nb = run.series.get(SeriesKind::NaturalBalance);
                for i in 0..nb.len() {
                    assert_eq!(nb[i], b[i] - d[i], "{} seed {} offset {}", name, seed, i);
                }
            }
        }
    }

    #[test]
    fn test_independent_balance_uses_offset_zero() {
        let synth = Synthesizer::default().with_balance(BalanceStrategy::Independent);
        let run = synth.run_with("Guyane", &mut FlatNoise).unwrap();
        let cfg = registry::lookup("Guyane");
        let expected = cfg.births_base() - cfg.deaths_base();
        for (i, v) in run.series.get(SeriesKind::NaturalBalance).iter().enumerate() {
            assert_eq!(*v, expected, "offset {}", i);
        }
        // the table's own births still follow the trend
        let b = run.series.get(SeriesKind::Births);
        assert!(b[23] < b[0]);
    }

    #[test]
    fn test_independent_balance_decouples_under_noise() {
        let synth = Synthesizer::default().with_balance(BalanceStrategy::Independent);
        let run = synth.run("Martinique", 8).unwrap();
        let b = run.series.get(SeriesKind::Births);
        let d = run.series.get(SeriesKind::Deaths);
        let nb = run.series.get(SeriesKind::NaturalBalance);
        let matching = (0..nb.len()).filter(|&i| nb[i] == b[i] - d[i]).count();
        assert_eq!(matching, 0);
    }

    // ========== Ceilings & Drift ==========

    #[test]
    fn test_hdi_ceiling_holds_before_events() {
        let synth = synth_over(2002, 2200);
        for p in TERRITORIES.iter() {
            let raw = synth.generate_raw(p.name, &mut FlatNoise).unwrap();
            for v in raw.get(SeriesKind::Hdi) {
                assert!(*v <= HDI_CEILING, "{} hdi {}", p.name, v);
            }
        }
    }

    #[test]
    fn test_long_horizon_drifts_negative_unclamped() {
        let synth = synth_over(2002, 2150).with_age_share_check(AgeShareCheck::Off);
        let run = synth.run("Mayotte", 1).unwrap();
        let rates = run.series.get(SeriesKind::BirthRate);
        assert!(rates[0] > 0.0);
        assert!(*rates.last().unwrap() < 0.0, "birth rate should drift below zero");
        let youth = run.series.get(SeriesKind::YouthShare);
        assert!(*youth.last().unwrap() < 0.0);
    }

    #[test]
    fn test_enforced_age_share_check() {
        let enforced = synth_over(2002, 2300).with_age_share_check(AgeShareCheck::Enforce);
        let err = enforced.run("Saint-Pierre-et-Miquelon", 4).unwrap_err();
        assert!(matches!(err, EngineError::AgeShareOverflow { .. }));

        let warned = synth_over(2002, 2300);
        let run = warned.run("Saint-Pierre-et-Miquelon", 4).unwrap();
        assert!(!age_share_overflows(&run.series).is_empty());
    }

    // ========== Registry Fallback ==========

    #[test]
    fn test_unknown_territory_uses_default_record() {
        let synth = Synthesizer::default();
        let run = synth.run_with("unknown-name-xyz", &mut FlatNoise).unwrap();
        assert!(!run.known);
        assert_eq!(run.series.get(SeriesKind::Population)[0], 100_000.0);
        assert_eq!(run.series.get(SeriesKind::BirthRate)[0], 12.0);
        assert_eq!(run.series.get(SeriesKind::DeathRate)[0], 7.0);
        assert_eq!(run.series.get(SeriesKind::Hdi)[0], 0.75);
    }

    #[test]
    fn test_unknown_shares_trends_with_standard_territories() {
        let synth = Synthesizer::default();
        let unknown = synth.run_with("unknown-name-xyz", &mut FlatNoise).unwrap();
        let wallis = synth.run_with("Wallis-et-Futuna", &mut FlatNoise).unwrap();
        for kind in [
            SeriesKind::LifeExpectancy,
            SeriesKind::MigrationBalance,
            SeriesKind::YouthShare,
            SeriesKind::ElderlyShare,
            SeriesKind::UnemploymentRate,
            SeriesKind::GdpPerCapita,
        ] {
            assert_eq!(unknown.series.get(kind), wallis.series.get(kind), "{}", kind.column());
        }
        let pu = unknown.series.get(SeriesKind::Population);
        let pw = wallis.series.get(SeriesKind::Population);
        for i in 0..pu.len() {
            assert!((pu[i] / pu[0] - pw[i] / pw[0]).abs() < 1e-12);
        }
    }

    // ========== Shocks ==========

    #[test]
    fn test_crisis_multipliers_apply_everywhere() {
        let synth = Synthesizer::default();
        let years = *synth.years();
        for name in registry::names().chain(["Atlantis"]) {
            let run = synth.run_with(name, &mut FlatNoise).unwrap();
            let u = run.series.get(SeriesKind::UnemploymentRate);
            let at = |year: i32| u[years.offset_of(year).unwrap()];
            let trend = |year: i32| level(name, SeriesKind::UnemploymentRate, &years, year);
            assert!((at(2008) / trend(2008) - 1.15 * 1.12).abs() < 1e-12, "{} 2008", name);
            assert!((at(2009) / trend(2009) - 1.15 * 1.12).abs() < 1e-12, "{} 2009", name);
            assert!((at(2020) / trend(2020) - 1.15 * 1.15).abs() < 1e-12, "{} 2020", name);
            assert!((at(2021) / trend(2021) - 1.15 * 1.15).abs() < 1e-12, "{} 2021", name);
            assert!((at(2006) / trend(2006) - 0.92).abs() < 1e-12, "{} 2006", name);

            // territory events also move GDP once they have started
            let local = match name {
                "Mayotte" => 1.02,
                "Nouvelle-Calédonie" => 0.98,
                "La Réunion" => 1.01,
                _ => 1.0,
            };
            let g = run.series.get(SeriesKind::GdpPerCapita);
            let gdp_ratio = |year: i32| {
                g[years.offset_of(year).unwrap()] / level(name, SeriesKind::GdpPerCapita, &years, year)
            };
            for year in [2008, 2009] {
                assert!((gdp_ratio(year) - 0.95 * 0.96).abs() < 1e-12, "{} gdp {}", name, year);
            }
            for year in [2020, 2021] {
                let expected = 0.95 * 0.92 * local;
                assert!((gdp_ratio(year) - expected).abs() < 1e-12, "{} gdp {}", name, year);
            }

            let dr = run.series.get(SeriesKind::DeathRate);
            let i2021 = years.offset_of(2021).unwrap();
            let dr_trend = level(name, SeriesKind::DeathRate, &years, 2021);
            assert!((dr[i2021] / dr_trend - 1.08).abs() < 1e-12, "{} death rate", name);
        }
    }

    #[test]
    fn test_territory_events_are_scoped() {
        let synth = Synthesizer::default();
        let years = *synth.years();
        let guyane = synth.run_with("Guyane", &mut FlatNoise).unwrap();
        let martinique = synth.run_with("Martinique", &mut FlatNoise).unwrap();
        let i2017 = years.offset_of(2017).unwrap();
        let gu = guyane.series.get(SeriesKind::UnemploymentRate)[i2017];
        let mu = martinique.series.get(SeriesKind::UnemploymentRate)[i2017];
        // 2017 is also a favourable cycle year for everyone
        assert!((gu / level("Guyane", SeriesKind::UnemploymentRate, &years, 2017) - 0.92 * 1.08).abs() < 1e-12);
        assert!((mu / level("Martinique", SeriesKind::UnemploymentRate, &years, 2017) - 0.92).abs() < 1e-12);
    }

    #[test]
    fn test_empty_shock_table_leaves_trends_alone() {
        let synth = Synthesizer::default().with_shocks(ShockTable::empty());
        let years = *synth.years();
        let run = synth.run_with("Mayotte", &mut FlatNoise).unwrap();
        for kind in [SeriesKind::UnemploymentRate, SeriesKind::GdpPerCapita, SeriesKind::Hdi] {
            for year in years.iter() {
                let v = run.series.get(kind)[years.offset_of(year).unwrap()];
                assert_eq!(v, level("Mayotte", kind, &years, year), "{} {}", kind.column(), year);
            }
        }
    }

    // ========== Mayotte Scenario ==========

    #[test]
    fn test_mayotte_scenario() {
        let synth = Synthesizer::default();
        let years = *synth.years();
        let run = synth.run("Mayotte", 77).unwrap();

        let population = run.series.get(SeriesKind::Population);
        assert!(population.windows(2).all(|w| w[1] > w[0]), "population must rise every year");

        let flat = synth.run_with("Mayotte", &mut FlatNoise).unwrap();
        for (i, v) in flat.series.get(SeriesKind::YouthShare).iter().enumerate() {
            assert!((v - 0.55 * (1.0 - 0.008 * i as f64)).abs() < 1e-12);
        }

        let mut series = synth.generate_raw("Mayotte", &mut FlatNoise).unwrap();
        let raw_hdi = series.get(SeriesKind::Hdi).to_vec();
        synth.reconcile("Mayotte", &mut series, &mut FlatNoise).unwrap();
        let hdi = series.get(SeriesKind::Hdi);
        for year in years.iter() {
            let i = years.offset_of(year).unwrap();
            let expected = if year >= 2011 { 1.01 } else { 1.0 };
            assert!((hdi[i] / raw_hdi[i] - expected).abs() < 1e-12, "year {}", year);
        }
    }

    #[test]
    fn test_reconcile_is_callable_on_its_own() {
        let synth = Synthesizer::default();
        let mut series = synth.generate_raw("Nouvelle-Calédonie", &mut FlatNoise).unwrap();
        let before = series.get(SeriesKind::MigrationBalance).to_vec();
        let input = synth.input("Nouvelle-Calédonie");
        consistency::reconcile(&input, &mut series, BalanceStrategy::Consistent, &mut FlatNoise);
        let after = series.get(SeriesKind::MigrationBalance);
        let i2018 = synth.years().offset_of(2018).unwrap();
        let i2019 = synth.years().offset_of(2019).unwrap();
        assert!((after[i2018] / before[i2018] - 0.8).abs() < 1e-12);
        assert_eq!(after[i2019], before[i2019]);
    }
}
