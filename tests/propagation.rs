use std::collections::BTreeSet;

use rand::{rngs::StdRng, SeedableRng};

use horn_sat::{
    config::{bench::GeneratorConfig, Config, PropagationBound},
    context::Context,
    db::{clause::ClauseDB, fact::FactDB},
    generator::generate,
    procedures::{decide::is_satisfiable, propagate::propagation_pass},
    reports::Report,
    structures::literal::Literal,
};

fn single_pass_config() -> Config {
    let mut config = Config::default();
    assert!(config.propagation.set(PropagationBound::Single).is_ok());
    config
}

fn generated_context(seed: u64, clauses: usize) -> Context {
    let mut generator_config = GeneratorConfig::default();
    generator_config.clauses.value = clauses;
    let theory = generate(&generator_config, &mut StdRng::seed_from_u64(seed)).unwrap();

    let mut ctx = Context::default();
    assert!(ctx.read_horn(theory.as_bytes()).is_ok());
    ctx
}

fn fact_set(fact_db: &FactDB) -> BTreeSet<Literal> {
    fact_db.iter().copied().collect()
}

fn clause_set(ctx: &Context) -> BTreeSet<String> {
    ctx.clause_strings().into_iter().collect()
}

mod bounds {
    use super::*;

    const CHAIN: &str = ", 1\n1, 2\n2, 3\n3,\n";

    #[test]
    fn chain_single_pass() {
        let mut ctx = Context::from_config(single_pass_config());
        assert!(ctx.read_horn(CHAIN.as_bytes()).is_ok());

        let report = ctx.propagate().unwrap();
        assert_eq!(report.passes, 1);
        assert_eq!(ctx.fact_string(), "1 2");
        assert_eq!(ctx.clause_strings(), vec!["2, 3", "3,"]);

        assert_eq!(ctx.decide(), Ok(Report::Satisfiable));
    }

    #[test]
    fn chain_fixpoint() {
        let mut ctx = Context::default();
        assert!(ctx.read_horn(CHAIN.as_bytes()).is_ok());

        let report = ctx.propagate().unwrap();
        assert_eq!(report.passes, 4);
        assert_eq!(report.promoted, 2);
        assert_eq!(ctx.fact_string(), "1 2 3");
        assert_eq!(ctx.clause_strings(), vec![","]);

        assert_eq!(ctx.decide(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn single_pass_decides_against_final_facts() {
        // 2 is discovered during the pass, and the constraint on 1 and 2 holds after the pass.
        let mut ctx = Context::from_config(single_pass_config());
        assert!(ctx.read_horn(b", 1\n1, 2\n1 2,\n".as_slice()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.clause_strings(), vec!["2,"]);
    }

    #[test]
    fn facts_discovered_once() {
        let mut ctx = Context::default();
        assert!(ctx.read_horn(b", 1\n1, 2\n, 2\n1 1, 2\n".as_slice()).is_ok());
        // The fact line adds 2 directly, and so 2 is never discovered.
        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.counters.discovered, 0);

        let mut ctx = Context::default();
        assert!(ctx.read_horn(b", 1\n1, 2\n1 1, 2\n".as_slice()).is_ok());

        let report = ctx.propagate().unwrap();
        assert_eq!(report.promoted, 2);
        assert_eq!(report.discovered, vec![ctx.atom_db.literal_of("2").unwrap()]);
        assert_eq!(ctx.counters.promoted, 2);
        assert_eq!(ctx.counters.discovered, 1);
    }

    #[test]
    fn repeated_single_passes_reach_fixpoint() {
        let mut ctx = Context::from_config(single_pass_config());
        assert!(ctx.read_horn(CHAIN.as_bytes()).is_ok());

        let mut passes = 0;
        loop {
            let report = ctx.propagate().unwrap();
            passes += report.passes;
            if report.subsumed == 0 && report.stripped == 0 && report.promoted == 0 {
                break;
            }
        }

        assert_eq!(passes, 4);

        assert_eq!(ctx.fact_string(), "1 2 3");
        assert_eq!(ctx.decide(), Ok(Report::Unsatisfiable));
    }
}

mod properties {
    use super::*;

    #[test]
    fn monotonicity() {
        for seed in 0..20 {
            let mut ctx = generated_context(seed, 60);

            loop {
                let facts_before = fact_set(&ctx.fact_db);
                let keys_before = ctx.clause_db.iter().map(|(k, _)| k).collect::<Vec<_>>();

                let pass = propagation_pass(&mut ctx.fact_db, &mut ctx.clause_db);

                assert!(fact_set(&ctx.fact_db).is_superset(&facts_before));
                assert!(ctx.clause_db.len() <= keys_before.len());
                assert!(ctx.clause_db.iter().all(|(k, _)| keys_before.contains(&k)));

                if pass.is_fixpoint() {
                    break;
                }
            }
        }
    }

    #[test]
    fn subsumption() {
        for seed in 0..20 {
            let mut ctx = generated_context(seed, 60);

            let subsumed = ctx
                .clause_db
                .iter()
                .filter(|(_, c)| c.is_subsumed_by(&ctx.fact_db))
                .map(|(k, _)| k)
                .collect::<Vec<_>>();

            let pass = propagation_pass(&mut ctx.fact_db, &mut ctx.clause_db);
            assert_eq!(pass.subsumed, subsumed.len());
            assert!(subsumed.iter().all(|k| ctx.clause_db.get(*k).is_none()));
        }
    }

    #[test]
    fn promotion() {
        for seed in 0..20 {
            let mut ctx = generated_context(seed, 60);

            let consequents = ctx
                .clause_db
                .iter()
                .filter(|(_, c)| c.antecedents_hold(&ctx.fact_db))
                .filter_map(|(_, c)| c.consequent())
                .collect::<Vec<_>>();

            propagation_pass(&mut ctx.fact_db, &mut ctx.clause_db);
            assert!(consequents.iter().all(|c| ctx.fact_db.contains(*c)));
        }
    }

    #[test]
    fn idempotence() {
        for seed in 0..20 {
            let mut ctx = generated_context(seed, 80);
            assert!(ctx.propagate().is_ok());

            let facts = fact_set(&ctx.fact_db);
            let clauses = clause_set(&ctx);

            let again = ctx.propagate().unwrap();
            assert_eq!(again.passes, 1);
            assert!(again.discovered.is_empty());
            assert_eq!(fact_set(&ctx.fact_db), facts);
            assert_eq!(clause_set(&ctx), clauses);
        }
    }

    #[test]
    fn order_independence() {
        let lines = [", 1", ", 2", "1, 3", "3, 4", "2 3, 5", "5 6,", "1 2,", "4, 1"];

        let mut forward = Context::default();
        let mut backward = Context::default();
        for line in lines {
            assert!(forward.read_horn(line.as_bytes()).is_ok());
        }
        for line in lines.iter().rev() {
            assert!(backward.read_horn(line.as_bytes()).is_ok());
        }

        // The atoms issued differ, and so passes are compared through names.
        propagation_pass(&mut forward.fact_db, &mut forward.clause_db);
        propagation_pass(&mut backward.fact_db, &mut backward.clause_db);

        let forward_facts = forward.fact_string();
        let backward_facts = backward.fact_string();
        let mut forward_facts = forward_facts.split(' ').collect::<Vec<_>>();
        let mut backward_facts = backward_facts.split(' ').collect::<Vec<_>>();
        forward_facts.sort();
        backward_facts.sort();

        assert_eq!(forward_facts, backward_facts);
        assert_eq!(clause_set(&forward), clause_set(&backward));
    }

    #[test]
    fn constraints_are_retained() {
        let mut fact_db = FactDB::default();
        let mut clause_db = ClauseDB::default();

        let p = Literal::new(0);
        fact_db.insert(p);
        clause_db.store(horn_sat::structures::clause::HornClause::new(vec![p, p], None));

        let pass = propagation_pass(&mut fact_db, &mut clause_db);
        assert_eq!(pass.stripped, 2);
        assert_eq!(pass.promoted, 0);
        assert_eq!(clause_db.len(), 1);
        assert!(!is_satisfiable(&fact_db, &clause_db));
    }
}
