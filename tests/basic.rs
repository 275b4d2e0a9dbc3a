use horn_sat::{
    config::{Config, ParsePolicy},
    context::{Context, ContextState},
    reports::Report,
    types::err::{ErrorKind, LineError, ParseError, StateError},
};

fn context_from(theory: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.read_horn(theory.as_bytes()).is_ok());
    ctx
}

mod basic {
    use super::*;

    #[test]
    fn violated_constraint() {
        let mut ctx = context_from(", 1\n, 2\n1 2,\n");

        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.clause_strings(), vec![","]);

        assert_eq!(ctx.decide(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.report(), Report::Unsatisfiable);

        let witness = ctx.witness().expect("Missing witness");
        assert!(witness.is_constraint());
        assert!(witness.antecedents().is_empty());
    }

    #[test]
    fn fact_propagation() {
        let mut ctx = context_from(", 1\n1, 2\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.is_fact("2"));
        assert!(ctx.clause_db.is_empty());
        assert_eq!(ctx.fact_string(), "1 2");
        assert!(ctx.witness().is_none());
    }

    #[test]
    fn vacuous() {
        let mut ctx = context_from("");

        assert!(ctx.fact_db.is_empty());
        assert!(ctx.clause_db.is_empty());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn unrelated_clause() {
        let mut ctx = context_from("3 4, 5\n");

        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.clause_strings(), vec!["3 4, 5"]);
        assert_eq!(ctx.decide(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_constraint() {
        let mut ctx = context_from(",\n");
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn names_are_tokens() {
        let mut ctx = context_from(", 1\n12, 3\n");

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(!ctx.is_fact("12"));
        assert!(!ctx.is_fact("3"));
        assert_eq!(ctx.clause_strings(), vec!["12, 3"]);
    }

    #[test]
    fn blank_lines() {
        let mut ctx = Context::default();
        let info = ctx.read_horn(b"\n, 1\n   \n1,\n\n".as_slice()).unwrap();

        assert_eq!(info.lines, 5);
        assert_eq!(info.blank, 3);
        assert_eq!(info.facts, 1);
        assert_eq!(info.clauses, 1);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn direct_construction() {
        let mut ctx = Context::default();

        assert!(ctx.add_clause::<&str>(&[], Some("p")).is_ok());
        assert!(ctx.add_clause(&["p"], Some("q")).is_ok());
        assert!(ctx.add_clause(&["q", "r"], None).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.fact_string(), "p q");
        assert_eq!(ctx.clause_strings(), vec!["r,"]);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn fail_fast() {
        let mut ctx = Context::default();

        let result = ctx.read_horn(b", 1\n1 2\n3 4 5\n".as_slice());
        assert_eq!(
            result,
            Err(ErrorKind::Parse(ParseError::Line(2, LineError::MissingSeparator)))
        );
    }

    #[test]
    fn collect_all() {
        let mut config = Config::default();
        assert!(config.parse_policy.set(ParsePolicy::CollectAll).is_ok());
        let mut ctx = Context::from_config(config);

        let result = ctx.read_horn(b", 1\n1 2\n2, 3\n3, 4, 5\n4, 5 6\n".as_slice());
        assert_eq!(
            result,
            Err(ErrorKind::Malformed(vec![
                ParseError::Line(2, LineError::MissingSeparator),
                ParseError::Line(4, LineError::ExtraSeparator),
                ParseError::Line(5, LineError::ExcessConsequent),
            ]))
        );
    }

    #[test]
    fn collect_all_without_errors() {
        let mut config = Config::default();
        assert!(config.parse_policy.set(ParsePolicy::CollectAll).is_ok());
        let mut ctx = Context::from_config(config);

        let info = ctx.read_horn(b", 1\n1, 2\n".as_slice()).unwrap();
        assert_eq!(info.facts, 1);
        assert_eq!(info.clauses, 1);
        assert_eq!(info.atoms, 2);
    }

    #[test]
    fn invalid_utf8() {
        let mut ctx = Context::default();
        let result = ctx.read_horn(b", 1\n\xff, 2\n".as_slice());
        assert_eq!(result, Err(ErrorKind::Parse(ParseError::Read(1))));
    }

    #[test]
    fn repeated_facts() {
        let mut ctx = context_from(", 1\n, 1\n, 2\n");
        assert_eq!(ctx.fact_db.len(), 2);
        assert_eq!(ctx.fact_string(), "1 2");
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn fail_fast_invalidates() {
        // The constraint after the malformed line would make the theory unsatisfiable.
        let mut ctx = Context::default();
        assert!(ctx.read_horn(b", 1\n1, 2\nbad line\n2,\n".as_slice()).is_err());

        assert_eq!(ctx.state(), &ContextState::Invalid);
        assert_eq!(ctx.solve(), Err(StateError::InvalidInput));
        assert_eq!(ctx.propagate(), Err(StateError::InvalidInput));
        assert_eq!(ctx.decide(), Err(StateError::InvalidInput));
        assert_eq!(ctx.report(), Report::Unknown);
    }

    #[test]
    fn collect_all_invalidates() {
        let mut config = Config::default();
        assert!(config.parse_policy.set(ParsePolicy::CollectAll).is_ok());
        let mut ctx = Context::from_config(config);

        assert!(ctx.read_horn(b", 1\n1 2\n1, 2\n".as_slice()).is_err());
        assert_eq!(ctx.solve(), Err(StateError::InvalidInput));

        assert_eq!(
            ctx.add_fact("3"),
            Err(ErrorKind::State(StateError::InvalidInput))
        );
        assert!(ctx.read_horn(b", 3\n".as_slice()).is_err());
        assert_eq!(ctx.state(), &ContextState::Invalid);
    }

    #[test]
    fn unreadable_input_invalidates() {
        let mut ctx = Context::default();
        assert!(ctx.read_horn(b", 1\n\xff,\n".as_slice()).is_err());
        assert_eq!(ctx.solve(), Err(StateError::InvalidInput));
    }
}

mod states {
    use super::*;

    #[test]
    fn linear() {
        let mut ctx = Context::default();
        assert_eq!(ctx.state(), &ContextState::Unparsed);
        assert_eq!(ctx.report(), Report::Unknown);

        assert!(ctx.add_fact("1").is_ok());
        assert_eq!(ctx.state(), &ContextState::Parsed);

        assert_eq!(ctx.decide(), Err(StateError::NotPropagated));

        assert!(ctx.propagate().is_ok());
        assert_eq!(ctx.state(), &ContextState::Propagated);
        assert_eq!(
            ctx.add_fact("2"),
            Err(ErrorKind::State(StateError::InputClosed))
        );
        assert!(ctx.read_horn(b", 2\n".as_slice()).is_err());

        assert_eq!(ctx.decide(), Ok(Report::Satisfiable));
        assert_eq!(ctx.state(), &ContextState::Decided(Report::Satisfiable));

        assert_eq!(ctx.propagate(), Err(StateError::PropagationClosed));
        assert_eq!(ctx.decide(), Ok(Report::Satisfiable));
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn empty_read_opens_input() {
        let mut ctx = Context::default();
        let info = ctx.read_horn(b"".as_slice()).unwrap();

        assert_eq!(info.lines, 0);
        assert_eq!(ctx.state(), &ContextState::Parsed);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn unparsed_solve() {
        let mut ctx = Context::default();
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }
}
