/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each configurable value is a [ConfigOption], which notes the bounds of valid values.

Configuration of the generator and benchmarks is kept apart, in [bench], as neither is a part of a solve.
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod bench;

mod parse_policy;
pub use parse_policy::ParsePolicy;

mod propagation;
pub use propagation::PropagationBound;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// What to do on reading a malformed line.
    pub parse_policy: ConfigOption<ParsePolicy>,

    /// How many passes of propagation to make.
    pub propagation: ConfigOption<PropagationBound>,
}

impl Default for Config {
    /// The default context propagates to a fixpoint and stops reading at the first malformed line.
    fn default() -> Self {
        Config {
            parse_policy: ConfigOption {
                name: "parse_policy",
                min: ParsePolicy::MIN,
                max: ParsePolicy::MAX,
                value: ParsePolicy::FailFast,
            },

            propagation: ConfigOption {
                name: "propagation",
                min: PropagationBound::MIN,
                max: PropagationBound::MAX,
                value: PropagationBound::Fixpoint,
            },
        }
    }
}
