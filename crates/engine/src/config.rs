use crate::options::CountModes;
use derive_builder::Builder;
use rwc_shared_kernel::InputSource;

/// Immutable configuration for one counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub modes: CountModes,
    #[builder(default)]
    pub input: InputSource,
}
