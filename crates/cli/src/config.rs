// crates/cli/src/config.rs
use crate::args::Args;
pub use rwc_engine::config::{Config, ConfigBuilder};
use rwc_engine::options::CountModes;
use rwc_shared_kernel::{InputSource, RwcError};

impl TryFrom<Args> for Config {
    type Error = RwcError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let extra = args.extra();
        if !extra.is_empty() {
            return Err(RwcError::usage(format!(
                "unexpected extra arguments: {}",
                extra
                    .iter()
                    .map(|arg| arg.to_string_lossy())
                    .collect::<Vec<_>>()
                    .join(" ")
            )));
        }

        if let Some(feature) = args.unsupported_mode() {
            return Err(RwcError::not_implemented(feature));
        }

        let modes = CountModes {
            lines: args.lines,
            words: args.words,
            bytes: args.bytes,
            chars: args.chars,
        }
        .or_default_set();

        ConfigBuilder::default()
            .modes(modes)
            .input(InputSource::from_arg(args.file()))
            .build()
            .map_err(|e| RwcError::usage(e.to_string()))
    }
}
