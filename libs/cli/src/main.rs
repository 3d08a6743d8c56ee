#[macro_use]
extern crate clap;
extern crate failure;
extern crate env_logger;
#[macro_use]
extern crate log;

use std::path::{Path, PathBuf};

use failure::Error;

use engine::{GenSrgs, GenSrgsConfig, SrgInputs, SrgOutputs};

fn app() -> clap::App<'static, 'static> {
    clap_app!(gen_srgs =>
        (version: crate_version!())
        (author: crate_authors!())
        (about: crate_description!())
        (@arg config: --config +takes_value conflicts_with[srg exc methods fields out extra_srg extra_exc] "A JSON file describing every input and output")
        (@arg srg: --srg +takes_value required_unless[config] "The notch2srg table")
        (@arg exc: --exc +takes_value required_unless[config] "The exception entries, in srg names")
        (@arg methods: --methods +takes_value required_unless[config] "MCP's methods.csv")
        (@arg fields: --fields +takes_value required_unless[config] "MCP's fields.csv")
        (@arg extra_srg: --("extra-srg") +takes_value +multiple number_of_values(1) "An additional notch2srg table")
        (@arg extra_exc: --("extra-exc") +takes_value +multiple number_of_values(1) "Additional exception entries, in mcp names")
        (@arg out: --out +takes_value "The output directory to place the generated tables")
    )
}

fn paths(matches: &clap::ArgMatches, name: &str) -> Vec<PathBuf> {
    matches.values_of(name)
        .map(|values| values.map(PathBuf::from).collect())
        .unwrap_or_default()
}

fn config_from_args(matches: &clap::ArgMatches) -> Result<GenSrgsConfig, Error> {
    if let Some(config) = matches.value_of("config") {
        return GenSrgsConfig::load(Path::new(config))
    }
    let required = |name: &str| {
        matches.value_of(name)
            .map(PathBuf::from)
            .ok_or_else(|| failure::format_err!("Missing --{}", name))
    };
    let inputs = SrgInputs {
        srg: required("srg")?,
        exc: required("exc")?,
        methods_csv: required("methods")?,
        fields_csv: required("fields")?,
        extra_srgs: paths(matches, "extra_srg"),
        extra_excs: paths(matches, "extra_exc"),
    };
    let out = PathBuf::from(matches.value_of("out").unwrap_or("."));
    Ok(GenSrgsConfig { inputs, outputs: SrgOutputs::in_directory(&out) })
}

fn main() -> Result<(), Error> {
    ::env_logger::init();
    let matches = app().get_matches();
    let config = config_from_args(&matches)?;
    info!("Generating srgs from {}", config.inputs.srg.display());
    GenSrgs::new(config).run()
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn config_conflicts_with_every_input() {
        for flag in &["--srg", "--exc", "--methods", "--fields", "--out", "--extra-srg", "--extra-exc"] {
            let result = app().get_matches_from_safe(vec!["gen-srgs", "--config", "task.json", flag, "x"]);
            assert!(result.is_err(), "{} was accepted alongside --config", flag);
        }
    }
    #[test]
    fn individual_paths() {
        let matches = app().get_matches_from(vec![
            "gen-srgs", "--srg", "joined.srg", "--exc", "joined.exc",
            "--methods", "methods.csv", "--fields", "fields.csv",
            "--extra-exc", "a.exc", "--extra-exc", "b.exc", "--out", "build"
        ]);
        let config = config_from_args(&matches).unwrap();
        assert_eq!(config.inputs.srg, PathBuf::from("joined.srg"));
        assert_eq!(config.inputs.extra_excs, vec![PathBuf::from("a.exc"), PathBuf::from("b.exc")]);
        assert!(config.inputs.extra_srgs.is_empty());
        assert_eq!(config.outputs.mcp_exc, PathBuf::from("build/mcp.exc"));
    }
}
