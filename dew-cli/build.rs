use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "structured-json",
    "structured-treeviz",
    "rich-json",
    "pages-json",
];

const FORMATS: &[&str] = &["structured", "tiptap", "html", "treeviz"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Module content file")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("dew")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert and inspect DewBloom module content")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List conversion formats and inspect transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a dew.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .subcommand(
            Command::new("inspect")
                .arg(input())
                .arg(
                    Arg::new("transform")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        )),
                ),
        )
        .subcommand(
            Command::new("convert")
                .arg(input())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("normalize").arg(input()))
        .subcommand(
            Command::new("paginate")
                .arg(input())
                .arg(Arg::new("boxes-per-page").long("boxes-per-page")),
        );

    generate_to(Bash, &mut cmd, "dew", &outdir)?;
    generate_to(Zsh, &mut cmd, "dew", &outdir)?;
    generate_to(Fish, &mut cmd, "dew", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
