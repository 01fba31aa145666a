use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["ast-treeviz", "ast-repr", "ast-json", "ast-quichem"];

// Mirror of FormatRegistry::default()
const AVAILABLE_FORMATS: &[&str] = &[
    "html", "latex", "mhchem", "plain", "quichem", "repr", "rst", "treeviz",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("quichem")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders chemical shorthand as HTML, LaTeX, mhchem, reStructuredText or text")
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .arg(Arg::new("notation").required(true).index(1))
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("convert")
                .arg(Arg::new("notation").required(true).index(1))
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_FORMATS,
                        )),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "quichem", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "quichem", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "quichem", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
