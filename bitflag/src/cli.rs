//! Command-line front end
//!
//! With no subcommand the binary prints the rendering of
//! `Active | Receive`, which is `5(Active|Receive)`. Subcommands render
//! arbitrary values, combine members by name, parse rendered strings back
//! and list the member table.

use bitflag_core::{
    lookup_name, parse_bits, render, validate_bits, BitFlag, FlagError, MEMBERS,
};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Render and inspect Active/Send/Receive flag sets")]
pub struct Cli {
    /// Emit one JSON object per line instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render raw integer values (decimal, 0x hex or 0b binary)
    Render {
        /// Values to render, one output line each
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Reject values that set bits outside the known members
        #[arg(long)]
        strict: bool,
    },
    /// OR members together by name and render the result
    Combine {
        /// Member names, case-insensitive
        #[arg(required = true)]
        members: Vec<String>,
    },
    /// Parse a rendered string such as `5(Active|Receive)` into its value
    Parse {
        /// Rendered flag string
        text: String,
    },
    /// List members in declaration order
    Members,
}

/// Errors surfaced by the command-line front end
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Flag(#[from] FlagError),
    #[error("Unknown member name: {0}")]
    UnknownMember(String),
    #[cfg(feature = "serde")]
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(not(feature = "serde"))]
    #[error("JSON output requires the `serde` feature")]
    JsonUnavailable,
}

/// Execute a parsed command line and return the output lines
///
/// Nothing is printed here; `main` owns stdout.
pub fn run(cli: &Cli) -> Result<Vec<String>, CliError> {
    let json = cli.json;

    match &cli.command {
        None => {
            let flag = BitFlag::ACTIVE | BitFlag::RECEIVE;
            Ok(vec![flag_line(flag, json)?])
        }
        Some(Commands::Render { values, strict }) => values
            .iter()
            .map(|raw| {
                let bits = parse_bits(raw)?;
                if *strict {
                    validate_bits(bits)?;
                } else if validate_bits(bits).is_err() {
                    warn!(bits, "value sets unknown bits; they are ignored in labels");
                }
                debug!(bits, "rendering");
                flag_line(BitFlag::from_bits_retain(bits), json)
            })
            .collect(),
        Some(Commands::Combine { members }) => {
            let flag = members.iter().try_fold(BitFlag::empty(), |acc, name| {
                lookup_name(name)
                    .map(|member| acc.combine(member))
                    .ok_or_else(|| CliError::UnknownMember(name.clone()))
            })?;
            debug!(bits = flag.bits(), count = members.len(), "combined members");
            Ok(vec![flag_line(flag, json)?])
        }
        Some(Commands::Parse { text }) => {
            let flag: BitFlag = text.parse()?;
            debug!(bits = flag.bits(), "parsed rendered flags");
            if json {
                Ok(vec![flag_json(flag)?])
            } else {
                Ok(vec![flag.bits().to_string()])
            }
        }
        Some(Commands::Members) => MEMBERS
            .iter()
            .map(|(label, member)| {
                if json {
                    member_json(label, *member)
                } else {
                    Ok(format!("{label} = {}", member.bits()))
                }
            })
            .collect(),
    }
}

fn flag_line(flag: BitFlag, json: bool) -> Result<String, CliError> {
    if json {
        flag_json(flag)
    } else {
        Ok(render(flag))
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct RenderedFlag {
    value: BitFlag,
    rendered: String,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct MemberEntry<'a> {
    label: &'a str,
    value: BitFlag,
}

#[cfg(feature = "serde")]
fn flag_json(flag: BitFlag) -> Result<String, CliError> {
    let entry = RenderedFlag {
        value: flag,
        rendered: render(flag),
    };
    Ok(serde_json::to_string(&entry)?)
}

#[cfg(feature = "serde")]
fn member_json(label: &str, member: BitFlag) -> Result<String, CliError> {
    let entry = MemberEntry {
        label,
        value: member,
    };
    Ok(serde_json::to_string(&entry)?)
}

#[cfg(not(feature = "serde"))]
fn flag_json(_flag: BitFlag) -> Result<String, CliError> {
    Err(CliError::JsonUnavailable)
}

#[cfg(not(feature = "serde"))]
fn member_json(_label: &str, _member: BitFlag) -> Result<String, CliError> {
    Err(CliError::JsonUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(args: &[&str]) -> Result<Vec<String>, CliError> {
        let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments should parse");
        run(&cli)
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_prints_active_receive() {
        assert_eq!(run_args(&["bitflag"]).unwrap(), ["5(Active|Receive)"]);
    }

    #[test]
    fn test_render_values() {
        let lines = run_args(&["bitflag", "render", "1", "0x2", "0b111", "0", "8", "-1"]).unwrap();
        assert_eq!(
            lines,
            [
                "1(Active)",
                "2(Send)",
                "7(Active|Send|Receive)",
                "0()",
                "0()",
                "-1(Active|Send|Receive)",
            ]
        );
    }

    #[test]
    fn test_render_negative_prefixed_values() {
        assert_eq!(run_args(&["bitflag", "render", "-0x8"]).unwrap(), ["0()"]);
        assert_eq!(
            run_args(&["bitflag", "render", "-0b1", "-0X7"]).unwrap(),
            ["-1(Active|Send|Receive)", "-7(Active)"]
        );
        assert_eq!(
            run_args(&["bitflag", "render", "--strict", "-0x0"]).unwrap(),
            ["0()"]
        );
    }

    #[test]
    fn test_render_strict_rejects_unknown_bits() {
        let err = run_args(&["bitflag", "render", "--strict", "9"]).unwrap_err();
        assert!(matches!(err, CliError::Flag(FlagError::UnknownBits(9))));

        assert_eq!(
            run_args(&["bitflag", "render", "--strict", "6"]).unwrap(),
            ["6(Send|Receive)"]
        );
    }

    #[test]
    fn test_render_invalid_number() {
        let err = run_args(&["bitflag", "render", "seven"]).unwrap_err();
        assert!(matches!(err, CliError::Flag(FlagError::InvalidNumber)));
    }

    #[test]
    fn test_combine_members() {
        assert_eq!(
            run_args(&["bitflag", "combine", "receive", "Active"]).unwrap(),
            ["5(Active|Receive)"]
        );
        assert_eq!(
            run_args(&["bitflag", "combine", "send", "SEND"]).unwrap(),
            ["2(Send)"]
        );

        let err = run_args(&["bitflag", "combine", "active", "idle"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownMember(ref name) if name == "idle"));
        assert_eq!(err.to_string(), "Unknown member name: idle");
    }

    #[test]
    fn test_parse_rendered_text() {
        assert_eq!(
            run_args(&["bitflag", "parse", "5(Active|Receive)"]).unwrap(),
            ["5"]
        );
        assert_eq!(run_args(&["bitflag", "parse", "0()"]).unwrap(), ["0"]);

        let err = run_args(&["bitflag", "parse", "5(Receive|Active)"]).unwrap_err();
        assert!(matches!(err, CliError::Flag(FlagError::LabelOrder)));
    }

    #[test]
    fn test_members_listing() {
        assert_eq!(
            run_args(&["bitflag", "members"]).unwrap(),
            ["Active = 1", "Send = 2", "Receive = 4"]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_output() {
        assert_eq!(
            run_args(&["bitflag", "--json"]).unwrap(),
            [r#"{"value":5,"rendered":"5(Active|Receive)"}"#]
        );
        assert_eq!(
            run_args(&["bitflag", "render", "--json", "8"]).unwrap(),
            [r#"{"value":8,"rendered":"0()"}"#]
        );
        assert_eq!(
            run_args(&["bitflag", "members", "--json"]).unwrap()[2],
            r#"{"label":"Receive","value":4}"#
        );

        let decoded: BitFlag = serde_json::from_str("6").unwrap();
        assert_eq!(decoded, BitFlag::SEND | BitFlag::RECEIVE);
    }
}
