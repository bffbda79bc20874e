//! # Command Line Interface
//!
//! Simple subcommands are directly in `main.rs`.
//! The `convert` subcommand is in the `commands` module.

use clap::{arg,crate_version,Command,ArgAction};
use env_logger;
use std::io::Read;
use std::str::FromStr;
#[cfg(windows)]
use colored;
use log::error;
use apnkit::commands;
use apnkit::commands::{TableType,CommandError};
use apnkit::apn;
use apnkit::apn::tag_maps;

const RCH: &str = "unreachable was reached";

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();
    let long_help =
"apnkit is always invoked with exactly one of several subcommands.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
convert a file:        `apnkit convert -s SEN.APN -o tsv`
convert a directory:   `apnkit convert -s corpus -o tsv -e`
convert to stdout:     `apnkit convert -s SEN.APN`
check a file:          `apnkit verify -e < SEN.APN`
dump the POS table:    `apnkit tags -t pos`";

    let mut main_cmd = Command::new("apnkit")
        .about("Converts LASLA APN annotation files to tab separated values.")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(Command::new("convert")
        .arg(arg!(-s --source <PATH> "APN file, or directory containing APN files").required(true))
        .arg(arg!(-o --output <DIR> "directory where TSV files are written").required(false))
        .arg(arg!(-e --enhanced "remap morphology and part of speech codes").action(ArgAction::SetTrue))
        .arg(arg!(--"no-disambiguation" "strip the homonym digit from lemmas").action(ArgAction::SetTrue))
        .arg(arg!(--lowercase "lowercase the lemma value").action(ArgAction::SetTrue))
        .arg(arg!(--lemmas "also write the lemma inventory to _lemma.txt").action(ArgAction::SetTrue))
        .about("convert APN files, writing TSV files or stdout"));
    main_cmd = main_cmd.subcommand(Command::new("verify")
        .arg(arg!(-e --enhanced "also check codes against the tables").action(ArgAction::SetTrue))
        .about("read APN from stdin and error check"));
    main_cmd = main_cmd.subcommand(Command::new("tags")
        .arg(arg!(-t --type <TYPE> "which table to dump").required(true).value_parser(["pos","morph"]))
        .arg(arg!(--json "dump as JSON instead of TSV").action(ArgAction::SetTrue))
        .about("write a lookup table to stdout"));

    let matches = main_cmd.get_matches();

    // Convert files

    if let Some(cmd) = matches.subcommand_matches("convert") {
        return commands::convert::convert(cmd);
    }

    // Verify

    if let Some(cmd) = matches.subcommand_matches("verify") {
        if atty::is(atty::Stream::Stdin) {
            error!("line entry is not supported for `verify`, please pipe something in");
            return Err(Box::new(CommandError::InvalidCommand));
        }
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        let mut converter = apn::Converter::new(cmd.get_flag("enhanced"));
        let (content,mut errors) = converter.convert(&text);
        if errors.len()>0 {
            for (num,err) in &errors {
                error!("line {}: {}",num,err);
            }
            return Err(Box::new(errors.remove(0).1));
        }
        println!("{} records",content.lines().filter(|l| l.len()>0).count()-1);
        eprintln!("Syntax OK");
        return Ok(());
    }

    // Dump a lookup table

    if let Some(cmd) = matches.subcommand_matches("tags") {
        let typ = TableType::from_str(cmd.get_one::<String>("type").expect(RCH))?;
        if cmd.get_flag("json") {
            let mut obj = json::JsonValue::new_object();
            match typ {
                TableType::Pos => {
                    for (code,tag) in tag_maps::POS_MAP {
                        obj[code] = json::JsonValue::String(tag.to_string());
                    }
                },
                TableType::Morph => {
                    for (slot,table) in tag_maps::MORPH_SLOTS.iter().enumerate() {
                        let mut sub = json::JsonValue::new_object();
                        for (code,feature) in table.iter() {
                            let key = code.to_string();
                            sub[key.as_str()] = json::JsonValue::String(feature.to_string());
                        }
                        obj[tag_maps::SLOT_NAMES[slot]] = sub;
                    }
                }
            }
            println!("{}",obj.pretty(4));
            return Ok(());
        }
        match typ {
            TableType::Pos => {
                for (code,tag) in tag_maps::POS_MAP {
                    println!("{}\t{}",code,tag);
                }
            },
            TableType::Morph => {
                for (slot,table) in tag_maps::MORPH_SLOTS.iter().enumerate() {
                    for (code,feature) in table.iter() {
                        println!("{}\t{}\t{}",tag_maps::SLOT_NAMES[slot],code,feature);
                    }
                }
            }
        }
        return Ok(());
    }

    error!("No subcommand was found, try `apnkit --help`");
    return Err(Box::new(CommandError::InvalidCommand));

}
