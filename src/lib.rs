//! # `apnkit` main library
//!
//! This library converts annotation files produced by the LASLA project
//! (Laboratoire d'Analyse Statistique des Langues Anciennes) into
//! tab separated values suitable for modern corpus tooling.
//!
//! ## Architecture
//!
//! The conversion core is in the `apn` module and is built from pure parts:
//! * `apn::parse_line` splits one fixed-width APN record into its fields
//! * `apn::mapper::TagMapper` rewrites the coded fields into the enhanced
//!   tag set using the constant tables in `apn::tag_maps`
//! * `apn::Converter` drives both over the lines of one file and renders
//!   the TSV content
//!
//! A record either converts fully or fails with `apn::Error`; the caller
//! decides what to do with a failed line.  The CLI driver in `commands`
//! logs and skips.
//!
//! ## Fixed-width input
//!
//! APN records are one per line with hardcoded column offsets, see
//! `apn::COLUMNS`.  The column layout is a format constant inherited from
//! the LASLA tooling, it is not derived from the data.

pub mod apn;
pub mod commands;

use std::path::{Path,PathBuf};
use log::warn;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;

const APN_GLOB_PATTERN: &str = "*.APN";

/// Resolve the input argument to a list of files.
/// A directory is searched for `*.APN` at its top level, anything else
/// is taken to be a single input file.
pub fn gather_input_files(source: &str) -> Result<Vec<PathBuf>,DYNERR> {
    let src = Path::new(source);
    if src.is_dir() {
        let patt = src.join(APN_GLOB_PATTERN);
        let mut ans: Vec<PathBuf> = Vec::new();
        for entry in glob::glob(&patt.to_string_lossy())? {
            ans.push(entry?);
        }
        ans.sort();
        if ans.len()==0 {
            warn!("no APN files found in {}",source);
        }
        return Ok(ans);
    }
    if src.is_file() {
        return Ok(vec![src.to_path_buf()]);
    }
    Err(Box::new(commands::CommandError::FileNotFound))
}

/// Build the output path for an input file: the base name keeps its stem
/// and gets a `tsv` extension inside the output directory.
pub fn output_path(input: &Path,output_dir: &Path) -> PathBuf {
    let stem = match input.file_stem() {
        Some(s) => s.to_string_lossy().to_string(),
        None => "out".to_string()
    };
    output_dir.join(stem + ".tsv")
}

/// Read a file as text.  APN files are ascii in practice, anything else
/// is decoded lossily rather than refused.
pub fn read_file_text(path: &Path) -> Result<String,DYNERR> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

#[test]
fn test_output_path() {
    let out = Path::new("tsv");
    assert_eq!(output_path(Path::new("corpus/SEN.APN"),out),Path::new("tsv").join("SEN.tsv"));
    assert_eq!(output_path(Path::new("PLIN.apn"),out),Path::new("tsv").join("PLIN.tsv"));
    assert_eq!(output_path(Path::new("noext"),out),Path::new("tsv").join("noext.tsv"));
}
