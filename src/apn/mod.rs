//! # APN Module
//!
//! Handles the fixed-width APN record format.  One line is one annotated
//! token.  The leading identifier block carries a work siglum, a link
//! sign, and the sentence locator; the remaining columns carry the lemma,
//! the homonym digit, the surface form, a citation block, the morphology
//! code, and the part of speech code.
//!
//! `parse_line` extracts the fields of one line into a `Record`.
//! `Converter` runs the whole text of a file and renders TSV, remapping
//! the coded fields through `mapper::TagMapper` when enhanced mode is on.

pub mod tag_maps;
pub mod mapper;
#[cfg(test)]
mod mapper_test;

use std::collections::BTreeSet;
use regex::Regex;
use self::mapper::TagMapper;

/// Enumerates conversion errors.  The `Display` trait will print the
/// equivalent long message.
#[derive(thiserror::Error,Debug)]
pub enum Error {
    #[error("line does not fit the fixed width schema")]
    MalformedLine,
    #[error("part of speech code `{0}` is not in the table")]
    UnknownPosCode(String),
    #[error("morphology code `{0}` is not in the table")]
    UnknownMorphCode(String)
}

/// The fixed columns as (name,start,width) in character offsets.
/// The part of speech code occupies whatever follows the morphology
/// column and is not listed here.
pub const COLUMNS: [(&str,usize,usize);8] = [
    ("work",0,3),
    ("link",3,1),
    ("index",4,4),
    ("lemma",8,21),
    ("homonym",29,1),
    ("form",30,25),
    ("refs",55,12),
    ("morph",67,11)
];

/// start of the part of speech column
pub const POS_START: usize = 78;

/// shortest line that still contains the whole morphology column
pub const MIN_LINE_WIDTH: usize = 78;

pub const TSV_HEADER: &str = "form\tlemma\tmorph\tpos\tindex";

/// One annotated token.  In simple mode `morph` keeps the raw padded
/// code and `pos` the raw code with spaces removed; in enhanced mode
/// both are replaced by `mapper::TagMapper`.
#[derive(PartialEq,Debug)]
pub struct Record {
    pub form: String,
    pub lemma: String,
    pub morph: String,
    pub pos: String,
    pub index: String
}

impl Record {
    /// render as one TSV row, fields in header order
    pub fn to_tsv(&self) -> String {
        [
            self.form.as_str(),
            self.lemma.as_str(),
            self.morph.as_str(),
            self.pos.as_str(),
            self.index.as_str()
        ].join("\t")
    }
}

/// slice one named column out of the line, error if the boundary falls
/// outside the line
fn column(chars: &Vec<char>,name: &str) -> Result<String,Error> {
    for (col,start,width) in COLUMNS {
        if col==name {
            if start+width > chars.len() {
                return Err(Error::MalformedLine);
            }
            return Ok(chars[start..start+width].iter().collect());
        }
    }
    Err(Error::MalformedLine)
}

/// Editorial additions appear in the form column as `<word>` or `(word)`.
/// They are not part of the transmitted text and are removed.
fn strip_additions(form: &str) -> String {
    let patt = Regex::new(r"\s?[<(]\w+[>)]\s?").expect("regex parsing error");
    patt.replace_all(form,"").to_string()
}

/// Split one raw APN line into a `Record`.
///
/// The lemma and form are trimmed of padding, the homonym digit is
/// appended to the lemma when the column is not blank, the morphology
/// code keeps its padding exactly as found, and the sentence locator is
/// passed through untouched.  A blank part of speech column falls back
/// to the leading category letter of the morphology code.
pub fn parse_line(line: &str) -> Result<Record,Error> {
    let chars: Vec<char> = line.trim_end_matches(|c| c=='\n' || c=='\r').chars().collect();
    if chars.len() < MIN_LINE_WIDTH {
        return Err(Error::MalformedLine);
    }
    let index = column(&chars,"index")?;
    let mut lemma = column(&chars,"lemma")?.trim().to_string();
    let homonym = column(&chars,"homonym")?;
    if homonym!=" " {
        lemma += &homonym;
    }
    let form = strip_additions(column(&chars,"form")?.trim());
    let morph = column(&chars,"morph")?;
    let mut pos: String = chars[POS_START..].iter().filter(|c| **c!=' ').collect();
    if pos.len()==0 {
        match morph.chars().next() {
            Some(c) if c!=' ' => pos.push(c),
            _ => {}
        }
    }
    Ok(Record { form, lemma, morph, pos, index })
}

/// Converts the text of APN files to TSV.  The converter owns the
/// conversion mode and the lemma display options, and accumulates the
/// lemma inventory across every file it is fed.
pub struct Converter {
    enhanced: bool,
    no_disambiguation: bool,
    lowercase: bool,
    mapper: TagMapper,
    lemmas: BTreeSet<String>
}

impl Converter {
    pub fn new(enhanced: bool) -> Self {
        Self {
            enhanced,
            no_disambiguation: false,
            lowercase: false,
            mapper: TagMapper::new(),
            lemmas: BTreeSet::new()
        }
    }
    /// strip the homonym digit from the lemma on output
    pub fn set_no_disambiguation(&mut self,flag: bool) {
        self.no_disambiguation = flag;
    }
    /// lowercase the lemma on output
    pub fn set_lowercase(&mut self,flag: bool) {
        self.lowercase = flag;
    }
    /// sorted unique lemmas seen so far, homonym digits included
    pub fn lemmas(&self) -> &BTreeSet<String> {
        &self.lemmas
    }
    /// Convert one line.  The lemma is recorded in the inventory before
    /// the display options are applied.
    pub fn convert_line(&mut self,line: &str) -> Result<Record,Error> {
        let mut rec = parse_line(line)?;
        if self.enhanced {
            self.mapper.enhance(&mut rec)?;
        }
        self.lemmas.insert(rec.lemma.clone());
        if self.no_disambiguation {
            while rec.lemma.ends_with(|c: char| c.is_ascii_digit()) {
                rec.lemma.pop();
            }
        }
        if self.lowercase {
            rec.lemma = rec.lemma.to_lowercase();
        }
        Ok(rec)
    }
    /// Convert one file's text.  Returns the TSV content and the failed
    /// lines as (1-based line number, error) pairs.  A failed line
    /// produces no output row.  Blank input lines are skipped, and a
    /// blank separator row is emitted whenever the sentence locator
    /// changes between consecutive records.
    pub fn convert(&mut self,text: &str) -> (String,Vec<(usize,Error)>) {
        let mut content = TSV_HEADER.to_string() + "\n";
        let mut errors: Vec<(usize,Error)> = Vec::new();
        let mut last: Option<String> = None;
        for (num,line) in text.lines().enumerate() {
            if line.trim().len()==0 {
                continue;
            }
            match self.convert_line(line) {
                Ok(rec) => {
                    if let Some(prev) = &last {
                        if *prev!=rec.index {
                            content += "\n";
                        }
                    }
                    content += &rec.to_tsv();
                    content += "\n";
                    last = Some(rec.index);
                },
                Err(e) => errors.push((num+1,e))
            }
        }
        (content,errors)
    }
}
