//! Module containing the enhanced mode tag mapper

use std::collections::HashMap;
use super::tag_maps;
use super::{Error,Record};

/// Rewrites the coded part of speech and morphology fields into the
/// enhanced tag set.  The tables are loaded once at construction and
/// never change afterwards.
pub struct TagMapper {
    pos_map: HashMap<&'static str,&'static str>,
    morph_slots: Vec<HashMap<char,&'static str>>
}

impl TagMapper {
    pub fn new() -> Self {
        let mut morph_slots: Vec<HashMap<char,&'static str>> = Vec::new();
        for slot in tag_maps::MORPH_SLOTS {
            morph_slots.push(HashMap::from_iter(slot.iter().copied()));
        }
        Self {
            pos_map: HashMap::from(tag_maps::POS_MAP),
            morph_slots
        }
    }
    /// Replace `pos` and `morph` in place; `form`, `lemma` and `index`
    /// are untouched.  The record is only modified if both lookups hit.
    pub fn enhance(&self,rec: &mut Record) -> Result<(),Error> {
        let pos = self.map_pos(&rec.pos)?;
        let morph = self.map_morph(&rec.morph)?;
        rec.pos = pos.to_string();
        rec.morph = morph;
        Ok(())
    }
    /// look up a part of speech code, a miss is an error, never a default
    pub fn map_pos(&self,code: &str) -> Result<&'static str,Error> {
        match self.pos_map.get(code) {
            Some(tag) => Ok(*tag),
            None => Err(Error::UnknownPosCode(code.to_string()))
        }
    }
    /// Translate a morphology code to its feature string.  The code is
    /// normalized back to the fixed column width first, so callers may
    /// pass codes with the trailing padding lost.  Blank slots carry no
    /// feature; a code with no features at all is the empty marker.
    pub fn map_morph(&self,code: &str) -> Result<String,Error> {
        let mut chars: Vec<char> = code.chars().collect();
        while chars.len() < tag_maps::MORPH_WIDTH {
            chars.push(' ');
        }
        let mut features: Vec<&str> = Vec::new();
        for (slot,map) in self.morph_slots.iter().enumerate() {
            let c = chars[tag_maps::FEATURE_START + slot];
            if c==' ' {
                continue;
            }
            match map.get(&c) {
                Some(feature) if feature.len()>0 => features.push(*feature),
                Some(_) => {},
                None => return Err(Error::UnknownMorphCode(code.trim_end().to_string()))
            }
        }
        if features.len()==0 {
            return Ok(tag_maps::EMPTY_MORPH.to_string());
        }
        Ok(features.join("|"))
    }
}
