use super::*;
use super::mapper::TagMapper;

#[test]
fn acc_sing_noun() {
    let mapper = TagMapper::new();
    assert_eq!(mapper.map_morph("A231       ").expect("lookup failed"),"Case=Acc|Numb=Sing");
}

#[test]
fn short_code_is_padded() {
    // the same code with the trailing padding lost
    let mapper = TagMapper::new();
    assert_eq!(mapper.map_morph("A231").expect("lookup failed"),"Case=Acc|Numb=Sing");
    assert_eq!(mapper.map_morph("I 31").expect("lookup failed"),"Case=Acc|Numb=Sing");
}

#[test]
fn blank_code_is_empty_marker() {
    let mapper = TagMapper::new();
    assert_eq!(mapper.map_morph("           ").expect("lookup failed"),"MORPH=EMPTY");
    assert_eq!(mapper.map_morph("").expect("lookup failed"),"MORPH=EMPTY");
}

#[test]
fn finite_verb_features() {
    let mapper = TagMapper::new();
    assert_eq!(
        mapper.map_morph("B1 1 1113  ").expect("lookup failed"),
        "Numb=Sing|Mood=Ind|Tense=Pres|Voice=Act|Person=3"
    );
}

#[test]
fn participle_features() {
    let mapper = TagMapper::new();
    assert_eq!(
        mapper.map_morph("B532 412   ").expect("lookup failed"),
        "Case=Acc|Numb=Plur|Mood=Par|Tense=Pres|Voice=Pass"
    );
}

#[test]
fn mood_zero_contributes_nothing() {
    let mapper = TagMapper::new();
    assert_eq!(mapper.map_morph("B1   04    ").expect("lookup failed"),"Tense=Perf");
}

#[test]
fn tense_zero_is_underscore() {
    let mapper = TagMapper::new();
    assert_eq!(mapper.map_morph("B1    0    ").expect("lookup failed"),"Tense=_");
}

#[test]
fn unknown_morph_code() {
    let mapper = TagMapper::new();
    match mapper.map_morph("A2X        ") {
        Err(Error::UnknownMorphCode(code)) => assert_eq!(code,"A2X"),
        _ => panic!("bad slot character was accepted")
    }
}

#[test]
fn pos_codes() {
    let mapper = TagMapper::new();
    assert_eq!(mapper.map_pos("A").expect("lookup failed"),"NOM2");
    assert_eq!(mapper.map_pos("S").expect("lookup failed"),"CONcoo");
    assert_eq!(mapper.map_pos("I6").expect("lookup failed"),"PROdem");
    assert_eq!(mapper.map_pos("J6").expect("lookup failed"),"PROrel");
    assert_eq!(mapper.map_pos("D2").expect("lookup failed"),"ADJord");
    assert_eq!(mapper.map_pos("#").expect("lookup failed"),"VERaux");
}

#[test]
fn unknown_pos_code() {
    let mapper = TagMapper::new();
    match mapper.map_pos("Z9") {
        Err(Error::UnknownPosCode(code)) => assert_eq!(code,"Z9"),
        _ => panic!("bad code was accepted")
    }
    assert!(mapper.map_pos("").is_err());
}

#[test]
fn enhance_touches_only_the_codes() {
    let mapper = TagMapper::new();
    let mut rec = Record {
        form: "mundum".to_string(),
        lemma: "MVNDVS1".to_string(),
        morph: "A231       ".to_string(),
        pos: "A".to_string(),
        index: "0001".to_string()
    };
    mapper.enhance(&mut rec).expect("enhance failed");
    assert_eq!(rec.to_tsv(),"mundum\tMVNDVS1\tCase=Acc|Numb=Sing\tNOM2\t0001");
}

#[test]
fn failed_enhance_leaves_record_alone() {
    let mapper = TagMapper::new();
    let mut rec = Record {
        form: "et".to_string(),
        lemma: "ET".to_string(),
        morph: "           ".to_string(),
        pos: "Z9".to_string(),
        index: "0001".to_string()
    };
    assert!(mapper.enhance(&mut rec).is_err());
    assert_eq!(rec.pos,"Z9");
    assert_eq!(rec.morph,"           ");
}
