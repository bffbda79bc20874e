//! Constant tables mapping LASLA codes to the enhanced tag set.
//!
//! Both vocabularies are closed.  The pairs were recovered from the
//! LASLA code books and corpus samples, so an unlisted code is a data
//! or table maintenance problem and the mapper treats it as an error
//! rather than passing it through.

/// Part of speech codes, keyed by the trimmed code as it appears in the
/// part of speech column.  Pronoun and numeral codes may carry a
/// subcategory digit.
pub const POS_MAP: [(&str,&str);32] = [
    ("A","NOM2"),
    ("B","VER"),
    ("C","ADJqua"),
    ("D1","ADJcar"),
    ("D2","ADJord"),
    ("D3","ADJdis"),
    ("D4","ADJmul"),
    ("D5","ADJadv.ord"),
    ("D6","ADJadv.mul"),
    ("E","PROper"),
    ("F","PROpos"),
    ("G","PROref"),
    ("H","PROpos.ref"),
    ("I","PROdem"),
    ("I6","PROdem"),
    ("J","PROrel"),
    ("J6","PROrel"),
    ("K","PROint"),
    ("K6","PROint"),
    ("L","PROind"),
    ("L6","PROind"),
    ("M","ADV"),
    ("N","ADVrel"),
    ("O","ADVint"),
    ("P","ADVneg"),
    ("Q","ADVint.neg"),
    ("R","PRE"),
    ("S","CONcoo"),
    ("T","CONsub"),
    ("U","INJ"),
    ("#","VERaux"),
    ("0","")
];

// The morphology code is one character per feature.  The first two
// characters repeat the category and subcategory and are not features,
// the feature slots start at FEATURE_START.

pub const CASE_MAP: [(char,&str);8] = [
    ('1',"Case=Nom"),
    ('2',"Case=Voc"),
    ('3',"Case=Acc"),
    ('4',"Case=Gen"),
    ('5',"Case=Dat"),
    ('6',"Case=Abl"),
    ('7',"Case=Loc"),
    ('8',"Case=Ind")
];

pub const NUMB_MAP: [(char,&str);2] = [
    ('1',"Numb=Sing"),
    ('2',"Numb=Plur")
];

pub const DEG_MAP: [(char,&str);3] = [
    ('1',"Deg=Pos"),
    ('2',"Deg=Comp"),
    ('3',"Deg=Sup")
];

pub const MOOD_MAP: [(char,&str);10] = [
    ('0',""),   // attested once in the corpus, carries no information
    ('1',"Mood=Ind"),
    ('2',"Mood=Imp"),
    ('3',"Mood=Sub"),
    ('4',"Mood=Par"),
    ('5',"Mood=Adj"),
    ('6',"Mood=Ger"),
    ('7',"Mood=Inf"),
    ('8',"Mood=SupU"),
    ('9',"Mood=SupUm")
];

pub const TENSE_MAP: [(char,&str);10] = [
    ('0',"Tense=_"),
    ('1',"Tense=Pres"),
    ('2',"Tense=Impa"),
    ('3',"Tense=Fut"),
    ('4',"Tense=Perf"),
    ('5',"Tense=Pqp"),
    ('6',"Tense=Fut"),
    ('7',"Tense=PeriPerf"),
    ('8',"Tense=PeriPqp"),
    ('9',"Tense=PeriFut")
];

pub const VOICE_MAP: [(char,&str);4] = [
    ('1',"Voice=Act"),
    ('2',"Voice=Pass"),
    ('3',"Voice=Dep"),
    ('4',"Voice=SemDep")
];

pub const PERSON_MAP: [(char,&str);3] = [
    ('1',"Person=1"),
    ('2',"Person=2"),
    ('3',"Person=3")
];

/// the feature slot tables in the order the slots occur in the code
pub const MORPH_SLOTS: [&[(char,&str)];7] = [
    &CASE_MAP,
    &NUMB_MAP,
    &DEG_MAP,
    &MOOD_MAP,
    &TENSE_MAP,
    &VOICE_MAP,
    &PERSON_MAP
];

/// display names for the feature slots, same order as `MORPH_SLOTS`
pub const SLOT_NAMES: [&str;7] = ["Case","Numb","Deg","Mood","Tense","Voice","Person"];

/// first feature slot within the morphology column
pub const FEATURE_START: usize = 2;

/// fixed width of the morphology column
pub const MORPH_WIDTH: usize = 11;

/// what a code with no features translates to
pub const EMPTY_MORPH: &str = "MORPH=EMPTY";
