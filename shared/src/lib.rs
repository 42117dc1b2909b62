use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One ranked prediction as presented to the user. `score` is the class
/// probability converted to a percentage and truncated to four decimal
/// digits.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub score: f64,
}

/// One row of the ImageNet class-index file: WordNet id plus the English
/// and Japanese display names for that class.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClassIndexEntry {
    pub num: String,
    pub en: String,
    pub ja: String,
}

/// Which vocabulary of the class-index file is shown to the user.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LabelLocale {
    En,
    Ja,
}
