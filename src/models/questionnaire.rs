use serde::{Deserialize, Serialize};

/// "Quelle est votre humeur actuelle ?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "heureux")]
    Heureux,
    #[serde(rename = "triste")]
    Triste,
    #[serde(rename = "stressé")]
    Stresse,
    #[serde(rename = "fatigué")]
    Fatigue,
    #[serde(rename = "excité")]
    Excite,
}

/// "Comment s'est déroulée votre journée ?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayRating {
    #[serde(rename = "très bien")]
    TresBien,
    #[serde(rename = "moyenne")]
    Moyenne,
    #[serde(rename = "mauvaise")]
    Mauvaise,
    #[serde(rename = "très mauvaise")]
    TresMauvaise,
}

/// Genre choices offered by the questionnaire (a subset of the wheel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionnaireGenre {
    #[serde(rename = "comédie")]
    Comedie,
    #[serde(rename = "drame")]
    Drame,
    #[serde(rename = "action")]
    Action,
    #[serde(rename = "romance")]
    Romance,
    #[serde(rename = "thriller")]
    Thriller,
}

/// "Quelle durée de film préférez-vous ce soir ?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferredDuration {
    #[serde(rename = "moins de 1 heure")]
    MoinsDeUneHeure,
    #[serde(rename = "1-2 heures")]
    UneADeuxHeures,
    #[serde(rename = "plus de 2 heures")]
    PlusDeDeuxHeures,
}

/// Answers posted to the recommendation endpoint
///
/// Unanswered questions serialize as empty strings, which the backend treats as "no preference".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    #[serde(serialize_with = "answer_or_empty")]
    pub mood: Option<Mood>,
    #[serde(serialize_with = "answer_or_empty")]
    pub day: Option<DayRating>,
    #[serde(serialize_with = "answer_or_empty")]
    pub genre: Option<QuestionnaireGenre>,
    #[serde(serialize_with = "answer_or_empty")]
    pub duration: Option<PreferredDuration>,
}

fn answer_or_empty<T, S>(answer: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: serde::Serializer,
{
    match answer {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(""),
    }
}

/// Response of the questionnaire endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnaireResponse {
    #[serde(default)]
    pub recommendations: Vec<String>,
}
