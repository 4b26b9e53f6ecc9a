use crate::{
    error::AppResult,
    models::Questionnaire,
    services::api::FilmApi,
};

/// Generates watch recommendations from the mood questionnaire
///
/// Posts the answers as-is, unanswered questions included; the backend
/// decides how mood, day, genre and duration combine. Returns the recommended titles in the backend's order.
pub async fn recommend_from_questionnaire(
    api: &dyn FilmApi,
    answers: &Questionnaire,
) -> AppResult<Vec<String>> {
    match api.submit_questionnaire(answers).await {
        Ok(titles) => {
            tracing::info!(results = titles.len(), "Questionnaire recommendations received");
            Ok(titles)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get recommendations");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Mood, PreferredDuration},
        services::api::MockFilmApi,
    };

    #[tokio::test]
    async fn test_returns_titles_in_order() {
        let mut api = MockFilmApi::new();
        api.expect_submit_questionnaire()
            .withf(|answers| answers.mood == Some(Mood::Fatigue))
            .times(1)
            .returning(|_| Ok(vec!["Paddington".to_string(), "Le Grand Bain".to_string()]));

        let answers = Questionnaire {
            mood: Some(Mood::Fatigue),
            duration: Some(PreferredDuration::MoinsDeUneHeure),
            ..Default::default()
        };
        let titles = recommend_from_questionnaire(&api, &answers).await.unwrap();
        assert_eq!(titles, vec!["Paddington", "Le Grand Bain"]);
    }

    #[tokio::test]
    async fn test_unanswered_questionnaire_is_still_submitted() {
        let mut api = MockFilmApi::new();
        api.expect_submit_questionnaire()
            .withf(|answers| *answers == Questionnaire::default())
            .times(1)
            .returning(|_| Ok(vec!["Le Prénom".to_string()]));

        let titles = recommend_from_questionnaire(&api, &Questionnaire::default())
            .await
            .unwrap();
        assert_eq!(titles, vec!["Le Prénom"]);
    }

    #[tokio::test]
    async fn test_backend_failure_is_returned() {
        let mut api = MockFilmApi::new();
        api.expect_submit_questionnaire().times(1).returning(|_| {
            Err(crate::error::AppError::ExternalApi {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "Erreur serveur".to_string(),
            })
        });

        let result = recommend_from_questionnaire(&api, &Questionnaire::default()).await;
        assert_eq!(
            result.unwrap_err().status(),
            Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
