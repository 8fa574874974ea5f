#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        http::header::{ContentType, LOCATION},
        test,
        web::Data,
        App,
    };
    use chrono::{Duration, Utc};
    use serde::Serialize;

    use db::{
        models::{Choice, Question},
        MemoryStore, PollStore,
    };

    use crate::routes::routes;
    use crate::templates;

    pub struct TestResponse {
        pub status: u16,
        pub location: Option<String>,
        pub body: String,
    }

    async fn call(store: &Arc<MemoryStore>, req: test::TestRequest) -> TestResponse {
        let store: Arc<dyn PollStore> = store.clone();
        let app = test::init_service(
            App::new()
                .app_data(Data::from(store))
                .app_data(Data::new(templates::load().unwrap()))
                .configure(routes),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = test::read_body(res).await;
        let body = String::from_utf8(body.to_vec()).unwrap_or_else(|_| {
            panic!("response body was not utf-8. status: {}", status)
        });

        TestResponse {
            status,
            location,
            body,
        }
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get(store: &Arc<MemoryStore>, route: &str) -> TestResponse {
        call(store, test::TestRequest::get().uri(route)).await
    }

    /// Helper for HTTP POST integration tests, sending `params` as a urlencoded form
    pub async fn test_post<T: Serialize>(
        store: &Arc<MemoryStore>,
        route: &str,
        params: &T,
    ) -> TestResponse {
        call(store, test::TestRequest::post().uri(route).set_form(params)).await
    }

    /// Helper for HTTP POST integration tests with a raw urlencoded body
    pub async fn test_post_body(
        store: &Arc<MemoryStore>,
        route: &str,
        body: String,
    ) -> TestResponse {
        let req = test::TestRequest::post()
            .uri(route)
            .insert_header(ContentType::form_url_encoded())
            .set_payload(body);
        call(store, req).await
    }

    /// `days` offsets the publication date from now: negative for the past,
    /// positive for the future.
    pub fn create_question_with_choice(
        store: &MemoryStore,
        question_text: &str,
        days: i64,
    ) -> (Question, Choice) {
        let question = create_question_without_choice(store, question_text, days);
        let choice = store.create_choice(question.id, "choice", 0);
        (question, choice)
    }

    pub fn create_question_without_choice(
        store: &MemoryStore,
        question_text: &str,
        days: i64,
    ) -> Question {
        store.create_question(question_text, Utc::now() + Duration::days(days))
    }
}
