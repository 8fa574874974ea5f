use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use tera::{Context, Tera};

use errors::Error;

pub const INDEX: &str = "polls/index.html";
pub const DETAIL: &str = "polls/detail.html";
pub const RESULTS: &str = "polls/results.html";

/// Builds the template set compiled into the binary.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("polls/base.html", include_str!("../templates/polls/base.html")),
        (INDEX, include_str!("../templates/polls/index.html")),
        (DETAIL, include_str!("../templates/polls/detail.html")),
        (RESULTS, include_str!("../templates/polls/results.html")),
    ])?;

    Ok(tera)
}

pub fn render<T: Serialize>(tera: &Tera, template_name: &str, page: &T) -> Result<HttpResponse, Error> {
    let html = render_to_string(tera, template_name, page)?;

    Ok(HttpResponse::build(StatusCode::OK)
        .insert_header(ContentType::html())
        .body(html))
}

fn render_to_string<T: Serialize>(tera: &Tera, template_name: &str, page: &T) -> Result<String, Error> {
    Context::from_serialize(page)
        .and_then(|context| tera.render(template_name, &context))
        .map_err(|err| {
            error!("Failed to render {} - {:?}", template_name, err);
            Error::InternalServerError("Template rendering failed".into())
        })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use db::models::{Choice, Question};

    use super::{load, render_to_string, DETAIL, INDEX, RESULTS};
    use crate::handlers::{IndexPage, QuestionPage};

    fn question() -> Question {
        Question {
            id: 7,
            question_text: "Tabs or spaces?".to_string(),
            pub_date: Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap(),
        }
    }

    fn page(votes: i32, error_message: Option<String>) -> QuestionPage {
        QuestionPage {
            question: question(),
            choices: vec![Choice {
                id: 3,
                question_id: 7,
                choice_text: "Tabs".to_string(),
                votes,
            }],
            total_votes: i64::from(votes),
            error_message,
        }
    }

    #[test]
    fn index_without_questions() {
        let tera = load().unwrap();
        let html = render_to_string(
            &tera,
            INDEX,
            &IndexPage {
                latest_question_list: vec![],
            },
        )
        .unwrap();

        assert!(html.contains("No polls are available."));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn index_links_questions() {
        let tera = load().unwrap();
        let html = render_to_string(
            &tera,
            INDEX,
            &IndexPage {
                latest_question_list: vec![question()],
            },
        )
        .unwrap();

        assert!(html.contains(r#"<a href="/7">Tabs or spaces?</a>"#));
        assert!(!html.contains("No polls are available."));
    }

    #[test]
    fn detail_shows_form_and_error() {
        let tera = load().unwrap();
        let html = render_to_string(
            &tera,
            DETAIL,
            &page(0, Some("Choice was not selected".to_string())),
        )
        .unwrap();

        assert!(html.contains(r#"action="/7/vote/""#));
        assert!(html.contains(r#"name="choice" id="choice1" value="3""#));
        assert!(html.contains("<strong>Choice was not selected</strong>"));
    }

    #[test]
    fn detail_without_error() {
        let tera = load().unwrap();
        let html = render_to_string(&tera, DETAIL, &page(0, None)).unwrap();

        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn results_pluralizes_votes() {
        let tera = load().unwrap();

        let html = render_to_string(&tera, RESULTS, &page(1, None)).unwrap();
        assert!(html.contains("Tabs -- 1 vote</li>"));

        let html = render_to_string(&tera, RESULTS, &page(2, None)).unwrap();
        assert!(html.contains("Tabs -- 2 votes</li>"));
        assert!(html.contains(r#"<a href="/7">Vote again?</a>"#));
    }

    #[test]
    fn question_text_is_escaped() {
        let mut question = question();
        question.question_text = "<script>alert(1)</script>".to_string();

        let tera = load().unwrap();
        let html = render_to_string(
            &tera,
            INDEX,
            &IndexPage {
                latest_question_list: vec![question],
            },
        )
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
