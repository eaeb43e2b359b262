use application::session_service::{SessionService, Submission};
use domain::NormalizationPolicy;
use tests::ModelFixture;

async fn session() -> (ModelFixture, SessionService) {
    let fixture = ModelFixture::write("json");
    let service = fixture.service(NormalizationPolicy::Always).await;
    (fixture, SessionService::new(service, "integration".to_string()))
}

fn contents(service: &SessionService) -> Vec<String> {
    service
        .session()
        .history()
        .entries()
        .map(|e| e.message.content().to_string())
        .collect()
}

#[tokio::test]
async fn history_keeps_the_five_most_recent() {
    let (_fixture, mut service) = session().await;
    for text in ["A", "B", "C", "D", "E", "F"] {
        assert!(matches!(service.submit(text), Submission::Classified(_)));
    }
    assert_eq!(contents(&service), ["F", "E", "D", "C", "B"]);
}

#[tokio::test]
async fn last_entry_matches_returned_result() {
    let (_fixture, mut service) = session().await;
    service.submit("see you at home");
    let Submission::Classified(result) = service.submit("free prize, claim now") else {
        panic!("expected a classification");
    };
    let last = service.session().last().unwrap();
    assert_eq!(last.message.content(), "free prize, claim now");
    assert_eq!(last.result, result);
    assert!(last.result.is_spam());
}

#[tokio::test]
async fn rejected_input_leaves_history_untouched() {
    let (_fixture, mut service) = session().await;
    service.submit("lunch tomorrow?");
    let before = contents(&service);

    assert_eq!(
        service.submit("   "),
        Submission::Rejected("Please enter a message!".to_string())
    );
    assert!(matches!(service.submit(&"x".repeat(600)), Submission::Rejected(_)));
    assert_eq!(contents(&service), before);
}

#[tokio::test]
async fn clearing_empties_the_ledger() {
    let (_fixture, mut service) = session().await;
    service.submit("urgent txt");
    service.clear_history();
    assert!(service.session().history().is_empty());
    assert!(service.session().last().is_none());
}
