use application::classifier_service::ClassifierService;
use domain::message::DEFAULT_MAX_MESSAGE_CHARS;
use domain::{Label, NormalizationPolicy};
use infrastructure::artifact_loader::load_artifacts;
use tests::bundled_models_dir;

async fn bundled_service() -> ClassifierService {
    let dir = bundled_models_dir();
    let model = load_artifacts(&dir.join("vectorizer.json"), &dir.join("classifier.json"))
        .await
        .unwrap();
    ClassifierService::from_model(&model, NormalizationPolicy::Always, DEFAULT_MAX_MESSAGE_CHARS)
}

#[tokio::test]
async fn sample_artifacts_load() {
    let dir = bundled_models_dir();
    let model = load_artifacts(&dir.join("vectorizer.json"), &dir.join("classifier.json"))
        .await
        .unwrap();
    assert_eq!(model.vectorizer.n_features(), model.classifier.n_features());
    assert_eq!(model.classifier.kind(), "multinomial naive Bayes");
}

#[tokio::test]
async fn sample_model_separates_classic_messages() {
    let service = bundled_service().await;

    let spam = [
        "Congratulations! You've been awarded a guaranteed £1000 cash prize. Call now!",
        "URGENT! Your mobile has won a guaranteed award. Reply STOP to opt out",
        "WINNER!! Claim your FREE cash prize now, call or txt",
    ];
    for text in spam {
        assert_eq!(service.classify(text).unwrap().label(), Label::Spam, "{text}");
    }

    let ham = [
        "Are you coming home for lunch tomorrow? Love you",
        "Sorry, I'll call you later. OK?",
    ];
    for text in ham {
        assert_eq!(service.classify(text).unwrap().label(), Label::Ham, "{text}");
    }
}
