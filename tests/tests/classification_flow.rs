use domain::{ClassifyError, Label, NormalizationPolicy};
use tests::ModelFixture;

#[tokio::test]
async fn obvious_messages_get_obvious_labels() {
    let fixture = ModelFixture::write("json");
    let service = fixture.service(NormalizationPolicy::Always).await;

    let spam = service.classify("WIN a FREE prize!!! Claim your cash, txt now").unwrap();
    assert_eq!(spam.label(), Label::Spam);
    assert!(spam.confidence() > 0.99);

    let ham = service.classify("Love you, see you at home later for lunch?").unwrap();
    assert_eq!(ham.label(), Label::Ham);
    assert!(ham.confidence() > 0.99);
}

#[tokio::test]
async fn probabilities_are_a_distribution() {
    let fixture = ModelFixture::write("json");
    let service = fixture.service(NormalizationPolicy::Always).await;

    for text in ["free lunch", "urgent: meet me tomorrow", "ok", "prize prize love"] {
        let result = service.classify(text).unwrap();
        let [ham, spam] = result.probabilities().as_array();
        assert!((ham + spam - 1.0).abs() < 1e-6, "{text}");
        assert!((0.0..=1.0).contains(&ham) && (0.0..=1.0).contains(&spam));
        assert_eq!(result.confidence(), ham.max(spam));
        assert_eq!(result.is_spam(), spam >= ham);
    }
}

#[tokio::test]
async fn json_and_bincode_artifacts_agree() {
    let json = ModelFixture::write("json").service(NormalizationPolicy::Always).await;
    let bin = ModelFixture::write("bin").service(NormalizationPolicy::Always).await;

    let text = "Claim your free prize tomorrow";
    assert_eq!(json.classify(text).unwrap(), bin.classify(text).unwrap());
}

#[tokio::test]
async fn classification_is_deterministic() {
    let fixture = ModelFixture::write("json");
    let service = fixture.service(NormalizationPolicy::Always).await;

    let first = service.classify("urgent cash txt").unwrap();
    for _ in 0..10 {
        assert_eq!(service.classify("urgent cash txt").unwrap(), first);
    }
}

#[tokio::test]
async fn raw_policy_skips_stemming() {
    let fixture = ModelFixture::write("json");
    let normalized = fixture.service(NormalizationPolicy::Always).await;
    let raw = fixture.service(NormalizationPolicy::Never).await;

    let text = "Winning prizes";
    assert_eq!(normalized.classify(text).unwrap().label(), Label::Spam);

    // Neither inflected form is in the vocabulary, so the priors decide and
    // an exact tie resolves to spam.
    let tied = raw.classify(text).unwrap();
    assert_eq!(tied.probabilities().as_array(), [0.5, 0.5]);
    assert_eq!(tied.label(), Label::Spam);
}

#[tokio::test]
async fn unusable_input_is_rejected() {
    let fixture = ModelFixture::write("json");
    let service = fixture.service(NormalizationPolicy::Always).await;

    assert_eq!(service.classify(""), Err(ClassifyError::EmptyInput));
    assert_eq!(service.classify(" \n\t "), Err(ClassifyError::EmptyInput));
    assert_eq!(
        service.classify(&"a".repeat(501)),
        Err(ClassifyError::MessageTooLong { len: 501, max: 500 })
    );
    assert!(service.classify(&"a".repeat(500)).is_ok());
}

#[tokio::test]
async fn batch_keeps_input_order() {
    let fixture = ModelFixture::write("json");
    let service = fixture.service(NormalizationPolicy::Always).await;

    let texts = ["free cash prize", "   ", "home for lunch", "claim now"];
    let results = service.classify_batch(&texts);
    assert_eq!(results.len(), texts.len());
    assert_eq!(results[0].as_ref().unwrap().label(), Label::Spam);
    assert_eq!(results[1], Err(ClassifyError::EmptyInput));
    assert_eq!(results[2].as_ref().unwrap().label(), Label::Ham);
    assert_eq!(results[3].as_ref().unwrap().label(), Label::Spam);
}
