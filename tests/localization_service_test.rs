//! Localization service integration tests
//!
//! Language and resource key lifecycle against the in-memory store.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use forum_locale::models::{CreateLanguageRequest, PageRequest, UpdateResourceKeyRequest};
use forum_locale::{LanguageContext, LocaleError, Translator};

#[tokio::test]
async fn test_matrix_is_filled_in_both_directions() {
    let (ctx, english) = TestContext::with_default_language().await;
    for key in fixture_keys() {
        ctx.add_key(key).await;
    }
    ctx.add_language("French", "fr-FR").await;
    ctx.add_key("Topic.Lock").await;
    ctx.add_language("German", "de-DE").await;

    ctx.assert_matrix_complete().await;
    assert_eq!(ctx.service.values_for_language(english.id).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_duplicate_language_leaves_store_unchanged() {
    let (ctx, _) = TestContext::with_default_language().await;
    ctx.add_key("Post.Quote").await;
    let before = ctx.store.value_count();

    let result = ctx
        .service
        .add_language(CreateLanguageRequest {
            name: "British English".to_string(),
            language_culture: "en-GB".to_string(),
        })
        .await;

    assert_matches!(result, Err(LocaleError::LanguageAlreadyExists { culture }) if culture == "en-GB");
    assert_eq!(ctx.store.value_count(), before);
    assert_eq!(ctx.service.all_languages().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_key_leaves_store_unchanged() {
    let (ctx, english) = TestContext::with_default_language().await;
    ctx.add_key("Post.Quote").await;
    ctx.set(&english, "Post.Quote", "Quote").await;
    let before = ctx.store.value_count();

    let result = ctx.service.add_resource_key("Post.Quote", Some("again".to_string())).await;

    assert_matches!(result, Err(LocaleError::ResourceKeyAlreadyExists { name }) if name == "Post.Quote");
    assert_eq!(ctx.store.value_count(), before);
    assert_eq!(ctx.service.resource_string(english.id, "Post.Quote").await, "Quote");
}

#[tokio::test]
async fn test_default_language_cannot_be_deleted() {
    let (ctx, english) = TestContext::with_default_language().await;
    ctx.add_key("Post.Quote").await;

    let result = ctx.service.delete_language(&english).await;

    assert_matches!(result, Err(LocaleError::DefaultLanguageDelete { .. }));
    assert!(result.unwrap_err().is_policy_violation());
    assert!(ctx.service.language_by_id(english.id).await.unwrap().is_some());
    assert_eq!(ctx.store.value_count(), 1);
}

#[tokio::test]
async fn test_delete_language_removes_only_its_values() {
    let (ctx, english) = TestContext::with_default_language().await;
    let quote = ctx.add_key("Post.Quote").await;
    let french = ctx.add_language("French", "fr-FR").await;
    ctx.set(&english, "Post.Quote", "Quote").await;
    ctx.set(&french, "Post.Quote", "Citer").await;

    ctx.service.delete_language(&french).await.unwrap();

    assert!(ctx.service.language_by_culture("fr-FR").await.unwrap().is_none());
    assert_eq!(ctx.store.pair_count(french.id, quote.id), 0);
    assert_eq!(ctx.store.pair_count(english.id, quote.id), 1);
    assert_eq!(ctx.service.resource_string(english.id, "Post.Quote").await, "Quote");
}

#[tokio::test]
async fn test_delete_key_removes_values_in_every_language() {
    let (ctx, english) = TestContext::with_default_language().await;
    let french = ctx.add_language("French", "fr-FR").await;
    let quote = ctx.add_key("Post.Quote").await;
    let reply = ctx.add_key("Post.Reply").await;

    ctx.service.delete_resource_key(&quote).await.unwrap();

    assert_eq!(ctx.store.pair_count(english.id, quote.id), 0);
    assert_eq!(ctx.store.pair_count(french.id, quote.id), 0);
    assert_eq!(ctx.store.pair_count(french.id, reply.id), 1);
    assert!(ctx.service.resource_key_by_name("Post.Quote").await.unwrap().is_none());
    ctx.assert_matrix_complete().await;
}

#[tokio::test]
async fn test_delete_failures_are_wrapped_with_cause() {
    let store = FailingStore::new();
    let service = store.service();
    service.ensure_default_language().await.unwrap();
    let french = service
        .add_language(CreateLanguageRequest {
            name: "French".to_string(),
            language_culture: "fr-FR".to_string(),
        })
        .await
        .unwrap();
    let key = service.add_resource_key("Post.Quote", None).await.unwrap();
    store.fail_deletes();

    let language_error = service.delete_language(&french).await.unwrap_err();
    assert_matches!(&language_error, LocaleError::DeleteFailed { source, .. } if matches!(**source, LocaleError::Store(_)));
    assert!(!language_error.is_policy_violation());

    let key_error = service.delete_resource_key(&key).await.unwrap_err();
    assert!(key_error.to_string().contains("injected delete failure"));
    assert!(service.resource_key_by_id(key.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_empty_value_falls_back_to_key() {
    let (ctx, english) = TestContext::with_default_language().await;
    ctx.add_key("Post.Quote").await;

    assert_eq!(ctx.service.resource_string(english.id, "Post.Quote").await, "Post.Quote");
    assert_eq!(ctx.service.resource_string(english.id, "Never.Defined").await, "Never.Defined");

    ctx.set(&english, "Post.Quote", "Quote").await;
    assert_eq!(ctx.service.resource_string(english.id, "Post.Quote").await, "Quote");
}

#[tokio::test]
async fn test_lookup_failures_read_as_not_found() {
    let store = FailingStore::new();
    let service = store.service();
    let english = service.ensure_default_language().await.unwrap();
    service.add_resource_key("Post.Quote", None).await.unwrap();
    service.update_resource_value(english.id, "Post.Quote", "Quote").await.unwrap();
    store.poison_key("Post.Quote");

    assert!(service.resource(english.id, "Post.Quote").await.is_none());
    assert_eq!(service.resource_string(english.id, "Post.Quote").await, "Post.Quote");
}

#[tokio::test]
async fn test_update_missing_resource_is_not_found() {
    let (ctx, english) = TestContext::with_default_language().await;

    let result = ctx.service.update_resource_value(english.id, "Post.Quote", "Quote").await;

    assert_matches!(result, Err(LocaleError::ResourceNotFound { key, .. }) if key == "Post.Quote");
}

#[tokio::test]
async fn test_resource_string_for_context() {
    let (ctx, english) = TestContext::with_default_language().await;
    let french = ctx.add_language("French", "fr-FR").await;
    ctx.add_key("Post.Quote").await;
    ctx.set(&english, "Post.Quote", "Quote").await;
    ctx.set(&french, "Post.Quote", "Citer").await;

    let in_french = ctx.service.resource_string_for(&LanguageContext::new("fr-FR"), "Post.Quote").await.unwrap();
    let fallback = ctx.service.resource_string_for(&LanguageContext::new("it-IT"), "Post.Quote").await.unwrap();

    assert_eq!(in_french, "Citer");
    assert_eq!(fallback, "Quote");
}

#[tokio::test]
async fn test_paging_and_search() {
    let (ctx, english) = TestContext::with_default_language().await;
    for (key, value) in english_fixtures() {
        ctx.add_key(key).await;
        ctx.set(&english, key, value).await;
    }

    let first = ctx.service.resource_keys_page(PageRequest::new(1, 2)).await.unwrap();
    assert_eq!(first.total_count, 5);
    assert_eq!(first.total_pages(), 3);
    assert_eq!(first.items[0].name, "Members.Profile");

    let posts = ctx.service.search_resource_keys("post.", PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(posts.total_count, 3);

    let topic = ctx.service.search_values(english.id, "create topic", ctx.service.page(1)).await.unwrap();
    assert_eq!(topic.items.len(), 1);
    assert_eq!(topic.items[0].key_name, "Topic.Create");

    let by_key = ctx.service.search_values_by_key(english.id, "Delete", ctx.service.page(1)).await.unwrap();
    assert_eq!(by_key.items.len(), 1);
    assert_eq!(by_key.items[0].resource_value, "Delete");

    let values = ctx.service.values_page(english.id, PageRequest::new(3, 2)).await.unwrap();
    assert_eq!(values.items.len(), 1);
    assert!(!values.has_next_page());
}

#[tokio::test]
async fn test_rename_language() {
    let (ctx, english) = TestContext::with_default_language().await;

    let renamed = ctx.service.rename_language(english.id, "English").await.unwrap();
    assert_eq!(renamed.name, "English");
    assert_eq!(ctx.service.default_language().await.unwrap().name, "English");

    assert_matches!(ctx.service.rename_language(english.id, " ").await, Err(LocaleError::InvalidInput(_)));
}

#[tokio::test]
async fn test_translator_loads_from_service() {
    let (ctx, english) = TestContext::with_default_language().await;
    let french = ctx.add_language("French", "fr-FR").await;
    for (key, value) in english_fixtures() {
        ctx.add_key(key).await;
        ctx.set(&english, key, value).await;
    }
    ctx.set(&french, "Post.Quote", "Citer").await;

    let mut translator = Translator::new(&ctx.settings.localization.default_language);
    translator.load_all(&ctx.service).await.unwrap();

    assert_eq!(translator.t("Post.Quote", "fr-FR", None), "Citer");
    assert_eq!(translator.t("Post.Reply", "fr-FR", None), "Reply");
    let stats = translator.stats();
    assert_eq!(stats.total_keys, 5);
    let french_stats = stats.languages.iter().find(|l| l.culture == "fr-fr").unwrap();
    assert_eq!(french_stats.untranslated_count, 4);
}

#[tokio::test]
async fn test_missing_default_language_is_reported() {
    let ctx = TestContext::new();

    assert_matches!(
        ctx.service.default_language().await,
        Err(LocaleError::DefaultLanguageMissing { culture }) if culture == "en-GB"
    );
    assert!(ctx.service.resource_string_for(&LanguageContext::default(), "Post.Quote").await.is_err());

    let installed = ctx.service.ensure_default_language().await.unwrap();
    assert_eq!(installed.name, "English (United Kingdom)");
    assert_eq!(ctx.service.ensure_default_language().await.unwrap().id, installed.id);
}

#[tokio::test]
async fn test_rename_key_to_existing_name_fails() {
    let (ctx, english) = TestContext::with_default_language().await;
    let quote = ctx.add_key("Post.Quote").await;
    ctx.add_key("Post.Reply").await;
    ctx.set(&english, "Post.Quote", "Quote").await;

    let clash = ctx
        .service
        .update_resource_key(quote.id, UpdateResourceKeyRequest { name: Some("Post.Reply".to_string()), notes: None })
        .await;
    assert_matches!(clash, Err(LocaleError::ResourceKeyAlreadyExists { .. }));

    let renamed = ctx
        .service
        .update_resource_key(
            quote.id,
            UpdateResourceKeyRequest { name: Some("Post.Cite".to_string()), notes: Some("Quote button".to_string()) },
        )
        .await
        .unwrap();
    assert_eq!(renamed.notes.as_deref(), Some("Quote button"));
    assert_eq!(ctx.service.resource_string(english.id, "Post.Cite").await, "Quote");
    assert!(ctx.service.resource_key_by_name("Post.Quote").await.unwrap().is_none());
}

#[tokio::test]
async fn test_available_cultures_exclude_installed() {
    let (ctx, _) = TestContext::with_default_language().await;
    ctx.add_language("French", "fr-FR").await;

    let cultures = ctx.service.available_cultures().await.unwrap();

    assert!(!cultures.iter().any(|c| c.code == "en-GB" || c.code == "fr-FR"));
    assert!(cultures.iter().any(|c| c.code == "de-DE"));
}
