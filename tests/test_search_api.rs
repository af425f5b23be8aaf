use mockito::Matcher;
use mood_food::{
    fetch_recipe_with_config, search_recipes_with_config, ApiConfig, SearchError, Session,
    SpoonacularClient, UserPreferences,
};

fn config_for(server: &mockito::Server) -> ApiConfig {
    ApiConfig {
        base_url: server.url(),
        api_key: Some("test_key".to_string()),
        result_count: 6,
        timeout: 5,
    }
}

const SEARCH_BODY: &str = r#"
{
    "results": [
        {
            "id": 101,
            "title": "Minestrone",
            "image": "https://img.example.com/101.jpg",
            "readyInMinutes": 45,
            "servings": 4,
            "sourceUrl": "https://example.com/minestrone",
            "summary": "A <b>hearty</b> soup"
        },
        {
            "id": 102,
            "title": "Tomato Soup",
            "image": "https://img.example.com/102.jpg",
            "readyInMinutes": 25,
            "servings": 2,
            "sourceUrl": "https://example.com/tomato",
            "summary": "Simple"
        }
    ],
    "offset": 0,
    "number": 6,
    "totalResults": 2
}
"#;

#[tokio::test]
async fn test_search_with_all_filters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("apiKey".into(), "test_key".into()),
            Matcher::UrlEncoded("number".into(), "6".into()),
            Matcher::UrlEncoded("addRecipeInformation".into(), "true".into()),
            Matcher::UrlEncoded("includeIngredients".into(), "egg,rice".into()),
            Matcher::UrlEncoded("diet".into(), "Vegetarian".into()),
            Matcher::UrlEncoded("type".into(), "soup".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_BODY)
        .create_async()
        .await;

    let preferences = UserPreferences {
        mood: "Cozy".to_string(),
        ingredients: vec!["egg".to_string(), "rice".to_string()],
        dietary: vec!["Vegetarian".to_string()],
    };

    let recipes = search_recipes_with_config(&preferences, &config_for(&server))
        .await
        .unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, 101);
    assert_eq!(recipes[1].ready_in_minutes, 25);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_without_api_key_fails_before_request() {
    let config = ApiConfig {
        api_key: None,
        ..Default::default()
    };

    let result = search_recipes_with_config(&UserPreferences::default(), &config).await;
    assert!(matches!(result, Err(SearchError::MissingConfig(_))));
}

#[tokio::test]
async fn test_fetch_recipe_details() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/recipes/101/information")
        .match_query(Matcher::UrlEncoded("apiKey".into(), "test_key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "id": 101,
                "title": "Minestrone",
                "readyInMinutes": 45,
                "servings": 4,
                "sourceUrl": "https://example.com/minestrone",
                "summary": "",
                "instructions": "<ol><li>Chop vegetables.</li><li>Simmer 30 minutes.</li></ol>",
                "extendedIngredients": [
                    {"original": "1 onion, diced", "amount": 1, "unit": ""},
                    {"original": "2 cups vegetable stock", "amount": 2, "unit": "cups"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let recipe = fetch_recipe_with_config(101, &config_for(&server))
        .await
        .unwrap();

    assert_eq!(recipe.title, "Minestrone");
    let ingredients = recipe.extended_ingredients.unwrap();
    assert_eq!(ingredients.len(), 2);
    assert_eq!(ingredients[1].unit, "cups");
}

#[tokio::test]
async fn test_fetch_unknown_recipe_is_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/recipes/999/information")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"status": "failure", "code": 404, "message": "A recipe with the id 999 does not exist."}"#)
        .create_async()
        .await;

    let result = fetch_recipe_with_config(999, &config_for(&server)).await;
    match result {
        Err(SearchError::Api { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_session_search_save_and_detail() {
    let mut server = mockito::Server::new_async().await;
    let _search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::UrlEncoded("cuisine".into(), "italian".into()))
        .with_status(200)
        .with_body(SEARCH_BODY)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = SpoonacularClient::new(&config).unwrap();
    let mut session = Session::with_result_count(client, config.result_count);
    session.store_mut().set_mood("relaxed");

    assert_eq!(session.search().await.len(), 2);
    assert_eq!(session.toggle_saved(102), Some(true));
    assert_eq!(session.toggle_saved(102), Some(false));
    assert_eq!(session.toggle_saved(101), Some(true));
    assert_eq!(session.saved_summary(), "You have 1 saved recipe");

    // Detail endpoint is not mocked: the failure is swallowed
    assert!(session.recipe_details(101).await.is_none());
}

#[tokio::test]
async fn test_session_search_failure_keeps_results() {
    let mut server = mockito::Server::new_async().await;
    let ok = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(SEARCH_BODY)
        .expect(1)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = SpoonacularClient::new(&config).unwrap();
    let mut session = Session::new(client);

    session.search().await;
    assert_eq!(session.results().len(), 2);
    ok.assert_async().await;
    ok.remove_async().await;

    let _fail = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    assert_eq!(session.search().await.len(), 2);
    assert_eq!(session.results()[0].title, "Minestrone");
}

#[tokio::test]
async fn test_session_save_recipe_opened_by_id() {
    let mut server = mockito::Server::new_async().await;
    let _details = server
        .mock("GET", "/recipes/555/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"id": 555, "title": "Shakshuka", "instructions": "<p>Crack eggs into sauce.</p>"}"#)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = SpoonacularClient::new(&config).unwrap();
    let mut session = Session::new(client);

    assert!(session.recipe_details(555).await.is_some());
    assert_eq!(session.toggle_saved(555), Some(true));

    let saved = &session.store().saved_recipes()[0];
    assert_eq!(saved.title, "Shakshuka");
    assert!(saved.instructions.is_some());
}
