//! Fixture data for localization tests

/// Resource keys a forum ships with, plus their English text
pub fn english_fixtures() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Post.Quote", "Quote"),
        ("Post.Reply", "Reply"),
        ("Post.Delete", "Delete"),
        ("Topic.Create", "Create Topic"),
        ("Members.Profile", "Profile"),
    ]
}

/// CSV lines for a French import covering the fixture keys
pub fn french_csv_lines() -> Vec<String> {
    vec![
        "Post.Quote,Citer".to_string(),
        "Post.Reply,Répondre".to_string(),
        "Post.Delete,Supprimer".to_string(),
        "Topic.Create,Créer un sujet".to_string(),
        "Members.Profile,Profil".to_string(),
    ]
}

pub fn fixture_keys() -> Vec<&'static str> {
    english_fixtures().into_iter().map(|(key, _)| key).collect()
}
