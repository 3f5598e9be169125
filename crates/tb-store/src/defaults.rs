//! First-run datasets. `seed_if_empty` writes these verbatim so every
//! view has something to render before anyone creates content.

use chrono::{DateTime, NaiveDate, Utc};
use tb_core::models::{Category, Post, PostStatus, RecordMeta, Role, User, WorldCup};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("seed timestamp literal")
}

fn seeded_meta() -> RecordMeta {
    RecordMeta::at(ts("2025-01-01T00:00:00Z"))
}

pub fn default_users() -> Vec<User> {
    let meta = seeded_meta();
    vec![
        User {
            id: 1,
            name: "Site Administrator".into(),
            username: "admin".into(),
            email: "admin@tribuna.example".into(),
            role: Role::Admin,
            meta,
            ..Default::default()
        },
        User {
            id: 2,
            name: "Demo Account".into(),
            username: "demo".into(),
            email: "demo@tribuna.example".into(),
            meta,
            ..Default::default()
        },
        User {
            id: 3,
            name: "Juan López".into(),
            username: "juanlopez".into(),
            email: "juan@tribuna.example".into(),
            country: Some("Argentina".into()),
            birthdate: NaiveDate::from_ymd_opt(1998, 7, 12),
            meta,
            ..Default::default()
        },
    ]
}

pub fn default_categories() -> Vec<Category> {
    let meta = seeded_meta();
    let rows: [(&str, &str, &str, &str, i64); 7] = [
        ("Goals", "⚽", "The strikes everyone keeps replaying", "#E53935", 24),
        ("Tactics", "📋", "Formations, pressing schemes, set pieces", "#1E88E5", 12),
        ("History", "📜", "Tournaments and finals of decades past", "#8E24AA", 18),
        ("Players", "⭐", "Careers, records, and transfers", "#FB8C00", 31),
        ("Stadiums", "🏟️", "The grounds and the atmospheres", "#43A047", 9),
        ("Interviews", "🎙️", "Conversations with players and coaches", "#00897B", 7),
        ("Fans", "🎉", "Chants, tifos, and travelling support", "#F4511E", 15),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (name, icon, description, color, post_count))| Category {
            id: index as i64 + 1,
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            post_count: *post_count,
            meta,
        })
        .collect()
}

pub fn default_world_cups() -> Vec<WorldCup> {
    let meta = seeded_meta();
    vec![
        WorldCup {
            id: 1,
            year: 2022,
            host: "Qatar".into(),
            stadium: "Lusail Stadium".into(),
            image: "assets/images/world-cup-2022.jpg".into(),
            description: "Argentina won it on penalties after a 3-3 final \
                          against France, Messi's first world title."
                .into(),
            champion: "Argentina".into(),
            runner_up: "France".into(),
            matches: 64,
            goals: 172,
            meta,
        },
        WorldCup {
            id: 2,
            year: 2018,
            host: "Russia".into(),
            stadium: "Luzhniki Stadium".into(),
            image: "assets/images/world-cup-2018.jpg".into(),
            description: "France beat Croatia 4-2 with a young squad led by \
                          Mbappé and Griezmann."
                .into(),
            champion: "France".into(),
            runner_up: "Croatia".into(),
            matches: 64,
            goals: 169,
            meta,
        },
        WorldCup {
            id: 3,
            year: 2014,
            host: "Brazil".into(),
            stadium: "Maracanã".into(),
            image: "assets/images/world-cup-2014.jpg".into(),
            description: "Germany's fourth title, decided by Götze's \
                          extra-time goal against Argentina."
                .into(),
            champion: "Germany".into(),
            runner_up: "Argentina".into(),
            matches: 64,
            goals: 171,
            meta,
        },
        WorldCup {
            id: 4,
            year: 2010,
            host: "South Africa".into(),
            stadium: "Soccer City".into(),
            image: "assets/images/world-cup-2010.jpg".into(),
            description: "Spain's first World Cup, sealed by Iniesta in \
                          extra time against the Netherlands."
                .into(),
            champion: "Spain".into(),
            runner_up: "Netherlands".into(),
            matches: 64,
            goals: 145,
            meta,
        },
        WorldCup {
            id: 5,
            year: 2006,
            host: "Germany".into(),
            stadium: "Olympiastadion Berlin".into(),
            image: "assets/images/world-cup-2006.jpg".into(),
            description: "Italy outlasted France on penalties in a final \
                          remembered for Zidane's send-off."
                .into(),
            champion: "Italy".into(),
            runner_up: "France".into(),
            matches: 64,
            goals: 147,
            meta,
        },
    ]
}

pub fn default_posts() -> Vec<Post> {
    let meta = seeded_meta();
    vec![
        Post {
            id: 1,
            title: "Messi lifts the cup in Lusail".into(),
            description: "The night Argentina ended a 36-year wait.".into(),
            category: "Goals".into(),
            world_cup: Some(2022),
            author: "juanlopez".into(),
            status: PostStatus::Published,
            likes: 1200,
            comments: 89,
            views: 15400,
            media: vec!["assets/images/messi-cup.jpg".into()],
            meta,
            ..Default::default()
        },
        Post {
            id: 2,
            title: "Iniesta's moment, fifteen years on".into(),
            description: "Revisiting the goal that won Spain the 2010 final.".into(),
            category: "History".into(),
            world_cup: Some(2010),
            author: "demo".into(),
            status: PostStatus::Published,
            likes: 860,
            comments: 45,
            views: 9100,
            meta,
            ..Default::default()
        },
        Post {
            id: 3,
            title: "How France pressed Croatia".into(),
            description: "A board-by-board look at the 2018 final.".into(),
            category: "Tactics".into(),
            world_cup: Some(2018),
            author: "juanlopez".into(),
            status: PostStatus::Pending,
            meta,
            ..Default::default()
        },
        Post {
            id: 4,
            title: "The 7-1, anatomy of a collapse".into(),
            description: "What actually happened in Belo Horizonte.".into(),
            category: "History".into(),
            world_cup: Some(2014),
            author: "juanlopez".into(),
            status: PostStatus::Published,
            likes: 2300,
            comments: 310,
            views: 31000,
            meta,
            ..Default::default()
        },
        Post {
            id: 5,
            title: "Soccer City's vuvuzela wall".into(),
            description: "The loudest ground of 2010, remembered by the fans.".into(),
            category: "Stadiums".into(),
            world_cup: Some(2010),
            author: "demo".into(),
            status: PostStatus::Pending,
            meta,
            ..Default::default()
        },
    ]
}
