use serde_json::json;

use super::*;

fn fixture() -> serde_json::Value {
    json!({
        "hero": {
            "name": "Jordan Lee",
            "title": "Software Engineer with Leadership Experience",
            "subtitle": "Software Engineer",
            "tagline": "Building things that last",
            "ctaText": "View My Work",
            "ctaLink": "#projects"
        },
        "about": {
            "heading": "About Me",
            "narrative": "Hello.",
            "highlights": ["Mentoring engineers"]
        },
        "skills": {
            "heading": "Technical Skills",
            "categories": [
                {
                    "name": "Cloud Platforms",
                    "displayOrder": 2,
                    "skills": [{ "name": "AWS", "proficiency": "Advanced", "yearsExperience": 4 }]
                },
                {
                    "name": "Programming Languages",
                    "displayOrder": 1,
                    "skills": [
                        { "name": "Rust", "proficiency": "Expert" },
                        { "name": "Go", "proficiency": "Hobby projects" }
                    ]
                }
            ]
        },
        "experience": {
            "heading": "Professional Experience",
            "positions": [
                {
                    "title": "Senior Engineer",
                    "company": "Acme",
                    "location": "Remote",
                    "startDate": "2020-01",
                    "endDate": "2023-06",
                    "isCurrent": false,
                    "achievements": [],
                    "technologies": ["Rust"]
                },
                {
                    "title": "Systems Architect",
                    "company": "Initech",
                    "location": "Remote",
                    "startDate": "2023-07",
                    "endDate": "Present",
                    "isCurrent": true,
                    "achievements": ["Designed things"],
                    "technologies": ["Kubernetes"]
                }
            ]
        },
        "projects": {
            "heading": "Featured Projects",
            "projects": [
                {
                    "name": "Portfolio",
                    "description": "This site",
                    "longDescription": "This site, in Rust.",
                    "technologies": ["Leptos"],
                    "features": ["Theme toggle"],
                    "images": [],
                    "status": "In Development",
                    "startDate": "2024-09-01",
                    "endDate": "Ongoing",
                    "githubUrl": ""
                }
            ]
        },
        "reading": {
            "heading": "Recommended Reading",
            "books": [{ "title": "Designing Data-Intensive Applications", "author": "Martin Kleppmann", "rating": 5 }]
        },
        "contact": {
            "heading": "Get In Touch",
            "socialLinks": [
                { "platform": "GitHub", "url": "https://github.com/example", "handle": "example", "iconPath": "/icons/github.svg" }
            ]
        },
        "navigation": {
            "brand": "Jordan Lee",
            "mobileBreakpoint": 768,
            "menuItems": [
                { "label": "About", "anchor": "#about", "order": 2, "isActive": false },
                { "label": "Home", "anchor": "#hero", "order": 1, "isActive": true },
                { "label": "Contact", "anchor": "#contact", "order": 3, "isActive": false }
            ]
        }
    })
}

fn data() -> PortfolioData {
    serde_json::from_value(fixture()).unwrap()
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_camel_case_content() {
    let data = data();
    assert_eq!(data.hero.cta_link, "#projects");
    assert_eq!(data.navigation.mobile_breakpoint, 768);
    assert_eq!(data.skills.categories[1].skills[1].proficiency, Proficiency::HobbyProjects);
    assert_eq!(data.projects.projects[0].status, ProjectStatus::InDevelopment);
    assert_eq!(data.contact.social_links[0].platform, SocialPlatform::GitHub);
    assert_eq!(data.reading.books[0].rating, Some(5));
    assert_eq!(data.about.resume_link, None);
}

#[test]
fn from_json_rejects_unknown_status() {
    let mut raw = fixture();
    raw["projects"]["projects"][0]["status"] = json!("Abandoned");
    assert!(PortfolioData::from_json(&raw.to_string()).is_err());
}

// =============================================================
// with_current_job
// =============================================================

#[test]
fn current_job_rewrites_hero() {
    let derived = data().with_current_job();
    assert_eq!(derived.hero.title, "Systems Architect with Leadership Experience");
    assert_eq!(derived.hero.subtitle, "Systems Architect");
    assert_eq!(derived.hero.name, "Jordan Lee");
}

#[test]
fn current_job_leaves_source_untouched() {
    let source = data();
    let _ = source.with_current_job();
    assert_eq!(source.hero.subtitle, "Software Engineer");
}

#[test]
fn no_current_job_returns_same_data() {
    let mut source = data();
    for p in &mut source.experience.positions {
        p.is_current = false;
    }
    assert_eq!(source.with_current_job(), source);
}

#[test]
fn first_current_position_wins() {
    let mut source = data();
    source.experience.positions[0].is_current = true;
    assert_eq!(source.with_current_job().hero.subtitle, "Senior Engineer");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn set_active_section_marks_exactly_one() {
    let mut data = data();
    data.set_active_section("about");
    let active = data
        .navigation
        .menu_items
        .iter()
        .filter(|i| i.is_active)
        .map(|i| i.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(active, vec!["About"]);
    assert_eq!(data.navigation.active_item().map(|i| i.anchor.as_str()), Some("#about"));
}

#[test]
fn set_active_section_unknown_clears_all() {
    let mut data = data();
    data.set_active_section("nowhere");
    assert!(data.navigation.active_item().is_none());
}

#[test]
fn sorted_items_follow_order() {
    let data = data();
    let labels = data
        .navigation
        .sorted_items()
        .into_iter()
        .map(|i| i.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Home", "About", "Contact"]);
}

#[test]
fn sorted_categories_follow_display_order() {
    let data = data();
    let names = data
        .skills
        .sorted_categories()
        .into_iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Programming Languages", "Cloud Platforms"]);
}
