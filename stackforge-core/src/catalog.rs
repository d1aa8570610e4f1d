//! Static template catalog.
//!
//! The immutable set of language/framework starting points a service can
//! be created from. Entries are fixed at compile time; user code only
//! reads them.

use std::sync::LazyLock;

use crate::types::{Language, ServiceTemplate};

static TEMPLATES: LazyLock<Vec<ServiceTemplate>> = LazyLock::new(|| {
    vec![
        template(
            "node-express-rest",
            "Express REST API",
            "Node.js REST API using Express.js with middleware support",
            "https://github.com/templates/express-rest-api",
            Language::Nodejs,
            "Express.js",
        ),
        template(
            "node-fastify-graphql",
            "Fastify GraphQL API",
            "High-performance Node.js GraphQL API using Fastify",
            "https://github.com/templates/fastify-graphql",
            Language::Nodejs,
            "Fastify",
        ),
        template(
            "go-gin-rest",
            "Gin REST API",
            "Go REST API using Gin framework with high performance",
            "https://github.com/templates/gin-rest-api",
            Language::Golang,
            "Gin",
        ),
        template(
            "go-fiber-rest",
            "Fiber REST API",
            "Go REST API using Fiber framework inspired by Express",
            "https://github.com/templates/fiber-rest-api",
            Language::Golang,
            "Fiber",
        ),
        template(
            "python-fastapi",
            "FastAPI REST API",
            "Modern Python REST API using FastAPI with automatic docs",
            "https://github.com/templates/fastapi-rest-api",
            Language::Python,
            "FastAPI",
        ),
        template(
            "python-flask",
            "Flask REST API",
            "Lightweight Python REST API using Flask framework",
            "https://github.com/templates/flask-rest-api",
            Language::Python,
            "Flask",
        ),
        template(
            "rust-actix",
            "Actix Web API",
            "High-performance Rust REST API using Actix Web",
            "https://github.com/templates/actix-web-api",
            Language::Rust,
            "Actix Web",
        ),
        template(
            "rust-warp",
            "Warp REST API",
            "Rust REST API using Warp framework with filters",
            "https://github.com/templates/warp-rest-api",
            Language::Rust,
            "Warp",
        ),
    ]
});

fn template(
    id: &str,
    name: &str,
    description: &str,
    github_url: &str,
    language: Language,
    framework: &str,
) -> ServiceTemplate {
    ServiceTemplate {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        github_url: github_url.to_owned(),
        language,
        framework: framework.to_owned(),
    }
}

/// All catalog entries, in display order.
pub fn templates() -> &'static [ServiceTemplate] {
    &TEMPLATES
}

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static ServiceTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_eight_entries() {
        assert_eq!(templates().len(), 8);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = templates().iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn find_known_and_unknown() {
        let tpl = find("go-gin-rest").expect("known id");
        assert_eq!(tpl.language, Language::Golang);
        assert_eq!(tpl.framework, "Gin");
        assert!(find("cobol-cics").is_none());
    }

    #[test]
    fn two_templates_per_language() {
        for lang in [Language::Nodejs, Language::Golang, Language::Python, Language::Rust] {
            let count = templates().iter().filter(|t| t.language == lang).count();
            assert_eq!(count, 2, "{lang} should have two templates");
        }
    }
}
