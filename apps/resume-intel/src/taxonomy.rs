//! Skill Taxonomy: static category → skill table, flattened once for matching.

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::text::contains_whole_word;

/// Categorized technical and soft skills. All names are lower-case.
pub const TECH_SKILLS: &[(&str, &[&str])] = &[
    (
        "languages",
        &[
            "python", "javascript", "typescript", "java", "c++", "c#", "go", "golang", "rust",
            "ruby", "php", "swift", "kotlin", "scala", "r", "matlab", "perl", "haskell",
            "elixir", "clojure", "dart", "lua", "groovy", "objective-c", "f#", "julia", "cobol",
            "fortran", "assembly",
        ],
    ),
    (
        "frontend",
        &[
            "react", "reactjs", "vue", "vuejs", "angular", "angularjs", "svelte", "html", "html5",
            "css", "css3", "sass", "scss", "less", "tailwind", "tailwindcss", "bootstrap",
            "jquery", "webpack", "vite", "parcel", "nextjs", "next.js", "nuxt", "nuxtjs",
            "gatsby", "remix", "styled-components", "emotion", "material-ui", "mui", "chakra",
            "ant design", "redux", "mobx", "zustand", "recoil", "pinia", "storybook", "cypress",
            "playwright", "jest", "testing-library", "figma", "sketch", "adobe xd",
            "responsive design", "accessibility", "a11y", "pwa", "web components", "webgl",
            "three.js", "d3", "d3.js",
        ],
    ),
    (
        "backend",
        &[
            "node", "nodejs", "express", "expressjs", "fastapi", "django", "flask", "spring",
            "spring boot", "rails", "ruby on rails", ".net", "asp.net", "laravel", "symfony",
            "gin", "echo", "fiber", "fastify", "nestjs", "koa", "hapi", "phoenix", "actix",
            "rocket", "axum", "graphql", "rest", "restful", "api", "microservices", "grpc",
            "websocket", "socket.io", "rabbitmq", "kafka", "celery", "sidekiq", "oauth", "jwt",
            "authentication", "authorization",
        ],
    ),
    (
        "databases",
        &[
            "sql", "postgresql", "postgres", "mysql", "mariadb", "sqlite", "mongodb", "mongo",
            "redis", "elasticsearch", "elastic", "dynamodb", "cassandra", "couchdb", "couchbase",
            "neo4j", "oracle", "sql server", "mssql", "firebase", "firestore", "supabase",
            "prisma", "sequelize", "typeorm", "sqlalchemy", "mongoose", "drizzle", "knex",
            "hasura", "timescaledb", "influxdb", "clickhouse", "cockroachdb", "planetscale",
        ],
    ),
    (
        "cloud",
        &[
            "aws", "amazon web services", "azure", "microsoft azure", "gcp", "google cloud",
            "google cloud platform", "heroku", "vercel", "netlify", "cloudflare",
            "digital ocean", "linode", "vultr", "render", "railway", "fly.io", "ec2", "s3",
            "lambda", "cloudfront", "route53", "rds", "ecs", "eks", "fargate",
            "elastic beanstalk", "api gateway", "sqs", "sns", "kinesis", "step functions",
        ],
    ),
    (
        "devops",
        &[
            "docker", "kubernetes", "k8s", "terraform", "ansible", "puppet", "chef", "vagrant",
            "packer", "helm", "istio", "envoy", "jenkins", "github actions", "gitlab ci",
            "circleci", "travis ci", "azure devops", "bitbucket pipelines", "argo cd", "flux",
            "ci/cd", "continuous integration", "continuous deployment", "prometheus", "grafana",
            "datadog", "new relic", "splunk", "elk", "logstash", "kibana", "cloudwatch",
            "pagerduty", "nginx", "apache", "haproxy", "traefik", "caddy",
        ],
    ),
    (
        "data_science",
        &[
            "machine learning", "ml", "deep learning", "dl", "neural networks", "tensorflow",
            "pytorch", "keras", "scikit-learn", "sklearn", "pandas", "numpy", "scipy",
            "matplotlib", "seaborn", "plotly", "jupyter", "jupyter notebook", "colab",
            "databricks", "spark", "pyspark", "hadoop", "hive", "presto", "trino", "airflow",
            "luigi", "dagster", "prefect", "mlflow", "dbt", "looker", "tableau", "power bi",
            "metabase", "superset", "nlp", "natural language processing", "computer vision",
            "cv", "transformers", "huggingface", "langchain", "openai", "gpt", "llm",
            "large language models", "rag", "vector database", "pinecone", "weaviate", "milvus",
            "chromadb",
        ],
    ),
    (
        "mobile",
        &[
            "ios", "android", "react native", "flutter", "xamarin", "swift", "swiftui", "uikit",
            "kotlin", "jetpack compose", "cordova", "ionic", "capacitor", "expo", "nativescript",
            "mobile development", "app development",
        ],
    ),
    (
        "testing",
        &[
            "testing", "unit testing", "integration testing", "e2e testing", "tdd",
            "test-driven development", "bdd", "behavior-driven", "jest", "mocha", "chai",
            "jasmine", "pytest", "unittest", "rspec", "junit", "testng", "selenium", "puppeteer",
            "cypress", "playwright", "detox", "appium", "postman", "insomnia", "api testing",
            "load testing", "jmeter", "locust", "k6", "artillery",
        ],
    ),
    (
        "security",
        &[
            "security", "cybersecurity", "infosec", "appsec", "owasp", "penetration testing",
            "pen testing", "vulnerability", "encryption", "ssl", "tls", "https", "certificates",
            "authentication", "authorization", "oauth", "saml", "sso", "identity management",
            "iam", "rbac", "abac", "soc2", "gdpr", "hipaa", "pci", "compliance", "vault",
            "secrets management", "key management",
        ],
    ),
    (
        "tools",
        &[
            "git", "github", "gitlab", "bitbucket", "svn", "linux", "unix", "bash", "shell",
            "powershell", "zsh", "vim", "neovim", "emacs", "vscode", "visual studio", "intellij",
            "pycharm", "webstorm", "eclipse", "agile", "scrum", "kanban", "safe", "lean", "jira",
            "confluence", "notion", "asana", "trello", "slack", "teams", "zoom", "figma", "miro",
            "postman", "swagger", "openapi", "api documentation",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership", "management", "mentoring", "coaching", "communication",
            "collaboration", "teamwork", "problem solving", "critical thinking", "analytical",
            "project management", "product management", "stakeholder", "presentation",
            "documentation", "technical writing", "cross-functional", "remote work",
            "distributed teams",
        ],
    ),
];

lazy_static! {
    /// Every skill exactly once, in table order.
    static ref ALL_SKILLS: Vec<&'static str> = {
        let mut seen = HashSet::new();
        TECH_SKILLS
            .iter()
            .flat_map(|(_, skills)| skills.iter().copied())
            .filter(|skill| seen.insert(*skill))
            .collect()
    };
}

/// The flattened, de-duplicated skill list.
pub fn all_skills() -> &'static [&'static str] {
    &ALL_SKILLS
}

/// Returns every taxonomy skill that occurs as a whole word in `text`, in taxonomy order.
pub fn find_skills(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    ALL_SKILLS
        .iter()
        .copied()
        .filter(|skill| contains_whole_word(&lower, skill))
        .collect()
}

/// Category of a skill (first category that lists it), case-insensitive.
pub fn skill_category(skill: &str) -> Option<&'static str> {
    let skill_lower = skill.trim().to_lowercase();
    TECH_SKILLS
        .iter()
        .find(|(_, skills)| skills.contains(&skill_lower.as_str()))
        .map(|(category, _)| *category)
}

/// Up to 10 other skills from the same category.
pub fn related_skills(skill: &str) -> Vec<&'static str> {
    let skill_lower = skill.trim().to_lowercase();
    let Some(category) = skill_category(&skill_lower) else {
        return Vec::new();
    };
    TECH_SKILLS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, skills)| {
            skills
                .iter()
                .copied()
                .filter(|s| *s != skill_lower)
                .take(10)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_skills_has_no_duplicates() {
        let skills = all_skills();
        let unique: HashSet<_> = skills.iter().collect();
        assert_eq!(unique.len(), skills.len());
        assert!(skills.contains(&"python"));
        assert!(skills.contains(&"kubernetes"));
    }

    #[test]
    fn test_all_skills_are_lower_case() {
        assert!(all_skills().iter().all(|s| *s == s.to_lowercase()));
    }

    #[test]
    fn test_find_skills_whole_words_only() {
        let found = find_skills("Built services in Python and PostgreSQL on AWS");
        assert!(found.contains(&"python"));
        assert!(found.contains(&"postgresql"));
        assert!(found.contains(&"aws"));
        assert!(!found.contains(&"sql"), "sql must not match inside postgresql");
    }

    #[test]
    fn test_find_skills_symbol_names() {
        let found = find_skills("C++ and C# with a CI/CD pipeline on .NET");
        assert!(found.contains(&"c++"));
        assert!(found.contains(&"c#"));
        assert!(found.contains(&"ci/cd"));
        assert!(found.contains(&".net"));
    }

    #[test]
    fn test_skill_category_lookup() {
        assert_eq!(skill_category("Docker"), Some("devops"));
        assert_eq!(skill_category("react"), Some("frontend"));
        assert_eq!(skill_category("swift"), Some("languages"));
        assert_eq!(skill_category("underwater basket weaving"), None);
    }

    #[test]
    fn test_related_skills_same_category_excluding_self() {
        let related = related_skills("Python");
        assert!(!related.is_empty());
        assert!(related.len() <= 10);
        assert!(!related.contains(&"python"));
        assert!(related.contains(&"javascript"));
    }

    #[test]
    fn test_related_skills_unknown_is_empty() {
        assert!(related_skills("origami").is_empty());
    }
}
