//! Static term tables used by the heuristic scorer.
//!
//! Declaration order matters: extracted keyword sets preserve it.

pub const SKILL_TERMS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c#",
    "sql",
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "mysql",
    "postgresql",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "machine learning",
    "ai",
    "data analysis",
    "excel",
    "powerbi",
    "tableau",
    "agile",
    "scrum",
    "project management",
    "leadership",
    "communication",
    "problem solving",
    "teamwork",
    "analytical",
    "creative",
    "detail-oriented",
];

pub const EXPERIENCE_TERMS: &[&str] = &[
    "years",
    "experience",
    "worked",
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "designed",
    "built",
    "maintained",
    "optimized",
    "improved",
    "collaborated",
    "coordinated",
    "supervised",
    "trained",
    "mentored",
    "achieved",
    "delivered",
    "successful",
    "project",
];

pub const EDUCATION_TERMS: &[&str] = &[
    "degree",
    "bachelor",
    "master",
    "phd",
    "diploma",
    "certificate",
    "university",
    "college",
    "education",
    "graduated",
    "gpa",
    "honors",
    "cum laude",
    "magna cum laude",
    "summa cum laude",
    "computer science",
    "engineering",
    "business",
    "marketing",
    "finance",
    "accounting",
];

/// Words that signal achievement-oriented phrasing. Each counts once.
pub const ACHIEVEMENT_WORDS: &[&str] = &[
    "achieved",
    "increased",
    "improved",
    "reduced",
    "saved",
    "generated",
    "award",
    "recognition",
];
