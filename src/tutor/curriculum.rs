//! Pre-authored curricula, keyed by normalized language name.
//!
//! The tables are immutable and built once at first use. `generate_path`
//! never fails: a language outside the table gets a generic single-module
//! curriculum with the language name spliced in.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;

pub struct ModuleTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub order: i32,
    pub topics: &'static [&'static str],
    pub subtopics: &'static [&'static str],
    pub examples: &'static [&'static str],
    pub interview_questions: &'static [&'static str],
}

pub struct CurriculumTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub modules: &'static [ModuleTemplate],
}

/// One module of a generated curriculum; serialized verbatim into the
/// module's stored content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedModule {
    pub title: String,
    pub description: String,
    pub order: i32,
    pub topics: Vec<String>,
    pub subtopics: Vec<String>,
    pub examples: Vec<String>,
    pub interview_questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPath {
    pub title: String,
    pub description: String,
    pub language: String,
    pub difficulty: String,
    pub modules: Vec<GeneratedModule>,
}

static PYTHON_MODULES: [ModuleTemplate; 4] = [
    ModuleTemplate {
        title: "Python Fundamentals",
        description: "Variables, data types, control structures, and functions",
        order: 1,
        topics: &["Variables & Data Types", "Control Flow", "Functions", "Error Handling"],
        subtopics: &["strings, numbers, lists", "if/else, loops", "parameters, scope", "try/except blocks"],
        examples: &["name = 'Alice'", "for i in range(10):", "def greet(name):", "try: int('abc')"],
        interview_questions: &[
            "What are Python's basic data types?",
            "Explain list vs tuple differences",
            "How does Python handle memory management?",
        ],
    },
    ModuleTemplate {
        title: "Object-Oriented Programming",
        description: "Classes, inheritance, polymorphism, and design patterns",
        order: 2,
        topics: &["Classes & Objects", "Inheritance", "Polymorphism", "Design Patterns"],
        subtopics: &["__init__, methods", "super(), multiple inheritance", "method overriding", "singleton, factory patterns"],
        examples: &["class Person:", "class Student(Person):", "def speak(self):", "@staticmethod"],
        interview_questions: &[
            "Explain inheritance in Python",
            "What is polymorphism?",
            "Describe the MVC pattern",
        ],
    },
    ModuleTemplate {
        title: "Web Development",
        description: "Flask, Django, and REST API development",
        order: 3,
        topics: &["Flask Basics", "Django Framework", "REST APIs", "Database Integration"],
        subtopics: &["routes, templates", "models, views", "JSON responses", "SQLAlchemy, ORM"],
        examples: &["@app.route('/')", "class User(models.Model):", "return jsonify(data)", "db.session.add(user)"],
        interview_questions: &[
            "Django vs Flask comparison",
            "How to create REST APIs?",
            "Explain ORM benefits",
        ],
    },
    ModuleTemplate {
        title: "Advanced Concepts",
        description: "Decorators, generators, async programming, and testing",
        order: 4,
        topics: &["Decorators", "Generators", "Async/Await", "Testing"],
        subtopics: &["@decorator syntax", "yield keyword", "asyncio library", "unittest, pytest"],
        examples: &["@functools.wraps", "yield value", "async def fetch():", "def test_function():"],
        interview_questions: &[
            "How do decorators work?",
            "Explain generators vs lists",
            "What is async programming?",
        ],
    },
];

static JAVASCRIPT_MODULES: [ModuleTemplate; 2] = [
    ModuleTemplate {
        title: "JavaScript Fundamentals",
        description: "ES6+ syntax, functions, and DOM manipulation",
        order: 1,
        topics: &["ES6+ Syntax", "Functions", "DOM Manipulation", "Event Handling"],
        subtopics: &["let/const, arrow functions", "closures, callbacks", "querySelector, innerHTML", "addEventListener"],
        examples: &[
            "const name = 'John'",
            "const add = (a, b) => a + b",
            "document.querySelector('.btn')",
            "btn.addEventListener('click')",
        ],
        interview_questions: &[
            "Difference between let, const, var?",
            "Explain closures",
            "What is event bubbling?",
        ],
    },
    ModuleTemplate {
        title: "React Fundamentals",
        description: "Components, JSX, state, and props",
        order: 2,
        topics: &["Components", "JSX", "State & Props", "Event Handling"],
        subtopics: &["functional components", "JSX syntax rules", "useState hook", "onClick handlers"],
        examples: &[
            "function App() {",
            "<div className='container'>",
            "const [count, setCount] = useState(0)",
            "onClick={() => setCount(count + 1)}",
        ],
        interview_questions: &[
            "What is JSX?",
            "Difference between state and props?",
            "How do React hooks work?",
        ],
    },
];

static JAVA_MODULES: [ModuleTemplate; 1] = [ModuleTemplate {
    title: "Core Java",
    description: "OOP principles, collections, and exception handling",
    order: 1,
    topics: &["OOP Principles", "Collections Framework", "Exception Handling", "Generics"],
    subtopics: &["inheritance, polymorphism", "ArrayList, HashMap", "try-catch-finally", "<T> generic types"],
    examples: &[
        "public class Student extends Person",
        "List<String> names = new ArrayList<>()",
        "try { } catch (Exception e) { }",
        "public <T> void process(T item)",
    ],
    interview_questions: &[
        "Explain Java inheritance",
        "ArrayList vs LinkedList?",
        "Checked vs unchecked exceptions?",
    ],
}];

static PYTHON: CurriculumTemplate = CurriculumTemplate {
    title: "Complete Python Development",
    description: "Master Python from basics to advanced web development",
    modules: &PYTHON_MODULES,
};

static JAVASCRIPT: CurriculumTemplate = CurriculumTemplate {
    title: "Modern JavaScript & React",
    description: "Learn JavaScript ES6+ and React for modern web development",
    modules: &JAVASCRIPT_MODULES,
};

static JAVA: CurriculumTemplate = CurriculumTemplate {
    title: "Enterprise Java Development",
    description: "Build robust enterprise applications with Java and Spring",
    modules: &JAVA_MODULES,
};

lazy_static! {
    static ref CURRICULA: HashMap<&'static str, &'static CurriculumTemplate> = {
        let mut m = HashMap::new();
        m.insert("python", &PYTHON);
        m.insert("javascript", &JAVASCRIPT);
        m.insert("java", &JAVA);
        m
    };
}

fn owned(strings: &[&str]) -> Vec<String> {
    strings.iter().map(|s| s.to_string()).collect()
}

/// Build a curriculum for `language`. Lookup is case-insensitive; the
/// request's `experience` becomes the path's difficulty either way.
pub fn generate_path(language: &str, experience: &str) -> GeneratedPath {
    match CURRICULA.get(language.to_lowercase().as_str()) {
        Some(template) => GeneratedPath {
            title: template.title.to_string(),
            description: template.description.to_string(),
            language: language.to_string(),
            difficulty: experience.to_string(),
            modules: template
                .modules
                .iter()
                .map(|m| GeneratedModule {
                    title: m.title.to_string(),
                    description: m.description.to_string(),
                    order: m.order,
                    topics: owned(m.topics),
                    subtopics: owned(m.subtopics),
                    examples: owned(m.examples),
                    interview_questions: owned(m.interview_questions),
                })
                .collect(),
        },
        None => GeneratedPath {
            title: format!("{} Learning Path", language),
            description: format!("Comprehensive {} programming course", language),
            language: language.to_string(),
            difficulty: experience.to_string(),
            modules: vec![GeneratedModule {
                title: format!("{} Basics", language),
                description: format!("Introduction to {} programming", language),
                order: 1,
                topics: owned(&["Syntax", "Variables", "Functions", "Control Flow"]),
                subtopics: owned(&[
                    "basic syntax",
                    "data types",
                    "function definitions",
                    "loops and conditionals",
                ]),
                examples: owned(&[
                    "// Basic syntax example",
                    "var x = 10;",
                    "function hello() {}",
                    "if (condition) {}",
                ]),
                interview_questions: vec![
                    format!("What is {} used for?", language),
                    "Explain basic syntax".to_string(),
                    "How to define functions?".to_string(),
                ],
            }],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_languages_have_contiguous_orders() {
        for language in ["python", "javascript", "java"] {
            let path = generate_path(language, "intermediate");
            assert!(!path.modules.is_empty(), "{} has no modules", language);
            for (i, module) in path.modules.iter().enumerate() {
                assert_eq!(module.order, (i + 1) as i32, "{} order gap", language);
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = generate_path("python", "beginner");
        let mixed = generate_path("PyThOn", "beginner");
        assert_eq!(lower.title, mixed.title);
        assert_eq!(lower.modules.len(), mixed.modules.len());
        // The requested spelling is echoed back
        assert_eq!(mixed.language, "PyThOn");
    }

    #[test]
    fn difficulty_comes_from_the_request() {
        let path = generate_path("java", "beginner");
        assert_eq!(path.difficulty, "beginner");
    }

    #[test]
    fn unsupported_language_gets_generic_single_module() {
        let path = generate_path("cobol", "advanced");
        assert_eq!(path.modules.len(), 1);
        assert!(path.modules[0].title.contains("cobol"));
        assert_eq!(path.modules[0].order, 1);
        assert!(path.modules[0]
            .interview_questions
            .iter()
            .any(|q| q.contains("cobol")));
    }

    #[test]
    fn generated_module_serializes_camel_case() {
        let path = generate_path("python", "intermediate");
        let json = serde_json::to_value(&path.modules[0]).unwrap();
        assert!(json.get("interviewQuestions").is_some());
        assert!(json.get("interview_questions").is_none());
    }
}
