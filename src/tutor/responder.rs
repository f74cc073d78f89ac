//! Keyword-matched tutor replies.
//!
//! Rules are evaluated in a fixed order over the lowercased message and the
//! first match wins; a message mentioning both loops and inheritance gets the
//! inheritance reply. No NLP, no state.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CodeExample {
    pub language: String,
    pub code: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorReply {
    pub message: String,
    pub code_examples: Vec<CodeExample>,
    pub concepts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Inheritance,
    Loops,
    Memory,
    Functions,
}

const RULES: [Rule; 4] = [Rule::Inheritance, Rule::Loops, Rule::Memory, Rule::Functions];

impl Rule {
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Rule::Inheritance => &["inheritance", "inherit"],
            Rule::Loops => &["loop", "for", "while"],
            Rule::Memory => &["memory", "stack", "heap"],
            Rule::Functions => &["function", "method"],
        }
    }

    fn reply(self) -> TutorReply {
        match self {
            Rule::Inheritance => TutorReply {
                message: "Inheritance is a fundamental concept in object-oriented programming. \
                          It allows a class to inherit properties and methods from another class. \
                          The class that inherits is called a subclass or derived class, while the \
                          class being inherited from is called a superclass or base class."
                    .to_string(),
                code_examples: vec![CodeExample {
                    language: "python".to_string(),
                    code: "class Animal:\n    def __init__(self, name):\n        self.name = name\n    \n    def speak(self):\n        pass\n\nclass Dog(Animal):\n    def speak(self):\n        return f\"{self.name} says Woof!\"".to_string(),
                    explanation: "Dog class inherits from Animal class and overrides the speak method"
                        .to_string(),
                }],
                concepts: tags(&["Inheritance", "Method Overriding", "Base Classes"]),
            },
            Rule::Loops => TutorReply {
                message: "Loops are control structures that repeat a block of code. The most \
                          common types are 'for' loops (iterate over sequences) and 'while' loops \
                          (repeat while condition is true)."
                    .to_string(),
                code_examples: vec![CodeExample {
                    language: "python".to_string(),
                    code: "# For loop\nfor i in range(5):\n    print(f\"Number: {i}\")\n\n# While loop\ncount = 0\nwhile count < 5:\n    print(f\"Count: {count}\")\n    count += 1".to_string(),
                    explanation: "For loop iterates through a range, while loop continues until condition becomes false"
                        .to_string(),
                }],
                concepts: tags(&["For Loops", "While Loops", "Iteration"]),
            },
            Rule::Memory => TutorReply {
                message: "Memory management involves two main areas: Stack and Heap. Stack stores \
                          local variables and function calls (fast, automatic cleanup). Heap stores \
                          dynamic objects (slower, manual or garbage collected cleanup)."
                    .to_string(),
                code_examples: vec![CodeExample {
                    language: "python".to_string(),
                    code: "def example():\n    x = 10  # Stack: local variable\n    y = [1, 2, 3, 4, 5]  # Heap: list object\n    return y".to_string(),
                    explanation: "Local variable x is stored on stack, list y is stored on heap"
                        .to_string(),
                }],
                concepts: tags(&["Stack Memory", "Heap Memory", "Memory Management"]),
            },
            Rule::Functions => TutorReply {
                message: "Functions are reusable blocks of code that perform specific tasks. They \
                          can accept parameters (inputs) and return values (outputs). This promotes \
                          code reusability and organization."
                    .to_string(),
                code_examples: vec![CodeExample {
                    language: "python".to_string(),
                    code: "def calculate_area(length, width):\n    \"\"\"Calculate rectangle area\"\"\"\n    area = length * width\n    return area\n\n# Usage\nresult = calculate_area(5, 3)\nprint(f\"Area: {result}\")".to_string(),
                    explanation: "Function takes parameters, performs calculation, and returns result"
                        .to_string(),
                }],
                concepts: tags(&["Functions", "Parameters", "Return Values"]),
            },
        }
    }
}

fn tags(concepts: &[&str]) -> Vec<String> {
    concepts.iter().map(|c| c.to_string()).collect()
}

fn fallback() -> TutorReply {
    TutorReply {
        message: "I'm here to help you learn programming! You can ask me about concepts like \
                  inheritance, loops, memory management, functions, data structures, algorithms, \
                  and more. What specific topic would you like to explore?"
            .to_string(),
        code_examples: Vec::new(),
        concepts: tags(&["Programming Concepts", "Learning", "Education"]),
    }
}

/// Produce a reply for a free-text message. The optional context string is
/// accepted but not consulted.
pub fn respond(message: &str, _context: Option<&str>) -> TutorReply {
    let lowered = message.to_lowercase();
    for rule in RULES {
        if rule.keywords().iter().any(|kw| lowered.contains(kw)) {
            return rule.reply();
        }
    }
    fallback()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inheritance_question_gets_inheritance_reply() {
        let reply = respond("Can you explain inheritance?", None);
        assert!(reply.message.contains("Inheritance"));
        assert!(!reply.code_examples.is_empty());
        assert!(reply.concepts.contains(&"Inheritance".to_string()));
    }

    #[test]
    fn unknown_topic_gets_fallback_with_no_examples() {
        let reply = respond("hello", None);
        assert!(reply.code_examples.is_empty());
        assert!(reply.message.contains("help you learn"));
    }

    #[test]
    fn first_match_wins_over_later_rules() {
        // Mentions both loops and inheritance; the inheritance rule is first.
        let reply = respond("is a loop related to inheritance?", None);
        assert!(reply.message.contains("Inheritance"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = respond("WHAT IS A WHILE LOOP?", None);
        assert!(reply.message.contains("Loops"));
    }

    #[test]
    fn memory_and_function_rules_fire() {
        assert!(respond("stack vs heap?", None).message.contains("Memory"));
        assert!(respond("what is a method?", None)
            .message
            .contains("Functions"));
    }

    #[test]
    fn context_is_ignored() {
        let with = respond("hello", Some("previous lesson about loops"));
        let without = respond("hello", None);
        assert_eq!(with.message, without.message);
    }

    #[test]
    fn reply_serializes_camel_case() {
        let json = serde_json::to_value(respond("explain inheritance", None)).unwrap();
        assert!(json.get("codeExamples").is_some());
        assert!(json.get("code_examples").is_none());
    }
}
