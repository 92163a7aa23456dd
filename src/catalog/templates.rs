//! Starter code templates for the lab editor.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub body: &'static str,
}

pub fn builtin_templates() -> Vec<CodeTemplate> {
    vec![
        CodeTemplate {
            id: "1",
            name: "JavaScript Function",
            description: "Basic function template",
            body: "function greet(name) {\n  return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"world\"));\n",
        },
        CodeTemplate {
            id: "2",
            name: "React Component",
            description: "Functional React component",
            body: "import { useState } from \"react\";\n\nconst Counter = () => {\n  const [count, setCount] = useState(0);\n  return <button onClick={() => setCount(count + 1)}>{count}</button>;\n};\n\nexport default Counter;\n",
        },
        CodeTemplate {
            id: "3",
            name: "Python Class",
            description: "Object-oriented Python class",
            body: "class Stack:\n    def __init__(self):\n        self.items = []\n\n    def push(self, item):\n        self.items.append(item)\n\n    def pop(self):\n        return self.items.pop()\n",
        },
        CodeTemplate {
            id: "4",
            name: "HTML Form",
            description: "Interactive form with validation",
            body: "<form id=\"signup\">\n  <input type=\"email\" name=\"email\" required />\n  <button type=\"submit\">Sign up</button>\n</form>\n",
        },
    ]
}

/// Index of the template after `current`, wrapping around. `None` starts at the first.
pub fn next_template_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        Some(i) => (i + 1) % len,
        None => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_template_wraps() {
        assert_eq!(next_template_index(None, 4), Some(0));
        assert_eq!(next_template_index(Some(2), 4), Some(3));
        assert_eq!(next_template_index(Some(3), 4), Some(0));
        assert_eq!(next_template_index(None, 0), None);
    }

    #[test]
    fn test_templates_have_bodies() {
        assert!(builtin_templates().iter().all(|t| !t.body.is_empty()));
    }
}
