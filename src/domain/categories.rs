//! Category decision tree.
//!
//! A tree is an ordered table of `(category, content)` branches. The first branch whose
//! category matches the haystack wins; otherwise the tree's default content is used.
//! Adding a category means adding a row, never editing an existing branch.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Mobile,
    Web,
    DataMl,
    Cloud,
    General,
}

impl Category {
    /// Lower-case substrings that select this category.
    pub fn terms(self) -> &'static [&'static str] {
        match self {
            Category::Mobile => &["android", "kotlin", "mobile"],
            Category::Web => &["web", "javascript", "react", "frontend"],
            Category::DataMl => &["data", "python", "ml", "ai", "machine learning"],
            Category::Cloud => &["cloud", "aws", "azure"],
            Category::General => &[],
        }
    }

    /// Case-insensitive substring match against any of `haystacks`.
    pub fn matches(self, haystacks: &[&str]) -> bool {
        let terms = self.terms();
        haystacks.iter().any(|text| {
            let lower = text.to_lowercase();
            terms.iter().any(|term| lower.contains(term))
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Mobile => "mobile",
            Category::Web => "web",
            Category::DataMl => "data/ml",
            Category::Cloud => "cloud",
            Category::General => "general",
        };
        f.write_str(name)
    }
}

/// One row of a decision tree.
#[derive(Debug)]
pub struct Branch<T: 'static> {
    pub category: Category,
    pub content: T,
}

/// Ordered branches plus the content used when nothing matches.
#[derive(Debug)]
pub struct DecisionTree<T: 'static> {
    pub branches: &'static [Branch<T>],
    pub default: T,
}

impl<T: 'static> DecisionTree<T> {
    /// First matching branch in table order, or `(Category::General, default)`.
    pub fn select(&self, haystacks: &[&str]) -> (Category, &T) {
        self.branches
            .iter()
            .find(|b| b.category.matches(haystacks))
            .map(|b| (b.category, &b.content))
            .unwrap_or((Category::General, &self.default))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.branches.iter().map(|b| b.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TREE: DecisionTree<&str> = DecisionTree {
        branches: &[
            Branch {
                category: Category::Mobile,
                content: "m",
            },
            Branch {
                category: Category::Web,
                content: "w",
            },
            Branch {
                category: Category::DataMl,
                content: "d",
            },
        ],
        default: "g",
    };

    #[test]
    fn test_first_match_wins() {
        assert_eq!(TREE.select(&["Android, Python"]), (Category::Mobile, &"m"));
        assert_eq!(TREE.select(&["Python, React"]), (Category::Web, &"w"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(Category::Web.matches(&["JAVASCRIPT"]));
        assert!(Category::DataMl.matches(&["Machine Learning"]));
        assert!(Category::Cloud.matches(&["Azure"]));
        assert!(!Category::Cloud.matches(&["Kotlin"]));
    }

    #[test]
    fn test_any_haystack_can_match() {
        assert_eq!(
            TREE.select(&["Docker", "Data Scientist"]),
            (Category::DataMl, &"d")
        );
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(TREE.select(&["Docker, Git"]), (Category::General, &"g"));
        assert_eq!(TREE.select(&[]), (Category::General, &"g"));
    }

    #[test]
    fn test_general_never_matches() {
        assert!(!Category::General.matches(&["anything at all"]));
    }
}
