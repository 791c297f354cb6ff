//!
//! The dataset size category.
//!

///
/// The dataset size category.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Datasets with a handful of short sequences.
    Small,
    /// Medium-sized datasets.
    Medium,
    /// Datasets stressing the aligner.
    Large,
}

impl Category {
    ///
    /// All categories, in the order they are searched.
    ///
    pub const fn all() -> [Self; 3] {
        [Self::Small, Self::Medium, Self::Large]
    }

    ///
    /// Returns the directory name of the category.
    ///
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            string => anyhow::bail!(
                "Unknown dataset category `{string}`. Supported categories: {}",
                Self::all()
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Category;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Category::from_str("Medium").expect("Valid"), Category::Medium);
    }

    #[test]
    fn rejects_unknown() {
        let error = Category::from_str("huge").expect_err("Must fail");
        assert!(error.to_string().contains("small, medium, large"));
    }
}
